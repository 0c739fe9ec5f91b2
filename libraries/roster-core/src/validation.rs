/// Pure request validation for user payloads and path identifiers.
///
/// Validation never consults the store: email uniqueness is a store concern
/// reported through [`crate::RosterError`], not folded into the violation
/// list. Each entry point either produces a validated payload or the ordered
/// list of field violations (email, then name, then role).
use crate::types::{CreateUser, Role, UpdateUser, UserId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

/// Minimum allowed trimmed display-name length
pub const NAME_MIN_LEN: usize = 2;
/// Maximum allowed trimmed display-name length
pub const NAME_MAX_LEN: usize = 100;

// Syntax only; deliverability is out of scope.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Machine-addressable field name
    pub field: String,

    /// Human-readable reason
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Canonical comparable form of an email address
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Validate a create payload.
///
/// Absent fields are judged by the same rules as present ones, so a missing
/// email or name surfaces as a violation rather than a transport error.
pub fn validate_create(
    email: Option<&str>,
    name: Option<&str>,
    role: Option<&str>,
) -> std::result::Result<CreateUser, Vec<Violation>> {
    let (email, name, role) = validate_fields(email, name, role)?;
    Ok(CreateUser { email, name, role })
}

/// Validate an update payload. Same field rules as
/// [`validate_create`]; email and name are required on every update, only
/// the role may be omitted.
pub fn validate_update(
    email: Option<&str>,
    name: Option<&str>,
    role: Option<&str>,
) -> std::result::Result<UpdateUser, Vec<Violation>> {
    let (email, name, role) = validate_fields(email, name, role)?;
    Ok(UpdateUser { email, name, role })
}

/// Validate a path identifier.
///
/// The returned [`UserId`] carries the canonical hyphenated lowercase form,
/// so a well-formed identifier matches a stored record regardless of the
/// casing it arrived with.
pub fn parse_user_id(raw: &str) -> std::result::Result<UserId, Violation> {
    match Uuid::parse_str(raw) {
        Ok(uuid) => Ok(UserId::new(uuid.to_string())),
        Err(_) => Err(Violation::new("id", "Invalid user ID")),
    }
}

fn validate_fields(
    email: Option<&str>,
    name: Option<&str>,
    role: Option<&str>,
) -> std::result::Result<(String, String, Option<Role>), Vec<Violation>> {
    let mut violations = Vec::new();

    let email = normalize_email(email.unwrap_or_default());
    if !EMAIL_RE.is_match(&email) {
        violations.push(Violation::new("email", "Valid email is required"));
    }

    let name = name.unwrap_or_default().trim().to_string();
    let name_len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
        violations.push(Violation::new(
            "name",
            "Name must be between 2 and 100 characters",
        ));
    }

    let role = match role {
        None => None,
        Some(raw) => match Role::parse(raw) {
            Some(role) => Some(role),
            None => {
                violations.push(Violation::new(
                    "role",
                    "Role must be user, admin, or moderator",
                ));
                None
            }
        },
    };

    if violations.is_empty() {
        Ok((email, name, role))
    } else {
        Err(violations)
    }
}
