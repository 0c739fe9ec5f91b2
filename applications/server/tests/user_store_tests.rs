/// User store service tests
/// Exercises identity assignment, uniqueness, timestamps, and concurrent writers
use roster_core::{
    types::{CreateUser, Role, UpdateUser, UserId},
    RosterError,
};
use roster_server::services::UserStore;
use std::sync::Arc;

fn create_payload(email: &str, name: &str, role: Option<Role>) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        name: name.to_string(),
        role,
    }
}

fn update_payload(email: &str, name: &str, role: Option<Role>) -> UpdateUser {
    UpdateUser {
        email: email.to_string(),
        name: name.to_string(),
        role,
    }
}

/// Created records round-trip through get with every field intact
#[tokio::test]
async fn create_then_get_returns_equal_record() {
    let store = UserStore::new();

    let created = store
        .create(create_payload("ann@example.com", "Ann", Some(Role::Admin)))
        .await
        .unwrap();
    let fetched = store.get(&created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.email, "ann@example.com");
    assert_eq!(fetched.role, Role::Admin);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

/// Role defaults to `user` when the payload omits it
#[tokio::test]
async fn create_defaults_role_to_user() {
    let store = UserStore::new();

    let user = store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();

    assert_eq!(user.role, Role::User);
}

/// A second create with the same email is rejected
#[tokio::test]
async fn create_rejects_duplicate_email() {
    let store = UserStore::new();

    store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    let err = store
        .create(create_payload("ann@example.com", "Other Ann", None))
        .await
        .unwrap_err();

    assert_eq!(err, RosterError::DuplicateEmail("ann@example.com".to_string()));
    assert_eq!(store.list().await.len(), 1);
}

/// Uniqueness is judged case-insensitively
#[tokio::test]
async fn duplicate_check_ignores_email_case() {
    let store = UserStore::new();

    store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    let err = store
        .create(create_payload("ANN@EXAMPLE.COM", "Shouty Ann", None))
        .await
        .unwrap_err();

    assert!(matches!(err, RosterError::DuplicateEmail(_)));
}

/// Lookup of an unknown ID signals not found
#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let store = UserStore::new();
    let id = UserId::generate();

    let err = store.get(&id).await.unwrap_err();

    assert_eq!(err, RosterError::UserNotFound(id));
}

/// Update replaces email and name but never identity or creation time
#[tokio::test]
async fn update_preserves_identity_and_creation_time() {
    let store = UserStore::new();

    let created = store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    let updated = store
        .update(
            &created.id,
            update_payload("ann.b@example.com", "Ann B", Some(Role::Moderator)),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.email, "ann.b@example.com");
    assert_eq!(updated.name, "Ann B");
    assert_eq!(updated.role, Role::Moderator);
    assert!(updated.updated_at >= created.updated_at);
}

/// An omitted role keeps the stored value
#[tokio::test]
async fn update_keeps_role_when_omitted() {
    let store = UserStore::new();

    let created = store
        .create(create_payload("ann@example.com", "Ann", Some(Role::Admin)))
        .await
        .unwrap();
    let updated = store
        .update(&created.id, update_payload("ann@example.com", "Ann Again", None))
        .await
        .unwrap();

    assert_eq!(updated.role, Role::Admin);
}

/// Updating to an email held by another live record conflicts
#[tokio::test]
async fn update_rejects_email_held_by_another_user() {
    let store = UserStore::new();

    store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    let bob = store
        .create(create_payload("bob@example.com", "Bob", None))
        .await
        .unwrap();

    let err = store
        .update(&bob.id, update_payload("ann@example.com", "Bob", None))
        .await
        .unwrap_err();

    assert!(matches!(err, RosterError::DuplicateEmail(_)));
}

/// A record may keep its own email across an update
#[tokio::test]
async fn update_allows_keeping_own_email() {
    let store = UserStore::new();

    let created = store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    let updated = store
        .update(&created.id, update_payload("ann@example.com", "Ann Renamed", None))
        .await
        .unwrap();

    assert_eq!(updated.name, "Ann Renamed");
}

/// Updating an unknown ID signals not found before any uniqueness check
#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = UserStore::new();

    store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    let id = UserId::generate();

    let err = store
        .update(&id, update_payload("ann@example.com", "Imposter", None))
        .await
        .unwrap_err();

    assert_eq!(err, RosterError::UserNotFound(id));
}

/// Delete removes the record entirely; every later operation sees not found
#[tokio::test]
async fn delete_then_anything_is_not_found() {
    let store = UserStore::new();

    let created = store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    store.delete(&created.id).await.unwrap();

    assert!(matches!(
        store.get(&created.id).await.unwrap_err(),
        RosterError::UserNotFound(_)
    ));
    assert!(matches!(
        store
            .update(&created.id, update_payload("ann@example.com", "Ann", None))
            .await
            .unwrap_err(),
        RosterError::UserNotFound(_)
    ));
    assert!(matches!(
        store.delete(&created.id).await.unwrap_err(),
        RosterError::UserNotFound(_)
    ));
}

/// A deleted record's email becomes available again
#[tokio::test]
async fn delete_frees_the_email_for_reuse() {
    let store = UserStore::new();

    let created = store
        .create(create_payload("ann@example.com", "Ann", None))
        .await
        .unwrap();
    store.delete(&created.id).await.unwrap();

    let recreated = store
        .create(create_payload("ann@example.com", "New Ann", None))
        .await
        .unwrap();

    assert_ne!(recreated.id, created.id);
}

/// List observes insertion order, also after an order-preserving removal
#[tokio::test]
async fn list_returns_insertion_order() {
    let store = UserStore::new();

    for (email, name) in [
        ("a@example.com", "A"),
        ("b@example.com", "B"),
        ("c@example.com", "C"),
    ] {
        store.create(create_payload(email, name, None)).await.unwrap();
    }

    let users = store.list().await;
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);

    store.delete(&users[1].id).await.unwrap();
    store
        .create(create_payload("d@example.com", "D", None))
        .await
        .unwrap();

    let emails: Vec<String> = store.list().await.into_iter().map(|u| u.email).collect();
    assert_eq!(emails, vec!["a@example.com", "c@example.com", "d@example.com"]);
}

/// Exactly one of many concurrent creates with the same email wins
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_with_same_email_yield_one_success() {
    let store = Arc::new(UserStore::new());

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .create(create_payload("race@example.com", &format!("Racer {i}"), None))
                .await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(RosterError::DuplicateEmail(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.list().await.len(), 1);
}
