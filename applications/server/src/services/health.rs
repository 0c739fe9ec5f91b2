/// Process health monitoring
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, System};

/// Resident-set ceiling for the readiness probe, in bytes
const READY_MEMORY_LIMIT: u64 = 500 * 1024 * 1024;

/// Memory figures for the running process and its host
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemoryFigures {
    /// Resident set size of this process in bytes
    pub resident: u64,
    /// Virtual memory size of this process in bytes
    pub virtual_memory: u64,
    /// Total system memory in bytes
    pub system_total: u64,
    /// Used system memory in bytes
    pub system_used: u64,
}

/// Point-in-time metrics snapshot; nothing is retained between calls
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Seconds since the monitor was constructed
    pub uptime: u64,
    /// Process and system memory figures
    pub memory: MemoryFigures,
    /// CPU usage of this process as a percentage
    pub cpu_usage: f32,
    /// Process identifier
    pub pid: u32,
    /// Crate version
    pub version: &'static str,
    /// Operating system identifier
    pub platform: &'static str,
    /// CPU architecture identifier
    pub arch: &'static str,
}

/// Readiness probe breakdown. The checks are advisory heuristics, not
/// correctness-critical.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReadinessChecks {
    /// Process resident memory is below the fixed ceiling
    pub memory: bool,
    /// The process has been up for a measurable amount of time
    pub uptime: bool,
}

impl ReadinessChecks {
    /// Whether every check passed
    pub fn all_passed(&self) -> bool {
        self.memory && self.uptime
    }
}

/// Observes process uptime and resource usage.
///
/// Purely observational: it records the start instant at construction and
/// queries the system on demand, never touching any other service.
pub struct HealthMonitor {
    started_at: Instant,
}

impl HealthMonitor {
    /// Create a monitor anchored at the current instant
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Whole seconds since the monitor was constructed
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Run the readiness checks
    pub fn readiness(&self) -> ReadinessChecks {
        let (memory, _) = probe();
        ReadinessChecks {
            memory: memory.resident < READY_MEMORY_LIMIT,
            uptime: self.started_at.elapsed().as_secs_f64() > 0.0,
        }
    }

    /// Collect a metrics snapshot for the current instant
    pub fn metrics(&self) -> MetricsSnapshot {
        let (memory, cpu_usage) = probe();
        MetricsSnapshot {
            uptime: self.uptime_secs(),
            memory,
            cpu_usage,
            pid: std::process::id(),
            version: env!("CARGO_PKG_VERSION"),
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self::new()
    }
}

fn probe() -> (MemoryFigures, f32) {
    let mut system = System::new();
    system.refresh_all();

    let (resident, virtual_memory, cpu_usage) = system
        .process(Pid::from_u32(std::process::id()))
        .map_or((0, 0, 0.0), |process| {
            (process.memory(), process.virtual_memory(), process.cpu_usage())
        });

    (
        MemoryFigures {
            resident,
            virtual_memory,
            system_total: system.total_memory(),
            system_used: system.used_memory(),
        },
        cpu_usage,
    )
}
