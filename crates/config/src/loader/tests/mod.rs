//! Tests for the configuration loaders.
//!
//! Responsibilities:
//! - Test file loading across all four formats against shared fixtures.
//! - Test environment loading through map sources and the process
//!   environment.
//! - Test `.env` loading end to end.
//!
//! Does NOT handle:
//! - Variable parsing edge cases (tested in `env.rs` unit tests).
//! - Overlay resolution details (tested in `raw.rs` unit tests).
//!
//! Invariants:
//! - Tests that touch the process environment take `env_lock()` and run
//!   under `serial_test` to prevent cross-test contamination.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


use crate::types::{DatabaseEngine, ServiceKind};

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Remove every variable the loaders read, so a test observes only what
/// it sets itself.
pub fn clear_config_env() {
    const FIXED: [&str; 8] = [
        "SERVER_HOST",
        "SERVER_PORT",
        "SERVER_ALLOWED_ORIGINS",
        "TOKEN_SECRET",
        "TOKEN_MAX_AGE",
        "ENVIRONMENT",
        "SERVICE",
        "SETTINGS",
    ];
    for name in FIXED {
        unsafe {
            std::env::remove_var(name);
        }
    }
    for engine in DatabaseEngine::ALL {
        let prefix = engine.env_prefix();
        for suffix in [
            "HOST",
            "PORT",
            "USER",
            "PASSWORD",
            "DATABASE",
            "MIGRATIONS_PATH",
        ] {
            unsafe {
                std::env::remove_var(format!("{prefix}_{suffix}"));
            }
        }
    }
    for kind in ServiceKind::ALL {
        let prefix = kind.env_prefix();
        for suffix in ["ENABLED", "HOST", "TOKEN"] {
            unsafe {
                std::env::remove_var(format!("{prefix}_{suffix}"));
            }
        }
    }
}
