//! Environment keys and defaults
//!
//! Centralized location for every key the loader reads, so call sites never
//! spell an env var name inline.

// =============================================================================
// Environment Keys
// =============================================================================

/// Application secret used for signing
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// Debug mode toggle
pub const ENV_DEBUG: &str = "DEBUG";

pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";

/// Comma-separated host names the application will serve
pub const ENV_ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";

/// Single origin permitted to make cross-origin requests
pub const ENV_FRONTEND_ORIGIN: &str = "FRONTEND_ORIGIN";

/// Every key read by one load, in load order.
pub const ALL_KEYS: &[&str] = &[
    ENV_SECRET_KEY,
    ENV_DEBUG,
    ENV_DB_NAME,
    ENV_DB_USER,
    ENV_DB_PASSWORD,
    ENV_DB_HOST,
    ENV_DB_PORT,
    ENV_ALLOWED_HOSTS,
    ENV_FRONTEND_ORIGIN,
];

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_DEBUG: bool = false;

/// Default database host (for development)
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;

// =============================================================================
// Database
// =============================================================================

/// Database backend the settings target
pub const DB_ENGINE: &str = "postgresql";

/// URL scheme used when composing the connection URL
pub const DB_URL_SCHEME: &str = "postgres";

/// Pool upper bound handed to the database runtime
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Pool lower bound handed to the database runtime
pub const DB_MIN_CONNECTIONS: u32 = 1;

/// Connection attempt timeout in seconds
pub const DB_CONNECT_TIMEOUT_SECONDS: u64 = 5;

// =============================================================================
// Redaction
// =============================================================================

/// Placeholder printed in place of secret values
pub const REDACTED: &str = "[REDACTED]";

// =============================================================================
// CORS
// =============================================================================

/// Wildcard accepted in ALLOWED_HOSTS and FRONTEND_ORIGIN
pub const WILDCARD: &str = "*";

/// Request headers allowed on cross-origin requests
pub const CORS_ALLOWED_HEADERS: &[&str] = &[
    "accept",
    "authorization",
    "content-type",
    "origin",
    "user-agent",
    "x-csrftoken",
    "x-requested-with",
];
