//! Shared constants and invariants

// Simple web token grammar
pub const SWT_AUDIENCE_FIELD: &str = "Audience";
pub const SWT_EXPIRES_ON_FIELD: &str = "ExpiresOn";
pub const SWT_KEY_VALUE_SEPARATOR: &str = "=";
pub const SWT_PAIR_SEPARATOR: &str = "&";

pub const DEFAULT_CONFIG_PATH: &str = "security-token.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";
