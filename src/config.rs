/// Application-level constants
pub const ENGINE_NAME: &str = "Selfcheck";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Input caps applied by the input gate before analysis. Oversized text is
/// truncated, not rejected.
pub const MAX_SYMPTOMS_CHARS: usize = 500;
pub const MAX_ADDITIONAL_INFO_CHARS: usize = 500;
pub const MAX_OTHER_INFO_CHARS: usize = 1000;

/// Default request budget per user for the fixed-window limiter.
pub const MAX_REQUESTS_PER_MINUTE: u32 = 10;

pub fn default_log_filter() -> &'static str {
    "info"
}
