//! Application constants
//!
//! Centralized location for all domain-level constants used by the SDK.

// Validation limits applied before a payload leaves the process
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_SUPPORT_COMMENT_LENGTH: usize = 1000;

// Statistics bucketing
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;
