//! Unified exit codes for the Strata CLI.
//! These codes are part of the public contract and kept stable for scripting.

pub const SUCCESS: i32 = 0;
pub const TESTS_FAILED: i32 = 1; // Remote run completed, at least one test failed
pub const INTERNAL_ERROR: i32 = 2; // Usage error, API/transport failure, or no tests matched
