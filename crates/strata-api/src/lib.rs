//! Strata platform API client for remote test execution.
//!
//! This crate implements the client side of the platform's test-execution
//! endpoint, providing:
//!
//! - HTTP client for the platform API with token auth
//! - The [`TestService`] trait command handlers consume
//! - Decoding of the platform's parallel-array test results into
//!   structured records
//!
//! # Quick Start
//!
//! ```no_run
//! use strata_api::{ApiConfig, PlatformClient, TestService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PlatformClient::from_env()?;
//!
//! let tests = vec!["AccountTest".to_string()];
//! let coverage = client.run_tests(&tests, "").await?;
//! println!("{} tests run, {} failures", coverage.number_run, coverage.number_failures);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `STRATA_API_URL` | Platform base URL (default: `https://api.strata.dev/v1`) |
//! | `STRATA_API_TOKEN` | Authentication token |
//! | `STRATA_API_TIMEOUT` | Request timeout in seconds (default: 30) |

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiConfig, PlatformClient, TestService, API_USER_AGENT};
pub use error::{ApiError, ApiResult};
pub use types::{CoverageEntry, FailedTest, PassedTest, RunTestsResponse, TestCoverage};
