//! Wire and domain types for remote test execution.
//!
//! The platform reports test results as parallel arrays: for each result
//! category (coverage, passed, failed) the arrays are index-aligned. That
//! alignment is a platform invariant and is not validated here. The wire
//! shape is decoded as-is into [`RunTestsResponse`] and immediately
//! restructured into [`TestCoverage`], which carries one record per
//! outcome and keeps the alignment out of the rest of the codebase.

use serde::{Deserialize, Serialize};

/// Request body for the test-run endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTestsRequest {
    /// Qualified test identifiers (`Class` or `Class.method`), or `all`.
    pub tests: Vec<String>,

    /// Namespace scope, omitted when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

/// Raw test-run response as the platform sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunTestsResponse {
    pub number_run: u32,
    pub number_failures: u32,
    pub log: String,

    // Coverage, one entry per instrumented unit.
    pub name: Vec<String>,
    pub number_locations: Vec<u64>,
    pub number_locations_not_covered: Vec<u64>,

    // Passed test methods.
    pub success_class_names: Vec<String>,
    pub success_method_names: Vec<String>,

    // Failed test methods.
    pub failure_class_names: Vec<String>,
    pub failure_method_names: Vec<String>,
    pub failure_messages: Vec<String>,
    pub failure_stack_traces: Vec<String>,
}

/// Coverage for one instrumented class or trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEntry {
    pub name: String,
    /// Total tracked code locations.
    pub locations: u64,
    /// Locations not exercised by the run.
    pub not_covered: u64,
}

impl CoverageEntry {
    /// Integer coverage percentage, floored, as the platform convention
    /// renders it. Zero tracked locations reports as `0%`.
    pub fn percent(&self) -> String {
        if self.locations == 0 {
            return "0%".to_string();
        }
        let covered = self.locations.saturating_sub(self.not_covered);
        format!("{}%", covered * 100 / self.locations)
    }
}

/// A test method that passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassedTest {
    pub class_name: String,
    pub method_name: String,
}

/// A test method that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTest {
    pub class_name: String,
    pub method_name: String,
    pub message: String,
    pub stack_trace: String,
}

/// Structured result of a remote test run.
#[derive(Debug, Clone, Default)]
pub struct TestCoverage {
    pub number_run: u32,
    pub number_failures: u32,
    /// Full execution log from the platform.
    pub log: String,
    pub coverage: Vec<CoverageEntry>,
    pub passed: Vec<PassedTest>,
    pub failed: Vec<FailedTest>,
}

impl TestCoverage {
    /// True when no test method failed.
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

impl From<RunTestsResponse> for TestCoverage {
    fn from(raw: RunTestsResponse) -> Self {
        let coverage = raw
            .name
            .into_iter()
            .zip(raw.number_locations)
            .zip(raw.number_locations_not_covered)
            .map(|((name, locations), not_covered)| CoverageEntry {
                name,
                locations,
                not_covered,
            })
            .collect();

        let passed = raw
            .success_class_names
            .into_iter()
            .zip(raw.success_method_names)
            .map(|(class_name, method_name)| PassedTest {
                class_name,
                method_name,
            })
            .collect();

        let failed = raw
            .failure_class_names
            .into_iter()
            .zip(raw.failure_method_names)
            .zip(raw.failure_messages)
            .zip(raw.failure_stack_traces)
            .map(|(((class_name, method_name), message), stack_trace)| FailedTest {
                class_name,
                method_name,
                message,
                stack_trace,
            })
            .collect();

        Self {
            number_run: raw.number_run,
            number_failures: raw.number_failures,
            log: raw.log,
            coverage,
            passed,
            failed,
        }
    }
}
