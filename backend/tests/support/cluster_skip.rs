//! Helpers for controlling embedded test cluster behaviour.
//!
//! Suites backed by embedded PostgreSQL skip themselves when the cluster
//! cannot start, which is common on build hosts without the PostgreSQL
//! binaries or network access to fetch them. Set `REQUIRE_TEST_CLUSTER` to
//! turn a setup failure into a test failure, as CI should.

/// Returns true when `REQUIRE_TEST_CLUSTER` is set to a truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn test_cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// Prints a skip marker and returns `None`, unless `REQUIRE_TEST_CLUSTER` is
/// truthy, in which case it panics with the failure reason.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if test_cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
