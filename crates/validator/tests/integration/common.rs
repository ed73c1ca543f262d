//! Shared fixtures for the integration tests.

use condval::Record;

#[derive(Debug, Default, Record)]
pub struct NestedFilters {
    pub slice_f: Vec<String>,
}

#[derive(Debug, Default, Record)]
pub struct Filters {
    pub string_f: String,
    pub nested_filters: NestedFilters,
}

#[derive(Debug, Default, Record)]
pub struct TestData {
    pub limit: Option<u64>,
    pub filters: Filters,
}

/// Installs a test-writer subscriber so `debug!` output shows up in failing
/// test logs. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
