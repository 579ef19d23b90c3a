//! Fixtures for handler tests.
//!
//! Each call to [`test_state`] returns a fresh catalog loaded from the shared
//! CSV fixture, so tests that mutate routes do not see each other's writes.

use std::path::PathBuf;

use crate::state::AppState;

/// Path to the CSV fixture shared by every crate's tests.
pub const TEST_FIXTURE_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../docs/fixtures/routes.csv");

/// Number of rows in the fixture.
pub const FIXTURE_ROUTE_COUNT: usize = 7;

/// Fresh state seeded from the fixture.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded.
pub fn test_state() -> AppState {
    let path = fixture_path();
    AppState::load(&path)
        .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Location codes present in the fixture.
pub mod fixture_codes {
    pub const GRU: &str = "GRU";
    pub const BRC: &str = "BRC";
    pub const SCL: &str = "SCL";
    pub const ORL: &str = "ORL";
    pub const CDG: &str = "CDG";
}
