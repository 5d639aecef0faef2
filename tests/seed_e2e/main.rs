//! Seed E2E test suite.
//!
//! Runs the real migrations and the seed service against SQLite databases
//! (in-memory, or a temporary file where a database must outlive a pool).
//!
//! Run with: cargo test --test seed_e2e


mod test_catalog_queries;
mod test_failure;
mod test_seed_state;
