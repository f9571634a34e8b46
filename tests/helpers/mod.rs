// Test Helper Modules
//
// Shared fixtures for unit and integration tests. Integration tests run the
// real routes against an in-process actix service with the mock FIRA
// processor (zero delay), so no network or external API is needed.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]


pub use test_data::*;
