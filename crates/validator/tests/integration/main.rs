//! Integration tests for condval.
//!
//! Each module exercises one public surface through the crate's API only.

mod common;
mod comparator;
mod derive;
mod registry;
mod resolver;
mod scenarios;
