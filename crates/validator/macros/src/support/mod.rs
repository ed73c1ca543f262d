//! Internal support utilities for the derive macros.

pub mod attrs;
pub mod diag;
