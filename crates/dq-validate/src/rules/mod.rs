//! The standard structural rules, grouped by the shape of metadata they
//! inspect.

pub mod columns;
pub mod keys;
pub mod naming;
pub mod references;
