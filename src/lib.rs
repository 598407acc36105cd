//! Signalhub library.
//!
//! This module exposes the subject/observer registry, the bundled concrete
//! observers, the demo configuration and stimulus scripts for use in
//! integration tests and as a reusable library.

pub mod config;
pub mod observers;
pub mod script;
pub mod subject;
