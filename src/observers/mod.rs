//! Concrete observers shipped with the crate.
//!
//! Each submodule implements [`Observer`](crate::subject::Observer) with a
//! distinct side effect. The subject never learns what these effects are;
//! it only calls `notify`.
//!
//! Submodules:
//! - [`health`] – HUD-style display of the latest value as player health
//! - [`score`] – derives and accumulates a score from each update
//! - [`eventlog`] – records every update, optionally mirrored to a file

pub mod eventlog;
pub mod health;
pub mod score;
