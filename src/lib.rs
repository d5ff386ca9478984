#![forbid(unsafe_code)]

//! mdu — multithreaded disk-usage accounting.
//!
//! For each input path, mdu reports the total on-disk allocated size of the
//! path and everything recursively reachable beneath it, in 1024-byte units,
//! one line per path in input order. Directory descent is parallelized across
//! a fixed pool of symmetric worker threads that share a growable queue of
//! pending directories and agree on completion through distributed
//! termination detection — no central coordinator.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use mdu::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use mdu::walk::driver::{Driver, WalkOptions};
//! ```

pub mod prelude;

pub mod core;
pub mod walk;
