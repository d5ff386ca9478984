//! Core types: errors and shared aliases.

pub mod errors;
