//! # tl-core
//!
//! Core types and error types for Tradelens.
//!
//! This crate provides the foundational types shared across all Tradelens crates:
//! - Insight request/result types flowing between the requester and the dialog
//! - Closed enums for chart kinds and UI themes
//! - The dashboard chart catalog with its mock datasets
//! - Cross-cutting error types
//! - JSON response shapes of the `tlx` commands

pub mod charts;
pub mod enums;
pub mod errors;
pub mod insight;
pub mod responses;
