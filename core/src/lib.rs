//! Core types for Tally.
//!
//! This crate holds all of the actual functionality; the `tally` crate at the workspace root
//! re-exports everything a consumer normally needs.

pub mod bar_graph;
pub mod color;
pub mod easing;
#[cfg(feature = "glam")]
pub mod glam;
pub mod interpolation;
pub mod scene;
pub mod tween;
