//! # Cue Rules
//!
//! The "Cue Bible" crate - the single source of truth for the fixed cue set,
//! the cluster weight vectors, the activation thresholds, and the persona
//! profiles. This crate is pure data and pure functions; it contains no
//! engine logic and does no I/O.

pub mod activation;
pub mod clusters;
pub mod cues;

pub use activation::*;
pub use clusters::*;
pub use cues::*;
