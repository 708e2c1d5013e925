//! # Idea Lab
//!
//! The engine behind the idea laboratory. It takes the current cue toggle
//! state, scores it against the fixed cluster weight vectors from
//! `cue_rules`, emits strategy prompts for known cue combinations, and
//! persists named scenarios in a flat two-column store.
//!
//! ## Core components
//!
//! - **selection**: the active cue set, supplied fresh on every interaction
//! - **scoring**: per-cluster integer scores and activation tiers
//! - **prompts**: combination-triggered strategy prompts
//! - **scenario**: named snapshots, the store trait, and CSV/memory stores
//! - **report**: the assembled per-interaction output bundle
//! - **engine**: the single facade an interaction surface drives
//!
//! ## Design philosophy
//!
//! - **Stateless per interaction**: toggle state is an explicit parameter to
//!   every computation; nothing is retained between interactions
//! - **Unrepresentable bad states**: cue and cluster keys are enums, so an
//!   unknown id can only appear at an external boundary, where it becomes a
//!   typed error

pub mod engine;
pub mod prompts;
pub mod report;
pub mod scenario;
pub mod scoring;
pub mod selection;

pub use engine::*;
pub use prompts::*;
pub use report::*;
pub use scenario::*;
pub use scoring::*;
pub use selection::*;
