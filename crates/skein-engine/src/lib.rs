//! Turn controller and outcome resolution for Skein interactive fiction.
//!
//! Drives one turn at a time against a validated [`skein_core::Story`]:
//! normalize the input, match an action in the current scene, select the
//! first outcome whose requirements hold, render its text through a
//! [`Surface`], and apply its mutators — chasing scene changes with an
//! automatic arrival turn.

/// Error types for the engine.
pub mod error;
/// The game aggregate and turn controller.
pub mod game;
/// Action matching and outcome selection.
pub mod resolve;
/// The presentation surface boundary.
pub mod surface;

pub use error::{EngineError, EngineResult};
pub use game::{Game, REFUSAL};
pub use resolve::{match_action, resolve_outcome};
pub use surface::{Alignment, RecordingSurface, Surface, SurfaceEvent};
