//! Interaction layer: link records, the canvas collaborator interface and
//! the per-link controller state machine.
//!
//! All operations run on the one UI thread in response to discrete events;
//! nothing here blocks, suspends or spawns background work.

pub mod canvas;
pub mod controller;
pub mod link;

pub use canvas::{Canvas, CanvasError};
pub use controller::{ArrowScene, EventOutcome, Key, LinkController};
pub use link::{LinkId, LinkRecord, ShapeId};
