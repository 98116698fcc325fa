//! Rendering module
//!
//! Turns game state into a backend-agnostic draw list plus a triangle list
//! for GPU backends. Creating the window and the GPU pipeline is left to the
//! platform.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{ArenaOutline, DrawCommand, Frame, START_PROMPT};
pub use vertex::Vertex;
