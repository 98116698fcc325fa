//! Simulation module
//!
//! All gameplay logic lives here:
//! - One step per frame
//! - Randomness only through `RandomSource`
//! - No rendering, storage or platform dependencies

pub mod arc;
pub mod autopilot;
pub mod collision;
pub mod random;
pub mod state;
pub mod tick;

pub use arc::ArcSpan;
pub use collision::{WallContact, ball_wall_contact, deflect_velocity, reflect_velocity};
pub use random::{PcgSource, RandomSource, ScriptedSource};
pub use state::{Ball, Contact, GameEvent, GamePhase, GameState, Paddle, Rules};
pub use tick::{TickInput, tick};
