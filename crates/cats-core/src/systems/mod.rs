//! Simulation Systems
//!
//! The per-iteration steps: movement, then engagement.

pub mod engagement;
pub mod location;
pub mod movement;
pub mod select;

pub use engagement::{engagement_step, Engagement, EngagementSummary, Outcome};
pub use location::{classify_location, LocationKind};
pub use movement::{movement_step, MoveChoice, MovementSummary};
pub use select::{weighted_choice, WeightedOption};
