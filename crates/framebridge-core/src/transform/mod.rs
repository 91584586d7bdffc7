//! Frame transformation operations: quarter-turn rotation.
//!
//! Rotation is the first stage of the processing pipeline and always runs
//! before the optional edge rendering.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, clockwise
//! - Only multiples of 90 are recognized; anything else is a no-op
//! - Origin is top-left corner

mod rotation;

pub use rotation::{QuarterTurnRotator, Rotation, Rotator};
