//! Player head position model
//!
//! Estimates where a first-person-shooter player's head sits, given the
//! camera (eye) position the engine reports, the view angles and how far
//! the player is crouched.
//!
//! # Overview
//!
//! The engine only exposes the eye. The head center is modeled as a point
//! a fixed distance from a neck joint below the eye, swung along a quarter
//! circle by the view pitch. Standing and crouching poses use different
//! measurements, blended linearly by the duck fraction.
//!
//! # Modules
//!
//! - [`models`] - Value types, constants and the [`PlayerModel`] configuration
//! - [`services`] - Angle conversion, head placement and the player hull
//! - [`cli`] - Argument parsing and the `headpos` command
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Text and JSON presentation
//!
//! # Example
//!
//! ```rust
//! use head_position_model::{model_head_position, Vec3, ViewAngles};
//!
//! let head = model_head_position(Vec3::new(50.0, 50.0, 50.0), ViewAngles::new(20.0, 0.0), 1.0);
//! assert!((head.x - 57.946).abs() < 1e-3);
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::errors::{ModelError, ModelResult};
pub use models::player_model::{PlayerModel, PoseOffsets, PoseParams};
pub use models::vector::{Aabb, Vec3, ViewAngles};
pub use services::{angle_vectors, deg_to_rad, model_head_position, player_aabb, rad_to_deg};
