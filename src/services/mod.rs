//! Model computations
//!
//! Pure, stateless functions: angle conversion, head placement and the
//! player hull. Every function is safe to call from any thread.

pub mod angles;
pub mod head;
pub mod hull;

pub use angles::{angle_vectors, deg_to_rad, horizontal_direction, rad_to_deg};
pub use head::{adjusted_pitch, blend, model_head_position};
pub use hull::player_aabb;
