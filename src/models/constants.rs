// Player skeleton measurements, in engine units and degrees.
// Values match the CS:GO player model.

pub const STANDING_HEAD_FORWARD: f64 = 12.5;
pub const CROUCHING_HEAD_FORWARD: f64 = 11.0;

pub const STANDING_NECK_DOWN: f64 = 8.5;
pub const CROUCHING_NECK_DOWN: f64 = 3.75;

pub const STANDING_ANGLE_ADJUST_ADD: f64 = 2.5;
pub const CROUCHING_ANGLE_ADJUST_ADD: f64 = 17.5;

pub const STANDING_ANGLE_ADJUST_MUL: f64 = 1.1;
pub const CROUCHING_ANGLE_ADJUST_MUL: f64 = 0.75;

pub const STANDING_HULL_HEIGHT: f64 = 72.0;
pub const CROUCHING_HULL_HEIGHT: f64 = 54.0;
pub const HULL_WIDTH: f64 = 32.0;

/// Horizontal look directions shorter than this are treated as degenerate
/// (pitch at +/-90 degrees) and collapse to the zero vector.
pub const DEGENERATE_DIRECTION_EPSILON: f64 = 1e-10;

