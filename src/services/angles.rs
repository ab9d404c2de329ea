use crate::models::vector::{Vec3, ViewAngles};

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Forward vector for a yaw/pitch pair given in radians.
///
/// Follows the Source engine QAngle convention: yaw turns in the XY plane,
/// positive pitch looks down and so lowers Z. Roll does not affect the
/// forward vector.
pub fn angle_vectors(yaw: f64, pitch: f64) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();

    Vec3::new(cp * cy, cp * sy, -sp)
}

/// Unit look direction projected onto the XY plane.
///
/// Returns `Vec3::ZERO` when looking straight up or down, where the
/// projection has no meaningful direction.
pub fn horizontal_direction(angles: ViewAngles) -> Vec3 {
    let (yaw, pitch) = angles.to_radians();
    let direction = angle_vectors(yaw, pitch).horizontal().normalize_or_zero();
    if direction == Vec3::ZERO {
        log::debug!(
            "degenerate horizontal direction at pitch {}, yaw {}",
            angles.pitch,
            angles.yaw
        );
    }
    direction
}
