use crate::models::player_model::{PlayerModel, PoseOffsets};
use crate::models::vector::{Vec3, ViewAngles};

use super::angles::{deg_to_rad, horizontal_direction};

/// Blend a standing and a crouching value by duck fraction.
/// Fractions outside [0, 1] extrapolate.
pub fn blend(standing: f64, crouching: f64, duck: f64) -> f64 {
    duck * crouching + (1.0 - duck) * standing
}

/// Remap pitch so a head looking straight down sits near 0 degrees and one
/// looking straight up sits near 90, then apply the pose adjustment.
pub fn adjusted_pitch(pitch: f64, offsets: &PoseOffsets) -> f64 {
    (-pitch + 90.0) / 2.0 * offsets.angle_adjust_mul + offsets.angle_adjust_add
}

impl PlayerModel {
    /// Pose parameters for a duck fraction (0 standing, 1 crouched).
    pub fn pose_offsets(&self, duck: f64) -> PoseOffsets {
        let (s, c) = (&self.standing, &self.crouching);
        PoseOffsets {
            head_forward: blend(s.head_forward, c.head_forward, duck),
            neck_down: blend(s.neck_down, c.neck_down, duck),
            angle_adjust_add: blend(s.angle_adjust_add, c.angle_adjust_add, duck),
            angle_adjust_mul: blend(s.angle_adjust_mul, c.angle_adjust_mul, duck),
            hull_height: blend(s.hull_height, c.hull_height, duck),
        }
    }

    /// Estimated head center for a player whose camera sits at `eye`.
    ///
    /// The head is placed `head_forward` units from the neck joint, which is
    /// `neck_down` below the eye. The adjusted pitch sweeps the head along a
    /// quarter circle: flat and forward when looking down, raised and
    /// tilted back when looking up.
    pub fn head_position(&self, eye: Vec3, angles: ViewAngles, duck: f64) -> Vec3 {
        if !(0.0..=1.0).contains(&duck) {
            log::debug!("duck fraction {} outside [0, 1], extrapolating", duck);
        }

        let offsets = self.pose_offsets(duck);
        let tilt = deg_to_rad(adjusted_pitch(angles.pitch, &offsets));
        let direction = horizontal_direction(angles);

        let head = Vec3::new(
            eye.x + tilt.cos() * direction.x * offsets.head_forward,
            eye.y + tilt.cos() * direction.y * offsets.head_forward,
            eye.z - offsets.neck_down + tilt.sin() * offsets.head_forward,
        );
        log::trace!(
            "head {:?} from eye {:?}, angles {:?}, duck {}",
            head,
            eye,
            angles,
            duck
        );
        head
    }
}

/// Head position using the default CS:GO player model.
pub fn model_head_position(eye: Vec3, angles: ViewAngles, duck: f64) -> Vec3 {
    PlayerModel::CSGO.head_position(eye, angles, duck)
}
