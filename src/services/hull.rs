use crate::models::player_model::PlayerModel;
use crate::models::vector::{Aabb, Vec3};

use super::head::blend;

impl PlayerModel {
    /// Player collision hull standing on `foot`.
    ///
    /// The box is centered on the foot position in X and Y and extends
    /// upward by the duck-blended hull height.
    pub fn player_aabb(&self, foot: Vec3, duck: f64) -> Aabb {
        let height = blend(self.standing.hull_height, self.crouching.hull_height, duck);
        let half_width = self.hull_width / 2.0;

        Aabb::new(
            Vec3::new(foot.x - half_width, foot.y - half_width, foot.z),
            Vec3::new(foot.x + half_width, foot.y + half_width, foot.z + height),
        )
    }
}

/// Hull box using the default CS:GO player model.
pub fn player_aabb(foot: Vec3, duck: f64) -> Aabb {
    PlayerModel::CSGO.player_aabb(foot, duck)
}
