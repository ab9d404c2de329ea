use serde::{Deserialize, Serialize};

use super::constants::*;
use super::errors::{ModelError, ModelResult};

/// Skeleton measurements for one pose (standing or fully crouched).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseParams {
    /// Distance the head center sits ahead of the eye along the look direction
    pub head_forward: f64,
    /// Vertical drop from the eye to the neck joint
    pub neck_down: f64,
    /// Degrees added to the remapped pitch
    pub angle_adjust_add: f64,
    /// Scale applied to the remapped pitch
    pub angle_adjust_mul: f64,
    pub hull_height: f64,
}

/// A player skeleton. Built once and shared read-only by every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerModel {
    pub standing: PoseParams,
    pub crouching: PoseParams,
    pub hull_width: f64,
}

/// Pose parameters blended for a particular duck fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseOffsets {
    pub head_forward: f64,
    pub neck_down: f64,
    pub angle_adjust_add: f64,
    pub angle_adjust_mul: f64,
    pub hull_height: f64,
}

impl PlayerModel {
    pub const CSGO: PlayerModel = PlayerModel {
        standing: PoseParams {
            head_forward: STANDING_HEAD_FORWARD,
            neck_down: STANDING_NECK_DOWN,
            angle_adjust_add: STANDING_ANGLE_ADJUST_ADD,
            angle_adjust_mul: STANDING_ANGLE_ADJUST_MUL,
            hull_height: STANDING_HULL_HEIGHT,
        },
        crouching: PoseParams {
            head_forward: CROUCHING_HEAD_FORWARD,
            neck_down: CROUCHING_NECK_DOWN,
            angle_adjust_add: CROUCHING_ANGLE_ADJUST_ADD,
            angle_adjust_mul: CROUCHING_ANGLE_ADJUST_MUL,
            hull_height: CROUCHING_HULL_HEIGHT,
        },
        hull_width: HULL_WIDTH,
    };

    /// Decode and validate a player model from JSON.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let model: PlayerModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ModelResult<()> {
        validate_pose("standing", &self.standing)?;
        validate_pose("crouching", &self.crouching)?;
        if !self.hull_width.is_finite() || self.hull_width <= 0.0 {
            return Err(ModelError::InvalidConfig(
                "hullWidth must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self::CSGO
    }
}

fn validate_pose(pose: &str, p: &PoseParams) -> ModelResult<()> {
    let fields = [
        ("headForward", p.head_forward),
        ("neckDown", p.neck_down),
        ("angleAdjustAdd", p.angle_adjust_add),
        ("angleAdjustMul", p.angle_adjust_mul),
        ("hullHeight", p.hull_height),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ModelError::InvalidConfig(format!(
                "{}.{} must be finite",
                pose, name
            )));
        }
    }
    if p.head_forward <= 0.0 {
        return Err(ModelError::InvalidConfig(format!(
            "{}.headForward must be > 0",
            pose
        )));
    }
    if p.angle_adjust_mul <= 0.0 {
        return Err(ModelError::InvalidConfig(format!(
            "{}.angleAdjustMul must be > 0",
            pose
        )));
    }
    if p.hull_height <= 0.0 {
        return Err(ModelError::InvalidConfig(format!(
            "{}.hullHeight must be > 0",
            pose
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_csgo() {
        assert_eq!(PlayerModel::default(), PlayerModel::CSGO);
    }

    #[test]
    fn default_model_is_valid() {
        assert!(PlayerModel::default().validate().is_ok());
    }

    #[test]
    fn default_values() {
        let m = PlayerModel::default();
        assert_eq!(m.standing.head_forward, 12.5);
        assert_eq!(m.standing.neck_down, 8.5);
        assert_eq!(m.standing.angle_adjust_add, 2.5);
        assert_eq!(m.standing.angle_adjust_mul, 1.1);
        assert_eq!(m.standing.hull_height, 72.0);
        assert_eq!(m.crouching.head_forward, 11.0);
        assert_eq!(m.crouching.neck_down, 3.75);
        assert_eq!(m.crouching.angle_adjust_add, 17.5);
        assert_eq!(m.crouching.angle_adjust_mul, 0.75);
        assert_eq!(m.crouching.hull_height, 54.0);
        assert_eq!(m.hull_width, 32.0);
    }

    #[test]
    fn zero_hull_width_invalid() {
        let mut m = PlayerModel::default();
        m.hull_width = 0.0;
        assert!(matches!(m.validate(), Err(ModelError::InvalidConfig(_))));
    }

    #[test]
    fn nan_field_invalid() {
        let mut m = PlayerModel::default();
        m.crouching.neck_down = f64::NAN;
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("crouching.neckDown"));
    }

    #[test]
    fn negative_angle_mul_invalid() {
        let mut m = PlayerModel::default();
        m.standing.angle_adjust_mul = -1.0;
        assert!(m.validate().is_err());
    }

    #[test]
    fn negative_neck_down_allowed() {
        let mut m = PlayerModel::default();
        m.standing.neck_down = -2.0;
        assert!(m.validate().is_ok());
    }

    #[test]
    fn json_round_trip() {
        let json = PlayerModel::CSGO.to_json().unwrap();
        assert!(json.contains("headForward"));
        assert!(json.contains("hullWidth"));
        assert_eq!(PlayerModel::from_json(&json).unwrap(), PlayerModel::CSGO);
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(matches!(
            PlayerModel::from_json("{ \"hullWidth\": 32 }"),
            Err(ModelError::ConfigFormat(_))
        ));
    }

    #[test]
    fn from_json_rejects_invalid_values() {
        let mut m = PlayerModel::CSGO;
        m.standing.hull_height = -72.0;
        let json = serde_json::to_string(&m).unwrap();
        assert!(matches!(
            PlayerModel::from_json(&json),
            Err(ModelError::InvalidConfig(_))
        ));
    }
}
