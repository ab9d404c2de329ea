use serde::Serialize;

use crate::io::OutputWriter;
use crate::models::errors::ModelResult;
use crate::models::vector::{Aabb, Vec3, ViewAngles};

/// Everything one `headpos` invocation computed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadReport {
    pub eye: Vec3,
    pub view_angles: ViewAngles,
    pub duck: f64,
    pub head: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hull: Option<Aabb>,
}

pub struct HeadPresenter;

impl HeadPresenter {
    pub fn show_report(report: &HeadReport, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{:<10}{}", "EYE", format_vec(report.eye)));
        output.writeln(&format!(
            "{:<10}PITCH {:.3}  YAW {:.3}  DUCK {:.3}",
            "VIEW", report.view_angles.pitch, report.view_angles.yaw, report.duck
        ));
        output.writeln(&format!("{:<10}{}", "HEAD", format_vec(report.head)));
        if let Some(hull) = report.hull {
            output.writeln(&format!("{:<10}{}", "HULL MIN", format_vec(hull.min)));
            output.writeln(&format!("{:<10}{}", "HULL MAX", format_vec(hull.max)));
        }
    }

    pub fn show_json(report: &HeadReport, output: &mut dyn OutputWriter) -> ModelResult<()> {
        output.writeln(&serde_json::to_string_pretty(report)?);
        Ok(())
    }
}

fn format_vec(v: Vec3) -> String {
    format!("{:.4}, {:.4}, {:.4}", v.x, v.y, v.z)
}
