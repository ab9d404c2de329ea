//! Command-line front end for `headpos`.

pub mod args;

use crate::io::OutputWriter;
use crate::models::errors::ModelResult;
use crate::models::player_model::PlayerModel;
use crate::models::vector::ViewAngles;
use crate::ui::presenters::{HeadPresenter, HeadReport};

pub use args::{parse, Args, USAGE};

/// Load the player model named by `--config`, or the built-in one.
pub fn load_model(args: &Args) -> ModelResult<PlayerModel> {
    match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let model = PlayerModel::from_json(&json)?;
            log::info!("loaded player model from {}", path.display());
            Ok(model)
        }
        None => Ok(PlayerModel::default()),
    }
}

/// Compute the head (and hull, if a foot position was given) for parsed args.
pub fn build_report(model: &PlayerModel, args: &Args) -> HeadReport {
    let view_angles = ViewAngles::new(args.pitch, args.yaw);
    HeadReport {
        eye: args.eye,
        view_angles,
        duck: args.duck,
        head: model.head_position(args.eye, view_angles, args.duck),
        hull: args.foot.map(|foot| model.player_aabb(foot, args.duck)),
    }
}

pub fn run(args: &Args, output: &mut dyn OutputWriter) -> ModelResult<()> {
    if args.help {
        output.writeln(USAGE);
        return Ok(());
    }

    let model = load_model(args)?;
    let report = build_report(&model, args);
    log::debug!("report: {:?}", report);

    if args.json {
        HeadPresenter::show_json(&report, output)
    } else {
        HeadPresenter::show_report(&report, output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::errors::ModelError;
    use std::path::PathBuf;

    #[test]
    fn help_prints_usage() {
        let args = Args {
            help: true,
            ..Args::default()
        };
        let mut output = MockOutput::new();
        run(&args, &mut output).unwrap();
        assert!(output.joined().contains("Usage: headpos"));
    }

    #[test]
    fn report_includes_hull_only_with_foot() {
        let model = PlayerModel::default();
        let mut args = Args::default();
        assert!(build_report(&model, &args).hull.is_none());
        args.foot = Some(crate::models::vector::Vec3::ZERO);
        assert!(build_report(&model, &args).hull.is_some());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/headpos/model.json")),
            ..Args::default()
        };
        let mut output = MockOutput::new();
        assert!(matches!(run(&args, &mut output), Err(ModelError::IoError(_))));
        assert!(output.messages.is_empty());
    }

    #[test]
    fn json_output_parses() {
        let args = Args {
            json: true,
            ..Args::default()
        };
        let mut output = MockOutput::new();
        run(&args, &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output.joined()).unwrap();
        assert_eq!(value["duck"], 0.0);
    }
}
