use std::path::PathBuf;

use crate::models::errors::{ModelError, ModelResult};
use crate::models::vector::Vec3;

pub const USAGE: &str = "\
Usage: headpos [OPTIONS]

Options:
  -e, --eye <X,Y,Z>     Eye position (default 0,0,64)
  -f, --foot <X,Y,Z>    Foot position; also prints the player hull
  -p, --pitch <DEG>     View pitch, positive looks down (default 0)
  -y, --yaw <DEG>       View yaw (default 0)
  -d, --duck <F>        Duck fraction, 0 standing to 1 crouched (default 0)
  -c, --config <FILE>   Player model JSON
      --json            Print JSON instead of text
  -h, --help            Print help";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub eye: Vec3,
    pub foot: Option<Vec3>,
    pub pitch: f64,
    pub yaw: f64,
    pub duck: f64,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 64.0),
            foot: None,
            pitch: 0.0,
            yaw: 0.0,
            duck: 0.0,
            config: None,
            json: false,
            help: false,
        }
    }
}

/// Parse command-line arguments, not including the program name.
pub fn parse<I>(args: I) -> ModelResult<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--eye" | "-e" => parsed.eye = parse_vec3(&value(&arg, iter.next())?)?,
            "--foot" | "-f" => parsed.foot = Some(parse_vec3(&value(&arg, iter.next())?)?),
            "--pitch" | "-p" => parsed.pitch = parse_finite(&value(&arg, iter.next())?)?,
            "--yaw" | "-y" => parsed.yaw = parse_finite(&value(&arg, iter.next())?)?,
            "--duck" | "-d" => parsed.duck = parse_finite(&value(&arg, iter.next())?)?,
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value(&arg, iter.next())?)),
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(ModelError::InvalidInput(format!(
                    "unknown argument: {}",
                    other
                )))
            }
        }
    }

    Ok(parsed)
}

fn value(flag: &str, next: Option<String>) -> ModelResult<String> {
    next.ok_or_else(|| ModelError::InvalidInput(format!("{} requires a value", flag)))
}

fn parse_finite(s: &str) -> ModelResult<f64> {
    let v: f64 = s.trim().parse()?;
    if !v.is_finite() {
        return Err(ModelError::InvalidInput(format!("{} is not finite", s)));
    }
    Ok(v)
}

/// Parse `X,Y,Z` into a vector.
pub fn parse_vec3(s: &str) -> ModelResult<Vec3> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(ModelError::ParseError(format!(
            "expected X,Y,Z but got '{}'",
            s
        )));
    }
    Ok(Vec3::new(
        parse_finite(parts[0])?,
        parse_finite(parts[1])?,
        parse_finite(parts[2])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> ModelResult<Args> {
        parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn parses_all_options() {
        let a = args(&[
            "--eye", "50,50,50", "-f", "1,2,3", "--pitch", "20", "-y", "-45.5", "--duck", "1",
            "--config", "model.json", "--json",
        ])
        .unwrap();
        assert_eq!(a.eye, Vec3::new(50.0, 50.0, 50.0));
        assert_eq!(a.foot, Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(a.pitch, 20.0);
        assert_eq!(a.yaw, -45.5);
        assert_eq!(a.duck, 1.0);
        assert_eq!(a.config, Some(PathBuf::from("model.json")));
        assert!(a.json);
        assert!(!a.help);
    }

    #[test]
    fn duck_is_not_range_checked() {
        assert_eq!(args(&["-d", "1.5"]).unwrap().duck, 1.5);
    }

    #[test]
    fn vec3_accepts_spaces() {
        assert_eq!(parse_vec3(" 1, -2 ,3.5").unwrap(), Vec3::new(1.0, -2.0, 3.5));
    }

    #[test]
    fn missing_value_is_error() {
        assert!(matches!(args(&["--pitch"]), Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn bad_number_is_parse_error() {
        assert!(matches!(args(&["--yaw", "north"]), Err(ModelError::ParseError(_))));
        assert!(matches!(args(&["--eye", "1,2"]), Err(ModelError::ParseError(_))));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(args(&["--pitch", "NaN"]), Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn unknown_argument_rejected() {
        let err = args(&["--roll", "3"]).unwrap_err();
        assert!(err.to_string().contains("--roll"));
    }
}
