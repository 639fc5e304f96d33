//! Command-line argument parsing.

use surf_core::SamplingConfig;
use surf_math::Domain;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    List,
    Evaluate(EvaluateArgs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    pub kind: String,
    pub params: Vec<f64>,
    pub resolution: usize,
    pub domain: Domain,
    pub json: bool,
    pub mesh: bool,
}

/// Parse everything after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut kind: Option<String> = None;
    let mut params = Vec::new();
    let mut resolution = SamplingConfig::DEFAULT_RESOLUTION;
    let mut domain = Domain::default();
    let mut json = false;
    let mut mesh = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--list" => return Ok(Command::List),
            "--json" => json = true,
            "--mesh" => mesh = true,
            "--resolution" | "-n" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                resolution = value
                    .parse()
                    .map_err(|_| format!("Invalid resolution: {}", value))?;
            }
            "--x-range" => domain.x = parse_range(arg, iter.next())?.into(),
            "--y-range" => domain.y = parse_range(arg, iter.next())?.into(),
            other if kind.is_none() => {
                if other.starts_with("--") {
                    return Err(format!("Unknown option: {}", other));
                }
                kind = Some(other.to_string());
            }
            other => {
                // Negative numbers look like flags, so try the number first
                let value: f64 = other
                    .parse()
                    .map_err(|_| format!("Unexpected argument: {}", other))?;
                params.push(value);
            }
        }
    }

    let kind = kind.ok_or_else(|| "Missing required argument <kind>".to_string())?;
    Ok(Command::Evaluate(EvaluateArgs {
        kind,
        params,
        resolution,
        domain,
        json,
        mesh,
    }))
}

fn parse_range(flag: &str, value: Option<&String>) -> Result<(f64, f64), String> {
    let value = value.ok_or_else(|| format!("{} requires MIN,MAX", flag))?;
    let (min, max) = value
        .split_once(',')
        .ok_or_else(|| format!("{} expects MIN,MAX, got {}", flag, value))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| format!("{}: invalid number {:?}", flag, s))
    };
    Ok((parse(min)?, parse(max)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_minimal() {
        let cmd = parse_args(&args(&["Sphere"])).unwrap();
        match cmd {
            Command::Evaluate(e) => {
                assert_eq!(e.kind, "Sphere");
                assert!(e.params.is_empty());
                assert_eq!(e.resolution, 100);
                assert_eq!(e.domain, Domain::default());
                assert!(!e.json && !e.mesh);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_params_and_options() {
        let cmd = parse_args(&args(&[
            "Hyperboloid", "1", "-2.5", "3", "--resolution", "20", "--x-range", "-1,1", "--json",
        ]))
        .unwrap();
        let Command::Evaluate(e) = cmd else {
            panic!("expected evaluate");
        };
        assert_eq!(e.params, vec![1.0, -2.5, 3.0]);
        assert_eq!(e.resolution, 20);
        assert_eq!(e.domain.x.min, -1.0);
        assert_eq!(e.domain.x.max, 1.0);
        assert_eq!(e.domain.y, Domain::default().y);
        assert!(e.json);
    }

    #[test]
    fn test_help_and_list() {
        assert_eq!(parse_args(&args(&["--list"])).unwrap(), Command::List);
        assert_eq!(parse_args(&args(&["Torus", "-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["Plane", "abc"])).is_err());
        assert!(parse_args(&args(&["Plane", "--resolution"])).is_err());
        assert!(parse_args(&args(&["Plane", "--x-range", "1"])).is_err());
    }
}
