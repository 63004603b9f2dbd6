use bevy::prelude::*;
use std::path::PathBuf;

/// Command-line arguments parsed at startup.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    /// JSON garden config to load instead of the defaults.
    /// Usage: `cargo run -- --config garden.json`
    pub config: Option<PathBuf>,

    /// Overrides the scatter seed.
    /// Usage: `cargo run -- --seed 7`
    pub seed: Option<u64>,

    /// Overrides how many flowers are planted.
    /// Usage: `cargo run -- --flowers 40`
    pub flowers: Option<usize>,

    /// Seconds a depleted flower waits before refilling on its own.
    /// Usage: `cargo run -- --regrow 5`
    pub regrow: Option<f32>,
}

impl CliArgs {
    /// Parse the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Parse an argument list whose first item is the program name.
    /// Supports:
    /// - `--config <path>`
    /// - `--seed <u64>`
    /// - `--flowers <count>`
    /// - `--regrow <seconds>`
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cli = CliArgs::default();

        let mut i = 1; // Skip program name
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args.get(i + 1);
            match (flag, value) {
                ("--config", Some(value)) => {
                    cli.config = Some(PathBuf::from(value));
                    info!("CLI: Will load garden config from '{}'", value);
                    i += 2;
                }
                ("--seed", Some(value)) => {
                    cli.seed = parse_value(flag, value);
                    i += 2;
                }
                ("--flowers", Some(value)) => {
                    cli.flowers = parse_value(flag, value);
                    i += 2;
                }
                ("--regrow", Some(value)) => {
                    cli.regrow = parse_value(flag, value);
                    i += 2;
                }
                ("--config" | "--seed" | "--flowers" | "--regrow", None) => {
                    warn!("CLI: {} requires a value", flag);
                    i += 1;
                }
                (arg, _) => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("CLI: Ignoring invalid value '{}' for {}", value, flag);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = CliArgs::parse_from([
            "nectar_garden",
            "--config",
            "garden.json",
            "--seed",
            "9",
            "--flowers",
            "12",
            "--regrow",
            "2.5",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("garden.json")));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.flowers, Some(12));
        assert_eq!(cli.regrow, Some(2.5));
    }

    #[test]
    fn test_invalid_and_missing_values_are_skipped() {
        let cli = CliArgs::parse_from(["nectar_garden", "--seed", "lots", "--bogus", "--flowers"]);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.flowers, None);
    }

    #[test]
    fn test_no_args() {
        assert_eq!(CliArgs::parse_from(["nectar_garden"]), CliArgs::default());
    }
}
