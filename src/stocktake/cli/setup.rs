use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use stocktake::config::StocktakeConfig;
use stocktake::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stocktake", bin_name = "stocktake", version = get_version())]
#[command(about = "Interactive inventory tracker", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the user config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Loads the configuration named on the command line, else the one in the user config
/// directory, else the defaults.
pub fn load_config(cli: &Cli) -> Result<StocktakeConfig> {
    if let Some(path) = &cli.config {
        return StocktakeConfig::load(path);
    }

    match ProjectDirs::from("com", "stocktake", "stocktake") {
        Some(dirs) => StocktakeConfig::load_from_dir(dirs.config_dir()),
        None => Ok(StocktakeConfig::default()),
    }
}

/// Logs go to stderr; stdout carries only the menu session.
pub fn init_logging(level: &str, verbose: bool) {
    let default_level = if verbose { "debug" } else { level };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_the_default_session() {
        let cli = Cli::try_parse_from(["stocktake"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_config_and_verbose() {
        let cli = Cli::try_parse_from(["stocktake", "--config", "inv.json", "-v"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("inv.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn explicit_missing_config_gives_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(temp_dir.path().join("nope.json")),
            verbose: false,
        };
        assert_eq!(load_config(&cli).unwrap(), StocktakeConfig::default());
    }
}
