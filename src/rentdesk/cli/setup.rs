use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rentdesk", bin_name = "rentdesk", version = get_version())]
#[command(about = "Interactive car rental desk", long_about = None)]
pub struct Cli {
    /// JSON config file with the fleet and currency symbol
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log desk activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
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
    fn parses_config_and_verbose() {
        let cli = Cli::try_parse_from(["rentdesk", "--config", "desk.json", "-v"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("desk.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn defaults_to_no_config() {
        let cli = Cli::try_parse_from(["rentdesk"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }
}
