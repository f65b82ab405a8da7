use clap::Parser;
use std::path::PathBuf;

/// Terminal client for browsing popular movies.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/marquee/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Movie catalog file, overriding the config entry.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::parse_from(["marquee"]);
        assert!(cli.config.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn parses_path_overrides() {
        let cli = Cli::parse_from(["marquee", "--config", "/tmp/c.toml", "--catalog", "/tmp/m.toml"]);
        assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/c.toml"));
        assert_eq!(cli.catalog.unwrap().to_str(), Some("/tmp/m.toml"));
    }
}
