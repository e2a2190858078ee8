use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use varname::{derive_unique_names, NameRegistry, Normalizer, VarNameConfig};

/// Derives one unique identifier per title.
///
/// Titles are read from stdin, one per line, when none are given on the
/// command line. Log verbosity follows RUST_LOG.
#[derive(Parser, Debug)]
#[command(name = "varname")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML file with a `naming:` section
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Titles to convert
    #[arg(value_name = "TITLE")]
    titles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VarNameConfig::from_file(path)?,
        None => VarNameConfig::default(),
    };
    let normalizer = Normalizer::new(&config.naming_config())?;

    let mut titles = cli.titles;
    if titles.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                titles.push(line);
            }
        }
    }

    let mut registry = NameRegistry::new();
    for name in derive_unique_names(&titles, &normalizer, &mut registry)? {
        println!("{name}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_config_and_titles() {
        let cli = Cli::try_parse_from(["varname", "-c", "naming.yaml", "GDP by Region", "Wages"])
            .expect("valid arguments");
        assert_eq!(cli.config, Some(PathBuf::from("naming.yaml")));
        assert_eq!(cli.titles, vec!["GDP by Region", "Wages"]);
    }

    #[test]
    fn titles_are_optional() {
        let cli = Cli::try_parse_from(["varname", "--config", "a.yaml"]).expect("valid arguments");
        assert!(cli.titles.is_empty());
    }

    #[test]
    fn config_flag_requires_a_path() {
        assert!(Cli::try_parse_from(["varname", "--config"]).is_err());
    }
}
