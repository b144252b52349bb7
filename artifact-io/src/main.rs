//! Inspect pipeline configuration and artifacts from the command line.
//!
//! Thin wrapper over the `artifact_io` library: every subcommand is one
//! library call plus printing. Exit codes are listed in `exit_codes`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use artifact_io::constants::CONFIG_FILE_PATH;
use artifact_io::io::{create_directories, get_size, load_json, read_yaml};
use artifact_io::paths::ProjectPaths;
use artifact_io::{exit_codes, logging};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(
    name = "artifact-io",
    version,
    about = "Inspect pipeline configuration and artifacts"
)]
struct Cli {
    /// Also append log lines to a file. Bare `--log-file` uses `logs/running_log.log`
    /// under the current directory; pass `--log-file=PATH` to choose another.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a YAML config file, or one dotted key of it, as JSON.
    Config {
        #[arg(default_value = CONFIG_FILE_PATH)]
        path: PathBuf,
        /// Dotted key such as `data_ingestion.root_dir`.
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Print a JSON artifact.
    Show { path: PathBuf },
    /// Create directories, including missing parents.
    Mkdirs {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Do not log each created directory.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the approximate size of a file in KB.
    Size { path: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.log_file {
        Some(Some(path)) => logging::init_with_file(&path)?,
        Some(None) => {
            let root = std::env::current_dir().context("current directory")?;
            logging::init_with_file(&ProjectPaths::new(root).log_file)?;
        }
        None => logging::init(),
    }
    match cli.command {
        Command::Config { path, key } => cmd_config(&path, key.as_deref()),
        Command::Show { path } => cmd_show(&path),
        Command::Mkdirs { paths, quiet } => {
            create_directories(paths.as_slice(), !quiet).context("create directories")
        }
        Command::Size { path } => cmd_size(&path),
    }
}

fn cmd_config(path: &Path, key: Option<&str>) -> Result<()> {
    let doc = read_yaml(path).with_context(|| format!("read config {}", path.display()))?;
    let value = match key {
        Some(key) => doc.path(key)?.to_value(),
        None => Value::from(doc),
    };
    print_json(&value)
}

fn cmd_show(path: &Path) -> Result<()> {
    let doc = load_json(path).with_context(|| format!("load artifact {}", path.display()))?;
    print_json(&Value::from(doc))
}

fn cmd_size(path: &Path) -> Result<()> {
    let size = get_size(path).with_context(|| format!("size of {}", path.display()))?;
    println!("{size}");
    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_defaults_to_conventional_path() {
        let cli = Cli::parse_from(["artifact-io", "config"]);
        match cli.command {
            Command::Config { path, key } => {
                assert_eq!(path, Path::new(CONFIG_FILE_PATH));
                assert!(key.is_none());
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn parse_config_with_key() {
        let cli = Cli::parse_from(["artifact-io", "config", "params.yaml", "--key", "a.b"]);
        assert!(matches!(
            cli.command,
            Command::Config { ref key, .. } if key.as_deref() == Some("a.b")
        ));
    }

    #[test]
    fn parse_mkdirs_requires_paths() {
        assert!(Cli::try_parse_from(["artifact-io", "mkdirs"]).is_err());
        let cli = Cli::parse_from(["artifact-io", "mkdirs", "a", "b/c", "--quiet"]);
        assert!(matches!(cli.command, Command::Mkdirs { ref paths, quiet: true } if paths.len() == 2));
    }

    #[test]
    fn log_file_is_global() {
        let cli = Cli::parse_from(["artifact-io", "size", "x.bin", "--log-file=logs/run.log"]);
        assert_eq!(cli.log_file, Some(Some(PathBuf::from("logs/run.log"))));
    }

    #[test]
    fn bare_log_file_flag_selects_default() {
        let cli = Cli::parse_from(["artifact-io", "--log-file", "config"]);
        assert_eq!(cli.log_file, Some(None));
        assert!(matches!(cli.command, Command::Config { .. }));

        let cli = Cli::parse_from(["artifact-io", "size", "x.bin"]);
        assert_eq!(cli.log_file, None);
    }
}
