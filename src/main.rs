//! Command-line front end for a file-backed dark mode preference.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use dusk::{
    use_dark_mode, ColorMode, DarkMode, DarkModeStyles, FileStore, Host, MemoryDocument, OsSignal,
    PreferenceSource, SystemSignal, ThemeConfig,
};

#[derive(Parser, Debug)]
#[command(name = "dusk", version, about = "Manage a persisted dark/light preference")]
struct Cli {
    /// JSON file holding the stored preference
    #[arg(long, global = true, default_value = ".dusk/preferences.json")]
    store: PathBuf,

    /// YAML file overriding the storage key, class and selectors
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current mode and where it came from
    Status,
    /// Set the mode explicitly
    Set {
        #[arg(value_parser = parse_mode)]
        mode: ColorMode,
    },
    /// Flip between light and dark
    Toggle,
    /// Print the global dark mode style sheet
    Css,
}

fn parse_mode(raw: &str) -> Result<ColorMode, String> {
    raw.parse()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ThemeConfig> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ThemeConfig::from_yaml(&source).with_context(|| format!("in config {}", path.display()))
}

/// A controller opened on a preference file, with its headless document.
struct Session {
    store: FileStore,
    dark_mode: DarkMode<FileStore, MemoryDocument>,
    document: MemoryDocument,
}

fn print_status(session: &Session) {
    let dark_mode = &session.dark_mode;
    let mode = dark_mode.mode();
    let label = match mode {
        ColorMode::Dark => style(mode.as_str()).magenta().bold(),
        ColorMode::Light => style(mode.as_str()).yellow().bold(),
    };
    let source = match dark_mode.initial_source() {
        PreferenceSource::Stored => "stored preference",
        PreferenceSource::System => "system preference",
    };
    let config = dark_mode.config();
    println!("mode:  {}", label);
    println!("from:  {}", style(source).dim());
    println!("class: {}", style(session.document.class_attribute()).cyan());
    println!(
        "store: {} [{}]",
        style(session.store.path().display()).dim(),
        config.storage_key
    );
}

fn open<Y: SystemSignal>(path: &Path, config: ThemeConfig, signal: Y) -> anyhow::Result<Session> {
    let store = FileStore::new(path);
    let document = MemoryDocument::new();
    let host = Host::new(store.clone(), document.clone(), signal);
    let (_, dark_mode, styles) = use_dark_mode(host, config)
        .with_context(|| format!("failed to load preference from {}", path.display()))?;
    let mut root = document.clone();
    styles.mount(&mut root)?;
    Ok(Session {
        store,
        dark_mode,
        document,
    })
}

/// Runs a subcommand. Returns `None` for commands that print no status.
fn run<Y: SystemSignal>(
    cli: &Cli,
    config: ThemeConfig,
    signal: Y,
) -> anyhow::Result<Option<Session>> {
    let session = match &cli.command {
        Command::Css => {
            let styles = DarkModeStyles::new(&config)?;
            println!("{}", styles.render()?);
            return Ok(None);
        }
        Command::Status => open(&cli.store, config, signal)?,
        Command::Set { mode } => {
            let session = open(&cli.store, config, signal)?;
            session.dark_mode.set(mode.is_dark())?;
            session
        }
        Command::Toggle => {
            let session = open(&cli.store, config, signal)?;
            session.dark_mode.toggle()?;
            session
        }
    };
    Ok(Some(session))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    if let Some(session) = run(&cli, config, OsSignal)? {
        print_status(&session);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk::{Document, FixedSignal, PreferenceStore, DEFAULT_STORAGE_KEY, DEFAULT_STYLE_ID};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dusk").chain(args.iter().copied())).unwrap()
    }

    fn stored(path: &Path) -> Option<String> {
        FileStore::new(path).get(DEFAULT_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_parse_status_defaults() {
        let cli = parse(&["status"]);
        assert!(matches!(cli.command, Command::Status));
        assert_eq!(cli.store, PathBuf::from(".dusk/preferences.json"));
        assert_eq!(cli.config, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_set_modes() {
        let cli = parse(&["set", "dark"]);
        assert!(matches!(cli.command, Command::Set { mode: ColorMode::Dark }));

        let cli = parse(&["set", "Light"]);
        assert!(matches!(cli.command, Command::Set { mode: ColorMode::Light }));
    }

    #[test]
    fn test_parse_set_rejects_unknown_mode() {
        let err = Cli::try_parse_from(["dusk", "set", "dim"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(parse_mode("dim").is_err());
    }

    #[test]
    fn test_parse_set_requires_mode() {
        assert!(Cli::try_parse_from(["dusk", "set"]).is_err());
    }

    #[test]
    fn test_parse_toggle_and_css() {
        assert!(matches!(parse(&["toggle"]).command, Command::Toggle));
        assert!(matches!(parse(&["css"]).command, Command::Css));
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = parse(&["toggle", "--store", "p.json", "--config", "c.yaml", "-vv"]);
        assert_eq!(cli.store, PathBuf::from("p.json"));
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["dusk"]).is_err());
    }

    #[test]
    fn test_load_config_default_without_path() {
        assert_eq!(load_config(None).unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(dir.path().join("missing.yaml").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_load_config_yaml_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dusk.yaml");
        fs::write(&path, "dark_class: night
").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.dark_class, "night");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dusk.yaml");
        fs::write(&path, "dark_class: '1x'
").unwrap();
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_open_mounts_styles_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let session = open(&path, ThemeConfig::default(), FixedSignal(true)).unwrap();
        assert_eq!(session.store.path(), path.as_path());
        assert!(session.document.has_root_class("dark-mode"));
        assert!(session.document.style(DEFAULT_STYLE_ID).is_some());
        assert_eq!(stored(&path).as_deref(), Some("true"));
    }

    #[test]
    fn test_run_set_persists_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let store = path.to_str().unwrap();

        let cli = parse(&["set", "dark", "--store", store]);
        let session = run(&cli, ThemeConfig::default(), FixedSignal(false))
            .unwrap()
            .unwrap();
        assert!(session.dark_mode.is_dark());
        assert_eq!(stored(&path).as_deref(), Some("true"));

        let cli = parse(&["set", "light", "--store", store]);
        run(&cli, ThemeConfig::default(), FixedSignal(false)).unwrap();
        assert_eq!(stored(&path).as_deref(), Some("false"));
    }

    #[test]
    fn test_run_toggle_flips_persisted_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let store = path.to_str().unwrap();
        let cli = parse(&["toggle", "--store", store]);

        run(&cli, ThemeConfig::default(), FixedSignal(false)).unwrap();
        assert_eq!(stored(&path).as_deref(), Some("true"));

        // Stored "true" is an explicit choice, so the next toggle goes light.
        run(&cli, ThemeConfig::default(), FixedSignal(false)).unwrap();
        assert_eq!(stored(&path).as_deref(), Some("false"));
    }

    #[test]
    fn test_run_status_writes_resolved_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let cli = parse(&["status", "--store", path.to_str().unwrap()]);

        let session = run(&cli, ThemeConfig::default(), FixedSignal(true))
            .unwrap()
            .unwrap();
        assert_eq!(session.dark_mode.initial_source(), PreferenceSource::System);
        assert_eq!(stored(&path).as_deref(), Some("true"));
    }

    #[test]
    fn test_run_css_opens_no_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let cli = parse(&["css", "--store", path.to_str().unwrap()]);

        assert!(run(&cli, ThemeConfig::default(), FixedSignal(true)).unwrap().is_none());
        assert!(!path.exists());
    }
}
