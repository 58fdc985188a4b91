use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, BackupService, CatalogState, Clock, ProgressService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogState> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn backups(&self) -> Arc<BackupService> {
        self.services.backups()
    }

    fn backup_dir(&self) -> PathBuf {
        self.services.backup_dir().to_path_buf()
    }
}

struct Args {
    db_url: String,
    catalog_path: PathBuf,
    backup_dir: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--db <sqlite_url>] [--catalog <path>] [--backup-dir <path>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://memoark.sqlite3");
    eprintln!("  --catalog data/full_vocab_content.json");
    eprintln!("  --backup-dir backups");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MEMOARK_DB_URL, MEMOARK_CATALOG, MEMOARK_BACKUP_DIR");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("MEMOARK_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://memoark.sqlite3".into(), normalize_sqlite_url);
        let mut catalog_path = std::env::var("MEMOARK_CATALOG")
            .ok()
            .map_or_else(|| PathBuf::from("data/full_vocab_content.json"), PathBuf::from);
        let mut backup_dir = std::env::var("MEMOARK_BACKUP_DIR")
            .ok()
            .map_or_else(|| PathBuf::from("backups"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--catalog" => {
                    catalog_path = PathBuf::from(require_value(args, "--catalog")?);
                }
                "--backup-dir" => {
                    backup_dir = PathBuf::from(require_value(args, "--backup-dir")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            catalog_path,
            backup_dir,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        Clock::default_clock(),
        &parsed.catalog_path,
        parsed.backup_dir,
    )
    .await?;

    let context = build_app_context(Arc::new(DesktopApp { services }));

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal
    // window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("MemoArk")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
