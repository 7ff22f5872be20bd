use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use log::{info, warn};

use chorus_core::{
    SharedCatalog,
    config::Settings,
    logger::{init_logger, init_tracing},
};

mod handlers;

use handlers::{script, utils::WriteAdapter};

/// Options configurable via the CLI.
#[derive(Debug, Parser)]
#[command(name = "chorus", version = env!("CARGO_PKG_VERSION"), about)]
struct Flags {
    /// config file path, defaults to `Chorus.toml` in the user's config directory
    #[clap(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// A command script to replay before running the subcommand, overrides `catalog.seed`
    #[clap(long, value_hint = clap::ValueHint::FilePath)]
    seed: Option<PathBuf>,
    /// Set the log level, overrides `logging.log_level`
    #[clap(long)]
    log_level: Option<log::LevelFilter>,
    /// Also print tracing spans
    #[clap(long)]
    trace: bool,
    /// subcommand to run
    #[clap(subcommand)]
    subcommand: Option<handlers::Command>,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Flags::command().debug_assert();
}

/// Load the settings, falling back to the defaults when no config file can be found.
fn load_settings(flags: &Flags) -> anyhow::Result<Settings> {
    let config = match &flags.config {
        Some(config) => Some(config.clone()),
        None => Settings::get_config_path()
            .inspect_err(|e| eprintln!("Using the default settings: {e}"))
            .ok(),
    };

    Ok(match config {
        Some(config) => Settings::init(config, flags.seed.clone(), flags.log_level)?,
        None => {
            let mut settings = Settings::default();
            settings.catalog.seed.clone_from(&flags.seed);
            if let Some(log_level) = flags.log_level {
                settings.logging.log_level = log_level;
            }
            settings
        }
    })
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    let flags = Flags::parse();
    let settings = load_settings(&flags)?;

    init_logger(settings.logging.log_level);
    if flags.trace {
        tracing::subscriber::set_global_default(init_tracing())?;
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let catalog = SharedCatalog::new();

        let mut stdout_adapter = WriteAdapter(std::io::stdout());
        let mut stderr_adapter = WriteAdapter(std::io::stderr());

        if let Some(seed) = &settings.catalog.seed {
            let source = std::fs::read_to_string(seed)
                .with_context(|| format!("reading seed script {}", seed.display()))?;
            let report = script::replay(
                &catalog,
                &source,
                settings.catalog.echo,
                &mut stdout_adapter,
                &mut stderr_adapter,
            )
            .await?;
            if report.failed > 0 {
                warn!("{} of {} seed commands failed", report.failed, report.ran);
            }
            info!("Seeded the catalog: {}", catalog.brief().await);
        }

        if let Some(command) = &flags.subcommand {
            command
                .run(
                    &catalog,
                    &mut stdout_adapter,
                    &mut stderr_adapter,
                    &std::io::stdin(),
                )
                .await?;
        } else {
            eprintln!("No subcommand provided");
        }

        Ok(())
    })
}
