//! readscope CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use readscope::{Cli, Commands, commands};
use readscope_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.global.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help guarantees a subcommand when --version-only is absent
    let Some(command) = cli.command else {
        return Ok(());
    };

    let global = cli.global;
    if let Some(ref dir) = global.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (mut config, sources) = load_config(global.config.as_ref())?;
    if let Some(level) = global.log_level {
        config.log_level = level;
    }

    let log_target = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf()),
    );
    let filter = observability::env_filter(global.quiet, global.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&log_target, filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        json = global.json,
        color = ?global.color,
        chdir = ?global.chdir,
        config_file = ?sources.primary_file(),
        "CLI initialized"
    );

    let result = run(command, global.json, config, &sources);
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

/// Discover config from the working directory, plus an explicit `--config` file.
fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd, "current directory")?);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path.clone(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path).map_err(|e| {
        anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display())
    })
}

fn run(
    command: Commands,
    json: bool,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Score(args) => commands::score::cmd_score(args, json, &config),
        Commands::Simplify(args) => {
            commands::simplify::cmd_simplify(args, json, config.input_limit())
        }
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(args, config))
        }
    }
}
