//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::load_tree;
use crate::application::services::WalkService;
use crate::cli::args::{Cli, Commands, ConfigCommands, OrderArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};

pub fn execute(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Walk { file, order, indent }) => cmd_walk(file, *order, *indent),
        Some(Commands::Parents { file }) => cmd_parents(file),
        Some(Commands::Tree { file }) => cmd_tree(file),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show { dir } => cmd_config_show(dir.as_deref()),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".into())),
    }
}

/// Settings with the tree document's directory as local config layer.
fn settings_for(file: &Path) -> CliResult<Settings> {
    let dir = file.parent().filter(|d| !d.as_os_str().is_empty());
    Ok(Settings::load(dir)?)
}

#[instrument]
fn cmd_walk(file: &Path, order: Option<OrderArg>, indent: bool) -> CliResult<()> {
    let mut settings = settings_for(file)?;
    settings.indent |= indent;
    let service = WalkService::new(settings);

    let root = load_tree(file)?;
    let rendered = service.render_walk(&*root, order.map(Into::into))?;
    debug!("walk rendered {} bytes", rendered.len());
    output::info(&rendered);
    Ok(())
}

#[instrument]
fn cmd_parents(file: &Path) -> CliResult<()> {
    let service = WalkService::new(settings_for(file)?);
    let root = load_tree(file)?;
    let pairs = service.parents(&*root)?;
    if pairs.is_empty() {
        output::header("root has no children");
    }
    for (child, parent) in &pairs {
        output::edge(child, parent);
    }
    Ok(())
}

#[instrument]
fn cmd_tree(file: &Path) -> CliResult<()> {
    let service = WalkService::new(settings_for(file)?);
    let root = load_tree(file)?;
    output::info(service.render_tree(&*root).trim_end());
    Ok(())
}

#[instrument]
fn cmd_config_show(dir: Option<&Path>) -> CliResult<()> {
    if let Some(dir) = dir {
        if !dir.is_dir() {
            return Err(CliError::InvalidArgs(format!("not a directory: {}", dir.display())));
        }
    }
    let settings = Settings::load(dir)?;
    output::info(settings.to_toml()?.trim_end());
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::action("global", &path.display()),
        None => output::action("global", "unavailable (no home directory)"),
    }
    output::action("local", &local_config_path(Path::new("<tree dir>")).display());
    Ok(())
}
