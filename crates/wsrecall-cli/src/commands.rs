use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::list::ListOptions;
use crate::config::{Config, instances_from_dirs};
use anyhow::Result;
use std::path::PathBuf;
use wsrecall_types::EditorInstance;

pub fn run(cli: Cli) -> Result<()> {
    crate::logging::init(cli.log_level);

    let command = cli.command.unwrap_or(Commands::List {
        dedup: false,
        kind: None,
        filter: None,
        limit: None,
        app_data: Vec::new(),
    });

    match command {
        Commands::List {
            dedup,
            kind,
            filter,
            limit,
            app_data,
        } => {
            let instances = resolve_instances(cli.config.as_deref(), &app_data)?;
            let options = ListOptions {
                dedup,
                kind: kind.map(Into::into),
                filter,
                limit,
            };
            handlers::list::handle(&instances, &options, cli.format)
        }

        Commands::Instances { app_data } => {
            let instances = resolve_instances(cli.config.as_deref(), &app_data)?;
            handlers::instances::handle(&instances, cli.format)
        }
    }
}

/// `--app-data` wins, then the config file, then detection.
fn resolve_instances(
    config_path: Option<&str>,
    app_data: &[PathBuf],
) -> Result<Vec<EditorInstance>> {
    let instances = if !app_data.is_empty() {
        instances_from_dirs(app_data)
    } else {
        Config::load(config_path)?.resolve_instances()
    };

    for instance in &instances {
        tracing::debug!(
            app_data = %instance.app_data().display(),
            "using editor instance {}",
            instance
        );
    }
    Ok(instances)
}
