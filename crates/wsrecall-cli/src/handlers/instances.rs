use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use wsrecall_types::EditorInstance;

#[derive(Debug, Serialize)]
pub struct InstanceStatus {
    pub name: String,
    pub channel: Option<String>,
    pub app_data: PathBuf,
    pub storage_json: bool,
    pub state_db: bool,
}

impl From<&EditorInstance> for InstanceStatus {
    fn from(instance: &EditorInstance) -> Self {
        Self {
            name: instance.name.clone(),
            channel: instance.channel.clone(),
            app_data: instance.app_data.clone(),
            storage_json: instance.storage_json_path().is_file(),
            state_db: instance.state_db_path().is_file(),
        }
    }
}

pub fn handle(instances: &[EditorInstance], format: OutputFormat) -> Result<()> {
    let statuses: Vec<InstanceStatus> = instances.iter().map(InstanceStatus::from).collect();

    match format {
        OutputFormat::Json => output::print_json(&statuses),
        OutputFormat::Plain => {
            if statuses.is_empty() {
                println!(
                    "No editor instances found. Add [[instances]] to the config or pass --app-data."
                );
                return Ok(());
            }
            output::print_instance_table(&statuses);
            Ok(())
        }
    }
}
