use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use wsrecall_providers::{TracingLogger, WorkspaceQuery, dedup_workspaces, list_workspaces};
use wsrecall_types::{EditorInstance, WorkspaceKind};

#[derive(Debug, Default)]
pub struct ListOptions {
    pub dedup: bool,
    pub kind: Option<WorkspaceKind>,
    pub filter: Option<String>,
    pub limit: Option<usize>,
}

pub fn handle(
    instances: &[EditorInstance],
    options: &ListOptions,
    format: OutputFormat,
) -> Result<()> {
    let mut records = list_workspaces(instances, &TracingLogger);

    if options.dedup {
        records = dedup_workspaces(records);
    }

    let query = WorkspaceQuery::new()
        .kind(options.kind)
        .text(options.filter.as_deref());
    records = query.apply(records);

    if let Some(limit) = options.limit {
        records.truncate(limit);
    }

    match format {
        OutputFormat::Json => output::print_json(&records),
        OutputFormat::Plain => {
            if records.is_empty() {
                println!("No recent workspaces found.");
                return Ok(());
            }
            output::print_workspace_table(&records);
            Ok(())
        }
    }
}
