use crate::history::StateDbSource;
use crate::label::transform_label;
use crate::legacy::LegacyStorageSource;
use crate::logging::Logger;
use crate::traits::{HistorySource, RawWorkspaceEntry};
use std::collections::HashSet;
use std::sync::Arc;
use wsrecall_core::{classify_raw, folder_name};
use wsrecall_types::{EditorInstance, WorkspaceRecord};

const LOG_SOURCE: &str = "Workspaces";

/// Reads every history source of every instance into one ordered list.
///
/// Order: instances as given; within an instance, sources in registration
/// order (legacy `storage.json` before the state database by default);
/// within a source, storage order. Failures are logged and skipped.
pub struct WorkspaceAggregator {
    sources: Vec<Box<dyn HistorySource>>,
}

impl Default for WorkspaceAggregator {
    fn default() -> Self {
        Self::new(vec![Box::new(LegacyStorageSource), Box::new(StateDbSource)])
    }
}

impl WorkspaceAggregator {
    pub fn new(sources: Vec<Box<dyn HistorySource>>) -> Self {
        Self { sources }
    }

    pub fn list_workspaces(
        &self,
        instances: &[EditorInstance],
        logger: &dyn Logger,
    ) -> Vec<WorkspaceRecord> {
        let mut workspaces = Vec::new();
        for instance in instances {
            workspaces.extend(self.collect_instance(instance, logger));
        }
        workspaces
    }

    fn collect_instance(
        &self,
        instance: &EditorInstance,
        logger: &dyn Logger,
    ) -> Vec<WorkspaceRecord> {
        let shared = Arc::new(instance.clone());
        let mut records = Vec::new();

        for source in &self.sources {
            let entries = match source.read_entries(instance) {
                Ok(entries) => entries,
                Err(err) => {
                    let message = format!(
                        "Failed to deserialize {}",
                        source.storage_path(instance).display()
                    );
                    logger.log_exception(LOG_SOURCE, &message, &err);
                    continue;
                }
            };

            records.extend(
                entries
                    .into_iter()
                    .filter_map(|entry| build_record(entry, &shared)),
            );
        }

        if !records.is_empty() {
            let paths: Vec<&str> = records.iter().map(WorkspaceRecord::path).collect();
            logger.log_info(
                LOG_SOURCE,
                &format!(
                    "loaded workspaces: {} from {}",
                    paths.join(","),
                    instance.app_data().display()
                ),
            );
        }

        records
    }
}

/// Classify one raw entry and build its record; `None` drops the entry.
pub fn build_record(
    entry: RawWorkspaceEntry,
    instance: &Arc<EditorInstance>,
) -> Option<WorkspaceRecord> {
    let (path, classified) = classify_raw(&entry.uri)?;
    let label = entry.label.as_deref().and_then(transform_label);
    let folder = folder_name(&path);

    WorkspaceRecord::builder(path, classified, Arc::clone(instance))
        .folder_name(folder)
        .label(label)
        .build()
}

/// Read all recent workspaces of `instances` with the default sources
pub fn list_workspaces(instances: &[EditorInstance], logger: &dyn Logger) -> Vec<WorkspaceRecord> {
    WorkspaceAggregator::default().list_workspaces(instances, logger)
}

/// Keep the first record for each path
pub fn dedup_workspaces(records: Vec<WorkspaceRecord>) -> Vec<WorkspaceRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.path().to_string()))
        .collect()
}
