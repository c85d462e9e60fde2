use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use wsrecall_types::{WorkspaceKind, WorkspaceRecord};

use crate::handlers::instances::InstanceStatus;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn kind_cell(kind: WorkspaceKind, color: bool) -> String {
    // pad before coloring so escape codes don't break alignment
    let cell = format!("{:<15}", kind.as_str());
    if !color {
        return cell;
    }
    match kind {
        WorkspaceKind::Folder => cell.green().to_string(),
        WorkspaceKind::WorkspaceFile => cell.cyan().to_string(),
        WorkspaceKind::Remote => cell.magenta().to_string(),
    }
}

pub fn print_workspace_table(records: &[WorkspaceRecord]) {
    let color = use_color();

    let header = format!("{:<15} {:<30} {:<16} LOCATION", "KIND", "NAME", "EDITOR");
    if color {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
    println!("{}", "-".repeat(80));

    for record in records {
        println!(
            "{} {:<30} {:<16} {}",
            kind_cell(record.kind(), color),
            record.display_name(),
            record.source_instance().name,
            record.subtitle()
        );
    }
}

pub fn print_instance_table(statuses: &[InstanceStatus]) {
    let color = use_color();

    println!(
        "{:<18} {:<10} {:<13} {:<10} APP_DATA",
        "EDITOR", "CHANNEL", "STORAGE.JSON", "STATE.DB"
    );
    println!("{}", "-".repeat(80));

    for status in statuses {
        println!(
            "{:<18} {:<10} {} {} {}",
            status.name,
            status.channel.as_deref().unwrap_or("-"),
            presence_cell(status.storage_json, 13, color),
            presence_cell(status.state_db, 10, color),
            status.app_data.display()
        );
    }
}

fn presence_cell(present: bool, width: usize, color: bool) -> String {
    let cell = format!("{:<width$}", if present { "yes" } else { "no" }, width = width);
    match (color, present) {
        (false, _) => cell,
        (true, true) => cell.green().to_string(),
        (true, false) => cell.dimmed().to_string(),
    }
}
