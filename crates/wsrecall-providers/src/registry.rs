use std::path::Path;
use wsrecall_types::EditorInstance;

#[derive(Debug, Clone)]
pub struct EditorVariant {
    pub name: &'static str,
    pub channel: &'static str,
    /// Folder name under the platform config directory
    /// (`%APPDATA%`, `~/Library/Application Support`, `~/.config`)
    pub app_data_dir: &'static str,
}

const VARIANTS: &[EditorVariant] = &[
    EditorVariant {
        name: "Code",
        channel: "stable",
        app_data_dir: "Code",
    },
    EditorVariant {
        name: "Code - Insiders",
        channel: "insiders",
        app_data_dir: "Code - Insiders",
    },
    EditorVariant {
        name: "VSCodium",
        channel: "stable",
        app_data_dir: "VSCodium",
    },
    EditorVariant {
        name: "Cursor",
        channel: "stable",
        app_data_dir: "Cursor",
    },
    EditorVariant {
        name: "Windsurf",
        channel: "stable",
        app_data_dir: "Windsurf",
    },
];

impl EditorVariant {
    pub fn instance_in(&self, config_root: &Path) -> EditorInstance {
        EditorInstance::new(self.name, config_root.join(self.app_data_dir))
            .with_channel(self.channel)
    }
}

/// Installed variants under `config_root`, in table order
pub fn detect_instances_in(config_root: &Path) -> Vec<EditorInstance> {
    VARIANTS
        .iter()
        .map(|variant| variant.instance_in(config_root))
        .filter(|instance| instance.app_data().is_dir())
        .collect()
}

/// Installed variants under the platform config directory
pub fn detect_instances() -> Vec<EditorInstance> {
    dirs::config_dir()
        .map(|root| detect_instances_in(&root))
        .unwrap_or_default()
}
