use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wsrecall_core::{expand_tilde, resolve_config_path};
use wsrecall_types::EditorInstance;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    pub name: String,
    #[serde(default)]
    pub channel: Option<String>,
    /// May start with `~/`
    pub app_data: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl InstanceConfig {
    pub fn to_instance(&self) -> EditorInstance {
        let instance = EditorInstance::new(self.name.clone(), expand_tilde(&self.app_data));
        match &self.channel {
            Some(channel) => instance.with_channel(channel.clone()),
            None => instance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub instances: Vec<InstanceConfig>,
}

impl Config {
    /// Load from `--config`, `WSRECALL_CONFIG` or the platform default.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Configured instances replace detection entirely.
    pub fn resolve_instances(&self) -> Vec<EditorInstance> {
        if self.instances.is_empty() {
            return wsrecall_providers::detect_instances();
        }

        self.instances
            .iter()
            .filter(|instance| instance.enabled)
            .map(InstanceConfig::to_instance)
            .collect()
    }
}

/// Instances for explicit `--app-data` directories, named after the directory.
pub fn instances_from_dirs(dirs: &[PathBuf]) -> Vec<EditorInstance> {
    dirs.iter()
        .map(|dir| {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string());
            EditorInstance::new(name, dir.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert!(config.instances.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_instances() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[[instances]]
name = "Code"
app_data = "/data/Code"

[[instances]]
name = "Insiders"
channel = "insiders"
app_data = "/data/Insiders"

[[instances]]
name = "Off"
app_data = "/data/Off"
enabled = false
"#,
        )?;

        let config = Config::load_from(&path)?;
        let instances = config.resolve_instances();

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].name, "Code");
        assert_eq!(instances[0].app_data(), Path::new("/data/Code"));
        assert_eq!(instances[1].channel.as_deref(), Some("insiders"));
        Ok(())
    }

    #[test]
    fn test_invalid_config_mentions_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[[instances]]\nname = 3\n")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
        Ok(())
    }

    #[test]
    fn test_instances_from_dirs_uses_directory_name() {
        let instances = instances_from_dirs(&[PathBuf::from("/data/Cursor")]);
        assert_eq!(instances[0].name, "Cursor");
        assert_eq!(instances[0].app_data(), Path::new("/data/Cursor"));
    }
}
