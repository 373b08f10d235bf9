use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

// A missing file yields the default config; unreadable or invalid content is
// an error the caller must surface.
pub fn load_yaml_config<TConfig>(path: &Path) -> Result<TConfig, String>
where
    TConfig: for<'de> Deserialize<'de> + Validate + Default,
{
    if !path.exists() {
        return Ok(TConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_yaml_config<TConfig>(path: &Path, config: &TConfig) -> Result<(), String>
where
    TConfig: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))?;

    Ok(())
}
