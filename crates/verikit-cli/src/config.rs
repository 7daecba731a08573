use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use verikit_driver::config::SuiteConfig;
use verikit_templater::TemplateConfig;

/// Everything in `verikit.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub suite: SuiteConfig,
    #[serde(default)]
    pub templater: TemplateConfig,
}

impl Config {
    pub fn starter() -> Self {
        Self {
            suite: SuiteConfig::starter(),
            templater: TemplateConfig::default(),
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    let config: Config = serde_json::from_str(&data)
        .with_context(|| format!("invalid config JSON in {}", path.display()))?;
    config.suite.validate()?;
    Ok(config)
}

/// Templater settings, falling back to defaults when there is no config file.
pub fn load_templater(path: &Path) -> Result<TemplateConfig> {
    if !path.exists() {
        return Ok(TemplateConfig::default());
    }
    Ok(load(path)?.templater)
}

pub fn save(path: &Path, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json + "\n").with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

pub fn mask(s: &str) -> String {
    if s.len() <= 8 {
        return s.to_string();
    }
    format!("{}***{}", &s[..4], &s[s.len() - 4..])
}
