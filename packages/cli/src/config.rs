use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uxcore_compiler_live_templates::{TemplateOptions, DEFAULT_GROUP};

pub const DEFAULT_CONFIG_NAME: &str = "live-templates.config.json";

/// Live-template generator configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Qualified component keys to leave out
    #[serde(default)]
    pub skip: Vec<String>,

    /// Parents whose sub-components are registered under their bare name
    #[serde(default)]
    pub skip_parent_name: Vec<String>,

    /// Prefix for every template name
    #[serde(default)]
    pub prefix: String,

    /// Template set group
    #[serde(default = "default_group")]
    pub group: String,

    /// Library manifest, relative to the project directory
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Generated template set, relative to the project directory
    #[serde(default = "default_out_file")]
    pub out_file: String,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

fn default_manifest() -> String {
    uxcore_manifest::DEFAULT_MANIFEST_NAME.to_string()
}

fn default_out_file() -> String {
    "resources/liveTemplates/UXCore.xml".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the library manifest
    pub fn get_manifest_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.manifest)
    }

    /// Get absolute path to the generated template set
    pub fn get_out_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_file)
    }

    pub fn to_template_options(&self) -> TemplateOptions {
        TemplateOptions {
            skip: self.skip.iter().cloned().collect(),
            skip_parent_name: self.skip_parent_name.iter().cloned().collect(),
            prefix: self.prefix.clone(),
            group: self.group.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip: vec![],
            skip_parent_name: vec![],
            prefix: String::new(),
            group: default_group(),
            manifest: default_manifest(),
            out_file: default_out_file(),
        }
    }
}
