use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::element::naming::{DEFAULT_PREFIXES, NameConvention};

pub const DEFAULT_CONFIG_FILE: &str = "ui-codegen.yaml";
pub const DEFAULT_OUTPUT_PATH: &str = "Assets/Script/UI";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "ui-codegen",
    version,
    about = "Generate UI binding and logic scripts from an element tree"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: ui-codegen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output root for generated scripts (overrides config)
    #[arg(long, global = true)]
    pub output: Option<String>,
}

/// Element tree input shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Element tree document (.yaml, .yml or .json)
    #[arg(long)]
    pub tree: PathBuf,

    /// UI roots to process (default: every root in the document)
    #[arg(long = "root")]
    pub roots: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate binding artifacts
    Bind {
        #[command(flatten)]
        input: TreeArgs,
    },

    /// Scaffold logic artifacts
    Logic {
        #[command(flatten)]
        input: TreeArgs,

        /// Overwrite an existing logic artifact
        #[arg(long)]
        force: bool,
    },

    /// Regenerate bindings and scaffold missing logic artifacts
    All {
        #[command(flatten)]
        input: TreeArgs,
    },

    /// Print both artifacts for one root without writing anything
    Preview {
        /// Element tree document (.yaml, .yml or .json)
        #[arg(long)]
        tree: PathBuf,

        /// UI root to render
        #[arg(long)]
        root: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `ui-codegen.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL generation journal; disabled when unset
    pub file: Option<String>,
}

// Serde default helpers
fn default_output_path() -> String { DEFAULT_OUTPUT_PATH.to_string() }
fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect()
}

impl AppConfig {
    pub fn naming_convention(&self) -> NameConvention {
        NameConvention::new(self.naming.prefixes.clone())
    }

    /// CLI flags take precedence over the config file.
    pub fn with_output_override(mut self, output: Option<&str>) -> Self {
        if let Some(path) = output {
            self.output.path = path.to_string();
        }
        self
    }
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            warn!(path = config_path, "ignoring malformed config: {}", e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_yaml::from_str(content)
}
