// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::spec::ProcessSpec;

/// Top-level descriptor file as read from TOML.
///
/// This is a direct mapping of the on-disk format:
///
/// ```toml
/// [[apps]]
/// name = "attendance-app"
/// script = "/app/venv/bin/python3"
/// interpreter = "none"
/// args = ["-m", "streamlit", "run", "Home.py"]
/// cwd = "/app"
///
/// [apps.env]
/// PYTHONUNBUFFERED = "1"
/// ```
///
/// `apps` must be present; an empty list is valid and yields an empty set.
/// Unknown keys are rejected at parse time so a misspelled field fails loudly
/// instead of being silently ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawEcosystemFile {
    /// All app entries, in file order.
    pub apps: Vec<RawAppConfig>,
}

/// One `[[apps]]` entry.
///
/// Required fields (`name`, `script`) are `Option` here so that validation
/// can report *which* entry is missing *which* field, rather than surfacing a
/// bare deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawAppConfig {
    /// Identifier for the app; unique within one file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path to the executable or interpreter target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,

    /// `"none"` (treat `script` as directly executable) or an interpreter
    /// binary name. Omitted means `"none"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,

    /// Command-line arguments, passed to the child verbatim and in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Working directory for the child. Omitted means the child inherits the
    /// supervisor's working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Environment overlay applied on top of the supervisor's environment.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl From<&ProcessSpec> for RawAppConfig {
    fn from(spec: &ProcessSpec) -> Self {
        RawAppConfig {
            name: Some(spec.name.clone()),
            script: Some(spec.script.clone()),
            interpreter: Some(spec.interpreter.as_config_value().to_string()),
            args: spec.args.clone(),
            cwd: spec.cwd.clone(),
            env: spec.env.clone(),
        }
    }
}
