// src/spec.rs

//! Validated launch descriptors.
//!
//! [`ProcessSpec`] is the immutable record a supervisor consumes; it can only
//! be obtained by converting a [`RawEcosystemFile`] through validation, so a
//! `ProcessSpec` in hand always has a non-empty name and script.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::config::model::{RawAppConfig, RawEcosystemFile};
use crate::errors::{Result, ValidationError};
use crate::fs::FileSystem;

/// How `script` should be invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpreter {
    /// `script` is directly executable (config value `"none"`). This is also
    /// the default when the field is omitted; in the common case the script
    /// path already points at a full runtime binary.
    None,
    /// Run `script` through the named interpreter binary.
    Binary(String),
}

impl Interpreter {
    /// Parse the raw config value. `None` and `"none"` mean no interpreter;
    /// anything non-empty names a binary. An empty string is returned as the
    /// offending value.
    pub fn from_config_value(value: Option<&str>) -> std::result::Result<Self, String> {
        match value {
            None => Ok(Interpreter::None),
            Some("none") => Ok(Interpreter::None),
            Some("") => Err(String::new()),
            Some(binary) => Ok(Interpreter::Binary(binary.to_string())),
        }
    }

    /// The value as written in a descriptor file.
    pub fn as_config_value(&self) -> &str {
        match self {
            Interpreter::None => "none",
            Interpreter::Binary(binary) => binary,
        }
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_config_value())
    }
}

/// How much semantic validation to apply.
///
/// Descriptor files are routinely authored on machines other than the target
/// host, so on-disk path checks are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Host-independent checks only (the default).
    #[default]
    ShapeOnly,
    /// Additionally require `script` and `cwd` to exist on disk.
    Strict,
}

/// A validated, immutable record describing how to launch one supervised
/// child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Unique identifier within one loaded set.
    pub name: String,

    /// Path to the executable or interpreter target.
    pub script: PathBuf,

    /// How `script` is invoked.
    pub interpreter: Interpreter,

    /// Arguments passed to the child verbatim, order preserved.
    pub args: Vec<String>,

    /// Working directory for the child; `None` inherits the supervisor's.
    pub cwd: Option<PathBuf>,

    /// Environment overlay; applied on top of the supervisor's environment,
    /// overlay values win on key collision.
    pub env: BTreeMap<String, String>,
}

impl ProcessSpec {
    /// Semantic validation for this spec.
    ///
    /// Always checks host-independent invariants; under
    /// [`Strictness::Strict`], `script` must be a file and `cwd` (when set)
    /// a directory on the given filesystem.
    pub fn validate(
        &self,
        fs: &dyn FileSystem,
        strictness: Strictness,
    ) -> std::result::Result<(), ValidationError> {
        if let Interpreter::Binary(binary) = &self.interpreter {
            if binary.is_empty() {
                return Err(ValidationError::InvalidInterpreter {
                    app: self.name.clone(),
                    value: binary.clone(),
                });
            }
        }

        if self.script.as_os_str().is_empty() {
            return Err(ValidationError::PathNotFound {
                app: self.name.clone(),
                path: self.script.clone(),
            });
        }

        if strictness == Strictness::Strict {
            if !fs.is_file(&self.script) {
                return Err(ValidationError::PathNotFound {
                    app: self.name.clone(),
                    path: self.script.clone(),
                });
            }
            if let Some(cwd) = &self.cwd {
                if !fs.is_dir(cwd) {
                    return Err(ValidationError::PathNotFound {
                        app: self.name.clone(),
                        path: cwd.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply this spec's environment overlay on top of `base`.
    ///
    /// Overlay values take precedence on key collision; keys are
    /// case-sensitive.
    pub fn merged_env(&self, base: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut merged = base.clone();
        for (key, value) in &self.env {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// A validated set of [`ProcessSpec`] records, in file order.
///
/// Construction goes through `TryFrom<RawEcosystemFile>`; the set is
/// immutable afterwards. Hot reload replaces a whole `EcosystemFile` at once
/// (see [`crate::registry::SpecRegistry`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemFile {
    specs: Vec<ProcessSpec>,
}

impl EcosystemFile {
    pub(crate) fn new_unchecked(specs: Vec<ProcessSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[ProcessSpec] {
        &self.specs
    }

    pub fn get(&self, name: &str) -> Option<&ProcessSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Serialize back to the on-disk TOML shape.
    ///
    /// Reloading the output yields an equal set; order and field values are
    /// preserved.
    pub fn to_toml_string(&self) -> Result<String> {
        let raw = RawEcosystemFile {
            apps: self.specs.iter().map(RawAppConfig::from).collect(),
        };
        Ok(toml::to_string_pretty(&raw)?)
    }
}

impl<'a> IntoIterator for &'a EcosystemFile {
    type Item = &'a ProcessSpec;
    type IntoIter = std::slice::Iter<'a, ProcessSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
