// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::RawEcosystemFile;
use crate::config::validate::validate_specs;
use crate::errors::{ConfigError, Result};
use crate::fs::FileSystem;
use crate::spec::{EcosystemFile, Strictness};

/// Parse descriptor text into the raw model.
///
/// This only performs TOML deserialization; it does **not** perform shape or
/// semantic validation. Use [`load_and_validate`] for that.
pub fn load_from_str(contents: &str) -> std::result::Result<RawEcosystemFile, ConfigError> {
    let raw: RawEcosystemFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Read a descriptor file through the filesystem abstraction and parse it.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawEcosystemFile> {
    let contents = fs.read_to_string(path.as_ref())?;
    Ok(load_from_str(&contents)?)
}

/// Load a descriptor file and run full validation.
///
/// This is the recommended entry point for supervisors:
///
/// - Reads TOML via `fs`.
/// - Shape validation: required fields present, names unique.
/// - Semantic validation per spec: interpreter well-formed, and (under
///   [`Strictness::Strict`]) `script` / `cwd` exist on disk.
///
/// The result preserves file order and is immutable; nothing is spawned.
pub fn load_and_validate(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    strictness: Strictness,
) -> Result<EcosystemFile> {
    let raw = load_from_path(fs, &path)?;
    let ecosystem = EcosystemFile::try_from(raw)?;
    validate_specs(&ecosystem, fs, strictness)?;
    Ok(ecosystem)
}

/// Default descriptor path: `Launchspec.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Launchspec.toml")
}
