// src/config/validate.rs

use std::collections::HashMap;

use crate::config::model::{RawAppConfig, RawEcosystemFile};
use crate::errors::{ConfigError, LaunchspecError, ValidationError};
use crate::fs::FileSystem;
use crate::spec::{EcosystemFile, Interpreter, ProcessSpec, Strictness};

impl TryFrom<RawEcosystemFile> for EcosystemFile {
    type Error = LaunchspecError;

    /// Shape validation: every entry has `name` and `script`, names are
    /// unique, and the interpreter field is well-formed. Either the whole
    /// file converts or nothing does; there is no partial result.
    fn try_from(raw: RawEcosystemFile) -> std::result::Result<Self, Self::Error> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut specs = Vec::with_capacity(raw.apps.len());

        for (index, app) in raw.apps.into_iter().enumerate() {
            let spec = convert_entry(app, index)?;

            if let Some(&first) = seen.get(&spec.name) {
                return Err(ConfigError::DuplicateName {
                    name: spec.name,
                    first,
                    second: index,
                }
                .into());
            }
            seen.insert(spec.name.clone(), index);
            specs.push(spec);
        }

        Ok(EcosystemFile::new_unchecked(specs))
    }
}

fn convert_entry(app: RawAppConfig, index: usize) -> std::result::Result<ProcessSpec, LaunchspecError> {
    let name = match app.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ConfigError::MissingField { field: "name", index }.into()),
    };

    let script = match app.script {
        Some(script) if !script.as_os_str().is_empty() => script,
        _ => return Err(ConfigError::MissingField { field: "script", index }.into()),
    };

    let interpreter = Interpreter::from_config_value(app.interpreter.as_deref())
        .map_err(|value| ValidationError::InvalidInterpreter {
            app: name.clone(),
            value,
        })?;

    Ok(ProcessSpec {
        name,
        script,
        interpreter,
        args: app.args,
        cwd: app.cwd,
        env: app.env,
    })
}

/// Run per-spec semantic validation over a converted set.
///
/// Under [`Strictness::ShapeOnly`] this re-checks only host-independent
/// invariants; [`Strictness::Strict`] additionally requires `script` and
/// `cwd` to exist on the given filesystem.
pub fn validate_specs(
    ecosystem: &EcosystemFile,
    fs: &dyn FileSystem,
    strictness: Strictness,
) -> std::result::Result<(), ValidationError> {
    for spec in ecosystem.specs() {
        spec.validate(fs, strictness)?;
    }
    Ok(())
}
