// src/config/mod.rs

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_from_str};
pub use model::{RawAppConfig, RawEcosystemFile};
pub use validate::validate_specs;
