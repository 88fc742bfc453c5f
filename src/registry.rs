// src/registry.rs

//! Live spec set for a supervisor instance.
//!
//! Reload semantics: a new descriptor file is loaded and validated first,
//! then [`SpecRegistry::replace`] swaps it in as a single unit. Readers hold
//! `Arc` snapshots, so a reader never observes a half-updated set and an
//! in-flight snapshot stays valid across a reload.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::spec::EcosystemFile;

pub struct SpecRegistry {
    current: RwLock<Arc<EcosystemFile>>,
}

impl SpecRegistry {
    pub fn new(initial: EcosystemFile) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The currently-live set. Cheap; clones an `Arc`.
    pub fn snapshot(&self) -> Arc<EcosystemFile> {
        self.current.read().expect("registry lock poisoned").clone()
    }

    /// Atomically replace the live set, returning the previous one.
    pub fn replace(&self, next: EcosystemFile) -> Arc<EcosystemFile> {
        let next = Arc::new(next);
        let mut guard = self.current.write().expect("registry lock poisoned");
        let previous = std::mem::replace(&mut *guard, next.clone());
        info!(
            previous_apps = previous.len(),
            current_apps = next.len(),
            "spec registry replaced"
        );
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_from_str;

    fn ecosystem(text: &str) -> EcosystemFile {
        EcosystemFile::try_from(load_from_str(text).unwrap()).unwrap()
    }

    #[test]
    fn snapshot_survives_replace() {
        let registry = SpecRegistry::new(ecosystem(
            r#"
[[apps]]
name = "a"
script = "/bin/a"
"#,
        ));

        let before = registry.snapshot();
        let old = registry.replace(ecosystem(
            r#"
[[apps]]
name = "b"
script = "/bin/b"

[[apps]]
name = "c"
script = "/bin/c"
"#,
        ));

        // The pre-reload snapshot is untouched and matches what replace
        // returned.
        assert_eq!(before.len(), 1);
        assert!(before.get("a").is_some());
        assert_eq!(*old, *before);

        let after = registry.snapshot();
        assert_eq!(after.len(), 2);
        assert!(after.get("a").is_none());
        assert!(after.get("b").is_some());
    }
}
