// tests/roundtrip.rs

//! Serializing a loaded set and reloading it yields an equal set.

use std::path::PathBuf;

use proptest::prelude::*;

use launchspec::config::{RawAppConfig, RawEcosystemFile, load_from_str};
use launchspec::spec::EcosystemFile;
use launchspec_test_utils::builders::{AppConfigBuilder, EcosystemBuilder};

fn reload(eco: &EcosystemFile) -> EcosystemFile {
    let text = eco.to_toml_string().expect("serializes");
    let raw = load_from_str(&text).expect("reparses");
    EcosystemFile::try_from(raw).expect("revalidates")
}

#[test]
fn attendance_style_descriptor_roundtrips() {
    let eco = EcosystemBuilder::new()
        .with_app(
            AppConfigBuilder::new("attendance-app", "/app/myenv/bin/python3")
                .interpreter("none")
                .arg("-m")
                .arg("streamlit")
                .arg("run")
                .arg("Home.py")
                .cwd("/app")
                .env("PYTHONUNBUFFERED", "1")
                .build(),
        )
        .with_app(
            AppConfigBuilder::new("worker", "/app/worker.sh")
                .interpreter("bash")
                .build(),
        )
        .build();

    assert_eq!(reload(&eco), eco);
}

#[test]
fn empty_set_roundtrips() {
    let eco = EcosystemBuilder::new().build();
    assert_eq!(reload(&eco), eco);
}

fn app_strategy(index: usize) -> impl Strategy<Value = RawAppConfig> {
    (
        proptest::collection::vec("[ -~]{0,12}", 0..4),
        proptest::collection::btree_map("[A-Z][A-Z0-9_]{0,7}", "[ -~]{0,12}", 0..3),
        proptest::option::of("[a-z0-9/._-]{1,20}"),
        proptest::option::of(prop_oneof![
            Just("none".to_string()),
            "[a-z][a-z0-9]{0,8}",
        ]),
    )
        .prop_map(move |(args, env, cwd, interpreter)| RawAppConfig {
            name: Some(format!("app-{index}")),
            script: Some(PathBuf::from(format!("/srv/app-{index}/run"))),
            interpreter,
            args,
            cwd: cwd.map(PathBuf::from),
            env,
        })
}

fn ecosystem_strategy() -> impl Strategy<Value = EcosystemFile> {
    (0usize..5)
        .prop_flat_map(|n| {
            let apps: Vec<_> = (0..n).map(app_strategy).collect();
            apps
        })
        .prop_map(|apps| {
            EcosystemFile::try_from(RawEcosystemFile { apps })
                .expect("generated descriptors are shape-valid")
        })
}

proptest! {
    #[test]
    fn any_valid_descriptor_roundtrips(eco in ecosystem_strategy()) {
        let reloaded = reload(&eco);

        prop_assert_eq!(reloaded.len(), eco.len());
        prop_assert_eq!(&reloaded, &eco);
    }
}
