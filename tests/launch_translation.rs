// tests/launch_translation.rs

//! Spec → argv/cwd/env translation, and the launcher seam.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use launchspec::launch::{Launcher, TokioLauncher, build_command};
use launchspec::spec::{EcosystemFile, ProcessSpec};
use launchspec_test_utils::builders::{AppConfigBuilder, EcosystemBuilder};
use launchspec_test_utils::fake_launcher::RecordingLauncher;
use launchspec_test_utils::{init_tracing, with_timeout};

fn spec(eco: &EcosystemFile, name: &str) -> ProcessSpec {
    eco.get(name).expect("app in set").clone()
}

#[test]
fn direct_script_becomes_program_plus_args() {
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
        .build();

    let cmd = build_command(&spec(&eco, "attendance-app"));
    let std_cmd = cmd.as_std();

    assert_eq!(std_cmd.get_program(), OsStr::new("/app/myenv/bin/python3"));
    let args: Vec<String> = std_cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args, vec!["-m", "streamlit", "run", "Home.py"]);
    assert_eq!(std_cmd.get_current_dir(), Some(Path::new("/app")));

    let envs: Vec<_> = std_cmd.get_envs().collect();
    assert!(
        envs.contains(&(OsStr::new("PYTHONUNBUFFERED"), Some(OsStr::new("1")))),
        "env overlay entry applied to the command"
    );
}

#[test]
fn interpreter_binary_prepends_script_to_args() {
    let eco = EcosystemBuilder::new()
        .with_app(
            AppConfigBuilder::new("report", "scripts/report.py")
                .interpreter("python3")
                .arg("--daily")
                .build(),
        )
        .build();

    let cmd = build_command(&spec(&eco, "report"));
    let std_cmd = cmd.as_std();

    assert_eq!(std_cmd.get_program(), OsStr::new("python3"));
    let args: Vec<String> = std_cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args, vec!["scripts/report.py", "--daily"]);
    assert_eq!(std_cmd.get_current_dir(), None);
}

#[tokio::test]
async fn recording_launcher_sees_specs_in_set_order() {
    init_tracing();

    let eco = EcosystemBuilder::new()
        .with_app(AppConfigBuilder::new("web", "/srv/web/run").build())
        .with_app(AppConfigBuilder::new("worker", "/srv/worker/run").build())
        .with_app(AppConfigBuilder::new("beat", "/srv/beat/run").build())
        .build();

    let launched = Arc::new(Mutex::new(Vec::new()));
    let mut launcher = RecordingLauncher::new(Arc::clone(&launched));

    for spec in &eco {
        let handle = launcher.launch(spec.clone()).await.expect("fake launch");
        assert_eq!(handle.name, spec.name);
        assert!(handle.pid.is_some());
    }

    let order = launched.lock().unwrap().clone();
    assert_eq!(order, vec!["web", "worker", "beat"]);
}

#[cfg(unix)]
#[tokio::test]
async fn tokio_launcher_hands_over_a_live_child() {
    init_tracing();

    let eco = EcosystemBuilder::new()
        .with_app(
            AppConfigBuilder::new("one-shot", "/bin/sh")
                .arg("-c")
                .arg("exit 0")
                .build(),
        )
        .build();

    let mut launcher = TokioLauncher::new();
    let handle = with_timeout(launcher.launch(spec(&eco, "one-shot")))
        .await
        .expect("real launch");
    assert_eq!(handle.name, "one-shot");

    let mut children = launcher.into_children();
    assert_eq!(children.len(), 1);
    let (name, mut child) = children.pop().unwrap();
    assert_eq!(name, "one-shot");

    let status = with_timeout(child.wait()).await.expect("child reaped");
    assert!(status.success());
}

#[cfg(unix)]
#[tokio::test]
async fn run_foreground_propagates_the_exit_code() {
    init_tracing();

    let eco = EcosystemBuilder::new()
        .with_app(
            AppConfigBuilder::new("failing", "/bin/sh")
                .arg("-c")
                .arg("echo done; exit 7")
                .build(),
        )
        .build();

    let code = with_timeout(launchspec::launch::run_foreground(&spec(&eco, "failing")))
        .await
        .expect("spawn succeeds");
    assert_eq!(code, 7);
}
