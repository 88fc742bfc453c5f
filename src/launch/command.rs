// src/launch/command.rs

use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::spec::{Interpreter, ProcessSpec};

/// Translate a spec into a spawnable command.
///
/// - [`Interpreter::None`]: argv is `[script, args...]`.
/// - [`Interpreter::Binary`]: argv is `[interpreter, script, args...]`.
///
/// `cwd` is applied when set; `env` entries are applied on top of the
/// inherited environment, so overlay values win on key collision.
pub fn build_command(spec: &ProcessSpec) -> Command {
    let mut cmd = match &spec.interpreter {
        Interpreter::None => Command::new(&spec.script),
        Interpreter::Binary(binary) => {
            let mut c = Command::new(binary);
            c.arg(&spec.script);
            c
        }
    };

    cmd.args(&spec.args);

    if let Some(cwd) = &spec.cwd {
        cmd.current_dir(cwd);
    }
    cmd.envs(&spec.env);

    cmd
}

/// Run one app in the foreground and return its exit code.
///
/// Child stdout is forwarded to our stdout verbatim; stderr is consumed and
/// logged at debug so pipe buffers never fill. Ctrl-C kills the child and
/// returns 130. Deliberately one-shot: no restart, no monitoring.
pub async fn run_foreground(spec: &ProcessSpec) -> Result<i32> {
    info!(
        app = %spec.name,
        script = ?spec.script,
        interpreter = %spec.interpreter,
        "starting app process"
    );

    let mut cmd = build_command(spec);
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for app '{}'", spec.name))?;

    if let Some(stdout) = child.stdout.take() {
        let app = spec.name.clone();
        tokio::spawn(async move {
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                println!("{line}");
            }
            debug!(app = %app, "stdout closed");
        });
    }

    if let Some(stderr) = child.stderr.take() {
        let app = spec.name.clone();
        tokio::spawn(async move {
            let reader = BufReader::new(stderr);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                debug!(app = %app, "stderr: {}", line);
            }
        });
    }

    tokio::select! {
        status_res = child.wait() => {
            let status = status_res
                .with_context(|| format!("waiting for process of app '{}'", spec.name))?;

            let code = status.code().unwrap_or(-1);
            info!(
                app = %spec.name,
                exit_code = code,
                success = status.success(),
                "app process exited"
            );
            Ok(code)
        }

        _ = tokio::signal::ctrl_c() => {
            info!(app = %spec.name, "interrupt received; stopping app process");
            if let Err(e) = child.kill().await {
                warn!(app = %spec.name, error = %e, "failed to kill app process");
            }
            Ok(130)
        }
    }
}
