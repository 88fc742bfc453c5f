// src/launch/backend.rs

//! Pluggable launcher abstraction.
//!
//! A supervisor talks to a `Launcher` instead of spawning directly. This
//! keeps the boundary contract in one place and lets tests swap in a fake
//! that records launches without creating OS processes.
//!
//! - [`TokioLauncher`] is the real implementation: it spawns the child and
//!   keeps the handle for the supervisor to take over.
//! - Tests can provide their own `Launcher` that records which specs were
//!   launched.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use tokio::process::Child;
use tracing::info;

use crate::errors::Result;
use crate::spec::ProcessSpec;

use super::command::build_command;

/// Handle returned for a launched app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchedApp {
    pub name: String,
    /// OS pid; `None` once the process has been reaped.
    pub pid: Option<u32>,
}

/// Trait abstracting how validated specs become running processes.
pub trait Launcher: Send {
    /// Spawn one app. The implementation is free to:
    /// - spawn an OS process (production)
    /// - record the spec and fabricate a handle (tests)
    fn launch(
        &mut self,
        spec: ProcessSpec,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchedApp>> + Send + '_>>;
}

/// Real launcher used in production.
///
/// Children inherit our stdio and are *not* killed on drop: once spawned
/// they belong to the supervisor, which takes them via
/// [`TokioLauncher::into_children`].
#[derive(Default)]
pub struct TokioLauncher {
    children: Vec<(String, Child)>,
}

impl TokioLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand the spawned children over to the caller.
    pub fn into_children(self) -> Vec<(String, Child)> {
        self.children
    }
}

impl Launcher for TokioLauncher {
    fn launch(
        &mut self,
        spec: ProcessSpec,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchedApp>> + Send + '_>> {
        Box::pin(async move {
            let mut cmd = build_command(&spec);

            let child = cmd
                .spawn()
                .with_context(|| format!("spawning process for app '{}'", spec.name))?;

            let pid = child.id();
            info!(app = %spec.name, pid, "app process launched");

            self.children.push((spec.name.clone(), child));
            Ok(LaunchedApp {
                name: spec.name,
                pid,
            })
        })
    }
}
