// src/launch/mod.rs

//! The spawn half of the supervisor boundary.
//!
//! This crate owns the *translation* of a [`crate::spec::ProcessSpec`] into
//! an OS-level spawn (argv, cwd, environment overlay) and nothing more:
//! start/monitor/restart policy belongs to the supervisor consuming the
//! specs. [`Launcher`] is the seam a supervisor plugs into;
//! [`run_foreground`] is the CLI's one-shot variant.

pub mod backend;
pub mod command;

pub use backend::{LaunchedApp, Launcher, TokioLauncher};
pub use command::{build_command, run_foreground};
