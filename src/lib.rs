// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod launch;
pub mod logging;
pub mod registry;
pub mod spec;

use std::path::PathBuf;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::errors::{LaunchspecError, Result};
use crate::fs::RealFileSystem;
use crate::spec::{EcosystemFile, Strictness};

/// High-level entry point used by `main.rs`. Returns the process exit code.
///
/// This wires together:
/// - descriptor loading + validation
/// - `--check` / `--dry-run` inspection modes
/// - `--exec` foreground launch of a single app
pub async fn run(args: CliArgs) -> Result<i32> {
    let fs = RealFileSystem;
    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::ShapeOnly
    };

    let config_path = PathBuf::from(&args.config);
    let ecosystem = load_and_validate(&fs, &config_path, strictness)?;
    info!(
        config = %config_path.display(),
        apps = ecosystem.len(),
        "descriptor loaded"
    );

    if args.check {
        println!("{}: OK ({} apps)", config_path.display(), ecosystem.len());
        return Ok(0);
    }

    if args.dry_run {
        print_dry_run(&ecosystem);
        return Ok(0);
    }

    if let Some(name) = &args.exec {
        let spec = ecosystem
            .get(name)
            .ok_or_else(|| LaunchspecError::AppNotFound(name.clone()))?;
        let code = launch::run_foreground(spec).await?;
        return Ok(code);
    }

    print_summary(&ecosystem);
    Ok(0)
}

/// Default output: one line per app.
fn print_summary(ecosystem: &EcosystemFile) {
    println!("apps ({}):", ecosystem.len());
    for spec in ecosystem {
        println!(
            "  - {} ({} {})",
            spec.name,
            spec.interpreter,
            spec.script.display()
        );
    }
}

/// Full dry-run output: print every field of every spec.
fn print_dry_run(ecosystem: &EcosystemFile) {
    println!("launchspec dry-run");
    println!();

    println!("apps ({}):", ecosystem.len());
    for spec in ecosystem {
        println!("  - {}", spec.name);
        println!("      script: {}", spec.script.display());
        println!("      interpreter: {}", spec.interpreter);
        if !spec.args.is_empty() {
            println!("      args: {:?}", spec.args);
        }
        if let Some(ref cwd) = spec.cwd {
            println!("      cwd: {}", cwd.display());
        }
        for (key, value) in &spec.env {
            println!("      env.{key}: {value}");
        }
    }
}
