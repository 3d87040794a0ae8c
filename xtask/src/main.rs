//! Build automation for kube-podmerge
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the project
//! - test: Run tests
//! - demo: Merge the sample pods under demos/
//! - ci: Run CI checks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for kube-podmerge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run only the tests under tests/
        #[arg(long)]
        integration: bool,
    },
    /// Merge the sample pods under demos/ and print the Deployment
    Demo {
        /// Print the merge summary table
        #[arg(long)]
        summary: bool,
    },
    /// Run CI checks (format, clippy, test)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { integration } => test(&sh, integration),
        Commands::Demo { summary } => demo(&sh, summary),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    let profile: &[&str] = if release { &["--release"] } else { &[] };
    cmd!(sh, "cargo build {profile...}").run()?;
    println!("✅ Build completed");
    Ok(())
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    if integration {
        cmd!(sh, "cargo test --test integration_test --test loader_test").run()?;
    } else {
        cmd!(sh, "cargo test --workspace").run()?;
    }
    println!("✅ All tests passed");
    Ok(())
}

fn demo(sh: &Shell, summary: bool) -> Result<()> {
    let flags: &[&str] = if summary { &["--summary"] } else { &[] };
    cmd!(
        sh,
        "cargo run --quiet -- merge demos/runtime.yaml demos/database.yaml --config demos/podmerge.toml {flags...}"
    )
    .run()
    .context("Demo merge failed")?;
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("📝 Checking formatting...");
    format(sh, true)?;

    println!("🔧 Running clippy...");
    clippy(sh)?;

    println!("🧪 Running tests...");
    test(sh, false)?;

    println!("✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    let check_flags: &[&str] = if check { &["--", "--check"] } else { &[] };
    cmd!(sh, "cargo fmt --all {check_flags...}").run()?;
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}
