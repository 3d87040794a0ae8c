// CLI command definitions

use super::merge::{CheckCommand, MergeCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "kube-podmerge",
    version,
    about = "Merge several pod definitions into one Kubernetes workload",
    long_about = "A standalone CLI tool that combines pod definitions into a single pod template and selector"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Merge pod descriptor files and print the resulting workload
    Merge(MergeCommand),

    /// Check that pod descriptor files merge cleanly without printing a manifest
    Check(CheckCommand),
}
