//! Merge commands

use crate::domain::config::{apply_to_merge_conf, parse_dynamic_configs, MergeConf, OutputFormat};
use crate::domain::merge::PodMerger;
use crate::infrastructure::kubernetes::{load_descriptors_from_files, DeploymentBuilder};
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
pub struct MergeCommand {
    /// Pod descriptor files (YAML), merged in the order given
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Path to the merge configuration file (TOML)
    /// If not provided, reads KUBE_PODMERGE_CONF, otherwise uses defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Dynamic configuration properties to override any settings (-D key=value)
    ///
    /// Naming: merge.suffix-strategy (random, sequential), merge.suffix-length, merge.suffix-separator
    /// Output: output.format (yaml, json)
    /// Deployment: deployment.name, deployment.namespace, deployment.replicas
    ///
    /// Example: -Dmerge.suffix-strategy=sequential -Ddeployment.name=my-env
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Output format (yaml, json)
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Wrap the merged pod in a Deployment with this name
    #[arg(long)]
    pub deployment: Option<String>,

    /// Namespace of the Deployment
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Replicas of the Deployment
    #[arg(long)]
    pub replicas: Option<u32>,

    /// Print a summary table of the merge to stderr
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// Pod descriptor files (YAML), merged in the order given
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl MergeCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let conf = self.resolve_conf()?;

        let descriptors = load_descriptors_from_files(&self.files)?;
        let report = PodMerger::from_conf(&conf).merge_with_report(&descriptors)?;

        if self.summary {
            use crate::cli::display::TableRenderer;
            eprintln!("{}", TableRenderer::new().render_merge_summary(&report));
        }

        let output = match DeploymentBuilder::from_conf(&conf.deployment) {
            Some(builder) => render(&builder.build(&report.workload)?, conf.output.format)?,
            None => render(&report.workload, conf.output.format)?,
        };

        println!("{}", output);
        Ok(())
    }

    /// Priority: command line > -D properties > config file > defaults
    fn resolve_conf(&self) -> anyhow::Result<MergeConf> {
        let mut conf = load_conf(self.config.as_deref(), &self.properties)?;

        if let Some(ref output) = self.output {
            conf.output.format = output.parse::<OutputFormat>()?;
        }

        if let Some(ref name) = self.deployment {
            conf.deployment.name = Some(name.clone());
        }

        if let Some(ref namespace) = self.namespace {
            conf.deployment.namespace = Some(namespace.clone());
        }

        if let Some(replicas) = self.replicas {
            conf.deployment.replicas = replicas;
        }

        conf.validate()?;
        Ok(conf)
    }
}

impl CheckCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let conf = load_conf(self.config.as_deref(), &self.properties)?;
        conf.validate()?;

        let descriptors = load_descriptors_from_files(&self.files)?;
        let report = PodMerger::from_conf(&conf).merge_with_report(&descriptors)?;

        let spec = &report.workload.pod_template.spec;
        println!(
            "✓ {} pod descriptors merge cleanly: {} containers, {} init containers, {} volumes, {} image pull secrets",
            descriptors.len(),
            spec.containers.len(),
            spec.init_containers.len(),
            spec.volumes.len(),
            spec.image_pull_secrets.len()
        );

        for rename in report
            .container_renames
            .iter()
            .chain(report.init_container_renames.iter())
        {
            println!("  ⚠ {} renamed to {}", rename.original, rename.assigned);
        }

        Ok(())
    }
}

fn load_conf(config: Option<&str>, properties: &[String]) -> anyhow::Result<MergeConf> {
    let mut conf = MergeConf::load(config)?;

    if !properties.is_empty() {
        let dynamic_configs = parse_dynamic_configs(properties)
            .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
        apply_to_merge_conf(&dynamic_configs, &mut conf);
    }

    Ok(conf)
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered)
}
