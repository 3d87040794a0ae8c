//! Table rendering for CLI output

use super::{ColorTheme, EntryStatus, StatusIcon};
use crate::domain::merge::{MergeReport, Rename};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use crate::domain::model::Container;
use std::collections::HashMap;

/// One row of the merge summary
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub kind: &'static str,
    pub name: String,
    pub status: EntryStatus,
    pub detail: String,
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render what a merge produced, one row per container, init container,
    /// volume and image pull secret.
    pub fn render_merge_summary(&self, report: &MergeReport) -> String {
        let entries = summary_entries(report);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
                Cell::new("DETAIL").set_alignment(CellAlignment::Left),
            ]);

        for entry in &entries {
            let color = self.theme.get_status_color(entry.status);
            table.add_row(vec![
                Cell::new(entry.kind),
                Cell::new(&entry.name),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::for_status(entry.status),
                    entry.status.as_str()
                ))
                .fg(color),
                Cell::new(&entry.detail),
            ]);
        }

        let selector = if report.workload.selector.is_empty() {
            "(empty)".to_string()
        } else {
            report
                .workload
                .selector
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(",")
        };

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Merged Pod {} ─╮\n",
            format!("[{} entries]", entries.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!("Selector: {}\n", selector.cyan()));
        output.push_str(&format!(
            "Legend: {} Kept  {} Renamed  {} Dropped\n",
            StatusIcon::SUCCESS.green(),
            StatusIcon::WARNING.yellow(),
            StatusIcon::DROPPED.bright_black()
        ));

        output
    }
}

fn summary_entries(report: &MergeReport) -> Vec<EntryInfo> {
    let spec = &report.workload.pod_template.spec;
    let mut entries = Vec::new();

    entries.extend(container_entries(
        "container",
        &spec.containers,
        &report.container_renames,
    ));
    entries.extend(container_entries(
        "initContainer",
        &spec.init_containers,
        &report.init_container_renames,
    ));

    entries.extend(spec.volumes.iter().map(|v| EntryInfo {
        kind: "volume",
        name: v.name.clone(),
        status: EntryStatus::Kept,
        detail: String::new(),
    }));

    entries.extend(spec.image_pull_secrets.iter().map(|s| EntryInfo {
        kind: "imagePullSecret",
        name: s.name.clone(),
        status: EntryStatus::Kept,
        detail: String::new(),
    }));

    entries.extend(report.dropped_secrets.iter().map(|name| EntryInfo {
        kind: "imagePullSecret",
        name: name.clone(),
        status: EntryStatus::Dropped,
        detail: "duplicate reference".to_string(),
    }));

    entries
}

fn container_entries(
    kind: &'static str,
    containers: &[Container],
    renames: &[Rename],
) -> Vec<EntryInfo> {
    let by_position: HashMap<usize, &Rename> = renames.iter().map(|r| (r.position, r)).collect();

    containers
        .iter()
        .enumerate()
        .map(|(position, container)| match by_position.get(&position) {
            Some(rename) => EntryInfo {
                kind,
                name: container.name.clone(),
                status: EntryStatus::Renamed,
                detail: format!("was {}", rename.original),
            },
            None => EntryInfo {
                kind,
                name: container.name.clone(),
                status: EntryStatus::Kept,
                detail: String::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::merge::{PodMerger, SuffixStrategy};
    use crate::domain::model::PodDescriptor;

    fn container(name: &str) -> Container {
        Container::new(name)
    }

    fn sample_report() -> MergeReport {
        let merger = PodMerger::new(SuffixStrategy::Sequential {
            separator: "-".to_string(),
        });
        let descriptors = vec![
            PodDescriptor::builder()
                .label("app", "env")
                .container(container("tools"))
                .image_pull_secret("registry")
                .build(),
            PodDescriptor::builder()
                .container(container("tools"))
                .image_pull_secret("registry")
                .build(),
        ];
        merger.merge_with_report(&descriptors).unwrap()
    }

    #[test]
    fn test_summary_entries() {
        let entries = summary_entries(&sample_report());
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].status, EntryStatus::Kept);
        assert_eq!(entries[1].name, "tools-1");
        assert_eq!(entries[1].status, EntryStatus::Renamed);
        assert_eq!(entries[1].detail, "was tools");
        assert_eq!(entries[3].status, EntryStatus::Dropped);
    }

    #[test]
    fn test_render_merge_summary() {
        let output = TableRenderer::new().render_merge_summary(&sample_report());
        assert!(output.contains("tools-1"));
        assert!(output.contains("registry"));
        assert!(output.contains("app=env"));
    }
}
