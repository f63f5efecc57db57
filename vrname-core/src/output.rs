use crate::catalog::NamingConvention;
use crate::export::{EntryStatus, ExportResult};
use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// One selectable player
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerItem {
    pub id: String,
    pub name: String,
    pub conventions: usize,
}

/// Result of a players operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResult {
    pub players: Vec<PlayerItem>,
}

/// Result of a conventions operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ConventionsResult {
    pub player: String,
    pub name: String,
    pub conventions: Vec<NamingConvention>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewPair {
    pub source: PathBuf,
    pub original: String,
    pub new: String,
}

/// Result of a preview operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResult {
    pub convention: NamingConvention,
    pub input_dir: PathBuf,
    pub scanned: usize,
    pub preview: Vec<PreviewPair>,
    pub collisions: Vec<String>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PlayersResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "players",
            "players": self.players,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        for player in &self.players {
            writeln!(
                output,
                "{:<14} {} ({} conventions)",
                player.id, player.name, player.conventions
            )
            .unwrap();
        }
        output
    }
}

impl OutputFormatter for ConventionsResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "conventions",
            "player": self.player,
            "name": self.name,
            "conventions": self.conventions,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{} ({})", self.name, self.player).unwrap();
        for convention in &self.conventions {
            writeln!(output, "  {:<16} {}", convention.label, convention.suffix).unwrap();
        }
        output
    }
}

impl OutputFormatter for PreviewResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "preview",
            "convention": self.convention,
            "input_dir": self.input_dir,
            "summary": {
                "scanned": self.scanned,
                "selected": self.preview.len(),
                "collisions": self.collisions.len(),
            },
            "preview": self.preview,
            "collisions": self.collisions,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = format!(
            "vrname preview: {} ({}) for {}\n",
            self.convention.label, self.convention.suffix, self.convention.player
        );
        writeln!(
            output,
            "Selected {} of {} files in {}",
            self.preview.len(),
            self.scanned,
            self.input_dir.display()
        )
        .unwrap();
        if !self.collisions.is_empty() {
            writeln!(
                output,
                "Collisions: {} (the last file in order wins)",
                self.collisions.join(", ")
            )
            .unwrap();
        }
        output
    }
}

impl ExportResult {
    pub fn format_summary_with_color(&self, use_color: bool) -> String {
        let paint = |color: Color, text: &str| {
            if use_color {
                color.paint(text).to_string()
            } else {
                text.to_string()
            }
        };

        let mut output = String::new();
        for outcome in &self.outcomes {
            match &outcome.status {
                EntryStatus::Copied { destination, .. } => writeln!(
                    output,
                    "{} {} -> {}",
                    paint(Color::Green, "✓"),
                    outcome.original_filename,
                    destination.display()
                )
                .unwrap(),
                EntryStatus::Failed { reason } => writeln!(
                    output,
                    "{} {}: {}",
                    paint(Color::Red, "✗"),
                    outcome.original_filename,
                    reason
                )
                .unwrap(),
                EntryStatus::Skipped => {},
            }
        }

        for name in &self.collisions {
            writeln!(
                output,
                "{} {} was written more than once; the last file wins",
                paint(Color::Yellow, "!"),
                name
            )
            .unwrap();
        }

        writeln!(
            output,
            "Copied {}, failed {}, skipped {}",
            self.copied_count, self.failed_count, self.skipped_count
        )
        .unwrap();
        output
    }
}

impl OutputFormatter for ExportResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.is_success(),
            "operation": "export",
            "destination_root": self.destination_root,
            "summary": {
                "copied_count": self.copied_count,
                "failed_count": self.failed_count,
                "skipped_count": self.skipped_count,
            },
            "results": self.outcomes,
            "collisions": self.collisions,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        self.format_summary_with_color(false)
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
