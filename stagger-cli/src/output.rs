//! Rendering of layout results.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use stagger::{MeasuredLayout, RowMetrics};

/// Output format for layout reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable table
    Table,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    layout: &'a str,
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "no_rows")]
    rows: &'a [RowMetrics],
    children: Vec<ChildReport<'a>>,
}

#[derive(Debug, Serialize)]
struct ChildReport<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

fn no_rows(rows: &&[RowMetrics]) -> bool {
    rows.is_empty()
}

fn report<'a>(name: &'a str, layout: &'a MeasuredLayout, labels: &[&'a str]) -> Report<'a> {
    let mut row_of = vec![None; layout.len()];
    for row in &layout.rows {
        for &child in &row.children {
            if let Some(slot) = row_of.get_mut(child) {
                *slot = Some(row.index);
            }
        }
    }

    let children = layout
        .placeables
        .iter()
        .enumerate()
        .filter_map(|(index, placeable)| {
            let rect = placeable.rect()?;
            Some(ChildReport {
                index,
                row: row_of[index],
                label: labels.get(index).copied(),
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            })
        })
        .collect();

    Report {
        layout: name,
        width: layout.size.width,
        height: layout.size.height,
        rows: &layout.rows,
        children,
    }
}

/// Render `layout` in the requested format. `labels` names children by index
/// where available.
pub fn render(name: &str, layout: &MeasuredLayout, labels: &[&str], format: Format) -> Result<String> {
    let report = report(name, layout, labels);
    match format {
        Format::Json => serde_json::to_string_pretty(&report).context("failed to serialize layout"),
        Format::Table => Ok(render_table(&report)),
    }
}

fn render_table(report: &Report<'_>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} {}x{}", report.layout, report.width, report.height);
    for row in report.rows {
        let _ = writeln!(
            out,
            "  row {}: y={} {}x{} children={:?}",
            row.index, row.y, row.width, row.height, row.children
        );
    }
    for child in &report.children {
        let row = child.row.map_or_else(|| "-".to_string(), |row| row.to_string());
        let _ = write!(
            out,
            "  #{:<3} row {:<2} ({}, {}) {}x{}",
            child.index, row, child.x, child.y, child.width, child.height
        );
        if let Some(label) = child.label {
            let _ = write!(out, "  {label}");
        }
        out.push('\n');
    }
    out
}
