//! stagger - run measure/place layouts from the command line.
//!
//! Reads child sizes as JSON, lays them out as a staggered grid or a column,
//! and prints the container size and every child's bounds.

mod input;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stagger::demo::{demo_layout, topics};
use stagger::{Column, LayoutPolicy, StaggeredGrid};
use tracing_subscriber::EnvFilter;

use input::{ConstraintArgs, GridConfig, LayoutInput};
use output::{render, Format};

#[derive(Debug, Parser)]
#[command(name = "stagger", version, about = "Measure/place layout engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal children round-robin into rows
    Grid {
        /// JSON layout input ("-" for stdin)
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
        /// Number of rows (overrides the input file)
        #[arg(long, short)]
        rows: Option<usize>,
        #[command(flatten)]
        constraints: ConstraintArgs,
    },
    /// Stack children top to bottom
    Column {
        /// JSON layout input ("-" for stdin)
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
        #[command(flatten)]
        constraints: ConstraintArgs,
    },
    /// Lay out the topic chip demo
    Demo {
        /// Number of rows
        #[arg(long, short)]
        rows: Option<usize>,
        #[command(flatten)]
        constraints: ConstraintArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = run(cli)?;
    println!("{report}");
    Ok(())
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Grid { input, rows, constraints } => {
            let doc = LayoutInput::read(&input)?;
            let config = GridConfig::resolve(&doc, rows, &constraints);
            tracing::info!(rows = config.rows, children = doc.children.len(), "running grid layout");

            let grid = StaggeredGrid::new(config.rows).context("invalid grid configuration")?;
            let layout = grid
                .measure(&doc.children, config.constraints)
                .context("grid layout rejected its input")?;
            render("grid", &layout, &[], cli.format)
        }
        Command::Column { input, constraints } => {
            let doc = LayoutInput::read(&input)?;
            let config = GridConfig::resolve(&doc, None, &constraints);
            tracing::info!(children = doc.children.len(), "running column layout");

            let layout = Column::new()
                .measure(&doc.children, config.constraints)
                .context("column layout rejected its input")?;
            render("column", &layout, &[], cli.format)
        }
        Command::Demo { rows, constraints } => {
            let config = GridConfig::resolve(&LayoutInput::default(), rows, &constraints);
            tracing::info!(rows = config.rows, "running topic demo");

            let layout = demo_layout(config.rows, config.constraints).context("demo layout failed")?;
            render("demo", &layout, topics(), cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn run_args(args: &[&str]) -> Result<String> {
        run(Cli::try_parse_from(args)?)
    }

    fn input_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const EXAMPLE: &str = r#"{"rows": 2, "children": [
        {"width": 10, "height": 5}, {"width": 20, "height": 8}, {"width": 30, "height": 3}
    ]}"#;

    #[test]
    fn test_grid_from_file() {
        let file = input_file(EXAMPLE);
        let path = file.path().to_str().unwrap();
        let out = run_args(&["stagger", "grid", "--input", path]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["width"], 40);
        assert_eq!(value["height"], 13);
        assert_eq!(value["children"][1]["y"], 5);
    }

    #[test]
    fn test_rows_flag_overrides_file() {
        let file = input_file(EXAMPLE);
        let path = file.path().to_str().unwrap();
        let out = run_args(&["stagger", "grid", "-i", path, "--rows", "1", "--format", "table"]).unwrap();
        assert!(out.starts_with("grid 60x8"));
    }

    #[test]
    fn test_zero_rows_is_an_error() {
        let file = input_file(EXAMPLE);
        let path = file.path().to_str().unwrap();
        let err = run_args(&["stagger", "grid", "-i", path, "--rows", "0"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid row count"));
    }

    #[test]
    fn test_inverted_constraints_are_an_error() {
        let file = input_file(EXAMPLE);
        let path = file.path().to_str().unwrap();
        let err = run_args(&["stagger", "grid", "-i", path, "--min-width", "50", "--max-width", "10"])
            .unwrap_err();
        assert!(format!("{err:#}").contains("min width 50 exceeds max width 10"));
    }

    #[test]
    fn test_negative_rows_rejected_by_parser() {
        assert!(Cli::try_parse_from(["stagger", "grid", "--rows", "-2"]).is_err());
    }

    #[test]
    fn test_column_command() {
        let file = input_file(EXAMPLE);
        let path = file.path().to_str().unwrap();
        let out = run_args(&["stagger", "column", "-i", path]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["height"], 16);
        assert_eq!(value["children"][2]["y"], 13);
    }

    #[test]
    fn test_demo_lists_topics() {
        let out = run_args(&["stagger", "demo", "--format", "table"]).unwrap();
        assert!(out.starts_with("demo "));
        assert!(out.contains("Arts & Crafts"));
        assert!(out.contains("Writing"));
    }
}
