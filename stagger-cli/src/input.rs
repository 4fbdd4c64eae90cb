//! Layout input documents and configuration merging.
//!
//! Input is a JSON document:
//!
//! ```json
//! { "rows": 2, "constraints": { "max_width": 300 }, "children": [{ "width": 10, "height": 5 }] }
//! ```
//!
//! Every field is optional. Command-line flags override values from the file.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use stagger::{Constraints, Size, DEFAULT_ROWS};

/// A layout request read from disk or stdin.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutInput {
    pub rows: Option<usize>,
    pub constraints: Option<Constraints>,
    pub children: Vec<Size>,
}

impl LayoutInput {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid layout input")
    }

    /// Read from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        let text = if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read layout input from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read layout input {}", path.display()))?
        };
        let input = Self::parse(&text)?;
        tracing::debug!(children = input.children.len(), "layout input loaded");
        Ok(input)
    }
}

/// Per-field constraint overrides from the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct ConstraintArgs {
    /// Minimum container width
    #[arg(long)]
    pub min_width: Option<u32>,
    /// Maximum container width (unbounded if omitted)
    #[arg(long)]
    pub max_width: Option<u32>,
    /// Minimum container height
    #[arg(long)]
    pub min_height: Option<u32>,
    /// Maximum container height (unbounded if omitted)
    #[arg(long)]
    pub max_height: Option<u32>,
}

impl ConstraintArgs {
    /// Apply overrides on top of `base`. The result is not validated here;
    /// layout entry points reject inverted envelopes.
    pub fn apply(&self, base: Constraints) -> Constraints {
        Constraints {
            min_width: self.min_width.unwrap_or(base.min_width),
            max_width: self.max_width.unwrap_or(base.max_width),
            min_height: self.min_height.unwrap_or(base.min_height),
            max_height: self.max_height.unwrap_or(base.max_height),
        }
    }
}

/// Effective grid settings after merging defaults, file and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub constraints: Constraints,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            constraints: Constraints::UNBOUNDED,
        }
    }
}

impl GridConfig {
    pub fn resolve(input: &LayoutInput, rows: Option<usize>, overrides: &ConstraintArgs) -> Self {
        let defaults = Self::default();
        Self {
            rows: rows.or(input.rows).unwrap_or(defaults.rows),
            constraints: overrides.apply(input.constraints.unwrap_or(defaults.constraints)),
        }
    }
}
