//! Fennec CLI
//!
//! A small front end for trying the rectangle, JSON, and selector APIs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use fennec_css::{Combinator, FragmentKind, Selector, SimpleSelector, combine};
use fennec_objects::{Rectangle, deserialize, serialize_pretty};
use owo_colors::OwoColorize;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "fennec", version, about = "Rectangles, JSON shapes, and CSS selectors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the area of a WIDTH x HEIGHT rectangle
    Area {
        /// Horizontal extent
        #[arg(allow_negative_numbers = true)]
        width: f64,
        /// Vertical extent
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },

    /// Parse JSON and print it back, indented
    Json {
        /// File to read the JSON from
        #[arg(required_unless_present = "json", conflicts_with = "json")]
        file: Option<PathBuf>,
        /// JSON text given inline
        #[arg(long)]
        json: Option<String>,
        /// Rebuild the input as a rectangle and print its area
        #[arg(long)]
        rectangle: bool,
    },

    /// Build a selector from ordered steps
    ///
    /// Steps are `KIND=VALUE` (element, id, class, attr, pseudo-class,
    /// pseudo-element) or a combinator (`+`, `~`, `>`, `descendant`).
    ///
    /// Example: fennec selector element=div id=main + element=table id=data
    Selector {
        /// Fragments and combinators, in order
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
        /// Also print the specificity
        #[arg(long)]
        specificity: bool,
        /// Re-order each simple selector into CSS category order
        #[arg(long)]
        canonical: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Area { width, height } => {
            let rect = Rectangle::new(width, height);
            println!("{}", rect.area());
        }
        Command::Json {
            file,
            json,
            rectangle,
        } => {
            let text = load_json_text(file.as_deref(), json)?;
            if rectangle {
                let (pretty, area) = reload_rectangle(&text)?;
                println!("{pretty}");
                println!("{} {area}", "area:".bold());
            } else {
                let value: Value = deserialize(&text).context("failed to load JSON")?;
                println!("{}", serialize_pretty(&value)?);
            }
        }
        Command::Selector {
            steps,
            specificity,
            canonical,
        } => {
            let selector = build_selector(&steps, canonical)?;
            println!("{}", selector.stringify());
            if specificity {
                println!("{} {}", "specificity:".bold(), selector.specificity());
            }
        }
    }

    Ok(())
}

/// Inline `--json` text wins over FILE.
fn load_json_text(file: Option<&Path>, json: Option<String>) -> Result<String> {
    match (json, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        (None, None) => bail!("either a FILE or --json is required"),
    }
}

/// Rebuild `text` as a rectangle; returns its indented JSON and its area.
fn reload_rectangle(text: &str) -> Result<(String, f64)> {
    let rect: Rectangle = deserialize(text).context("failed to load rectangle")?;
    Ok((serialize_pretty(&rect)?, rect.area()))
}

/// Fold `KIND=VALUE` and combinator steps into one selector, left to right.
fn build_selector(steps: &[String], canonical: bool) -> Result<Box<dyn Selector>> {
    let mut segments = vec![SimpleSelector::new()];
    let mut combinators = Vec::new();

    for step in steps {
        if let Some(combinator) = parse_combinator(step) {
            combinators.push(combinator);
            segments.push(SimpleSelector::new());
            continue;
        }

        let (kind, value) = step
            .split_once('=')
            .with_context(|| format!("expected KIND=VALUE or a combinator, got '{step}'"))?;
        let kind: FragmentKind = kind
            .parse()
            .with_context(|| format!("unknown selector part '{kind}'"))?;

        let Some(current) = segments.pop() else {
            bail!("no selector to extend");
        };
        segments.push(
            current
                .with(kind, value)
                .with_context(|| format!("cannot add '{step}'"))?,
        );
    }

    if segments.iter().any(|segment| segment.fragments().is_empty()) {
        bail!("every combinator needs a selector on both sides");
    }

    let mut segments = segments.into_iter().map(|segment| {
        if canonical {
            segment.canonicalized()
        } else {
            segment
        }
    });
    let Some(first) = segments.next() else {
        bail!("no selector steps given");
    };

    let mut selector: Box<dyn Selector> = Box::new(first);
    for (combinator, right) in combinators.into_iter().zip(segments) {
        selector = Box::new(combine(selector, combinator, right));
    }
    Ok(selector)
}

fn parse_combinator(step: &str) -> Option<Combinator> {
    if step.eq_ignore_ascii_case("descendant") {
        return Some(Combinator::Descendant);
    }
    step.parse().ok()
}
