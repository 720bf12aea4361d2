//! Rendering command results as text.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use stylecast::registry::ClassDefinition;
use stylecast::{CssProperties, ProvenanceMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Css,
    Json,
    Yaml,
}

#[derive(Serialize)]
struct Rendered<'a> {
    css: &'a CssProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    provenance: Option<&'a ProvenanceMap>,
}

/// Formats a render result. Provenance is appended as a table for CSS
/// output and as a `provenance` key for structured output.
pub fn render_output(
    css: &CssProperties,
    selector: Option<&str>,
    provenance: Option<&ProvenanceMap>,
    format: OutputFormat,
) -> Result<String> {
    let rendered = Rendered { css, provenance };
    Ok(match format {
        OutputFormat::Css => {
            let mut out = match selector {
                Some(selector) => css.to_css_rule(selector),
                None => css.to_css_text(),
            };
            if let Some(provenance) = provenance {
                out.push('\n');
                out.push_str(&provenance_table(provenance));
            }
            out
        }
        OutputFormat::Json => serde_json::to_string_pretty(&rendered)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(&rendered)?,
    })
}

/// One line per leaf: path, source, then any flags.
pub fn provenance_table(provenance: &ProvenanceMap) -> String {
    let width = provenance.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (path, entry) in provenance.iter() {
        let mut line = format!("{:<width$}  {}", path, entry.source, width = width);
        if entry.is_responsive {
            line.push_str(" responsive");
        }
        if entry.cleared {
            line.push_str(" cleared");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn classes_table<'a>(classes: impl IntoIterator<Item = &'a ClassDefinition>) -> String {
    let classes: Vec<&ClassDefinition> = classes.into_iter().collect();
    let width = classes.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for class in classes {
        out.push_str(&format!(
            "{:<width$}  {} [{}]",
            class.name,
            class.label,
            class.category,
            width = width
        ));
        if let Some(description) = class.description.as_deref() {
            out.push_str(&format!(" - {}", description));
        }
        out.push('\n');
    }
    out
}
