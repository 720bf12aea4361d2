//! `stylecast`: render a project file's element into CSS.

mod output;
mod project;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::{debug, warn};
use std::path::PathBuf;

use stylecast::registry::sanitize;
use stylecast::schema::{Breakpoint, InteractionState};
use stylecast::{render, ResolveContext};

use output::{classes_table, render_output, OutputFormat};
use project::Project;

#[derive(Debug, Parser)]
#[command(name = "stylecast", version)]
#[command(about = "Resolve layered style bundles into CSS")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the project's element and print the effective CSS.
    Render(RenderArgs),
    /// List the classes a project defines.
    Classes {
        /// Project file (.json, .yaml or .yml).
        project: PathBuf,
        /// Only show classes whose name, label or description match.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Project file (.json, .yaml or .yml).
    project: PathBuf,

    #[arg(long, default_value = "desktop")]
    breakpoint: Breakpoint,

    #[arg(long, default_value = "default")]
    state: InteractionState,

    /// Apply these classes instead of the element's own list.
    #[arg(long = "class", value_name = "NAME")]
    classes: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,

    /// Wrap CSS output in a rule; the active state's pseudo-class is appended.
    #[arg(long)]
    selector: Option<String>,

    /// Also print which tier supplied each value.
    #[arg(long)]
    provenance: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        Command::Render(args) => {
            let project = Project::load(&args.project)?;
            print!("{}", run_render(&project, &args)?);
        }
        Command::Classes { project, search } => {
            let project = Project::load(&project)?;
            let out = match search.as_deref() {
                Some(query) => classes_table(project.registry.search(query)),
                None => classes_table(project.registry.iter()),
            };
            print!("{}", out);
        }
    }
    Ok(())
}

fn run_render(project: &Project, args: &RenderArgs) -> Result<String> {
    let classes: Vec<String> = if args.classes.is_empty() {
        project.element_classes.clone()
    } else {
        args.classes.iter().map(|c| sanitize(c)).collect()
    };
    debug!(
        "rendering at {} / {} with classes {:?}",
        args.breakpoint, args.state, classes
    );

    let mut context = ResolveContext::new()
        .breakpoint(args.breakpoint)
        .state(args.state)
        .classes(classes)
        .registry(&project.registry);
    if let Some(theme) = &project.theme {
        context = context.theme(theme);
    }
    if let Some(manual) = &project.manual {
        context = context.manual(manual);
    }

    let (css, resolution) = render(&project.element, &context);
    for name in &resolution.missing_classes {
        warn!("class '{}' is not defined; it contributes nothing", name);
    }

    let selector = args
        .selector
        .as_deref()
        .map(|s| format!("{}{}", s, args.state.selector_suffix()));
    render_output(
        &css,
        selector.as_deref(),
        args.provenance.then_some(&resolution.provenance),
        args.format,
    )
}
