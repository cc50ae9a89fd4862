//! Tristate demo
//!
//! Mounts a checkbox on an in-memory tree, replays a script of interactions
//! and prints the root classes after each step.
//!
//! ```text
//! tristate-demo check indeterminate end click end
//! tristate-demo --webkit --no-indeterminate-setter indeterminate change
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tristate_core::{
    event_types, vendor, ControlPrototype, ControlProperty, Element, Event, PropertyExposure,
    StyleSupport,
};
use tristate_widgets::{Checkbox, CheckboxConfig};

#[derive(Parser)]
#[command(name = "tristate-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay checkbox interactions", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Simulate an engine that only fires prefixed animation events
    #[arg(long)]
    webkit: bool,

    /// Simulate a platform without a settable `indeterminate` descriptor
    #[arg(long)]
    no_indeterminate_setter: bool,

    /// Checkbox config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Steps to replay
    #[arg(value_enum)]
    steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Step {
    /// User click on the native control
    Click,
    /// `checked = true`
    Check,
    /// `checked = false`
    Uncheck,
    /// `indeterminate = true`
    Indeterminate,
    /// `indeterminate = false`
    Determinate,
    /// Bare `change` event on the native control
    Change,
    /// Animation end on the root
    End,
    Disable,
    Enable,
    Press,
    Release,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let support = if cli.webkit {
        StyleSupport::webkit_only()
    } else {
        StyleSupport::default()
    };
    vendor::init_animation_end_event(support);

    let config = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            CheckboxConfig::from_toml_str(&source)?
        }
        None => CheckboxConfig::default(),
    };

    let prototype = if cli.no_indeterminate_setter {
        ControlPrototype::builder()
            .expose(ControlProperty::Indeterminate, PropertyExposure::GetterOnly)
            .build()
    } else {
        ControlPrototype::standard()
    };

    let page = Element::new("body");
    let root = Element::with_classes("div", &["mdc-checkbox"]);
    let input = Element::input(prototype);
    let selector = &config.strings.native_control_selector;
    input.add_class(selector.trim_start_matches('.'));
    root.append_child(input.clone());
    page.append_child(root.clone());

    let mut checkbox = Checkbox::builder(root.clone()).config(config).build()?;
    checkbox.attach()?;
    info!(event = checkbox.animation_end_event(), "checkbox attached");

    for step in &cli.steps {
        match step {
            Step::Click => {
                input.click();
            }
            Step::Check => checkbox.set_checked(true),
            Step::Uncheck => checkbox.set_checked(false),
            Step::Indeterminate => checkbox.set_indeterminate(true),
            Step::Determinate => checkbox.set_indeterminate(false),
            Step::Change => {
                input.dispatch_event(&Event::new(event_types::CHANGE));
            }
            Step::End => {
                root.dispatch_event(&Event::new(checkbox.animation_end_event()));
            }
            Step::Disable => checkbox.set_disabled(true),
            Step::Enable => checkbox.set_disabled(false),
            Step::Press => input.press(),
            Step::Release => input.release(),
        }
        println!(
            "{:<14} checked={:<5} indeterminate={:<5} disabled={:<5} classes=[{}]",
            format!("{step:?}"),
            checkbox.checked(),
            checkbox.indeterminate(),
            checkbox.disabled(),
            root.classes().join(" ")
        );
    }

    checkbox.destroy()?;
    Ok(())
}
