// SPDX-License-Identifier: MIT
//
// weft — print accessible CSS themes for a brand.
//
// Wires the crates together:
//
//   weft-color → color literals, contrast repair
//   weft-css   → canonical CSS values
//   weft-theme → brand expansion, builder, store
//
// A run flows:
//
//   args → brand (builtin name or .json BrandSpec)
//        → ThemeBuilder::create → build → ThemeStore
//        → one rule per (variant, component, state) → stdout
//
// Usage:
//
//   weft [BRAND] [--variant light|dark|hc-light|hc-dark|system] [--dark]
//        [--prefix NAME] [--list]
//
// Logging goes to stderr; RUST_LOG overrides the default `warn` filter.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use weft_theme::{
    Brand, BrandSpec, ComponentKind, InteractionState, ThemeBuilder, ThemeError, ThemeStore, ThemeVariant,
    builtin, builtin_names,
};

const USAGE: &str = "usage: weft [BRAND] [--variant light|dark|hc-light|hc-dark|system] [--dark] [--prefix NAME] [--list]";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("{0} needs a value\n{USAGE}")]
    MissingValue(&'static str),

    #[error("unknown option {0:?}\n{USAGE}")]
    UnknownOption(String),

    #[error("unexpected argument {0:?}\n{USAGE}")]
    UnexpectedArgument(String),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid brand file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

// ─── Options ────────────────────────────────────────────────────────────────

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    brand: Option<String>,
    variant: Option<ThemeVariant>,
    prefers_dark: bool,
    prefix: Option<String>,
    list: bool,
}

impl Options {
    fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--variant" => {
                    let value = args.next().ok_or(CliError::MissingValue("--variant"))?;
                    options.variant = Some(value.parse()?);
                }
                "--prefix" => {
                    options.prefix = Some(args.next().ok_or(CliError::MissingValue("--prefix"))?);
                }
                "--dark" => options.prefers_dark = true,
                "--list" => options.list = true,
                flag if flag.starts_with("--") => return Err(CliError::UnknownOption(arg)),
                _ if options.brand.is_none() => options.brand = Some(arg),
                _ => return Err(CliError::UnexpectedArgument(arg)),
            }
        }
        Ok(options)
    }

    /// Variants to print: the requested one (with `System` resolved) or
    /// every stored variant.
    fn variants(&self) -> Vec<ThemeVariant> {
        match self.variant {
            Some(variant) => vec![variant.resolve(self.prefers_dark, false)],
            None => vec![
                ThemeVariant::Light,
                ThemeVariant::Dark,
                ThemeVariant::HighContrastLight,
                ThemeVariant::HighContrastDark,
            ],
        }
    }
}

// ─── Brand loading ──────────────────────────────────────────────────────────

fn load_brand(name: &str) -> Result<Brand, CliError> {
    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let spec: BrandSpec = serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded brand file");
        return Ok(Brand::from_spec(&spec)?);
    }
    Ok(builtin(name)?)
}

// ─── Rendering ──────────────────────────────────────────────────────────────

const fn selector_suffix(state: InteractionState) -> &'static str {
    match state {
        InteractionState::Default | InteractionState::Hidden | InteractionState::ReadOnly => "",
        InteractionState::Hovered => ":hover",
        InteractionState::Focused => ":focus-visible",
        InteractionState::Pressed => ":active",
        InteractionState::Dragged => "[data-dragged]",
        InteractionState::Disabled => ":disabled",
        InteractionState::Visited => ":visited",
    }
}

/// One rule per non-empty (variant, component, state) cell, scoped by a
/// `data-theme` attribute.
fn render(store: &ThemeStore, brand: &str, variants: &[ThemeVariant], prefix: Option<&str>) -> String {
    let class_prefix = prefix.map(|p| p.trim_matches('-')).filter(|p| !p.is_empty());
    let mut css = String::new();

    for &variant in variants {
        let _ = writeln!(css, "/* {brand}: {variant} */");
        for component in ComponentKind::ALL {
            let class = match class_prefix {
                Some(p) => format!("{p}-{component}"),
                None => component.name().to_string(),
            };
            for state in InteractionState::INTERACTIVE {
                let body = store.declarations(component, variant, state, prefix);
                if body.is_empty() {
                    continue;
                }
                let suffix = selector_suffix(state);
                let _ = writeln!(css, "[data-theme=\"{variant}\"] .{class}{suffix}{{{body}}}");
            }
        }
    }
    css
}

fn run(options: &Options) -> Result<(), CliError> {
    if options.list {
        for name in builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let name = options.brand.as_deref().unwrap_or("default");
    let brand = load_brand(name)?;
    let store = ThemeBuilder::new().create(&brand)?.build()?;
    info!(brand = brand.name(), entries = store.len(), "theme built");

    print!("{}", render(&store, brand.name(), &options.variants(), options.prefix.as_deref()));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let result = Options::parse(env::args().skip(1)).and_then(|options| run(&options));
    if let Err(e) = result {
        eprintln!("weft: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
