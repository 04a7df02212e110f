//! tmscheme - convert a TextMate theme into a JetBrains IDE color scheme.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tmscheme::catalog::{self, AttributeTree, DefaultAttributes};
use tmscheme::export::write_scheme_file;
use tmscheme::import::apply_theme;
use tmscheme::theme::TmTheme;

/// Baseline scheme shipped next to the binary; a missing file just means no
/// seeded defaults.
const BASELINE_SCHEME: &str = "DefaultColorSchemesManager.xml";

/// Convert a TextMate/Sublime color theme into a JetBrains IDE color scheme.
#[derive(Parser, Debug)]
#[command(name = "tmscheme", version, about)]
struct Cli {
    /// Source theme (.tmTheme property list, binary or XML)
    #[arg(value_name = "TMTHEME")]
    theme: PathBuf,

    /// Destination scheme XML; its file stem becomes the scheme name
    #[arg(value_name = "SCHEME")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let defaults = DefaultAttributes::load(Path::new(BASELINE_SCHEME))
        .context("Failed to load baseline attribute defaults")?;
    let mut tree = AttributeTree::build(&defaults, &catalog::default_specs())
        .context("Failed to build the attribute tree")?;

    // Theme parsing happens before any output I/O: a malformed theme must
    // not leave a partial scheme behind.
    let theme = TmTheme::load(&cli.theme)
        .with_context(|| format!("Failed to load theme {}", cli.theme.display()))?;

    let report = apply_theme(&mut tree, &theme);
    write_scheme_file(&cli.output, &tree, &report.colors)
        .with_context(|| format!("Failed to write scheme {}", cli.output.display()))?;

    for scope in report.unused_scopes(&theme) {
        println!("Unused scope: {scope}");
    }
    Ok(())
}
