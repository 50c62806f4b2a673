use crate::config::{default_config_path, Preferences};
use crate::domain::models::normalize_query;
use crate::domain::resolver::QueryResolver;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tslaunch")]
#[command(about = "Launcher panel for an external timestamp converter")]
#[command(version)]
pub struct Cli {
    /// Query to run right away, without waiting for typing to settle
    pub query: Option<String>,

    /// Preferences file [default: ~/.config/tslaunch/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Converter binary for this session, overriding the preferences file
    #[arg(short, long)]
    pub binary: Option<PathBuf>,

    /// Resolve QUERY once, print the rows and exit
    #[arg(short, long)]
    pub print: bool,
}

impl Cli {
    pub fn config_path(&self) -> Result<PathBuf> {
        self.config
            .clone()
            .or_else(default_config_path)
            .context("Could not determine home directory for the preferences file")
    }
}

/// Headless mode: one invocation, rows as `title<TAB>subtitle<TAB>arg`.
pub async fn print_once(
    resolver: &dyn QueryResolver,
    prefs: &Preferences,
    query: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let query = normalize_query(query.unwrap_or_default());
    let Some(argument) = prefs.empty_query.argument_for(query) else {
        return Ok(());
    };

    let items = resolver.resolve(argument).await?;
    for item in items {
        writeln!(out, "{}\t{}\t{}", item.title, item.subtitle, item.arg)?;
    }
    out.flush()?;
    Ok(())
}

/// Printed after the terminal is restored, on stderr like `--print` failures.
pub fn report_panel_error(err: &anyhow::Error, out: &mut impl Write) {
    let _ = writeln!(out, "{err:?}");
}
