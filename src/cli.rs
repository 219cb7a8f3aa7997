//! Command line arguments for the application.

use std::path::PathBuf;

use clap::Parser;

/// Local-first font preview and mixing tool.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Override the preview sample text
    #[arg(long)]
    pub sample_text: Option<String>,

    /// Override the preview font size in pixels
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Render the preview in italic (true/false)
    #[arg(long)]
    pub italic: Option<bool>,

    /// Select the active sidebar tab
    #[arg(long)]
    pub sidebar_tab: Option<String>,

    /// Select the active preview tab
    #[arg(long)]
    pub preview_tab: Option<String>,

    /// Replace the user stylesheet with the contents of a CSS file
    #[arg(long)]
    pub user_style: Option<PathBuf>,

    /// Print the font rules as JSON and exit
    #[arg(long)]
    pub options: bool,

    /// Print the state dump and exit
    #[arg(long)]
    pub debug: bool,

    /// Reset the persisted state to defaults before applying overrides
    #[arg(long)]
    pub reset: bool,

    /// Directory the persisted state lives in (defaults to the platform config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Where to write the preview document
    #[arg(long, default_value = "preview.html")]
    pub out: PathBuf,
}
