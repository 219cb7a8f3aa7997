mod cli;
mod preview;
mod storage;
mod store;
mod style;

use std::fs;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::storage::DiskStorage;
use crate::store::Store;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();

    let storage = match &args.config_dir {
        Some(dir) => DiskStorage::at(dir.clone()),
        None => DiskStorage::open_default().context("no usable config directory")?,
    };
    let mut store = Store::new(storage);

    if args.reset {
        store.reset();
    }

    let user_style = args
        .user_style
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read user stylesheet {}", path.display()))
        })
        .transpose()?;

    store.update(|state| {
        if let Some(text) = args.sample_text.clone() {
            state.sample_text = text;
        }
        if let Some(size) = args.font_size {
            state.font_size = size;
        }
        if let Some(italic) = args.italic {
            state.is_italic = italic;
        }
        if let Some(tab) = args.sidebar_tab.clone() {
            state.sidebar_tab_active = tab;
        }
        if let Some(tab) = args.preview_tab.clone() {
            state.preview_tab_active = tab;
        }
        if let Some(css) = user_style {
            state.user_style = css;
        }
    });

    // The generated stylesheet is derived, never persisted.
    let generated = style::stylesheet(store.state());
    store.update(|state| state.option_style = generated);

    if args.options {
        println!("{}", store.state().options());
        return Ok(());
    }
    if args.debug {
        println!("{}", store.state().debug());
        return Ok(());
    }

    let html = preview::document(store.state());
    fs::write(&args.out, html)
        .with_context(|| format!("failed to write preview document {}", args.out.display()))?;
    info!("preview written to {}", args.out.display());

    Ok(())
}
