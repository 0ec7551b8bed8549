use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::scan::load_items;
use crate::model::{Config, View};
use crate::ops::Selection;

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = match cli.command {
        Some(Commands::List(ref args)) if args.root.is_some() => args.root.as_deref(),
        _ => cli.root.as_deref(),
    };
    let root = resolve_root(root)?;
    let config = load_config(&root, &cli)?;
    log::info!(
        "root {} extensions {:?}",
        root.display(),
        config.scan.extensions
    );

    match cli.command {
        None => crate::tui::run(&root, &config),
        Some(Commands::List(args)) => cmd_list(&root, &config, args),
    }
}

/// The scan root must be an existing directory
fn resolve_root(root: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let root = root.unwrap_or(Path::new("."));
    if !root.is_dir() {
        return Err(format!("{} is not a directory", root.display()).into());
    }
    Ok(root.to_path_buf())
}

/// Config from file, then CLI overrides
fn load_config(root: &Path, cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = config_io::load_config(root, cli.config.as_deref())?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if !cli.extensions.is_empty() {
        config.scan.extensions = cli.extensions.clone();
    }
    if cli.seed.is_some() {
        config.ui.color_seed = cli.seed;
    }
}

fn cmd_list(root: &Path, config: &Config, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(root, &config.scan)?;
    let mut selection = Selection::new(items);
    if args.resolved {
        selection.set_view(View::Resolved);
    }
    if let Some(ref filter) = args.filter {
        selection.set_filter_text(filter);
    }

    if args.json {
        let items: Vec<ItemJson> = selection.visible().map(item_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in selection.visible() {
            println!("{}", format_item_line(item));
        }
    }
    Ok(())
}
