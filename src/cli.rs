use crate::{
    error::{Error, Result},
    index::resolve_index,
    model::item::Priority,
    render::render,
    storage,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_FILE_NAME: &str = ".checklist.json";

/// A tiny checklist: add, reorder, and prioritize items stored in a JSON file.
///
/// Run without a command to print the current checklist.
#[derive(Parser)]
#[command(author, version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Use a custom storage file instead of ~/.checklist.json
    #[arg(long = "file", global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new item to the end of the checklist
    #[command(name = "add")]
    Add {
        /// The item text; multiple words need no quoting
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Remove the item at a 1-based index
    #[command(name = "rm")]
    Remove {
        #[arg(value_name = "ITEM_IDX")]
        item_idx: String,
    },

    /// Move an item to another position; the destination may be one past
    /// the end to move the item to the tail
    #[command(name = "mv")]
    Move {
        #[arg(value_name = "SRC_IDX")]
        src_idx: String,
        #[arg(value_name = "DST_IDX")]
        dst_idx: String,
    },

    /// Rename the item at a 1-based index
    #[command(name = "update")]
    Update {
        #[arg(value_name = "ITEM_IDX")]
        item_idx: String,
        /// The new item text; multiple words need no quoting
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Exchange the items at two positions
    #[command(name = "swap")]
    Swap {
        #[arg(value_name = "SRC_IDX")]
        src_idx: String,
        #[arg(value_name = "DST_IDX")]
        dst_idx: String,
    },

    /// Set the priority of an item
    #[command(name = "prio")]
    Prio {
        #[arg(value_name = "ITEM_IDX")]
        item_idx: String,
        /// low|med|high, or 1..3 mapping low-to-high
        #[arg(value_name = "LEVEL")]
        level: String,
    },
}

fn storage_path(file_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file_override {
        return Ok(path);
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_FILE_NAME))
        .ok_or(Error::Home)
}

/// Runs one invocation: load, apply the command, persist, print.
///
/// Every command that needs an existing item treats an empty checklist as an
/// informational no-op rather than an index error.
///
/// # Errors
///
/// Returns a usage error for invalid indices, empty item text, or an unknown
/// priority level, and a save error if the file cannot be written back.
pub fn run(args: Args) -> Result<()> {
    let path = storage_path(args.file)?;
    let mut checklist = storage::load(&path);

    let Some(command) = args.command else {
        println!("{}", render(&checklist));
        return Ok(());
    };

    match command {
        Command::Add { text } => {
            let name = text.join(" ").trim().to_string();
            if name.is_empty() {
                return Err(Error::Usage("item cannot be empty.".to_string()));
            }
            checklist.add(&name);
            storage::save(&path, &checklist)?;
            println!("Added: '{name}'");
        }

        Command::Remove { item_idx } => {
            if checklist.is_empty() {
                println!("Checklist is empty; nothing to remove.");
                return Ok(());
            }
            let position = resolve_index(&item_idx, checklist.len(), "item_idx")?;
            let removed = checklist.remove(position);
            storage::save(&path, &checklist)?;
            println!("Removed: '{}' (was #{})", removed.name, position + 1);
        }

        Command::Move { src_idx, dst_idx } => {
            if checklist.is_empty() {
                println!("Checklist is empty; nothing to move.");
                return Ok(());
            }
            let src = resolve_index(&src_idx, checklist.len(), "src_idx")?;
            // One past the end is allowed so "move to the tail" works
            // without knowing the list length.
            let dst = resolve_index(&dst_idx, checklist.len() + 1, "dst_idx")?;
            let name = checklist.items()[src].name.clone();
            let landed = checklist.move_item(src, dst);
            storage::save(&path, &checklist)?;
            println!("Moved: '{name}' from #{} to #{}", src + 1, landed + 1);
        }

        Command::Update { item_idx, text } => {
            if checklist.is_empty() {
                println!("Checklist is empty; nothing to update.");
                return Ok(());
            }
            let position = resolve_index(&item_idx, checklist.len(), "item_idx")?;
            let new_name = text.join(" ").trim().to_string();
            if new_name.is_empty() {
                return Err(Error::Usage("new name cannot be empty.".to_string()));
            }
            checklist.rename(position, &new_name);
            storage::save(&path, &checklist)?;
            println!("Updated: #{} -> '{new_name}'", position + 1);
        }

        Command::Swap { src_idx, dst_idx } => {
            if checklist.is_empty() {
                println!("Checklist is empty; nothing to swap.");
                return Ok(());
            }
            if checklist.len() < 2 {
                println!("Only one item in the checklist; nothing to swap.");
                return Ok(());
            }
            let src = resolve_index(&src_idx, checklist.len(), "src_idx")?;
            let dst = resolve_index(&dst_idx, checklist.len(), "dst_idx")?;
            checklist.swap(src, dst);
            storage::save(&path, &checklist)?;
            if src == dst {
                println!("Swapped: #{} with itself; nothing changed.", src + 1);
            } else {
                println!("Swapped: #{} and #{}", src + 1, dst + 1);
            }
        }

        Command::Prio { item_idx, level } => {
            if checklist.is_empty() {
                println!("Checklist is empty; nothing to prioritize.");
                return Ok(());
            }
            let position = resolve_index(&item_idx, checklist.len(), "item_idx")?;
            let level: Priority = level
                .parse()
                .map_err(|err| Error::Usage(format!("{err}")))?;
            checklist.set_priority(position, level);
            storage::save(&path, &checklist)?;
            println!("Priority set: #{} -> {level}", position + 1);
        }
    }

    println!("{}", render(&checklist));
    Ok(())
}
