pub mod add;
pub mod count;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;

use crate::libs::data_storage::{DataStorage, DB_FILE_NAME};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new todo")]
    Add(add::AddArgs),
    #[command(about = "List todos, optionally filtered by tag")]
    List(list::ListArgs),
    #[command(about = "Search todo bodies with shell-style wildcards")]
    Search(search::SearchArgs),
    #[command(about = "Show a single todo in full")]
    Show(show::ShowArgs),
    #[command(about = "Edit a todo's body and/or tags")]
    Edit(edit::EditArgs),
    #[command(about = "Delete todos by id and/or tag")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the number of stored todos")]
    Count,
}

#[derive(Debug, Parser)]
#[command(name = "todd", author, version, about = "todd - The TODO list manager", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Database file to use instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        // The environment is read once, here; every command below receives
        // the resolved path.
        let db_file = match cli.file {
            Some(path) => path,
            None => DataStorage::resolve()?.get_path(DB_FILE_NAME)?,
        };

        match cli.command {
            Commands::Add(args) => add::cmd(args, &db_file),
            Commands::List(args) => list::cmd(args, &db_file),
            Commands::Search(args) => search::cmd(args, &db_file),
            Commands::Show(args) => show::cmd(args, &db_file),
            Commands::Edit(args) => edit::cmd(args, &db_file),
            Commands::Delete(args) => delete::cmd(args, &db_file),
            Commands::Count => count::cmd(&db_file),
        }
    }
}

/// Splits a `-t tag1,tag2` argument into a tag list, dropping empty pieces.
pub(crate) fn parse_tags(raw: Option<String>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
