use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search term; `*` and `?` match like shell globs
    term: String,
    /// Match the term literally instead of as a glob pattern
    #[arg(long)]
    exact: bool,
}

pub fn cmd(args: SearchArgs, db_file: &Path) -> Result<()> {
    let todos = Todos::new(db_file)?.search(&args.term, !args.exact)?;
    if todos.is_empty() {
        msg_info!(Message::SearchNoMatches(args.term));
        return Ok(());
    }

    View::todos(&todos)
}
