use super::parse_tags;
use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::todo::TodoFilter;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show todos carrying any of these tags: -t tag1,tag2
    #[arg(short, long)]
    tag: Option<String>,
}

pub fn cmd(args: ListArgs, db_file: &Path) -> Result<()> {
    let tags = parse_tags(args.tag);
    let filter = if tags.is_empty() { TodoFilter::All } else { TodoFilter::ByTags(tags) };

    let todos = Todos::new(db_file)?.fetch(filter)?;
    if todos.is_empty() {
        msg_info!(Message::TodosEmpty);
        return Ok(());
    }

    View::todos(&todos)
}
