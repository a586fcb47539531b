use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the todo to show
    id: i64,
}

pub fn cmd(args: ShowArgs, db_file: &Path) -> Result<()> {
    match Todos::new(db_file)?.get(args.id)? {
        Some(todo) => View::todo(&todo),
        None => {
            msg_error!(Message::TodoNotFoundWithId(args.id));
            Ok(())
        }
    }
}
