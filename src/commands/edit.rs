use super::parse_tags;
use crate::db::todos::Todos;
use crate::libs::editor;
use crate::libs::messages::Message;
use crate::libs::todo::EditStatus;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the todo to edit
    id: i64,
    /// New body text
    #[arg(short, long)]
    body: Option<String>,
    /// Comma-separated replacement tags: -t tag1,tag2
    #[arg(short, long)]
    tag: Option<String>,
}

pub fn cmd(args: EditArgs, db_file: &Path) -> Result<()> {
    let mut todos = Todos::new(db_file)?;

    // With no flags at all, re-open the current body in $EDITOR.
    let (body, tags) = if args.body.is_none() && args.tag.is_none() {
        let current = match todos.get(args.id)? {
            Some(todo) => todo,
            None => {
                msg_error!(Message::TodoNotFoundWithId(args.id));
                return Ok(());
            }
        };
        (Some(editor::compose(Some(&current.body))?), None)
    } else {
        (args.body, args.tag.map(|raw| parse_tags(Some(raw))))
    };

    match todos.edit(args.id, body.as_deref(), tags.as_deref())? {
        EditStatus::Updated => msg_success!(Message::TodoUpdated(args.id)),
        EditStatus::NotFound => msg_error!(Message::TodoNotFoundWithId(args.id)),
    }

    Ok(())
}
