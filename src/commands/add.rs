use super::parse_tags;
use crate::db::todos::Todos;
use crate::libs::editor;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Todo body; opens $EDITOR when omitted
    body: Option<String>,
    /// Comma-separated list of tags: -t tag1,tag2
    #[arg(short, long)]
    tag: Option<String>,
}

pub fn cmd(args: AddArgs, db_file: &Path) -> Result<()> {
    let body = match args.body {
        Some(body) => body,
        None => {
            let composed = editor::compose(None)?;
            if composed.trim().is_empty() {
                msg_bail_anyhow!(Message::EditorEmptyBody);
            }
            composed
        }
    };

    let tags = parse_tags(args.tag);
    let id = Todos::new(db_file)?.add(&body, &tags)?;
    msg_success!(Message::TodoAdded(id));

    Ok(())
}
