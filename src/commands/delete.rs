use super::parse_tags;
use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::todo::DeleteSelector;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::Path;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Ids of todos to delete
    id: Vec<i64>,
    /// Comma-separated tags; todos carrying any of them are deleted too
    #[arg(short, long)]
    tag: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, db_file: &Path) -> Result<()> {
    let selector = DeleteSelector::new(args.id, parse_tags(args.tag));

    if !args.yes && !selector.is_empty() {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDelete.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    // An empty selector falls through to the store, which rejects it loudly.
    let affected = Todos::new(db_file)?.delete(&selector)?;
    msg_success!(Message::TodosDeletedCount(affected));

    Ok(())
}
