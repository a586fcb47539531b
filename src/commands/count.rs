use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use std::path::Path;

pub fn cmd(db_file: &Path) -> Result<()> {
    let count = Todos::new(db_file)?.count()?;
    msg_print!(Message::TodoCount(count));

    Ok(())
}
