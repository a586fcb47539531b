use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;

/// Opens `$EDITOR` on a scratch file and returns its final content.
///
/// `initial` pre-fills the buffer, which is how re-editing an existing todo
/// body works. The editor's exit status is checked; an aborted session does
/// not produce a body.
pub fn compose(initial: Option<&str>) -> Result<String> {
    let editor = env::var("EDITOR").map_err(|_| msg_error_anyhow!(Message::EditorNotSet))?;

    let mut file = tempfile::Builder::new().prefix("todd_").suffix(".tmp").tempfile()?;
    if let Some(content) = initial {
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    let status = Command::new(&editor).arg(file.path()).status()?;
    if !status.success() {
        msg_bail_anyhow!(Message::EditorExited(status.to_string()));
    }

    Ok(fs::read_to_string(file.path())?)
}
