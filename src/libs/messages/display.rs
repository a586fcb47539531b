use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoAdded(id) => format!("Todo {} added successfully.", id),
            Message::TodoUpdated(id) => format!("Todo {} updated successfully.", id),
            Message::TodoNotFoundWithId(id) => format!("Todo with ID {} not found.", id),
            Message::TodosDeletedCount(count) => format!("Deleted {} todo(s) successfully.", count),
            Message::TodosEmpty => "No todos found.".to_string(),
            Message::TodoCount(count) => format!("{} todo(s) stored.", count),
            Message::SearchNoMatches(term) => format!("No todos matching '{}'.", term),

            // === DELETE MESSAGES ===
            Message::DeleteSelectorMissing => "Refusing to delete: no ids or tags given.".to_string(),
            Message::ConfirmDelete => "Delete the selected todos?".to_string(),
            Message::DeleteCancelled => "Delete cancelled.".to_string(),

            // === ENVIRONMENT MESSAGES ===
            Message::NoDataDir => "No $XDG_DATA_HOME or $HOME defined, cannot locate a data directory.".to_string(),
            Message::EditorNotSet => "No $EDITOR specified!".to_string(),
            Message::EditorExited(status) => format!("Editor exited abnormally: {}", status),
            Message::EditorEmptyBody => "Editor returned an empty todo, nothing saved.".to_string(),
        };
        write!(f, "{}", text)
    }
}
