/// Every user-facing message of the application, defined in one place so the
/// wording lives apart from the control flow that triggers it.
#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoAdded(i64),
    TodoUpdated(i64),
    TodoNotFoundWithId(i64),
    TodosDeletedCount(usize),
    TodosEmpty,
    TodoCount(i64),
    SearchNoMatches(String),

    // === DELETE MESSAGES ===
    DeleteSelectorMissing,
    ConfirmDelete,
    DeleteCancelled,

    // === ENVIRONMENT MESSAGES ===
    NoDataDir,
    EditorNotSet,
    EditorExited(String),
    EditorEmptyBody,
}
