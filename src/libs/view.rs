use super::todo::Todo;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders todos as a table, one row per entry. Only the first line of a
    /// multiline body is shown; the stored value stays complete.
    pub fn todos(todos: &[Todo]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TODO", "TAGS"]);
        for todo in todos {
            table.add_row(row![todo.id, todo.first_line(), todo.tags.join(", ")]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a single todo with its full body.
    pub fn todo(todo: &Todo) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TAGS"]);
        table.add_row(row![todo.id, todo.tags.join(", ")]);
        table.printstd();
        println!("{}", todo.body);

        Ok(())
    }
}
