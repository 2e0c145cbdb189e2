//! Schema command implementation.
//!
//! The `browsegate schema` command prints the JSON Schema of the overrides
//! file for editor validation and autocomplete.

use crate::config::overrides_json_schema;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = serde_json::to_string_pretty(&overrides_json_schema())
            .map_err(anyhow::Error::from)?;
        ui.output(&schema);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_valid_json_schema() {
        let mut ui = MockUI::new();
        SchemaCommand::new().execute(&mut ui).unwrap();

        let schema: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        assert_eq!(schema["title"], "Overrides");
        assert!(schema["properties"]["features"].is_object());
    }
}
