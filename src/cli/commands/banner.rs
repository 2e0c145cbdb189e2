//! Banner command implementation.
//!
//! The `browsegate banner` command prints the warning markup, for pages
//! that embed it at build time.

use crate::error::Result;
use crate::notify::warning_banner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The banner command implementation.
#[derive(Debug, Default)]
pub struct BannerCommand;

impl BannerCommand {
    /// Create a new banner command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for BannerCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&warning_banner().to_html());
        Ok(CommandResult::success())
    }
}
