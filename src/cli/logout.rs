//! Logout command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;

/// Run the logout command. Safe to repeat: logging out with no session
/// just reports that nothing was persisted.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let manager = ctx.session_manager();

    let had_session = manager.current_credential()?.is_some();
    manager.logout()?;

    if had_session {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} No active session", "○".dimmed());
    }

    Ok(())
}
