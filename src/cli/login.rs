//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;

/// Run the login command
pub async fn run(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let ctx = CommandContext::new(opts)?;
    let manager = ctx.session_manager();

    let session = manager.login(&email, &password).await?;

    println!(
        "{} Logged in as {}",
        "✓".green(),
        session.user.name.bold()
    );

    Ok(())
}
