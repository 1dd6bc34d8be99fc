//! Register command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::models::RegisterRequest;
use crate::error::Result;

/// Run the register command.
///
/// Registration and login are distinct steps: a successful registration
/// prints the backend's confirmation but establishes no session.
pub async fn run(
    opts: &GlobalOptions,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Name")
            .interact_text()?,
    };
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
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let ctx = CommandContext::new(opts)?;
    let manager = ctx.session_manager();

    let message = manager
        .register(&RegisterRequest {
            name,
            email,
            password,
        })
        .await?;

    println!("{} {}", "✓".green(), message);
    println!("Run {} to authenticate.", "haloctl login".cyan());

    Ok(())
}
