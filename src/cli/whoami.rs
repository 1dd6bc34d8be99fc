//! Whoami command implementation
//!
//! A pure read of the persisted session: shows who is logged in without
//! issuing any network request.

use colored::Colorize;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output;

/// Run the whoami command to display session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let manager = ctx.session_manager();

    let user = manager.current_user()?;

    match user {
        Some(user) => match opts.format {
            OutputFormat::Table => println!("{}", output::format_user_table(&user)),
            OutputFormat::Json => println!("{}", output::format_json(&user)?),
            OutputFormat::Pretty => {
                println!("{} Logged in as {}", "✓".green(), user.name.bold());
                println!("  ID:    {}", user.id);
                if let Some(ref email) = user.email {
                    println!("  Email: {}", email);
                }
                if !user.roles.is_empty() {
                    println!("  Roles: {}", user.roles.join(", "));
                }
                match user.email_verified_at {
                    Some(at) => println!("  Email verified {}", at.to_rfc3339()),
                    None => println!("  {}", "Email not verified".yellow()),
                }
                println!("API host: {}", ctx.api_host.cyan());
            }
        },
        None => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run {} to authenticate", "haloctl login".cyan());
        }
    }

    Ok(())
}
