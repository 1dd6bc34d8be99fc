//! Dashboard command implementation

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::cli::context::CommandContext;
use crate::client::ProtectedApi;
use crate::error::Result;
use crate::output;

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let payload = ctx.client.fetch_dashboard().await?;

    match opts.format {
        OutputFormat::Json => println!("{}", output::format_json(&payload)?),
        // The dashboard payload has no fixed shape; pretty and table
        // output both print the decoded JSON
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{}", serde_json::to_string_pretty(&payload)?)
        }
    }

    Ok(())
}
