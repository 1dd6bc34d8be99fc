//! Command execution context
//!
//! Provides a unified context for command execution, eliminating
//! boilerplate for config loading, store construction, and client
//! initialization.

use std::sync::Arc;

use crate::cli::args::GlobalOptions;
use crate::client::HaloClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileSessionStore, SessionManager, SessionStore};

/// Context for command execution containing the store and API client.
///
/// The session store and the API base URL are resolved exactly once here,
/// at startup; every component that needs them receives a reference.
pub struct CommandContext {
    /// Resolved API base URL, immutable for the process lifetime
    pub api_host: String,
    /// The single process-wide session store
    pub store: Arc<dyn SessionStore>,
    /// API client reading its credential from `store`
    pub client: Arc<HaloClient>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or the HTTP client cannot be constructed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let api_host = config.resolve_api_host(opts.api_host_ref());

        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(
            Config::session_path(opts.config_ref())?,
        ));
        let client = Arc::new(HaloClient::new(api_host.clone(), store.clone())?);

        Ok(Self {
            api_host,
            store,
            client,
        })
    }

    /// Build the session manager over this context's client and store.
    pub fn session_manager(&self) -> SessionManager {
        SessionManager::new(self.client.clone(), self.store.clone())
    }
}
