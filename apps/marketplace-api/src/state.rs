//! Application state management

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned into each router that needs it (inexpensive: the MongoDB
/// client shares its underlying connection pool across clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
