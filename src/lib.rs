pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::http::QueryClient;
pub use adapters::store::{load_catalog, MemoryCatalog, MemoryUserRegistry};
pub use config::{cli::CliConfig, ServerConfig};
pub use core::{query::QueryService, registration::RegistrationService};
pub use server::{build_router, AppState};
pub use utils::error::{BookstoreError, Result};
