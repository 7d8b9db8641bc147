//! Remote adapters for the configuration store and the domain API.
//!
//! - **`api_client`**      – shared reqwest plumbing (base URL, bearer token,
//!   `{ok}`/`{error}` replies, status mapping).
//! - **`config_store`**    – [`HttpConfigStore`], `/api/builder/config`.
//! - **`domain_provider`** – [`HttpDomainProvider`], `/api/domains`.
//! - **`memory`**          – in-memory implementations of both traits for
//!   offline runs and integration tests.

pub mod api_client;
pub mod config_store;
pub mod domain_provider;
pub mod memory;
#[cfg(test)]
mod test_server;

pub use api_client::ApiClient;
pub use config_store::HttpConfigStore;
pub use domain_provider::HttpDomainProvider;
pub use memory::{InMemoryConfigStore, InMemoryDomainProvider};
