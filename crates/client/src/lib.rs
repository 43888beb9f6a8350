//! Hosting API client — shared between the CLI and anything else that needs
//! to talk to the provider.
//!
//! This crate is the single source of truth for the provider wire contract:
//! create site, list sites, resolve a site id by name, zip-upload deploy.
//!
//! No retries. No pagination. No async runtime.

mod client;

pub use client::HostingClient;
