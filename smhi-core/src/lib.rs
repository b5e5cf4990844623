//! Core library for the `smhi` point-forecast client.
//!
//! This crate defines:
//! - The request target model (scheme, host, path)
//! - A JSON loader that fetches a target and parses the buffered body
//! - The SMHI forecast client that builds point-forecast requests
//!
//! It is used by `smhi-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod forecast;
pub mod loader;
pub mod model;

pub use error::FetchError;
pub use forecast::{API_CATEGORY, API_HOST, API_VERSION, SmhiClient};
pub use loader::load_json;
pub use model::{Scheme, Target};
