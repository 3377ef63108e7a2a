//! Typed client for the SendCloud shipping API.
//!
//! [`Api::init`] builds the parcel, shipping method, sender, service point and
//! integration clients around one set of credentials. The service point client
//! also resolves a postal code and house number (or a carrier code) to the
//! SendCloud service point ID.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::ApiConfig;
pub use crate::core::client::Api;
pub use crate::core::servicepoint::ServicePointClient;
pub use crate::domain::matcher::Matcher;
pub use crate::domain::model::{Credentials, ServicePoint, ServicePointList};
pub use crate::domain::ports::{HttpMethod, Transport};
pub use crate::utils::error::{Result, SendcloudError};
