pub mod client;
pub mod context;
pub mod integration;
pub mod method;
pub mod parcel;
pub mod query;
pub mod resolver;
pub mod sender;
pub mod servicepoint;

#[cfg(test)]
pub(crate) mod mock;
