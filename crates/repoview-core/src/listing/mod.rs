//! Directory listings: the entry model, the session cache, and the remote
//! client that fills it.

pub mod cache;
pub mod client;
pub mod entry;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;
