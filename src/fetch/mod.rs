//! Fetching and parsing of remote lookup pages.

mod client;

pub use client::LookupClient;
