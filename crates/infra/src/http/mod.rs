//! HTTP access to the remote data source

pub mod backoff;
pub mod client;
pub mod fetcher;

pub use backoff::{Sleeper, TokioSleeper};
pub use client::HttpClient;
pub use fetcher::HttpFetcher;
