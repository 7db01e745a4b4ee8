//! Out-of-process client over the REST API

pub mod client;

pub use client::HttpBankClient;
