//! API layer - transports over the domain service

pub mod http;
pub mod native;
pub mod rest;
