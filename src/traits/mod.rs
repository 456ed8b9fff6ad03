//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET operations used by the photo client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
