//! Snapshot model for observed HTTP responses

pub mod response;

pub use response::Response;
