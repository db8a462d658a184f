//! Request and Reply models for the replay front end
//!
//! This module defines the DTOs serialized to and from the JSON lines the
//! replay binary reads and writes.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::Request;
pub use responses::{
    DeleteResponse, DiscardNotice, ErrorResponse, GetResponse, PutResponse, Reply, StatsResponse,
};
