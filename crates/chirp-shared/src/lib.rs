//! # Chirp Shared
//!
//! Wire types shared by the API server and its clients: request bodies and
//! the response envelope.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
