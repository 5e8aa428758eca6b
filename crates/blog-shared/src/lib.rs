//! # Blog Shared
//!
//! Wire types shared between the server and its clients: request bodies,
//! the public post shape, and error responses.

pub mod dto;
pub mod response;

pub use dto::{AuthorRequest, CreatePostRequest, PostResponse, UpdatePostRequest};
pub use response::ErrorResponse;
