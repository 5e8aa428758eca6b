//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! This crate contains the post model, the error taxonomy and the repository
//! port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Author, NewPost, Post, PostChanges};
pub use error::{DomainError, RepoError};
