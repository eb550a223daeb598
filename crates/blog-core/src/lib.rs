//! # Blog Core
//!
//! The domain layer of the blog-post API.
//! Holds the `BlogPost` entity, its validated inputs and the repository ports.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
