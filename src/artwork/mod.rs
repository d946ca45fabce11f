//! Artwork database integration.
//!
//! Fetches artwork records from the museum's content database (a Directus
//! items API) by numeric id or by the classifier's tag id, and maps the
//! raw records into [`crate::domain::Artwork`].

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::ArtworkDbClient;
