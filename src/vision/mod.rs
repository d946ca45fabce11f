//! Custom Vision prediction API integration.
//!
//! Split into exact API DTOs (`dto`), a DTO-to-domain adapter
//! (`adapter`), and the HTTP client itself (`client`).

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::CustomVisionClient;
