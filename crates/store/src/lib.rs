//! Document-store query layer.
//!
//! This crate provides:
//! - The fixed customer projection query (GROQ)
//! - A typed client for the store's HTTP query endpoint
//! - The fail-open fetch the presentation views consume

mod client;

pub use client::{CUSTOMER_QUERY, StoreClient, StoreError};
