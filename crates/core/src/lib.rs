//! Vitrine Core - Shared types library.
//!
//! This crate provides the common types used by the storefront binary:
//! type-safe IDs, money formatting, and the persisted cart/favorites
//! snapshot types with their pure pricing functions.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP clients, no storage access. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money helpers, and the `CartLine` /
//!   `FavoriteEntry` snapshot types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
