//! OrderDesk Core - Shared types library.
//!
//! This crate provides the common types used across OrderDesk components:
//! - `admin` - Internal order administration surface
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The order data model, lifecycle status enum, and the
//!   display-formatting helpers that renderers share

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
