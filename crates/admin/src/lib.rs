//! OrderDesk Admin library.
//!
//! This crate provides the order administration surface as a library,
//! allowing it to be tested and reused.
//!
//! # Architecture
//!
//! - [`auth`] - bearer credential holder and claim validation
//! - [`gateway`] - remote order list/update client with normalized errors
//! - [`viewmodel`] - the stateful orchestrator between guard, gateway, and
//!   renderers
//! - [`views`] - pure projections of the order collection for display
//!
//! # Security
//!
//! The bearer credential grants admin access to the order backend. It is
//! held in a [`secrecy::SecretString`] and never logged.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod gateway;
pub mod viewmodel;
pub mod views;
