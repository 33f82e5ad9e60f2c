//! FlashChat library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod presenter;
pub mod protocol;
pub mod store;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod test_support;
