//! Application module structure for FlashChatApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: FlashChatApp struct, initialization and screen navigation
//! - `events`: Applying store deliveries on the UI thread
//! - `update`: Main update loop
//! - `ui::panels`: Title bar and message area
//! - `ui::input`: Message input row

pub mod core;
pub mod events;
pub mod update;
pub mod ui;

// Re-export FlashChatApp for public API
pub use self::core::{FlashChatApp, Screen};
