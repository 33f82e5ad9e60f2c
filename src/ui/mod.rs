//! UI rendering modules for the chat client.
//!
//! This module contains the egui rendering code, organized by component:
//! - `messages`: the message feed with self/other bubbles
//! - `welcome`: the register/log-in entry screen
//! - `theme`: brand colors, bubble styles and base visuals

pub mod messages;
pub mod theme;
pub mod welcome;

pub use messages::render_messages;
pub use theme::{apply_app_style, bubble_style, BubbleStyle, FlashTheme};
pub use welcome::{WelcomeAction, WelcomeScreen};
