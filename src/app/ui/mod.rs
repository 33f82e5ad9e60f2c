//! Chat screen panels rendered by FlashChatApp

mod input;
mod panels;
