//! Applying store deliveries on the UI thread

use super::{FlashChatApp, Screen};

impl FlashChatApp {
    /// Drain snapshots and append results. Returns true if a repaint is needed.
    pub fn process_events(&mut self) -> bool {
        match &mut self.screen {
            Screen::Chat(presenter) => presenter.process_events(),
            Screen::Welcome(_) => false,
        }
    }

    /// Log out from the chat screen. Stays on the chat screen if sign-out fails.
    pub fn logout(&mut self) {
        let Screen::Chat(presenter) = &mut self.screen else {
            return;
        };
        if presenter.logout() == crate::presenter::Navigation::ToWelcome {
            self.show_welcome();
        }
    }
}
