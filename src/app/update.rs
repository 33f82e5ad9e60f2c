//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::{FlashChatApp, Screen};

impl eframe::App for FlashChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever the store delivered since the last frame
        if self.process_events() {
            ctx.request_repaint();
        }

        // Request repaint to keep checking for deliveries
        ctx.request_repaint_after(Duration::from_millis(100));

        match &mut self.screen {
            Screen::Welcome(welcome) => {
                if let Some(action) = welcome.render(ctx, &self.theme) {
                    self.handle_welcome_action(action);
                }
            }
            Screen::Chat(_) => {
                // Panels must be added before the central panel
                let logout_clicked = self.render_title_bar(ctx);
                self.render_input_panel(ctx);
                self.render_central_panel(ctx);

                if logout_clicked {
                    self.logout();
                }
            }
        }
    }
}
