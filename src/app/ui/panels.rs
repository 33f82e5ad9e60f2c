//! Title bar and central message panel rendering

use eframe::egui::{self, RichText};

use crate::app::{FlashChatApp, Screen};
use crate::config::APP_NAME;
use crate::ui;

impl FlashChatApp {
    /// Render the title bar. Returns true if "Log Out" was clicked.
    pub(in crate::app) fn render_title_bar(&mut self, ctx: &egui::Context) -> bool {
        let theme = &self.theme;
        let mut logout_clicked = false;

        // No back button: leaving the chat always goes through Log Out
        egui::TopBottomPanel::top("title_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme.bar)
                    .inner_margin(egui::Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(APP_NAME).size(20.0).strong().color(theme.bar_text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Log Out").color(theme.bar_text))
                            .clicked()
                        {
                            logout_clicked = true;
                        }
                    });
                });
            });

        logout_clicked
    }

    /// Render the message feed in the central panel
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = &self.theme;
        let Screen::Chat(presenter) = &mut self.screen else {
            return;
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.background))
            .show(ctx, |ui| {
                ui::render_messages(ui, presenter);
            });
    }
}
