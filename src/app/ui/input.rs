//! Message input row

use eframe::egui;

use crate::app::{FlashChatApp, Screen};
use crate::ui::theme::brand;

/// Room left for the Send button next to the field.
const SEND_BUTTON_WIDTH: f32 = 80.0;

/// Width of the text field; never negative in a narrow window.
fn input_width(available: f32) -> f32 {
    (available - SEND_BUTTON_WIDTH).max(0.0)
}

impl FlashChatApp {
    /// Render the input row at the bottom of the window.
    ///
    /// The field is cleared by the presenter once the store confirms the
    /// write, not when Send is pressed.
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = &self.theme;
        let Screen::Chat(presenter) = &mut self.screen else {
            return;
        };

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.bar)
                    .inner_margin(egui::Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let input_frame = egui::Frame::new()
                        .fill(theme.input_fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(10, 6));

                    let response = input_frame
                        .show(ui, |ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut presenter.input)
                                    .desired_width(input_width(ui.available_width()))
                                    .frame(false)
                                    .hint_text("Write a message..."),
                            )
                        })
                        .inner;

                    let send_clicked = ui
                        .button(egui::RichText::new("➤ Send").color(brand::LIGHT_BLUE))
                        .clicked();
                    let enter_pressed =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if send_clicked || enter_pressed {
                        presenter.submit();
                        response.request_focus();
                    }
                });
            });
    }
}
