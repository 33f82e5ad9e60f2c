//! Welcome screen: the entry point where users register or log in.

use eframe::egui::{self, RichText};

use crate::config::APP_NAME;
use crate::ui::theme::{brand, FlashTheme};

/// What the user asked for on the welcome screen
#[derive(Debug, Clone, PartialEq)]
pub enum WelcomeAction {
    Register { email: String, password: String },
    LogIn { email: String, password: String },
}

/// Self-contained welcome screen state.
#[derive(Debug, Default)]
pub struct WelcomeScreen {
    pub email: String,
    pub password: String,
    /// Last registration or login failure, shown under the form
    pub error: Option<String>,
}

impl WelcomeScreen {
    pub fn new(last_email: &str) -> Self {
        Self {
            email: last_email.to_string(),
            ..Self::default()
        }
    }

    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.password.clear();
    }

    fn credentials(&self) -> (String, String) {
        (self.email.trim().to_string(), self.password.clone())
    }

    /// Render the screen. Returns the action the user confirmed, if any.
    pub fn render(&mut self, ctx: &egui::Context, theme: &FlashTheme) -> Option<WelcomeAction> {
        let mut action = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.background).inner_margin(egui::Margin::same(24)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.2);
                    ui.label(RichText::new(APP_NAME).size(40.0).strong().color(brand::BLUE));
                    ui.add_space(24.0);

                    ui.add(
                        egui::TextEdit::singleline(&mut self.email)
                            .hint_text("Email")
                            .desired_width(280.0),
                    );
                    let password = ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .password(true)
                            .hint_text("Password")
                            .desired_width(280.0),
                    );
                    let enter_pressed =
                        password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    ui.add_space(12.0);

                    let can_submit = !self.email.trim().is_empty() && !self.password.is_empty();
                    ui.horizontal(|ui| {
                        ui.add_space((ui.available_width() - 200.0).max(0.0) / 2.0);
                        if ui
                            .add_enabled(can_submit, egui::Button::new("Register").fill(brand::LIGHT_BLUE))
                            .clicked()
                        {
                            let (email, password) = self.credentials();
                            action = Some(WelcomeAction::Register { email, password });
                        }
                        if ui
                            .add_enabled(can_submit, egui::Button::new("Log In").fill(brand::TEAL))
                            .clicked()
                            || (enter_pressed && can_submit)
                        {
                            let (email, password) = self.credentials();
                            action = Some(WelcomeAction::LogIn { email, password });
                        }
                    });

                    if let Some(error) = &self.error {
                        ui.add_space(12.0);
                        ui.colored_label(theme.error, error);
                    }
                });
            });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefills_last_email() {
        let screen = WelcomeScreen::new("a@x.com");
        assert_eq!(screen.email, "a@x.com");
        assert!(screen.password.is_empty());
        assert!(screen.error.is_none());
    }

    #[test]
    fn test_set_error_clears_password() {
        let mut screen = WelcomeScreen::new("a@x.com");
        screen.password = "secret1".into();
        screen.set_error("wrong email or password");
        assert_eq!(screen.error.as_deref(), Some("wrong email or password"));
        assert!(screen.password.is_empty());
        assert_eq!(screen.email, "a@x.com");
    }

    #[test]
    fn test_credentials_trim_email_only() {
        let mut screen = WelcomeScreen::new(" a@x.com ");
        screen.password = " pass word ".into();
        assert_eq!(
            screen.credentials(),
            ("a@x.com".to_string(), " pass word ".to_string())
        );
    }
}
