//! Core FlashChatApp struct definition and initialization

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthProvider, LocalAuth};
use crate::config::{save_settings, Settings};
use crate::presenter::FeedPresenter;
use crate::store::{MemoryStore, MessageStore, StoreOptions};
use crate::ui::{self, FlashTheme, WelcomeAction, WelcomeScreen};

/// Which screen is showing
pub enum Screen {
    Welcome(WelcomeScreen),
    Chat(FeedPresenter),
}

pub struct FlashChatApp {
    pub settings: Settings,
    pub theme: FlashTheme,

    // Collaborators shared with every chat screen
    pub auth: Arc<LocalAuth>,
    pub store: Arc<dyn MessageStore>,

    pub screen: Screen,

    // Only the real app writes settings to disk
    persist_settings: bool,
}

impl FlashChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let theme = FlashTheme::from_name(&settings.theme);
        ui::apply_app_style(&cc.egui_ctx, &theme);

        let auth = Arc::new(LocalAuth::new());
        let store = MemoryStore::spawn(
            auth.clone(),
            StoreOptions {
                write_latency: Duration::from_millis(settings.write_latency_ms),
            },
        );

        let mut app = Self::with_services(settings, auth, Arc::new(store));
        app.persist_settings = true;
        app
    }

    /// Build the app around existing collaborators, starting on the welcome screen.
    pub fn with_services(settings: Settings, auth: Arc<LocalAuth>, store: Arc<dyn MessageStore>) -> Self {
        let theme = FlashTheme::from_name(&settings.theme);
        let screen = Screen::Welcome(WelcomeScreen::new(&settings.last_email));
        Self {
            settings,
            theme,
            auth,
            store,
            screen,
            persist_settings: false,
        }
    }

    pub fn is_chatting(&self) -> bool {
        matches!(self.screen, Screen::Chat(_))
    }

    /// Register or log in; on success switch to the chat screen, otherwise
    /// show the error on the welcome screen.
    pub fn handle_welcome_action(&mut self, action: WelcomeAction) {
        let result = match &action {
            WelcomeAction::Register { email, password } => self.auth.register(email, password),
            WelcomeAction::LogIn { email, password } => self.auth.sign_in(email, password),
        };

        match result {
            Ok(()) => self.enter_chat(),
            Err(e) => {
                tracing::info!(error = %e, "sign in rejected");
                if let Screen::Welcome(welcome) = &mut self.screen {
                    welcome.set_error(&e);
                }
            }
        }
    }

    /// Show the chat screen with a freshly subscribed feed.
    pub(super) fn enter_chat(&mut self) {
        if let Some(user) = self.auth.current_user() {
            self.settings.last_email = user;
            self.save();
        }

        let mut presenter = FeedPresenter::new(
            self.store.clone(),
            self.auth.clone(),
            self.settings.collection.clone(),
        );
        presenter.activate();
        self.screen = Screen::Chat(presenter);
    }

    /// Back to the entry screen. The feed unsubscribes when the presenter drops.
    pub(super) fn show_welcome(&mut self) {
        self.screen = Screen::Welcome(WelcomeScreen::new(&self.settings.last_email));
    }

    pub(super) fn save(&self) {
        if !self.persist_settings {
            return;
        }
        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }
}

impl Drop for FlashChatApp {
    fn drop(&mut self) {
        // Persist settings on exit
        self.save();
    }
}
