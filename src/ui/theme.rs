//! Brand colors and styling for the chat client.
//!
//! The two message bubbles are the core of the visual language:
//!
//! - **Mine**: right-aligned, light yellow bubble with brown text, avatar on
//!   the right
//! - **Theirs**: left-aligned, teal bubble with light blue text, avatar on the
//!   left
//!
//! Everything else (panels, buttons, inputs) is derived from the purple/blue
//! brand pair.

use eframe::egui::{self, Align, Color32};

use crate::presenter::BubbleVariant;

/// Brand palette
pub mod brand {
    use eframe::egui::Color32;

    pub const PURPLE: Color32 = Color32::from_rgb(172, 71, 250);
    pub const LIGHT_PURPLE: Color32 = Color32::from_rgb(229, 192, 255);
    pub const BLUE: Color32 = Color32::from_rgb(40, 125, 228);
    pub const LIGHT_BLUE: Color32 = Color32::from_rgb(214, 238, 255);
    pub const TEAL: Color32 = Color32::from_rgb(52, 152, 164);
    pub const LIGHT_YELLOW: Color32 = Color32::from_rgb(255, 239, 193);
    pub const BROWN: Color32 = Color32::from_rgb(99, 61, 33);
}

/// Visual treatment of one message row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub fill: Color32,
    pub text: Color32,
    /// Horizontal placement of the bubble in the row
    pub align: Align,
    pub avatar: &'static str,
}

/// Map a row variant to its bubble style.
pub fn bubble_style(variant: BubbleVariant) -> BubbleStyle {
    match variant {
        BubbleVariant::Mine => BubbleStyle {
            fill: brand::LIGHT_YELLOW,
            text: brand::BROWN,
            align: Align::Max,
            avatar: "🙂",
        },
        BubbleVariant::Theirs => BubbleStyle {
            fill: brand::TEAL,
            text: brand::LIGHT_BLUE,
            align: Align::Min,
            avatar: "👤",
        },
    }
}

/// Panel colors for the light and dark variants of the app
#[derive(Clone, Debug)]
pub struct FlashTheme {
    pub name: String,
    pub background: Color32,
    pub bar: Color32,
    pub bar_text: Color32,
    pub input_fill: Color32,
    pub accent: Color32,
    pub error: Color32,
}

impl FlashTheme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            bar: brand::PURPLE,
            bar_text: Color32::WHITE,
            input_fill: brand::LIGHT_PURPLE,
            accent: brand::BLUE,
            error: Color32::from_rgb(220, 53, 69),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(24, 20, 32),
            bar: Color32::from_rgb(92, 38, 140),
            bar_text: Color32::WHITE,
            input_fill: Color32::from_rgb(58, 44, 78),
            accent: brand::LIGHT_BLUE,
            error: Color32::from_rgb(240, 71, 71),
        }
    }

    /// Theme by settings name; anything unknown is light.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }
}

/// Apply base visuals and spacing to the egui context.
pub fn apply_app_style(ctx: &egui::Context, theme: &FlashTheme) {
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = theme.background;
    visuals.selection.bg_fill = theme.accent.linear_multiply(0.4);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}
