use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(240, 242, 247);
pub const CARD_BG: Color = Color::Rgb(255, 255, 255);
pub const FG_PRIMARY: Color = Color::Rgb(51, 51, 51);
pub const FG_DIM: Color = Color::Rgb(128, 128, 128);

/// `#3366CC`, the active locale indicator and primary buttons.
pub const ACCENT: Color = Color::Rgb(51, 102, 204);
/// `#333333`, the inactive locale indicator.
pub const NEUTRAL: Color = Color::Rgb(51, 51, 51);
pub const ACCENT_TEXT: Color = Color::Rgb(255, 255, 255);
pub const ACCENT_FOCUS: Color = Color::Rgb(31, 71, 153);
pub const RIPPLE_BG: Color = Color::Rgb(110, 148, 224);
pub const PRESSED_BG: Color = Color::Rgb(214, 214, 214);

pub const BAR_BG: Color = Color::Rgb(255, 255, 255);
pub const BAR_HIGHLIGHT_BG: Color = Color::Rgb(220, 230, 250);
pub const STATUS_BG: Color = ACCENT;
pub const STATUS_TEXT: Color = Color::Rgb(235, 240, 255);

pub const BORDER_IDLE: Color = Color::Rgb(204, 204, 204);
pub const BORDER_FOCUS: Color = ACCENT;
pub const ACTIVE_BG: Color = Color::Rgb(232, 240, 254);
