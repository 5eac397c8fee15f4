use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_INFO: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x52);
