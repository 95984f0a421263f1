use colored::Color;

pub const HEADER: Color = Color::BrightGreen;
pub const KEY: Color = Color::BrightBlack;
pub const VALUE: Color = Color::Cyan;
pub const SOURCE_VALUE: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
