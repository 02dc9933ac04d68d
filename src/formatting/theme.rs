use colored::{Color, ColoredString, Colorize};
use lazy_static::lazy_static;
use ratatui::style::Color as TuiColor;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::Category;
use crate::session::Theme;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Categories
    Meditation,
    Fitness,
    Sleep,
    Wellness,
    Productivity,
    MentalHealth,

    // UI colors
    Header,
    Accent,
    Highlight,
    Error,
    Success,
    Info,

    // Text colors
    Primary,
    Muted,
}

impl From<Category> for SemanticColor {
    fn from(category: Category) -> Self {
        match category {
            Category::Meditation => Self::Meditation,
            Category::Fitness => Self::Fitness,
            Category::Sleep => Self::Sleep,
            Category::Wellness => Self::Wellness,
            Category::Productivity => Self::Productivity,
            Category::MentalHealth => Self::MentalHealth,
        }
    }
}

/// Terminal colors for CLI output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn for_theme(theme: Theme) -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::Meditation, Color::TrueColor { r: 147, g: 112, b: 219 });
        colors.insert(SemanticColor::Fitness, Color::TrueColor { r: 249, g: 115, b: 22 });
        colors.insert(SemanticColor::Sleep, Color::TrueColor { r: 59, g: 130, b: 246 });
        colors.insert(SemanticColor::Wellness, Color::TrueColor { r: 16, g: 185, b: 129 });
        colors.insert(SemanticColor::Productivity, Color::TrueColor { r: 234, g: 179, b: 8 });
        colors.insert(SemanticColor::MentalHealth, Color::TrueColor { r: 236, g: 72, b: 153 });

        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        match theme {
            Theme::Dark => {
                colors.insert(SemanticColor::Header, Color::TrueColor { r: 167, g: 139, b: 250 });
                colors.insert(SemanticColor::Accent, Color::TrueColor { r: 129, g: 140, b: 248 });
                colors.insert(SemanticColor::Highlight, Color::BrightMagenta);
                colors.insert(SemanticColor::Primary, Color::White);
                colors.insert(SemanticColor::Muted, Color::TrueColor { r: 148, g: 163, b: 184 });
            }
            Theme::Light => {
                colors.insert(SemanticColor::Header, Color::TrueColor { r: 109, g: 40, b: 217 });
                colors.insert(SemanticColor::Accent, Color::TrueColor { r: 79, g: 70, b: 229 });
                colors.insert(SemanticColor::Highlight, Color::Magenta);
                colors.insert(SemanticColor::Primary, Color::Black);
                colors.insert(SemanticColor::Muted, Color::TrueColor { r: 100, g: 116, b: 139 });
            }
        }

        Self { colors }
    }

    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

lazy_static! {
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::default());
}

/// Switch the CLI colors to match the configured theme
pub fn set_theme(theme: Theme) {
    if let Ok(mut current) = THEME.write() {
        *current = ColorTheme::for_theme(theme);
    }
}

pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|theme| theme.get(semantic))
        .unwrap_or(Color::White)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> ColoredString {
        self.color(theme_color(semantic))
    }
}

/// Colors used by the terminal UI for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: TuiColor,
    pub surface: TuiColor,
    pub text: TuiColor,
    pub muted: TuiColor,
    pub accent: TuiColor,
    pub accent_alt: TuiColor,
    pub border: TuiColor,
    pub selection: TuiColor,
    pub success: TuiColor,
    pub error: TuiColor,
    pub info: TuiColor,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: TuiColor::Rgb(15, 23, 42),
            surface: TuiColor::Rgb(30, 41, 59),
            text: TuiColor::Rgb(241, 245, 249),
            muted: TuiColor::Rgb(148, 163, 184),
            accent: TuiColor::Rgb(167, 139, 250),
            accent_alt: TuiColor::Rgb(129, 140, 248),
            border: TuiColor::Rgb(71, 85, 105),
            selection: TuiColor::Rgb(76, 29, 149),
            success: TuiColor::Rgb(74, 222, 128),
            error: TuiColor::Rgb(248, 113, 113),
            info: TuiColor::Rgb(96, 165, 250),
        },
        Theme::Light => Palette {
            background: TuiColor::Rgb(248, 250, 252),
            surface: TuiColor::Rgb(255, 255, 255),
            text: TuiColor::Rgb(15, 23, 42),
            muted: TuiColor::Rgb(100, 116, 139),
            accent: TuiColor::Rgb(124, 58, 237),
            accent_alt: TuiColor::Rgb(79, 70, 229),
            border: TuiColor::Rgb(203, 213, 225),
            selection: TuiColor::Rgb(237, 233, 254),
            success: TuiColor::Rgb(22, 163, 74),
            error: TuiColor::Rgb(220, 38, 38),
            info: TuiColor::Rgb(37, 99, 235),
        },
    }
}

/// Tint used for a category badge in the terminal UI
pub fn category_color(category: Category) -> TuiColor {
    match theme_color(SemanticColor::from(category)) {
        Color::TrueColor { r, g, b } => TuiColor::Rgb(r, g, b),
        _ => TuiColor::Reset,
    }
}
