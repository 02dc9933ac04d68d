use crate::formatting::theme::{palette, ColorTheme, SemanticColor};
use crate::formatting::utils::{format_count, format_minutes, pluralize, truncate};
use crate::models::Category;
use crate::session::Theme;
use colored::Color;

#[test]
fn test_palettes_differ_per_theme() {
    let dark = palette(Theme::Dark);
    let light = palette(Theme::Light);
    assert_ne!(dark.background, light.background);
    assert_ne!(dark.text, light.text);
    assert_eq!(palette(Theme::Dark), dark);
}

#[test]
fn test_cli_colors_follow_theme() {
    let dark = ColorTheme::for_theme(Theme::Dark);
    let light = ColorTheme::for_theme(Theme::Light);
    assert_eq!(dark.get(SemanticColor::Primary), Color::White);
    assert_eq!(light.get(SemanticColor::Primary), Color::Black);
    assert_eq!(dark.get(SemanticColor::Error), Color::Red);
    assert_eq!(
        dark.get(SemanticColor::Sleep),
        light.get(SemanticColor::Sleep)
    );
}

#[test]
fn test_category_semantic_colors() {
    assert_eq!(SemanticColor::from(Category::MentalHealth), SemanticColor::MentalHealth);
    assert_eq!(SemanticColor::from(Category::Fitness), SemanticColor::Fitness);
}

#[test]
fn test_truncate_is_char_safe() {
    assert_eq!(truncate("Deep Sleep Protocol", 30), "Deep Sleep Protocol");
    assert_eq!(truncate("Deep Sleep Protocol", 10), "Deep Sl...");
    assert_eq!(truncate("🧘🧘🧘🧘🧘", 4), "🧘...");
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(980), "980");
    assert_eq!(format_count(1240), "1.2k");
    assert_eq!(format_count(15600), "15.6k");
}

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(45), "45 min");
    assert_eq!(format_minutes(120), "2h");
    assert_eq!(format_minutes(535), "8h 55m");
}

#[test]
fn test_pluralize() {
    assert_eq!(pluralize(1, "goal", "goals"), "1 goal");
    assert_eq!(pluralize(3, "goal", "goals"), "3 goals");
}
