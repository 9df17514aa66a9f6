use super::*;

#[test]
fn css_variables_declare_every_token() {
    let css = Theme::default().css_variables();
    assert!(css.starts_with("--mc-primary: #1976d2;"));
    assert!(css.contains("--mc-success: #4caf50;"));
    assert!(css.contains("--mc-text-secondary: #757575;"));
    assert!(css.ends_with("--mc-radius: 8px;"));
    assert_eq!(css.matches("--mc-").count(), 13);
}

#[test]
fn tone_color_maps_chip_tones() {
    let theme = Theme::default();
    assert_eq!(theme.tone_color("success"), theme.success);
    assert_eq!(theme.tone_color("error"), theme.error);
    assert_eq!(theme.tone_color("warning"), theme.warning);
    assert_eq!(theme.tone_color("default"), theme.text_secondary);
}

#[test]
fn with_api_base_normalizes_base() {
    let config = ConsoleConfig::with_api_base("http://localhost:3001/api/v1/");
    assert_eq!(config.api.base(), "http://localhost:3001/api/v1");
    assert_eq!(config.theme, Theme::default());
}
