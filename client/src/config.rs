//! Process-wide console configuration.
//!
//! DESIGN
//! ======
//! Built once in `App` and provided through Leptos context. Nothing mutates
//! it afterwards: the theme is emitted as CSS custom properties on the root
//! element, and every page reads the same `ApiClient`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::{ApiClient, DEFAULT_API_BASE};

/// Palette and typography of the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub rating: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub surface: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub font_family: &'static str,
    pub radius: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1976d2",
            success: "#4caf50",
            error: "#f44336",
            warning: "#ff9800",
            info: "#03a9f4",
            rating: "#ffb121",
            text: "#212121",
            text_secondary: "#757575",
            surface: "#ffffff",
            background: "#f5f5f5",
            border: "#e0e0e0",
            font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
            radius: "8px",
        }
    }
}

impl Theme {
    /// Inline `style` value declaring every theme token as `--mc-*`.
    pub fn css_variables(&self) -> String {
        [
            ("primary", self.primary),
            ("success", self.success),
            ("error", self.error),
            ("warning", self.warning),
            ("info", self.info),
            ("rating", self.rating),
            ("text", self.text),
            ("text-secondary", self.text_secondary),
            ("surface", self.surface),
            ("background", self.background),
            ("border", self.border),
            ("font-family", self.font_family),
            ("radius", self.radius),
        ]
        .iter()
        .map(|(name, value)| format!("--mc-{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Color for a chip tone name (`success`, `error`, `warning`, `default`).
    pub fn tone_color(&self, tone: &str) -> &'static str {
        match tone {
            "success" => self.success,
            "error" => self.error,
            "warning" => self.warning,
            "primary" => self.primary,
            _ => self.text_secondary,
        }
    }
}

/// Immutable configuration shared by the whole component tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api: ApiClient,
    pub theme: Theme,
}

impl ConsoleConfig {
    /// Configuration for this build. `MODCONSOLE_API_BASE` overrides the
    /// API prefix at compile time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("MODCONSOLE_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_api_base(base: &str) -> Self {
        Self { api: ApiClient::new(base), theme: Theme::default() }
    }
}
