//! Theme system for the viewer
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/showcase/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Alpha as 0.0..=1.0 for blending
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
struct ThemeData {
    #[allow(dead_code)]
    version: u32,
    name: String,
    ui: UiThemeData,
}

/// UI theme colors (raw hex strings from YAML)
#[derive(Debug, Clone, Deserialize)]
struct UiThemeData {
    background: String,
    placeholder: String,
    button: String,
    chevron: String,
    dot: String,
    dot_active: String,
    overlay: String,
    panel: String,
    text: String,
    text_dim: String,
}

/// Resolved theme colors
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Window background behind the slides
    pub background: Color,
    /// Fill for slides whose image is not yet decoded (or failed)
    pub placeholder: Color,
    /// Chevron button background
    pub button: Color,
    /// Chevron arrow color
    pub chevron: Color,
    /// Inactive dot
    pub dot: Color,
    /// Active dot
    pub dot_active: Color,
    /// Modal dimming overlay (carries alpha)
    pub overlay: Color,
    /// Modal panel background
    pub panel: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (captions)
    pub text_dim: Color,
}

/// A fully resolved theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x12, 0x12, 0x14),
                placeholder: Color::rgb(0x24, 0x24, 0x28),
                button: Color::rgb(0x2c, 0x2c, 0x30),
                chevron: Color::rgb(0xe8, 0xe8, 0xe8),
                dot: Color::rgb(0x55, 0x55, 0x5c),
                dot_active: Color::rgb(0xf0, 0xf0, 0xf0),
                overlay: Color {
                    r: 0,
                    g: 0,
                    b: 0,
                    a: 0xa0,
                },
                panel: Color::rgb(0x1e, 0x1e, 0x22),
                text: Color::rgb(0xf0, 0xf0, 0xf0),
                text_dim: Color::rgb(0x9a, 0x9a, 0xa2),
            },
        }
    }
}

impl Theme {
    /// Parse a theme from YAML content
    pub fn from_yaml(content: &str) -> Result<Theme, String> {
        let data: ThemeData =
            serde_yaml::from_str(content).map_err(|e| format!("invalid theme yaml: {}", e))?;
        let ui = &data.ui;
        Ok(Theme {
            name: data.name,
            colors: ThemeColors {
                background: Color::from_hex(&ui.background)?,
                placeholder: Color::from_hex(&ui.placeholder)?,
                button: Color::from_hex(&ui.button)?,
                chevron: Color::from_hex(&ui.chevron)?,
                dot: Color::from_hex(&ui.dot)?,
                dot_active: Color::from_hex(&ui.dot_active)?,
                overlay: Color::from_hex(&ui.overlay)?,
                panel: Color::from_hex(&ui.panel)?,
                text: Color::from_hex(&ui.text)?,
                text_dim: Color::from_hex(&ui.text_dim)?,
            },
        })
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Theme, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("unknown builtin theme: {}", id))
            .and_then(|t| Theme::from_yaml(t.yaml))
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0xff, 0x80, 0x00, 0xff));

        let c = Color::from_hex("000000a0").unwrap();
        assert_eq!(c.a, 0xa0);

        assert!(Color::from_hex("#fff").is_err());
    }

    #[test]
    fn test_color_to_argb() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb_u32(), 0xFF123456);
    }

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("theme {} failed to parse: {}", builtin.id, e));
            assert!(!theme.name.is_empty());
        }
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(Theme::from_builtin("solarized-sepia").is_err());
    }
}
