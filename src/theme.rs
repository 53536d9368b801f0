//! Chart themes.
//!
//! Each theme carries the window colors plus everything a chart needs: the
//! series color cycle, grid and axes colors. Built-in themes are Light,
//! Dark, Dracula and One Dark Pro.
//!
//! # Examples
//!
//! ```
//! use sentiplot::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("first series color: {:?}", dracula.colors.series_color(0));
//! ```

use egui::Color32;
use std::collections::HashMap;

pub const DEFAULT_THEME: &str = "Light";

/// Color palette for the window chrome and the chart canvas
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Window
    pub panel_background: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub error: Color32,
    pub warning: Color32,

    // Chart canvas
    pub plot_background: Color32,
    pub axes: Color32,
    pub grid: Color32,
    pub legend_background: Color32,

    /// Series color cycle; series N uses entry N modulo the length
    pub series: Vec<Color32>,
}

impl ThemeColors {
    /// Resolves a position in the color cycle.
    pub fn series_color(&self, index: usize) -> Color32 {
        if self.series.is_empty() {
            return self.text;
        }
        self.series[index % self.series.len()]
    }
}

/// A named theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Holds every built-in theme and the current selection
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in alphabetical order
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// The current theme, falling back to the default if the name is stale
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .expect("default theme is always registered")
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Copies a theme's window colors onto egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.plot_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.series_color(0);

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// White canvas with the "tab10" categorical color cycle
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "White canvas, tab10 series colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),

            plot_background: Color32::WHITE,
            axes: Color32::from_rgb(0, 0, 0),
            grid: Color32::from_rgb(176, 176, 176),
            legend_background: Color32::from_rgba_unmultiplied(255, 255, 255, 204),

            series: [
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
                "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
            ]
            .iter()
            .map(|hex| hex_to_color32(hex))
            .collect(),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark canvas with saturated series colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),

            plot_background: Color32::from_rgb(16, 16, 16),
            axes: Color32::from_rgb(200, 200, 200),
            grid: Color32::from_rgb(70, 70, 70),
            legend_background: Color32::from_rgba_unmultiplied(39, 39, 39, 204),

            series: vec![
                Color32::from_rgb(52, 152, 219),
                Color32::from_rgb(243, 156, 18),
                Color32::from_rgb(46, 204, 113),
                Color32::from_rgb(231, 76, 60),
                Color32::from_rgb(155, 89, 182),
                Color32::from_rgb(26, 188, 156),
                Color32::from_rgb(241, 196, 15),
                Color32::from_rgb(149, 165, 166),
            ],
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),

            plot_background: hex_to_color32("#21222c"),
            axes: hex_to_color32("#f8f8f2"),
            grid: hex_to_color32("#44475a"),
            legend_background: with_alpha(hex_to_color32("#282a36"), 220),

            series: ["#8be9fd", "#ffb86c", "#50fa7b", "#ff5555", "#bd93f9", "#ff79c6", "#f1fa8c"]
                .iter()
                .map(|hex| hex_to_color32(hex))
                .collect(),
        },
    }
}

/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282c34"),
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            error: hex_to_color32("#e06c75"),
            warning: hex_to_color32("#d19a66"),

            plot_background: hex_to_color32("#21252b"),
            axes: hex_to_color32("#abb2bf"),
            grid: hex_to_color32("#3e4451"),
            legend_background: with_alpha(hex_to_color32("#282c34"), 220),

            series: ["#61afef", "#d19a66", "#98c379", "#e06c75", "#c678dd", "#56b6c2", "#e5c07b"]
                .iter()
                .map(|hex| hex_to_color32(hex))
                .collect(),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Scales RGB by `factor` (1.0 = unchanged)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Replaces the alpha channel, keeping RGB unmultiplied
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Applies a 0..=1 opacity the way a series `alpha` is specified
pub fn fade(color: Color32, alpha: f32) -> Color32 {
    with_alpha(color, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light", "One Dark Pro"]);
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_light_cycle_matches_tab10() {
        let manager = ThemeManager::new();
        let light = manager.get_theme("Light").unwrap();
        assert_eq!(light.colors.series_color(0), Color32::from_rgb(0x1f, 0x77, 0xb4));
        assert_eq!(light.colors.series_color(1), Color32::from_rgb(0xff, 0x7f, 0x0e));
        // Cycle wraps around
        assert_eq!(light.colors.series_color(10), light.colors.series_color(0));
    }

    #[test]
    fn test_set_unknown_theme() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Solarized").is_err());
        assert!(manager.set_current_theme("Dracula").is_ok());
        assert_eq!(manager.current_theme().name, "Dracula");
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(hex_to_color32("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
        assert_eq!(adjust_brightness(Color32::from_rgb(200, 100, 10), 2.0), Color32::from_rgb(255, 200, 20));
        assert_eq!(fade(Color32::from_rgb(10, 20, 30), 1.0).a(), 255);
    }

    #[test]
    fn test_every_theme_has_a_description() {
        let manager = ThemeManager::new();
        let mut seen = Vec::new();
        for name in manager.list_themes() {
            let description = &manager.get_theme(name).unwrap().description;
            assert!(!description.is_empty(), "{} has no description", name);
            assert!(!seen.contains(description));
            seen.push(description.clone());
        }
    }
}
