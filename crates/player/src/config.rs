//! Exhibit configuration

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use exhibit_domain::LatLng;
use serde::{Deserialize, Serialize};

use crate::application::ViewportClass;

/// Shell variant for UI layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown shell kind: {other}")),
        }
    }
}

/// Page-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitConfig {
    /// Shell layout (desktop or mobile)
    pub shell: ShellKind,
    /// Widths at or below this are treated as narrow (mobile) viewports
    pub mobile_breakpoint_px: f64,
    /// Fixed viewport width for the desktop shell (the webview can't be measured)
    pub viewport_width_px: Option<f64>,
    /// Map widget configuration
    pub map: MapConfig,
}

/// Map widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Id of the element the map is mounted into
    pub container_id: String,
    /// Initial center before the view is fitted to the markers
    pub center: LatLng,
    /// Initial zoom before the view is fitted to the markers
    pub zoom: u8,
    pub max_zoom: u8,
    /// Tile URL template (`{s}`, `{z}`, `{x}`, `{y}` placeholders)
    pub tile_url: String,
    pub attribution: String,
    /// Padding (x, y) in pixels kept around the markers when fitting the view
    pub fit_padding_px: [u32; 2],
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
    pub attribution_control: bool,
    pub leaflet_script_url: String,
    pub leaflet_stylesheet_url: String,
}

impl Default for ExhibitConfig {
    fn default() -> Self {
        Self {
            shell: ShellKind::Desktop,
            mobile_breakpoint_px: 768.0,
            viewport_width_px: None,
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "vietnam-map".to_string(),
            // Approximate center of Vietnam
            center: LatLng {
                lat: 16.0583,
                lng: 108.2772,
            },
            zoom: 6,
            max_zoom: 19,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#
                .to_string(),
            fit_padding_px: [50, 50],
            zoom_control: true,
            scroll_wheel_zoom: true,
            attribution_control: true,
            leaflet_script_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".to_string(),
            leaflet_stylesheet_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
        }
    }
}

impl ExhibitConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a key lookup.
    ///
    /// `EXHIBIT_CONFIG` names a JSON file used as the base; the remaining
    /// variables override single fields.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("EXHIBIT_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(shell) = lookup("EXHIBIT_SHELL") {
            config.shell = shell
                .parse()
                .map_err(anyhow::Error::msg)
                .context("EXHIBIT_SHELL must be `desktop` or `mobile`")?;
        }
        if let Some(breakpoint) = lookup("EXHIBIT_MOBILE_BREAKPOINT") {
            config.mobile_breakpoint_px = breakpoint
                .trim()
                .parse()
                .context("EXHIBIT_MOBILE_BREAKPOINT must be a width in pixels")?;
        }
        if let Some(width) = lookup("EXHIBIT_VIEWPORT_WIDTH") {
            config.viewport_width_px = Some(
                width
                    .trim()
                    .parse()
                    .context("EXHIBIT_VIEWPORT_WIDTH must be a width in pixels")?,
            );
        }
        if let Some(url) = lookup("EXHIBIT_TILE_URL") {
            config.map.tile_url = url;
        }
        if let Some(max_zoom) = lookup("EXHIBIT_MAP_MAX_ZOOM") {
            config.map.max_zoom = max_zoom
                .trim()
                .parse()
                .context("EXHIBIT_MAP_MAX_ZOOM must be a zoom level between 0 and 255")?;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading exhibit config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing exhibit config {}", path.display()))
    }

    /// Browser configuration: defaults, with the shell picked from the window width
    pub fn for_web(window_width: f64) -> Self {
        let defaults = Self::default();
        let shell = match ViewportClass::from_width(window_width, defaults.mobile_breakpoint_px) {
            ViewportClass::Narrow => ShellKind::Mobile,
            ViewportClass::Wide => ShellKind::Desktop,
        };
        Self { shell, ..defaults }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExhibitConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ExhibitConfig::default());
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.map.zoom, 6);
        assert_eq!(config.map.fit_padding_px, [50, 50]);
    }

    #[test]
    fn test_env_overrides() {
        let config = ExhibitConfig::from_lookup(lookup_from(&[
            ("EXHIBIT_SHELL", " Mobile "),
            ("EXHIBIT_MOBILE_BREAKPOINT", "600"),
            ("EXHIBIT_VIEWPORT_WIDTH", "375"),
            ("EXHIBIT_TILE_URL", "https://tiles.example.org/{z}/{x}/{y}.png"),
            ("EXHIBIT_MAP_MAX_ZOOM", "12"),
        ]))
        .unwrap();

        assert_eq!(config.shell, ShellKind::Mobile);
        assert_eq!(config.mobile_breakpoint_px, 600.0);
        assert_eq!(config.viewport_width_px, Some(375.0));
        assert_eq!(config.map.tile_url, "https://tiles.example.org/{z}/{x}/{y}.png");
        assert_eq!(config.map.max_zoom, 12);
    }

    #[test]
    fn test_invalid_breakpoint_is_an_error() {
        let err = ExhibitConfig::from_lookup(lookup_from(&[("EXHIBIT_MOBILE_BREAKPOINT", "wide")]))
            .unwrap_err();
        assert!(err.to_string().contains("EXHIBIT_MOBILE_BREAKPOINT"));
    }

    #[test]
    fn test_invalid_shell_is_an_error() {
        let err =
            ExhibitConfig::from_lookup(lookup_from(&[("EXHIBIT_SHELL", "tablet")])).unwrap_err();
        assert!(format!("{err:#}").contains("unknown shell kind: tablet"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = ExhibitConfig::from_lookup(lookup_from(&[(
            "EXHIBIT_CONFIG",
            "/nonexistent/exhibit-config.json",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("reading exhibit config"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExhibitConfig =
            serde_json::from_str(r#"{ "shell": "mobile", "map": { "zoom": 5 } }"#).unwrap();
        assert_eq!(config.shell, ShellKind::Mobile);
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn test_web_shell_from_width() {
        assert_eq!(ExhibitConfig::for_web(768.0).shell, ShellKind::Mobile);
        assert_eq!(ExhibitConfig::for_web(1024.0).shell, ShellKind::Desktop);
    }
}
