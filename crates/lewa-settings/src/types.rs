//! Settings types with compiled defaults.
//!
//! Defaults match the values the original deployment ships with: the live
//! server on the local development address and the Ge'ez data set for the
//! input widget, pinned to an immutable revision.

use serde::{Deserialize, Serialize};

/// Pinned remote configuration for the input widget (Ge'ez data set).
pub const DEFAULT_WIDGET_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/fodydev/afrim-data/4b177197bb37c9742cd90627b1ad543c32ec791b/gez/gez.toml";

/// Top-level settings for the lewa client crates.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LewaSettings {
    /// Settings schema version.
    pub version: String,
    /// Live-update subscription settings.
    pub live: LiveSettings,
    /// Input widget settings.
    pub widget: WidgetSettings,
}

impl Default for LewaSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            live: LiveSettings::default(),
            widget: WidgetSettings::default(),
        }
    }
}

/// Settings for the live-update subscription client.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveSettings {
    /// Base URL of the competition server.
    pub base_url: String,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Settings for the input widget bootstrap.
///
/// Element identifiers name the host-page slots the widget binds to;
/// `config_url` points at the remote TOML data set the widget downloads.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetSettings {
    /// Identifier of the text input element.
    pub text_field_element_id: String,
    /// Identifier of the download progress element.
    pub download_status_element_id: String,
    /// Identifier of the tooltip container element.
    pub tooltip_element_id: String,
    /// Identifier of the tooltip input echo element.
    pub tooltip_input_element_id: String,
    /// Identifier of the tooltip prediction list element.
    pub tooltip_predicates_element_id: String,
    /// Remote TOML configuration URL (pinned revision).
    pub config_url: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            text_field_element_id: "textfield".to_string(),
            download_status_element_id: "download-status".to_string(),
            tooltip_element_id: "tooltip".to_string(),
            tooltip_input_element_id: "tooltip-input".to_string(),
            tooltip_predicates_element_id: "tooltip-predicates".to_string(),
            config_url: DEFAULT_WIDGET_CONFIG_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment() {
        let settings = LewaSettings::default();
        assert_eq!(settings.version, "0.1.0");
        assert_eq!(settings.live.base_url, "http://127.0.0.1:5000");
        assert_eq!(settings.widget.text_field_element_id, "textfield");
        assert_eq!(settings.widget.download_status_element_id, "download-status");
        assert_eq!(settings.widget.tooltip_element_id, "tooltip");
        assert_eq!(settings.widget.tooltip_input_element_id, "tooltip-input");
        assert_eq!(
            settings.widget.tooltip_predicates_element_id,
            "tooltip-predicates"
        );
        assert!(settings.widget.config_url.ends_with("gez/gez.toml"));
    }

    #[test]
    fn partial_json_fills_missing_fields() {
        let settings: LewaSettings =
            serde_json::from_str(r#"{"live": {"baseUrl": "https://lewa.example"}}"#).unwrap();
        assert_eq!(settings.live.base_url, "https://lewa.example");
        // Untouched sections keep their defaults
        assert_eq!(settings.widget.tooltip_element_id, "tooltip");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(LewaSettings::default()).unwrap();
        assert!(json["live"]["baseUrl"].is_string());
        assert!(json["widget"]["textFieldElementId"].is_string());
    }
}
