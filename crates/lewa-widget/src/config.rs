//! Widget configuration record.

use lewa_settings::WidgetSettings;

/// Fixed configuration handed to the input-method engine constructor.
///
/// The element identifiers name the host-page slots the widget binds to;
/// the elements must exist before construction. Immutable once handed off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
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

impl WidgetConfig {
    /// Build a config from the widget section of the settings.
    #[must_use]
    pub fn from_settings(settings: &WidgetSettings) -> Self {
        Self {
            text_field_element_id: settings.text_field_element_id.clone(),
            download_status_element_id: settings.download_status_element_id.clone(),
            tooltip_element_id: settings.tooltip_element_id.clone(),
            tooltip_input_element_id: settings.tooltip_input_element_id.clone(),
            tooltip_predicates_element_id: settings.tooltip_predicates_element_id.clone(),
            config_url: settings.config_url.clone(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_settings(&WidgetSettings::default())
    }
}
