//! Theme system - concrete colors for the semantic color classes.
//!
//! Glyphs carry [`ColorClass`] only; the theme decides hex values at export
//! time, so a host can restyle without recomposing the scene.

use serde::{Deserialize, Serialize};

use crate::scene::ColorClass;

/// Built-in theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SldTheme {
    /// Light background, dark text
    Light,
    /// Dark background, light text
    Dark,
}

impl SldTheme {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dark" => SldTheme::Dark,
            _ => SldTheme::Light,
        }
    }
}

/// Diagram color configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramColors {
    pub bg: String,
    pub text: String,
    pub normal: String,
    pub inactive: String,
    pub fault: String,
    pub maintenance: String,
    pub load_low: String,
    pub load_medium: String,
    pub load_high: String,
    pub voltage_high: String,
    pub voltage_medium: String,
    pub voltage_low: String,
}

impl Default for DiagramColors {
    fn default() -> Self {
        Self::from_theme(SldTheme::Light)
    }
}

impl DiagramColors {
    pub fn from_theme(theme: SldTheme) -> Self {
        match theme {
            SldTheme::Light => Self {
                bg: "#FFFFFF".to_string(),
                text: "#333333".to_string(),
                normal: "#2E7D32".to_string(),
                inactive: "#9E9E9E".to_string(),
                fault: "#D32F2F".to_string(),
                maintenance: "#F9A825".to_string(),
                load_low: "#43A047".to_string(),
                load_medium: "#FB8C00".to_string(),
                load_high: "#E53935".to_string(),
                voltage_high: "#7B1FA2".to_string(),
                voltage_medium: "#0288D1".to_string(),
                voltage_low: "#00897B".to_string(),
            },
            SldTheme::Dark => Self {
                bg: "#1A1A2E".to_string(),
                text: "#CCCCCC".to_string(),
                normal: "#66BB6A".to_string(),
                inactive: "#757575".to_string(),
                fault: "#EF5350".to_string(),
                maintenance: "#FDD835".to_string(),
                load_low: "#66BB6A".to_string(),
                load_medium: "#FFA726".to_string(),
                load_high: "#EF5350".to_string(),
                voltage_high: "#BA68C8".to_string(),
                voltage_medium: "#4FC3F7".to_string(),
                voltage_low: "#4DB6AC".to_string(),
            },
        }
    }

    /// Resolve a semantic color class to a hex value
    pub fn hex(&self, class: ColorClass) -> &str {
        match class {
            ColorClass::Normal => &self.normal,
            ColorClass::Inactive => &self.inactive,
            ColorClass::Fault => &self.fault,
            ColorClass::Maintenance => &self.maintenance,
            ColorClass::LoadLow => &self.load_low,
            ColorClass::LoadMedium => &self.load_medium,
            ColorClass::LoadHigh => &self.load_high,
            ColorClass::VoltageHigh => &self.voltage_high,
            ColorClass::VoltageMedium => &self.voltage_medium,
            ColorClass::VoltageLow => &self.voltage_low,
        }
    }
}
