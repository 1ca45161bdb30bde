//! Effect toggles and quality presets
//!
//! Persisted by the host as JSON; the core only defines the shape and the
//! round-trip helpers.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }
}

/// Per-subsystem enable flags plus accessibility options. Presets gate which
/// subsystems run; pool capacities are fixed and never scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub quality: QualityPreset,

    // === Effect subsystems ===
    pub auroras: bool,
    pub fire: bool,
    pub sparks: bool,
    pub webs: bool,
    pub signs: bool,
    pub popups: bool,
    pub bonus_pulse: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses the fast, flickery subsystems)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            auroras: true,
            fire: true,
            sparks: true,
            webs: true,
            signs: true,
            popups: true,
            bonus_pulse: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent toggles)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset keeps only the cheap subsystems
        if preset == QualityPreset::Low {
            self.auroras = false;
            self.webs = false;
            self.bonus_pulse = false;
        }
    }

    /// Effective fire toggle (respects reduced_motion)
    pub fn effective_fire(&self) -> bool {
        self.fire && !self.reduced_motion
    }

    /// Effective sparks toggle (respects reduced_motion)
    pub fn effective_sparks(&self) -> bool {
        self.sparks && !self.reduced_motion
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}
