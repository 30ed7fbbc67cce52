use crate::domain::{EnergyLevel, Priority, UserState};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// User-tunable energy budgets and point weights.
///
/// Exactly one record exists per user; a full default record seeds first
/// use. Values are advisory-validated, never hard-enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySettings {
    /// Daily budget on steady, focused days
    pub grounded: u32,
    /// Daily budget on busy, scattered days
    pub scattered: u32,
    /// Daily budget on depleted days
    pub tired: u32,

    pub priority_high: u32,
    pub priority_med: u32,
    pub priority_low: u32,

    pub energy_high: u32,
    pub energy_med: u32,
    pub energy_low: u32,

    /// Hour (0-23) the 12-hour work window opens
    #[serde(default = "default_window_start")]
    pub work_window_start: u32,

    /// False until the user edits anything
    #[serde(default)]
    pub customized: bool,
    #[serde(default)]
    pub last_updated: Option<String>,
}

fn default_window_start() -> u32 {
    9
}

impl Default for EnergySettings {
    fn default() -> Self {
        Self {
            grounded: 18,
            scattered: 9,
            tired: 6,
            priority_high: 3,
            priority_med: 2,
            priority_low: 1,
            energy_high: 3,
            energy_med: 2,
            energy_low: 1,
            work_window_start: default_window_start(),
            customized: false,
            last_updated: None,
        }
    }
}

impl EnergySettings {
    pub fn priority_points(&self, priority: Priority) -> u32 {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_med,
            Priority::Low => self.priority_low,
        }
    }

    pub fn energy_points(&self, level: EnergyLevel) -> u32 {
        match level {
            EnergyLevel::High => self.energy_high,
            EnergyLevel::Medium => self.energy_med,
            EnergyLevel::Low => self.energy_low,
        }
    }

    pub fn state_budget(&self, state: UserState) -> u32 {
        match state {
            UserState::Grounded => self.grounded,
            UserState::Scattered => self.scattered,
            UserState::Tired => self.tired,
        }
    }

    /// The grounded budget is the ceiling across all states and serves
    /// as the fixed denominator for the remaining-energy gauge.
    pub fn max_energy(&self) -> u32 {
        self.grounded
    }

    /// Mark the record as user-edited
    pub fn touch(&mut self) {
        self.customized = true;
        self.last_updated = Some(Local::now().to_rfc3339());
    }

    /// Reset to the built-in defaults. Idempotent; the result always has
    /// `customized = false`.
    pub fn reset_to_defaults(&mut self) {
        *self = Self {
            last_updated: Some(Local::now().to_rfc3339()),
            ..Self::default()
        };
    }

    /// Advisory validation. Returns human-readable nudges for inverted
    /// or degenerate values; the settings save regardless.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.scattered > self.grounded {
            warnings.push("Scattered energy should be less than Grounded energy".to_string());
        }
        if self.tired > self.scattered {
            warnings.push("Tired energy should be less than Scattered energy".to_string());
        }
        if self.grounded > 40 {
            warnings.push(
                "That's unusually high for Grounded! You can always adjust if needed.".to_string(),
            );
        }
        if self.tired < 3 {
            warnings.push(
                "That's very low for Tired. Remember, this is about realistic capacity, not punishment."
                    .to_string(),
            );
        }
        if self.grounded == self.scattered && self.scattered == self.tired {
            warnings.push(
                "When all states are the same, your check-in won't affect your capacity. Is this intentional?"
                    .to_string(),
            );
        }

        warnings
    }
}

/// Why a customization event was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationReason {
    FirstTime,
    Adjustment,
    Reset,
}

/// One settings edit, kept for the customization history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationEvent {
    pub timestamp: String,
    pub reason: CustomizationReason,
    pub old_values: EnergySettings,
    pub new_values: EnergySettings,
}

/// Append-only log of settings edits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyAnalytics {
    pub customization_events: Vec<CustomizationEvent>,
}

impl EnergyAnalytics {
    /// Record an edit. The reason is derived from the old record: a
    /// never-customized record means this is the first-time setup.
    pub fn record(&mut self, old: &EnergySettings, new: &EnergySettings, reset: bool) {
        let reason = if reset {
            CustomizationReason::Reset
        } else if old.customized {
            CustomizationReason::Adjustment
        } else {
            CustomizationReason::FirstTime
        };

        self.customization_events.push(CustomizationEvent {
            timestamp: Local::now().to_rfc3339(),
            reason,
            old_values: old.clone(),
            new_values: new.clone(),
        });
    }

    pub fn adjustments(&self) -> usize {
        self.customization_events
            .iter()
            .filter(|e| e.reason == CustomizationReason::Adjustment)
            .count()
    }

    pub fn resets(&self) -> usize {
        self.customization_events
            .iter()
            .filter(|e| e.reason == CustomizationReason::Reset)
            .count()
    }
}
