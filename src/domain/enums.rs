use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Short badge text for list rows
    pub fn badge(&self) -> &'static str {
        match self {
            Self::High => "!!!",
            Self::Medium => "!!",
            Self::Low => "!",
        }
    }

    /// Cycle High -> Medium -> Low -> High
    pub fn cycle(&self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// How much personal energy a task demands, independent of priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

impl EnergyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// Task lifecycle status. Archived is a soft-delete; archived tasks are
/// retained and can be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Active,
    Archived,
}

/// Self-reported daily state, chosen once per day at check-in.
/// Drives which settings budget is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
    Grounded,
    Scattered,
    Tired,
}

impl UserState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grounded => "Grounded",
            Self::Scattered => "Scattered",
            Self::Tired => "Tired",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Grounded => "🌿",
            Self::Scattered => "🌬",
            Self::Tired => "🌙",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Grounded => "Steady and focused",
            Self::Scattered => "Busy, pulled in many directions",
            Self::Tired => "Running on low reserves",
        }
    }

    pub fn all() -> &'static [UserState] {
        &[Self::Grounded, Self::Scattered, Self::Tired]
    }
}

/// Rough bucket for a task's energy cost, used for list badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightCategory {
    Light,
    Medium,
    Heavy,
}

impl WeightCategory {
    /// Light: <= 3 pts, Medium: <= 4 pts, Heavy: above
    pub fn from_weight(weight: f64) -> Self {
        if weight <= 3.0 {
            Self::Light
        } else if weight <= 4.0 {
            Self::Medium
        } else {
            Self::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Light => "Quick win - low energy",
            Self::Medium => "Moderate energy needed",
            Self::Heavy => "This task requires a grounded state",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    CheckIn,
    AddingTask,
    EditingTask,
    AddingTodo,
    EditingSettings,
    ConfirmDelete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::High.cycle(), Priority::Medium);
        assert_eq!(Priority::Medium.cycle(), Priority::Low);
        assert_eq!(Priority::Low.cycle(), Priority::High);
    }

    #[test]
    fn test_energy_level_cycle() {
        assert_eq!(EnergyLevel::High.cycle(), EnergyLevel::Medium);
        assert_eq!(EnergyLevel::Low.cycle(), EnergyLevel::High);
    }

    #[test]
    fn test_weight_category_buckets() {
        assert_eq!(WeightCategory::from_weight(2.0), WeightCategory::Light);
        assert_eq!(WeightCategory::from_weight(3.0), WeightCategory::Light);
        assert_eq!(WeightCategory::from_weight(4.0), WeightCategory::Medium);
        assert_eq!(WeightCategory::from_weight(5.0), WeightCategory::Heavy);
        assert_eq!(WeightCategory::from_weight(6.0), WeightCategory::Heavy);
    }

    #[test]
    fn test_serde_tags_are_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
        let state: UserState = serde_json::from_str("\"grounded\"").unwrap();
        assert_eq!(state, UserState::Grounded);
    }
}
