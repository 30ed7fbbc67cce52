//! Remaining-capacity zones.
//!
//! The remaining percentage is measured against the grounded budget (the
//! ceiling across all states) so the gauge reads the same regardless of
//! the day's check-in. Variant order matches severity so zone
//! transitions can be compared directly.

use crate::settings::EnergySettings;

/// Discrete classification of remaining energy, fuel-gauge style
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnergyZone {
    Full,
    Good,
    Half,
    Low,
    Warning,
    Critical,
    Overloaded,
}

impl EnergyZone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Good => "Good",
            Self::Half => "Half",
            Self::Low => "Low",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Overloaded => "Overloaded",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Full => "Full tank! Plenty of energy",
            Self::Good => "Good reserves remaining",
            Self::Half => "Half tank - pacing well",
            Self::Low => "Getting low on capacity",
            Self::Warning => "Running low - prioritize carefully",
            Self::Critical => "Very low capacity remaining",
            Self::Overloaded => "Overloaded - consider dropping tasks",
        }
    }
}

/// Remaining energy as a percentage of the grounded budget.
/// Overcommitment clamps at 0; the result never goes negative.
pub fn remaining_percentage(selected_weight: f64, energy_balance: u32, settings: &EnergySettings) -> f64 {
    let max_energy = settings.max_energy();
    if max_energy == 0 {
        return 0.0;
    }
    let remaining = (f64::from(energy_balance) - selected_weight).max(0.0);
    remaining / f64::from(max_energy) * 100.0
}

/// Classify the current load. Overcommitment is flagged regardless of
/// magnitude (strict comparison: filling the budget exactly is not
/// overload); otherwise fixed thresholds on the remaining percentage,
/// evaluated high to low.
pub fn classify(selected_weight: f64, energy_balance: u32, settings: &EnergySettings) -> EnergyZone {
    if selected_weight > f64::from(energy_balance) {
        return EnergyZone::Overloaded;
    }

    let remaining = remaining_percentage(selected_weight, energy_balance, settings);
    if remaining > 80.0 {
        EnergyZone::Full
    } else if remaining > 60.0 {
        EnergyZone::Good
    } else if remaining > 45.0 {
        EnergyZone::Half
    } else if remaining > 30.0 {
        EnergyZone::Low
    } else if remaining > 15.0 {
        EnergyZone::Warning
    } else {
        EnergyZone::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_percentage() {
        let settings = EnergySettings::default(); // grounded = 18
        assert_eq!(remaining_percentage(0.0, 18, &settings), 100.0);
        assert_eq!(remaining_percentage(9.0, 18, &settings), 50.0);
        assert_eq!(remaining_percentage(6.0, 9, &settings), 3.0 / 18.0 * 100.0);
        // Overcommitment clamps at zero rather than going negative
        assert_eq!(remaining_percentage(20.0, 18, &settings), 0.0);
    }

    #[test]
    fn test_zone_thresholds() {
        let settings = EnergySettings::default();
        // Against the grounded budget of 18, remaining% = (18-w)/18*100
        assert_eq!(classify(0.0, 18, &settings), EnergyZone::Full); // 100%
        assert_eq!(classify(4.0, 18, &settings), EnergyZone::Good); // 77.8%
        assert_eq!(classify(8.0, 18, &settings), EnergyZone::Half); // 55.6%
        assert_eq!(classify(11.0, 18, &settings), EnergyZone::Low); // 38.9%
        assert_eq!(classify(15.0, 18, &settings), EnergyZone::Warning); // 16.7%
        assert_eq!(classify(17.0, 18, &settings), EnergyZone::Critical); // 5.6%
        assert_eq!(classify(18.5, 18, &settings), EnergyZone::Overloaded);
    }

    #[test]
    fn test_exact_fill_is_not_overload() {
        let settings = EnergySettings::default();
        // Tired budget of 6 filled exactly: strict comparison keeps it
        // out of Overloaded, and 0% remaining lands in Critical
        assert_eq!(classify(6.0, 6, &settings), EnergyZone::Critical);
        assert_eq!(remaining_percentage(6.0, 6, &settings), 0.0);
    }

    #[test]
    fn test_zones_never_regress_as_load_grows() {
        let settings = EnergySettings::default();
        let balance = 18;
        let mut previous = EnergyZone::Full;
        let mut weight = 0.0;
        while weight < 25.0 {
            let zone = classify(weight, balance, &settings);
            assert!(
                zone >= previous,
                "zone regressed from {:?} to {:?} at weight {}",
                previous,
                zone,
                weight
            );
            previous = zone;
            weight += 0.5;
        }
        assert_eq!(previous, EnergyZone::Overloaded);
    }

    #[test]
    fn test_every_zone_has_message_and_label() {
        for zone in [
            EnergyZone::Full,
            EnergyZone::Good,
            EnergyZone::Half,
            EnergyZone::Low,
            EnergyZone::Warning,
            EnergyZone::Critical,
            EnergyZone::Overloaded,
        ] {
            assert!(!zone.message().is_empty());
            assert!(!zone.label().is_empty());
        }
    }
}
