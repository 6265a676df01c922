//! "Processed data" panel values.
//!
//! Four numbers are fresh uniform draws on every report; everything else is literal text.
//! Draws take the generator as a parameter so callers can seed it.

use rand::Rng;
use serde::Serialize;

/// Closed interval a filler value is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawRange {
    pub low: f64,
    pub high: f64,
}

impl DrawRange {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Draw a value rounded to two decimals.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        round2(rng.gen_range(self.low..=self.high))
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Round half away from zero to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub const BMI_DRAW: DrawRange = DrawRange::new(0.26, 0.39);
pub const PHQ_DRAW: DrawRange = DrawRange::new(0.15, 0.50);
pub const GAD_DRAW: DrawRange = DrawRange::new(0.15, 0.50);
pub const EPWORTH_DRAW: DrawRange = DrawRange::new(0.15, 0.40);

/// Range labels printed in front of each drawn value.
pub const BMI_RANGE_LABEL: &str = "0.41 - 0.70";
pub const PHQ_RANGE_LABEL: &str = "5 - 15";
pub const GAD_RANGE_LABEL: &str = "3 - 9";
pub const EPWORTH_RANGE_LABEL: &str = "0 - 24";

/// Fixed panel text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelLiterals {
    pub depressiveness_level: &'static str,
    pub suicidal_thoughts: &'static str,
    pub anxiousness_level: &'static str,
    pub anxiety_diagnosis: &'static str,
    pub anxiety_treatment: &'static str,
    pub depression_diagnosis: &'static str,
    pub depression_treatment: &'static str,
    pub who_bmi_indicator: &'static str,
    pub gender: &'static str,
}

pub const PANEL_LITERALS: PanelLiterals = PanelLiterals {
    depressiveness_level: "Moderate",
    suicidal_thoughts: "Yes",
    anxiousness_level: "High",
    anxiety_diagnosis: "Generalized Anxiety Disorder",
    anxiety_treatment: "Cognitive Behavioral Therapy",
    depression_diagnosis: "Major Depressive Disorder",
    depression_treatment: "Antidepressants",
    who_bmi_indicator: "Overweight",
    gender: "Female",
};

/// One rendering of the processed data panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessedData {
    pub bmi: f64,
    pub phq: f64,
    pub gad: f64,
    pub epworth: f64,
    #[serde(flatten)]
    pub literals: PanelLiterals,
}

impl ProcessedData {
    /// Draw a fresh panel. Independent of any form input.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            bmi: BMI_DRAW.sample(rng),
            phq: PHQ_DRAW.sample(rng),
            gad: GAD_DRAW.sample(rng),
            epworth: EPWORTH_DRAW.sample(rng),
            literals: PANEL_LITERALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn has_two_decimals(value: f64) -> bool {
        ((value * 100.0).round() - value * 100.0).abs() < 1e-9
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let panel = ProcessedData::draw(&mut rng);
            assert!(BMI_DRAW.contains(panel.bmi), "bmi {}", panel.bmi);
            assert!(PHQ_DRAW.contains(panel.phq), "phq {}", panel.phq);
            assert!(GAD_DRAW.contains(panel.gad), "gad {}", panel.gad);
            assert!(EPWORTH_DRAW.contains(panel.epworth), "epworth {}", panel.epworth);
            for v in [panel.bmi, panel.phq, panel.gad, panel.epworth] {
                assert!(has_two_decimals(v), "{v} not rounded");
            }
        }
    }

    #[test]
    fn test_same_seed_same_panel() {
        let a = ProcessedData::draw(&mut StdRng::seed_from_u64(42));
        let b = ProcessedData::draw(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_draws_vary() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = ProcessedData::draw(&mut rng);
        let differs = (0..20).any(|_| ProcessedData::draw(&mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_round2() {
        assert!((round2(0.304_9) - 0.30).abs() < 1e-12);
        assert!((round2(0.305_1) - 0.31).abs() < 1e-12);
    }
}
