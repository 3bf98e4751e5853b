//! Canned flood-risk predictions.
//!
//! There is no model behind these: `SimulatedPredictor` picks a result at
//! random and ignores the readings. `RiskPredictor` is the seam a real
//! prediction service would implement.

use crate::reading::Reading;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prediction {
    HighRisk,
    LowRisk,
    Critical,
}

impl Prediction {
    pub fn message(&self) -> &'static str {
        match self {
            Prediction::HighRisk => "High risk of flooding!",
            Prediction::LowRisk => "Low risk of flooding",
            Prediction::Critical => {
                "Emergency: Critical flood risk detected. Evacuate to the nearest shelter."
            }
        }
    }

    /// High and critical results render as alerts.
    pub fn is_alert(&self) -> bool {
        !matches!(self, Prediction::LowRisk)
    }
}

/// A prediction together with the time it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub prediction: Prediction,
    pub issued_at: DateTime<Utc>,
}

impl PredictionOutcome {
    pub fn new(prediction: Prediction, issued_at: DateTime<Utc>) -> Self {
        Self {
            prediction,
            issued_at,
        }
    }

    pub fn message(&self) -> &'static str {
        self.prediction.message()
    }
}

pub trait RiskPredictor {
    fn predict(&mut self, reading: &Reading) -> Prediction;
}

/// Coin-flip predictor.
pub struct SimulatedPredictor<R> {
    rng: R,
    high_risk_probability: f64,
}

impl<R: Rng> SimulatedPredictor<R> {
    /// `high_risk_probability` is clamped to `[0, 1]`; NaN means even odds.
    pub fn new(rng: R, high_risk_probability: f64) -> Self {
        let high_risk_probability = if high_risk_probability.is_nan() {
            0.5
        } else {
            high_risk_probability.clamp(0.0, 1.0)
        };
        Self {
            rng,
            high_risk_probability,
        }
    }
}

impl<R: Rng> RiskPredictor for SimulatedPredictor<R> {
    fn predict(&mut self, _reading: &Reading) -> Prediction {
        if self.rng.gen_bool(self.high_risk_probability) {
            Prediction::HighRisk
        } else {
            Prediction::LowRisk
        }
    }
}
