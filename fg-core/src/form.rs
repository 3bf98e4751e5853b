//! Prediction form state.
//!
//! `FormState` is the whole of the form view's logic: controlled field
//! text, which view is showing, the last prediction, and the ticket of the
//! simulated call that is in flight. A ticket is invalidated by `back`,
//! `force_emergency` and `cancel_pending`; resolving a stale ticket is a
//! no-op, so a delayed task that outlives its form can't change the view.

use crate::error::{FormError, Result};
use crate::location::LatLng;
use crate::prediction::{Prediction, PredictionOutcome};
use crate::reading::{parse_value, Reading, ReadingField};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::BTreeMap;

/// Which half of the page is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Map,
}

/// Identifies one submit. Only the latest ticket can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A submitted form awaiting its simulated result.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPrediction {
    pub ticket: Ticket,
    pub reading: Reading,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<ReadingField, String>,
    location: Option<LatLng>,
    view: View,
    outcome: Option<PredictionOutcome>,
    pending: Option<Ticket>,
    next_ticket: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field; empty when never set.
    pub fn value(&self, field: ReadingField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Last write wins. Read-only fields are ignored.
    pub fn set_field(&mut self, field: ReadingField, text: impl Into<String>) {
        if !field.is_editable() {
            debug!("Ignoring write to read-only field {}", field.key());
            return;
        }
        self.values.insert(field, text.into());
    }

    /// Prefill latitude and longitude from device geolocation.
    pub fn set_location(&mut self, location: LatLng) {
        self.location = Some(location);
        self.values
            .insert(ReadingField::Latitude, format!("{:.6}", location.lat));
        self.values
            .insert(ReadingField::Longitude, format!("{:.6}", location.lng));
    }

    pub fn location(&self) -> Option<LatLng> {
        self.location
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Every required field parses and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && self.reading().is_ok()
    }

    /// Validate all required fields into a [`Reading`].
    pub fn reading(&self) -> Result<Reading> {
        let get = |field: ReadingField| parse_value(field, self.value(field));
        Ok(Reading {
            rainfall: get(ReadingField::Rainfall)?,
            temperature: get(ReadingField::Temperature)?,
            humidity: get(ReadingField::Humidity)?,
            river_discharge: get(ReadingField::RiverDischarge)?,
            water_level: get(ReadingField::WaterLevel)?,
            elevation: get(ReadingField::Elevation)?,
            location: self.location,
        })
    }

    /// Start a simulated prediction. The caller waits, then hands the
    /// result to [`FormState::resolve`] with the returned ticket.
    pub fn submit(&mut self) -> Result<PendingPrediction> {
        if self.is_pending() {
            return Err(FormError::PredictionPending);
        }
        let reading = self.reading()?;
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        info!("Prediction requested ({:?})", ticket);
        Ok(PendingPrediction { ticket, reading })
    }

    /// Apply a finished prediction and reveal the map.
    ///
    /// Returns false, changing nothing, when `ticket` is no longer current.
    pub fn resolve(&mut self, ticket: Ticket, outcome: PredictionOutcome) -> bool {
        if self.pending != Some(ticket) {
            debug!("Dropping stale prediction for {:?}", ticket);
            return false;
        }
        info!("Prediction ready: {}", outcome.message());
        self.pending = None;
        self.outcome = Some(outcome);
        self.view = View::Map;
        true
    }

    /// Skip the delay: show the critical message and the map right away.
    pub fn force_emergency(&mut self, issued_at: DateTime<Utc>) {
        self.cancel_pending();
        info!("Emergency forced");
        self.outcome = Some(PredictionOutcome::new(Prediction::Critical, issued_at));
        self.view = View::Map;
    }

    /// Clear the prediction and return to the form. Field values are kept.
    pub fn back(&mut self) {
        self.cancel_pending();
        self.outcome = None;
        self.view = View::Form;
    }

    /// Invalidate the in-flight ticket, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(ticket) = self.pending.take() {
            debug!("Cancelled pending prediction {:?}", ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field(ReadingField::Rainfall, "120");
        form.set_field(ReadingField::Temperature, "22");
        form.set_field(ReadingField::Humidity, "80");
        form.set_field(ReadingField::RiverDischarge, "50");
        form.set_field(ReadingField::WaterLevel, "3.2");
        form.set_field(ReadingField::Elevation, "15");
        form
    }

    #[test]
    fn new_form_is_empty_and_shows_form() {
        let form = FormState::new();
        assert_eq!(form.view(), View::Form);
        assert!(form.outcome().is_none());
        assert!(!form.can_submit());
        assert_eq!(form.value(ReadingField::Rainfall), "");
    }

    #[test]
    fn set_field_last_write_wins() {
        let mut form = FormState::new();
        form.set_field(ReadingField::Rainfall, "1");
        form.set_field(ReadingField::Rainfall, "2");
        assert_eq!(form.value(ReadingField::Rainfall), "2");
    }

    #[test]
    fn read_only_fields_ignore_input() {
        let mut form = FormState::new();
        form.set_field(ReadingField::Latitude, "51.5");
        assert_eq!(form.value(ReadingField::Latitude), "");
    }

    #[test]
    fn set_location_fills_coordinates() {
        let mut form = filled();
        assert_eq!(form.location(), None);
        form.set_location(LatLng::new(40.7128, -74.006));
        assert_eq!(form.location(), Some(LatLng::new(40.7128, -74.006)));
        assert_eq!(form.value(ReadingField::Latitude), "40.712800");
        assert_eq!(form.value(ReadingField::Longitude), "-74.006000");
        let reading = form.reading().unwrap();
        assert_eq!(reading.location, Some(LatLng::new(40.7128, -74.006)));
    }

    #[test]
    fn submit_requires_every_required_field() {
        let mut form = filled();
        form.set_field(ReadingField::Humidity, "");
        assert!(!form.can_submit());
        assert_eq!(
            form.submit(),
            Err(FormError::MissingField(ReadingField::Humidity))
        );
        assert!(!form.is_pending());
    }

    #[test]
    fn submit_rejects_non_numeric_text() {
        let mut form = filled();
        form.set_field(ReadingField::WaterLevel, "high");
        assert!(matches!(
            form.submit(),
            Err(FormError::InvalidNumber { field: ReadingField::WaterLevel, .. })
        ));
    }

    #[test]
    fn submit_then_resolve_reveals_map() {
        let mut form = filled();
        assert!(form.can_submit());
        let pending = form.submit().unwrap();
        assert_eq!(pending.reading.rainfall, 120.0);
        assert_eq!(pending.reading.water_level, 3.2);
        assert!(form.is_pending());
        assert!(!form.can_submit());
        assert_eq!(form.view(), View::Form);

        let applied = form.resolve(
            pending.ticket,
            PredictionOutcome::new(Prediction::LowRisk, now()),
        );
        assert!(applied);
        assert!(!form.is_pending());
        assert_eq!(form.view(), View::Map);
        assert_eq!(form.outcome().unwrap().message(), "Low risk of flooding");
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(FormError::PredictionPending));
    }

    #[test]
    fn force_emergency_bypasses_delay() {
        let mut form = FormState::new();
        form.force_emergency(now());
        assert_eq!(form.view(), View::Map);
        assert_eq!(form.outcome().unwrap().prediction, Prediction::Critical);
    }

    #[test]
    fn force_emergency_cancels_pending_submit() {
        let mut form = filled();
        let pending = form.submit().unwrap();
        form.force_emergency(now());
        assert!(!form.resolve(
            pending.ticket,
            PredictionOutcome::new(Prediction::LowRisk, now())
        ));
        assert_eq!(form.outcome().unwrap().prediction, Prediction::Critical);
    }

    #[test]
    fn back_clears_prediction_and_keeps_values() {
        let mut form = filled();
        let pending = form.submit().unwrap();
        form.resolve(
            pending.ticket,
            PredictionOutcome::new(Prediction::HighRisk, now()),
        );
        form.back();
        assert_eq!(form.view(), View::Form);
        assert!(form.outcome().is_none());
        assert_eq!(form.value(ReadingField::Rainfall), "120");
        assert!(form.can_submit());
    }

    #[test]
    fn result_after_back_is_ignored() {
        let mut form = filled();
        let pending = form.submit().unwrap();
        form.back();
        let applied = form.resolve(
            pending.ticket,
            PredictionOutcome::new(Prediction::HighRisk, now()),
        );
        assert!(!applied);
        assert_eq!(form.view(), View::Form);
        assert!(form.outcome().is_none());
    }

    #[test]
    fn result_after_cancel_is_ignored() {
        let mut form = filled();
        let pending = form.submit().unwrap();
        form.cancel_pending();
        assert!(!form.resolve(
            pending.ticket,
            PredictionOutcome::new(Prediction::HighRisk, now())
        ));
        assert_eq!(form.view(), View::Form);
    }

    #[test]
    fn only_latest_ticket_resolves() {
        let mut form = filled();
        let first = form.submit().unwrap();
        form.back();
        let second = form.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert!(!form.resolve(
            first.ticket,
            PredictionOutcome::new(Prediction::HighRisk, now())
        ));
        assert!(form.resolve(
            second.ticket,
            PredictionOutcome::new(Prediction::LowRisk, now())
        ));
        assert_eq!(form.outcome().unwrap().prediction, Prediction::LowRisk);
    }
}
