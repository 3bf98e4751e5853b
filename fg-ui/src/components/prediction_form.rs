//! The prediction form view.

use crate::browser;
use crate::components::ReadingInput;
use crate::state::AppState;
use chrono::Utc;
use dioxus::core::Task;
use dioxus::prelude::*;
use fg_core::prediction::{PredictionOutcome, RiskPredictor, SimulatedPredictor};
use fg_core::reading::ReadingField;
use std::cell::Cell;
use std::rc::Rc;

/// Reading inputs, the submit button and the "Force Emergency" shortcut.
///
/// Submit stays disabled until every required field holds a number and no
/// prediction is in flight.
///
/// Submitting schedules the simulated prediction as a task owned by this
/// component. The task is cancelled when the component unmounts, and its
/// result is applied only if its ticket is still current.
#[component]
pub fn PredictionForm() -> Element {
    let mut state = use_context::<AppState>();
    let pending = state.form.read().is_pending();
    let ready = state.form.read().can_submit();
    let task_slot: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));

    let drop_slot = task_slot.clone();
    use_drop(move || {
        if let Some(task) = drop_slot.take() {
            task.cancel();
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let request = match state.form.write().submit() {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Prediction not started: {}", e);
                return;
            }
        };
        let settings = state.config.peek().prediction.clone();
        let mut form = state.form;
        let task = spawn(async move {
            browser::sleep(settings.delay_ms).await;
            let prediction = SimulatedPredictor::new(
                rand::thread_rng(),
                settings.high_risk_probability,
            )
            .predict(&request.reading);
            form.write().resolve(
                request.ticket,
                PredictionOutcome::new(prediction, Utc::now()),
            );
        });
        if let Some(previous) = task_slot.replace(Some(task)) {
            previous.cancel();
        }
    };

    let on_emergency = move |_: MouseEvent| {
        state.form.write().force_emergency(Utc::now());
    };

    rsx! {
        div {
            style: "max-width: 672px; margin: 0 auto; background: rgba(255,255,255,0.9); border-radius: 12px; box-shadow: 0 10px 25px rgba(0,0,0,0.15); padding: 24px;",
            form {
                onsubmit: on_submit,
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; margin-bottom: 24px;",
                    for field in ReadingField::ALL {
                        ReadingInput { key: "{field}", field }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: !ready,
                    style: "width: 100%; background: #2563eb; color: white; padding: 12px; border: none; border-radius: 8px; font-weight: 600; cursor: pointer;",
                    if pending { "Predicting..." } else { "Predict" }
                }
                button {
                    r#type: "button",
                    style: "width: 100%; margin-top: 12px; background: #dc2626; color: white; padding: 12px; border: none; border-radius: 8px; font-weight: 600; cursor: pointer;",
                    onclick: on_emergency,
                    "Force Emergency"
                }
            }
        }
    }
}
