//! Emergency map view.

use crate::browser;
use crate::components::{ErrorDisplay, FloodAlert, LoadingSpinner, MapLegend};
use crate::js_bridge::{self, GoogleMapsProvider};
use crate::state::AppState;
use dioxus::prelude::*;
use fg_core::config::FloodGuardConfig;
use fg_core::location::{LatLng, EMERGENCY_LOCATIONS};
use fg_map::{MapEvent, MapSession};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// DOM id of the element Google Maps renders into.
pub const MAP_CONTAINER_ID: &str = "floodguard-map";

type SessionSlot = RefCell<Option<MapSession<GoogleMapsProvider>>>;
type SharedSession = Rc<SessionSlot>;

/// Map of nearby emergency facilities with the flood overlay.
///
/// On mount: load the map library, open a `MapSession`, place the markers,
/// then ask for the device position and recenter on it. On unmount the
/// session is disposed, removing every marker and the overlay.
#[component]
pub fn EmergencyMap() -> Element {
    let state = use_context::<AppState>();
    let mut map_ready = use_signal(|| false);
    let mut map_error = use_signal(|| None::<String>);
    let mut user_location = use_signal(|| None::<LatLng>);
    let session: SharedSession = use_hook(|| Rc::new(RefCell::new(None)));

    let mount_session = session.clone();
    use_effect(move || {
        let session = mount_session.clone();
        let config = state.config.peek().clone();
        spawn(async move {
            if let Err(e) = open_session(&session, &config).await {
                log::error!("Emergency map failed to start: {:#}", e);
                map_error.set(Some(e.to_string()));
                return;
            }
            map_ready.set(true);

            // Fall back to the position captured at startup for the form
            let position = browser::current_position()
                .await
                .or_else(|e| state.form.peek().location().ok_or(e));
            let marked = session.borrow_mut().as_mut().and_then(|active| {
                match active.apply_geolocation(position) {
                    Ok(()) => active.user_location(),
                    Err(e) => {
                        log::warn!("Could not mark user location: {}", e);
                        None
                    }
                }
            });
            if marked.is_some() {
                user_location.set(marked);
            }
        });
    });

    use_drop(move || {
        if let Some(mut active) = session.borrow_mut().take() {
            active.dispose();
        }
    });

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100%;",
            div {
                id: MAP_CONTAINER_ID,
                style: "width: 100%; height: 100%;",
            }
            if let Some(message) = map_error() {
                ErrorDisplay { message }
            } else if !map_ready() {
                LoadingSpinner {}
            }
            MapLegend {}
            if user_location().is_some() {
                FloodAlert {}
            }
        }
    }
}

async fn open_session(session: &SharedSession, config: &FloodGuardConfig) -> anyhow::Result<()> {
    js_bridge::load_google_maps(&config.google_maps_api_key).await?;

    let provider = GoogleMapsProvider::new(event_sink(Rc::downgrade(session)));
    let mut opened = MapSession::open(provider, MAP_CONTAINER_ID, config)?;
    opened.place_markers(EMERGENCY_LOCATIONS)?;
    *session.borrow_mut() = Some(opened);
    Ok(())
}

/// Route provider events into the session without keeping it alive.
fn event_sink(session: Weak<SessionSlot>) -> impl Fn(MapEvent) {
    move |event| {
        let Some(session) = session.upgrade() else {
            return;
        };
        let Ok(mut guard) = session.try_borrow_mut() else {
            log::warn!("Map event {:?} arrived during a session update", event);
            return;
        };
        if let Some(active) = guard.as_mut() {
            if let Err(e) = active.handle_event(event) {
                log::warn!("Map event failed: {}", e);
            }
        }
    }
}
