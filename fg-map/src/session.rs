//! The emergency map's owned resources.
//!
//! A `MapSession` is acquired when the map view mounts and disposed when it
//! unmounts. It owns the map, the facility markers, the user marker, the
//! open info window and the flood overlay, so teardown is one call and
//! nothing outlives the view.
//!
//! Phases: `Ready` (map exists) → `MarkersPlaced` → `Disposed`.

use crate::error::{MapError, Result};
use crate::provider::{
    GeolocationError, GroundOverlaySpec, MapEvent, MapOptions, MapProvider, MarkerIcon, MarkerKey,
    MarkerSpec,
};
use fg_core::config::FloodGuardConfig;
use fg_core::info_window::info_window_html;
use fg_core::location::{EmergencyLocation, LatLng};
use fg_core::style::{style_for, UserMarkerStyle};
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    MarkersPlaced,
    Disposed,
}

struct PlacedMarker<H> {
    key: MarkerKey,
    handle: H,
    content: String,
}

pub struct MapSession<P: MapProvider> {
    provider: P,
    map: Option<P::Handle>,
    markers: Vec<PlacedMarker<P::Handle>>,
    user_marker: Option<P::Handle>,
    active_info: Option<(MarkerKey, P::Handle)>,
    overlay: Option<P::Handle>,
    overlay_spec: GroundOverlaySpec,
    user_style: UserMarkerStyle,
    user_location: Option<LatLng>,
    phase: SessionPhase,
}

impl<P: MapProvider> MapSession<P> {
    /// Create the map in `container_id`, centered on the configured default.
    pub fn open(mut provider: P, container_id: &str, config: &FloodGuardConfig) -> Result<Self> {
        let options = MapOptions::from(&config.map);
        let map = provider.create_map(container_id, &options)?;
        info!(
            "Map ready in #{} at ({}, {})",
            container_id, options.center.lat, options.center.lng
        );
        Ok(Self {
            provider,
            map: Some(map),
            markers: Vec::new(),
            user_marker: None,
            active_info: None,
            overlay: None,
            overlay_spec: GroundOverlaySpec::from(&config.overlay),
            user_style: config.user_marker.clone(),
            user_location: None,
            phase: SessionPhase::Ready,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Facility markers currently on the map (the user marker excluded).
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_user_marker(&self) -> bool {
        self.user_marker.is_some()
    }

    pub fn user_location(&self) -> Option<LatLng> {
        self.user_location
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Key of the marker whose info window is open.
    pub fn active_info_window(&self) -> Option<&MarkerKey> {
        self.active_info.as_ref().map(|(key, _)| key)
    }

    /// Add one styled marker per facility, then the flood overlay.
    ///
    /// Only the first call places anything.
    pub fn place_markers(&mut self, locations: &[EmergencyLocation]) -> Result<()> {
        match self.phase {
            SessionPhase::Ready => {}
            SessionPhase::MarkersPlaced => {
                debug!("Markers already placed");
                return Ok(());
            }
            SessionPhase::Disposed => return Err(MapError::Disposed),
        }
        let map = self.map.clone().ok_or(MapError::Disposed)?;

        if let Err(e) = self.add_facilities(&map, locations) {
            for marker in self.markers.drain(..) {
                self.provider.remove_marker(marker.handle);
            }
            warn!("Marker placement failed, rolled back: {}", e);
            return Err(e);
        }
        self.phase = SessionPhase::MarkersPlaced;
        info!("Placed {} emergency markers", self.markers.len());
        Ok(())
    }

    fn add_facilities(&mut self, map: &P::Handle, locations: &[EmergencyLocation]) -> Result<()> {
        for location in locations {
            let spec = MarkerSpec {
                key: MarkerKey::Location(location.id.to_string()),
                title: location.name.to_string(),
                position: location.position,
                icon: MarkerIcon::Facility(style_for(location.category)),
            };
            let handle = self.provider.add_marker(map, &spec)?;
            self.markers.push(PlacedMarker {
                key: spec.key,
                handle,
                content: info_window_html(location),
            });
        }
        self.overlay = Some(self.provider.add_ground_overlay(map, &self.overlay_spec)?);
        Ok(())
    }

    /// Recenter on the device position and mark it, or log why there is
    /// none. Results arriving after `dispose` are dropped.
    pub fn apply_geolocation(
        &mut self,
        position: std::result::Result<LatLng, GeolocationError>,
    ) -> Result<()> {
        let Some(map) = self.map.clone() else {
            debug!("Ignoring geolocation result for a disposed map");
            return Ok(());
        };
        let position = match position {
            Ok(position) => position,
            Err(e) => {
                warn!("Error: The Geolocation service failed: {}", e);
                return Ok(());
            }
        };

        self.provider.set_center(&map, position);
        if let Some(old) = self.user_marker.take() {
            self.provider.remove_marker(old);
        }
        let spec = MarkerSpec {
            key: MarkerKey::User,
            title: self.user_style.title.clone(),
            position,
            icon: MarkerIcon::Circle(self.user_style.clone()),
        };
        self.user_marker = Some(self.provider.add_marker(&map, &spec)?);
        self.user_location = Some(position);
        if self.overlay_spec.bounds.contains(position) {
            info!("User location is inside the flood overlay");
        }
        Ok(())
    }

    /// React to a click or a dismissed info window. At most one info window
    /// is open; the most recent click wins.
    pub fn handle_event(&mut self, event: MapEvent) -> Result<()> {
        let Some(map) = self.map.clone() else {
            debug!("Ignoring {:?} for a disposed map", event);
            return Ok(());
        };
        match event {
            MapEvent::InfoWindowClosed => {
                if let Some((_, window)) = self.active_info.take() {
                    self.provider.close_info_window(window);
                }
                Ok(())
            }
            MapEvent::MarkerClicked(MarkerKey::User) => Ok(()),
            MapEvent::MarkerClicked(key) => {
                let Some(marker) = self.markers.iter().find(|m| m.key == key) else {
                    warn!("Click on unknown marker {:?}", key);
                    return Ok(());
                };
                if let Some((_, window)) = self.active_info.take() {
                    self.provider.close_info_window(window);
                }
                let window =
                    self.provider
                        .open_info_window(&map, &marker.handle, &marker.content)?;
                self.active_info = Some((key, window));
                Ok(())
            }
        }
    }

    /// Remove everything this session put on the map. Safe to call twice.
    pub fn dispose(&mut self) {
        if self.phase == SessionPhase::Disposed {
            return;
        }
        if let Some((_, window)) = self.active_info.take() {
            self.provider.close_info_window(window);
        }
        for marker in self.markers.drain(..) {
            self.provider.remove_marker(marker.handle);
        }
        if let Some(marker) = self.user_marker.take() {
            self.provider.remove_marker(marker);
        }
        if let Some(overlay) = self.overlay.take() {
            self.provider.remove_ground_overlay(overlay);
        }
        if let Some(map) = self.map.take() {
            self.provider.release_map(map);
        }
        self.phase = SessionPhase::Disposed;
        info!("Map session disposed");
    }
}

impl<P: MapProvider> Drop for MapSession<P> {
    fn drop(&mut self) {
        self.dispose();
    }
}
