//! The boundary to an interactive-map service.
//!
//! Nothing here draws a map. `MapProvider` lists the calls the emergency
//! map makes into a third-party library; the browser build implements it on
//! top of Google Maps, tests implement it with an in-memory recorder.

use crate::error::Result;
use fg_core::config::{MapConfig, MapStyleRule, OverlayConfig};
use fg_core::location::{Bounds, LatLng};
use fg_core::style::{MarkerStyle, UserMarkerStyle};
use serde::Serialize;
use thiserror::Error;

/// Options for a new map instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub styles: Vec<MapStyleRule>,
    pub map_type_control: bool,
    pub fullscreen_control: bool,
    pub street_view_control: bool,
}

impl From<&MapConfig> for MapOptions {
    fn from(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            styles: config.styles.clone(),
            map_type_control: config.map_type_control,
            fullscreen_control: config.fullscreen_control,
            street_view_control: config.street_view_control,
        }
    }
}

/// Which marker an event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKey {
    Location(String),
    User,
}

impl MarkerKey {
    /// Stable string form, used as the marker id across the JS boundary.
    pub fn as_id(&self) -> String {
        match self {
            MarkerKey::Location(id) => format!("location:{}", id),
            MarkerKey::User => "user".to_string(),
        }
    }

    pub fn from_id(id: &str) -> Option<MarkerKey> {
        if id == "user" {
            Some(MarkerKey::User)
        } else {
            id.strip_prefix("location:")
                .map(|rest| MarkerKey::Location(rest.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerIcon {
    Facility(&'static MarkerStyle),
    Circle(UserMarkerStyle),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub key: MarkerKey,
    pub title: String,
    pub position: LatLng,
    pub icon: MarkerIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundOverlaySpec {
    pub url: String,
    pub bounds: Bounds,
    pub opacity: f64,
}

impl From<&OverlayConfig> for GroundOverlaySpec {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            url: config.image_url.clone(),
            bounds: config.bounds,
            opacity: config.opacity,
        }
    }
}

/// User interaction reported back by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    MarkerClicked(MarkerKey),
    /// The user dismissed the open info window.
    InfoWindowClosed,
}

/// Why a device position could not be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Geolocation permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    PositionUnavailable,
    #[error("Geolocation timed out")]
    Timeout,
    #[error("Geolocation is not supported by this browser")]
    Unsupported,
}

impl GeolocationError {
    /// Map a W3C `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

/// Calls the emergency map makes into a mapping library.
///
/// Handles are opaque to the session; the provider decides what they are.
pub trait MapProvider {
    type Handle: Clone + std::fmt::Debug;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<Self::Handle>;
    fn set_center(&mut self, map: &Self::Handle, center: LatLng);
    fn release_map(&mut self, map: Self::Handle);

    fn add_marker(&mut self, map: &Self::Handle, marker: &MarkerSpec) -> Result<Self::Handle>;
    fn remove_marker(&mut self, marker: Self::Handle);

    fn open_info_window(
        &mut self,
        map: &Self::Handle,
        anchor: &Self::Handle,
        content: &str,
    ) -> Result<Self::Handle>;
    fn close_info_window(&mut self, window: Self::Handle);

    fn add_ground_overlay(
        &mut self,
        map: &Self::Handle,
        overlay: &GroundOverlaySpec,
    ) -> Result<Self::Handle>;
    fn remove_ground_overlay(&mut self, overlay: Self::Handle);
}
