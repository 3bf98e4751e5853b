//! In-memory `MapProvider` that records every call.

use crate::error::{MapError, Result};
use crate::provider::{GroundOverlaySpec, MapOptions, MapProvider, MarkerKey, MarkerSpec};
use fg_core::location::LatLng;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateMap(usize),
    SetCenter(LatLng),
    ReleaseMap(usize),
    AddMarker(usize),
    RemoveMarker(usize),
    OpenInfoWindow(usize),
    CloseInfoWindow(usize),
    AddOverlay(usize),
    RemoveOverlay(usize),
}

#[derive(Default)]
struct Log {
    next: usize,
    calls: Vec<Call>,
    options: Option<MapOptions>,
    maps: BTreeSet<usize>,
    markers: HashMap<usize, MarkerSpec>,
    windows: BTreeSet<usize>,
    overlays: HashMap<usize, GroundOverlaySpec>,
    last_info: Option<String>,
    fail_map: bool,
    marker_budget: Option<usize>,
}

impl Log {
    fn id(&mut self) -> usize {
        self.next += 1;
        self.next
    }
}

/// Clones share one log, so a test can keep a clone while the session owns
/// the other.
#[derive(Clone, Default)]
pub struct RecordingProvider(Rc<RefCell<Log>>);

impl RecordingProvider {
    pub fn failing_map() -> Self {
        let provider = Self::default();
        provider.0.borrow_mut().fail_map = true;
        provider
    }

    /// Accept `count` markers, then fail every further `add_marker`.
    pub fn failing_marker_after(count: usize) -> Self {
        let provider = Self::default();
        provider.0.borrow_mut().marker_budget = Some(count);
        provider
    }

    pub fn allow_markers(&self) {
        self.0.borrow_mut().marker_budget = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    pub fn created_options(&self) -> Option<MapOptions> {
        self.0.borrow().options.clone()
    }

    pub fn last_center(&self) -> Option<LatLng> {
        self.0.borrow().calls.iter().rev().find_map(|c| match c {
            Call::SetCenter(center) => Some(*center),
            _ => None,
        })
    }

    pub fn live_maps(&self) -> usize {
        self.0.borrow().maps.len()
    }

    pub fn live_markers(&self) -> usize {
        self.0.borrow().markers.len()
    }

    pub fn marker_spec(&self, key: &MarkerKey) -> Option<MarkerSpec> {
        self.0
            .borrow()
            .markers
            .values()
            .find(|spec| &spec.key == key)
            .cloned()
    }

    pub fn open_windows(&self) -> usize {
        self.0.borrow().windows.len()
    }

    pub fn last_info_content(&self) -> Option<String> {
        self.0.borrow().last_info.clone()
    }

    pub fn live_overlays(&self) -> usize {
        self.0.borrow().overlays.len()
    }

    pub fn overlay_spec(&self) -> Option<GroundOverlaySpec> {
        self.0.borrow().overlays.values().next().cloned()
    }
}

impl MapProvider for RecordingProvider {
    type Handle = usize;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<usize> {
        let mut log = self.0.borrow_mut();
        if log.fail_map {
            return Err(MapError::ContainerNotFound(container_id.to_string()));
        }
        let id = log.id();
        log.options = Some(options.clone());
        log.maps.insert(id);
        log.calls.push(Call::CreateMap(id));
        Ok(id)
    }

    fn set_center(&mut self, _map: &usize, center: LatLng) {
        self.0.borrow_mut().calls.push(Call::SetCenter(center));
    }

    fn release_map(&mut self, map: usize) {
        let mut log = self.0.borrow_mut();
        log.maps.remove(&map);
        log.calls.push(Call::ReleaseMap(map));
    }

    fn add_marker(&mut self, _map: &usize, marker: &MarkerSpec) -> Result<usize> {
        let mut log = self.0.borrow_mut();
        if let Some(budget) = log.marker_budget.as_mut() {
            if *budget == 0 {
                return Err(MapError::Provider("marker rejected".to_string()));
            }
            *budget -= 1;
        }
        let id = log.id();
        log.markers.insert(id, marker.clone());
        log.calls.push(Call::AddMarker(id));
        Ok(id)
    }

    fn remove_marker(&mut self, marker: usize) {
        let mut log = self.0.borrow_mut();
        log.markers.remove(&marker);
        log.calls.push(Call::RemoveMarker(marker));
    }

    fn open_info_window(&mut self, _map: &usize, _anchor: &usize, content: &str) -> Result<usize> {
        let mut log = self.0.borrow_mut();
        let id = log.id();
        log.windows.insert(id);
        log.last_info = Some(content.to_string());
        log.calls.push(Call::OpenInfoWindow(id));
        Ok(id)
    }

    fn close_info_window(&mut self, window: usize) {
        let mut log = self.0.borrow_mut();
        log.windows.remove(&window);
        log.calls.push(Call::CloseInfoWindow(window));
    }

    fn add_ground_overlay(&mut self, _map: &usize, overlay: &GroundOverlaySpec) -> Result<usize> {
        let mut log = self.0.borrow_mut();
        let id = log.id();
        log.overlays.insert(id, overlay.clone());
        log.calls.push(Call::AddOverlay(id));
        Ok(id)
    }

    fn remove_ground_overlay(&mut self, overlay: usize) {
        let mut log = self.0.borrow_mut();
        log.overlays.remove(&overlay);
        log.calls.push(Call::RemoveOverlay(overlay));
    }
}
