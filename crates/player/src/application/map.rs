//! Map widget controller
//!
//! Renders the markers through a [`MapPort`] and tracks the selected
//! location. Two disclosure mechanisms coexist per marker: the mapping
//! library opens the name popup by itself, while this controller drives the
//! detail panel.

use std::sync::Arc;

use exhibit_domain::{
    Dataset, DomainError, GeoBounds, LocationIndex, MapView, Selection, SelectionChange,
    ViewportSize,
};

use super::{element_ids, ViewportClass};
use crate::config::MapConfig;
use crate::error::ExhibitError;
use crate::ports::outbound::{
    MapError, MapEvent, MapPort, MapViewOptions, MarkerIcon, MarkerOptions, PopupOptions,
    ScrollRequest, TileLayerOptions,
};

/// Contents of the map detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDetail {
    pub name: String,
    pub description: String,
}

/// Keyboard-focusable stand-in for a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerProxy {
    pub index: LocationIndex,
    pub name: String,
    pub active: bool,
}

/// What `render` placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMap {
    pub marker_count: usize,
    /// Bounds the view was fitted to, if any markers were placed
    pub bounds: Option<GeoBounds>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTransition {
    pub change: SelectionChange<LocationIndex>,
    pub scroll: Option<ScrollRequest>,
}

#[derive(Debug, Clone)]
pub struct MapController {
    dataset: Arc<Dataset>,
    config: MapConfig,
    selection: Selection<LocationIndex>,
}

impl MapController {
    pub fn new(dataset: Arc<Dataset>, config: MapConfig) -> Self {
        Self {
            dataset,
            config,
            selection: Selection::none(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Create the view, add tiles, place one marker per location, then fit
    /// the view to the markers.
    pub fn render(&self, port: &dyn MapPort) -> Result<RenderedMap, MapError> {
        port.create_view(&MapViewOptions {
            container_id: self.config.container_id.clone(),
            center: self.config.center,
            zoom: self.config.zoom,
            zoom_control: self.config.zoom_control,
            scroll_wheel_zoom: self.config.scroll_wheel_zoom,
            attribution_control: self.config.attribution_control,
        })?;

        port.add_tile_layer(&TileLayerOptions {
            url_template: self.config.tile_url.clone(),
            attribution: self.config.attribution.clone(),
            max_zoom: self.config.max_zoom,
        })?;

        let icon = MarkerIcon::default();
        for (i, location) in self.dataset.locations.iter().enumerate() {
            port.add_marker(&MarkerOptions {
                index: LocationIndex::new(i),
                position: location.position(),
                icon: icon.clone(),
                popup: PopupOptions::label(location.name.clone()),
            })?;
        }

        let bounds = self.dataset.location_bounds();
        if let Some(bounds) = &bounds {
            port.fit_bounds(bounds, self.config.fit_padding_px)?;
        }

        tracing::info!(
            markers = self.dataset.locations.len(),
            container = %self.config.container_id,
            "map rendered"
        );

        Ok(RenderedMap {
            marker_count: self.dataset.locations.len(),
            bounds,
        })
    }

    /// View the mapping library settles on after fitting, for a map of `size`
    pub fn framed_view(&self, size: ViewportSize) -> Option<MapView> {
        self.dataset
            .location_bounds()
            .map(|bounds| bounds.fit_view(size, self.config.fit_padding_px, self.config.max_zoom))
    }

    pub fn active(&self) -> Option<LocationIndex> {
        self.selection.active()
    }

    pub fn is_panel_visible(&self) -> bool {
        self.selection.is_any_active()
    }

    pub fn detail(&self) -> Option<LocationDetail> {
        let index = self.selection.active()?;
        let location = self.dataset.location(index).ok()?;
        Some(LocationDetail {
            name: location.name.clone(),
            description: location.description.clone(),
        })
    }

    pub fn proxies(&self) -> Vec<MarkerProxy> {
        self.dataset
            .locations
            .iter()
            .enumerate()
            .map(|(i, location)| {
                let index = LocationIndex::new(i);
                MarkerProxy {
                    index,
                    name: location.name.clone(),
                    active: self.selection.is_active(index),
                }
            })
            .collect()
    }

    /// Select a location (marker click or keyboard proxy)
    pub fn select(
        &mut self,
        index: LocationIndex,
        viewport: ViewportClass,
    ) -> Result<MapTransition, DomainError> {
        let location = self.dataset.location(index)?;
        tracing::debug!(index = %index, name = %location.name, "map location selected");

        let change = self.selection.select(index);
        let scroll = viewport
            .is_narrow()
            .then(|| ScrollRequest::nearest(element_ids::MAP_DETAIL));
        Ok(MapTransition { change, scroll })
    }

    /// Hide the detail panel. `None` if it was already hidden.
    pub fn close(&mut self) -> Option<MapTransition> {
        let change = self.selection.clear();
        if change.is_unchanged() {
            return None;
        }
        tracing::debug!("map detail closed");
        Some(MapTransition {
            change,
            scroll: None,
        })
    }

    /// React to an event from the mapping library
    pub fn handle_event(
        &mut self,
        event: &MapEvent,
        viewport: ViewportClass,
    ) -> Result<Option<MapTransition>, ExhibitError> {
        match event {
            MapEvent::MarkerClicked { index } => Ok(Some(self.select(*index, viewport)?)),
            MapEvent::MapClicked => Ok(self.close()),
            MapEvent::Fault { message } => Err(MapError::Driver(message.clone()).into()),
        }
    }

    /// Mirror a transition onto marker highlighting
    pub fn apply_highlight(
        &self,
        port: &dyn MapPort,
        transition: &MapTransition,
    ) -> Result<(), MapError> {
        if let Some(index) = transition.change.deactivated {
            port.set_marker_active(index, false)?;
        }
        if let Some(index) = transition.change.activated {
            port.set_marker_active(index, true)?;
        }
        Ok(())
    }
}
