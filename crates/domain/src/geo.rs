//! Geographic coordinates and map framing.
//!
//! The mapping library owns projection and tiles at runtime. The framing
//! computation is mirrored here (spherical Web Mercator, 256 px tiles) so the
//! "every marker is visible after fitting" property can be checked without a
//! browser.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const TILE_SIZE: f64 = 256.0;
/// Latitude limit of the Web Mercator projection
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate, rejecting values outside [-90, 90] / [-180, 180]
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let point = Self { lat, lng };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(DomainError::InvalidCoordinate { lat, lng })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Pixel position at `zoom` in the global Web Mercator plane
    fn project(&self, zoom: f64) -> (f64, f64) {
        let scale = TILE_SIZE * zoom.exp2();
        let lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let sin = lat.to_radians().sin();
        let x = scale * (self.lng + 180.0) / 360.0;
        let y = scale * (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI));
        (x, y)
    }

    fn unproject(x: f64, y: f64, zoom: f64) -> Self {
        let scale = TILE_SIZE * zoom.exp2();
        let lng = x / scale * 360.0 - 180.0;
        let n = PI - 2.0 * PI * y / scale;
        let lat = n.sinh().atan().to_degrees();
        Self { lat, lng }
    }
}

/// Axis-aligned geographic box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

/// Size of the map viewport in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport left after removing `padding` (x, y) on every side
    pub fn shrink(&self, padding: [u32; 2]) -> Self {
        Self {
            width: (self.width - 2.0 * f64::from(padding[0])).max(0.0),
            height: (self.height - 2.0 * f64::from(padding[1])).max(0.0),
        }
    }
}

/// Center and zoom level of a map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl GeoBounds {
    /// Smallest box containing every point, or `None` for an empty set
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let init = Self {
            south_west: first,
            north_east: first,
        };
        Some(points.fold(init, |bounds, p| bounds.extend(p)))
    }

    pub fn extend(self, point: LatLng) -> Self {
        Self {
            south_west: LatLng {
                lat: self.south_west.lat.min(point.lat),
                lng: self.south_west.lng.min(point.lng),
            },
            north_east: LatLng {
                lat: self.north_east.lat.max(point.lat),
                lng: self.north_east.lng.max(point.lng),
            },
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    pub fn contains_bounds(&self, other: &GeoBounds) -> bool {
        self.contains(other.south_west) && self.contains(other.north_east)
    }

    /// Midpoint in projected space, which is what a fitted view centers on
    pub fn center(&self) -> LatLng {
        let (x0, y0) = self.south_west.project(0.0);
        let (x1, y1) = self.north_east.project(0.0);
        LatLng::unproject((x0 + x1) / 2.0, (y0 + y1) / 2.0, 0.0)
    }

    /// Largest whole zoom (capped at `max_zoom`) at which these bounds fit
    /// inside `viewport` minus `padding` on every side, centered on the
    /// bounds.
    pub fn fit_view(&self, viewport: ViewportSize, padding: [u32; 2], max_zoom: u8) -> MapView {
        let available = viewport.shrink(padding);
        let (x0, y0) = self.south_west.project(0.0);
        let (x1, y1) = self.north_east.project(0.0);
        let width = (x1 - x0).abs();
        let height = (y0 - y1).abs();

        let zoom = if width == 0.0 && height == 0.0 {
            f64::from(max_zoom)
        } else {
            let scale_x = if width > 0.0 {
                available.width / width
            } else {
                f64::INFINITY
            };
            let scale_y = if height > 0.0 {
                available.height / height
            } else {
                f64::INFINITY
            };
            scale_x.min(scale_y).log2().floor()
        };

        MapView {
            center: self.center(),
            zoom: zoom.clamp(0.0, f64::from(max_zoom)) as u8,
        }
    }
}

impl MapView {
    /// Geographic area shown by a viewport of `size` at this view
    pub fn visible_bounds(&self, size: ViewportSize) -> GeoBounds {
        let zoom = f64::from(self.zoom);
        let (cx, cy) = self.center.project(zoom);
        let half_w = size.width / 2.0;
        let half_h = size.height / 2.0;
        GeoBounds {
            south_west: LatLng::unproject(cx - half_w, cy + half_h, zoom),
            north_east: LatLng::unproject(cx + half_w, cy - half_h, zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_latlng_validation() {
        assert!(LatLng::new(21.0285, 105.8542).is_ok());
        assert!(LatLng::new(-90.0, 180.0).is_ok());
        assert_eq!(
            LatLng::new(91.0, 0.0),
            Err(DomainError::InvalidCoordinate { lat: 91.0, lng: 0.0 })
        );
        assert!(LatLng::new(0.0, -180.5).is_err());
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_projection_round_trip_is_stable() {
        let hue = LatLng { lat: 16.4637, lng: 107.5908 };
        let (x, y) = hue.project(6.0);
        let back = LatLng::unproject(x, y, 6.0);
        assert!(approx(back.lat, hue.lat));
        assert!(approx(back.lng, hue.lng));
    }

    #[test]
    fn test_bounds_from_points() {
        assert!(GeoBounds::from_points(Vec::new()).is_none());

        let bounds = GeoBounds::from_points(vec![
            LatLng { lat: 10.0, lng: 108.0 },
            LatLng { lat: 21.0, lng: 105.0 },
            LatLng { lat: 16.0, lng: 107.0 },
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng { lat: 10.0, lng: 105.0 });
        assert_eq!(bounds.north_east, LatLng { lat: 21.0, lng: 108.0 });
        assert!(bounds.contains(LatLng { lat: 16.0, lng: 107.0 }));
        assert!(!bounds.contains(LatLng { lat: 22.0, lng: 107.0 }));
    }

    #[test]
    fn test_fit_view_frames_points_with_padding() {
        let bounds = GeoBounds::from_points(vec![
            LatLng { lat: 10.8231, lng: 106.6297 },
            LatLng { lat: 21.0285, lng: 105.8542 },
            LatLng { lat: 16.0544, lng: 108.2022 },
        ])
        .unwrap();
        let viewport = ViewportSize::new(800.0, 500.0);
        let padding = [50, 50];

        let view = bounds.fit_view(viewport, padding, 19);
        assert_eq!(view.zoom, 5);

        // Everything fits inside the padded area...
        let padded = view.visible_bounds(viewport.shrink(padding));
        assert!(padded.contains_bounds(&bounds));

        // ...and one more zoom level would not.
        let tighter = MapView {
            zoom: view.zoom + 1,
            ..view
        };
        assert!(!tighter
            .visible_bounds(viewport.shrink(padding))
            .contains_bounds(&bounds));
    }

    #[test]
    fn test_fit_view_single_point_uses_max_zoom() {
        let point = LatLng { lat: 16.0544, lng: 108.2022 };
        let bounds = GeoBounds::from_points(vec![point]).unwrap();
        let view = bounds.fit_view(ViewportSize::new(800.0, 500.0), [50, 50], 19);

        assert_eq!(view.zoom, 19);
        assert!(approx(view.center.lat, point.lat));
        assert!(approx(view.center.lng, point.lng));
    }

    #[test]
    fn test_fit_view_respects_max_zoom() {
        let bounds = GeoBounds::from_points(vec![
            LatLng { lat: 16.0544, lng: 108.2022 },
            LatLng { lat: 16.0545, lng: 108.2023 },
        ])
        .unwrap();
        let view = bounds.fit_view(ViewportSize::new(800.0, 500.0), [50, 50], 12);
        assert_eq!(view.zoom, 12);
    }
}
