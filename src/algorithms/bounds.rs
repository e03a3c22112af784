//! Latitude/longitude bounding boxes for fitting a map view

use crate::core::GeoPoint;

/// Axis-aligned box in degrees; does not wrap the antimeridian
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self { south_west, north_east }
    }

    /// Smallest box holding every point, `None` for an empty set
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let bounds = rest.iter().fold(Self::new(*first, *first), |mut acc, p| {
            acc.south_west.latitude = acc.south_west.latitude.min(p.latitude);
            acc.south_west.longitude = acc.south_west.longitude.min(p.longitude);
            acc.north_east.latitude = acc.north_east.latitude.max(p.latitude);
            acc.north_east.longitude = acc.north_east.longitude.max(p.longitude);
            acc
        });

        Some(bounds)
    }

    /// Grow each side by `ratio` times the span on that axis
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_pad = self.lat_span() * ratio;
        let lon_pad = self.lon_span() * ratio;

        Self::new(
            GeoPoint::new(self.south_west.latitude - lat_pad, self.south_west.longitude - lon_pad),
            GeoPoint::new(self.north_east.latitude + lat_pad, self.north_east.longitude + lon_pad),
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.north_east.latitude - self.south_west.latitude
    }

    pub fn lon_span(&self) -> f64 {
        self.north_east.longitude - self.south_west.longitude
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }

    /// Finite corners in the right order
    pub fn is_valid(&self) -> bool {
        let corners = [
            self.south_west.latitude,
            self.south_west.longitude,
            self.north_east.latitude,
            self.north_east.longitude,
        ];

        corners.iter().all(|c| c.is_finite())
            && self.south_west.latitude <= self.north_east.latitude
            && self.south_west.longitude <= self.north_east.longitude
    }
}
