use std::{fmt, str::FromStr};

use thiserror::Error;

/// Geographical latitude in degrees.
///
/// Finite and within [-90, 90] unless constructed as the (invalid)
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const DEG_MIN: f64 = -90.0;
    pub const DEG_MAX: f64 = 90.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        if res.is_valid() {
            Some(res)
        } else {
            None
        }
    }
}

impl Default for LatCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
///
/// Finite and within [-180, 180] unless constructed as the (invalid)
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const DEG_MIN: f64 = -180.0;
    pub const DEG_MAX: f64 = 180.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        if res.is_valid() {
            Some(res)
        } else {
            None
        }
    }
}

impl Default for LngCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Debug, Error)]
pub enum CoordParseError {
    #[error("invalid latitude: {0}")]
    Lat(String),
    #[error("invalid longitude: {0}")]
    Lng(String),
    #[error("malformed coordinates: {0}")]
    Malformed(String),
}

/// A geographical location on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_str: &str, lng_str: &str) -> Result<Self, CoordParseError> {
        let lat_deg: f64 = lat_str
            .trim()
            .parse()
            .map_err(|_| CoordParseError::Lat(lat_str.into()))?;
        let lng_deg: f64 = lng_str
            .trim()
            .parse()
            .map_err(|_| CoordParseError::Lng(lng_str.into()))?;
        let lat = LatCoord::try_from_deg(lat_deg).ok_or_else(|| CoordParseError::Lat(lat_str.into()))?;
        let lng = LngCoord::try_from_deg(lng_deg).ok_or_else(|| CoordParseError::Lng(lng_str.into()))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat_str), Some(lng_str), None) => Self::parse_lat_lng_deg(lat_str, lng_str),
            _ => Err(CoordParseError::Malformed(s.into())),
        }
    }
}

/// The rectangular geographic area currently visible on the map.
///
/// Closed bounds: points on the edges are contained. A bounding box whose
/// south-west longitude exceeds its north-east longitude spans the
/// antimeridian.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn is_empty(&self) -> bool {
        debug_assert!(self.sw.is_valid());
        debug_assert!(self.ne.is_valid());
        self.sw.lat() >= self.ne.lat() || self.sw.lng() == self.ne.lng()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // spans the antimeridian
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

impl FromStr for MapBbox {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (Some(sw_lat), Some(sw_lng), Some(ne_lat), Some(ne_lng), None) => {
                let sw = MapPoint::parse_lat_lng_deg(sw_lat, sw_lng)?;
                let ne = MapPoint::parse_lat_lng_deg(ne_lat, ne_lng)?;
                Ok(MapBbox::new(sw, ne))
            }
            _ => Err(CoordParseError::Malformed(s.into())),
        }
    }
}
