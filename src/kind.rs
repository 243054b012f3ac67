// Copyright 2018 The GeoRust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The seven GeoJSON geometry types
///
/// [GeoJSON Format Specification § 1.4](https://tools.ietf.org/html/rfc7946#section-1.4)
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub enum Kind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl Kind {
    /// All kinds, in bucket order.
    pub const ALL: [Kind; 7] = [
        Kind::Point,
        Kind::MultiPoint,
        Kind::LineString,
        Kind::MultiLineString,
        Kind::Polygon,
        Kind::MultiPolygon,
        Kind::GeometryCollection,
    ];

    /// The exact `type` string used by GeoJSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Point => "Point",
            Kind::MultiPoint => "MultiPoint",
            Kind::LineString => "LineString",
            Kind::MultiLineString => "MultiLineString",
            Kind::Polygon => "Polygon",
            Kind::MultiPolygon => "MultiPolygon",
            Kind::GeometryCollection => "GeometryCollection",
        }
    }

    /// Nesting depth of the `coordinates` member; `None` for GeometryCollection.
    pub fn rank(self) -> Option<usize> {
        match self {
            Kind::Point => Some(1),
            Kind::MultiPoint | Kind::LineString => Some(2),
            Kind::MultiLineString | Kind::Polygon => Some(3),
            Kind::MultiPolygon => Some(4),
            Kind::GeometryCollection => None,
        }
    }

    pub(crate) fn from_tag(s: &str) -> Option<Self> {
        match s {
            "Point" => Some(Kind::Point),
            "MultiPoint" => Some(Kind::MultiPoint),
            "LineString" => Some(Kind::LineString),
            "MultiLineString" => Some(Kind::MultiLineString),
            "Polygon" => Some(Kind::Polygon),
            "MultiPolygon" => Some(Kind::MultiPolygon),
            "GeometryCollection" => Some(Kind::GeometryCollection),
            _ => None,
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_tag(s).ok_or_else(|| Error::UnrecognizedGeometryType {
            path: Vec::new(),
            found: s.to_owned(),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
