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

use crate::coordinates;
use crate::json::{JsonObject, JsonValue};
use crate::{util, Error, GeometryCollection, Kind, LineStringType, PolygonType, Position, Result};

/// One entry of the 'properties' member of a Feature
///
/// Values are always text, see [`crate`] documentation for how non-string values are rendered.
///
/// A key repeated within one 'properties' object appears once: the JSON parser keeps the last
/// value, at the position where the key first appeared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// The decoded payload of a Geometry
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Point
    ///
    /// [GeoJSON Format Specification § 3.1.2](https://tools.ietf.org/html/rfc7946#section-3.1.2)
    Point(Position),

    /// MultiPoint
    ///
    /// [GeoJSON Format Specification § 3.1.3](https://tools.ietf.org/html/rfc7946#section-3.1.3)
    MultiPoint(Vec<Position>),

    /// LineString, always at least two positions
    ///
    /// [GeoJSON Format Specification § 3.1.4](https://tools.ietf.org/html/rfc7946#section-3.1.4)
    LineString(LineStringType),

    /// MultiLineString, every line has at least two positions
    ///
    /// [GeoJSON Format Specification § 3.1.5](https://tools.ietf.org/html/rfc7946#section-3.1.5)
    MultiLineString(Vec<LineStringType>),

    /// Polygon. Rings are neither checked for closure nor for their number of positions.
    ///
    /// [GeoJSON Format Specification § 3.1.6](https://tools.ietf.org/html/rfc7946#section-3.1.6)
    Polygon(PolygonType),

    /// MultiPolygon
    ///
    /// [GeoJSON Format Specification § 3.1.7](https://tools.ietf.org/html/rfc7946#section-3.1.7)
    MultiPolygon(Vec<PolygonType>),

    /// GeometryCollection
    ///
    /// [GeoJSON Format Specification § 3.1.8](https://tools.ietf.org/html/rfc7946#section-3.1.8)
    GeometryCollection(GeometryCollection),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match *self {
            Value::Point(..) => Kind::Point,
            Value::MultiPoint(..) => Kind::MultiPoint,
            Value::LineString(..) => Kind::LineString,
            Value::MultiLineString(..) => Kind::MultiLineString,
            Value::Polygon(..) => Kind::Polygon,
            Value::MultiPolygon(..) => Kind::MultiPolygon,
            Value::GeometryCollection(..) => Kind::GeometryCollection,
        }
    }
}

/// Where the members of a decoded node live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Layout {
    /// A Feature: 'type' and 'coordinates' (or 'geometries') are read from its 'geometry'
    /// member, 'properties' from the Feature itself.
    Feature,
    /// A bare Geometry object, as found in the 'geometries' of a GeometryCollection.
    Geometry,
}

impl Layout {
    /// Name given to the nodes of this layout in error messages.
    pub(crate) fn node_name(self) -> &'static str {
        match self {
            Layout::Feature => "features",
            Layout::Geometry => "geometries",
        }
    }

    fn geometry_object(self, node: &JsonObject) -> Result<&JsonObject> {
        match self {
            Layout::Feature => {
                let geometry = util::expect_member(node, "geometry")?;
                util::expect_object(geometry, "geometry")
            }
            Layout::Geometry => Ok(node),
        }
    }
}

/// A decoded Geometry, along with the properties of its Feature and its position in the
/// enclosing array.
///
/// [GeoJSON Format Specification § 3.1](https://tools.ietf.org/html/rfc7946#section-3.1)
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    index: usize,
    properties: Vec<Property>,
    value: Value,
}

impl Geometry {
    /// Decode a single Feature, or a bare Geometry object.
    ///
    /// `index` is recorded as the position of the node in its enclosing array, and starts the
    /// path of any error.
    pub fn from_json_value(value: &JsonValue, index: usize) -> Result<Self> {
        let object = util::expect_object(value, "geometry").map_err(|e| e.at(index))?;
        let is_feature = object.contains_key("geometry")
            || matches!(object.get("type"), Some(JsonValue::String(t)) if t == "Feature");
        let layout = if is_feature {
            Layout::Feature
        } else {
            Layout::Geometry
        };
        Geometry::decode(object, layout, index).map_err(|e| e.at(index))
    }

    /// Errors are returned with a path relative to `node`; the caller adds `index`.
    pub(crate) fn decode(node: &JsonObject, layout: Layout, index: usize) -> Result<Self> {
        let object = layout.geometry_object(node)?;
        let tag = util::expect_type(object)?;
        let kind = Kind::from_tag(tag).ok_or_else(|| Error::UnrecognizedGeometryType {
            path: Vec::new(),
            found: tag.to_owned(),
        })?;
        let value = decode_value(object, kind)?;
        Ok(Geometry {
            index,
            properties: util::get_properties(node)?,
            value,
        })
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Position of this geometry in the enclosing 'features' or 'geometries' array.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Value of the first property named `key`.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn as_point(&self) -> Option<&Position> {
        match self.value {
            Value::Point(ref p) => Some(p),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&[Position]> {
        match self.value {
            Value::MultiPoint(ref p) => Some(p.as_slice()),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineStringType> {
        match self.value {
            Value::LineString(ref l) => Some(l),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&[LineStringType]> {
        match self.value {
            Value::MultiLineString(ref l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonType> {
        match self.value {
            Value::Polygon(ref p) => Some(p),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&[PolygonType]> {
        match self.value {
            Value::MultiPolygon(ref p) => Some(p.as_slice()),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
        match self.value {
            Value::GeometryCollection(ref c) => Some(c),
            _ => None,
        }
    }
}

fn get_coords_value(object: &JsonObject) -> Result<&JsonValue> {
    util::expect_member(object, "coordinates")
}

fn decode_value(object: &JsonObject, kind: Kind) -> Result<Value> {
    let value = match kind {
        Kind::Point => Value::Point(coordinates::read(get_coords_value(object)?, kind)?),
        Kind::MultiPoint => Value::MultiPoint(coordinates::read(get_coords_value(object)?, kind)?),
        Kind::LineString => {
            Value::LineString(coordinates::read_line_string(get_coords_value(object)?)?)
        }
        Kind::MultiLineString => Value::MultiLineString(coordinates::read_multi_line_string(
            get_coords_value(object)?,
        )?),
        Kind::Polygon => Value::Polygon(coordinates::read(get_coords_value(object)?, kind)?),
        Kind::MultiPolygon => {
            Value::MultiPolygon(coordinates::read(get_coords_value(object)?, kind)?)
        }
        Kind::GeometryCollection => {
            let geometries = util::expect_member(object, "geometries")?;
            let members = util::expect_array(geometries, "geometries")?;
            Value::GeometryCollection(GeometryCollection::decode(members)?)
        }
    };
    Ok(value)
}
