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

//! # Introduction
//!
//! This crate decodes [GeoJSON](https://tools.ietf.org/html/rfc7946) feature collections into a
//! typed, validated geometry tree.
//!
//! Every feature's geometry is decoded according to its `type` member and placed in one of seven
//! buckets (one per geometry kind). `GeometryCollection`s are decoded recursively and bucket
//! their members the same way.
//!
//! Property values are always narrowed to text: strings are kept verbatim, any other JSON value
//! is rendered as compact JSON.
//!
//! # Example
//!
//! ```
//! use geojson_reader::{decode, Kind};
//!
//! let text = r#"{
//!     "type": "FeatureCollection",
//!     "features": [
//!         {
//!             "type": "Feature",
//!             "properties": {"name": "somewhere", "rank": 3},
//!             "geometry": {"type": "Point", "coordinates": [102.0, 0.5]}
//!         },
//!         {
//!             "type": "Feature",
//!             "geometry": {"type": "LineString", "coordinates": [[102.0, 0.0], [103.0, 1.0]]}
//!         }
//!     ]
//! }"#;
//!
//! let collection = decode(text).unwrap();
//! assert_eq!(collection.total_features(), 2);
//!
//! let point = &collection.points()[0];
//! assert_eq!(point.kind(), Kind::Point);
//! assert_eq!(point.as_point(), Some(&vec![102.0, 0.5]));
//! assert_eq!(point.property("rank"), Some("3"));
//!
//! assert_eq!(collection.line_strings()[0].index(), 1);
//! ```

/// Position (a single coordinate tuple, with any number of dimensions)
///
/// [GeoJSON Format Specification § 3.1.1](https://tools.ietf.org/html/rfc7946#section-3.1.1)
pub type Position = Vec<f64>;

/// Positions of a LineString or of a single ring of a Polygon
pub type LineStringType = Vec<Position>;

/// Rings of a Polygon, or lines of a MultiLineString
pub type PolygonType = Vec<Vec<Position>>;

mod util;

mod coordinates;

mod kind;
pub use crate::kind::Kind;

mod geometry;
pub use crate::geometry::{Geometry, Property, Value};

mod collection;
pub use crate::collection::{Buckets, GeometryCollection};

mod feature_collection;
pub use crate::feature_collection::FeatureCollection;

mod read;
pub use crate::read::{decode, decode_from_path, decode_from_reader};

mod error;
pub use crate::error::{Error, Result};

mod json {
    pub use serde::{Deserialize, Deserializer};
    pub use serde_json::{Map, Value as JsonValue};
    pub type JsonObject = Map<String, JsonValue>;
}
