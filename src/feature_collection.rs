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

use std::str::FromStr;

use log::debug;

use crate::geometry::Layout;
use crate::json::{Deserialize, Deserializer, JsonObject, JsonValue};
use crate::{util, Buckets, Error, Result};

/// Feature Collection Objects, with every Feature's geometry decoded and grouped by kind
///
/// [GeoJSON Format Specification § 3.3](https://tools.ietf.org/html/rfc7946#section-3.3)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
    features: Buckets,
}

impl FeatureCollection {
    pub fn from_json_object(object: &JsonObject) -> Result<Self> {
        let features = util::expect_member(object, "features")?;
        let features = util::expect_array(features, "features")?;
        let collection = FeatureCollection {
            features: Buckets::decode(features, Layout::Feature)?,
        };
        debug!(
            "decoded {} features: {} Point, {} MultiPoint, {} LineString, {} MultiLineString, \
             {} Polygon, {} MultiPolygon, {} GeometryCollection",
            collection.total_features(),
            collection.points().len(),
            collection.multi_points().len(),
            collection.line_strings().len(),
            collection.multi_line_strings().len(),
            collection.polygons().len(),
            collection.multi_polygons().len(),
            collection.geometry_collections().len(),
        );
        Ok(collection)
    }

    pub fn from_json_value(value: &JsonValue) -> Result<Self> {
        let object = util::expect_object(value, "FeatureCollection")?;
        FeatureCollection::from_json_object(object)
    }

    /// Number of decoded features, always the sum of the seven bucket lengths.
    pub fn total_features(&self) -> usize {
        self.features.len()
    }

    pub fn features(&self) -> &Buckets {
        &self.features
    }
}

impl std::ops::Deref for FeatureCollection {
    type Target = Buckets;

    fn deref(&self) -> &Self::Target {
        &self.features
    }
}

impl FromStr for FeatureCollection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s)?;
        FeatureCollection::from_json_value(&value)
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<FeatureCollection, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as SerdeError;

        let val = JsonObject::deserialize(deserializer)?;

        FeatureCollection::from_json_object(&val).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, FeatureCollection, Kind};

    fn decode(json_string: &str) -> Result<FeatureCollection, Error> {
        json_string.parse()
    }

    #[test]
    fn decode_one_of_each_kind() {
        let fc = decode(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]}},
                {"type":"Feature","geometry":{"type":"MultiPoint","coordinates":[[0,0],[1,1]]}},
                {"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}},
                {"type":"Feature","geometry":{"type":"MultiLineString","coordinates":[[[0,0],[1,1]]]}},
                {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
                {"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]]]}},
                {"type":"Feature","geometry":{"type":"GeometryCollection","geometries":[]}}
            ]}"#,
        )
        .unwrap();
        for kind in Kind::ALL.iter() {
            assert_eq!(fc.bucket(*kind).len(), 1, "{} bucket", kind);
            assert_eq!(fc.bucket(*kind)[0].kind(), *kind);
        }
        assert_eq!(fc.total_features(), 7);
        let indexes: Vec<usize> = fc.geometries().map(|g| g.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn decode_empty_collection() {
        let fc = decode(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert_eq!(fc.total_features(), 0);
        assert!(fc.is_empty());
        for kind in Kind::ALL.iter() {
            assert!(fc.bucket(*kind).is_empty());
        }
    }

    #[test]
    fn decode_missing_features() {
        assert_eq!(
            decode(r#"{"type":"FeatureCollection"}"#),
            Err(Error::MissingField {
                path: vec![],
                field: "features".to_string(),
            })
        );
    }

    #[test]
    fn decode_features_not_array() {
        assert_eq!(
            decode(r#"{"type":"FeatureCollection","features":{}}"#),
            Err(Error::UnexpectedType {
                path: vec![],
                member: "features".to_string(),
                expected: "array".to_string(),
                actual: "object".to_string(),
            })
        );
    }

    #[test]
    fn decode_not_an_object() {
        assert_eq!(
            decode("[]"),
            Err(Error::UnexpectedType {
                path: vec![],
                member: "FeatureCollection".to_string(),
                expected: "object".to_string(),
                actual: "array".to_string(),
            })
        );
    }

    #[test]
    fn unknown_type_among_valid_siblings() {
        let result = decode(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]}},
                {"type":"Feature","geometry":{"type":"Circle","coordinates":[0,0]}},
                {"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]}}
            ]}"#,
        );
        assert_eq!(
            result,
            Err(Error::UnrecognizedGeometryType {
                path: vec![1],
                found: "Circle".to_string(),
            })
        );
    }

    #[test]
    fn nested_error_path_names_the_feature() {
        let bad_collection = r#"{"type":"Feature","geometry":{"type":"GeometryCollection",
            "geometries":[{"type":"LineString","coordinates":[[0,0]]}]}}"#;
        let point = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]}}"#;

        let first = decode(&format!(
            r#"{{"type":"FeatureCollection","features":[{},{}]}}"#,
            bad_collection, point
        ))
        .unwrap_err();
        let second = decode(&format!(
            r#"{{"type":"FeatureCollection","features":[{},{}]}}"#,
            point, bad_collection
        ))
        .unwrap_err();

        assert_eq!(
            first,
            Error::InsufficientPoints {
                path: vec![0, 0],
                kind: Kind::LineString,
                line: None,
                found: 1,
            }
        );
        assert_eq!(second.path(), &[1, 0]);
        assert_ne!(first, second);
        assert!(second.to_string().ends_with("(at index 1 > 0)."));
    }

    #[test]
    fn deserialize_with_serde() {
        let fc: FeatureCollection = serde_json::from_str(
            r#"{"features":[{"properties":{"prop0":"value0"},"geometry":{"type":"Point","coordinates":[102.0,0.5]}}]}"#,
        )
        .unwrap();
        assert_eq!(fc.points()[0].property("prop0"), Some("value0"));

        let err = serde_json::from_str::<FeatureCollection>(r#"{"features":[{"geometry":{"type":"Circle"}}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Circle"));
    }
}
