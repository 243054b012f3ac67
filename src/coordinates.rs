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

//! Reading of the nested numeric arrays found in 'coordinates' members.
//!
//! The nesting depth is carried by the target type: `f64` is a single number, `Vec<f64>` a
//! Position, `Vec<Vec<f64>>` a LineString, and so on up to the four levels of a MultiPolygon.

use crate::json::JsonValue;
use crate::{util, Error, Kind, LineStringType, PolygonType, Result};

/// A value that can be read from a (possibly nested) JSON array of numbers.
pub(crate) trait Coordinates: Sized {
    /// Number of array levels enclosing the numbers.
    const RANK: usize;

    /// On failure, returns the innermost JSON value which has the wrong type.
    fn from_json(value: &JsonValue) -> std::result::Result<Self, &JsonValue>;
}

impl Coordinates for f64 {
    const RANK: usize = 0;

    fn from_json(value: &JsonValue) -> std::result::Result<Self, &JsonValue> {
        value.as_f64().ok_or(value)
    }
}

impl<T: Coordinates> Coordinates for Vec<T> {
    const RANK: usize = T::RANK + 1;

    fn from_json(value: &JsonValue) -> std::result::Result<Self, &JsonValue> {
        let array = value.as_array().ok_or(value)?;
        let mut items = Vec::with_capacity(array.len());
        for item in array {
            items.push(T::from_json(item)?);
        }
        Ok(items)
    }
}

/// Read `value` as the coordinates of a geometry of the given kind.
pub(crate) fn read<T: Coordinates>(value: &JsonValue, kind: Kind) -> Result<T> {
    debug_assert_eq!(Some(T::RANK), kind.rank());
    T::from_json(value).map_err(|found| malformed(found, kind))
}

fn malformed(found: &JsonValue, kind: Kind) -> Error {
    Error::MalformedCoordinate {
        path: Vec::new(),
        kind,
        found: util::json_kind(found).to_owned(),
    }
}

fn check_line(line: &LineStringType, kind: Kind, line_index: Option<usize>) -> Result<()> {
    if line.len() < 2 {
        return Err(Error::InsufficientPoints {
            path: Vec::new(),
            kind,
            line: line_index,
            found: line.len(),
        });
    }
    Ok(())
}

/// Used by Value::LineString
pub(crate) fn read_line_string(value: &JsonValue) -> Result<LineStringType> {
    let line = read(value, Kind::LineString)?;
    check_line(&line, Kind::LineString, None)?;
    Ok(line)
}

/// Used by Value::MultiLineString
///
/// Each line is checked as soon as it is read, so a short line is reported before the
/// following lines are looked at.
pub(crate) fn read_multi_line_string(value: &JsonValue) -> Result<PolygonType> {
    let kind = Kind::MultiLineString;
    let array = value.as_array().ok_or_else(|| malformed(value, kind))?;
    let mut lines = Vec::with_capacity(array.len());
    for (n, item) in array.iter().enumerate() {
        let line = LineStringType::from_json(item).map_err(|found| malformed(found, kind))?;
        check_line(&line, kind, Some(n))?;
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::{read, read_line_string, read_multi_line_string, Coordinates};
    use crate::json::JsonValue;
    use crate::{Error, Kind, LineStringType, PolygonType, Position};

    fn json(s: &str) -> JsonValue {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn ranks_match_kinds() {
        assert_eq!(Some(Position::RANK), Kind::Point.rank());
        assert_eq!(Some(LineStringType::RANK), Kind::LineString.rank());
        assert_eq!(Some(PolygonType::RANK), Kind::Polygon.rank());
        assert_eq!(Some(Vec::<PolygonType>::RANK), Kind::MultiPolygon.rank());
    }

    #[test]
    fn read_position_keeps_extra_dimensions() {
        let pos: Position = read(&json("[1.5, 2.5, 300]"), Kind::Point).unwrap();
        assert_eq!(pos, vec![1.5, 2.5, 300.0]);
    }

    #[test]
    fn read_multi_polygon() {
        let value = json("[[[[0,0],[1,0],[1,1],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]]");
        let polys: Vec<PolygonType> = read(&value, Kind::MultiPolygon).unwrap();
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[1][0][2], vec![6.0, 6.0]);
    }

    #[test]
    fn non_numeric_leaf() {
        let result: Result<LineStringType, _> =
            read(&json(r#"[[0,0],[1,"1"]]"#), Kind::MultiPoint);
        assert_eq!(
            result,
            Err(Error::MalformedCoordinate {
                path: vec![],
                kind: Kind::MultiPoint,
                found: "string".to_string(),
            })
        );
    }

    #[test]
    fn wrong_depth() {
        let result: Result<PolygonType, _> = read(&json("[[0,0],[1,1]]"), Kind::Polygon);
        assert_eq!(
            result,
            Err(Error::MalformedCoordinate {
                path: vec![],
                kind: Kind::Polygon,
                found: "number".to_string(),
            })
        );
    }

    #[test]
    fn line_string_needs_two_positions() {
        assert_eq!(
            read_line_string(&json("[[0,0]]")),
            Err(Error::InsufficientPoints {
                path: vec![],
                kind: Kind::LineString,
                line: None,
                found: 1,
            })
        );
        assert!(read_line_string(&json("[[0,0],[1,1]]")).is_ok());
    }

    #[test]
    fn multi_line_string_checks_each_line() {
        assert_eq!(
            read_multi_line_string(&json("[[[0,0],[1,1]],[],[[2,2]]]")),
            Err(Error::InsufficientPoints {
                path: vec![],
                kind: Kind::MultiLineString,
                line: Some(1),
                found: 0,
            })
        );
        let lines = read_multi_line_string(&json("[[[0,0],[1,1]],[[2,2],[3,3],[4,4]]]")).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 3);
    }

    #[test]
    fn empty_multi_line_string_is_valid() {
        assert_eq!(read_multi_line_string(&json("[]")), Ok(vec![]));
    }
}
