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

use crate::Kind;

/// Error when decoding GeoJSON
///
/// `path` members locate the offending node: the position in the 'features' array first,
/// followed by the position within each enclosing 'geometries' array. It is empty when the
/// failing member belongs to the top-level object.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not well-formed JSON.
    SyntaxError {
        /// Description from the JSON parser, which ends with the line and column.
        message: String,
        line: usize,
        column: usize,
    },
    /// A `type` member holds a string which is not one of the seven geometry types.
    UnrecognizedGeometryType { path: Vec<usize>, found: String },
    /// A LineString, or one line of a MultiLineString, has fewer than two positions.
    InsufficientPoints {
        path: Vec<usize>,
        kind: Kind,
        /// Which line of a MultiLineString failed; `None` for a LineString.
        line: Option<usize>,
        found: usize,
    },
    /// A value inside `coordinates` is not an array (or, at the innermost level, not a number).
    MalformedCoordinate {
        path: Vec<usize>,
        kind: Kind,
        found: String,
    },
    /// A property value could not be rendered as text.
    ///
    /// Every JSON value has a text rendering (see [`crate`] documentation), so decoding never
    /// produces this variant; it is part of the error set for callers matching on it.
    MalformedProperty { path: Vec<usize>, key: String },
    /// A required member is absent.
    MissingField { path: Vec<usize>, field: String },
    /// A required member is present but holds the wrong kind of JSON value.
    UnexpectedType {
        path: Vec<usize>,
        member: String,
        expected: String,
        actual: String,
    },
    /// Reading the input failed.
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Positions of the offending node, outermost array first.
    pub fn path(&self) -> &[usize] {
        match *self {
            Error::UnrecognizedGeometryType { ref path, .. }
            | Error::InsufficientPoints { ref path, .. }
            | Error::MalformedCoordinate { ref path, .. }
            | Error::MalformedProperty { ref path, .. }
            | Error::MissingField { ref path, .. }
            | Error::UnexpectedType { ref path, .. } => path.as_slice(),
            Error::SyntaxError { .. } | Error::Io { .. } => &[],
        }
    }

    /// Position of the offending node within its immediately enclosing array, if known.
    pub fn index(&self) -> Option<usize> {
        self.path().last().copied()
    }

    /// Record that the failing node sits at `index` of the array being decoded.
    pub(crate) fn at(mut self, index: usize) -> Self {
        match self {
            Error::UnrecognizedGeometryType { ref mut path, .. }
            | Error::InsufficientPoints { ref mut path, .. }
            | Error::MalformedCoordinate { ref mut path, .. }
            | Error::MalformedProperty { ref mut path, .. }
            | Error::MissingField { ref mut path, .. }
            | Error::UnexpectedType { ref mut path, .. } => path.insert(0, index),
            Error::SyntaxError { .. } | Error::Io { .. } => {}
        }
        self
    }
}

struct At<'a>(&'a [usize]);

impl std::fmt::Display for At<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, " (at index ")?;
        for (n, index) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, " > ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, ")")
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::SyntaxError { ref message, .. } => {
                write!(f, "Encountered malformed JSON: {}", message)
            }
            Error::UnrecognizedGeometryType { ref path, ref found } => write!(
                f,
                "Encountered unknown geometry type '{}'{}.",
                found,
                At(path)
            ),
            Error::InsufficientPoints {
                ref path,
                kind,
                line,
                found,
            } => {
                write!(f, "{}", kind)?;
                if let Some(line) = line {
                    write!(f, " line {}", line)?;
                }
                write!(
                    f,
                    " must have at least two positions, found {}{}.",
                    found,
                    At(path)
                )
            }
            Error::MalformedCoordinate {
                ref path,
                kind,
                ref found,
            } => write!(
                f,
                "Encountered {} value within 'coordinates' of {}{}.",
                found,
                kind,
                At(path)
            ),
            Error::MalformedProperty { ref path, ref key } => write!(
                f,
                "Property '{}' cannot be converted to a string{}.",
                key,
                At(path)
            ),
            Error::MissingField {
                ref path,
                ref field,
            } => write!(f, "Expected member with the name '{}'{}.", field, At(path)),
            Error::UnexpectedType {
                ref path,
                ref member,
                ref expected,
                ref actual,
            } => write!(
                f,
                "Expected {} for '{}', found {}{}.",
                expected,
                member,
                actual,
                At(path)
            ),
            Error::Io { ref message, .. } => write!(f, "Unable to read GeoJSON: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return std::io::Error::from(error).into();
        }
        Error::SyntaxError {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
