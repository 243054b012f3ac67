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

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::{FeatureCollection, Result};

/// Decode GeoJSON text into a [`FeatureCollection`].
///
/// Fails on the first malformed node; no partially decoded collection is ever returned.
pub fn decode(text: &str) -> Result<FeatureCollection> {
    text.parse()
}

/// Read `reader` to the end, then [`decode`] its content.
pub fn decode_from_reader<R: Read>(mut reader: R) -> Result<FeatureCollection> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode(&text)
}

/// Read the file at `path`, then [`decode`] its content.
pub fn decode_from_path<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_from_reader};
    use crate::Error;

    #[test]
    fn syntax_error() {
        match decode(r#"{"features": [}"#) {
            Err(Error::SyntaxError { line, column, .. }) => {
                assert_eq!(line, 1);
                assert!(column > 0);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn reader_with_invalid_utf8() {
        let bytes: &[u8] = &[b'{', 0xff, b'}'];
        match decode_from_reader(bytes) {
            Err(Error::Io { kind, .. }) => assert_eq!(kind, std::io::ErrorKind::InvalidData),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn reader_and_str_agree() {
        let text = r#"{"features":[{"geometry":{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[0,0]]]]}}]}"#;
        assert_eq!(decode_from_reader(text.as_bytes()), decode(text));
    }
}
