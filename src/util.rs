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

use crate::json::{JsonObject, JsonValue};
use crate::{Error, Property, Result};

/// Name of the JSON type of `value`, as used in error messages.
pub fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn unexpected(value: &JsonValue, member: &str, expected: &str) -> Error {
    Error::UnexpectedType {
        path: Vec::new(),
        member: member.to_owned(),
        expected: expected.to_owned(),
        actual: json_kind(value).to_owned(),
    }
}

pub fn expect_member<'a>(object: &'a JsonObject, name: &str) -> Result<&'a JsonValue> {
    match object.get(name) {
        Some(v) => Ok(v),
        None => Err(Error::MissingField {
            path: Vec::new(),
            field: name.to_owned(),
        }),
    }
}

pub fn expect_string<'a>(value: &'a JsonValue, member: &str) -> Result<&'a str> {
    match value {
        JsonValue::String(s) => Ok(s.as_str()),
        _ => Err(unexpected(value, member, "string")),
    }
}

pub fn expect_array<'a>(value: &'a JsonValue, member: &str) -> Result<&'a Vec<JsonValue>> {
    match value.as_array() {
        Some(v) => Ok(v),
        None => Err(unexpected(value, member, "array")),
    }
}

pub fn expect_object<'a>(value: &'a JsonValue, member: &str) -> Result<&'a JsonObject> {
    match value.as_object() {
        Some(v) => Ok(v),
        None => Err(unexpected(value, member, "object")),
    }
}

/// Retrieve the 'type' member of a Geometry.
pub fn expect_type(object: &JsonObject) -> Result<&str> {
    let prop = expect_member(object, "type")?;
    expect_string(prop, "type")
}

/// Retrieve the 'properties' member of a Feature or Geometry as an ordered list of pairs.
///
/// An absent or null 'properties' member yields no pairs.
pub fn get_properties(object: &JsonObject) -> Result<Vec<Property>> {
    match object.get("properties") {
        // If their is any 'properties' member, it must be an Object:
        Some(JsonValue::Object(properties)) => Ok(properties
            .iter()
            .map(|(key, value)| Property {
                key: key.to_owned(),
                value: property_to_string(value),
            })
            .collect()),
        // Null is handled as if their is no 'properties' member:
        Some(JsonValue::Null) | None => Ok(Vec::new()),
        Some(other) => Err(unexpected(other, "properties", "object or null")),
    }
}

/// Strings are kept as they are; everything else is rendered as compact JSON.
fn property_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.to_owned(),
        _ => value.to_string(),
    }
}
