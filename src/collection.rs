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

use log::trace;

use crate::geometry::Layout;
use crate::json::JsonValue;
use crate::{util, Geometry, Kind, Result};

/// Decoded geometries grouped by kind
///
/// Each bucket keeps its members in encounter order. The overall order across buckets is
/// available through [`Buckets::geometries`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buckets {
    points: Vec<Geometry>,
    multi_points: Vec<Geometry>,
    line_strings: Vec<Geometry>,
    multi_line_strings: Vec<Geometry>,
    polygons: Vec<Geometry>,
    multi_polygons: Vec<Geometry>,
    geometry_collections: Vec<Geometry>,
    /// (bucket, position in bucket) of every member, in encounter order
    order: Vec<(Kind, usize)>,
}

impl Buckets {
    /// Decode every node of a 'features' or 'geometries' array.
    ///
    /// The position of a failing node is put in front of the error path, so errors from nested
    /// GeometryCollections carry every enclosing position.
    pub(crate) fn decode(members: &[JsonValue], layout: Layout) -> Result<Self> {
        let mut buckets = Buckets::default();
        for (index, member) in members.iter().enumerate() {
            let geometry = util::expect_object(member, layout.node_name())
                .and_then(|node| Geometry::decode(node, layout, index))
                .map_err(|e| e.at(index))?;
            trace!("decoded {} at index {}", geometry.kind(), index);
            buckets.push(geometry);
        }
        Ok(buckets)
    }

    fn push(&mut self, geometry: Geometry) {
        let kind = geometry.kind();
        let bucket = self.bucket_mut(kind);
        let position = bucket.len();
        bucket.push(geometry);
        self.order.push((kind, position));
    }

    fn bucket_mut(&mut self, kind: Kind) -> &mut Vec<Geometry> {
        match kind {
            Kind::Point => &mut self.points,
            Kind::MultiPoint => &mut self.multi_points,
            Kind::LineString => &mut self.line_strings,
            Kind::MultiLineString => &mut self.multi_line_strings,
            Kind::Polygon => &mut self.polygons,
            Kind::MultiPolygon => &mut self.multi_polygons,
            Kind::GeometryCollection => &mut self.geometry_collections,
        }
    }

    /// The members of the given kind, in encounter order.
    pub fn bucket(&self, kind: Kind) -> &[Geometry] {
        match kind {
            Kind::Point => &self.points,
            Kind::MultiPoint => &self.multi_points,
            Kind::LineString => &self.line_strings,
            Kind::MultiLineString => &self.multi_line_strings,
            Kind::Polygon => &self.polygons,
            Kind::MultiPolygon => &self.multi_polygons,
            Kind::GeometryCollection => &self.geometry_collections,
        }
    }

    pub fn points(&self) -> &[Geometry] {
        &self.points
    }

    pub fn multi_points(&self) -> &[Geometry] {
        &self.multi_points
    }

    pub fn line_strings(&self) -> &[Geometry] {
        &self.line_strings
    }

    pub fn multi_line_strings(&self) -> &[Geometry] {
        &self.multi_line_strings
    }

    pub fn polygons(&self) -> &[Geometry] {
        &self.polygons
    }

    pub fn multi_polygons(&self) -> &[Geometry] {
        &self.multi_polygons
    }

    pub fn geometry_collections(&self) -> &[Geometry] {
        &self.geometry_collections
    }

    /// Every member, in the order of the source array.
    pub fn geometries(&self) -> impl Iterator<Item = &Geometry> + '_ {
        self.order
            .iter()
            .map(move |&(kind, position)| &self.bucket(kind)[position])
    }

    /// Sum of the lengths of the seven buckets.
    pub fn len(&self) -> usize {
        Kind::ALL.iter().map(|kind| self.bucket(*kind).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Members of a decoded GeometryCollection
///
/// [GeoJSON Format Specification § 3.1.8](https://tools.ietf.org/html/rfc7946#section-3.1.8)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
    members: Buckets,
}

impl GeometryCollection {
    /// Decode the 'geometries' member of a GeometryCollection.
    pub(crate) fn decode(geometries: &[JsonValue]) -> Result<Self> {
        Ok(GeometryCollection {
            members: Buckets::decode(geometries, Layout::Geometry)?,
        })
    }

    pub fn members(&self) -> &Buckets {
        &self.members
    }
}

impl std::ops::Deref for GeometryCollection {
    type Target = Buckets;

    fn deref(&self) -> &Self::Target {
        &self.members
    }
}
