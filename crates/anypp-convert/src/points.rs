//! Named 3D points and the ordered set they are collected into.

use indexmap::IndexMap;
use std::fmt;

/// A 3-component point. Components may be NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True if any component is NaN.
    pub fn has_nan(&self) -> bool {
        self.components().iter().any(|c| c.is_nan())
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Points keyed by their original (unsanitized) name, in insertion order.
///
/// Inserting a name that is already present replaces the point but keeps
/// the entry at its first position.
#[derive(Clone, Default, PartialEq)]
pub struct PointSet {
    points: IndexMap<String, Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a point, returning the previous value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, point: Point) -> Option<Point> {
        self.points.insert(name.into(), point)
    }

    pub fn get(&self, name: &str) -> Option<&Point> {
        self.points.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Point> {
        self.points.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }
}

impl fmt::Debug for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.points.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = (&'a String, &'a Point);
    type IntoIter = indexmap::map::Iter<'a, String, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Point)> for PointSet {
    fn from_iter<T: IntoIterator<Item = (S, Point)>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<(S, Point)> for PointSet {
    fn extend<T: IntoIterator<Item = (S, Point)>>(&mut self, iter: T) {
        for (name, point) in iter {
            self.insert(name, point);
        }
    }
}
