#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::DocStore;
use crate::geometry::Point;
use crate::shape::Shape;

/// Topmost shape under `pt`, searching in reverse insertion order.
///
/// When shapes overlap the most recently added one wins, regardless of
/// z-index.
#[must_use]
pub fn hit_test<'a>(pt: Point, doc: &'a DocStore) -> Option<&'a Shape> {
    doc.shapes().iter().rev().find(|s| s.contains_point(pt))
}
