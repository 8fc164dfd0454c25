use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One drawn line, from the pen position before a move to the position after it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Receives segments in the order the turtle draws them.
///
/// This is the seam to whatever renders the output (a plotter, an SVG writer,
/// an animation frame). The interpreter never draws anything itself.
pub trait SegmentSink {
    fn segment(&mut self, segment: Segment);
}

impl SegmentSink for Vec<Segment> {
    fn segment(&mut self, segment: Segment) {
        self.push(segment);
    }
}

/// The complete, ordered output of one interpretation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub segments: Vec<Segment>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Axis-aligned bounding box `(min, max)` over every segment endpoint.
    ///
    /// Returns `None` for an empty drawing.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = self.segments.first()?.from;
        Some(self.segments.iter().fold((first, first), |(min, max), s| {
            (min.min(s.from).min(s.to), max.max(s.from).max(s.to))
        }))
    }

    /// Sum of all segment lengths.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}

impl SegmentSink for Drawing {
    fn segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

impl From<Vec<Segment>> for Drawing {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl IntoIterator for Drawing {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}
