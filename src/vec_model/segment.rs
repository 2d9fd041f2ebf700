//! point to segment distance

use super::*;

impl Vector {
    /// squared distance from self to the closest point on the segment
    /// between start and end
    ///
    /// the projection parameter is clamped to the segment, beyond either
    /// endpoint the distance is measured to that endpoint. a degenerate
    /// segment degrades to plain point distance
    pub fn distance_to_segment_squared(&self, start: &Vector, end: &Vector) -> f64 {
        if start.equals(end) {
            return self.distance_squared(start);
        }
        let length_squared = start.distance_squared(end);
        let t = ((self.x - start.x) * (end.x - start.x) + (self.y - start.y) * (end.y - start.y))
            / length_squared;
        let t = t.clamp(0.0, 1.0);
        let closest_x = start.x + t * (end.x - start.x);
        let closest_y = start.y + t * (end.y - start.y);
        let dx = self.x - closest_x;
        let dy = self.y - closest_y;
        dx * dx + dy * dy
    }

    /// distance from self to the closest point on the segment between
    /// start and end
    pub fn distance_to_segment(&self, start: &Vector, end: &Vector) -> f64 {
        self.distance_to_segment_squared(start, end).sqrt()
    }
}
