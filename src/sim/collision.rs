//! Axis-aligned bounding box collision
//!
//! Food and plate are both small boxes on the play plane, so a plain
//! interval-overlap test on each axis is all the collision we need.

use glam::Vec3;

use crate::consts::HALF_EXTENTS;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centred on `center` reaching `half_extents` along each axis
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box used for food items and the plate
    #[inline]
    pub fn around(center: Vec3) -> Self {
        Self::from_center(center, HALF_EXTENTS)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test, inclusive on both bounds (touching counts)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.cmpge(other.min).all() && self.min.cmple(other.max).all()
    }
}

/// Check whether two boxes overlap
#[inline]
pub fn check_collision(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes_overlap() {
        let a = Aabb::around(Vec3::new(0.3, -0.2, 0.0));
        assert!(check_collision(&a, &a));
    }

    #[test]
    fn test_touching_edges_count() {
        // Centres exactly 2 * half extent apart on x
        let half = Vec3::splat(0.25);
        let a = Aabb::from_center(Vec3::ZERO, half);
        let b = Aabb::from_center(Vec3::new(0.5, 0.0, 0.0), half);
        assert!(check_collision(&a, &b));
        assert!(check_collision(&b, &a));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Aabb::around(Vec3::new(0.0, 0.0, 0.0));

        let b = Aabb::around(Vec3::new(0.0, 0.5, 0.0));
        assert!(!check_collision(&a, &b));

        let c = Aabb::around(Vec3::new(-0.5, 0.0, 0.0));
        assert!(!check_collision(&a, &c));

        let d = Aabb::around(Vec3::new(0.0, 0.0, 0.05));
        assert!(!check_collision(&a, &d));
    }

    #[test]
    fn test_center() {
        let a = Aabb::around(Vec3::new(0.5, 1.2, 0.0));
        assert!((a.center() - Vec3::new(0.5, 1.2, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_food_over_plate() {
        // Food in the middle lane just above the plate
        let plate = Aabb::around(Vec3::new(0.0, -1.10, 0.0));
        let food = Aabb::around(Vec3::new(0.0, -0.92, 0.0));
        assert!(check_collision(&food, &plate));

        // Plate pushed to the side misses the middle lane
        let plate = Aabb::around(Vec3::new(0.45, -1.10, 0.0));
        assert!(!check_collision(&food, &plate));
    }
}
