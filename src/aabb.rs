//! Axis-aligned bounding boxes over [`Solid`](crate::Solid) trees.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing every point of `points`; `None` when empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<Real>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self::new(first, first);
        for p in iter {
            aabb.mins = Point3::new(
                aabb.mins.x.min(p.x),
                aabb.mins.y.min(p.y),
                aabb.mins.z.min(p.z),
            );
            aabb.maxs = Point3::new(
                aabb.maxs.x.max(p.x),
                aabb.maxs.y.max(p.y),
                aabb.maxs.z.max(p.z),
            );
        }
        Some(aabb)
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            Point3::new(
                self.mins.x.min(other.mins.x),
                self.mins.y.min(other.mins.y),
                self.mins.z.min(other.mins.z),
            ),
            Point3::new(
                self.maxs.x.max(other.maxs.x),
                self.maxs.y.max(other.maxs.y),
                self.maxs.z.max(other.maxs.z),
            ),
        )
    }

    /// Box of the Minkowski sum of the two underlying sets.
    pub fn minkowski_sum(&self, other: &Self) -> Self {
        Self::new(
            self.mins + other.mins.coords,
            self.maxs + other.maxs.coords,
        )
    }

    #[inline]
    pub fn translated(&self, v: Vector3<Real>) -> Self {
        Self::new(self.mins + v, self.maxs + v)
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// The eight corner points.
    pub fn corners(&self) -> [Point3<Real>; 8] {
        let (lo, hi) = (self.mins, self.maxs);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }
}
