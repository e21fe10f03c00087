//! Analytic measurement of `Solid` trees: support functions and bounding boxes.
//!
//! Neither requires rasterization. The support function is exact wherever it
//! is defined; bounding boxes are exact for axis-aligned compositions and
//! conservative under arbitrary rotation and under `Difference` (cuts only
//! remove material, so the minuend's box is an upper bound).

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::solid::Solid;
use nalgebra::{Matrix3, Point3, Rotation3, Vector3};

/// OpenSCAD-style Euler rotation: X, then Y, then Z.
fn rotation(degrees: &Vector3<Real>) -> Rotation3<Real> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.x.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.y.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.z.to_radians());
    rz * ry * rx
}

/// Householder reflection across the plane with normal `normal`.
fn reflection(normal: &Vector3<Real>) -> Matrix3<Real> {
    let n = normal.normalize();
    Matrix3::identity() - 2.0 * n * n.transpose()
}

impl Solid {
    /// Farthest extent of the solid along `dir`: `max(p . dir)` over all
    /// points of the solid.
    ///
    /// Defined for primitives, transforms, unions, hulls, and Minkowski sums.
    /// `None` for trees whose extent cannot be known exactly without meshing
    /// (differences, extrusions, external module calls).
    pub fn support(&self, dir: &Vector3<Real>) -> Option<Real> {
        match self {
            Solid::Cube { size, center } => {
                let (lo, hi) = if *center {
                    (-size / 2.0, size / 2.0)
                } else {
                    (Vector3::zeros(), *size)
                };
                Some(
                    (dir.x * lo.x).max(dir.x * hi.x)
                        + (dir.y * lo.y).max(dir.y * hi.y)
                        + (dir.z * lo.z).max(dir.z * hi.z),
                )
            }
            Solid::Cylinder { h, r1, r2 } => {
                let radial = dir.xy().norm();
                Some((radial * r1).max(radial * r2 + dir.z * h))
            }
            Solid::Circle { diameter } => Some(dir.xy().norm() * diameter / 2.0),
            Solid::Translate { offset, child } => {
                child.support(dir).map(|s| s + offset.dot(dir))
            }
            // support_{R S}(d) = support_S(R^T d)
            Solid::Rotate { degrees, child } => {
                child.support(&(rotation(degrees).inverse() * dir))
            }
            // A reflection is its own inverse.
            Solid::Mirror { normal, child } => child.support(&(reflection(normal) * dir)),
            // The support of a set union is the max over members; convexity
            // is irrelevant, and hulling does not move the extremes.
            Solid::Union(children) | Solid::Hull(children) => children
                .iter()
                .map(|c| c.support(dir))
                .try_fold(Real::NEG_INFINITY, |acc, s| s.map(|s| acc.max(s))),
            Solid::Minkowski(children) => children
                .iter()
                .map(|c| c.support(dir))
                .try_fold(0.0, |acc, s| s.map(|s| acc + s)),
            Solid::Difference(_) | Solid::RotateExtrude { .. } | Solid::External { .. } => {
                None
            }
        }
    }

    /// Bounding box of the tree, where computable. `None` only when the tree
    /// depends on an external module call of unknown extent.
    pub fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Solid::Cube { size, center } => Some(if *center {
                Aabb::new(Point3::from(-size / 2.0), Point3::from(size / 2.0))
            } else {
                Aabb::new(Point3::origin(), Point3::from(*size))
            }),
            Solid::Cylinder { h, r1, r2 } => {
                let r = r1.max(*r2);
                Some(Aabb::new(
                    Point3::new(-r, -r, 0.0),
                    Point3::new(r, r, *h),
                ))
            }
            Solid::Circle { diameter } => {
                let r = diameter / 2.0;
                Some(Aabb::new(Point3::new(-r, -r, 0.0), Point3::new(r, r, 0.0)))
            }
            Solid::Translate { offset, child } => {
                child.bounding_box().map(|b| b.translated(*offset))
            }
            Solid::Rotate { degrees, child } => {
                let rot = rotation(degrees);
                let b = child.bounding_box()?;
                Aabb::from_points(b.corners().iter().map(|p| rot * p))
            }
            Solid::Mirror { normal, child } => {
                let m = reflection(normal);
                let b = child.bounding_box()?;
                Aabb::from_points(b.corners().iter().map(|p| Point3::from(m * p.coords)))
            }
            Solid::RotateExtrude { child, .. } => {
                let b = child.bounding_box()?;
                let r = b.mins.x.abs().max(b.maxs.x.abs());
                Some(Aabb::new(
                    Point3::new(-r, -r, b.mins.y),
                    Point3::new(r, r, b.maxs.y),
                ))
            }
            Solid::Union(children) | Solid::Hull(children) => {
                let mut boxes = children.iter().map(Solid::bounding_box);
                let first = boxes.next()??;
                boxes.try_fold(first, |acc, b| b.map(|b| acc.union(&b)))
            }
            Solid::Minkowski(children) => {
                let mut boxes = children.iter().map(Solid::bounding_box);
                let first = boxes.next()??;
                boxes.try_fold(first, |acc, b| b.map(|b| acc.minkowski_sum(&b)))
            }
            // Subtrahends only remove material.
            Solid::Difference(children) => children.first()?.bounding_box(),
            Solid::External { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::EPSILON;

    fn approx(a: Real, b: Real) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn cube_support() {
        let c = Solid::cube(2.0, 3.0, 4.0);
        assert!(approx(c.support(&Vector3::x()).unwrap(), 2.0));
        assert!(approx(c.support(&-Vector3::x()).unwrap(), 0.0));
        assert!(approx(c.support(&Vector3::z()).unwrap(), 4.0));
    }

    #[test]
    fn cylinder_support_radial_and_axial() {
        let c = Solid::cylinder(1.5, 10.0);
        assert!(approx(c.support(&Vector3::x()).unwrap(), 1.5));
        assert!(approx(c.support(&Vector3::z()).unwrap(), 10.0));
        assert!(approx(c.support(&-Vector3::z()).unwrap(), 0.0));
    }

    #[test]
    fn frustum_support_takes_wider_cap() {
        let f = Solid::frustum(2.0, 1.0, 6.0);
        // Radially the base cap wins; axially the top cap is at z=6.
        assert!(approx(f.support(&Vector3::x()).unwrap(), 2.0));
        assert!(approx(f.support(&Vector3::z()).unwrap(), 6.0));
    }

    #[test]
    fn translated_rotated_support() {
        let s = Solid::cube(2.0, 2.0, 2.0)
            .rotate(0.0, 0.0, 90.0)
            .translate(5.0, 0.0, 0.0);
        // After a 90 deg z-rotation the cube spans x in [-2, 0]; shifted to [3, 5].
        assert!(approx(s.support(&Vector3::x()).unwrap(), 5.0));
        assert!(approx(s.support(&-Vector3::x()).unwrap(), -3.0));
    }

    #[test]
    fn difference_has_no_support() {
        let d = Solid::cube(1.0, 1.0, 1.0) - Solid::cylinder(0.1, 1.0);
        assert_eq!(d.support(&Vector3::x()), None);
    }

    #[test]
    fn difference_bounding_box_is_minuend() {
        let d = Solid::cube(3.0, 3.0, 3.0) - Solid::cylinder(1.0, 3.0);
        let b = d.bounding_box().unwrap();
        assert_eq!(b.maxs, Point3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn rotate_extrude_bounding_box() {
        // Torus profile: circle of diameter 4 centered at x=10.
        let ring = Solid::circle(4.0).translate(10.0, 0.0, 0.0).rotate_extrude(360.0);
        let b = ring.bounding_box().unwrap();
        assert!(approx(b.maxs.x, 12.0));
        assert!(approx(b.mins.x, -12.0));
        assert!(approx(b.mins.z, -2.0));
        assert!(approx(b.maxs.z, 2.0));
    }

    #[test]
    fn mirror_bounding_box_reflects() {
        let b = Solid::cube(2.0, 3.0, 4.0)
            .mirror(Vector3::z())
            .bounding_box()
            .unwrap();
        assert!(approx(b.mins.z, -4.0));
        assert!(approx(b.maxs.z, 0.0));
    }

    #[test]
    fn external_call_is_unbounded() {
        let gear = Solid::external("herringbone_gear", "gears.scad", vec![("modul", 1.0)]);
        assert_eq!(gear.bounding_box(), None);
        assert!((gear + Solid::cube(1.0, 1.0, 1.0)).bounding_box().is_none());
    }
}
