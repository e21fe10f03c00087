//! The `Solid` operation tree: primitive leaf shapes, unary transforms, and
//! n-ary Boolean combinators.
//!
//! A `Solid` is never rasterized in-process. It is an immutable description
//! that [`scad`] serializes for the external renderer, and that [`bounds`]
//! can measure analytically. Trees compose algebraically: `a + b` is union,
//! `a - b` is difference.

pub mod bounds;
pub mod scad;

use crate::float_types::Real;
use nalgebra::Vector3;
use std::ops::{Add, Sub};

#[derive(Clone, Debug, PartialEq)]
pub enum Solid {
    /// Rectangular box with one corner at the origin, or centered.
    Cube { size: Vector3<Real>, center: bool },
    /// Z-aligned cylinder from z=0 to z=h; a frustum when `r1 != r2`.
    /// `r1` is the radius at z=0, `r2` at z=h.
    Cylinder { h: Real, r1: Real, r2: Real },
    /// 2D disk in the XY plane, for extrusion profiles.
    Circle { diameter: Real },
    Translate {
        offset: Vector3<Real>,
        child: Box<Solid>,
    },
    /// Euler rotation in degrees, applied X then Y then Z.
    Rotate {
        degrees: Vector3<Real>,
        child: Box<Solid>,
    },
    /// Reflection across the plane through the origin with the given normal.
    Mirror {
        normal: Vector3<Real>,
        child: Box<Solid>,
    },
    /// Spin a 2D profile around the Z axis; profile X becomes radius,
    /// profile Y becomes Z.
    RotateExtrude { angle: Real, child: Box<Solid> },
    Union(Vec<Solid>),
    /// First child minus all following children.
    Difference(Vec<Solid>),
    /// Convex hull of the children.
    Hull(Vec<Solid>),
    /// Minkowski sum of the children.
    Minkowski(Vec<Solid>),
    /// Call into an external OpenSCAD library, e.g. a gear generator.
    /// `library` is the file the generated document must `use <...>`.
    External {
        module: &'static str,
        library: &'static str,
        args: Vec<(&'static str, Real)>,
    },
}

impl Solid {
    pub fn cube(x: Real, y: Real, z: Real) -> Self {
        Solid::Cube {
            size: Vector3::new(x, y, z),
            center: false,
        }
    }

    pub fn cube_centered(x: Real, y: Real, z: Real) -> Self {
        Solid::Cube {
            size: Vector3::new(x, y, z),
            center: true,
        }
    }

    pub fn cylinder(r: Real, h: Real) -> Self {
        Solid::Cylinder { h, r1: r, r2: r }
    }

    /// Tapered cylinder: `r1` at the base, `r2` at the top.
    pub fn frustum(r1: Real, r2: Real, h: Real) -> Self {
        Solid::Cylinder { h, r1, r2 }
    }

    pub fn circle(diameter: Real) -> Self {
        Solid::Circle { diameter }
    }

    pub fn hull(children: Vec<Solid>) -> Self {
        Solid::Hull(children)
    }

    pub fn external(
        module: &'static str,
        library: &'static str,
        args: Vec<(&'static str, Real)>,
    ) -> Self {
        Solid::External {
            module,
            library,
            args,
        }
    }

    /// Returns a new Solid translated by x, y, and z.
    pub fn translate(self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    pub fn translate_vector(self, offset: Vector3<Real>) -> Self {
        Solid::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Rotates by x_deg, y_deg, z_deg, applied in that order.
    pub fn rotate(self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        Solid::Rotate {
            degrees: Vector3::new(x_deg, y_deg, z_deg),
            child: Box::new(self),
        }
    }

    /// Mirror across the plane through the origin with normal `normal`.
    pub fn mirror(self, normal: Vector3<Real>) -> Self {
        Solid::Mirror {
            normal,
            child: Box::new(self),
        }
    }

    pub fn rotate_extrude(self, angle: Real) -> Self {
        Solid::RotateExtrude {
            angle,
            child: Box::new(self),
        }
    }

    pub fn minkowski(self, other: Solid) -> Self {
        Solid::Minkowski(vec![self, other])
    }
}

/// `a + b` unions; repeated additions accumulate into one flat union.
impl Add for Solid {
    type Output = Solid;

    fn add(self, rhs: Solid) -> Solid {
        match self {
            Solid::Union(mut children) => {
                children.push(rhs);
                Solid::Union(children)
            }
            lhs => Solid::Union(vec![lhs, rhs]),
        }
    }
}

/// `a - b` subtracts; repeated subtractions accumulate into one difference.
impl Sub for Solid {
    type Output = Solid;

    fn sub(self, rhs: Solid) -> Solid {
        match self {
            Solid::Difference(mut children) => {
                children.push(rhs);
                Solid::Difference(children)
            }
            lhs => Solid::Difference(vec![lhs, rhs]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_accumulates_flat() {
        let u = Solid::cube(1.0, 1.0, 1.0)
            + Solid::cylinder(1.0, 2.0)
            + Solid::circle(3.0);
        match u {
            Solid::Union(children) => assert_eq!(children.len(), 3),
            other => panic!("expected flat union, got {other:?}"),
        }
    }

    #[test]
    fn difference_accumulates_subtrahends() {
        let d = Solid::cube(5.0, 5.0, 5.0)
            - Solid::cylinder(1.0, 5.0)
            - Solid::cylinder(0.5, 5.0);
        match d {
            Solid::Difference(children) => assert_eq!(children.len(), 3),
            other => panic!("expected difference, got {other:?}"),
        }
    }

    #[test]
    fn union_of_differences_keeps_grouping() {
        let a = Solid::cube(1.0, 1.0, 1.0) - Solid::cylinder(0.2, 1.0);
        let b = Solid::cube(2.0, 2.0, 2.0);
        let u = a.clone() + b;
        match u {
            Solid::Union(children) => assert_eq!(children[0], a),
            other => panic!("expected union, got {other:?}"),
        }
    }
}
