//! Reusable parametric shape helpers shared by the part builders.

use crate::errors::{Error, Result};
use crate::float_types::{PI, Real};
use crate::solid::Solid;
use nalgebra::Vector3;

/// Boolean faces are nudged past each other by this much so the renderer
/// never sees coincident surfaces.
pub const OVERCUT: Real = 0.01;

/// Hexagonal prism with the given flat-to-flat `width`, built as the hull of
/// six fillet cylinders at 60 degree increments.
///
/// The pole circles are placed so the flat faces sit at exactly `width / 2`
/// from the axis for any `0 < fillet_radius < width / 2`; the fillet only
/// rounds the corners.
pub fn hex_prism(width: Real, height: Real, fillet_radius: Real) -> Result<Solid> {
    if width <= 0.0 {
        return Err(Error::NonPositive { name: "hex width", value: width });
    }
    if height <= 0.0 {
        return Err(Error::NonPositive { name: "hex height", value: height });
    }
    if fillet_radius <= 0.0 {
        return Err(Error::NonPositive { name: "fillet radius", value: fillet_radius });
    }
    if fillet_radius >= width / 2.0 {
        return Err(Error::FilletTooLarge { fillet: fillet_radius, width });
    }
    // Flats lie between adjacent poles, offset outward by the fillet radius,
    // so the pole distance must absorb it: (w/2 - f) / cos(30 deg).
    let pole_offset = (width / 2.0 - fillet_radius) / (PI / 6.0).cos();
    let pole = Solid::cylinder(fillet_radius, height).translate(pole_offset, 0.0, 0.0);
    let mut poles = vec![pole.clone()];
    for i in 1..6 {
        poles.push(pole.clone().rotate(0.0, 0.0, 60.0 * i as Real));
    }
    Ok(Solid::hull(poles))
}

/// Which directions of one axis a [`chamfer_hull`] spreads copies along.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AxisChamfer {
    #[default]
    Off,
    /// Both directions, i.e. offsets `[1, -1]`.
    Both,
    /// Explicit signed unit offsets, e.g. `[-1.0]` for one side only.
    Directions(Vec<Real>),
}

impl AxisChamfer {
    fn offsets(&self) -> &[Real] {
        match self {
            AxisChamfer::Off => &[],
            AxisChamfer::Both => &[1.0, -1.0],
            AxisChamfer::Directions(dirs) => dirs,
        }
    }
}

/// Per-axis activation for [`chamfer_hull`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChamferAxes {
    pub x: AxisChamfer,
    pub y: AxisChamfer,
    pub z: AxisChamfer,
}

/// Bevels the selected faces of `base` by hulling copies of it translated by
/// `chamfer` along each activated axis direction.
///
/// With no axis active this degenerates to the hull of the single original
/// copy, a no-op for the convex blocks it is used on.
pub fn chamfer_hull(axes: &ChamferAxes, chamfer: Real, base: Solid) -> Solid {
    let mut copies = Vec::new();
    for (axis, spec) in [&axes.x, &axes.y, &axes.z].into_iter().enumerate() {
        for &direction in spec.offsets() {
            let mut offset = Vector3::zeros();
            offset[axis] = direction * chamfer;
            copies.push(base.clone().translate_vector(offset));
        }
    }
    if copies.is_empty() {
        copies.push(base);
    }
    Solid::hull(copies)
}

/// Tapered cavity for a heat-installed threaded insert.
///
/// The bore narrows linearly with depth at `taper_angle_degrees` off the
/// axis, the smaller excess hole above it collects displaced material, and
/// the optional negative channel below provides assembly and screwdriver
/// access. The cavity opens downward from z=0; callers orient it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatSetInsert {
    pub diameter: Real,
    pub depth: Real,
    pub excess_diameter: Real,
    pub excess_depth: Real,
    pub taper_angle_degrees: Real,
    pub negative_depth: Real,
    /// Channel diameter; the insert bore diameter when `None`.
    pub negative_diameter: Option<Real>,
}

impl HeatSetInsert {
    pub fn new(diameter: Real, depth: Real, excess_diameter: Real, excess_depth: Real) -> Self {
        Self {
            diameter,
            depth,
            excess_diameter,
            excess_depth,
            taper_angle_degrees: 8.0,
            negative_depth: 0.0,
            negative_diameter: None,
        }
    }

    pub fn with_negative(mut self, depth: Real, diameter: Option<Real>) -> Self {
        self.negative_depth = depth;
        self.negative_diameter = diameter;
        self
    }

    pub fn with_taper(mut self, angle_degrees: Real) -> Self {
        self.taper_angle_degrees = angle_degrees;
        self
    }

    /// Bore radius at full depth: `d/2 - tan(taper) * depth/2`, or exactly
    /// `d/2` at zero taper. An over-steep taper that would pinch the bore
    /// closed is rejected.
    pub fn bottom_radius(&self) -> Result<Real> {
        if self.diameter <= 0.0 {
            return Err(Error::NonPositive { name: "insert diameter", value: self.diameter });
        }
        if self.depth <= 0.0 {
            return Err(Error::NonPositive { name: "insert depth", value: self.depth });
        }
        if self.taper_angle_degrees == 0.0 {
            return Ok(self.diameter / 2.0);
        }
        let taper = (self.taper_angle_degrees * PI / 180.0).tan();
        let bottom = self.diameter / 2.0 - taper * self.depth / 2.0;
        if bottom <= 0.0 {
            return Err(Error::DegenerateTaper {
                angle_degrees: self.taper_angle_degrees,
                depth: self.depth,
                bottom_radius: bottom,
            });
        }
        Ok(bottom)
    }

    /// The full cavity: tapered bore, excess relief hole, and the negative
    /// channel when configured.
    pub fn cavity(&self) -> Result<Solid> {
        let top_radius = self.diameter / 2.0;
        let bottom_radius = self.bottom_radius()?;
        let insert_hole = Solid::frustum(top_radius, bottom_radius, self.depth + OVERCUT)
            .translate(0.0, 0.0, -OVERCUT);
        let excess_hole = Solid::cylinder(self.excess_diameter / 2.0, self.excess_depth + OVERCUT)
            .translate(0.0, 0.0, self.depth - OVERCUT);
        let mut total = insert_hole + excess_hole;
        if self.negative_depth != 0.0 {
            let radius = self.negative_diameter.unwrap_or(self.diameter) / 2.0;
            total = total
                + Solid::cylinder(radius, self.negative_depth + OVERCUT)
                    .translate(0.0, 0.0, -self.negative_depth - OVERCUT);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::EPSILON;

    #[test]
    fn hex_prism_rejects_oversized_fillet() {
        assert!(matches!(
            hex_prism(10.0, 5.0, 5.0),
            Err(Error::FilletTooLarge { .. })
        ));
        assert!(matches!(
            hex_prism(10.0, 5.0, -1.0),
            Err(Error::NonPositive { .. })
        ));
    }

    #[test]
    fn hex_prism_is_a_hull_of_six_poles() {
        let hex = hex_prism(23.6, 9.7, 0.1).unwrap();
        match hex {
            Solid::Hull(poles) => assert_eq!(poles.len(), 6),
            other => panic!("expected hull, got {other:?}"),
        }
    }

    #[test]
    fn chamfer_hull_no_axes_is_single_copy() {
        let base = Solid::cube(4.0, 4.0, 4.0);
        let hulled = chamfer_hull(&ChamferAxes::default(), 1.0, base.clone());
        assert_eq!(hulled, Solid::hull(vec![base]));
    }

    #[test]
    fn chamfer_hull_copy_count() {
        let axes = ChamferAxes {
            x: AxisChamfer::Directions(vec![-1.0]),
            y: AxisChamfer::Both,
            z: AxisChamfer::Both,
        };
        let hulled = chamfer_hull(&axes, 1.0, Solid::cube(1.0, 1.0, 1.0));
        match hulled {
            Solid::Hull(copies) => assert_eq!(copies.len(), 5),
            other => panic!("expected hull, got {other:?}"),
        }
    }

    #[test]
    fn zero_taper_leaves_straight_bore() {
        let insert = HeatSetInsert::new(5.3, 6.4, 3.5, 2.5).with_taper(0.0);
        assert!((insert.bottom_radius().unwrap() - 2.65).abs() < EPSILON);
    }

    #[test]
    fn default_taper_matches_formula() {
        let insert = HeatSetInsert::new(5.3, 6.4, 3.5, 2.5);
        let expected = 5.3 / 2.0 - (8.0_f64).to_radians().tan() * 6.4 / 2.0;
        assert!((insert.bottom_radius().unwrap() - expected).abs() < EPSILON);
    }

    #[test]
    fn steep_taper_is_rejected() {
        let insert = HeatSetInsert::new(2.0, 20.0, 1.0, 1.0).with_taper(45.0);
        assert!(matches!(
            insert.bottom_radius(),
            Err(Error::DegenerateTaper { .. })
        ));
        assert!(insert.cavity().is_err());
    }

    #[test]
    fn negative_channel_adds_third_cut() {
        let plain = HeatSetInsert::new(3.175, 4.7752, 2.5, 3.0).cavity().unwrap();
        let with_channel = HeatSetInsert::new(3.175, 4.7752, 2.5, 3.0)
            .with_negative(100.0, Some(4.0))
            .cavity()
            .unwrap();
        let count = |s: &Solid| match s {
            Solid::Union(children) => children.len(),
            other => panic!("expected union, got {other:?}"),
        };
        assert_eq!(count(&plain), 2);
        assert_eq!(count(&with_channel), 3);
    }
}
