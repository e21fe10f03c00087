//! Black-box collaborator wrapper around the external OpenSCAD gear library.
//!
//! Tooth geometry is never modeled here; the generated document imports
//! [`GEAR_LIBRARY`] and the renderer evaluates the call. Two gears mesh when
//! their modules are equal and their helix angles opposite, spaced at
//! `module / 2 * (teeth_a + teeth_b)`.

use crate::float_types::Real;
use crate::solid::Solid;

/// The OpenSCAD library file the generated document must `use <...>`.
pub const GEAR_LIBRARY: &str = "gears.scad";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GearSpec {
    /// Gear module (tooth size), mm per tooth over the pitch diameter.
    pub module: Real,
    pub tooth_count: u32,
    /// Face width along the axis.
    pub width: Real,
    /// Center bore diameter.
    pub bore: Real,
    /// Helix angle in degrees; sign selects the hand.
    pub helix_angle: Real,
}

impl GearSpec {
    /// Meshing distance between this gear and `other` when both are module
    /// and helix compatible.
    pub fn spacing(&self, other: &GearSpec) -> Real {
        self.module / 2.0 * (self.tooth_count + other.tooth_count) as Real
    }
}

/// A double-helical gear from the external library, as an opaque solid.
pub fn herringbone_gear(spec: &GearSpec) -> Solid {
    Solid::external(
        "herringbone_gear",
        GEAR_LIBRARY,
        vec![
            ("modul", spec.module),
            ("tooth_number", spec.tooth_count as Real),
            ("width", spec.width),
            ("bore", spec.bore),
            ("helix_angle", spec.helix_angle),
        ],
    )
}
