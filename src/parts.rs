//! Builders for each printable part of the tumbler assembly.
//!
//! Every builder is a pure function of the shared [`Dimensions`]: the same
//! configuration always yields an identical operation tree.

use crate::config::Dimensions;
use crate::errors::Result;
use crate::float_types::Real;
use crate::gears::{self, GearSpec};
use crate::shapes::{AxisChamfer, ChamferAxes, HeatSetInsert, chamfer_hull, hex_prism};
use crate::solid::Solid;
use nalgebra::Vector3;

/// Chamfer distance on every beveled panel edge.
const CHAMFER: Real = 1.0;
/// Corner rounding on hex nut recesses.
const NUT_FILLET: Real = 0.1;

/// Threaded rod the drum rides on.
const ROD_DIAMETER: Real = 15.2;
/// The large rod nut: across flats / thickness.
const ROD_NUT_WIDTH: Real = 23.6;
const ROD_NUT_DEPTH: Real = 9.7;

// Drive-train layout along the base wall.
const SERVO_OFFSET: Real = 75.0;
const SERVO_VERTICAL_OFFSET: Real = 8.0;
/// Servo output shaft height above the mount pocket origin.
const SERVO_SHAFT_OFFSET: Real = 9.7;
/// Center distance between the meshed servo and shaft gears.
const GEAR_SPACING: Real = 50.0;
/// Lean of the gear train off horizontal, radians.
const GEAR_ANGLE: Real = 0.75;

pub const SERVO_GEAR: GearSpec = GearSpec {
    module: 1.0,
    tooth_count: 25,
    width: 11.0,
    bore: 8.0,
    helix_angle: 35.0,
};

pub const SHAFT_GEAR: GearSpec = GearSpec {
    module: 1.0,
    tooth_count: 75,
    width: 11.0,
    bore: ROD_DIAMETER,
    helix_angle: -35.0,
};

/// M3 heat-set insert cavity.
fn m3_heatset_insert() -> HeatSetInsert {
    HeatSetInsert::new(5.3, 6.4, 3.5, 2.5)
}

/// 2-56 heat-set insert cavity, with a through-channel for screwdriver
/// access and for pushing the insert into place during assembly.
fn screw_2_56_insert() -> HeatSetInsert {
    HeatSetInsert::new(3.175, 4.7752, 2.5, 3.0).with_negative(100.0, Some(4.0))
}

/// Side panel: chamfered slab with three M3 insert cavities on each
/// vertical end at quarter-height spacing.
pub fn sidewall(dims: &Dimensions) -> Result<Solid> {
    let axes = ChamferAxes {
        y: AxisChamfer::Both,
        z: AxisChamfer::Both,
        ..ChamferAxes::default()
    };
    let mut body = chamfer_hull(
        &axes,
        CHAMFER,
        Solid::cube(dims.depth, dims.thickness, dims.height),
    );
    let insert = m3_heatset_insert().cavity()?.rotate(0.0, 90.0, 0.0);
    for i in 1..4 {
        let z = dims.height / 4.0 * i as Real;
        body = body - insert.clone().translate(0.0, dims.thickness / 2.0, z);
        body = body
            - insert
                .clone()
                .rotate(0.0, 0.0, 180.0)
                .translate(dims.depth, dims.thickness / 2.0, z);
    }
    Ok(body)
}

/// Side panel that clamps a wood beam (19.5mm wide, 38.6mm tall): the
/// sidewall mounting interface plus a hulled clamp arm, the beam cavity,
/// and three nut-and-screw captures that pinch the beam.
pub fn sidewall_clamp(dims: &Dimensions) -> Result<Solid> {
    let panel_axes = ChamferAxes {
        y: AxisChamfer::Both,
        z: AxisChamfer::Both,
        ..ChamferAxes::default()
    };
    let arm_axes = ChamferAxes {
        x: AxisChamfer::Directions(vec![1.0]),
        y: AxisChamfer::Both,
        z: AxisChamfer::Both,
    };
    let mut body = chamfer_hull(
        &panel_axes,
        CHAMFER,
        Solid::cube(20.0, dims.thickness, dims.height),
    );
    body = body
        + chamfer_hull(
            &arm_axes,
            CHAMFER,
            Solid::cube(1.0, dims.thickness, dims.height).translate(19.0, 0.0, 0.0)
                + Solid::cube(10.0, dims.thickness * 1.5, 45.0).translate(
                    50.0,
                    -dims.thickness * 0.25,
                    0.0,
                ),
        );
    body = body - Solid::cube(100.0, 19.5, 38.6).translate(20.0, 0.0, 5.0);

    let insert = m3_heatset_insert().cavity()?.rotate(0.0, 90.0, 0.0);
    for i in 1..4 {
        let z = dims.height / 4.0 * i as Real;
        body = body - insert.clone().translate(0.0, dims.thickness / 2.0, z);
        body = body
            - insert
                .clone()
                .rotate(0.0, 0.0, 180.0)
                .translate(dims.depth, dims.thickness / 2.0, z);
    }

    let m3 = &dims.m3;
    let nut_recess = hex_prism(m3.nut_width, m3.nut_depth, NUT_FILLET)?
        .rotate(90.0, 30.0, 0.0)
        .translate(54.0, -5.0, 15.0);
    let screw_recess = Solid::cylinder(m3.head_sink_diameter / 2.0, m3.nut_depth)
        .rotate(90.0, 0.0, 0.0)
        .translate(54.0, 22.4 + 5.0, 15.0);
    let screw_hole = Solid::cylinder(m3.clearance / 2.0, 100.0)
        .rotate(90.0, 0.0, 0.0)
        .translate(54.0, 22.4 + 10.0, 15.0);
    let screw_capture = nut_recess + screw_recess + screw_hole;
    for (x, z) in [(0.0, 0.0), (0.0, 17.0), (17.0 / 2.0, 17.0 / 2.0)] {
        body = body - screw_capture.clone().translate(-x, 0.0, z);
    }
    Ok(body)
}

/// Servo pocket block, rounded by a small minkowski cube, with the four M3
/// insert cavities around the pocket and two cable-route channels.
///
/// Doubles as the cavity subtracted from the active [`basewall`]:
/// subtracting it removes both the pocket and the insert volumes.
pub fn servo_mount(dims: &Dimensions) -> Result<Solid> {
    let mut body = Solid::cube(dims.thickness + 2.0, 19.9, 40.5)
        .translate(0.0, -19.9 / 2.0, 0.0)
        .minkowski(Solid::cube(0.5, 0.5, 0.5));
    // Servo tabs span 55.35mm, the body 40.4mm; the mounting holes sit on a
    // 10 x 48.7mm grid around the pocket.
    let insert = m3_heatset_insert().cavity()?.rotate(0.0, 90.0, 0.0);
    for y in [-5.0, 5.0] {
        for z in [48.7 / 2.0, -48.7 / 2.0] {
            body = body + insert.clone().translate(0.0, y, z + 40.5 / 2.0);
        }
    }
    // Cable route out the bottom of the pocket.
    body = body
        + Solid::cube_centered(dims.thickness + 2.0, 7.0, 1.0).translate(
            dims.thickness / 2.0 + 1.0,
            0.0,
            -0.5,
        );
    body = body
        + Solid::cube_centered(12.0, 7.0, 4.0).translate(
            dims.thickness / 2.0 + 1.0 + 5.5,
            0.0,
            -2.0,
        );
    Ok(body)
}

/// Base wall: chamfered panel with six countersunk M3 screw holes, four
/// shaft-bearing hole clusters spaced for the gear train, and (unless
/// `passive`) the servo-mount cavity. The passive wall for the far side of
/// the assembly is the mirror image across X.
pub fn basewall(dims: &Dimensions, passive: bool) -> Result<Solid> {
    let axes = ChamferAxes {
        x: AxisChamfer::Directions(vec![-1.0]),
        y: AxisChamfer::Both,
        z: AxisChamfer::Both,
    };
    let mut body = chamfer_hull(
        &axes,
        CHAMFER,
        Solid::cube(dims.thickness, dims.width, dims.height),
    );

    let m3 = &dims.m3;
    let m3_hole = (Solid::cylinder(m3.clearance / 2.0, dims.m3_support_depth)
        + Solid::cylinder(
            m3.head_sink_diameter / 2.0,
            dims.thickness + 2.0 - dims.m3_support_depth,
        )
        .translate(0.0, 0.0, dims.m3_support_depth))
    .rotate(0.0, -90.0, 0.0)
    .translate(dims.thickness + 1.0, 0.0, 0.0);
    for i in 1..4 {
        let z = dims.height / 4.0 * i as Real;
        body = body - m3_hole.clone().translate(0.0, dims.thickness / 2.0, z);
        body = body
            - m3_hole
                .clone()
                .translate(0.0, dims.width - dims.thickness / 2.0, z);
    }

    // Bearing seat, rod bore, and four anti-rotation pin holes.
    let mut shaft_hole = Solid::cylinder(39.0 / 2.0 + 0.05, 10.0)
        + Solid::cylinder(ROD_DIAMETER / 2.0 + 0.3, dims.thickness + 2.0);
    for angle in [0.0, 90.0, 180.0, 270.0] {
        shaft_hole = shaft_hole
            + Solid::cylinder(2.0, dims.thickness + 2.0)
                .translate(19.5, 0.0, 0.0)
                .rotate(0.0, 0.0, angle);
    }
    let shaft_hole = shaft_hole.rotate(0.0, -90.0, 0.0);

    let shaft_z = SERVO_VERTICAL_OFFSET + SERVO_SHAFT_OFFSET + GEAR_SPACING * GEAR_ANGLE.sin();
    let driven_offset = SERVO_OFFSET - GEAR_SPACING * GEAR_ANGLE.cos();
    for offset in [driven_offset, 110.0, 155.0, 200.0] {
        body = body - shaft_hole.clone().translate(dims.thickness + 1.0, offset, shaft_z);
    }

    if !passive {
        body = body - servo_mount(dims)?.translate(-1.0, SERVO_OFFSET, SERVO_VERTICAL_OFFSET);
    }
    Ok(if passive { body.mirror(Vector3::x()) } else { body })
}

/// Blank for the large rod nut, also printed standalone to be merged with a
/// bearing in the slicer for the mating mount.
pub fn big_hex_nut() -> Result<Solid> {
    hex_prism(ROD_NUT_WIDTH, ROD_NUT_DEPTH, NUT_FILLET)
}

/// Drum support roller: a disk with the rod nut recess, an O-ring groove at
/// half height, and the rod bore.
pub fn roller() -> Result<Solid> {
    let radius = 31.75 / 2.0;
    let oring = 3.175;
    let groove = Solid::circle(oring)
        .translate(radius + oring / 2.0, 0.0, 0.0)
        .rotate_extrude(360.0);
    let body = Solid::cylinder(radius + oring / 2.0 - 0.8, 13.0)
        - big_hex_nut()?
        - groove.translate(0.0, 0.0, 6.5)
        - Solid::cylinder(ROD_DIAMETER / 2.0 + 0.1, 13.0);
    Ok(body.mirror(Vector3::z()))
}

/// Small herringbone gear on the servo horn, with four 2-56 insert cavities
/// at 90 degree spacing.
pub fn servo_gear() -> Result<Solid> {
    let mut gear = gears::herringbone_gear(&SERVO_GEAR);
    let insert = screw_2_56_insert()
        .cavity()?
        .translate(15.0 / 2.0, 0.0, -11.0)
        .mirror(Vector3::z());
    for angle in [0.0, 90.0, 180.0, 270.0] {
        gear = gear - insert.clone().rotate(0.0, 0.0, angle);
    }
    Ok(gear)
}

/// Large herringbone gear on the drum rod: gear plus hub, minus the rod nut
/// recess and the rod bore.
pub fn shaft_gear() -> Result<Solid> {
    Ok(gears::herringbone_gear(&SHAFT_GEAR) + Solid::cylinder(15.0, 10.0)
        - big_hex_nut()?.translate(0.0, 0.0, 11.0 - 9.68)
        - Solid::cylinder(ROD_DIAMETER / 2.0, 11.0))
}

/// One printable component and how many of it the assembly needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub quantity: u32,
    pub solid: Solid,
}

impl Part {
    pub fn new(name: &'static str, quantity: u32, solid: Solid) -> Self {
        Self { name, quantity, solid }
    }

    /// Output file stem in the `4x_sidewall_clamp` convention.
    pub fn file_stem(&self) -> String {
        format!("{}x_{}", self.quantity, self.name)
    }
}

/// The full print catalog.
pub fn all_parts(dims: &Dimensions) -> Result<Vec<Part>> {
    Ok(vec![
        Part::new("sidewall_clamp", 4, sidewall_clamp(dims)?),
        Part::new("sidewall", 2, sidewall(dims)?),
        Part::new("basewall", 1, basewall(dims, false)?),
        Part::new("basewall_passive", 1, basewall(dims, true)?),
        Part::new("servo_mount", 1, servo_mount(dims)?),
        Part::new("roller", 4, roller()?),
        Part::new("big_hex_nut", 4, big_hex_nut()?),
        Part::new("servo_gear", 1, servo_gear()?),
        Part::new("shaft_gear", 1, shaft_gear()?),
    ])
}
