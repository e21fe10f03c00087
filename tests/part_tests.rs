mod support;

use tumbler_cad::config::Dimensions;
use tumbler_cad::parts::{
    all_parts, basewall, big_hex_nut, roller, servo_gear, servo_mount, shaft_gear, sidewall,
    sidewall_clamp,
};
use tumbler_cad::solid::Solid;

#[test]
fn builders_are_deterministic() {
    let dims = Dimensions::default();
    assert_eq!(sidewall(&dims).unwrap(), sidewall(&dims).unwrap());
    assert_eq!(sidewall_clamp(&dims).unwrap(), sidewall_clamp(&dims).unwrap());
    assert_eq!(servo_mount(&dims).unwrap(), servo_mount(&dims).unwrap());
    assert_eq!(basewall(&dims, false).unwrap(), basewall(&dims, false).unwrap());
    assert_eq!(basewall(&dims, true).unwrap(), basewall(&dims, true).unwrap());
    assert_eq!(roller().unwrap(), roller().unwrap());
    assert_eq!(servo_gear().unwrap(), servo_gear().unwrap());
    assert_eq!(shaft_gear().unwrap(), shaft_gear().unwrap());
}

#[test]
fn sidewall_envelope_matches_frame() {
    let dims = Dimensions::default();
    let b = sidewall(&dims).unwrap().bounding_box().unwrap();
    // Chamfered on y and z only; the ends stay flush for the basewall butt joint.
    assert_eq!((b.mins.x, b.maxs.x), (0.0, dims.depth));
    assert_eq!((b.mins.y, b.maxs.y), (-1.0, dims.thickness + 1.0));
    assert_eq!((b.mins.z, b.maxs.z), (-1.0, dims.height + 1.0));
}

#[test]
fn basewall_passive_mirrors_across_x() {
    let dims = Dimensions::default();
    let active = basewall(&dims, false).unwrap().bounding_box().unwrap();
    let passive = basewall(&dims, true).unwrap().bounding_box().unwrap();
    assert!(support::approx_eq(passive.mins.x, -active.maxs.x, 1e-9));
    assert!(support::approx_eq(passive.maxs.x, -active.mins.x, 1e-9));
    assert_eq!((passive.mins.y, passive.maxs.y), (active.mins.y, active.maxs.y));
    assert_eq!((passive.mins.z, passive.maxs.z), (active.mins.z, active.maxs.z));
}

#[test]
fn basewall_passive_wraps_a_mirror() {
    let dims = Dimensions::default();
    match basewall(&dims, true).unwrap() {
        Solid::Mirror { normal, .. } => assert_eq!(normal, nalgebra::Vector3::x()),
        other => panic!("expected mirrored wall, got {other:?}"),
    }
}

#[test]
fn roller_fits_under_the_drum() {
    let b = roller().unwrap().bounding_box().unwrap();
    let rim = 31.75 / 2.0 + 3.175 / 2.0 - 0.8;
    assert!(support::approx_eq(b.maxs.x, rim, 1e-9));
    assert!(support::approx_eq(b.mins.x, -rim, 1e-9));
    // Mirrored downward from z=0.
    assert!(support::approx_eq(b.maxs.z, 0.0, 1e-9));
    assert!(support::approx_eq(b.mins.z, -13.0, 1e-9));
}

#[test]
fn big_hex_nut_across_flats() {
    let nut = big_hex_nut().unwrap();
    for k in 0..3 {
        let angle = (30.0 + 60.0 * k as f64).to_radians();
        let normal = nalgebra::Vector3::new(angle.cos(), angle.sin(), 0.0);
        assert!(support::approx_eq(support::extent(&nut, normal), 23.6, 1e-9));
    }
    assert!(support::approx_eq(
        support::extent(&nut, nalgebra::Vector3::z()),
        9.7,
        1e-9
    ));
}

#[test]
fn catalog_covers_the_assembly() {
    let dims = Dimensions::default();
    let parts = all_parts(&dims).unwrap();
    let names: Vec<_> = parts.iter().map(|p| p.name).collect();
    for expected in [
        "sidewall",
        "sidewall_clamp",
        "basewall",
        "basewall_passive",
        "servo_mount",
        "roller",
        "big_hex_nut",
        "servo_gear",
        "shaft_gear",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    for part in &parts {
        assert!(!part.solid.to_scad().is_empty());
        assert!(part.quantity >= 1);
    }
}

#[test]
fn only_gear_parts_import_the_gear_library() {
    let dims = Dimensions::default();
    for part in all_parts(&dims).unwrap() {
        let uses_gears = part.solid.libraries().contains("gears.scad");
        let is_gear = part.name.ends_with("_gear");
        assert_eq!(uses_gears, is_gear, "part {}", part.name);
    }
}
