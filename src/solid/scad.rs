//! Serialization of `Solid` trees into OpenSCAD source.

use crate::float_types::Real;
use crate::solid::Solid;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Default curve tessellation resolution (`$fn`).
pub const DEFAULT_SEGMENTS: u32 = 48;

/// Fixed-point with trailing zeros trimmed, so computed dimensions like
/// `15.2/2 + 0.3` do not serialize with float noise.
fn fmt_real(v: Real) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn fmt_vector(v: &nalgebra::Vector3<Real>) -> String {
    format!("[{}, {}, {}]", fmt_real(v.x), fmt_real(v.y), fmt_real(v.z))
}

impl Solid {
    /// The serialized operation tree, without the document header.
    pub fn to_scad(&self) -> String {
        let mut out = String::new();
        self.write_scad(&mut out, 0);
        out
    }

    /// Every external library the tree calls into.
    pub fn libraries(&self) -> BTreeSet<&'static str> {
        let mut libs = BTreeSet::new();
        self.collect_libraries(&mut libs);
        libs
    }

    fn collect_libraries(&self, libs: &mut BTreeSet<&'static str>) {
        match self {
            Solid::External { library, .. } => {
                libs.insert(library);
            }
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Mirror { child, .. }
            | Solid::RotateExtrude { child, .. } => child.collect_libraries(libs),
            Solid::Union(children)
            | Solid::Difference(children)
            | Solid::Hull(children)
            | Solid::Minkowski(children) => {
                for child in children {
                    child.collect_libraries(libs);
                }
            }
            Solid::Cube { .. } | Solid::Cylinder { .. } | Solid::Circle { .. } => {}
        }
    }

    fn write_scad(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Solid::Cube { size, center } => {
                if *center {
                    let _ = writeln!(out, "{pad}cube({}, center = true);", fmt_vector(size));
                } else {
                    let _ = writeln!(out, "{pad}cube({});", fmt_vector(size));
                }
            }
            Solid::Cylinder { h, r1, r2 } => {
                if r1 == r2 {
                    let _ = writeln!(
                        out,
                        "{pad}cylinder(h = {}, r = {});",
                        fmt_real(*h),
                        fmt_real(*r1)
                    );
                } else {
                    let _ = writeln!(
                        out,
                        "{pad}cylinder(h = {}, r1 = {}, r2 = {});",
                        fmt_real(*h),
                        fmt_real(*r1),
                        fmt_real(*r2)
                    );
                }
            }
            Solid::Circle { diameter } => {
                let _ = writeln!(out, "{pad}circle(d = {});", fmt_real(*diameter));
            }
            Solid::Translate { offset, child } => {
                let _ = writeln!(out, "{pad}translate({}) {{", fmt_vector(offset));
                child.write_scad(out, depth + 1);
                let _ = writeln!(out, "{pad}}}");
            }
            Solid::Rotate { degrees, child } => {
                let _ = writeln!(out, "{pad}rotate({}) {{", fmt_vector(degrees));
                child.write_scad(out, depth + 1);
                let _ = writeln!(out, "{pad}}}");
            }
            Solid::Mirror { normal, child } => {
                let _ = writeln!(out, "{pad}mirror({}) {{", fmt_vector(normal));
                child.write_scad(out, depth + 1);
                let _ = writeln!(out, "{pad}}}");
            }
            Solid::RotateExtrude { angle, child } => {
                let _ = writeln!(out, "{pad}rotate_extrude(angle = {}) {{", fmt_real(*angle));
                child.write_scad(out, depth + 1);
                let _ = writeln!(out, "{pad}}}");
            }
            Solid::Union(children) => Self::write_block(out, depth, "union", children),
            Solid::Difference(children) => Self::write_block(out, depth, "difference", children),
            Solid::Hull(children) => Self::write_block(out, depth, "hull", children),
            Solid::Minkowski(children) => Self::write_block(out, depth, "minkowski", children),
            Solid::External { module, args, .. } => {
                let args = args
                    .iter()
                    .map(|(name, value)| format!("{name} = {}", fmt_real(*value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(out, "{pad}{module}({args});");
            }
        }
    }

    fn write_block(out: &mut String, depth: usize, op: &str, children: &[Solid]) {
        let pad = "  ".repeat(depth);
        let _ = writeln!(out, "{pad}{op}() {{");
        for child in children {
            child.write_scad(out, depth + 1);
        }
        let _ = writeln!(out, "{pad}}}");
    }
}

/// A complete OpenSCAD document: tessellation directive, library imports,
/// then the serialized tree.
pub struct ScadDocument<'a> {
    solid: &'a Solid,
    segments: u32,
}

impl<'a> ScadDocument<'a> {
    pub fn new(solid: &'a Solid, segments: u32) -> Self {
        Self { solid, segments }
    }

    pub fn to_source(&self) -> String {
        let mut out = format!("$fn = {};\n", self.segments);
        for library in self.solid.libraries() {
            let _ = writeln!(out, "use <{library}>;");
        }
        out.push_str(&self.solid.to_scad());
        out
    }
}
