//! A parametric **Constructive Solid Geometry (CSG)** generator for a rotating-drum
//! tumbler assembly: side panels, clamping panels, base walls, a servo mount,
//! herringbone gears, and rollers.
//!
//! Parts are built as immutable [`Solid`] operation trees (primitives, transforms,
//! Boolean combinators), serialized to OpenSCAD source tagged with a tessellation
//! resolution, and rasterized into STL meshes by invoking the external `openscad`
//! renderer.
//!
//! ```no_run
//! use tumbler_cad::{config::Dimensions, parts, render::Renderer};
//!
//! let dims = Dimensions::default();
//! let renderer = Renderer::new("stl");
//! for part in parts::all_parts(&dims).unwrap() {
//!     renderer.render(&part).unwrap();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod gears;
pub mod parts;
pub mod render;
pub mod shapes;
pub mod solid;

pub use errors::{Error, Result};
pub use solid::Solid;
