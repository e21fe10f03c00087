//! Frame and fastener dimensions shared read-only by every part builder.

use crate::errors::Result;
use crate::float_types::Real;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Printed-in hardware sizes for one screw family. All values in mm, sized
/// for FDM printing (clearances already included).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ScrewHardware {
    /// Free-fit shaft clearance diameter.
    pub clearance: Real,
    /// Countersink pocket for the screw head.
    pub head_sink_height: Real,
    pub head_sink_diameter: Real,
    /// Hex nut recess, across flats.
    pub nut_width: Real,
    pub nut_depth: Real,
}

impl ScrewHardware {
    pub const fn m3() -> Self {
        Self {
            clearance: 3.4,
            head_sink_height: 2.5,
            head_sink_diameter: 6.2,
            nut_width: 5.7,
            nut_depth: 2.9,
        }
    }

    pub const fn m4() -> Self {
        Self {
            clearance: 4.5,
            head_sink_height: 4.0,
            head_sink_diameter: 7.3,
            nut_width: 7.0,
            nut_depth: 3.6,
        }
    }
}

/// The tumbler frame envelope and fastener tables. Immutable once built;
/// builders take this by reference so the mechanical fit between parts comes
/// from one place.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Frame length along the drum axis.
    pub depth: Real,
    /// Wall thickness of the structural panels.
    pub thickness: Real,
    pub height: Real,
    /// Base wall span between the two side panels.
    pub width: Real,
    /// Unthreaded support length under M3 countersinks in the base wall.
    pub m3_support_depth: Real,
    pub m3: ScrewHardware,
    pub m4: ScrewHardware,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            depth: 200.0,
            thickness: 20.0,
            height: 75.0,
            width: 240.0,
            m3_support_depth: 6.0,
            m3: ScrewHardware::m3(),
            m4: ScrewHardware::m4(),
        }
    }
}

impl Dimensions {
    /// Load overrides from a TOML file; missing top-level keys keep their
    /// defaults. Screw tables are replaced whole when present.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
