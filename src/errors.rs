//! Validation and renderer errors

use crate::float_types::Real;
use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All the ways geometry construction or mesh export can fail
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: Real },

    /// A fillet radius large enough to consume the shape it rounds
    #[error("fillet radius {fillet} must be below half the flat-to-flat width {width}")]
    FilletTooLarge { fillet: Real, width: Real },

    /// The taper pinches the cavity closed before reaching full depth
    #[error(
        "heat-set taper of {angle_degrees} deg over {depth}mm leaves a bottom radius of {bottom_radius}mm"
    )]
    DegenerateTaper {
        angle_degrees: Real,
        depth: Real,
        bottom_radius: Real,
    },

    /// The external renderer binary could not be started at all
    #[error("failed to launch renderer `{program}`: {source}")]
    RendererSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external renderer ran but reported failure
    #[error("renderer exited with {status} while rasterizing {output:?}: {stderr}")]
    RendererFailed {
        status: ExitStatus,
        output: PathBuf,
        stderr: String,
    },

    /// The renderer claimed success but the mesh contains no triangles
    #[error("renderer produced an empty mesh at {output:?}")]
    EmptyMesh { output: PathBuf },

    /// A dimensions override file that does not parse
    #[error("invalid dimensions file: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
