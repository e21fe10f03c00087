//! Export driver: serialize a part and rasterize it through the external
//! `openscad` renderer.

use crate::errors::{Error, Result};
use crate::parts::Part;
use crate::solid::scad::{DEFAULT_SEGMENTS, ScadDocument};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Invokes the external OpenSCAD renderer once per part. Synchronous: each
/// render blocks until the renderer exits, and a failed exit status is an
/// error rather than being ignored.
#[derive(Clone, Debug)]
pub struct Renderer {
    openscad: PathBuf,
    segments: u32,
    output_dir: PathBuf,
}

impl Renderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            openscad: PathBuf::from("openscad"),
            segments: DEFAULT_SEGMENTS,
            output_dir: output_dir.into(),
        }
    }

    /// Override the renderer binary (default: `openscad` on PATH).
    pub fn with_openscad(mut self, program: impl Into<PathBuf>) -> Self {
        self.openscad = program.into();
        self
    }

    /// Override the `$fn` tessellation resolution.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Serialize `part` to an OpenSCAD document at `path`, replacing any
    /// previous contents.
    pub fn write_scad(&self, part: &Part, path: &Path) -> Result<()> {
        let source = ScadDocument::new(&part.solid, self.segments).to_source();
        debug!(part = part.name, path = %path.display(), bytes = source.len(), "writing scad");
        fs::write(path, source)?;
        Ok(())
    }

    /// Render one part to `<output_dir>/<stem>.stl` via an intermediate
    /// `tmp.scad`, overwritten on every export. Returns the mesh path.
    pub fn render(&self, part: &Part) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let scad_path = self.output_dir.join("tmp.scad");
        let stl_path = self.output_dir.join(format!("{}.stl", part.file_stem()));
        self.write_scad(part, &scad_path)?;

        debug!(part = part.name, renderer = %self.openscad.display(), "invoking renderer");
        let output = Command::new(&self.openscad)
            .arg("-q")
            .arg("-o")
            .arg(&stl_path)
            .arg(&scad_path)
            .output()
            .map_err(|source| Error::RendererSpawn {
                program: self.openscad.display().to_string(),
                source,
            })?;
        if !output.status.success() {
            return Err(Error::RendererFailed {
                status: output.status,
                output: stl_path,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let triangles = verify_mesh(&stl_path)?;
        info!(part = part.name, triangles, path = %stl_path.display(), "rendered");
        Ok(stl_path)
    }
}

/// Read the mesh back and confirm it actually contains triangles; OpenSCAD
/// exits zero even when the tree evaluates to nothing.
fn verify_mesh(path: &Path) -> Result<usize> {
    let mut file = File::open(path)?;
    let mesh = stl_io::read_stl(&mut file)?;
    if mesh.faces.is_empty() {
        return Err(Error::EmptyMesh { output: path.to_path_buf() });
    }
    Ok(mesh.faces.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::parts;

    #[test]
    fn write_scad_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmp.scad");
        let dims = Dimensions::default();
        let part = parts::Part::new("sidewall", 2, parts::sidewall(&dims).unwrap());
        let renderer = Renderer::new(dir.path());

        renderer.write_scad(&part, &path).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        renderer.write_scad(&part, &path).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("$fn").count(), 1);
    }

    #[test]
    fn segments_override_lands_in_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmp.scad");
        let part = parts::Part::new("nut", 1, parts::big_hex_nut().unwrap());
        let renderer = Renderer::new(dir.path()).with_segments(96);
        renderer.write_scad(&part, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("$fn = 96;\n"));
    }

    #[test]
    fn missing_renderer_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let part = parts::Part::new("nut", 1, parts::big_hex_nut().unwrap());
        let renderer = Renderer::new(dir.path()).with_openscad("definitely-not-openscad");
        assert!(matches!(
            renderer.render(&part),
            Err(Error::RendererSpawn { .. })
        ));
    }
}
