use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use tumbler_cad::config::Dimensions;
use tumbler_cad::parts::all_parts;
use tumbler_cad::render::Renderer;
use tumbler_cad::solid::scad::DEFAULT_SEGMENTS;

#[derive(Debug, Parser)]
/// Generate the tumbler assembly's printable parts as STL meshes through the
/// OpenSCAD renderer.
struct Args {
    /// Part names to process; all parts when omitted (see --list).
    parts: Vec<String>,

    /// Directory the .scad and .stl files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Curve tessellation resolution ($fn).
    #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
    segments: u32,

    /// Path to the OpenSCAD binary.
    #[arg(long, default_value = "openscad")]
    openscad: PathBuf,

    /// TOML file overriding the default frame dimensions.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the OpenSCAD documents only; skip rendering.
    #[arg(long)]
    scad_only: bool,

    /// List the part catalog and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = filter::Targets::new().with_target("tumbler_cad", LevelFilter::DEBUG);
    tracing_subscriber::registry()
        .with(log_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let dims = match &args.config {
        Some(path) => Dimensions::from_toml_file(path)
            .with_context(|| format!("loading dimensions from {}", path.display()))?,
        None => Dimensions::default(),
    };

    let catalog = all_parts(&dims)?;
    if args.list {
        for part in &catalog {
            println!("{} ({}x)", part.name, part.quantity);
        }
        return Ok(());
    }

    let selected: Vec<_> = if args.parts.is_empty() {
        catalog.iter().collect()
    } else {
        let mut selected = Vec::new();
        for name in &args.parts {
            match catalog.iter().find(|part| part.name == *name) {
                Some(part) => selected.push(part),
                None => bail!("unknown part `{name}`; try --list"),
            }
        }
        selected
    };

    std::fs::create_dir_all(&args.out_dir)?;
    let renderer = Renderer::new(&args.out_dir)
        .with_openscad(&args.openscad)
        .with_segments(args.segments);

    for part in selected {
        if args.scad_only {
            let path = args.out_dir.join(format!("{}.scad", part.file_stem()));
            renderer.write_scad(part, &path)?;
            println!("wrote {}", path.display());
        } else {
            print!("rendering {}.stl...", part.file_stem());
            stdout().flush()?;
            renderer
                .render(part)
                .with_context(|| format!("rendering {}", part.name))?;
            println!("complete!");
        }
    }
    println!("done");
    Ok(())
}
