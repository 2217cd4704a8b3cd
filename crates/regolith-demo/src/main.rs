//! Generates an asteroid field from the command line and reports buffer
//! statistics; optionally exports one instance as a Wavefront OBJ.
//!
//! Run with `cargo run -p regolith-demo -- --instances 100 --levels 3`.

mod obj;

use std::path::PathBuf;

use clap::Parser;
use regolith_field::{AsteroidField, FieldParams};
use regolith_render::package_instance;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(about = "Procedural asteroid field generator")]
struct Args {
    /// Number of asteroid instances to generate.
    #[arg(long, default_value_t = 100)]
    instances: u32,

    /// Number of geosphere subdivision levels.
    #[arg(long, default_value_t = 3)]
    levels: u32,

    /// RNG seed; the same seed reproduces the same field bit for bit.
    #[arg(long, default_value_t = 100)]
    seed: u64,

    /// Generate on a single thread instead of one worker per CPU.
    #[arg(long)]
    serial: bool,

    /// Write this instance as a Wavefront OBJ (requires --obj-out).
    #[arg(long, default_value_t = 0)]
    obj_instance: u32,

    /// LOD level used for the OBJ export (defaults to the finest level).
    #[arg(long)]
    obj_level: Option<u32>,

    /// Path of the OBJ file to write.
    #[arg(long)]
    obj_out: Option<PathBuf>,
}

fn main() {
    regolith_log::init_logging();
    let args = Args::parse();

    let params = FieldParams::new(args.instances, args.levels, args.seed);
    let field = if args.serial {
        AsteroidField::generate(&params)
    } else {
        AsteroidField::generate_parallel(&params)
    };

    for level in 0..field.level_count() {
        info!(
            level,
            triangles = field.level_indices(level).len() / 3,
            "lod variant"
        );
    }

    if field.instance_count > 0 {
        let finest = field.level_count() - 1;
        let sample = package_instance(&field, 0, finest);
        info!(
            vertex_bytes = sample.vertex_bytes().len(),
            index_bytes = sample.index_bytes().len(),
            triangles = sample.triangle_count(),
            "per-instance upload size at the finest lod"
        );
    }

    if let Some(path) = args.obj_out {
        let level = args.obj_level.unwrap_or(field.level_count() - 1);
        match obj::write_obj(&field, args.obj_instance, level, &path) {
            Ok(()) => info!(path = %path.display(), "obj written"),
            Err(e) => {
                error!(error = %e, "obj export failed");
                std::process::exit(1);
            }
        }
    }
}
