//! Wavefront OBJ export of a single asteroid instance, for offline
//! inspection of generated geometry.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use regolith_field::AsteroidField;
use thiserror::Error;

/// Errors from OBJ export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("instance {instance} out of range for {count} instances")]
    InstanceOutOfRange { instance: u32, count: u32 },
    #[error("level {level} out of range for {count} levels")]
    LevelOutOfRange { level: u32, count: u32 },
    #[error("failed to write OBJ file")]
    Io(#[from] std::io::Error),
}

/// Write one instance at one LOD level as a Wavefront OBJ file.
pub fn write_obj(
    field: &AsteroidField,
    instance: u32,
    level: u32,
    path: &Path,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj_to(field, instance, level, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the OBJ text to any writer. Positions, UVs, and normals share one
/// index space, so faces reference the same 1-based index for all three.
pub fn write_obj_to(
    field: &AsteroidField,
    instance: u32,
    level: u32,
    writer: &mut impl Write,
) -> Result<(), ExportError> {
    if instance >= field.instance_count {
        return Err(ExportError::InstanceOutOfRange {
            instance,
            count: field.instance_count,
        });
    }
    if level >= field.level_count() {
        return Err(ExportError::LevelOutOfRange {
            level,
            count: field.level_count(),
        });
    }

    writeln!(writer, "o asteroid_{instance}_lod{level}")?;
    for p in field.instance_positions(instance) {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in field.instance_uvs(instance) {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for n in field.instance_normals(instance) {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in field.level_indices(level).chunks(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}
