//! Binary on-disk format for distance-annotated meshes.
//!
//! The cache file layout is deliberately small and self-contained:
//!
//! ```text
//! BYTE[4]      - Magic "VDF1"
//! UINT8        - Format version (currently 1)
//! UINT8        - Flags (bit 0: per-vertex scalars present)
//! UINT32       - Vertex count
//! UINT32       - Face count
//! foreach vertex
//!     REAL64[3] - Position (x, y, z)
//! foreach vertex (if scalars flag set)
//!     REAL64    - Scalar value
//! foreach face
//!     UINT32[3] - Vertex indices
//! end
//! ```
//!
//! All multi-byte values are little-endian. The round-trip is exact: no
//! precision is lost on positions or scalars.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use viz_types::{IndexedMesh, Vertex};

use crate::error::{DistanceError, DistanceResult};

/// File magic identifying the distance-field format.
const MAGIC: [u8; 4] = *b"VDF1";

/// Current format version.
const VERSION: u8 = 1;

/// Flag bit: every vertex carries a scalar.
const FLAG_SCALARS: u8 = 0b0000_0001;

/// Serialize a mesh (with optional per-vertex scalars) to `path`.
///
/// Scalars are written only when every vertex carries one; a partially
/// annotated mesh is stored as positions and faces alone.
///
/// # Errors
///
/// Returns [`DistanceError::CacheWrite`] if the file cannot be created or
/// written.
#[allow(clippy::cast_possible_truncation)] // counts are bounded by u32 mesh indexing
pub fn write_field<P: AsRef<Path>>(path: P, mesh: &IndexedMesh) -> DistanceResult<()> {
    let path = path.as_ref();
    let write_err = |source| DistanceError::CacheWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    let has_scalars = mesh.has_scalars();
    let flags = if has_scalars { FLAG_SCALARS } else { 0 };

    let mut out = |bytes: &[u8]| writer.write_all(bytes).map_err(write_err);

    out(&MAGIC)?;
    out(&[VERSION, flags])?;
    out(&(mesh.vertex_count() as u32).to_le_bytes())?;
    out(&(mesh.face_count() as u32).to_le_bytes())?;

    for vertex in &mesh.vertices {
        out(&vertex.position.x.to_le_bytes())?;
        out(&vertex.position.y.to_le_bytes())?;
        out(&vertex.position.z.to_le_bytes())?;
    }

    if has_scalars {
        for vertex in &mesh.vertices {
            out(&vertex.scalar().unwrap_or(0.0).to_le_bytes())?;
        }
    }

    for face in &mesh.faces {
        for &index in face {
            out(&index.to_le_bytes())?;
        }
    }

    writer.flush().map_err(write_err)
}

/// Deserialize a mesh previously written by [`write_field`].
///
/// # Errors
///
/// Returns [`DistanceError::CacheRead`] if the file is missing, truncated,
/// carries the wrong magic or version, or references out-of-range vertex
/// indices.
pub fn read_field<P: AsRef<Path>>(path: P) -> DistanceResult<IndexedMesh> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| DistanceError::cache_read(path, e.to_string()))?;
    let mut reader = Decoder {
        inner: BufReader::new(file),
        path,
    };

    let magic = reader.bytes::<4>()?;
    if magic != MAGIC {
        return Err(DistanceError::cache_read(path, "bad magic"));
    }

    let [version, flags] = reader.bytes::<2>()?;
    if version != VERSION {
        return Err(DistanceError::cache_read(
            path,
            format!("unsupported format version {version}"),
        ));
    }
    let has_scalars = flags & FLAG_SCALARS != 0;

    let vertex_count = reader.u32()? as usize;
    let face_count = reader.u32()? as usize;

    let mut mesh = IndexedMesh::with_capacity(vertex_count, face_count);

    for _ in 0..vertex_count {
        let x = reader.f64()?;
        let y = reader.f64()?;
        let z = reader.f64()?;
        mesh.vertices.push(Vertex::from_coords(x, y, z));
    }

    if has_scalars {
        for vertex in &mut mesh.vertices {
            vertex.attributes.scalar = Some(reader.f64()?);
        }
    }

    for _ in 0..face_count {
        let i0 = reader.u32()?;
        let i1 = reader.u32()?;
        let i2 = reader.u32()?;
        for index in [i0, i1, i2] {
            if index as usize >= vertex_count {
                return Err(DistanceError::cache_read(
                    path,
                    format!("face index {index} out of range ({vertex_count} vertices)"),
                ));
            }
        }
        mesh.faces.push([i0, i1, i2]);
    }

    Ok(mesh)
}

/// Little-endian field reader mapping every failure to `CacheRead`.
struct Decoder<'a, R> {
    inner: R,
    path: &'a Path,
}

impl<R: Read> Decoder<'_, R> {
    fn bytes<const N: usize>(&mut self) -> DistanceResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| DistanceError::cache_read(self.path, e.to_string()))?;
        Ok(buf)
    }

    fn u32(&mut self) -> DistanceResult<u32> {
        Ok(u32::from_le_bytes(self.bytes::<4>()?))
    }

    fn f64(&mut self) -> DistanceResult<f64> {
        Ok(f64::from_le_bytes(self.bytes::<8>()?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use viz_types::unit_cube;

    fn annotated_cube() -> IndexedMesh {
        let mut cube = unit_cube();
        let scalars: Vec<f64> = (0..8).map(|i| f64::from(i) * 0.25).collect();
        assert!(cube.set_scalars(&scalars));
        cube
    }

    #[test]
    fn round_trip_with_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.vdf");

        let original = annotated_cube();
        write_field(&path, &original).unwrap();
        let restored = read_field(&path).unwrap();

        assert_eq!(restored.vertex_count(), original.vertex_count());
        assert_eq!(restored.faces, original.faces);
        for (r, o) in restored.vertices.iter().zip(&original.vertices) {
            assert_eq!(r.position, o.position);
            assert_eq!(r.scalar(), o.scalar());
        }
    }

    #[test]
    fn round_trip_without_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.vdf");

        let original = unit_cube();
        write_field(&path, &original).unwrap();
        let restored = read_field(&path).unwrap();

        assert_eq!(restored.faces, original.faces);
        assert!(!restored.has_scalars());
    }

    #[test]
    fn missing_file_is_cache_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_field(dir.path().join("absent.vdf"));
        assert!(matches!(err, Err(DistanceError::CacheRead { .. })));
    }

    #[test]
    fn zero_byte_file_is_cache_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.vdf");
        std::fs::write(&path, b"").unwrap();

        let err = read_field(&path);
        assert!(matches!(err, Err(DistanceError::CacheRead { .. })));
    }

    #[test]
    fn bad_magic_is_cache_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.vdf");
        std::fs::write(&path, b"NOPE\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00").unwrap();

        let err = read_field(&path);
        assert!(matches!(err, Err(DistanceError::CacheRead { .. })));
    }

    #[test]
    fn truncated_file_is_cache_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.vdf");

        write_field(&path, &annotated_cube()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let err = read_field(&path);
        assert!(matches!(err, Err(DistanceError::CacheRead { .. })));
    }

    #[test]
    fn out_of_range_face_index_is_cache_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rogue.vdf");

        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 99]);

        write_field(&path, &mesh).unwrap();
        let err = read_field(&path);
        assert!(matches!(err, Err(DistanceError::CacheRead { .. })));
    }
}
