//! DGtal-style `.vol` volumes as 3D label fields.
//!
//! A `.vol` file is a text header of `Key: value` lines closed by a line
//! holding a single `.`, followed by one byte per voxel with `X` varying
//! fastest and `Z` slowest. That is exactly lexicographic point order for a
//! domain with extents `[Z, Y, X]`, so the raster maps onto a
//! [`LabelField`] without reordering.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use frontier_core::{LabelField, OUTSIDE};
use frontier_space::GridDomain;

use crate::error::IoError;

const FORMAT: &str = "vol";

/// Byte written for foreground voxels.
pub const FOREGROUND: u8 = 255;

/// Header fields this crate reads back. Other keys are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Header {
    x: Option<u32>,
    y: Option<u32>,
    z: Option<u32>,
    voxel_size: Option<u32>,
}

fn parse_value(key: &str, value: &str) -> Result<u32, IoError> {
    value
        .trim()
        .parse()
        .map_err(|_| IoError::malformed(FORMAT, format!("{key} is not a number: {value:?}")))
}

/// Decode a `.vol` volume. Voxel values are kept as raw labels.
pub fn read_vol<R: Read>(mut reader: R) -> Result<(GridDomain, LabelField), IoError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut header = Header::default();
    let mut pos = 0;
    let mut lines = 0usize;
    loop {
        let end = bytes[pos..]
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| pos + i)
            .ok_or_else(|| IoError::malformed(FORMAT, "header is not closed by '.'"))?;
        let line = String::from_utf8_lossy(&bytes[pos..end]);
        let line = line.trim_end_matches('\r');
        pos = end + 1;
        if line == "." {
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            if lines == 0 {
                return Err(IoError::InvalidMagic {
                    expected: "vol header",
                    found: line.chars().take(16).collect(),
                });
            }
            return Err(IoError::malformed(FORMAT, format!("bad header line {line:?}")));
        };
        lines += 1;
        match key.trim() {
            "X" => header.x = Some(parse_value("X", value)?),
            "Y" => header.y = Some(parse_value("Y", value)?),
            "Z" => header.z = Some(parse_value("Z", value)?),
            "Voxel-Size" => header.voxel_size = Some(parse_value("Voxel-Size", value)?),
            _ => {}
        }
    }

    let missing = |key: &str| IoError::malformed(FORMAT, format!("header lacks {key}"));
    let x = header.x.ok_or_else(|| missing("X"))?;
    let y = header.y.ok_or_else(|| missing("Y"))?;
    let z = header.z.ok_or_else(|| missing("Z"))?;
    if let Some(size) = header.voxel_size.filter(|&s| s != 1) {
        tracing::warn!(voxel_size = size, "only unit voxels are stored; reading raw bytes");
    }

    let domain = GridDomain::with_extents(&[z, y, x])?;
    let raster = &bytes[pos..];
    if raster.len() < domain.len() {
        return Err(IoError::malformed(
            FORMAT,
            format!("raster truncated: {} of {} bytes", raster.len(), domain.len()),
        ));
    }
    let labels = LabelField::from_vec(raster[..domain.len()].to_vec())?;
    tracing::debug!(x, y, z, "decoded vol volume");
    Ok((domain, labels))
}

/// Open and decode a `.vol` file.
pub fn read_vol_file(path: impl AsRef<Path>) -> Result<(GridDomain, LabelField), IoError> {
    read_vol(BufReader::new(File::open(path)?))
}

fn check_volume(domain: &GridDomain, labels: &LabelField) -> Result<(), IoError> {
    if domain.ndim() != 3 {
        return Err(IoError::Dimension {
            format: FORMAT,
            expected: 3,
            actual: domain.ndim(),
        });
    }
    labels.check_len(domain.len())?;
    Ok(())
}

/// Encode a 3D label field; the foreground is written as [`FOREGROUND`].
pub fn write_vol<W: Write>(
    mut writer: W,
    domain: &GridDomain,
    labels: &LabelField,
) -> Result<(), IoError> {
    check_volume(domain, labels)?;
    let ext = domain.extents();
    writeln!(writer, "Center-X: {}", ext[2] / 2)?;
    writeln!(writer, "Center-Y: {}", ext[1] / 2)?;
    writeln!(writer, "Center-Z: {}", ext[0] / 2)?;
    writeln!(writer, "X: {}", ext[2])?;
    writeln!(writer, "Y: {}", ext[1])?;
    writeln!(writer, "Z: {}", ext[0])?;
    writeln!(writer, "Voxel-Size: 1")?;
    writeln!(writer, "Alpha-Color: 0")?;
    writeln!(writer, "Voxel-Endian: 0")?;
    writeln!(writer, "Int-Endian: 0123")?;
    writeln!(writer, "Version: 2")?;
    writeln!(writer, ".")?;
    let raster: Vec<u8> = labels
        .as_slice()
        .iter()
        .map(|&l| if l > OUTSIDE { FOREGROUND } else { 0 })
        .collect();
    writer.write_all(&raster)?;
    writer.flush()?;
    Ok(())
}

/// Encode a 3D label field into a new file at `path`.
pub fn write_vol_file(
    path: impl AsRef<Path>,
    domain: &GridDomain,
    labels: &LabelField,
) -> Result<(), IoError> {
    check_volume(domain, labels)?;
    write_vol(BufWriter::new(File::create(path)?), domain, labels)
}

// ── Sections ───────────────────────────────────────────────────

/// The 2D plane of a volume at offset `index` along axis 0.
pub fn section(
    domain: &GridDomain,
    labels: &LabelField,
    index: usize,
) -> Result<(GridDomain, LabelField), IoError> {
    check_volume(domain, labels)?;
    let ext = domain.extents();
    if index >= ext[0] {
        return Err(IoError::SectionOutOfRange {
            index,
            extent: ext[0],
        });
    }
    let plane = ext[1] * ext[2];
    let to_u32 = |e: usize| u32::try_from(e).map_err(|_| frontier_space::SpaceError::TooLarge);
    let flat = GridDomain::with_extents(&[to_u32(ext[1])?, to_u32(ext[2])?])?;
    let start = index * plane;
    let cut = LabelField::from_vec(labels.as_slice()[start..start + plane].to_vec())?;
    Ok((flat, cut))
}

/// The middle plane along axis 0.
pub fn central_section(
    domain: &GridDomain,
    labels: &LabelField,
) -> Result<(GridDomain, LabelField), IoError> {
    let middle = domain.extents().first().map_or(0, |e| e / 2);
    section(domain, labels, middle)
}
