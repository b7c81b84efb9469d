//! Portable graymap (PGM) images as 2D label fields.
//!
//! Both the ASCII (`P2`) and binary (`P5`) variants are read and written.
//! Row index is axis 0 and column index axis 1, so an image `W` pixels wide
//! and `H` high becomes a domain with extents `[H, W]`.
//!
//! Reading keeps grey levels as raw labels (anything above 0 counts as
//! inside). Writing draws the foreground black on a white background, so
//! reading a written image back and calling [`LabelField::invert`] yields
//! the original membership.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use frontier_core::{Label, LabelField};
use frontier_space::GridDomain;

use crate::error::IoError;

const FORMAT: &str = "PGM";

/// Grey level written for background pixels.
pub const WHITE: u8 = 255;

/// Grey level written for foreground pixels.
pub const BLACK: u8 = 0;

/// Which PGM variant to emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PgmEncoding {
    /// `P2`: whitespace-separated decimal samples.
    Ascii,
    /// `P5`: one raw byte per sample.
    #[default]
    Binary,
}

// ── Header scanning ────────────────────────────────────────────

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_blanks(&mut self) {
        loop {
            match self.bytes.get(self.pos) {
                Some(b) if b.is_ascii_whitespace() => self.pos += 1,
                Some(b'#') => {
                    while let Some(&b) = self.bytes.get(self.pos) {
                        self.pos += 1;
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_blanks();
        let bytes = self.bytes;
        let start = self.pos;
        while matches!(bytes.get(self.pos), Some(b) if !b.is_ascii_whitespace() && *b != b'#') {
            self.pos += 1;
        }
        (self.pos > start).then(|| &bytes[start..self.pos])
    }

    fn number(&mut self, what: &str) -> Result<u32, IoError> {
        let tok = self
            .token()
            .ok_or_else(|| IoError::malformed(FORMAT, format!("missing {what}")))?;
        std::str::from_utf8(tok)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::malformed(
                    FORMAT,
                    format!("{what} is not a number: {:?}", String::from_utf8_lossy(tok)),
                )
            })
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}

fn to_label(sample: u32, maxval: u32) -> Label {
    if maxval <= u32::from(u8::MAX) {
        sample as Label
    } else {
        (sample * u32::from(u8::MAX) / maxval) as Label
    }
}

// ── Reading ────────────────────────────────────────────────────

/// Decode a `P2` or `P5` image.
///
/// Samples of 16-bit images (`maxval > 255`) are rescaled to `0..=255`.
///
/// # Examples
///
/// ```
/// use frontier_io::pgm::read_pgm;
///
/// let text = b"P2\n# two by three\n3 2\n255\n0 0 255\n255 0 0\n";
/// let (domain, labels) = read_pgm(&text[..]).unwrap();
/// assert_eq!(domain.extents(), &[2, 3]);
/// assert_eq!(labels.foreground_size(), 2);
/// ```
pub fn read_pgm<R: Read>(mut reader: R) -> Result<(GridDomain, LabelField), IoError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut scan = Scanner::new(&bytes);

    let binary = match scan.token() {
        Some(b"P2") => false,
        Some(b"P5") => true,
        other => {
            return Err(IoError::InvalidMagic {
                expected: "P2 or P5",
                found: String::from_utf8_lossy(other.unwrap_or_default()).into_owned(),
            })
        }
    };
    let width = scan.number("width")?;
    let height = scan.number("height")?;
    let maxval = scan.number("maxval")?;
    if maxval == 0 || maxval > u32::from(u16::MAX) {
        return Err(IoError::malformed(
            FORMAT,
            format!("maxval {maxval} outside 1..=65535"),
        ));
    }
    let domain = GridDomain::with_extents(&[height, width])?;
    let count = domain.len();

    // Nothing is allocated before the input is known to hold the raster.
    let mut samples = Vec::new();
    if binary {
        // Exactly one whitespace byte separates the header from the raster.
        match scan.bytes.get(scan.pos) {
            Some(b) if b.is_ascii_whitespace() => scan.pos += 1,
            _ => return Err(IoError::malformed(FORMAT, "missing raster separator")),
        }
        let raster = scan.rest();
        let wide = maxval > u32::from(u8::MAX);
        let needed = if wide { count.checked_mul(2) } else { Some(count) };
        let needed = needed.filter(|&n| n <= raster.len()).ok_or_else(|| {
            IoError::malformed(
                FORMAT,
                format!("raster truncated: {} bytes for {count} samples", raster.len()),
            )
        })?;
        samples.reserve_exact(count);
        if wide {
            for pair in raster[..needed].chunks_exact(2) {
                let v = u32::from(u16::from_be_bytes([pair[0], pair[1]]));
                samples.push(to_label(v.min(maxval), maxval));
            }
        } else {
            samples.extend(raster[..needed].iter().map(|&v| to_label(u32::from(v).min(maxval), maxval)));
        }
    } else {
        // Every ASCII sample takes at least one byte.
        if scan.rest().len() < count {
            return Err(IoError::malformed(
                FORMAT,
                format!("raster truncated: {} bytes for {count} samples", scan.rest().len()),
            ));
        }
        samples.reserve_exact(count);
        for i in 0..count {
            let v = scan.number("sample")?;
            if v > maxval {
                return Err(IoError::malformed(
                    FORMAT,
                    format!("sample {i} is {v}, above maxval {maxval}"),
                ));
            }
            samples.push(to_label(v, maxval));
        }
    }

    let labels = LabelField::from_vec(samples)?;
    tracing::debug!(width, height, binary, "decoded PGM image");
    Ok((domain, labels))
}

/// Open and decode a PGM file.
pub fn read_pgm_file(path: impl AsRef<Path>) -> Result<(GridDomain, LabelField), IoError> {
    read_pgm(BufReader::new(File::open(path)?))
}

// ── Writing ────────────────────────────────────────────────────

fn check_plane(domain: &GridDomain, labels: &LabelField) -> Result<(), IoError> {
    if domain.ndim() != 2 {
        return Err(IoError::Dimension {
            format: FORMAT,
            expected: 2,
            actual: domain.ndim(),
        });
    }
    labels.check_len(domain.len())?;
    Ok(())
}

/// Encode a 2D label field as a black-on-white image.
pub fn write_pgm<W: Write>(
    mut writer: W,
    domain: &GridDomain,
    labels: &LabelField,
    encoding: PgmEncoding,
) -> Result<(), IoError> {
    check_plane(domain, labels)?;
    let (height, width) = (domain.extents()[0], domain.extents()[1]);
    let grey = |l: Label| if l > frontier_core::OUTSIDE { BLACK } else { WHITE };

    match encoding {
        PgmEncoding::Binary => {
            write!(writer, "P5\n{width} {height}\n{WHITE}\n")?;
            let raster: Vec<u8> = labels.as_slice().iter().map(|&l| grey(l)).collect();
            writer.write_all(&raster)?;
        }
        PgmEncoding::Ascii => {
            write!(writer, "P2\n{width} {height}\n{WHITE}\n")?;
            for row in labels.as_slice().chunks(width) {
                let line: Vec<String> = row.iter().map(|&l| grey(l).to_string()).collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Encode a 2D label field into a new file at `path`.
///
/// Nothing is created when the domain is not 2D.
pub fn write_pgm_file(
    path: impl AsRef<Path>,
    domain: &GridDomain,
    labels: &LabelField,
    encoding: PgmEncoding,
) -> Result<(), IoError> {
    check_plane(domain, labels)?;
    write_pgm(BufWriter::new(File::create(path)?), domain, labels, encoding)
}
