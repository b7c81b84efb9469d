//! Snapshot sinks that write one numbered file per frame.

use std::ffi::OsString;
use std::path::PathBuf;

use frontier_core::LabelField;
use frontier_engine::SnapshotSink;
use frontier_space::GridDomain;

use crate::error::IoError;
use crate::pgm::{write_pgm_file, PgmEncoding};
use crate::svg::write_svg_file;
use crate::vol::{central_section, write_vol_file};

/// File format written by a [`FileSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Binary PGM raster. Volumes are cut through their central section.
    Pgm,
    /// SVG vector drawing (2D only).
    Svg,
    /// DGtal `.vol` volume (3D only).
    Vol,
}

impl ImageFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pgm => "pgm",
            Self::Svg => "svg",
            Self::Vol => "vol",
        }
    }
}

/// Writes each frame to `<basename><NNNN>.<ext>`.
///
/// `basename` is a path prefix, e.g. `out/interface` yields
/// `out/interface0001.pgm` for frame 1.
#[derive(Clone, Debug)]
pub struct FileSink {
    basename: PathBuf,
    format: ImageFormat,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// A sink writing `format` files under the `basename` prefix.
    pub fn new(basename: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            basename: basename.into(),
            format,
            written: Vec::new(),
        }
    }

    /// The file a frame is written to.
    pub fn path_for(&self, frame: u32) -> PathBuf {
        let mut name = OsString::from(self.basename.as_os_str());
        name.push(format!("{frame:04}.{}", self.format.extension()));
        PathBuf::from(name)
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SnapshotSink for FileSink {
    type Error = IoError;

    fn record(
        &mut self,
        frame: u32,
        domain: &GridDomain,
        labels: &LabelField,
    ) -> Result<(), IoError> {
        let path = self.path_for(frame);
        match (self.format, domain.ndim()) {
            (ImageFormat::Pgm, 3) => {
                let (flat, cut) = central_section(domain, labels)?;
                write_pgm_file(&path, &flat, &cut, PgmEncoding::Binary)?;
            }
            (ImageFormat::Pgm, _) => write_pgm_file(&path, domain, labels, PgmEncoding::Binary)?,
            (ImageFormat::Svg, _) => write_svg_file(&path, domain, labels)?,
            (ImageFormat::Vol, _) => write_vol_file(&path, domain, labels)?,
        }
        tracing::debug!(frame, path = %path.display(), "wrote snapshot");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pgm::read_pgm_file;
    use crate::vol::read_vol_file;
    use frontier_space::ball_labels;
    use frontier_test_utils::grid_from_rows;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("frontier-io-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn frame_numbers_are_zero_padded() {
        let sink = FileSink::new("out/interface", ImageFormat::Svg);
        assert_eq!(sink.path_for(7), PathBuf::from("out/interface0007.svg"));
        assert_eq!(sink.path_for(12345), PathBuf::from("out/interface12345.svg"));
    }

    #[test]
    fn pgm_frames_land_on_disk() {
        let dir = scratch_dir("pgm");
        let (domain, labels) = grid_from_rows(&["....", ".##.", "...."]);
        let mut sink = FileSink::new(dir.join("frame"), ImageFormat::Pgm);
        sink.record(1, &domain, &labels).unwrap();
        sink.record(2, &domain, &labels).unwrap();
        assert_eq!(sink.written().len(), 2);

        let (read_domain, mut read) = read_pgm_file(dir.join("frame0002.pgm")).unwrap();
        read.invert();
        assert_eq!(read_domain, domain);
        assert_eq!(read, labels);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn volume_pgm_frames_are_central_sections() {
        let dir = scratch_dir("section");
        let domain = GridDomain::with_extents(&[5, 6, 6]).unwrap();
        let labels = ball_labels(&domain, &[2.0, 2.5, 2.5], 2.0);
        let mut sink = FileSink::new(dir.join("slice"), ImageFormat::Pgm);
        sink.record(1, &domain, &labels).unwrap();

        let (flat, _) = read_pgm_file(dir.join("slice0001.pgm")).unwrap();
        assert_eq!(flat.extents(), &[6, 6]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn vol_frames_round_trip() {
        let dir = scratch_dir("vol");
        let domain = GridDomain::with_extents(&[4, 4, 4]).unwrap();
        let labels = ball_labels(&domain, &[1.5, 1.5, 1.5], 1.5);
        let mut sink = FileSink::new(dir.join("v"), ImageFormat::Vol);
        sink.record(3, &domain, &labels).unwrap();

        let (_, read) = read_vol_file(dir.join("v0003.vol")).unwrap();
        assert_eq!(read.binarized(0), labels);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn svg_of_a_volume_fails_without_writing() {
        let dir = scratch_dir("svg3d");
        let domain = GridDomain::with_extents(&[2, 2, 2]).unwrap();
        let labels = LabelField::filled(8, 0);
        let mut sink = FileSink::new(dir.join("s"), ImageFormat::Svg);
        assert!(sink.record(1, &domain, &labels).is_err());
        assert!(sink.written().is_empty());
        assert!(!dir.join("s0001.svg").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
