//! Label images on disk: PGM rasters, DGtal `.vol` volumes and SVG
//! drawings, plus [`FileSink`], a
//! [`SnapshotSink`](frontier_engine::SnapshotSink) writing one numbered file
//! per frame.
//!
//! Readers and writers are generic over `Read`/`Write` so tests can use
//! in-memory buffers; the `*_file` variants wrap buffered files.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pgm;
pub mod sink;
pub mod svg;
pub mod vol;

pub use error::IoError;
pub use pgm::{read_pgm, read_pgm_file, write_pgm, write_pgm_file, PgmEncoding};
pub use sink::{FileSink, ImageFormat};
pub use svg::{interface_edges, write_svg, write_svg_file, Edge};
pub use vol::{central_section, read_vol, read_vol_file, section, write_vol, write_vol_file};
