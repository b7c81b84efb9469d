//! SVG rendering of a 2D label field.
//!
//! Each grid point is drawn as a unit square with column index along `x`
//! and row index along `y`. Foreground squares are filled; the interface
//! (every edge between an inside square and an outside square or the domain
//! border) is stroked on top.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use frontier_core::LabelField;
use frontier_space::GridDomain;

use crate::error::IoError;

const FORMAT: &str = "SVG";

/// A unit segment of the interface, in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Start point `(x, y)`.
    pub from: (usize, usize),
    /// End point `(x, y)`.
    pub to: (usize, usize),
}

/// Every interface edge of a 2D label field, in row-major point order.
pub fn interface_edges(domain: &GridDomain, labels: &LabelField) -> Result<Vec<Edge>, IoError> {
    check_plane(domain, labels)?;
    let (height, width) = (domain.extents()[0], domain.extents()[1]);
    let inside = |r: usize, c: usize| labels.as_slice()[r * width + c] > frontier_core::OUTSIDE;
    let mut edges = Vec::new();
    for r in 0..height {
        for c in 0..width {
            if !inside(r, c) {
                continue;
            }
            if r == 0 || !inside(r - 1, c) {
                edges.push(Edge { from: (c, r), to: (c + 1, r) });
            }
            if r + 1 == height || !inside(r + 1, c) {
                edges.push(Edge { from: (c, r + 1), to: (c + 1, r + 1) });
            }
            if c == 0 || !inside(r, c - 1) {
                edges.push(Edge { from: (c, r), to: (c, r + 1) });
            }
            if c + 1 == width || !inside(r, c + 1) {
                edges.push(Edge { from: (c + 1, r), to: (c + 1, r + 1) });
            }
        }
    }
    Ok(edges)
}

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

/// Render a 2D label field as an SVG document.
pub fn write_svg<W: Write>(
    mut writer: W,
    domain: &GridDomain,
    labels: &LabelField,
) -> Result<(), IoError> {
    let edges = interface_edges(domain, labels)?;
    let (height, width) = (domain.extents()[0], domain.extents()[1]);

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{}" height="{}">"#,
        width * 8,
        height * 8
    )?;
    writeln!(writer, r#"<g fill="lightgray" stroke="none">"#)?;
    for (i, &l) in labels.as_slice().iter().enumerate() {
        if l > frontier_core::OUTSIDE {
            let (r, c) = (i / width, i % width);
            writeln!(writer, r#"<rect x="{c}" y="{r}" width="1" height="1"/>"#)?;
        }
    }
    writeln!(writer, "</g>")?;
    writeln!(writer, r#"<g stroke="red" stroke-width="0.1">"#)?;
    for e in &edges {
        writeln!(
            writer,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            e.from.0, e.from.1, e.to.0, e.to.1
        )?;
    }
    writeln!(writer, "</g>")?;
    writeln!(writer, "</svg>")?;
    writer.flush()?;
    Ok(())
}

/// Render a 2D label field into a new SVG file at `path`.
pub fn write_svg_file(
    path: impl AsRef<Path>,
    domain: &GridDomain,
    labels: &LabelField,
) -> Result<(), IoError> {
    check_plane(domain, labels)?;
    write_svg(BufWriter::new(File::create(path)?), domain, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_test_utils::grid_from_rows;

    #[test]
    fn single_point_has_four_edges() {
        let (domain, labels) = grid_from_rows(&["...", ".#.", "..."]);
        let edges = interface_edges(&domain, &labels).unwrap();
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&Edge { from: (1, 1), to: (2, 1) }));
        assert!(edges.contains(&Edge { from: (2, 1), to: (2, 2) }));
    }

    #[test]
    fn shared_edges_are_not_drawn() {
        let (domain, labels) = grid_from_rows(&["....", ".##.", ".##.", "...."]);
        assert_eq!(interface_edges(&domain, &labels).unwrap().len(), 8);
    }

    #[test]
    fn domain_border_closes_the_interface() {
        let (domain, labels) = grid_from_rows(&["##", "##"]);
        assert_eq!(interface_edges(&domain, &labels).unwrap().len(), 8);
    }

    #[test]
    fn document_lists_squares_and_edges() {
        let (domain, labels) = grid_from_rows(&["#..", "##."]);
        let mut buf = Vec::new();
        write_svg(&mut buf, &domain, &labels).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("<svg"));
        assert!(text.contains(r#"viewBox="0 0 3 2""#));
        assert_eq!(text.matches("<rect").count(), 3);
        assert_eq!(text.matches("<line").count(), 8);
        assert!(text.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn volume_is_rejected() {
        let domain = GridDomain::with_extents(&[2, 2, 2]).unwrap();
        let labels = LabelField::filled(8, 0);
        assert!(matches!(
            write_svg(Vec::new(), &domain, &labels),
            Err(IoError::Dimension { actual: 3, .. })
        ));
    }
}
