//! Cross-shaped text rendering of a facelet grid.
//!
//! Pure formatting over `get_face` copies; nothing here mutates or
//! prints. The layout is stable:
//!
//! ```text
//!     U
//!   L F R
//!     D
//!     B
//! ```
//!
//! with blank padding flanking the top and bottom rows so every band
//! lines up with the middle one.

use crate::core::FaceId;

use super::facelets::{FaceletGrid, Strip};

/// Render a grid as a flattened cross with bordered bands.
#[must_use]
pub fn render(grid: &FaceletGrid) -> String {
    let size = grid.size();

    let blank = blank_lines(size);
    let up = face_lines(&grid.get_face(FaceId::Up));
    let down = face_lines(&grid.get_face(FaceId::Down));
    let left = face_lines(&grid.get_face(FaceId::Left));
    let right = face_lines(&grid.get_face(FaceId::Right));
    let front = face_lines(&grid.get_face(FaceId::Front));
    let back = face_lines(&grid.get_face(FaceId::Back));

    let dashes = "-".repeat(2 * size + 1);
    let spacer = " ".repeat(2 * size + 2);
    let narrow_rule = format!(" {spacer}+{dashes}+\n");
    let wide_rule = format!(" +{dashes}+{dashes}+{dashes}+\n");

    let mut out = String::from("\n");

    out.push_str(&narrow_rule);
    push_band(&mut out, &[&blank, &up, &blank], "   ", "\n");
    out.push_str(&wide_rule);
    push_band(&mut out, &[&left, &front, &right], " | ", " |\n");
    out.push_str(&wide_rule);
    push_band(&mut out, &[&blank, &down, &blank], "   ", "\n");
    out.push_str(&narrow_rule);
    push_band(&mut out, &[&blank, &back, &blank], "   ", "\n");
    out.push_str(&narrow_rule);

    out
}

/// One face as text lines, cells separated by single spaces.
fn face_lines(rows: &[Strip]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|c| c.code().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Blank padding the same shape as a face.
fn blank_lines(size: usize) -> Vec<String> {
    vec![" ".repeat(2 * size - 1); size]
}

/// Append three horizontally concatenated faces, line by line.
fn push_band(out: &mut String, faces: &[&Vec<String>; 3], prefix: &str, suffix: &str) {
    let rows = faces[0].len();
    for i in 0..rows {
        out.push_str(prefix);
        out.push_str(&faces[0][i]);
        out.push_str(" | ");
        out.push_str(&faces[1][i]);
        out.push_str(" | ");
        out.push_str(&faces[2][i]);
        out.push_str(suffix);
    }
}
