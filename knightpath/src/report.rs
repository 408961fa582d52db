//! Console report of a [`Solution`].

use std::io::{self, Write};

use knight_core::Point;
use knight_paths::Solution;

const SEPARATOR: &str = "-------------------";

/// Format a distance with at most five decimals, trailing zeros trimmed.
pub fn format_distance(d: f64) -> String {
    let s = format!("{d:.5}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Concatenated `(x,y)` pairs.
pub fn format_path(points: &[Point]) -> String {
    points.iter().map(|p| format!("({},{})", p.x, p.y)).collect()
}

/// Write the text report: one block per shortest path, then the shortest
/// distance. Paths are printed from the original start.
pub fn write_report(out: &mut impl Write, sol: &Solution) -> io::Result<()> {
    let start = sol.corrected_start;
    let dest = sol.destination;
    writeln!(out, "starting with: {}, {}", start.x, start.y)?;
    for (i, path) in sol.paths().iter().enumerate() {
        let full = sol.full_path(i).unwrap_or_else(|| path.points.clone());
        writeln!(out, "--- DESTINATION --- : ({},{})", dest.x, dest.y)?;
        writeln!(out, "* PATH: {}", format_path(&full))?;
        writeln!(out, "* DISTANCE: {}", format_distance(path.distance))?;
        writeln!(out, "{SEPARATOR}")?;
    }
    writeln!(out, "shortest distance: {}", format_distance(sol.shortest()))
}
