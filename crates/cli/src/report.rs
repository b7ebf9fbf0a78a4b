//! Figure-list report.
//!
//! Input: one figure per line, `<kind> x1 y1 x2 y2 ...`, where `<kind>` is
//! `polygon`, `rectangle`, `rhombus` or `trapezoid`. Presets take exactly four
//! pairs; a polygon takes three or more. Blank lines and `#` comments are
//! skipped.

use anyhow::{bail, Context, Result};
use geomkit::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Serialize)]
pub struct FigureRow {
    pub index: usize,
    pub kind: &'static str,
    pub area: f64,
    pub center: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub count: usize,
    pub total_area: f64,
    pub figures: Vec<FigureRow>,
}

pub fn run(input: &Path, out: Option<&Path>) -> Result<()> {
    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let figures = parse_figures(&text)?;
    tracing::info!(input = %input.display(), count = figures.len(), "report");
    let report = build_report(&figures)?;
    let body = serde_json::to_string_pretty(&report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating report dir {}", parent.display()))?;
                }
            }
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{body}"),
    }
    Ok(())
}

pub fn parse_figures(text: &str) -> Result<DynamicArray<Rc<dyn Figure>>> {
    let mut figures: DynamicArray<Rc<dyn Figure>> = DynamicArray::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let figure = parse_line(line).with_context(|| format!("line {}", lineno + 1))?;
        figures.append(figure);
    }
    Ok(figures)
}

fn parse_line(line: &str) -> Result<Rc<dyn Figure>> {
    let mut words = line.split_whitespace();
    let kind: ShapeKind = match words.next() {
        Some(word) => word.parse()?,
        None => bail!("missing figure kind"),
    };
    let coords: Vec<&str> = words.collect();
    if coords.len() % 2 != 0 {
        bail!("odd number of coordinates ({})", coords.len());
    }
    let pairs = coords.len() / 2;
    let mut polygon = match kind.fixed_vertex_count() {
        Some(n) if n != pairs => bail!("{kind} takes {n} vertices, got {pairs}"),
        Some(_) => quad::<f64>(kind)?,
        None => Polygon::<f64>::new(pairs)?,
    };
    polygon.read_str(&coords.join(" "))?;
    Ok(Rc::new(polygon))
}

pub fn build_report(figures: &DynamicArray<Rc<dyn Figure>>) -> Result<Report> {
    let mut rows = Vec::with_capacity(figures.len());
    for (index, fig) in figures.iter().enumerate() {
        let c = fig.center()?;
        rows.push(FigureRow {
            index,
            kind: fig.label(),
            area: fig.area(),
            center: [c.x, c.y],
        });
    }
    Ok(Report {
        count: figures.len(),
        total_area: figures.total_area(),
        figures: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# two figures
polygon 0 0 3 0 0 4

rectangle 0 0 2 0 2 2 0 2
";

    #[test]
    fn parses_mixed_figures() {
        let figures = parse_figures(SAMPLE).unwrap();
        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].label(), "polygon");
        assert_eq!(figures[1].label(), "rectangle");
        assert!((figures.total_area() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(parse_figures("hexagon 0 0 1 0 1 1").is_err());
        assert!(parse_figures("polygon 0 0 1 0").is_err());
        assert!(parse_figures("rhombus 0 0 1 0 1 1").is_err());
        assert!(parse_figures("polygon 0 0 1 0 1").is_err());
        let err = parse_figures("polygon 0 0 1 0 1 1\ntrapezoid 0 0 a 0 1 1 0 1")
            .unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn report_rows_and_totals() {
        let figures = parse_figures(SAMPLE).unwrap();
        let report = build_report(&figures).unwrap();
        assert_eq!(report.count, 2);
        assert!((report.figures[0].area - 6.0).abs() < 1e-9);
        assert!((report.figures[1].center[0] - 1.0).abs() < 1e-9);
        assert!((report.total_area - 10.0).abs() < 1e-9);
    }

    #[test]
    fn run_writes_json_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("figures.txt");
        fs::write(&input, SAMPLE).unwrap();
        let out = dir.path().join("nested").join("report.json");
        run(&input, Some(&out)).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["figures"][1]["kind"], "rectangle");
    }
}
