use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use super::AtlasRow;
use crate::models::{Barangay, MapCategory};
use crate::rating::palette::{map_shade, theme_color, Rgb};

const BARS_SIZE: (u32, u32) = (1200, 640);
const RADAR_SIZE: (u32, u32) = (720, 720);
const RADAR_RINGS: usize = 5;

/// Ranked bar chart of `rows`, each bar shaded by its map colour.
pub fn render_bars(category: MapCategory, rows: &[AtlasRow], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, BARS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(category.figure(), ("sans-serif", 26).into_font())
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d((0..rows.len()).into_segmented(), 0f64..1.1f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => rows.get(*i).map(|r| r.name.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(("sans-serif", 12).into_font())
        .y_desc(category.value_header())
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let style = plot_color(map_shade(category, row.rating)).filled();
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), row.value),
            ],
            style,
        );
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        Text::new(
            format!("{:.3}", row.value),
            (SegmentValue::CenterOf(i), row.value + 0.04),
            ("sans-serif", 13).into_font(),
        )
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", out.display()))?;
    Ok(())
}

/// Radar chart of the five sub-indicators of `barangay`, on a `[0, 1]` scale.
pub fn render_radar(barangay: &Barangay, out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, RADAR_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let axes: Vec<(MapCategory, &str)> = vec![
        (MapCategory::Hazard, "Hazard"),
        (MapCategory::Vulnerability, "Vulnerability"),
        (MapCategory::Exposure, "Exposure"),
        (MapCategory::SoftCm, "Soft CM"),
        (MapCategory::HardCm, "Hard CM"),
    ];

    let (w, h) = RADAR_SIZE;
    let center = (w as i32 / 2, h as i32 / 2 + 20);
    let radius = w as f64 * 0.34;
    let grid = ShapeStyle::from(&RGBColor(0xe2, 0xe8, 0xf0)).stroke_width(1);

    root.draw(&Text::new(
        barangay.name.to_string(),
        (24, 24),
        ("sans-serif", 28).into_font(),
    ))?;

    for ring in 1..=RADAR_RINGS {
        let level = ring as f64 / RADAR_RINGS as f64;
        let mut ring_pts = radar_points(&vec![level; axes.len()], center, radius);
        ring_pts.push(ring_pts[0]);
        root.draw(&PathElement::new(ring_pts, grid))?;
    }

    let spokes = radar_points(&vec![1.0; axes.len()], center, radius);
    for (i, (tip, (_, label))) in spokes.iter().zip(&axes).enumerate() {
        root.draw(&PathElement::new(vec![center, *tip], grid))?;
        let (x, y) = radar_points_at(1.18, i, axes.len(), center, radius);
        root.draw(&Text::new(
            label.to_string(),
            (x - 36, y - 8),
            ("sans-serif", 16).into_font().color(&RGBColor(0x64, 0x74, 0x8b)),
        ))?;
    }

    let values: Vec<f64> = axes.iter().map(|(c, _)| barangay.value(*c)).collect();
    let shape = radar_points(&values, center, radius);
    let fri = plot_color(theme_color(MapCategory::Fri));

    root.draw(&Polygon::new(shape.clone(), fri.mix(0.3).filled()))?;
    let mut outline = shape;
    outline.push(outline[0]);
    root.draw(&PathElement::new(outline, fri.stroke_width(3)))?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", out.display()))?;
    Ok(())
}

/// Pixel vertices of a radar polygon: the first axis points straight up and
/// the rest follow clockwise at equal angles.
pub fn radar_points(values: &[f64], center: (i32, i32), radius: f64) -> Vec<(i32, i32)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| radar_points_at(v.clamp(0.0, 1.0), i, values.len(), center, radius))
        .collect()
}

fn radar_points_at(
    level: f64,
    index: usize,
    axes: usize,
    center: (i32, i32),
    radius: f64,
) -> (i32, i32) {
    let angle = -std::f64::consts::FRAC_PI_2
        + std::f64::consts::TAU * index as f64 / axes.max(1) as f64;
    (
        center.0 + (radius * level * angle.cos()).round() as i32,
        center.1 + (radius * level * angle.sin()).round() as i32,
    )
}

fn plot_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}
