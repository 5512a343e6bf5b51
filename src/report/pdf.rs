use std::path::Path;

use anyhow::{Context, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use super::atlas_rows;
use crate::data::{BARANGAYS, MUNICIPALITY};
use crate::models::{MapCategory, RiskLevel};
use crate::rating::palette::{rating_badge, risk_badge, theme_color};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 18.0;
const COVER_HDR_H: f32 = 72.0;
const T_END: f32 = PAGE_W - MARGIN;

// ── Palette ───────────────────────────────────────────────────────────────────
const BG:           (f32, f32, f32) = (1.00, 1.00, 1.00);
const PANEL:        (f32, f32, f32) = (1.00, 1.00, 1.00);
const PANEL_ALT:    (f32, f32, f32) = (0.97, 0.98, 0.99); // slate-50
const PANEL_BORDER: (f32, f32, f32) = (0.89, 0.91, 0.94); // slate-200
const ACCENT_BLU:   (f32, f32, f32) = (0.15, 0.39, 0.92); // blue-600
const ACCENT_ORG:   (f32, f32, f32) = (0.98, 0.45, 0.09); // FRI orange
const TEXT_PRI:     (f32, f32, f32) = (0.12, 0.16, 0.23);
const TEXT_SEC:     (f32, f32, f32) = (0.39, 0.45, 0.55);
const TEXT_MUT:     (f32, f32, f32) = (0.58, 0.64, 0.72);
const WHITE:        (f32, f32, f32) = (1.00, 1.00, 1.00);
const WHITE_DIM:    (f32, f32, f32) = (0.86, 0.91, 1.00);
const BAR_TRACK:    (f32, f32, f32) = (0.95, 0.96, 0.97);

const R_PANEL: f32 = 2.5;
const R_BADGE: f32 = 1.5;

const ROW_H: f32 = 9.0;
const BADGE_W: f32 = 26.0;
const BADGE_H: f32 = 5.0;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render the PDF report: cover → barangay profiles → one ranked table per
/// indicator category.
pub fn render(output_path: &Path) -> Result<()> {
    let doc = PdfDocument::empty("Manabo Flood Risk Report");

    add_cover_page(&doc)?;
    add_profiles_page(&doc)?;
    for category in MapCategory::ALL {
        add_category_page(&doc, category)?;
    }

    let bytes = doc.save_to_bytes()?;
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write PDF to {}", output_path.display()))?;

    println!("PDF report written to: {}", output_path.display());
    Ok(())
}

// ── Cover page ────────────────────────────────────────────────────────────────

fn add_cover_page(doc: &PdfDocumentReference) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Cover");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let count = |levels: &[RiskLevel]| {
        BARANGAYS
            .iter()
            .filter(|b| levels.contains(&b.risk_level))
            .count()
    };
    let high = count(&[RiskLevel::High, RiskLevel::VeryHigh]);
    let moderate = count(&[RiskLevel::Moderate]);
    let low = count(&[RiskLevel::Low, RiskLevel::VeryLow]);

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
    let hdr_bot = PAGE_H - COVER_HDR_H;
    fill_gradient_h(&layer, 0.0, hdr_bot, PAGE_W, COVER_HDR_H, ACCENT_BLU, ACCENT_ORG, 28);

    set_color(&layer, WHITE_DIM);
    layer.use_text(
        format!("manabo-atlas v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(PAGE_W - MARGIN - 40.0), Mm(PAGE_H - 10.5), &font_r,
    );

    set_color(&layer, WHITE);
    layer.use_text("Flood Risk Index", 28.0, Mm(MARGIN), Mm(PAGE_H - 26.0), &font_b);
    set_color(&layer, WHITE_DIM);
    layer.use_text("Barangay Report", 28.0, Mm(MARGIN), Mm(PAGE_H - 41.0), &font_b);

    // Municipality chip
    let chip_y = hdr_bot - 18.0;
    let chip_h = 12.0f32;
    let chip_w = 106.0f32;
    fill_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL);
    stroke_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL_BORDER);
    fill_rect(&layer, MARGIN, chip_y, 2.5, chip_h, ACCENT_ORG);

    set_color(&layer, TEXT_MUT);
    layer.use_text("MUNICIPALITY", 6.0, Mm(MARGIN + 5.0), Mm(chip_y + chip_h - 3.8), &font_b);
    set_color(&layer, TEXT_PRI);
    layer.use_text(MUNICIPALITY, 9.5, Mm(MARGIN + 5.0), Mm(chip_y + 2.8), &font_b);

    set_color(&layer, TEXT_SEC);
    layer.use_text(
        format!("Generated  {}", today()),
        9.0, Mm(MARGIN), Mm(chip_y - 8.0), &font_r,
    );

    let rule_y = chip_y - 16.5;
    draw_hline(&layer, MARGIN, T_END, rule_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("OVERVIEW", 6.5, Mm(MARGIN), Mm(rule_y - 7.0), &font_b);

    let card_y  = rule_y - 42.0;
    let card_h  = 26.0f32;
    let gap     = 4.0f32;
    let card_w  = (T_END - MARGIN - gap * 3.0) / 4.0;

    let cards: [(&str, String, (f32, f32, f32)); 4] = [
        ("BARANGAYS",    BARANGAYS.len().to_string(), ACCENT_BLU),
        ("HIGH RISK",    high.to_string(),     risk_badge(RiskLevel::High).bg.unit()),
        ("MODERATE",     moderate.to_string(), risk_badge(RiskLevel::Moderate).bg.unit()),
        ("LOW/VERY LOW", low.to_string(),      risk_badge(RiskLevel::VeryLow).bg.unit()),
    ];

    for (i, (label, value, accent)) in cards.iter().enumerate() {
        let cx = MARGIN + (card_w + gap) * i as f32;
        draw_stat_card(&layer, cx, card_y, card_w, card_h, label, value, *accent,
                       &font_r, &font_b);
    }

    let section_y = card_y - 13.0;
    draw_hline(&layer, MARGIN, T_END, section_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("WHAT'S IN THIS REPORT", 6.5, Mm(MARGIN), Mm(section_y - 7.5), &font_b);

    let items = [
        ("Barangay Profiles",  "Flood risk index and all five indicators per barangay"),
        ("Indicator Rankings", "One ranked table per map category, with ratings"),
    ];
    for (j, (title, desc)) in items.iter().enumerate() {
        let iy = section_y - 15.0 - j as f32 * 10.0;
        fill_rounded_rect(&layer, MARGIN, iy + 2.0, 2.0, 2.0, 1.0, ACCENT_ORG);
        set_color(&layer, TEXT_PRI);
        layer.use_text(*title, 8.5, Mm(MARGIN + 5.0), Mm(iy + 2.0), &font_b);
        set_color(&layer, TEXT_SEC);
        layer.use_text(*desc, 8.0, Mm(MARGIN + 5.0), Mm(iy - 3.5), &font_r);
    }

    draw_footer(&layer, &font_r);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_stat_card(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    label: &str,
    value: &str,
    accent: (f32, f32, f32),
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) {
    fill_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL);
    stroke_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL_BORDER);
    fill_rect(layer, x, y + h - 2.0, w, 2.0, accent);

    set_color(layer, accent);
    layer.use_text(value, 20.0, Mm(x + 5.0), Mm(y + h * 0.38), font_b);

    set_color(layer, TEXT_MUT);
    layer.use_text(label, 6.5, Mm(x + 5.0), Mm(y + 3.5), font_r);
}

// ── Barangay profiles ─────────────────────────────────────────────────────────

fn add_profiles_page(doc: &PdfDocumentReference) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Profiles");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    draw_page_header(&layer, "Barangay Profiles",
                     "Published flood risk index and indicator scores (Table 10.1)",
                     &font_r, &font_b);

    //  BARANGAY  FRI  LEVEL  HAZ  VUL  EXP  SOFT  HARD
    let col_x = [MARGIN, MARGIN + 44.0, MARGIN + 60.0, MARGIN + 90.0,
                 MARGIN + 106.0, MARGIN + 122.0, MARGIN + 138.0, MARGIN + 156.0];
    let headers = ["BARANGAY", "FRI", "LEVEL", "HAZ", "VUL", "EXP", "SOFT CM", "HARD CM"];

    const HDR_Y: f32 = 258.0;
    draw_table_header(&layer, HDR_Y, &col_x, &headers, &font_b);

    let mut cur_y = HDR_Y - 10.0;
    for (i, b) in BARANGAYS.iter().enumerate() {
        if i % 2 == 0 {
            fill_rect(&layer, MARGIN, cur_y - ROW_H + 2.5, T_END - MARGIN, ROW_H, PANEL_ALT);
        }
        let text_y = cur_y - 3.5;

        set_color(&layer, TEXT_PRI);
        layer.use_text(b.name, 8.0, Mm(col_x[0] + 1.5), Mm(text_y), &font_b);
        layer.use_text(format!("{:.3}", b.fri), 8.0, Mm(col_x[1] + 1.5), Mm(text_y), &font_r);

        let badge = risk_badge(b.risk_level);
        draw_badge(&layer, col_x[2] + 1.0, text_y - 1.3, &b.risk_level.to_string(),
                   badge.bg.unit(), badge.fg.unit(), &font_b);

        set_color(&layer, TEXT_SEC);
        let values = [b.hazard, b.vulnerability, b.exposure, b.soft_cm, b.hard_cm];
        for (j, v) in values.iter().enumerate() {
            layer.use_text(format!("{:.3}", v), 8.0, Mm(col_x[3 + j] + 1.5), Mm(text_y), &font_r);
        }

        cur_y -= ROW_H;
    }

    // Descriptions below the table
    let mut note_y = cur_y - 8.0;
    set_color(&layer, TEXT_MUT);
    layer.use_text("NOTES", 6.5, Mm(MARGIN), Mm(note_y), &font_b);
    note_y -= 6.0;
    for b in BARANGAYS {
        let lines = wrap_text(b.description, 100);
        set_color(&layer, TEXT_PRI);
        layer.use_text(b.name, 7.0, Mm(MARGIN), Mm(note_y), &font_b);
        set_color(&layer, TEXT_SEC);
        for (j, line) in lines.iter().enumerate() {
            layer.use_text(line.as_str(), 7.0, Mm(MARGIN + 30.0), Mm(note_y - j as f32 * 3.5), &font_r);
        }
        note_y -= 3.5 * lines.len() as f32 + 1.5;
    }

    draw_footer(&layer, &font_r);
    Ok(())
}

// ── Indicator ranking pages ───────────────────────────────────────────────────

fn add_category_page(doc: &PdfDocumentReference, category: MapCategory) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), category.key());
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let accent = theme_color(category).unit();
    draw_page_header(&layer, category.figure(), category.description(), &font_r, &font_b);
    fill_rect(&layer, 0.0, PAGE_H - 2.5, PAGE_W, 2.5, accent);

    //  #   BARANGAY   VALUE   BAR   RATING
    let col_x = [MARGIN, MARGIN + 10.0, MARGIN + 58.0, MARGIN + 80.0, MARGIN + 144.0];
    let value_header = category.value_header().to_uppercase();
    let headers = ["#", "BARANGAY", value_header.as_str(), "", "RATING"];
    let bar_w = col_x[4] - col_x[3] - 6.0;

    const HDR_Y: f32 = 258.0;
    draw_table_header(&layer, HDR_Y, &col_x, &headers, &font_b);

    let rows = atlas_rows(category);
    let table_top = HDR_Y - 5.5;
    let table_h = ROW_H * rows.len() as f32 + 3.0;
    stroke_rounded_rect(&layer, MARGIN, table_top - table_h, T_END - MARGIN, table_h,
                        R_PANEL, PANEL_BORDER);

    let mut cur_y = HDR_Y - 10.0;
    for (i, row) in rows.iter().enumerate() {
        if i % 2 == 1 {
            fill_rect(&layer, MARGIN + 0.5, cur_y - ROW_H + 2.5, T_END - MARGIN - 1.0, ROW_H, PANEL_ALT);
        }
        let text_y = cur_y - 3.5;

        set_color(&layer, TEXT_MUT);
        layer.use_text(row.rank.to_string(), 8.0, Mm(col_x[0] + 2.5), Mm(text_y), &font_r);
        set_color(&layer, TEXT_PRI);
        layer.use_text(row.name, 8.5, Mm(col_x[1] + 1.5), Mm(text_y), &font_b);
        set_color(&layer, TEXT_SEC);
        layer.use_text(format!("{:.3}", row.value), 8.5, Mm(col_x[2] + 1.5), Mm(text_y), &font_r);

        // Value bar on a light track
        fill_rounded_rect(&layer, col_x[3], text_y - 0.2, bar_w, 3.0, 1.2, BAR_TRACK);
        let filled = (bar_w * row.value.clamp(0.0, 1.0) as f32).max(0.0);
        if filled > 0.5 {
            fill_rounded_rect(&layer, col_x[3], text_y - 0.2, filled, 3.0, 1.2, accent);
        }

        let badge = rating_badge(category, row.rating, row.value);
        draw_badge(&layer, col_x[4], text_y - 1.3, &row.rating.to_string().to_uppercase(),
                   badge.bg.unit(), badge.fg.unit(), &font_b);

        cur_y -= ROW_H;
    }

    set_color(&layer, TEXT_SEC);
    layer.use_text(
        format!("Data Source: 2025 Thesis, {}", category.table_ref()),
        8.0, Mm(MARGIN), Mm(table_top - table_h - 8.0), &font_r,
    );

    draw_footer(&layer, &font_r);
    Ok(())
}

// ── Page furniture ────────────────────────────────────────────────────────────

fn draw_page_header(
    layer: &PdfLayerReference,
    title: &str,
    subtitle: &str,
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) {
    fill_rect(layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
    fill_gradient_h(layer, 0.0, PAGE_H - 2.5, PAGE_W, 2.5, ACCENT_BLU, ACCENT_ORG, 21);

    set_color(layer, TEXT_PRI);
    layer.use_text(truncate(title, 44), 18.0, Mm(MARGIN), Mm(278.5), font_b);
    set_color(layer, TEXT_SEC);
    layer.use_text(truncate(subtitle, 110), 8.5, Mm(MARGIN), Mm(271.5), font_r);
    draw_hline(layer, MARGIN, T_END, 267.5, PANEL_BORDER);
}

fn draw_table_header(
    layer: &PdfLayerReference,
    y: f32,
    col_x: &[f32],
    headers: &[&str],
    font_b: &IndirectFontRef,
) {
    fill_rounded_rect(layer, MARGIN, y - 5.5, T_END - MARGIN, 8.5, R_BADGE, PANEL_ALT);
    set_color(layer, TEXT_MUT);
    for (x, h) in col_x.iter().zip(headers) {
        layer.use_text(*h, 6.5, Mm(x + 1.5), Mm(y - 2.5), font_b);
    }
}

fn draw_badge(
    layer: &PdfLayerReference,
    x: f32, y: f32,
    text: &str,
    bg: (f32, f32, f32),
    fg: (f32, f32, f32),
    font_b: &IndirectFontRef,
) {
    fill_rounded_rect(layer, x, y, BADGE_W, BADGE_H, R_BADGE, bg);
    set_color(layer, fg);
    layer.use_text(text, 6.5, Mm(x + 2.0), Mm(y + 1.4), font_b);
}

fn draw_footer(layer: &PdfLayerReference, font_r: &IndirectFontRef) {
    draw_hline(layer, MARGIN, T_END, 22.0, PANEL_BORDER);
    set_color(layer, TEXT_MUT);
    layer.use_text(
        format!("Generated by manabo-atlas v{}  ·  Mapping and Indexing Flood Risk in {} (2025)",
                env!("CARGO_PKG_VERSION"), MUNICIPALITY),
        7.0, Mm(MARGIN), Mm(15.0), font_r,
    );
}

// ── Drawing helpers ───────────────────────────────────────────────────────────

fn set_color(layer: &PdfLayerReference, (r, g, b): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb { r, g, b, icc_profile: None }));
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
             (r, g, b): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb { r, g, b, icc_profile: None }));
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(x),     Mm(y)),     false),
            (Point::new(Mm(x + w), Mm(y)),     false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x),     Mm(y + h)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(Color::Rgb(Rgb { r: 0.0, g: 0.0, b: 0.0, icc_profile: None }));
}

/// Clockwise ring approximating a rounded rectangle, 8 segments per corner.
fn rounded_rect_ring(x: f32, y: f32, w: f32, h: f32, r: f32) -> Vec<(Point, bool)> {
    let r = r.min(w / 2.0).min(h / 2.0);
    const SEGS: usize = 8;
    let mut pts = Vec::with_capacity(4 * (SEGS + 1));

    let corners = [
        (x + w - r, y + r,     270.0f32, 360.0f32),
        (x + w - r, y + h - r, 0.0f32,   90.0f32),
        (x + r,     y + h - r, 90.0f32,  180.0f32),
        (x + r,     y + r,     180.0f32, 270.0f32),
    ];

    for (cx, cy, start, end) in &corners {
        for i in 0..=SEGS {
            let t = i as f32 / SEGS as f32;
            let angle = (start + (end - start) * t).to_radians();
            pts.push((
                Point::new(Mm(cx + r * angle.cos()), Mm(cy + r * angle.sin())),
                false,
            ));
        }
    }
    pts
}

fn fill_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
                     r: f32, (cr, cg, cb): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb { r: cr, g: cg, b: cb, icc_profile: None }));
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(Color::Rgb(Rgb { r: 0.0, g: 0.0, b: 0.0, icc_profile: None }));
}

fn stroke_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
                       r: f32, (cr, cg, cb): (f32, f32, f32)) {
    layer.set_outline_color(Color::Rgb(Rgb { r: cr, g: cg, b: cb, icc_profile: None }));
    layer.set_outline_thickness(0.4);
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_outline_color(Color::Rgb(Rgb { r: 0.0, g: 0.0, b: 0.0, icc_profile: None }));
    layer.set_outline_thickness(1.0);
}

fn draw_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32,
              (r, g, b): (f32, f32, f32)) {
    layer.set_outline_color(Color::Rgb(Rgb { r, g, b, icc_profile: None }));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
    layer.set_outline_color(Color::Rgb(Rgb { r: 0.0, g: 0.0, b: 0.0, icc_profile: None }));
    layer.set_outline_thickness(1.0);
}

/// Left-to-right gradient made of `steps` vertical strips.
#[allow(clippy::too_many_arguments)]
fn fill_gradient_h(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    from: (f32, f32, f32),
    to: (f32, f32, f32),
    steps: usize,
) {
    let step_w = w / steps as f32;
    for i in 0..steps {
        let t = i as f32 / (steps - 1).max(1) as f32;
        let color = (
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
            from.2 + (to.2 - from.2) * t,
        );
        // Overlap strips slightly to prevent rounding gaps
        fill_rect(layer, x + i as f32 * step_w, y, step_w + 0.6, h, color);
    }
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn truncate(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max {
        format!("{}…", chars[..max - 1].iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.len() <= max_chars {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Current UTC date as `YYYY-MM-DD`.
fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_today_is_iso_date() {
        let date = today();
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("Low physical risk but relatively high social vulnerability.", 20);
        assert!(lines.iter().all(|l| l.len() <= 20));
        assert_eq!(lines.join(" "), "Low physical risk but relatively high social vulnerability.");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Catacdegan Nuevo", 8), "Catacde…");
        assert_eq!(truncate("Ayyeng", 8), "Ayyeng");
    }

    #[test]
    fn test_render_writes_pdf() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.pdf");
        render(&out).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
