use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use regex::Regex;

use super::AtlasRow;
use crate::atlas::{MapImage, MapStatus};
use crate::data::{BARANGAYS, MUNICIPALITY};
use crate::models::{Barangay, ChatMessage, MapCategory, RiskLevel, Role, Study};
use crate::rating::classifier::rate;
use crate::rating::palette::{rating_badge, risk_badge, risk_marker, theme_color, Rgb};

const BAR_WIDTH: usize = 24;

/// Barangay list followed by the detail card of `selected`.
pub fn render_dashboard(selected: &Barangay) -> Result<()> {
    println!(
        "\n {} v{}",
        "manabo-atlas".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Municipality of {}\n", MUNICIPALITY);

    for b in BARANGAYS {
        let Rgb(r, g, bl) = risk_marker(b.risk_level);
        let pointer = if b.id == selected.id { "▶" } else { " " };
        let name = if b.id == selected.id {
            b.name.bold()
        } else {
            b.name.normal()
        };
        println!(
            "  {} {} {:<18} FRI {:.3}",
            pointer,
            "●".truecolor(r, g, bl),
            name,
            b.fri
        );
    }

    let badge = risk_badge(selected.risk_level);
    println!("\n ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<49} │", selected.name.bold());
    println!(" └────────────────────────────────────────────────────┘");
    println!(
        "  {}   Flood Risk Index {}",
        paint(&format!(" {} RISK ", selected.risk_level.to_string().to_uppercase()), badge.bg, badge.fg),
        format!("{:.3}", selected.fri).bold()
    );
    println!("\n  {}", selected.description);
    println!(
        "\n  {} {}\n",
        "Recommendation:".bold(),
        selected.recommendation
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Indicator").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("").add_attribute(Attribute::Bold),
            Cell::new("Rating").add_attribute(Attribute::Bold),
        ]);

    for category in MapCategory::ALL.into_iter().skip(1) {
        let value = selected.value(category);
        let rating = rate(selected, category);
        let badge = rating_badge(category, rating, value);
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(format!("{:.3}", value)).set_alignment(CellAlignment::Right),
            Cell::new(bar(value, BAR_WIDTH)).fg(color(theme_color(category))),
            Cell::new(rating.to_string())
                .fg(color(badge.fg))
                .bg(color(badge.bg))
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
    Ok(())
}

/// Ranked table for one category, headed by its figure and map source.
pub fn render_atlas(
    category: MapCategory,
    rows: &[AtlasRow],
    image: &MapImage,
    status: MapStatus,
) -> Result<()> {
    let Rgb(r, g, b) = theme_color(category);
    println!("\n {} {}", "■".truecolor(r, g, b), category.figure().bold());
    println!(" {}\n", category.description().dimmed());

    print_map_line(category, image, status);

    println!(
        "\n {} Detailed Data ({})\n",
        "[DATA]".bold(),
        category.table_ref()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Barangay").add_attribute(Attribute::Bold),
            Cell::new(category.value_header()).add_attribute(Attribute::Bold),
            Cell::new("Rating").add_attribute(Attribute::Bold),
        ]);

    for row in rows {
        let badge = rating_badge(category, row.rating, row.value);
        table.add_row(vec![
            Cell::new(row.rank).set_alignment(CellAlignment::Right),
            Cell::new(row.name),
            Cell::new(format!("{:.3}", row.value)).set_alignment(CellAlignment::Right),
            Cell::new(row.rating.to_string().to_uppercase())
                .fg(color(badge.fg))
                .bg(color(badge.bg))
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
    println!(" {} 2025 Thesis Tables.", "Data Source:".bold());
    Ok(())
}

/// The about page: objective, methodology, key findings and research team.
pub fn render_about(study: &Study) -> Result<()> {
    println!("\n {}", "About the Study".bold());
    println!(" {}\n", study.title.dimmed());

    println!(" {} {}", "■".blue(), "Objective".bold());
    println!("   {}\n", study.objective);
    println!(" {} {}", "■".green(), "Methodology".bold());
    println!("   {}\n", study.methodology);

    println!(" {}", "Key Findings".bold());
    let markers = [
        risk_marker(RiskLevel::High),
        theme_color(MapCategory::Fri),
        theme_color(MapCategory::HardCm),
    ];
    for (finding, Rgb(r, g, b)) in study.key_findings.iter().zip(markers.into_iter().cycle()) {
        println!(
            "   {} {} {}",
            "●".truecolor(r, g, b),
            finding.headline.bold(),
            finding.detail
        );
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Research Team").add_attribute(Attribute::Bold)]);
    for member in study.research_team {
        table.add_row(vec![Cell::new(member)]);
    }

    println!("\n{}", table);
    Ok(())
}

/// One line per category describing where its map image comes from.
pub fn render_map_status(entries: &[(MapCategory, MapImage, MapStatus)]) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Figure").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for (category, image, status) in entries {
        let status_color = match status {
            MapStatus::Custom => Color::Green,
            MapStatus::SystemLoaded => Color::DarkYellow,
            MapStatus::Missing => Color::DarkGrey,
        };
        table.add_row(vec![
            Cell::new(category.key()),
            Cell::new(category.figure()),
            Cell::new(describe_source(image)),
            Cell::new(status.to_string()).fg(status_color),
        ]);
    }

    println!("{}", table);
    Ok(())
}

fn print_map_line(category: MapCategory, image: &MapImage, status: MapStatus) {
    match status {
        MapStatus::Custom => println!(
            " {} {} ({})",
            "✓".green(),
            status.to_string().green(),
            describe_source(image)
        ),
        MapStatus::SystemLoaded => println!(
            " {} {} ({})",
            "✓".yellow(),
            status.to_string().yellow(),
            image.source
        ),
        MapStatus::Missing => {
            println!(" {} {}", "✗".red(), "Map Image Missing".bold());
            println!(
                "   System could not find {}. Retry with `manabo-atlas maps retry {}` or supply one with `maps put`.",
                category.image_path(),
                category.key().to_lowercase().replace('_', "-")
            );
        }
    }
}

/// Short description of an image source; data URLs are summarized, not printed.
pub fn describe_source(image: &MapImage) -> String {
    if !image.is_custom {
        return image.source.clone();
    }
    let mime = image
        .source
        .strip_prefix("data:")
        .and_then(|s| s.split(';').next())
        .unwrap_or("image");
    format!("custom {} ({} KiB)", mime, image.source.len() / 1024)
}

/// Print one advisor message with a role prefix.
pub fn render_message(message: &ChatMessage) -> Result<()> {
    let body = markdown_bold(&message.text)?;
    let prefix = match (message.role, message.is_error) {
        (Role::User, _) => "you".blue().bold(),
        (Role::Model, false) => "advisor".green().bold(),
        (Role::Model, true) => "advisor".red().bold(),
    };
    if message.is_error {
        println!("{} {}", prefix, body.red());
    } else {
        println!("{} {}", prefix, body);
    }
    Ok(())
}

/// Render `**bold**` spans as terminal bold.
pub fn markdown_bold(text: &str) -> Result<String> {
    let re = Regex::new(r"\*\*(.*?)\*\*")?;
    Ok(re
        .replace_all(text, |caps: &regex::Captures| caps[1].bold().to_string())
        .into_owned())
}

/// Horizontal bar of `width` cells, filled in proportion to `value` in `[0, 1]`.
pub fn bar(value: f64, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn paint(text: &str, bg: Rgb, fg: Rgb) -> ColoredString {
    text.truecolor(fg.0, fg.1, fg.2).on_truecolor(bg.0, bg.1, bg.2).bold()
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(1.0, 4), "████");
        assert_eq!(bar(1.7, 4), "████");
    }

    #[test]
    fn test_markdown_bold() {
        colored::control::set_override(false);
        assert_eq!(
            markdown_bold("Luzong is **High** risk, **act now**.").unwrap(),
            "Luzong is High risk, act now."
        );
        assert_eq!(markdown_bold("no markup").unwrap(), "no markup");
    }

    #[test]
    fn test_render_about() {
        colored::control::set_override(false);
        assert!(render_about(&crate::data::STUDY).is_ok());
    }

    #[test]
    fn test_describe_source() {
        let default = MapImage {
            source: "/fri_map.png?t=0".into(),
            is_custom: false,
        };
        assert_eq!(describe_source(&default), "/fri_map.png?t=0");

        let custom = MapImage {
            source: format!("data:image/jpeg;base64,{}", "A".repeat(4096)),
            is_custom: true,
        };
        assert_eq!(describe_source(&custom), "custom image/jpeg (4 KiB)");
    }
}
