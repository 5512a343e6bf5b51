use crate::models::{MapCategory, Rating, RiskLevel};

/// An sRGB colour shared by the terminal, chart and PDF renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Channels scaled to `0.0..=1.0`, as printpdf expects.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Background/foreground pair for a rating badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub bg: Rgb,
    pub fg: Rgb,
}

const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

/// Base colour of each category (red hazard, green vulnerability, ...).
pub fn theme_color(category: MapCategory) -> Rgb {
    match category {
        MapCategory::Hazard => Rgb(0xdc, 0x26, 0x26),
        MapCategory::Vulnerability => Rgb(0x16, 0xa3, 0x4a),
        MapCategory::Exposure => Rgb(0x4b, 0x55, 0x63),
        MapCategory::SoftCm => Rgb(0xfa, 0xcc, 0x15),
        MapCategory::HardCm => Rgb(0x25, 0x63, 0xeb),
        MapCategory::Fri => Rgb(0xf9, 0x73, 0x16),
    }
}

/// Choropleth shade used on the printed maps for `rating` in `category`.
pub fn map_shade(category: MapCategory, rating: Rating) -> Rgb {
    match category {
        MapCategory::Fri => match rating {
            Rating::VeryHigh => Rgb(0x7c, 0x2d, 0x12),
            Rating::High => Rgb(0xea, 0x58, 0x0c),
            Rating::Moderate => Rgb(0xf9, 0x73, 0x16),
            Rating::Low | Rating::LowOrVeryLow => Rgb(0xfd, 0xba, 0x74),
            Rating::VeryLow => Rgb(0xff, 0xed, 0xd5),
        },
        MapCategory::Hazard => match rating {
            Rating::VeryHigh => Rgb(0x99, 0x1b, 0x1b),
            Rating::High => Rgb(0xdc, 0x26, 0x26),
            Rating::Moderate => Rgb(0xef, 0x44, 0x44),
            Rating::Low | Rating::LowOrVeryLow => Rgb(0xfc, 0xa5, 0xa5),
            Rating::VeryLow => Rgb(0xfe, 0xe2, 0xe2),
        },
        MapCategory::Vulnerability => match rating {
            Rating::VeryHigh => Rgb(0x14, 0x53, 0x2d),
            Rating::High => Rgb(0x16, 0xa3, 0x4a),
            Rating::Moderate => Rgb(0x4a, 0xde, 0x80),
            Rating::Low | Rating::LowOrVeryLow => Rgb(0x86, 0xef, 0xac),
            Rating::VeryLow => Rgb(0xdc, 0xfc, 0xe7),
        },
        MapCategory::Exposure => match rating {
            Rating::VeryHigh => Rgb(0x1f, 0x29, 0x37),
            Rating::High => Rgb(0x4b, 0x55, 0x63),
            Rating::Moderate => Rgb(0x9c, 0xa3, 0xaf),
            Rating::Low | Rating::LowOrVeryLow => Rgb(0xd1, 0xd5, 0xdb),
            Rating::VeryLow => Rgb(0xf3, 0xf4, 0xf6),
        },
        MapCategory::HardCm => match rating {
            Rating::VeryHigh | Rating::High | Rating::Moderate => Rgb(0x25, 0x63, 0xeb),
            Rating::Low | Rating::LowOrVeryLow => Rgb(0x60, 0xa5, 0xfa),
            Rating::VeryLow => Rgb(0xbf, 0xdb, 0xfe),
        },
        // One uniform yellow across every barangay.
        MapCategory::SoftCm => Rgb(0xfd, 0xe0, 0x47),
    }
}

/// Badge colours for a row of the ranked atlas table.
///
/// FRI and hazard share a red-to-orange scale; the other categories use a
/// tint of their theme colour. Hard countermeasures colour by presence
/// (`value > 0`) rather than by rating.
pub fn rating_badge(category: MapCategory, rating: Rating, value: f64) -> Badge {
    match category {
        MapCategory::Fri | MapCategory::Hazard => match rating {
            Rating::VeryHigh => Badge { bg: Rgb(0x7f, 0x1d, 0x1d), fg: WHITE },
            Rating::High => Badge { bg: Rgb(0xdc, 0x26, 0x26), fg: WHITE },
            Rating::Moderate => Badge { bg: Rgb(0xf9, 0x73, 0x16), fg: WHITE },
            Rating::Low | Rating::LowOrVeryLow | Rating::VeryLow => Badge {
                bg: Rgb(0xfe, 0xd7, 0xaa),
                fg: Rgb(0x7c, 0x2d, 0x12),
            },
        },
        MapCategory::Vulnerability => match rating {
            Rating::Moderate => Badge { bg: Rgb(0x22, 0xc5, 0x5e), fg: WHITE },
            _ => Badge {
                bg: Rgb(0xbb, 0xf7, 0xd0),
                fg: Rgb(0x14, 0x53, 0x2d),
            },
        },
        MapCategory::HardCm => {
            if value > 0.0 {
                Badge { bg: Rgb(0x3b, 0x82, 0xf6), fg: WHITE }
            } else {
                Badge {
                    bg: Rgb(0xdb, 0xea, 0xfe),
                    fg: Rgb(0x1e, 0x3a, 0x8a),
                }
            }
        }
        MapCategory::SoftCm => Badge {
            bg: Rgb(0xfe, 0xf0, 0x8a),
            fg: Rgb(0x71, 0x3f, 0x12),
        },
        MapCategory::Exposure => match rating {
            Rating::VeryHigh | Rating::High => Badge { bg: Rgb(0x33, 0x41, 0x55), fg: WHITE },
            Rating::Moderate => Badge { bg: Rgb(0x94, 0xa3, 0xb8), fg: WHITE },
            _ => Badge {
                bg: Rgb(0xe2, 0xe8, 0xf0),
                fg: Rgb(0x1e, 0x29, 0x3b),
            },
        },
    }
}

/// Dashboard badge for a record's published risk level.
pub fn risk_badge(level: RiskLevel) -> Badge {
    let bg = match level {
        RiskLevel::VeryHigh => Rgb(0x7f, 0x1d, 0x1d),
        RiskLevel::High => Rgb(0xdc, 0x26, 0x26),
        RiskLevel::Moderate => Rgb(0xf9, 0x73, 0x16),
        RiskLevel::Low => Rgb(0xea, 0xb3, 0x08),
        RiskLevel::VeryLow => Rgb(0x16, 0xa3, 0x4a),
    };
    Badge { bg, fg: WHITE }
}

/// Marker dot next to each name in the dashboard list.
pub fn risk_marker(level: RiskLevel) -> Rgb {
    match level {
        RiskLevel::VeryHigh | RiskLevel::High => Rgb(0xef, 0x44, 0x44),
        RiskLevel::Moderate => Rgb(0xfb, 0x92, 0x3c),
        RiskLevel::Low | RiskLevel::VeryLow => Rgb(0x4a, 0xde, 0x80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(theme_color(MapCategory::Fri).hex(), "#f97316");
        assert_eq!(theme_color(MapCategory::HardCm).hex(), "#2563eb");
    }

    #[test]
    fn test_unit_scaling() {
        assert_eq!(Rgb(255, 0, 255).unit(), (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_hard_cm_badge_depends_on_presence() {
        let present = rating_badge(MapCategory::HardCm, Rating::LowOrVeryLow, 0.167);
        let absent = rating_badge(MapCategory::HardCm, Rating::VeryLow, 0.0);
        assert_eq!(present.fg, WHITE);
        assert_ne!(present, absent);
    }

    #[test]
    fn test_soft_cm_shade_is_uniform() {
        assert_eq!(
            map_shade(MapCategory::SoftCm, Rating::Low),
            map_shade(MapCategory::SoftCm, Rating::VeryHigh)
        );
    }
}
