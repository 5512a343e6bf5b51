use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::MapCategory;

#[derive(Parser, Debug)]
#[command(
    name = "manabo-atlas",
    about = "Flood risk dashboard, map atlas and resilience advisor for Manabo, Abra",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.manabo-atlas/config.toml, fallback ~/.config/manabo-atlas/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the risk dashboard for one barangay
    Dashboard {
        /// Barangay id (e.g. luzong, sto-tomas)
        #[arg(default_value = "luzong")]
        barangay: String,

        /// Output format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        format: ReportFormat,
    },

    /// Rank all barangays by one indicator and show its map status
    Atlas {
        /// Indicator category
        #[arg(short, long, default_value = "fri", value_name = "CATEGORY")]
        category: CategoryArg,

        /// Output format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        format: ReportFormat,
    },

    /// Manage custom map images
    #[command(subcommand)]
    Maps(MapsCommand),

    /// Ask the flood resilience advisor; starts an interactive session without a message
    Advise {
        /// Question to ask
        message: Vec<String>,
    },

    /// Render a PNG chart
    #[command(subcommand)]
    Chart(ChartCommand),

    /// Show the study behind the data: objective, methodology, findings and team
    About {
        /// Output format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        format: ReportFormat,
    },

    /// Write a PDF report of every indicator table
    Report {
        /// PDF output path
        #[arg(long, value_name = "FILE", default_value = "manabo-flood-risk.pdf")]
        pdf: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum MapsCommand {
    /// Show where each category's map comes from
    Status,

    /// Use an image file as the map for a category
    Put {
        category: CategoryArg,
        file: PathBuf,
    },

    /// Remove the custom map for a category and fall back to the default
    Clear { category: CategoryArg },

    /// Re-check a default map that failed to load
    Retry { category: CategoryArg },

    /// Write a category's custom map back to an image file
    Export {
        category: CategoryArg,
        /// Output path; the extension is chosen from the image type when omitted
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChartCommand {
    /// Ranked bar chart of one indicator
    Bars {
        #[arg(short, long, default_value = "fri", value_name = "CATEGORY")]
        category: CategoryArg,

        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Radar chart of one barangay's five indicators
    Radar {
        #[arg(default_value = "luzong")]
        barangay: String,

        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    Fri,
    Hazard,
    Vulnerability,
    Exposure,
    SoftCm,
    HardCm,
}

impl From<CategoryArg> for MapCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Fri => MapCategory::Fri,
            CategoryArg::Hazard => MapCategory::Hazard,
            CategoryArg::Vulnerability => MapCategory::Vulnerability,
            CategoryArg::Exposure => MapCategory::Exposure,
            CategoryArg::SoftCm => MapCategory::SoftCm,
            CategoryArg::HardCm => MapCategory::HardCm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_atlas_category() {
        let cli = Cli::parse_from(["manabo-atlas", "atlas", "--category", "hard-cm"]);
        match cli.command {
            Command::Atlas { category, .. } => {
                assert_eq!(MapCategory::from(category), MapCategory::HardCm)
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_maps_put() {
        let cli = Cli::parse_from(["manabo-atlas", "-v", "maps", "put", "soft-cm", "map.png"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Maps(MapsCommand::Put { category: CategoryArg::SoftCm, .. })
        ));
    }

    #[test]
    fn test_advise_message_words() {
        let cli = Cli::parse_from(["manabo-atlas", "advise", "Is", "Luzong", "safe?"]);
        match cli.command {
            Command::Advise { message } => assert_eq!(message.join(" "), "Is Luzong safe?"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_about_json() {
        let cli = Cli::parse_from(["manabo-atlas", "about", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Command::About { format: ReportFormat::Json }
        ));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
