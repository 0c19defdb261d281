use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::loader::DataSource;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

/// Palmer penguins dashboard.
///
/// Log verbosity is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).
#[derive(Debug, Parser)]
#[command(name = "penguin-dash", version, about)]
pub struct Cli {
    /// Load penguins from this CSV instead of the bundled dataset.
    #[arg(long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Initial mass threshold in grams (clamped to the slider range).
    #[arg(long, value_name = "GRAMS")]
    pub mass: Option<f64>,

    #[arg(long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    pub data_source: DataSource,
    pub mass_range: RangeInclusive<f64>,
    pub initial_mass: f64,
    /// Checkbox labels, in display order. All start selected.
    pub species_choices: Vec<String>,
    pub theme: Theme,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Shellenberger Modlue 07 Penguins dashboard".to_string(),
            data_source: DataSource::Bundled,
            mass_range: 2000.0..=6000.0,
            initial_mass: 6000.0,
            species_choices: ["Adelie", "Gentoo", "Chinstrap"]
                .into_iter()
                .map(String::from)
                .collect(),
            theme: Theme::Light,
        }
    }
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        let defaults = DashboardConfig::default();
        let data_source = cli.data.map_or(DataSource::Bundled, DataSource::Csv);
        let initial_mass = cli
            .mass
            .filter(|m| m.is_finite())
            .map(|m| m.clamp(*defaults.mass_range.start(), *defaults.mass_range.end()))
            .unwrap_or(defaults.initial_mass);

        DashboardConfig {
            data_source,
            initial_mass,
            theme: cli.theme,
            ..defaults
        }
    }
}
