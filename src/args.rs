//! Command-line configuration.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::present::{Locale, View};

pub const DEFAULT_TOP_N: u16 = 15;

/// revenue-compare: compares hotel net revenue between January 2025 and January 2026.
///
/// Reads `Spend by Country (1).csv` (2025) and `Spend by Country.csv` (2026) from the
/// data directory and prints KPIs, charts and comparison tables. The report goes to
/// stdout, logs go to stderr.
#[derive(Debug, Parser, Clone)]
#[command(name = "revenue-compare", version)]
pub struct Args {
    /// Directory holding the two source exports.
    #[arg(long, env = "REVENUE_COMPARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// How many countries, rooms, descriptions and guests to keep.
    #[arg(
        long,
        env = "REVENUE_COMPARE_TOP_N",
        default_value_t = DEFAULT_TOP_N,
        value_parser = clap::value_parser!(u16).range(5..=30)
    )]
    top_n: u16,

    /// Only include these countries. Repeat for several; omit for all.
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Which tab of the report to print.
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Label language.
    #[arg(long, env = "REVENUE_COMPARE_LOCALE", value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Keep the PF and PM room codes in the room chart.
    #[arg(long)]
    keep_room_codes: bool,

    /// Write every chart of the selected view as JSON into this directory.
    #[arg(long)]
    charts_dir: Option<PathBuf>,

    /// Write the top guests table as CSV to this file or directory.
    #[arg(long)]
    export_guests: Option<PathBuf>,

    /// The logging verbosity: error, warn, info, debug, trace.
    #[arg(long, default_value_t = LevelFilter::ERROR)]
    log_level: LevelFilter
}

impl Args {
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn top_n(&self) -> usize {
        usize::from(self.top_n)
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn exclude_room_codes(&self) -> bool {
        !self.keep_room_codes
    }

    pub fn charts_dir(&self) -> Option<&Path> {
        self.charts_dir.as_deref()
    }

    pub fn export_guests(&self) -> Option<&Path> {
        self.export_guests.as_deref()
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

#[cfg(test)]
mod tests {
    use super::Args;

    use anyhow::Result;
    use clap::Parser;
    use tracing::level_filters::LevelFilter;

    use crate::present::{Locale, View};

    #[test]
    fn test_defaults_cover_every_view_in_english() -> Result<()> {
        let args = Args::try_parse_from(["revenue-compare"])?;

        assert_eq!(args.top_n(), 15);
        assert_eq!(args.view(), View::All);
        assert_eq!(args.locale(), Locale::En);
        assert!(args.countries().is_empty());
        assert!(args.exclude_room_codes());
        assert_eq!(args.log_level(), LevelFilter::ERROR);

        Ok(())
    }

    #[test]
    fn test_flags_are_parsed() -> Result<()> {
        let args = Args::try_parse_from([
            "revenue-compare",
            "--top-n", "20",
            "--country", "VN",
            "--country", "KR",
            "--view", "detail",
            "--locale", "vi",
            "--keep-room-codes",
            "--log-level", "debug",
        ])?;

        assert_eq!(args.top_n(), 20);
        assert_eq!(args.countries(), ["VN".to_string(), "KR".to_string()]);
        assert_eq!(args.view(), View::Detail);
        assert_eq!(args.locale(), Locale::Vi);
        assert!(!args.exclude_room_codes());
        assert_eq!(args.log_level(), LevelFilter::DEBUG);

        Ok(())
    }

    #[test]
    fn test_top_n_outside_bounds_is_rejected() {
        assert!(Args::try_parse_from(["revenue-compare", "--top-n", "4"]).is_err());
        assert!(Args::try_parse_from(["revenue-compare", "--top-n", "31"]).is_err());
    }
}
