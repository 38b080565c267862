mod args;
mod loader;
mod models;
mod present;
mod report;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::args::Args;
use crate::present::{write_charts, write_top_guests, Dashboard};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level());

    let timer = Instant::now();
    let loaded = loader::load_data(args.data_dir()).await?;
    let duration = timer.elapsed();

    info!("Loaded {} transactions in: {duration:?}", loaded.len());

    let dated = loaded.dated();
    debug!("Countries available for filtering: {:?}", dated.countries());

    let table = dated.filter_countries(args.countries());
    info!("{} of {} dated transactions match the country filter", table.len(), dated.len());

    if table.is_empty() {
        warn!("No transactions left to report on");
    }

    let dashboard = Dashboard::new(&table, args.locale(), args.top_n(), args.exclude_room_codes());

    write_report(&dashboard, &args)?;

    if let Some(directory) = args.charts_dir() {
        let written = write_charts(directory, &dashboard.charts(args.view()))?;
        info!("Wrote {} chart specs to {}", written.len(), directory.display());
    }

    if let Some(target) = args.export_guests() {
        let path = write_top_guests(target, &dashboard.top_guests())?;
        eprintln!("{} {}", dashboard.labels().export_saved, path.display());
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report(dashboard: &Dashboard<'_>, args: &Args) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for line in dashboard.header(args.countries()) {
        writeln!(output, "{line}")?;
    }

    for line in dashboard.render(args.view()) {
        writeln!(output, "{line}")?;
    }

    output.flush()?;

    Ok(())
}
