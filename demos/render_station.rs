// demos/render_station.rs
//
// Usage: cargo run --example render_station -- <dataset path or URL> [station id] [metric] [layout]
use station_temps::{
    spawn_load, station_list, ChartConfig, ChartLayout, ChartOutcome, DatasetSource, LoadMessage,
    Metric, Selection, StationTempsError,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), StationTempsError> {
    // Set RUST_LOG=info (or debug) to see loader and pipeline messages
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(location) = args.next() else {
        eprintln!("usage: render_station <dataset path or URL> [station id] [metric] [layout]");
        return Ok(());
    };
    let source = if location.starts_with("http://") || location.starts_with("https://") {
        DatasetSource::Url(location)
    } else {
        DatasetSource::Path(PathBuf::from(location))
    };

    let dataset = match spawn_load(source).wait().await {
        LoadMessage::Loaded(dataset) => dataset,
        LoadMessage::Failed(reason) => {
            eprintln!("Error loading dataset: {reason}");
            return Ok(());
        }
    };

    let stations = station_list(&dataset);
    println!("{} stations loaded", stations.len());
    for summary in stations.iter().take(10) {
        println!("  {:>8}  {}", summary.id, summary.name);
    }

    let station_id = match args.next() {
        Some(id) => id,
        None => match stations.first() {
            Some(summary) => summary.id.clone(),
            None => return Ok(()),
        },
    };
    let metric: Metric = args.next().as_deref().unwrap_or("average").parse()?;
    let layout: ChartLayout = args.next().as_deref().unwrap_or("first").parse()?;

    let selection = Selection::builder()
        .station_id(station_id)
        .metric(metric)
        .layout(layout)
        .build();
    let config = ChartConfig::default();

    match station_temps::render_chart(&dataset, &selection, &config)? {
        ChartOutcome::Chart(chart) => {
            println!(
                "{} bars for {} ({}, {}), value domain {:?}",
                chart.bars.len(),
                selection.station_id,
                metric,
                layout,
                chart.scales.value.domain()
            );
            for bar in chart.bars.iter().take(5) {
                println!(
                    "  {:<28} x={:>7.2} y={:>7.2} w={:>5.2} {}",
                    bar.title, bar.x, bar.y, bar.width, bar.fill
                );
            }
            let ticks: Vec<&str> = chart.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
            println!("x axis: {}", ticks.join(", "));
        }
        ChartOutcome::NoData => println!("No data for this station in {}", selection.range),
    }

    Ok(())
}
