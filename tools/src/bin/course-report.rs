use clap::Parser;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::path::PathBuf;
use vendee_api::Location;

#[derive(Parser, Debug)]
#[command()]
struct Arguments {
    /// Course config (JSON). Defaults to the built-in route.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start location as LAT,LON
    #[arg(short, long, value_parser = vendee_tools::parse_location, allow_hyphen_values = true)]
    start: Location,

    /// Print legs as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("course_report=info"))
        .init();

    let args = Arguments::parse();
    let config = vendee_tools::load_config(args.config.as_deref())?;
    let course = config.build(args.start)?;
    let legs = vendee_tools::legs(&course, args.start);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&legs)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "#",
        "Latitude",
        "Longitude",
        "Radius (km)",
        "Leg (km)",
        "Bearing",
        "Total (km)",
    ]);
    for leg in &legs {
        table.add_row(vec![
            leg.index.to_string(),
            format!("{:.4}", leg.location.latitude),
            format!("{:.4}", leg.location.longitude),
            format!("{:.0}", leg.radius),
            format!("{:.0}", leg.distance),
            format!("{:.0}", leg.bearing),
            format!("{:.0}", leg.cumulative_distance),
        ]);
    }
    println!("Team {:?}\n{table}", config.team);

    Ok(())
}
