mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use compass_astro::{HouseCusps, sign_from_longitude};
use compass_config::CompassConfig;
use compass_rs::{BirthInput, CompassError, LifeCompass, LifeCompassResult, ProfileReport, ordinal};

#[derive(Parser)]
#[command(name = "compass", about = "Life compass: lunar node narrative from a birth", version)]
struct Cli {
    /// Config file (default: $LIFE_COMPASS_CONFIG, then ./compass.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging for the pipeline
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full life compass narrative for a birth
    Profile {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local wall-clock birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Birth place, exactly as in the place table
        #[arg(long)]
        place: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Coordinates and timezone of a place
    Place {
        /// Place name, exactly as in the place table
        query: String,
    },
    /// Node longitudes, signs, houses and cusps for a birth
    Nodes {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local wall-clock birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Birth place, exactly as in the place table
        #[arg(long)]
        place: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// House containing a longitude, for the given cusps
    House {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// 12 cusp longitudes (or 13 with an unused first slot), comma-separated
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        cusps: Vec<f64>,
    },
    /// English ordinal of a number
    Ordinal { n: u32 },
}

/// Pipeline failure or output encoding failure.
#[derive(Debug)]
enum CliError {
    Compass(CompassError),
    Output(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compass(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "could not encode output: {e}"),
        }
    }
}

impl From<CompassError> for CliError {
    fn from(e: CompassError) -> Self {
        Self::Compass(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };
    logging::init(&config.logging, cli.verbose);
    tracing::debug!(
        places = %config.data.places.display(),
        node_mode = ?config.astro.node_mode,
        "configuration loaded"
    );

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<CompassConfig, CompassError> {
    Ok(match path {
        Some(p) => CompassConfig::load(p)?,
        None => CompassConfig::discover()?,
    })
}

/// 2 when the user can fix the request, 1 otherwise.
fn exit_code(err: &CliError) -> u8 {
    match err {
        CliError::Compass(e) if e.is_user_correctable() => 2,
        _ => 1,
    }
}

fn run(command: Commands, config: &CompassConfig) -> Result<(), CliError> {
    match command {
        Commands::Profile {
            date,
            time,
            place,
            json,
        } => {
            let compass = LifeCompass::from_config(config)?;
            let result = compass.build_profile(&BirthInput::parse(&date, &time, &place)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_profile(&result);
            }
        }

        Commands::Place { query } => {
            let compass = LifeCompass::from_config(config)?;
            let p = compass.resolve_place(&query)?;
            println!(
                "{}: lat {:.4}, lon {:.4}, timezone {}",
                p.query, p.lat, p.lon, p.timezone
            );
        }

        Commands::Nodes {
            date,
            time,
            place,
            json,
        } => {
            let compass = LifeCompass::from_config(config)?;
            let report = compass.node_chart(&BirthInput::parse(&date, &time, &place)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_nodes(&report);
            }
        }

        Commands::Sign { lon } => {
            let pos = sign_from_longitude(lon);
            println!(
                "{} {} - {} ({:.4} deg in sign)",
                pos.sign.symbol(),
                pos.sign,
                pos.dms,
                pos.degrees_in_sign
            );
        }

        Commands::House { lon, cusps } => {
            let cusps = HouseCusps::from_raw(&cusps)
                .map_err(|e| CompassError::InvalidInput(e.to_string()))?;
            let house = cusps.house_of(lon);
            println!("{} house", ordinal(u32::from(house)));
        }

        Commands::Ordinal { n } => println!("{}", ordinal(n)),
    }
    Ok(())
}

fn print_profile(r: &LifeCompassResult) {
    println!("{}", r.title);
    println!();
    println!("{}", r.bridge);
    for s in &r.sections {
        println!();
        println!("{}", s.context);
        println!("  {}", s.meaning);
        if let Some(direction) = &s.direction {
            println!("  → {direction}");
        }
    }
    println!();
    println!("Recommendations:");
    for (i, rec) in r.recommendations.iter().enumerate() {
        println!("  {}. {rec}", i + 1);
    }
    println!();
    println!("Motto: {}", r.motto);
}

fn print_nodes(r: &ProfileReport) {
    println!(
        "Place:    {} ({:.4}, {:.4}) {}",
        r.place.query, r.place.lat, r.place.lon, r.place.timezone
    );
    println!("Local:    {} ({})", r.local_time, r.local_time_resolution);
    println!("UTC:      {}", r.utc_time);
    println!("JD (UT):  {:.6}", r.jd_ut);
    println!(
        "North:    {:.4} deg  {} {}  {} house",
        r.north.longitude_deg,
        r.north.sign,
        r.north.dms,
        ordinal(u32::from(r.north.house))
    );
    println!(
        "South:    {:.4} deg  {} {}  {} house",
        r.south.longitude_deg,
        r.south.sign,
        r.south.dms,
        ordinal(u32::from(r.south.house))
    );
    println!("Node:     {}", r.node_mode);
    println!("Houses:   {}", r.house_system);
    println!("Asc:      {:.4} deg", r.ascendant_deg);
    println!("MC:       {:.4} deg", r.mc_deg);
    for (i, c) in r.cusps.iter().enumerate() {
        println!("  Cusp {:>2}: {c:.4} deg", i + 1);
    }
}
