use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use pkinterp::config::{self, Config, Source, DEFAULT_OUTPUT, DEFAULT_STEP};
use pkinterp::{io, parse_pk, CoordinateInterpolator, Method};

/// Interpolate geographic coordinates along a route at a fixed PK spacing.
#[derive(Parser)]
#[command(name = "pkinterp", version)]
struct Cli {
    /// Log debug details
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate a sample file and write the result as JSON.
    Interpolate(InterpolateArgs),
    /// Run a job described by a JSON configuration file.
    Run {
        config: PathBuf,
        /// Override the output path (`-` for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the interpolation method
        #[arg(short, long, value_enum)]
        method: Option<Method>,
        /// Override the PK step
        #[arg(short, long)]
        step: Option<f64>,
        /// Override the SVG chart path
        #[arg(long)]
        plot: Option<PathBuf>,
    },
    /// Print the coordinates at a single PK, e.g. `12.5` or `"PK 12.5"`.
    Locate {
        input: PathBuf,
        #[arg(allow_hyphen_values = true)]
        pk: String,
        #[arg(short, long, value_enum, default_value_t = Method::Linear)]
        method: Method,
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
}

#[derive(Args)]
struct InterpolateArgs {
    /// Sample file (.csv, .tsv, .txt or .json) with pk, latitude and longitude
    input: PathBuf,
    /// Output JSON path (`-` for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Method::Linear)]
    method: Method,
    /// PK spacing of the output, in the unit of the input PK
    #[arg(short, long, default_value_t = DEFAULT_STEP)]
    step: f64,
    /// Field delimiter of delimited input
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
    /// Also write an SVG chart of source and interpolated samples
    #[arg(long)]
    plot: Option<PathBuf>,
}

impl From<InterpolateArgs> for Config {
    fn from(args: InterpolateArgs) -> Self {
        Config {
            source: Source::File(args.input),
            method: args.method,
            step: args.step,
            output: args.output,
            plot: args.plot,
            delimiter: args.delimiter,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Interpolate(args) => run_job(args.into()),
        Commands::Run {
            config,
            output,
            method,
            step,
            plot,
        } => {
            let mut job = Config::load(&config)
                .with_context(|| format!("failed to load {}", config.display()))?;
            if let Some(output) = output {
                job.output = output;
            }
            if let Some(method) = method {
                job.method = method;
            }
            if let Some(step) = step {
                job.step = step;
            }
            if plot.is_some() {
                job.plot = plot;
            }
            run_job(job)
        }
        Commands::Locate {
            input,
            pk,
            method,
            delimiter,
        } => {
            let pk = parse_pk(&pk).ok_or_else(|| anyhow!("not a PK: {pk:?}"))?;
            let samples = io::read_samples(&input, io::delimiter_byte(delimiter)?)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let sample = CoordinateInterpolator::new(&samples, method)?.locate(pk)?;
            println!("{},{},{}", sample.pk, sample.latitude, sample.longitude);
            Ok(())
        }
    }
}

fn run_job(job: Config) -> Result<()> {
    let table = config::run(&job).with_context(|| match &job.source {
        Source::File(path) => format!("interpolation of {} failed", path.display()),
        Source::Samples(_) => "interpolation of inline samples failed".to_string(),
    })?;
    log::debug!("Produced {} samples", table.len());
    Ok(())
}
