//! Job configuration and the load / interpolate / write / plot pipeline.
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interpolate::interpolate;
use crate::io;
use crate::method::Method;
use crate::sample::{InterpolatedTable, SampleTable};

pub const DEFAULT_STEP: f64 = 0.1;
pub const DEFAULT_OUTPUT: &str = "interpolated_coords.json";
pub const DEFAULT_DELIMITER: char = ',';

/// Where the source samples come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// A delimited text or JSON file
    File(PathBuf),
    /// Samples given inline
    Samples(SampleTable),
}

/// One interpolation job.
///
/// Relative paths are taken relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub source: Source,
    #[serde(default)]
    pub method: Method,
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// SVG diagnostic chart, only written when set
    #[serde(default)]
    pub plot: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Config {
    /// A job with default settings for `source`.
    pub fn new(source: Source) -> Self {
        Self {
            source,
            method: Method::default(),
            step: DEFAULT_STEP,
            output: default_output(),
            plot: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Loads a job description from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Saves this job description to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        io::delimiter_byte(self.delimiter)
    }

    /// Resolve the source into a validated sample table.
    pub fn load_samples(&self) -> Result<Cow<'_, SampleTable>> {
        match &self.source {
            Source::File(path) => Ok(Cow::Owned(io::read_samples(
                path,
                self.delimiter_byte()?,
            )?)),
            Source::Samples(table) => Ok(Cow::Borrowed(table)),
        }
    }
}

/// Run one job: load the samples, interpolate them, write the JSON output,
/// then render the chart if one was requested.
///
/// Nothing is written unless the interpolation succeeds.
pub fn run(config: &Config) -> Result<InterpolatedTable> {
    let samples = config.load_samples()?;
    if let Some((min, max)) = samples.pk_range() {
        log::info!(
            "Interpolating {} samples over PK [{min}, {max}] with {} method, step {}",
            samples.len(),
            config.method,
            config.step
        );
    }

    let table = interpolate(&samples, config.step, config.method)?;
    io::write_table(&config.output, &table)?;

    if let Some(path) = &config.plot {
        render_plot(path, &samples, &table)?;
    }

    Ok(table)
}

#[cfg(feature = "plot")]
fn render_plot(path: &Path, samples: &SampleTable, table: &InterpolatedTable) -> Result<()> {
    crate::plot::render_svg(path, samples, table)
}

#[cfg(not(feature = "plot"))]
fn render_plot(path: &Path, _samples: &SampleTable, _table: &InterpolatedTable) -> Result<()> {
    log::warn!(
        "Skipping plot {}: built without the `plot` feature",
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::{run, Config, Source, DEFAULT_STEP};
    use crate::error::{Error, InterpError};
    use crate::method::Method;
    use crate::sample::{Sample, SampleTable};

    fn inline_table() -> SampleTable {
        SampleTable::new(vec![
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 1.0, 2.0),
            Sample::new(2.0, 2.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str(r#"{"source": {"file": "coords.csv"}}"#).unwrap();
        assert_eq!(config.source, Source::File(PathBuf::from("coords.csv")));
        assert_eq!(config.method, Method::Linear);
        assert_eq!(config.step, DEFAULT_STEP);
        assert_eq!(config.output, PathBuf::from("interpolated_coords.json"));
        assert_eq!(config.plot, None);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_inline_samples() {
        let config: Config = serde_json::from_str(
            r#"{
                "source": {"samples": [
                    {"pk": 0, "latitude": 0, "longitude": 0},
                    {"pk": 1, "latitude": 1, "longitude": 2}
                ]},
                "method": "nearest",
                "step": 0.25,
                "delimiter": ";"
            }"#,
        )
        .unwrap();
        assert_eq!(config.method, Method::Nearest);
        assert_eq!(config.step, 0.25);
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.load_samples().unwrap().len(), 2);
    }

    #[test]
    fn test_bad_delimiter() {
        let mut config = Config::new(Source::Samples(inline_table()));
        config.delimiter = 'é';
        assert!(matches!(config.delimiter_byte(), Err(Error::Config(_))));
    }

    #[test]
    fn test_run_writes_output() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut config = Config::new(Source::Samples(inline_table()));
        config.step = 0.5;
        config.output = dir.path().join("out.json");

        let table = run(&config).unwrap();
        assert_eq!(table.len(), 4);

        let written: Vec<Sample> =
            serde_json::from_str(&std::fs::read_to_string(&config.output).unwrap()).unwrap();
        assert_eq!(written, table.samples());
    }

    #[test]
    fn test_run_fails_atomically() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut config = Config::new(Source::Samples(inline_table()));
        config.method = Method::Cubic;
        config.output = dir.path().join("out.json");

        assert!(matches!(
            run(&config),
            Err(Error::Interp(InterpError::InsufficientData { .. }))
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("job.json");
        let mut config = Config::new(Source::Samples(inline_table()));
        config.method = Method::Hermite;
        config.plot = Some(PathBuf::from("chart.svg"));

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
