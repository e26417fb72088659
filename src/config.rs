// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::pipeline::OverflowPolicy;
use crate::testcase::DEFAULT_SEPARATOR;
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub testcase: TestcaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub numbers: Vec<i64>,
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestcaseConfig {
    pub count: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub separator: String,
    pub input_file: PathBuf,
    pub expected_file: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_layered(path, true),
            None => Self::load_layered(Path::new("config/default.toml"), false),
        }
    }

    /// Built-in defaults, then the TOML file, then `SEQ_PIPELINE__*` overrides.
    fn load_layered(path: &Path, required: bool) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("SEQ_PIPELINE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            pipeline: PipelineConfig {
                numbers: vec![1, 2, 3, 4, 5],
                overflow: OverflowPolicy::Error,
            },
            testcase: TestcaseConfig {
                count: 3000,
                min_len: 1,
                max_len: 20,
                min_value: -1000,
                max_value: 1000,
                separator: DEFAULT_SEPARATOR.to_string(),
                input_file: PathBuf::from("input.txt"),
                expected_file: PathBuf::from("output.txt"),
            },
            output: OutputConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.testcase.validate()
    }
}

impl TestcaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(PipelineError::Config(
                "testcase count must be greater than 0".to_string(),
            ));
        }

        Validator::validate_length_bounds(self.min_len, self.max_len)
            .and_then(|_| Validator::validate_value_bounds(self.min_value, self.max_value))
            .and_then(|_| Validator::validate_separator(&self.separator))
            .map_err(|e| PipelineError::Config(e.to_string()))
    }
}
