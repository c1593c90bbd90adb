use crate::error::BuildError;
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_n_models() -> usize {
    10
}

/// Construction parameters shared by both bagging ensembles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BaggingParams {
    #[serde(default = "default_n_models")]
    #[schemars(
        title = "Number of models",
        description = "How many copies of the base learner the ensemble trains.",
        range(min = 1),
        default = "default_n_models"
    )]
    pub n_models: usize,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "PRNG seed for the Poisson resampling (None = OS entropy)"
    )]
    pub seed: Option<u64>,
}

impl Default for BaggingParams {
    fn default() -> Self {
        Self {
            n_models: default_n_models(),
            seed: None,
        }
    }
}

impl BaggingParams {
    pub fn new(n_models: usize, seed: Option<u64>) -> Self {
        Self { n_models, seed }
    }

    pub fn schema() -> Schema {
        schema_for!(BaggingParams)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.n_models == 0 {
            return Err(BuildError::EmptyPool(self.n_models));
        }
        Ok(())
    }

    /// Parses and validates parameters from a JSON object. Missing fields
    /// take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).context("malformed bagging parameters")?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("invalid parameters in {}", path.display()))
    }
}
