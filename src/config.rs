// src/config.rs
use anyhow::{anyhow, Result};
use std::{env, path::PathBuf};

use crate::schema::{LenderSchema, SchemaCatalog, BLC_SCHEMA, MCA_SCHEMA};

pub const BLC_CSV_VAR: &str = "LENDERSQL_BLC_CSV";
pub const MCA_CSV_VAR: &str = "LENDERSQL_MCA_CSV";
pub const SCHEMAS_VAR: &str = "LENDERSQL_SCHEMAS";

pub const DEFAULT_BLC_CSV: &str = "IFS MCA_LOC Sheet - IFS - Business Line of Credits.csv";
pub const DEFAULT_MCA_CSV: &str = "IFS MCA_LOC Sheet - IFS - MCA.csv";

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment overrides. Unset paths fall back to the catalog entry's `csv`,
/// then to the sheet export names above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub blc_csv: Option<PathBuf>,
    pub mca_csv: Option<PathBuf>,
    pub schemas: Option<PathBuf>,
}

/// One CSV converted against one schema.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub schema: LenderSchema,
    pub csv_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            blc_csv: get(BLC_CSV_VAR).map(PathBuf::from),
            mca_csv: get(MCA_CSV_VAR).map(PathBuf::from),
            schemas: get(SCHEMAS_VAR).map(PathBuf::from),
        }
    }

    /// Built-in catalog, or built-ins merged with the configured YAML file.
    pub fn catalog(&self) -> Result<SchemaCatalog> {
        match &self.schemas {
            Some(path) => SchemaCatalog::load(path),
            None => Ok(SchemaCatalog::builtin()),
        }
    }

    /// One job per catalog schema: BLC, MCA, then catalog additions in file order.
    pub fn jobs(&self, catalog: &SchemaCatalog) -> Result<Vec<ConversionJob>> {
        catalog
            .schemas()
            .iter()
            .map(|schema| -> Result<ConversionJob> {
                schema.validate()?;
                Ok(ConversionJob {
                    csv_path: self.csv_path_for(schema)?,
                    schema: schema.clone(),
                })
            })
            .collect()
    }

    fn csv_path_for(&self, schema: &LenderSchema) -> Result<PathBuf> {
        let (env_path, default) = match schema.name.as_str() {
            BLC_SCHEMA => (self.blc_csv.as_ref(), Some(DEFAULT_BLC_CSV)),
            MCA_SCHEMA => (self.mca_csv.as_ref(), Some(DEFAULT_MCA_CSV)),
            _ => (None, None),
        };
        env_path
            .or(schema.csv_path.as_ref())
            .cloned()
            .or_else(|| default.map(PathBuf::from))
            .ok_or_else(|| anyhow!("schema '{}' has no `csv` path in the catalog", schema.name))
    }
}
