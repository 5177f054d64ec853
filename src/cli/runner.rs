//! Command runner
//!
//! Drives the inference pipeline: load a record (file, stdin or sample
//! fetch), infer its schema, filter top-level fields by the include set,
//! re-infer the survivors, and print the canonical schema JSON.

use super::commands::{Cli, Commands, OutputFormat};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::sample::{HttpRecordSource, SampleCache};
use crate::schema::{filter_fields, SchemaInferrer, StructType, TypeTag};
use crate::types::{JsonObject, JsonValue};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        let settings = self.load_settings()?;

        match &self.cli.command {
            Commands::Infer {
                input,
                include,
                max_depth,
                show_record,
            } => self.run_infer(
                &settings,
                input.as_deref(),
                include.as_deref(),
                *max_depth,
                *show_record,
            ),
            Commands::Sample {
                base_url,
                include,
                show_record,
            } => {
                self.run_sample(&settings, base_url.as_deref(), include.as_deref(), *show_record)
                    .await
            }
            Commands::Types => {
                for tag in TypeTag::ALL {
                    println!("{tag}");
                }
                Ok(())
            }
        }
    }

    fn load_settings(&self) -> Result<Settings> {
        match &self.cli.settings {
            Some(path) => Settings::from_file(path),
            None => Ok(Settings::default()),
        }
    }

    fn run_infer(
        &self,
        settings: &Settings,
        input: Option<&Path>,
        include: Option<&str>,
        max_depth: Option<usize>,
        show_record: bool,
    ) -> Result<()> {
        let text = read_input(input)?;
        let record = parse_record(&text)?;

        let inferrer =
            SchemaInferrer::new().with_max_depth(max_depth.unwrap_or(settings.max_depth));
        let included = resolve_included(settings, include)?;
        let (record, schema) = infer_filtered(&inferrer, record, &included)?;

        if show_record {
            self.print_value(&JsonValue::Object(record))?;
        }
        self.print_value(&schema.to_json())
    }

    async fn run_sample(
        &self,
        settings: &Settings,
        base_url: Option<&str>,
        include: Option<&str>,
        show_record: bool,
    ) -> Result<()> {
        let http = HttpClient::with_config(
            HttpClientConfig::builder()
                .timeout(Duration::from_secs(settings.sample.timeout_secs))
                .build(),
        );
        let base_url = base_url.unwrap_or(settings.sample.base_url.as_str());
        let source = HttpRecordSource::new(
            http,
            base_url,
            settings.sample.min_id,
            settings.sample.max_id,
        )?;
        let cache = SampleCache::new(Box::new(source));

        let record = cache.get().await?;
        info!("Fetched sample record with {} top-level keys", record.len());

        let inferrer = SchemaInferrer::new().with_max_depth(settings.max_depth);
        let included = resolve_included(settings, include)?;
        let (record, schema) = infer_filtered(&inferrer, record, &included)?;

        if show_record {
            self.print_value(&JsonValue::Object(record))?;
        }
        self.print_value(&schema.to_json())
    }

    fn print_value(&self, value: &JsonValue) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Infer, filter the record's top level, and re-infer the survivors
fn infer_filtered(
    inferrer: &SchemaInferrer,
    record: JsonObject,
    included: &HashSet<TypeTag>,
) -> Result<(JsonObject, StructType)> {
    let schema = inferrer.infer(&record)?;

    if included.len() == TypeTag::ALL.len() {
        return Ok((record, schema));
    }

    let record = filter_fields(&schema, record, included);
    let schema = inferrer.infer(&record)?;
    Ok((record, schema))
}

fn resolve_included(settings: &Settings, include: Option<&str>) -> Result<HashSet<TypeTag>> {
    match include {
        Some(list) => parse_include(list),
        None => Ok(settings.included_set()),
    }
}

/// Parse a comma-separated list of type tags
fn parse_include(list: &str) -> Result<HashSet<TypeTag>> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(Error::file_not_found(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parse input text into the root record; the root must be a JSON object
fn parse_record(text: &str) -> Result<JsonObject> {
    let value: JsonValue = serde_json::from_str(text)?;
    match value {
        JsonValue::Object(map) => Ok(map),
        _ => Err(Error::config("the document root must be a JSON object")),
    }
}
