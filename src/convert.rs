// src/convert.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{collections::HashMap, fs::File, io::Read, path::Path};
use tracing::{debug, info, instrument, trace, warn};

use crate::escape::{escape_sql, escape_text, EscapeMode};
use crate::schema::LenderSchema;

/// Statements produced from one CSV, in source row order.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub schema: LenderSchema,
    pub statements: Vec<String>,
    /// Rows dropped because the lender name was blank.
    pub skipped: usize,
}

/// Header name → field position. A repeated header resolves to its last occurrence.
struct HeaderIndex<'h> {
    positions: HashMap<&'h str, usize>,
}

impl<'h> HeaderIndex<'h> {
    fn new(headers: &'h StringRecord) -> Self {
        let positions = headers.iter().enumerate().map(|(i, h)| (h, i)).collect();
        Self { positions }
    }

    fn get(&self, header: &str) -> Option<usize> {
        self.positions.get(header).copied()
    }
}

/// Convert the CSV at `path` into INSERT statements for `schema`.
pub fn convert_csv_to_sql<P: AsRef<Path>>(path: P, schema: &LenderSchema) -> Result<Vec<String>> {
    convert_file(path, schema).map(|out| out.statements)
}

#[instrument(
    level = "info",
    skip(path, schema),
    fields(path = %path.as_ref().display(), table = %schema.table)
)]
pub fn convert_file<P: AsRef<Path>>(path: P, schema: &LenderSchema) -> Result<ConversionOutput> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    let out = convert_reader(file, schema, &path.display().to_string())?;
    info!(
        emitted = out.statements.len(),
        skipped = out.skipped,
        "converted {}",
        schema.label
    );
    Ok(out)
}

/// Map every qualifying row of a headed CSV stream onto `schema`.
///
/// `source` only labels errors and log lines.
pub fn convert_reader<R: Read>(
    reader: R,
    schema: &LenderSchema,
    source: &str,
) -> Result<ConversionOutput> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short rows leave trailing cells absent
        .from_reader(reader);

    let headers = rdr
        .headers()
        .with_context(|| format!("CSV header error in {}", source))?
        .clone();
    let index = HeaderIndex::new(&headers);

    let key = index.get(&schema.key_header);
    if key.is_none() {
        warn!(
            source,
            header = %schema.key_header,
            "key header missing; every row will be skipped"
        );
    }

    let fields: Vec<(Option<usize>, EscapeMode)> = schema
        .columns
        .iter()
        .map(|spec| {
            let pos = index.get(&spec.header);
            if pos.is_none() {
                warn!(
                    source,
                    header = %spec.header,
                    column = %spec.column,
                    "header missing; column will be NULL"
                );
            }
            (pos, spec.mode)
        })
        .collect();

    let prefix = format!(
        "INSERT INTO {} ({}) VALUES (",
        schema.table,
        schema.column_names().join(", ")
    );
    let constants: Vec<String> = schema
        .constants
        .iter()
        .map(|c| escape_text(&c.value))
        .collect();

    let mut statements = Vec::new();
    let mut skipped = 0;
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {} at record {}", source, idx + 1))?;

        let lender = key.and_then(|i| record.get(i)).map(str::trim);
        if lender.map_or(true, str::is_empty) {
            debug!(source, record = idx + 1, "blank lender name, skipping row");
            skipped += 1;
            continue;
        }

        let values: Vec<String> = fields
            .iter()
            .map(|(pos, mode)| escape_sql(pos.and_then(|i| record.get(i)), *mode))
            .chain(constants.iter().cloned())
            .collect();
        debug_assert_eq!(values.len(), schema.width());

        let stmt = format!("{}{});", prefix, values.join(", "));
        trace!(record = idx + 1, "{}", stmt);
        statements.push(stmt);
    }

    Ok(ConversionOutput {
        schema: schema.clone(),
        statements,
        skipped,
    })
}
