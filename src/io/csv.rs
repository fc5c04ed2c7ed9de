use crate::coord::Geodetic;
use crate::core::constants::{DEFAULT_DECIMAL_PLACES, DEFAULT_MGRS_PRECISION, MAX_MGRS_PRECISION};
use crate::error::GeoCoordError;
use crate::io::report::ConversionReport;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};
use wkt::ToWkt;

/// Columns written ahead of the kept input columns.
pub const OUTPUT_COLUMNS: [&str; 4] = ["lat", "lon", "utm", "mgrs"];

/// Output format for the optional point geometry column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text, e.g. `POINT(-60 30)`
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

/// Configuration for CSV batch conversion.
#[derive(Debug, Clone)]
pub struct CsvConvertConfig {
    pub column: String,
    pub exclude_columns: Vec<String>,
    pub precision: u8,
    pub decimal_places: usize,
    pub strict: bool,
    pub include_geometry: Option<GeometryFormat>,
}

impl CsvConvertConfig {
    /// Create config for a CSV whose `column` holds coordinate text in any
    /// supported format.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::CsvConvertConfig;
    ///
    /// let config = CsvConvertConfig::new("Location")
    ///     .precision(3)
    ///     .decimal_places(6)
    ///     .exclude(vec!["Notes".into()]);
    /// ```
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            exclude_columns: Vec::new(),
            precision: DEFAULT_MGRS_PRECISION,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            strict: false,
            include_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// MGRS digits per axis, 1-5.
    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Fail on the first row that cannot be converted instead of writing it
    /// with blank outputs.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add a `geometry` column holding the position as a point.
    pub fn with_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_geometry = Some(format);
        self
    }
}

pub trait CsvConvert {
    fn to_converted_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvConvertConfig,
    ) -> Result<(), GeoCoordError>;
}

impl<P: AsRef<Path>> CsvConvert for P {
    fn to_converted_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvConvertConfig,
    ) -> Result<(), GeoCoordError> {
        csv_to_converted_csv(self, output_path, config)
    }
}

fn point_geometry(g: Geodetic, format: GeometryFormat) -> String {
    let point: geo_types::Point<f64> = g.into();
    match format {
        GeometryFormat::Wkt => point.wkt_string(),
        GeometryFormat::GeoJson => geojson::Geometry::from(&point).to_string(),
    }
}

fn output_fields(report: Option<&ConversionReport>, config: &CsvConvertConfig) -> Vec<String> {
    let places = config.decimal_places;
    let mut fields = match report {
        Some(r) => vec![
            format!("{:.*}", places, r.geodetic.lat()),
            format!("{:.*}", places, r.geodetic.lon()),
            r.utm.clone().unwrap_or_default(),
            r.mgrs.clone().unwrap_or_default(),
        ],
        None => vec![String::new(); OUTPUT_COLUMNS.len()],
    };
    if let Some(format) = config.include_geometry {
        fields.push(
            report
                .map(|r| point_geometry(r.geodetic, format))
                .unwrap_or_default(),
        );
    }
    fields
}

/// Converts the coordinate text column of a CSV file into `lat`, `lon`,
/// `utm` and `mgrs` columns (plus `geometry` when configured), followed by
/// the input columns not excluded.
///
/// Rows are converted in parallel; output rows keep the input order. A row
/// whose text cannot be resolved is logged and written with blank outputs,
/// unless the config is strict. Polar rows get `lat`/`lon` but blank grid
/// columns.
///
/// # Example
///
/// ```no_run
/// use geocoord_rs::{CsvConvertConfig, csv_to_converted_csv};
///
/// let config = CsvConvertConfig::new("Position").precision(4);
///
/// csv_to_converted_csv("sightings.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_converted_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvConvertConfig,
) -> Result<(), GeoCoordError> {
    if config.column.is_empty() {
        return Err(GeoCoordError::CsvError(
            "Coordinate column name cannot be empty".to_string(),
        ));
    }
    if !(1..=MAX_MGRS_PRECISION).contains(&config.precision) {
        return Err(GeoCoordError::InvalidPrecision(config.precision));
    }

    let file = File::open(csv_path).map_err(|e| GeoCoordError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| GeoCoordError::CsvError(e.to_string()))?
        .clone();

    let source_idx = headers
        .iter()
        .position(|h| h == config.column)
        .ok_or_else(|| {
            GeoCoordError::CsvError(format!("Coordinate column '{}' not found", config.column))
        })?;

    let exclude_indices: HashSet<usize> = config
        .exclude_columns
        .iter()
        .filter_map(|col| headers.iter().position(|h| h == col))
        .collect();

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GeoCoordError::CsvError(e.to_string()))?;

    let reports: Vec<Option<ConversionReport>> = records
        .par_iter()
        .map(|record| {
            let text = record.get(source_idx).unwrap_or_default();
            ConversionReport::from_text(text, config.precision).ok()
        })
        .collect();

    let out_file = File::create(output_path).map_err(|e| GeoCoordError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = OUTPUT_COLUMNS.to_vec();
    if config.include_geometry.is_some() {
        header_row.push("geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| GeoCoordError::CsvError(e.to_string()))?;

    let mut unresolved = 0usize;
    for (row_number, (record, report)) in records.iter().zip(&reports).enumerate() {
        if report.is_none() {
            let text = record.get(source_idx).unwrap_or_default();
            warn!(row = row_number + 1, text = %text, "Could not convert coordinate");
            if config.strict {
                return Err(GeoCoordError::UnrecognizedInput(text.to_string()));
            }
            unresolved += 1;
        }

        let mut row = output_fields(report.as_ref(), config);
        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| GeoCoordError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| GeoCoordError::IoError(e.to_string()))?;

    debug!(
        rows = records.len(),
        unresolved,
        column = %config.column,
        "CSV conversion finished"
    );

    Ok(())
}
