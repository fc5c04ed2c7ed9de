pub mod csv;
pub mod report;

pub use self::csv::{
    CsvConvert, CsvConvertConfig, GeometryFormat, OUTPUT_COLUMNS, csv_to_converted_csv,
};
pub use report::ConversionReport;
