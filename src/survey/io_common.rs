use std::path::Path;

use crate::survey::{
    io_csv::CsvWorksheet,
    io_excel::ExcelWorksheet,
    *,
};

/// A tabular store of responses. The first row holds the question texts.
pub trait Worksheet {
    /// All the rows, header included.
    fn read_all_rows(&mut self) -> SurveyResult<Vec<Vec<String>>>;

    /// Adds one row at the end. The row has one cell per column of the header.
    fn append_row(&mut self, row: &[String]) -> SurveyResult<()>;

    /// Whether `append_row` always fails.
    fn is_read_only(&self) -> bool {
        false
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Provider {
    Csv,
    Xlsx,
}

impl Provider {
    pub fn parse(name: &str) -> SurveyResult<Provider> {
        match name {
            "csv" => Ok(Provider::Csv),
            "xlsx" | "excel" => Ok(Provider::Xlsx),
            x => UnknownProviderSnafu { provider: x }.fail(),
        }
    }

    /// Excel files are recognized by their extension, everything else is read as CSV.
    pub fn infer(path: &str) -> Provider {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("xlsx") | Some("xlsm") => Provider::Xlsx,
            _ => Provider::Csv,
        }
    }
}

pub fn open_worksheet(
    source: &ResolvedSource,
    catalog: &Catalog,
) -> SurveyResult<Box<dyn Worksheet>> {
    info!(
        "Attempting to open worksheet {:?} ({:?})",
        source.path, source.provider
    );
    let ws: Box<dyn Worksheet> = match source.provider {
        Provider::Csv => Box::new(CsvWorksheet::open(&source.path, catalog)?),
        Provider::Xlsx => Box::new(ExcelWorksheet::new(
            &source.path,
            source.excel_worksheet_name.clone(),
        )),
    };
    Ok(ws)
}

/// Warns when the header of a worksheet does not match the questions of the survey.
/// The reports still run over the worksheet's own header.
pub fn check_header(path: &str, header: &[String], catalog: &Catalog) {
    let expected = catalog.header();
    if header != expected.as_slice() {
        warn!(
            "check_header: the header of {:?} does not match the survey questions: {:?}",
            path, header
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers() {
        assert_eq!(Provider::parse("csv").unwrap(), Provider::Csv);
        assert_eq!(Provider::parse("xlsx").unwrap(), Provider::Xlsx);
        assert!(Provider::parse("sheets").is_err());
        assert_eq!(Provider::infer("survey_result.csv"), Provider::Csv);
        assert_eq!(Provider::infer("export/Survey.XLSX"), Provider::Xlsx);
        assert_eq!(Provider::infer("survey_result"), Provider::Csv);
    }
}
