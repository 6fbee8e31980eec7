use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::survey::*;

/// An Excel export of the survey worksheet. Read-only.
pub struct ExcelWorksheet {
    path: String,
    worksheet_name: Option<String>,
}

impl ExcelWorksheet {
    pub fn new(path: &str, worksheet_name: Option<String>) -> ExcelWorksheet {
        ExcelWorksheet {
            path: path.to_string(),
            worksheet_name,
        }
    }

    fn get_range(&self) -> SurveyResult<calamine::Range<DataType>> {
        let path = self.path.clone();
        debug!(
            "get_range: path: {:?} worksheet: {:?}",
            &path, &self.worksheet_name
        );
        let mut workbook: Xlsx<_> =
            open_workbook(&path).context(OpeningExcelSnafu { path: path.clone() })?;

        // A worksheet name was provided, use it.
        if let Some(worksheet_name) = &self.worksheet_name {
            let wrange = workbook
                .worksheet_range(worksheet_name)
                .context(MissingWorksheetSnafu {
                    path: path.clone(),
                    name: worksheet_name,
                })?
                .context(OpeningExcelSnafu { path })?;
            return Ok(wrange);
        }

        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => MissingWorksheetSnafu {
                path,
                name: DEFAULT_EXCEL_WORKSHEET_NAME,
            }
            .fail(),
            [(worksheet_name, wrange)] => {
                debug!("get_range: using the only worksheet {:?}", worksheet_name);
                Ok(wrange.clone())
            }
            _ => match all_worksheets
                .iter()
                .find(|(name, _)| name == DEFAULT_EXCEL_WORKSHEET_NAME)
            {
                Some((_, wrange)) => Ok(wrange.clone()),
                None => AmbiguousWorksheetSnafu {
                    path,
                    count: all_worksheets.len(),
                }
                .fail(),
            },
        }
    }
}

fn read_cell(lineno: usize, cell: &DataType) -> SurveyResult<String> {
    match cell {
        DataType::String(s) => Ok(s.clone()),
        DataType::Empty => Ok("".to_string()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) if f.fract() == 0.0 => Ok(format!("{}", *f as i64)),
        DataType::Float(f) => Ok(f.to_string()),
        DataType::Bool(b) => Ok(b.to_string()),
        _ => ExcelWrongCellTypeSnafu {
            lineno: lineno as u64,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

impl Worksheet for ExcelWorksheet {
    fn read_all_rows(&mut self) -> SurveyResult<Vec<Vec<String>>> {
        let wrange = self.get_range()?;
        let mut res: Vec<Vec<String>> = Vec::new();
        for (idx, row) in wrange.rows().enumerate() {
            debug!("read_all_rows: idx: {:?} row: {:?}", idx, row);
            let cells = row
                .iter()
                .map(|cell| read_cell(idx + 1, cell))
                .collect::<SurveyResult<Vec<String>>>()?;
            res.push(cells);
        }
        Ok(res)
    }

    fn append_row(&mut self, _row: &[String]) -> SurveyResult<()> {
        ReadOnlyWorksheetSnafu {
            path: self.path.as_str(),
        }
        .fail()
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(
            read_cell(1, &DataType::String("Good".to_string())).unwrap(),
            "Good"
        );
        assert_eq!(read_cell(1, &DataType::Empty).unwrap(), "");
        assert_eq!(read_cell(1, &DataType::Float(3.0)).unwrap(), "3");
        assert_eq!(read_cell(1, &DataType::Int(4)).unwrap(), "4");
        assert!(matches!(
            read_cell(7, &DataType::DateTime(44000.5)),
            Err(SurveyError::ExcelWrongCellType { lineno: 7, .. })
        ));
    }

    #[test]
    fn read_only() {
        let mut ws = ExcelWorksheet::new("export.xlsx", None);
        assert!(matches!(
            ws.append_row(&["Good".to_string()]),
            Err(SurveyError::ReadOnlyWorksheet { .. })
        ));
    }

    fn fixture(name: &str) -> String {
        format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn responses() -> Vec<Vec<String>> {
        [
            ["How is the coffee?", "Would you come back?"],
            ["Good", "Yes"],
            ["Poor", "No"],
            ["Good", "Yes"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
    }

    #[test]
    fn only_sheet_is_used() {
        let mut ws = ExcelWorksheet::new(&fixture("single_sheet.xlsx"), None);
        assert_eq!(ws.read_all_rows().unwrap(), responses());
        assert!(ws.is_read_only());
    }

    #[test]
    fn named_sheet() {
        let mut ws =
            ExcelWorksheet::new(&fixture("with_survey_result.xlsx"), Some("Notes".to_string()));
        assert_eq!(
            ws.read_all_rows().unwrap(),
            vec![vec!["Exported from the online form".to_string()]]
        );
        let mut ws = ExcelWorksheet::new(&fixture("single_sheet.xlsx"), Some("Form1".to_string()));
        assert_eq!(ws.read_all_rows().unwrap(), responses());
    }

    #[test]
    fn named_sheet_missing() {
        let mut ws =
            ExcelWorksheet::new(&fixture("single_sheet.xlsx"), Some("survey_result".to_string()));
        assert!(matches!(
            ws.read_all_rows(),
            Err(SurveyError::MissingWorksheet { .. })
        ));
    }

    #[test]
    fn falls_back_to_survey_result_sheet() {
        let mut ws = ExcelWorksheet::new(&fixture("with_survey_result.xlsx"), None);
        assert_eq!(ws.read_all_rows().unwrap(), responses());
    }

    #[test]
    fn several_sheets_need_a_name() {
        let mut ws = ExcelWorksheet::new(&fixture("two_sheets.xlsx"), None);
        assert!(matches!(
            ws.read_all_rows(),
            Err(SurveyError::AmbiguousWorksheet { count: 2, .. })
        ));
        let mut ws = ExcelWorksheet::new(&fixture("two_sheets.xlsx"), Some("Week 2".to_string()));
        assert_eq!(ws.read_all_rows().unwrap().len(), 2);
    }

    #[test]
    fn missing_file() {
        let mut ws = ExcelWorksheet::new("/nonexistent/moodtracker.xlsx", None);
        assert!(matches!(
            ws.read_all_rows(),
            Err(SurveyError::OpeningExcel { .. })
        ));
    }
}
