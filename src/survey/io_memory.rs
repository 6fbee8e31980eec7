use crate::survey::*;

/// A worksheet held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorksheet {
    pub rows: Vec<Vec<String>>,
    pub read_only: bool,
}

impl MemoryWorksheet {
    pub fn new(catalog: &Catalog) -> MemoryWorksheet {
        MemoryWorksheet {
            rows: vec![catalog.header()],
            read_only: false,
        }
    }
}

impl Worksheet for MemoryWorksheet {
    fn read_all_rows(&mut self) -> SurveyResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, row: &[String]) -> SurveyResult<()> {
        ensure!(!self.read_only, ReadOnlyWorksheetSnafu { path: "memory" });
        let expected = self.rows.first().map(|h| h.len()).unwrap_or(0);
        ensure!(
            row.len() == expected,
            RowAritySnafu {
                path: "memory",
                expected,
                found: row.len()
            }
        );
        self.rows.push(row.to_vec());
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}
