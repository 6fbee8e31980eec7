// Primitives for reading and appending to CSV worksheets.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::survey::{io_common::check_header, *};

pub struct CsvWorksheet {
    path: String,
    header: Vec<String>,
}

impl CsvWorksheet {
    /// Opens the worksheet at `path`. A missing or empty file is created with
    /// the questions of the catalog as its header.
    pub fn open(path: &str, catalog: &Catalog) -> SurveyResult<CsvWorksheet> {
        let is_empty = match fs::metadata(path) {
            Ok(m) => m.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(e).context(WorksheetIoSnafu { path }),
        };
        if is_empty {
            info!("CsvWorksheet: creating {:?}", path);
            let mut wtr = csv::Writer::from_path(path).context(OpeningCsvSnafu { path })?;
            wtr.write_record(catalog.header())
                .context(WritingCsvSnafu { path })?;
            wtr.flush().context(WorksheetIoSnafu { path })?;
        }

        let mut ws = CsvWorksheet {
            path: path.to_string(),
            header: Vec::new(),
        };
        let rows = ws.read_all_rows()?;
        ws.header = rows.into_iter().next().unwrap_or_default();
        check_header(path, &ws.header, catalog);
        Ok(ws)
    }
}

impl Worksheet for CsvWorksheet {
    fn read_all_rows(&mut self) -> SurveyResult<Vec<Vec<String>>> {
        let path = self.path.as_str();
        // Flexible: rows of the wrong length are reported by the statistics.
        let rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .context(OpeningCsvSnafu { path })?;
        let mut res: Vec<Vec<String>> = Vec::new();
        for (idx, line_r) in rdr.into_records().enumerate() {
            let line = line_r.context(ReadingCsvSnafu { path })?;
            debug!("read_all_rows: lineno: {:?} row: {:?}", idx + 1, line);
            res.push(line.iter().map(|s| s.to_string()).collect());
        }
        Ok(res)
    }

    fn append_row(&mut self, row: &[String]) -> SurveyResult<()> {
        let path = self.path.as_str();
        ensure!(
            row.len() == self.header.len(),
            RowAritySnafu {
                path,
                expected: self.header.len(),
                found: row.len()
            }
        );
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .context(WorksheetIoSnafu { path })?;
        if !ends_with_newline(&mut file).context(WorksheetIoSnafu { path })? {
            debug!("append_row: {:?} does not end with a newline", path);
            file.write_all(b"\n").context(WorksheetIoSnafu { path })?;
        }
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record(row).context(WritingCsvSnafu { path })?;
        wtr.flush().context(WorksheetIoSnafu { path })?;
        debug!("append_row: {:?}: {:?}", path, row);
        Ok(())
    }
}

// An empty file counts as terminated: there is no record to close.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
