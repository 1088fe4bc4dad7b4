//! Spreadsheet export and in-place text rewrites.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
use tracing::{debug, info};
use utilkit_common::error::{Error as CommonError, Origin, ResultExt};
use utilkit_common::text;

use crate::error::{Error, Result};

/// Writes every sheet of the workbook at `path` as delimited text.
///
/// Each sheet lands next to the workbook as `<stem>_<sheet><ext>`, so
/// `report.xlsx` with a sheet `Sheet1` and `ext = ".csv"` produces
/// `report_Sheet1.csv`. Cells are rendered with their display form and the
/// output keeps the sheet's top-left origin, so leading blank rows and columns
/// survive while trailing blank cells are dropped. Blank rows inside the used
/// range are kept as records with no fields.
pub fn convert_spreadsheet(path: impl AsRef<Path>, ext: &str, delimiter: char) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if !delimiter.is_ascii() {
        return Err(Error::Delimiter { delimiter });
    }
    let delimiter = delimiter as u8;

    let spreadsheet_err = |source| Error::Spreadsheet { path: path.to_path_buf(), source };
    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;

    let mut written = Vec::new();
    for sheet in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet).map_err(spreadsheet_err)?;
        let out = sheet_output_path(path, &sheet, ext);

        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_path(&out)?;
        for row in sheet_rows(&range) {
            writer.write_record(&row)?;
        }
        writer.flush().on_write(Origin::file(&out))?;

        debug!(sheet = %sheet, out = %out.display(), "sheet exported");
        written.push(out);
    }

    info!(workbook = %path.display(), sheets = written.len(), "workbook converted");
    Ok(written)
}

pub fn convert_spreadsheet_to_csv(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    convert_spreadsheet(path, ".csv", ',')
}

pub fn convert_spreadsheet_to_tsv(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    convert_spreadsheet(path, ".tsv", '\t')
}

fn sheet_output_path(path: &Path, sheet: &str, ext: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!("{stem}_{sheet}{ext}"))
}

fn sheet_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); first_row as usize];
    for cells in range.rows() {
        let mut row: Vec<String> = vec![String::new(); first_col as usize];
        row.extend(cells.iter().map(display_cell));
        while row.last().is_some_and(String::is_empty) {
            row.pop();
        }
        rows.push(row);
    }
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }
    rows
}

/// Renders a cell the way a spreadsheet shows it. Dates and times come out
/// as ISO text instead of their serial number.
fn display_cell(cell: &Data) -> String {
    match cell {
        Data::DateTime(value) => display_datetime(value),
        Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        other => other.to_string(),
    }
}

fn display_datetime(value: &ExcelDateTime) -> String {
    let serial = value.as_f64();
    if value.is_duration() {
        return match value.as_duration() {
            Some(duration) => {
                let secs = duration.num_seconds();
                let sign = if secs < 0 { "-" } else { "" };
                let secs = secs.unsigned_abs();
                format!("{sign}{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
            }
            None => serial.to_string(),
        };
    }

    let Some(datetime) = value.as_datetime() else {
        return serial.to_string();
    };
    if (0.0..1.0).contains(&serial) {
        datetime.format("%H:%M:%S").to_string()
    } else if serial.fract() == 0.0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Replaces every match of `pattern` in the file with the character literal `new`.
pub fn replace_delimiter_in_file(path: impl AsRef<Path>, pattern: &str, new: &str) -> Result<()> {
    rewrite_in_place(path.as_ref(), |data| text::replace_delimiter(data, pattern, new))
}

/// Rewrites Windows line endings in the file as Unix ones.
pub fn replace_dos_to_unix_in_file(path: impl AsRef<Path>) -> Result<()> {
    rewrite_in_place(path.as_ref(), |data| Ok(text::dos_to_unix(data)))
}

fn rewrite_in_place<F>(path: &Path, rewrite: F) -> Result<()>
where
    F: FnOnce(&[u8]) -> utilkit_common::Result<Vec<u8>>,
{
    let meta = fs::metadata(path).with_path("stat", path)?;
    if !meta.is_file() {
        return Err(CommonError::NotRegularFile { path: path.to_path_buf() }.into());
    }

    let data = fs::read(path).on_read(Origin::file(path))?;
    let rewritten = rewrite(&data)?;
    fs::write(path, &rewritten).on_write(Origin::file(path))?;
    fs::set_permissions(path, meta.permissions()).with_path("chmod", path)?;

    debug!(path = %path.display(), before = data.len(), after = rewritten.len(), "file rewritten");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{ExcelDateTime as XlsxDateTime, Format, Workbook};

    fn sample_workbook(path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "A1").unwrap();
        sheet.write_number(0, 1, 100).unwrap();
        sheet.write_string(1, 0, "Cell").unwrap();
        sheet.write_number(1, 1, 1).unwrap();
        workbook.save(path).unwrap();
    }

    fn dated_workbook(path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let day = Format::new().set_num_format("yyyy-mm-dd");
        let stamp = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
        let clock = Format::new().set_num_format("hh:mm:ss");

        sheet.write_string(0, 0, "Day").unwrap();
        let date = XlsxDateTime::from_ymd(2024, 1, 2).unwrap();
        sheet.write_datetime_with_format(0, 1, &date, &day).unwrap();
        sheet.write_number(0, 2, 0.5).unwrap();

        sheet.write_string(1, 0, "Stamp").unwrap();
        let at = XlsxDateTime::from_ymd(2024, 1, 2).unwrap().and_hms(13, 45, 30).unwrap();
        sheet.write_datetime_with_format(1, 1, &at, &stamp).unwrap();

        sheet.write_string(2, 0, "Clock").unwrap();
        sheet.write_number_with_format(2, 1, 0.5, &clock).unwrap();
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_convert_spreadsheet() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("test.xlsx");
        sample_workbook(&src);

        let csv = convert_spreadsheet_to_csv(&src).unwrap();
        assert_eq!(csv, vec![dir.path().join("test_Sheet1.csv")]);
        assert_eq!(fs::read_to_string(&csv[0]).unwrap(), "A1,100\nCell,1\n");

        let tsv = convert_spreadsheet_to_tsv(&src).unwrap();
        assert_eq!(tsv, vec![dir.path().join("test_Sheet1.tsv")]);
        assert_eq!(fs::read_to_string(&tsv[0]).unwrap(), "A1\t100\nCell\t1\n");
    }

    #[test]
    fn test_dates_export_as_iso_text() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("dates.xlsx");
        dated_workbook(&src);

        let csv = convert_spreadsheet_to_csv(&src).unwrap();
        assert_eq!(
            fs::read_to_string(&csv[0]).unwrap(),
            "Day,2024-01-02,0.5\nStamp,2024-01-02 13:45:30\nClock,12:00:00\n"
        );
    }

    #[test]
    fn test_convert_spreadsheet_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.xlsx");
        assert!(matches!(
            convert_spreadsheet_to_csv(&missing),
            Err(Error::Spreadsheet { .. })
        ));

        let src = dir.path().join("test.xlsx");
        sample_workbook(&src);
        assert!(matches!(
            convert_spreadsheet(&src, ".txt", '§'),
            Err(Error::Delimiter { delimiter: '§' })
        ));
    }

    #[test]
    fn test_replace_delimiter_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.csv");
        fs::write(&file, "a,b\n1,2\n").unwrap();

        replace_delimiter_in_file(&file, ",", "\\t").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\tb\n1\t2\n");

        let err = replace_delimiter_in_file(&file, "[", ",").unwrap_err();
        assert!(matches!(err.as_common(), Some(CommonError::Pattern { .. })), "got {err:?}");
    }

    #[test]
    fn test_replace_dos_to_unix_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dos.txt");
        fs::write(&file, "one\r\ntwo\r\n").unwrap();

        replace_dos_to_unix_in_file(&file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "one\ntwo\n");

        assert!(replace_dos_to_unix_in_file(dir.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("script.sh");
        fs::write(&file, "echo hi\r\n").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o750)).unwrap();

        replace_dos_to_unix_in_file(&file).unwrap();
        let mode = fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }
}
