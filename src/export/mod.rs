//! Persisted run artifacts: the splits file, matched/excluded count
//! files, and the CSV export of the screened dataset.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::ScreenedRecord;
use crate::record::screened::COLUMNS;
use crate::search::runner::{ExcludedSplit, SplitCount};

/// Header of the matched/excluded split count files.
const COUNTS_HEADER: &str = "num_results,split";

/// Write splits as plain text, one per line.
pub fn write_splits<P: AsRef<Path>>(path: P, splits: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for split in splits {
        writeln!(writer, "{split}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write matched splits with their result counts.
pub fn write_matched<P: AsRef<Path>>(path: P, matched: &[SplitCount]) -> Result<()> {
    let rows = matched
        .iter()
        .map(|entry| (entry.count.to_string(), entry.split.clone()));
    write_count_rows(path, rows)
}

/// Write excluded splits with their count labels.
pub fn write_excluded<P: AsRef<Path>>(path: P, excluded: &[ExcludedSplit]) -> Result<()> {
    let rows = excluded
        .iter()
        .map(|entry| (entry.count_label(), entry.split.clone()));
    write_count_rows(path, rows)
}

fn write_count_rows<P, I>(path: P, rows: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (String, String)>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{COUNTS_HEADER}")?;
    for (count, split) in rows {
        writeln!(writer, "{count},{split}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the screened dataset as CSV, one row per surviving record.
pub fn write_records_csv<P: AsRef<Path>>(path: P, records: &[ScreenedRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", COLUMNS.join(","))?;
    for record in records {
        let row: Vec<String> = record.column_values().iter().map(|v| csv_field(v)).collect();
        writeln!(writer, "{}", row.join(","))?;
    }
    writer.flush()?;
    Ok(())
}

/// Quote a CSV field when it embeds a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
