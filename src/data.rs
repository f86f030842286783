use crate::error::{HitlogError, Result};
use crate::model::{AttributionRecord, Event, HitRecord, Timestamp};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const REQUIRED_COLUMNS: [&str; 4] = ["page_name", "page_url", "user_id", "timestamp"];
pub const REPORT_HEADER: [&str; 3] = ["page_name", "page_url", "total"];

// Read a hitlog CSV file into memory
pub fn load_hitlog(file_path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let file_path = file_path.as_ref();
    let file = File::open(file_path).map_err(|err| HitlogError::io(file_path, err))?;

    let events = read_hitlog(file).map_err(|err| match err {
        HitlogError::Csv(err) => csv_error(file_path, err),
        other => other,
    })?;

    debug!(path = %file_path.display(), events = events.len(), "loaded hitlog");
    Ok(events)
}

pub fn read_hitlog<R: Read>(reader: R) -> Result<Vec<Event>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    // Columns are matched by name, anything extra is ignored
    let headers = csv_reader.headers()?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(HitlogError::MissingColumn { column });
        }
    }

    let mut events = Vec::new();
    for (idx, record) in csv_reader.deserialize::<HitRecord>().enumerate() {
        let record = record?;
        let row = idx + 1;

        if record.user_id.is_empty() {
            return Err(HitlogError::MissingUserId { row });
        }
        let Some(timestamp) = Timestamp::parse(&record.timestamp) else {
            return Err(HitlogError::MissingTimestamp { row });
        };

        events.push(Event {
            page_name: record.page_name,
            page_url: record.page_url,
            user_id: record.user_id,
            timestamp,
        });
    }

    Ok(events)
}

// Write the ranked report into the output file
pub fn save_top_articles(file_path: impl AsRef<Path>, records: &[AttributionRecord]) -> Result<()> {
    let file_path = file_path.as_ref();

    // Rows go to a sibling temp file which only replaces the target once complete
    let dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|err| HitlogError::io(file_path, err))?;

    write_top_articles(staged.as_file_mut(), records).map_err(|err| match err {
        HitlogError::Csv(err) => csv_error(file_path, err),
        other => other,
    })?;

    staged
        .persist(file_path)
        .map_err(|err| HitlogError::io(file_path, err.error))?;

    info!(path = %file_path.display(), rows = records.len(), "wrote top articles");
    Ok(())
}

pub fn write_top_articles<W: Write>(writer: W, records: &[AttributionRecord]) -> Result<()> {
    // The header is written explicitly so an empty report still has one
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(REPORT_HEADER)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

// csv wraps read/write failures, which belong with the other I/O errors
fn csv_error(file_path: &Path, err: csv::Error) -> HitlogError {
    match err.kind() {
        csv::ErrorKind::Io(source) => {
            HitlogError::io(file_path, io::Error::new(source.kind(), source.to_string()))
        }
        _ => HitlogError::Csv(err),
    }
}
