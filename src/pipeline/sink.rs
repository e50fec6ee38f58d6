//! Bounded CSV sink
//!
//! The single terminal consumer of the pipeline. It writes the fixed
//! header, then one row per record in header order, flushing after
//! every row so output is visible record-by-record to a streaming
//! consumer. Write and flush errors are fatal: a corrupted deliverable
//! must not pass silently.

use crate::record::BreederRecord;
use crate::Result;
use std::io::Write;
use tokio::sync::mpsc;

/// Consumes records until `limit` rows have been written or the stream
/// ends, whichever comes first. Returns the number of data rows written.
///
/// The header row is always written, even for `limit == 0`. Dropping the
/// receiver on return is what shuts the rest of the pipeline down:
/// upstream workers observe the closed channel on their next send and
/// exit.
pub async fn write_records<W: Write>(
    mut records: mpsc::Receiver<BreederRecord>,
    writer: W,
    limit: usize,
) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(BreederRecord::HEADER)?;
    csv.flush()?;

    let mut count = 0;
    while count < limit {
        let Some(record) = records.recv().await else {
            break;
        };

        csv.write_record(record.row())?;
        csv.flush()?;
        count += 1;
    }

    Ok(count)
}
