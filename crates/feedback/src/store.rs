//! Flat-file feedback store
//!
//! The whole file is read into memory on load and rewritten on every accepted
//! submission. Writes go to a temporary file in the same directory which is
//! then renamed over the target, so a reader never observes a half-written
//! file. There is no cross-process lock: two writers racing on the same file
//! can still lose one submission.

use crate::errors::{FeedbackError, Result};
use crate::record::{FeedbackRecord, HEADER, MAX_RATING, MIN_RATING};
use chrono::NaiveDate;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default feedback file name
pub const DEFAULT_FEEDBACK_PATH: &str = "viewers.csv";

/// Mode requested for a newly created feedback file, before the umask
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Result of a submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Row appended and file rewritten
    Accepted,
    /// Same name already rated on that date; nothing changed
    AlreadyRated,
}

impl Submission {
    pub fn is_accepted(self) -> bool {
        self == Submission::Accepted
    }
}

/// True iff a record has exactly this name and falls on this calendar day
///
/// Name comparison is case-sensitive. Records without a date never match.
pub fn has_submitted_today(records: &[FeedbackRecord], name: &str, date: NaiveDate) -> bool {
    records
        .iter()
        .any(|record| record.name == name && record.date == Some(date))
}

/// CSV-backed feedback log
#[derive(Debug, Clone)]
pub struct FeedbackStore {
    path: PathBuf,
}

impl FeedbackStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, creating a header-only file when none exists
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<FeedbackRecord>> {
        if !self.path.exists() {
            self.persist(&[])?;
            info!("Created empty feedback file");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(FeedbackError::Corrupt(format!(
                "expected header {:?}, found {:?}",
                HEADER,
                headers.iter().collect::<Vec<_>>()
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: FeedbackRecord = row.map_err(|e| {
                if e.is_io_error() {
                    FeedbackError::Csv(e)
                } else {
                    FeedbackError::Corrupt(format!("invalid row: {}", e))
                }
            })?;
            records.push(record);
        }

        debug!("Loaded {} feedback records", records.len());
        Ok(records)
    }

    /// Append a rating unless `name` already rated on `date`
    ///
    /// On [`Submission::Accepted`] the full record list is written back to
    /// disk before `records` is updated; if the write fails `records` is left
    /// as it was.
    #[instrument(skip(self, records), fields(path = %self.path.display()))]
    pub fn submit(
        &self,
        records: &mut Vec<FeedbackRecord>,
        name: &str,
        rating: u8,
        date: NaiveDate,
    ) -> Result<Submission> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::InvalidRating { rating });
        }

        if has_submitted_today(records, name, date) {
            debug!("Duplicate submission rejected");
            return Ok(Submission::AlreadyRated);
        }

        let mut updated = records.clone();
        updated.push(FeedbackRecord::new(name, rating, date));
        self.persist(&updated)?;
        *records = updated;

        info!("Feedback recorded ({} total)", records.len());
        Ok(Submission::Accepted)
    }

    /// Path the rename lands on: the symlink target when the file exists
    fn resolve_target(&self) -> Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the whole file with `records`
    ///
    /// An existing file keeps its permissions; a new one gets `0644` minus
    /// the umask.
    fn persist(&self, records: &[FeedbackRecord]) -> Result<()> {
        let target = self.resolve_target()?;
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

        let mut builder = tempfile::Builder::new();
        builder.prefix(".viewers");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
        }
        let mut tmp = builder.tempfile_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            writer.write_record(HEADER)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        tmp.as_file_mut().flush()?;
        if let Some(permissions) = existing {
            fs::set_permissions(tmp.path(), permissions)?;
        }
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_has_submitted_today_exact_match() {
        let records = vec![FeedbackRecord::new("Alice", 5, day(1))];

        assert!(has_submitted_today(&records, "Alice", day(1)));
        assert!(!has_submitted_today(&records, "alice", day(1)));
        assert!(!has_submitted_today(&records, "Alice ", day(1)));
        assert!(!has_submitted_today(&records, "Alice", day(2)));
        assert!(!has_submitted_today(&[], "Alice", day(1)));
    }

    #[test]
    fn test_undated_record_never_matches() {
        let mut record = FeedbackRecord::new("Bob", 3, day(1));
        record.date = None;
        assert!(!has_submitted_today(&[record], "Bob", day(1)));
    }

    #[test]
    fn test_invalid_rating_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FeedbackStore::new(dir.path().join("viewers.csv"));
        let mut records = Vec::new();

        for rating in [0, 6] {
            let err = store.submit(&mut records, "Alice", rating, day(1)).unwrap_err();
            assert!(matches!(err, FeedbackError::InvalidRating { rating: r } if r == rating));
        }
        assert!(records.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_write_leaves_records_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // The target is a directory, so the final rename fails.
        let target = dir.path().join("occupied");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();
        let store = FeedbackStore::new(&target);

        let mut records = vec![FeedbackRecord::new("Alice", 4, day(1))];
        assert!(store.submit(&mut records, "Bob", 5, day(1)).is_err());
        assert_eq!(records.len(), 1);
    }
}
