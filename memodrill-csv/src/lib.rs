//! Flat CSV persistence for a [`Collection`].
//!
//! Rows carry either two fields (`prompt,response`, a card nobody has reviewed
//! yet) or six (`prompt,response,easiness,repetitions,interval,YYYY-MM-DD`).
//! Saving always writes six.

use chrono::NaiveDate;
use memodrill_core::{Collection, CoreError, Item, ItemRecord, Sink};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod backup;

pub const DEFAULT_MAX_BACKUPS: usize = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: CoreError,
    },
    #[error("line {line}: expected 2 or 6 fields, found {found}")]
    FieldCount { line: u64, found: usize },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A loaded deck. `fresh` counts two-field rows that were given today's date
/// and are not on disk in that form yet.
#[derive(Debug, Default)]
pub struct Loaded {
    pub collection: Collection,
    pub fresh: usize,
}

pub struct CsvStore {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
    backed_up: bool,
}

impl CsvStore {
    /// Store at `path` with backups in a sibling `<name>.backups` directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backups_dir = path.with_extension("backups");
        Self::with_backups(path, backups_dir, DEFAULT_MAX_BACKUPS)
    }

    pub fn with_backups(path: impl Into<PathBuf>, backups_dir: impl Into<PathBuf>, max_backups: usize) -> Self {
        Self {
            path: path.into(),
            backups_dir: backups_dir.into(),
            max_backups: max_backups.max(1),
            backed_up: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Reads every row. A missing file is an empty collection; two-field rows
    /// become fresh items dated `today`. Callers must save when
    /// [`Loaded::fresh`] is non-zero, or the creation date is lost.
    pub fn load(&self, today: NaiveDate) -> Result<Loaded, StoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no deck file yet, starting empty");
            return Ok(Loaded::default());
        }
        let file = fs::File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let loaded = read_collection(file, today)?;
        debug!(
            path = %self.path.display(),
            items = loaded.collection.len(),
            fresh = loaded.fresh,
            "loaded deck"
        );
        Ok(loaded)
    }

    /// Rewrites the whole file through a temp file so a crash never leaves it
    /// half written. The first save also snapshots the previous file.
    pub fn save(&mut self, collection: &Collection) -> Result<(), StoreError> {
        if !self.backed_up {
            if self.path.exists() {
                backup::snapshot(&self.path, &self.backups_dir, self.max_backups)?;
            }
            self.backed_up = true;
        }

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        write_collection(&mut tmp, collection)?;
        tmp.flush().map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), items = collection.len(), "saved deck");
        Ok(())
    }
}

impl Sink for CsvStore {
    type Error = StoreError;

    fn save(&mut self, collection: &Collection) -> Result<(), StoreError> {
        CsvStore::save(self, collection).inspect_err(|e| warn!(error = %e, "save failed"))
    }
}

pub fn read_collection<R: io::Read>(rdr: R, today: NaiveDate) -> Result<Loaded, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut loaded = Loaded::default();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| rec.get(i).unwrap_or_default().to_string();
        let item = match rec.len() {
            2 => {
                loaded.fresh += 1;
                Item::create(field(0), field(1), today)
            }
            6 => Item::try_from(ItemRecord {
                prompt: field(0),
                response: field(1),
                easiness: field(2),
                repetitions: field(3),
                interval: field(4),
                last_reviewed: field(5),
            })
            .map_err(|source| StoreError::Row { line, source })?,
            found => return Err(StoreError::FieldCount { line, found }),
        };
        loaded.collection.push(item);
    }
    Ok(loaded)
}

pub fn write_collection<W: io::Write>(wtr: W, collection: &Collection) -> Result<(), StoreError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(wtr);
    for item in collection {
        wtr.write_record(item.dump().fields())?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
