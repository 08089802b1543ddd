use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::repositories::traits::BookRepository;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    #[serde(flatten)]
    book: &'a AddressBook,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    #[serde(flatten)]
    book: AddressBook,
}

/// Address book repository backed by a JSON snapshot file.
///
/// Saves go to a sibling temporary file which is then renamed over the
/// target, so the snapshot on disk is always either the old or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: SnapshotIn = serde_json::from_reader(BufReader::new(file))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }

        tracing::info!(
            "Loaded {} contacts from {}",
            snapshot.book.len(),
            self.path.display()
        );
        Ok(snapshot.book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            serde_json::to_writer_pretty(
                &mut writer,
                &SnapshotOut {
                    version: SNAPSHOT_VERSION,
                    book,
                },
            )?;
            writer.flush()?;
        }
        fs::rename(&temp_path, &self.path)?;

        tracing::info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
