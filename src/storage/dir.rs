use std::{
    fs::{self, OpenOptions},
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use uuid::Uuid;

use super::{Repository, TransferRecord, repository::stamp};
use crate::{AnnErr, Result};

/// A repository that keeps every record in its own `<id>.json` file inside a directory.
#[derive(Debug, Clone)]
pub struct DirRepository {
    root: PathBuf,
}

impl DirRepository {
    /// Creates a new `DirRepository`, creating its directory if it doesn't exist.
    ///
    /// # Errors
    /// `AnnErr::Io` if the directory can't be created.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    /// Returns the directory holding the records.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn missing(id: Uuid) -> impl FnOnce(io::Error) -> AnnErr {
        move |e| match e.kind() {
            ErrorKind::NotFound => AnnErr::RecordNotFound(id),
            _ => AnnErr::Io(e),
        }
    }
}

/// Writes `bytes` into the freshly created file at `path`, removing the file if the write
/// fails.
fn write_or_remove<W: Write>(mut file: W, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let Err(e) = file.write_all(bytes).and_then(|_| file.flush()) else {
        return Ok(());
    };

    drop(file);
    if let Err(rm) = fs::remove_file(path) {
        warn!("could not remove partial record {}: {rm}", path.display());
    }

    Err(e)
}

impl Repository for DirRepository {
    fn create(&mut self, record: TransferRecord) -> Result<Uuid> {
        let record = stamp(record);
        let id = record.id;
        let bytes = serde_json::to_vec(&record)?;

        let path = self.path(id);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => AnnErr::DuplicateRecord(id),
                _ => AnnErr::Io(e),
            })?;

        write_or_remove(file, &path, &bytes)?;
        debug!("created record {id} in {}", self.root.display());
        Ok(id)
    }

    fn read(&self, id: Uuid) -> Result<TransferRecord> {
        let bytes = fs::read(self.path(id)).map_err(Self::missing(id))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn update(&mut self, mut record: TransferRecord) -> Result<()> {
        let stored = self.read(record.id)?;
        if record.created_at.is_empty() {
            record.created_at = stored.created_at;
        }

        fs::write(self.path(record.id), serde_json::to_vec(&record)?)?;
        debug!("updated record {} in {}", record.id, self.root.display());
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        fs::remove_file(self.path(id)).map_err(Self::missing(id))?;
        debug!("deleted record {id} from {}", self.root.display());
        Ok(())
    }
}
