use std::{fs, path::Path};

use log::info;
use uuid::Uuid;

use super::{Repository, TransferRecord};
use crate::{AnnErr, Result, activations::ActFn, network::Ann};

impl<A: ActFn> Ann<A> {
    /// Stores the trained network as a new record and remembers the record's id.
    ///
    /// # Arguments
    /// * `repo` - Where to store it.
    /// * `id` - The id to store it under, a fresh one is assigned when `None`.
    ///
    /// # Returns
    /// The id of the new record.
    ///
    /// # Errors
    /// `AnnErr::IdentifierParse` if `id` isn't a valid UUID, `AnnErr::UntrainedModel` before
    /// the network is trained, or any error produced by the repository.
    pub fn store<R: Repository>(&mut self, mut repo: R, id: Option<&str>) -> Result<Uuid> {
        let id = id.map(Uuid::parse_str).transpose()?.unwrap_or_else(Uuid::nil);
        let record = TransferRecord {
            id,
            ..TransferRecord::from_ann(self)?
        };

        let id = repo.create(record)?;
        info!("stored network as record {id}");
        self.record_id = id;
        Ok(id)
    }

    /// Replaces the network's configuration, parameters and record id with those of a stored
    /// record. Nothing changes unless the record decodes completely.
    ///
    /// # Errors
    /// `AnnErr::IdentifierParse` if `id` isn't a valid UUID, any error produced by the
    /// repository, or any error produced by [`TransferRecord::decode`].
    pub fn load<R: Repository>(&mut self, repo: R, id: &str) -> Result<()> {
        let id = Uuid::parse_str(id)?;
        let record = repo.read(id)?;

        self.restore(&record)?;
        info!("loaded network from record {id}");
        Ok(())
    }

    /// Overwrites the record the network was stored to or loaded from with its current state.
    ///
    /// # Errors
    /// `AnnErr::UntrainedModel` before the network is trained, `AnnErr::RecordNotFound` if the
    /// network has no record, or any error produced by the repository.
    pub fn update<R: Repository>(&self, mut repo: R) -> Result<()> {
        let record = TransferRecord::from_ann(self)?;
        repo.update(record)?;

        info!("updated record {}", self.record_id);
        Ok(())
    }

    /// Deletes the record the network was stored to or loaded from, the network itself keeps
    /// its state but forgets the record's id.
    ///
    /// # Errors
    /// `AnnErr::RecordNotFound` if the network has no record, or any error produced by the
    /// repository.
    pub fn delete<R: Repository>(&mut self, mut repo: R) -> Result<()> {
        repo.delete(self.record_id)?;

        info!("deleted record {}", self.record_id);
        self.record_id = Uuid::nil();
        Ok(())
    }

    /// Writes the trained network to a `.json` file, overwriting it if it exists.
    ///
    /// # Errors
    /// `AnnErr::Format` if the path doesn't end in `.json`, `AnnErr::UntrainedModel` before
    /// the network is trained, or `AnnErr::Io` if the file can't be written.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        check_extension(path)?;

        let record = TransferRecord::from_ann(self)?;
        fs::write(path, serde_json::to_vec_pretty(&record)?)?;

        info!("saved network to {}", path.display());
        Ok(())
    }

    /// Reads a network written by [`Ann::save_json`], see [`Ann::load`].
    ///
    /// # Errors
    /// `AnnErr::Format` if the path doesn't end in `.json` or its contents don't decode, or
    /// `AnnErr::Io` if the file can't be read.
    pub fn load_json<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        check_extension(path)?;

        let record: TransferRecord = serde_json::from_slice(&fs::read(path)?)?;
        self.restore(&record)?;

        info!("loaded network from {}", path.display());
        Ok(())
    }

    fn restore(&mut self, record: &TransferRecord) -> Result<()> {
        let (config, params) = record.decode()?;

        self.config = config;
        self.params = Some(params);
        self.record_id = record.id;
        Ok(())
    }
}

fn check_extension(path: &Path) -> Result<()> {
    match path.extension() {
        Some(ext) if ext == "json" => Ok(()),
        _ => Err(AnnErr::Format(format!(
            "{} must have a .json extension",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{
        activations::Sigmoid, dataset::Dataset, network::Config, storage::MemoryRepository,
    };

    fn trained() -> Ann<Sigmoid> {
        let dataset = Dataset::new(
            array![[0.1, 0.9], [0.9, 0.1], [0.2, 0.7]],
            array![[1., 0.], [0., 1.], [1., 0.]],
        )
        .unwrap();

        let config = Config::new(2, 3, 2, 20, 0.3).unwrap().with_seed(3);
        let mut ann = Ann::new(config, Sigmoid::default());
        ann.train_on(&dataset).unwrap();
        ann.evaluate(&dataset).unwrap();
        ann
    }

    fn blank() -> Ann<Sigmoid> {
        Ann::new(Config::new(1, 1, 1, 1, 0.1).unwrap(), Sigmoid::default())
    }

    #[test]
    fn store_then_load() {
        let mut repo = MemoryRepository::new();
        let mut ann = trained();

        let id = ann.store(&mut repo, None).unwrap();
        assert_eq!(ann.record_id(), id);

        let mut loaded = blank();
        loaded.load(&mut repo, &id.to_string()).unwrap();

        assert_eq!(loaded.config(), ann.config());
        assert_eq!(loaded.params(), ann.params());
        assert_eq!(loaded.record_id(), id);
    }

    #[test]
    fn store_under_a_given_id() {
        let mut repo = MemoryRepository::new();
        let mut ann = trained();
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";

        assert_eq!(ann.store(&mut repo, Some(id)).unwrap().to_string(), id);
        assert!(matches!(
            ann.store(&mut repo, Some(id)),
            Err(AnnErr::DuplicateRecord(_))
        ));
    }

    #[test]
    fn bad_identifiers() {
        let mut repo = MemoryRepository::new();
        let mut ann = trained();

        assert!(matches!(
            ann.store(&mut repo, Some("nope")),
            Err(AnnErr::IdentifierParse(_))
        ));
        assert!(matches!(
            blank().load(&mut repo, "nope"),
            Err(AnnErr::IdentifierParse(_))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn untrained_networks_cannot_be_stored() {
        let mut repo = MemoryRepository::new();
        let mut ann = blank();

        assert!(matches!(ann.store(&mut repo, None), Err(AnnErr::UntrainedModel)));
        assert!(matches!(ann.save_json("ann.json"), Err(AnnErr::UntrainedModel)));
        assert!(repo.is_empty());
    }

    #[test]
    fn update_and_delete() {
        let mut repo = MemoryRepository::new();
        let mut ann = trained();
        let id = ann.store(&mut repo, None).unwrap();

        ann.config.accuracy = 0.25;
        ann.update(&mut repo).unwrap();
        assert_eq!(repo.read(id).unwrap().config.accuracy, 0.25);

        ann.delete(&mut repo).unwrap();
        assert!(ann.record_id().is_nil());
        assert!(ann.is_trained());
        assert!(repo.is_empty());
        assert!(matches!(ann.update(&mut repo), Err(AnnErr::RecordNotFound(_))));
    }

    #[test]
    fn failed_load_keeps_the_network() {
        let mut repo = MemoryRepository::new();
        let mut record = TransferRecord::from_ann(&trained()).unwrap();
        record.w_out.truncate(10);
        let id = repo.create(record).unwrap();

        let mut ann = trained();
        let before = ann.clone();
        assert!(matches!(ann.load(&mut repo, &id.to_string()), Err(AnnErr::Format(_))));

        assert_eq!(ann.config(), before.config());
        assert_eq!(ann.params(), before.params());
        assert!(ann.record_id().is_nil());
    }

    #[test]
    fn json_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ann.json");
        let ann = trained();

        ann.save_json(&path).unwrap();
        ann.save_json(&path).unwrap();

        let mut loaded = blank();
        loaded.load_json(&path).unwrap();

        assert_eq!(loaded.config(), ann.config());
        assert_eq!(loaded.params(), ann.params());
    }

    #[test]
    fn json_extension_is_required() {
        let dir = tempfile::tempdir().unwrap();
        let ann = trained();

        for name in ["ann.txt", "ann", "ann.json.bak", "ann.JSON"] {
            let path = dir.path().join(name);
            assert!(matches!(ann.save_json(&path), Err(AnnErr::Format(_))), "{name}");
            assert!(matches!(blank().load_json(&path), Err(AnnErr::Format(_))), "{name}");
            assert!(!path.exists());
        }
    }

    #[test]
    fn missing_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = blank().load_json(dir.path().join("missing.json"));

        assert!(matches!(res, Err(AnnErr::Io(_))));
    }
}
