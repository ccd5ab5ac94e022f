use std::path::PathBuf;

use shallow_ann::{
    Ann, AnnErr, Config,
    activations::Sigmoid,
    storage::{DirRepository, MemoryRepository, Repository},
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn trained() -> Ann<Sigmoid> {
    let config = Config::new(4, 3, 3, 300, 0.3).unwrap().with_seed(1);
    let mut ann = Ann::new(config, Sigmoid::default());

    ann.train(data("train.csv")).unwrap();
    ann.test(data("test.csv")).unwrap();
    ann
}

fn blank() -> Ann<Sigmoid> {
    Ann::new(Config::new(1, 1, 1, 1, 0.1).unwrap(), Sigmoid::default())
}

fn assert_same(a: &Ann<Sigmoid>, b: &Ann<Sigmoid>) {
    assert_eq!(a.config(), b.config());
    assert_eq!(a.params(), b.params());
    assert_eq!(
        a.predict(data("test.csv")).unwrap(),
        b.predict(data("test.csv")).unwrap()
    );
}

#[test]
fn json_round_trip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ann.json");
    let ann = trained();

    ann.save_json(&path).unwrap();
    let mut loaded = blank();
    loaded.load_json(&path).unwrap();

    assert_same(&ann, &loaded);
}

#[test]
fn memory_repository_round_trip() {
    let mut repo = MemoryRepository::new();
    let mut ann = trained();
    let id = ann.store(&mut repo, None).unwrap();

    let mut loaded = blank();
    loaded.load(&mut repo, &id.to_string()).unwrap();

    assert_same(&ann, &loaded);
    assert_eq!(loaded.record_id(), id);
}

#[test]
fn dir_repository_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let mut ann = trained();
    let id = ann.store(DirRepository::new(dir.path()).unwrap(), None).unwrap();

    let repo = DirRepository::new(dir.path()).unwrap();
    assert!(!repo.read(id).unwrap().created_at.is_empty());

    let mut loaded = blank();
    loaded.load(repo, &id.to_string()).unwrap();
    assert_same(&ann, &loaded);
}

#[test]
fn retrained_network_updates_its_record() {
    let mut repo = MemoryRepository::new();
    let mut ann = trained();
    let id = ann.store(&mut repo, None).unwrap();
    let created_at = repo.read(id).unwrap().created_at;

    ann.train(data("train.csv")).unwrap();
    ann.test(data("train.csv")).unwrap();
    ann.update(&mut repo).unwrap();

    let mut loaded = blank();
    loaded.load(&mut repo, &id.to_string()).unwrap();
    assert_same(&ann, &loaded);
    assert_eq!(repo.read(id).unwrap().created_at, created_at);

    ann.delete(&mut repo).unwrap();
    assert!(matches!(
        loaded.load(&mut repo, &id.to_string()),
        Err(AnnErr::RecordNotFound(_))
    ));
}
