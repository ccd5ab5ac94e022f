use std::path::PathBuf;

use shallow_ann::{
    Ann, AnnErr, Config,
    activations::{Relu, Sigmoid},
    dataset::Dataset,
    select_best, select_best_on,
    selection::DEFAULT_CANDIDATES,
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn iris_like() -> Config {
    Config::new(4, 3, 3, 5000, 0.3).unwrap()
}

#[test]
fn collapsed_relu_network_still_clears_the_threshold() {
    let config = iris_like().with_seed(0);
    let best = select_best(config, Relu, data("train.csv"), data("test.csv"), 5).unwrap();

    assert!(best.is_trained());
    assert!(best.config().accuracy > 0.8, "{}", best.config().accuracy);

    // At this rate every hidden unit dies and the output is all zeros, so each row ties at
    // its maximum and counts as correct. See sigmoid_network_learns_every_class for a network
    // that actually separates the classes.
    let output = best.predict(data("test.csv")).unwrap();
    assert!(output.iter().all(|&v| v == 0.), "{output}");
}

#[test]
fn sigmoid_network_learns_every_class() {
    let config = Config::new(4, 6, 3, 2000, 0.3).unwrap().with_seed(7);
    let mut ann = Ann::new(config, Sigmoid::default());

    ann.train(data("train.csv")).unwrap();
    let accuracy = ann.test(data("test.csv")).unwrap();
    assert_eq!(accuracy, 1.);

    let output = ann.predict(data("test.csv")).unwrap();
    let test = Dataset::from_csv(data("test.csv"), 4, 4, 3).unwrap();
    assert_eq!(output.dim(), (test.len(), 3));

    // Strictly higher at the true class, no ties.
    for (row, target) in output.rows().into_iter().zip(test.targets().rows()) {
        let class = target.iter().position(|&t| t == 1.).unwrap();
        for (i, &p) in row.iter().enumerate() {
            if i != class {
                assert!(row[class] > p, "{row} {target}");
            }
        }
    }
}

#[test]
fn selected_accuracy_is_the_maximum() {
    let config = Config::new(4, 3, 3, 200, 0.3).unwrap().with_seed(100);
    let train = Dataset::from_csv(data("train.csv"), 4, 4, 3).unwrap();
    let test = Dataset::from_csv(data("test.csv"), 4, 4, 3).unwrap();

    let best = select_best_on(config, Sigmoid::default(), &train, &test, DEFAULT_CANDIDATES)
        .unwrap();

    for i in 0..DEFAULT_CANDIDATES as u64 {
        let mut ann = Ann::new(config.with_seed(100 + i), Sigmoid::default());
        ann.train_on(&train).unwrap();
        let accuracy = ann.evaluate(&test).unwrap();

        assert!(best.config().accuracy >= accuracy);
    }
}

#[test]
fn untrained_network_guards() {
    let mut ann = Ann::new(iris_like(), Relu);

    assert!(matches!(ann.predict(data("test.csv")), Err(AnnErr::UntrainedModel)));
    assert!(matches!(ann.test(data("test.csv")), Err(AnnErr::UntrainedModel)));
}

#[test]
fn missing_dataset() {
    let mut ann = Ann::new(iris_like(), Relu);
    assert!(matches!(ann.train(data("missing.csv")), Err(AnnErr::Io(_))));
    assert!(!ann.is_trained());
}

#[test]
fn narrow_dataset_is_rejected() {
    let config = Config::new(5, 3, 3, 10, 0.3).unwrap();
    let mut ann = Ann::new(config, Relu);

    assert!(matches!(
        ann.train(data("train.csv")),
        Err(AnnErr::Shape { what: "dataset columns", .. })
    ));
}
