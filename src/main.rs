use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use fashion_vectorize::dataset::DatasetSource;
use fashion_vectorize::mnist::MnistSource;
use fashion_vectorize::vectorize;

static MNIST_DIR: &'static str = "mnist/";
static FEATURES_FILEPATH: &'static str = "fashion_vectors.csv";
static LABELS_FILEPATH: &'static str = "fashion_labels.csv";

fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init(); // Log to stderr (run with `RUST_LOG=debug` for more).

    let splits = MnistSource::new(MNIST_DIR)
        .load()
        .context("failed to load the Fashion-MNIST dataset")?;
    log::info!(
        "loaded {} training samples ({} test samples unused)",
        splits.train.len(),
        splits.test.len()
    );

    vectorize::vectorize(
        splits.train,
        Path::new(FEATURES_FILEPATH),
        Path::new(LABELS_FILEPATH),
    )?;

    log::info!("wrote {} and {}", FEATURES_FILEPATH, LABELS_FILEPATH);
    Ok(())
}
