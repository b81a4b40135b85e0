use std::path::Path;

use anyhow::{ensure, Context, Result};
use ndarray::Array3;
use rust_mnist::Mnist;

use crate::dataset::{DatasetSource, DatasetSplits, SampleSet};

/// Fashion-MNIST grids are 28x28, same as classic MNIST.
pub const IMAGE_SIDE: usize = 28;

// IDX file names rust-mnist appends to the data directory.
const IDX_FILENAMES: [&str; 4] = [
    "train-images-idx3-ubyte",
    "train-labels-idx1-ubyte",
    "t10k-images-idx3-ubyte",
    "t10k-labels-idx1-ubyte",
];

/// Loads Fashion-MNIST from a local directory of IDX files. The directory
/// string must end with a path separator, e.g. "mnist/". If on windows,
/// replace the forward slashes with backslashes.
pub struct MnistSource {
    dir: String,
}

impl MnistSource {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DatasetSource for MnistSource {
    fn load(&self) -> Result<DatasetSplits> {
        // Mnist::new panics on a missing file, so check all four up front and
        // surface a proper error instead.
        for name in IDX_FILENAMES {
            let path = format!("{}{}", self.dir, name);
            ensure!(Path::new(&path).is_file(), "missing dataset file: {}", path);
        }

        let mnist = Mnist::new(&self.dir);
        log::debug!(
            "loaded IDX data from {}: {} train / {} test samples",
            self.dir,
            mnist.train_data.len(),
            mnist.test_data.len()
        );

        let train = to_sample_set(&mnist.train_data, mnist.train_labels)?;
        let test = to_sample_set(&mnist.test_data, mnist.test_labels)?;
        Ok(DatasetSplits { train, test })
    }
}

// rust-mnist hands images back as flat 784-byte rows; restore the
// (n, 28, 28) grid shape the rest of the pipeline expects.
fn to_sample_set(data: &[[u8; IMAGE_SIDE * IMAGE_SIDE]], labels: Vec<u8>) -> Result<SampleSet> {
    let n = data.len();
    let pixels: Vec<u8> = data.iter().flatten().copied().collect();
    let images = Array3::from_shape_vec((n, IMAGE_SIDE, IMAGE_SIDE), pixels)
        .context("IDX image data does not match the 28x28 grid shape")?;
    SampleSet::new(images, labels)
}
