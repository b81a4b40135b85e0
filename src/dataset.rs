use anyhow::{bail, Result};
use ndarray::{Array3, Axis};

/// Number of label classes in the reference dataset.
pub const NUM_CLASSES: usize = 10;

/// An ordered set of image grids paired 1:1 with integer labels.
///
/// Images are stored as a `(n, height, width)` array of raw pixel
/// intensities; sample `i`'s grid corresponds to label `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    images: Array3<u8>,
    labels: Vec<u8>,
}

impl SampleSet {
    pub fn new(images: Array3<u8>, labels: Vec<u8>) -> Result<Self> {
        if images.len_of(Axis(0)) != labels.len() {
            bail!(
                "sample/label count mismatch: {} images vs {} labels",
                images.len_of(Axis(0)),
                labels.len()
            );
        }
        Ok(Self { images, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// (height, width) of one image grid.
    pub fn image_dims(&self) -> (usize, usize) {
        (self.images.len_of(Axis(1)), self.images.len_of(Axis(2)))
    }

    pub fn images(&self) -> &Array3<u8> {
        &self.images
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn into_parts(self) -> (Array3<u8>, Vec<u8>) {
        (self.images, self.labels)
    }
}

/// The two partitions a dataset source hands back. Only `train` feeds the
/// vectorizer; `test` is part of the loader contract and gets dropped.
#[derive(Clone, Debug)]
pub struct DatasetSplits {
    pub train: SampleSet,
    pub test: SampleSet,
}

/// Where the labeled images come from. Acquisition (download, caching,
/// decoding) lives behind this seam; a failed load is fatal for the run.
pub trait DatasetSource {
    fn load(&self) -> Result<DatasetSplits>;
}
