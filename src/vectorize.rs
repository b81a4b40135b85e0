use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{s, Array2, Array3};

use crate::dataset::SampleSet;

/// Output-size cap applied to both files. Kept fixed rather than
/// configurable to match the original preprocessing step.
pub const SAMPLE_CAP: usize = 10_000;

/// Row-major reshape of `(n, h, w)` image grids into `(n, h * w)` feature
/// rows. Lossless: every pixel appears exactly once, rows top-to-bottom,
/// left-to-right within a row.
pub fn flatten(images: Array3<u8>) -> Result<Array2<u8>> {
    let (n, h, w) = images.dim();
    images
        .into_shape((n, h * w))
        .context("image grids are not contiguous row-major storage")
}

/// First `min(cap, n)` feature rows and labels, original order. A set
/// smaller than the cap passes through untouched.
pub fn truncate(features: Array2<u8>, mut labels: Vec<u8>, cap: usize) -> (Array2<u8>, Vec<u8>) {
    let keep = cap.min(features.nrows());
    let features = features.slice_move(s![..keep, ..]);
    labels.truncate(keep);
    (features, labels)
}

/// One line per sample: comma-separated plain decimal integers, no header.
pub fn write_feature_rows(path: &Path, features: &Array2<u8>) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create feature file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for row in features.outer_iter() {
        let mut sep = "";
        for pixel in row {
            write!(out, "{}{}", sep, pixel)?;
            sep = ",";
        }
        writeln!(out)?;
    }
    out.flush()
        .with_context(|| format!("cannot flush feature file {}", path.display()))
}

/// One plain decimal integer per line, aligned 1:1 with the feature file.
pub fn write_labels(path: &Path, labels: &[u8]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create label file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for label in labels {
        writeln!(out, "{}", label)?;
    }
    out.flush()
        .with_context(|| format!("cannot flush label file {}", path.display()))
}

/// Full pipeline for one sample set: flatten, cap at [`SAMPLE_CAP`], then
/// serialize features and labels. Both output files are overwritten; a
/// failure part-way leaves whatever was already written on disk.
pub fn vectorize(set: SampleSet, features_path: &Path, labels_path: &Path) -> Result<()> {
    let (h, w) = set.image_dims();
    let (images, labels) = set.into_parts();

    let features = flatten(images)?;
    let (features, labels) = truncate(features, labels, SAMPLE_CAP);
    log::info!(
        "writing {} samples of {} features ({}x{} grids)",
        features.nrows(),
        h * w,
        h,
        w
    );

    write_feature_rows(features_path, &features)?;
    write_labels(labels_path, &labels)?;
    Ok(())
}
