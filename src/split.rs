use std::collections::BTreeMap;

use ndarray::{Array1, Array2, Axis};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dataset::{Label, SplitDataset};
use crate::error::Error;

/// Splits rows into train and test partitions so that every label keeps its
/// share of the full dataset in both partitions.
///
/// The test partition holds `round(rows * test_fraction)` rows. Each class
/// receives the floor of its proportional share of test seats, and the seats
/// left over go to the classes with the largest remainders, so no class is
/// more than one row away from its exact share. The result only depends on
/// the inputs and `seed`.
pub fn stratified_split(
    features: &Array2<f64>,
    labels: &Array1<Label>,
    test_fraction: f64,
    seed: u64,
) -> Result<SplitDataset, Error> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::InvalidTestFraction(test_fraction));
    }

    let samples = labels.len();
    if features.nrows() != samples {
        return Err(Error::LengthMismatch {
            features: features.nrows(),
            labels: samples,
        });
    }

    let classes = group_by_label(labels);
    if let Some((&label, members)) = classes.iter().find(|(_, members)| members.len() < 2) {
        return Err(Error::TooFewMembers {
            label,
            count: members.len(),
        });
    }

    let test_size = test_partition_size(samples, test_fraction);
    let train_size = samples - test_size;
    let minimum = classes.len().max(1);
    for (partition, size) in [("train", train_size), ("test", test_size)] {
        if size < minimum {
            return Err(Error::PartitionTooSmall {
                partition,
                size,
                classes: classes.len(),
            });
        }
    }

    let class_sizes: Vec<usize> = classes.values().map(Vec::len).collect();
    let test_counts = allocate_test_counts(&class_sizes, samples, test_size);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut train_rows = Vec::with_capacity(train_size);
    let mut test_rows = Vec::with_capacity(test_size);

    for ((label, mut members), test_count) in classes.into_iter().zip(test_counts) {
        tracing::debug!(
            label,
            members = members.len(),
            test = test_count,
            train = members.len() - test_count,
            "allocated class"
        );

        members.shuffle(&mut rng);
        let rest = members.split_off(test_count);
        test_rows.extend(members);
        train_rows.extend(rest);
    }

    train_rows.shuffle(&mut rng);
    test_rows.shuffle(&mut rng);

    Ok(SplitDataset {
        features_train: features.select(Axis(0), &train_rows),
        features_test: features.select(Axis(0), &test_rows),
        labels_train: labels.select(Axis(0), &train_rows),
        labels_test: labels.select(Axis(0), &test_rows),
    })
}

fn group_by_label(labels: &Array1<Label>) -> BTreeMap<Label, Vec<usize>> {
    let mut classes: BTreeMap<Label, Vec<usize>> = BTreeMap::new();
    for (row, &label) in labels.iter().enumerate() {
        classes.entry(label).or_default().push(row);
    }
    classes
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn test_partition_size(samples: usize, test_fraction: f64) -> usize {
    ((samples as f64 * test_fraction).round() as usize).min(samples)
}

/// Largest remainder apportionment of `test_size` seats over the classes.
/// Ties go to the larger class, then to the smaller label.
fn allocate_test_counts(class_sizes: &[usize], samples: usize, test_size: usize) -> Vec<usize> {
    let mut counts: Vec<usize> = class_sizes
        .iter()
        .map(|&size| size * test_size / samples)
        .collect();
    let remainders: Vec<usize> = class_sizes
        .iter()
        .map(|&size| size * test_size % samples)
        .collect();

    let leftover = test_size - counts.iter().sum::<usize>();

    let mut order: Vec<usize> = (0..class_sizes.len()).collect();
    order.sort_by(|&a, &b| {
        remainders[b]
            .cmp(&remainders[a])
            .then(class_sizes[b].cmp(&class_sizes[a]))
            .then(a.cmp(&b))
    });

    for &class in order.iter().take(leftover) {
        counts[class] += 1;
    }

    counts
}
