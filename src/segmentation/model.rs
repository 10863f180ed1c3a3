//! K-Means clustering oracle and cluster profiling
//!
//! The clustering routine is delegated to linfa and treated as a black box
//! producing cluster assignments from feature vectors.

use crate::segmentation::data::SegmentationData;
use anyhow::bail;
use linfa::Dataset;
use linfa::prelude::*;
use linfa_clustering::KMeans;
use linfa_nn::distance::L2Dist;
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fitted K-Means model with its assignments and metrics
pub struct KMeansModel {
    /// Fitted K-Means model from linfa
    pub model: KMeans<f64, L2Dist>,
    /// Number of clusters
    pub n_clusters: usize,
    /// Cluster assignments for the training data
    pub labels: Array1<usize>,
    /// Cluster centroids in normalized space
    pub centroids: Array2<f64>,
    /// Within-cluster sum of squares
    pub inertia: f64,
}

impl KMeansModel {
    /// Number of points assigned to each cluster
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for &label in self.labels.iter() {
            if label < self.n_clusters {
                sizes[label] += 1;
            }
        }
        sizes
    }
}

/// Fit K-Means on prepared features
///
/// The seed makes runs reproducible; the original analysis pinned its
/// random state the same way.
pub fn fit_kmeans(
    data: &SegmentationData,
    n_clusters: usize,
    max_iters: usize,
    tolerance: f64,
    seed: u64,
) -> crate::Result<KMeansModel> {
    if n_clusters == 0 {
        bail!("number of clusters must be at least 1");
    }
    let n_samples = data.features.nrows();
    if n_samples < n_clusters {
        bail!(
            "number of data points ({}) must be at least equal to number of clusters ({})",
            n_samples,
            n_clusters
        );
    }

    let targets: Array1<usize> = Array1::zeros(n_samples);
    let dataset = Dataset::new(data.features.clone(), targets);

    let rng = SmallRng::seed_from_u64(seed);
    let model = KMeans::params_with(n_clusters, rng, L2Dist)
        .max_n_iterations(max_iters as u64)
        .tolerance(tolerance)
        .fit(&dataset)?;

    let labels = model.predict(&data.features);
    let centroids = model.centroids().clone();
    let inertia = compute_inertia(&data.features, &labels, &centroids);

    Ok(KMeansModel {
        model,
        n_clusters,
        labels,
        centroids,
        inertia,
    })
}

/// WCSS per candidate k, for the elbow method
pub fn elbow_curve(
    data: &SegmentationData,
    max_k: usize,
    max_iters: usize,
    tolerance: f64,
    seed: u64,
) -> crate::Result<Vec<(usize, f64)>> {
    let upper = max_k.min(data.features.nrows());
    (1..=upper)
        .map(|k| fit_kmeans(data, k, max_iters, tolerance, seed).map(|m| (k, m.inertia)))
        .collect()
}

/// Per-cluster size and raw-feature means
#[derive(Debug, Clone)]
pub struct ClusterProfile {
    pub cluster: usize,
    pub size: usize,
    /// Mean of each raw feature over the cluster's members
    pub means: Vec<f64>,
}

/// Profile clusters by averaging the raw (unscaled) feature values
pub fn profile_clusters(data: &SegmentationData, model: &KMeansModel) -> Vec<ClusterProfile> {
    let n_features = data.raw_features.ncols();
    let mut sums = vec![vec![0.0; n_features]; model.n_clusters];
    let mut counts = vec![0usize; model.n_clusters];

    for (row, &label) in model.labels.iter().enumerate() {
        if label >= model.n_clusters {
            continue;
        }
        counts[label] += 1;
        for feature in 0..n_features {
            sums[label][feature] += data.raw_features[[row, feature]];
        }
    }

    (0..model.n_clusters)
        .map(|cluster| {
            let size = counts[cluster];
            let means = if size > 0 {
                sums[cluster].iter().map(|s| s / size as f64).collect()
            } else {
                vec![0.0; n_features]
            };
            ClusterProfile {
                cluster,
                size,
                means,
            }
        })
        .collect()
}

/// Within-cluster sum of squares
fn compute_inertia(features: &Array2<f64>, labels: &Array1<usize>, centroids: &Array2<f64>) -> f64 {
    let mut inertia = 0.0;
    for (row, &cluster) in labels.iter().enumerate() {
        if cluster < centroids.nrows() {
            let point = features.row(row);
            let centroid = centroids.row(cluster);
            inertia += point
                .iter()
                .zip(centroid.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>();
        }
    }
    inertia
}
