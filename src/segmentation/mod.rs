//! Customer segmentation pipeline
//!
//! Dataset loader → exploratory summarizer → feature selector → K-Means
//! clustering oracle → cluster profiler/visualizer. The clustering routine
//! itself is delegated to linfa and treated as a black box producing cluster
//! assignments from feature vectors.

pub mod data;
pub mod model;
pub mod viz;

pub use data::{
    AGE, ANNUAL_INCOME, ColumnSummary, FEATURE_COLUMNS, SPENDING_SCORE, SegmentationData,
    StandardScaler, load_dataset, prepare_features, select_features, summarize,
};
pub use model::{ClusterProfile, KMeansModel, elbow_curve, fit_kmeans, profile_clusters};
