//! Dataset loading, exploratory summaries, and feature preparation

use anyhow::bail;
use ndarray::{Array1, Array2, Axis};
use polars::prelude::*;

/// Column names of the customer dataset
pub const AGE: &str = "Age";
pub const ANNUAL_INCOME: &str = "Annual Income (k$)";
pub const SPENDING_SCORE: &str = "Spending Score (1-100)";

/// The full feature set used by the scaled clustering pass
pub const FEATURE_COLUMNS: [&str; 3] = [AGE, ANNUAL_INCOME, SPENDING_SCORE];

/// Load the customer dataset from a CSV file
///
/// The file is loaded once and never written back. Fails if the file is
/// empty or any expected feature column is missing.
pub fn load_dataset(path: &str) -> crate::Result<DataFrame> {
    let df = CsvReader::from_path(path)?.has_header(true).finish()?;

    if df.height() == 0 {
        bail!("dataset '{}' contains no rows", path);
    }
    for column in FEATURE_COLUMNS {
        if df.column(column).is_err() {
            bail!("dataset '{}' is missing required column '{}'", path, column);
        }
    }

    Ok(df)
}

/// Per-column summary statistics for the exploratory pass
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub nulls: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarize the feature columns: counts, missing values, and basic stats
pub fn summarize(df: &DataFrame) -> crate::Result<Vec<ColumnSummary>> {
    FEATURE_COLUMNS
        .iter()
        .map(|&name| {
            let series = df.column(name)?;
            let nulls = series.null_count();
            let values = column_f64(df, name)?;

            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            Ok(ColumnSummary {
                name: name.to_string(),
                count,
                nulls,
                mean,
                std: var.sqrt(),
                min,
                max,
            })
        })
        .collect()
}

/// Extract a column as f64 values, casting integers where needed
pub fn column_f64(df: &DataFrame, name: &str) -> crate::Result<Vec<f64>> {
    Ok(df
        .column(name)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_no_null_iter()
        .collect())
}

/// Select feature columns into a row-major matrix (n_rows, n_columns)
///
/// Fails if any selected column has missing values, so downstream passes
/// always see a dense matrix.
pub fn select_features(df: &DataFrame, columns: &[&str]) -> crate::Result<Array2<f64>> {
    let n_rows = df.height();

    let mut extracted = Vec::with_capacity(columns.len());
    for &name in columns {
        let nulls = df.column(name)?.null_count();
        if nulls > 0 {
            bail!("column '{}' has {} missing values", name, nulls);
        }
        extracted.push(column_f64(df, name)?);
    }

    let mut data = Vec::with_capacity(n_rows * columns.len());
    for row in 0..n_rows {
        for column in &extracted {
            data.push(column[row]);
        }
    }

    Ok(Array2::from_shape_vec((n_rows, columns.len()), data)?)
}

/// Mean/standard-deviation scaler fitted on a feature matrix
///
/// Uses the population standard deviation; zero-variance columns fall back
/// to a divisor of 1.0 so constant features pass through centered.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Array1<f64>,
    stds: Array1<f64>,
}

impl StandardScaler {
    /// Fit the scaler on a feature matrix
    pub fn fit(data: &Array2<f64>) -> Self {
        let n = data.nrows() as f64;
        let means = data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(data.ncols()));

        let mut stds = Array1::zeros(data.ncols());
        for (j, column) in data.axis_iter(Axis(1)).enumerate() {
            let mean = means[j];
            let var = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let std = var.sqrt();
            stds[j] = if std > 0.0 { std } else { 1.0 };
        }

        Self { means, stds }
    }

    /// Transform a matrix into normalized space
    pub fn transform(&self, data: &Array2<f64>) -> Array2<f64> {
        let mut out = data.clone();
        for (j, mut column) in out.axis_iter_mut(Axis(1)).enumerate() {
            let mean = self.means[j];
            let std = self.stds[j];
            column.mapv_inplace(|v| (v - mean) / std);
        }
        out
    }

    pub fn means(&self) -> &Array1<f64> {
        &self.means
    }

    pub fn stds(&self) -> &Array1<f64> {
        &self.stds
    }
}

/// Prepared features for the clustering oracle
#[derive(Debug)]
pub struct SegmentationData {
    /// Normalized features (n_rows, n_features)
    pub features: Array2<f64>,
    /// Raw feature values before normalization
    pub raw_features: Array2<f64>,
    /// Fitted scaler for the raw features
    pub scaler: StandardScaler,
    /// Names of the selected feature columns
    pub feature_names: Vec<String>,
}

/// Select the given columns and fit-normalize them
pub fn prepare_features(df: &DataFrame, columns: &[&str]) -> crate::Result<SegmentationData> {
    let raw_features = select_features(df, columns)?;
    let scaler = StandardScaler::fit(&raw_features);
    let features = scaler.transform(&raw_features);

    Ok(SegmentationData {
        features,
        raw_features,
        scaler,
        feature_names: columns.iter().map(|s| s.to_string()).collect(),
    })
}
