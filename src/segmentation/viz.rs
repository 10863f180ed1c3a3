//! Visualization of the exploratory and clustering passes using plotters

use crate::segmentation::data::{ColumnSummary, SegmentationData};
use crate::segmentation::model::{ClusterProfile, KMeansModel};
use anyhow::bail;
use plotters::prelude::*;

/// Color palette for clusters
static CLUSTER_COLORS: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];

fn cluster_color(cluster: usize) -> &'static RGBColor {
    CLUSTER_COLORS
        .get(cluster)
        .unwrap_or(&CLUSTER_COLORS[CLUSTER_COLORS.len() - 1])
}

/// Scatter plot of two raw features colored by cluster assignment
///
/// Centroids are drawn as crosses, mapped back from normalized space
/// through the fitted scaler so they land on the raw axes.
pub fn scatter_plot(
    data: &SegmentationData,
    model: &KMeansModel,
    x: usize,
    y: usize,
    output_path: &str,
    title: &str,
) -> crate::Result<()> {
    let xs: Vec<f64> = data.raw_features.column(x).to_vec();
    let ys: Vec<f64> = data.raw_features.column(y).to_vec();
    if xs.is_empty() {
        bail!("scatter plot needs at least one point");
    }

    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let x_pad = ((x_max - x_min) * 0.05).max(1.0);
    let y_pad = ((y_max - y_min) * 0.05).max(1.0);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min - x_pad..x_max + x_pad, y_min - y_pad..y_max + y_pad)?;

    chart
        .configure_mesh()
        .x_desc(data.feature_names[x].as_str())
        .y_desc(data.feature_names[y].as_str())
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (row, (&px, &py)) in xs.iter().zip(ys.iter()).enumerate() {
        let color = cluster_color(model.labels[row]);
        chart.draw_series(std::iter::once(Circle::new((px, py), 4, color.filled())))?;
    }

    for (cluster, centroid) in model.centroids.outer_iter().enumerate() {
        let cx = centroid[x] * data.scaler.stds()[x] + data.scaler.means()[x];
        let cy = centroid[y] * data.scaler.stds()[y] + data.scaler.means()[y];
        let color = cluster_color(cluster);
        chart.draw_series(std::iter::once(Cross::new((cx, cy), 8, color.stroke_width(3))))?;
    }

    root.present()?;
    Ok(())
}

/// Histogram of one feature's raw values
pub fn histogram(
    values: &[f64],
    bins: usize,
    output_path: &str,
    title: &str,
    x_desc: &str,
) -> crate::Result<()> {
    if values.is_empty() || bins == 0 {
        bail!("histogram needs values and at least one bin");
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }
    let y_max = *counts.iter().max().unwrap_or(&1) as f64 * 1.1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(min..max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (index, &count) in counts.iter().enumerate() {
        let x0 = min + index as f64 * width;
        let x1 = x0 + width;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            BLUE.mix(0.5).filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Line chart of WCSS against k, for picking the elbow
pub fn elbow_plot(curve: &[(usize, f64)], output_path: &str) -> crate::Result<()> {
    let Some(last) = curve.last() else {
        bail!("elbow plot needs at least one point");
    };
    let k_max = last.0 as f64;
    let y_max = curve
        .iter()
        .map(|(_, wcss)| *wcss)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    let root = BitMapBackend::new(output_path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Elbow Method", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..k_max + 1.0, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Number of Clusters (k)")
        .y_desc("WCSS")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(LineSeries::new(
        curve.iter().map(|(k, wcss)| (*k as f64, *wcss)),
        &BLUE,
    ))?;
    chart.draw_series(
        curve
            .iter()
            .map(|(k, wcss)| Circle::new((*k as f64, *wcss), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Print the exploratory summary table to the console
pub fn print_summaries(summaries: &[ColumnSummary]) {
    println!("\n=== Dataset Summary ===");
    println!(
        "{:<26} {:>6} {:>6} {:>10} {:>10} {:>8} {:>8}",
        "Column", "Count", "Nulls", "Mean", "Std", "Min", "Max"
    );
    for summary in summaries {
        println!(
            "{:<26} {:>6} {:>6} {:>10.2} {:>10.2} {:>8.1} {:>8.1}",
            summary.name,
            summary.count,
            summary.nulls,
            summary.mean,
            summary.std,
            summary.min,
            summary.max
        );
    }
}

/// Print the cluster profile table to the console
pub fn print_cluster_profiles(profiles: &[ClusterProfile], feature_names: &[String], total: usize) {
    println!("\n=== Cluster Profile ===");
    print!("{:<8} {:>6} {:>7}", "Cluster", "Size", "Share");
    for name in feature_names {
        print!(" {:>24}", name);
    }
    println!();

    for profile in profiles {
        let share = if total > 0 {
            profile.size as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        print!("{:<8} {:>6} {:>6.1}%", profile.cluster, profile.size, share);
        for mean in &profile.means {
            print!(" {:>24.2}", mean);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::data::StandardScaler;
    use crate::segmentation::model::{fit_kmeans, profile_clusters};
    use ndarray::Array2;
    use std::path::Path;
    use tempfile::tempdir;

    fn create_test_data() -> SegmentationData {
        let raw_features = Array2::from_shape_vec(
            (6, 2),
            vec![
                15.0, 39.0, //
                16.0, 81.0, //
                17.0, 6.0, //
                80.0, 77.0, //
                85.0, 72.0, //
                88.0, 79.0, //
            ],
        )
        .unwrap();
        let scaler = StandardScaler::fit(&raw_features);
        let features = scaler.transform(&raw_features);

        SegmentationData {
            features,
            raw_features,
            scaler,
            feature_names: vec![
                "Annual Income (k$)".to_string(),
                "Spending Score (1-100)".to_string(),
            ],
        }
    }

    #[test]
    fn test_scatter_plot_writes_png() {
        let data = create_test_data();
        let model = fit_kmeans(&data, 2, 100, 1e-4, 42).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("clusters.png");
        let path = path.to_str().unwrap();

        scatter_plot(&data, &model, 0, 1, path, "Customer Segments").expect("plots");
        assert!(Path::new(path).exists());
    }

    #[test]
    fn test_histogram_writes_png() {
        let data = create_test_data();
        let values: Vec<f64> = data.raw_features.column(0).to_vec();
        let dir = tempdir().unwrap();
        let path = dir.path().join("income.png");
        let path = path.to_str().unwrap();

        histogram(&values, 5, path, "Annual Income Distribution", "Annual Income (k$)")
            .expect("plots");
        assert!(Path::new(path).exists());
    }

    #[test]
    fn test_histogram_rejects_empty_input() {
        assert!(histogram(&[], 5, "unused.png", "t", "x").is_err());
        assert!(histogram(&[1.0], 0, "unused.png", "t", "x").is_err());
    }

    #[test]
    fn test_elbow_plot_writes_png() {
        let curve = vec![(1, 12.0), (2, 5.0), (3, 2.5), (4, 2.0)];
        let dir = tempdir().unwrap();
        let path = dir.path().join("elbow.png");
        let path = path.to_str().unwrap();

        elbow_plot(&curve, path).expect("plots");
        assert!(Path::new(path).exists());
    }

    #[test]
    fn test_elbow_plot_rejects_empty_curve() {
        assert!(elbow_plot(&[], "unused.png").is_err());
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        let data = create_test_data();
        let model = fit_kmeans(&data, 2, 100, 1e-4, 42).unwrap();
        let profiles = profile_clusters(&data, &model);
        print_cluster_profiles(&profiles, &data.feature_names, 6);
    }
}
