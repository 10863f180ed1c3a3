//! Customer segmentation CLI
//!
//! Runs the full pipeline: load the dataset, summarize it, chart the
//! feature distributions, evaluate the elbow curve, fit K-Means, and
//! profile and plot the resulting segments.

use anyhow::Result;
use bistro::segmentation::{
    ANNUAL_INCOME, FEATURE_COLUMNS, elbow_curve, fit_kmeans, load_dataset, prepare_features,
    profile_clusters, summarize, viz,
};
use clap::Parser;
use std::path::Path;

/// Customer segmentation using K-Means clustering
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the customers CSV file
    #[arg(short, long, default_value = "Mall_Customers.csv")]
    input: String,

    /// Number of clusters for the final segmentation
    #[arg(short = 'k', long, default_value = "5")]
    clusters: usize,

    /// Largest k evaluated for the elbow curve
    #[arg(long, default_value = "10")]
    elbow_max: usize,

    /// Directory for the generated plots
    #[arg(short, long, default_value = "plots")]
    output_dir: String,

    /// Maximum iterations for K-Means convergence
    #[arg(long, default_value = "300")]
    max_iters: usize,

    /// Tolerance for K-Means convergence
    #[arg(long, default_value = "1e-4")]
    tolerance: f64,

    /// RNG seed for reproducible runs
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        println!("bistro-segment - customer segmentation with K-Means");
        println!("===================================================\n");
    }

    std::fs::create_dir_all(&args.output_dir)?;
    let plot_path = |name: &str| {
        Path::new(&args.output_dir)
            .join(name)
            .to_string_lossy()
            .into_owned()
    };

    // Load and explore
    let df = load_dataset(&args.input)?;
    if args.verbose {
        println!("Loaded {} customers from {}", df.height(), args.input);
    }
    let summaries = summarize(&df)?;
    viz::print_summaries(&summaries);

    for summary in &summaries {
        if summary.nulls > 0 {
            println!(
                "warning: column '{}' has {} missing values",
                summary.name, summary.nulls
            );
        }
    }

    // Feature distributions
    let data = prepare_features(&df, &FEATURE_COLUMNS)?;
    for (index, name) in data.feature_names.iter().enumerate() {
        let values: Vec<f64> = data.raw_features.column(index).to_vec();
        let file = format!("hist_{}.png", index);
        viz::histogram(
            &values,
            20,
            &plot_path(&file),
            &format!("{} Distribution", name),
            name,
        )?;
    }

    // Elbow method over the scaled features
    let curve = elbow_curve(&data, args.elbow_max, args.max_iters, args.tolerance, args.seed)?;
    viz::elbow_plot(&curve, &plot_path("elbow.png"))?;
    if args.verbose {
        println!("\nWCSS per k:");
        for (k, wcss) in &curve {
            println!("  k={:<2} wcss={:.2}", k, wcss);
        }
    }

    // Final segmentation
    let model = fit_kmeans(
        &data,
        args.clusters,
        args.max_iters,
        args.tolerance,
        args.seed,
    )?;
    println!(
        "\nFitted K-Means with k={} (inertia: {:.2})",
        model.n_clusters, model.inertia
    );

    let profiles = profile_clusters(&data, &model);
    viz::print_cluster_profiles(&profiles, &data.feature_names, df.height());

    let income = data
        .feature_names
        .iter()
        .position(|name| name == ANNUAL_INCOME)
        .unwrap_or(0);
    let spending = data.feature_names.len() - 1;
    viz::scatter_plot(
        &data,
        &model,
        income,
        spending,
        &plot_path("segments.png"),
        "Customer Segments",
    )?;

    println!("\nPlots written to {}/", args.output_dir);

    Ok(())
}
