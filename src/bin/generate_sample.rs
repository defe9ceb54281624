use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use logreg_util::{load_dataset, plot, DEFAULT_CORRECTION};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Class centres (label 0, label 1) and the spread of each blob.
const CENTRES: [(f64, f64); 2] = [(-1.0, -1.0), (1.5, 1.0)];
const SPREAD: f64 = 0.6;
const PER_CLASS: usize = 100;

/// Perpendicular bisector of the two centres as `theta`.
fn bisector_theta() -> [f64; 3] {
    let [(ax, ay), (bx, by)] = CENTRES;
    let (wx, wy) = (bx - ax, by - ay);
    let (mx, my) = ((ax + bx) / 2.0, (ay + by) / 2.0);
    [-(wx * mx + wy * my), wx, wy]
}

fn write_csv(path: &Path, rng: &mut StdRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["x1", "x2", "y"])?;

    for (label, &(cx, cy)) in CENTRES.iter().enumerate() {
        let dist1 = Normal::new(cx, SPREAD)?;
        let dist2 = Normal::new(cy, SPREAD)?;
        for _ in 0..PER_CLASS {
            let x1 = rng.sample(dist1);
            let x2 = rng.sample(dist2);
            writer.write_record([format!("{x1:.6}"), format!("{x2:.6}"), label.to_string()])?;
        }
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let csv_path = Path::new("sample_data.csv");
    write_csv(csv_path, &mut rng)?;
    info!("wrote {} rows to {}", 2 * PER_CLASS, csv_path.display());

    let dataset = load_dataset(csv_path, "y", true).context("reloading sample CSV")?;
    let theta = bisector_theta();

    for out in ["sample_boundary.svg", "sample_boundary.png"] {
        plot(
            &dataset.features,
            &dataset.labels,
            &theta,
            Some(Path::new(out)),
            DEFAULT_CORRECTION,
        )
        .with_context(|| format!("plotting {out}"))?;
    }

    println!(
        "Wrote {} examples to {} and plots with theta = {theta:?}",
        dataset.len(),
        csv_path.display()
    );
    Ok(())
}
