//! Approximate command implementation
//!
//! Reduces noisy `x y` samples to a handful of anchors joined by a clamped
//! cubic spline.

use curvekit_core::math::approximation::{AdaptiveApproximator, ApproximationConfig};
use curvekit_core::math::sorting::joint_sort_vectors;
use std::path::Path;
use tracing::info;

use super::{emit, parse_xy, read_text};
use crate::output::{Output, Table};
use crate::Result;

/// Run the approximate command
pub fn run(input: &Path, config: ApproximationConfig, output: &Output) -> Result<()> {
    info!("Approximating {}", input.display());
    info!(
        "  max anchors: {}, window: {}, metric: {}",
        config.max_anchors, config.window, config.metric
    );
    let tables = execute(&read_text(input)?, config)?;
    emit(output, &tables)
}

pub fn execute(text: &str, config: ApproximationConfig) -> Result<Vec<Table>> {
    let (mut xs, mut ys) = parse_xy(text)?;
    joint_sort_vectors(&mut xs, &mut ys)?;

    let approximator = AdaptiveApproximator::new(config)?;
    let result = approximator.approximate_vectors(&xs, &ys)?;
    info!(
        "Selected {} anchors from {} samples",
        result.anchor_count(),
        xs.len()
    );

    let mut tables = vec![Table::new(
        "anchors",
        &["x", "y"],
        vec![result.anchor_x.to_vec(), result.anchor_y.to_vec()],
    )];
    if let Some(curve) = &result.curve {
        tables.push(Table::new(
            "curve",
            &["x", "y", "fitted"],
            vec![xs.to_vec(), ys.to_vec(), curve.to_vec()],
        ));
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn noisy_parabola(n: usize) -> String {
        (0..n)
            .rev()
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                let wobble = if i % 2 == 0 { 1e-3 } else { -1e-3 };
                format!("{} {}\n", x, x * x + wobble)
            })
            .collect()
    }

    #[test]
    fn test_anchor_limit_is_respected() {
        let tables = execute(&noisy_parabola(200), ApproximationConfig::new(6, 3)).unwrap();
        assert_eq!(tables.len(), 1);
        let anchors = &tables[0];
        assert_eq!(anchors.rows(), 6);
        assert!(anchors.columns[0].windows(2).all(|w| w[0] < w[1]));
        assert_eq!(anchors.columns[0][0], 0.0);
        assert_eq!(anchors.columns[0][5], 1.0);
    }

    #[test]
    fn test_curve_table_when_requested() {
        let config = ApproximationConfig::new(5, 2).with_curve(true);
        let tables = execute(&noisy_parabola(50), config).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].name, "curve");
        assert_eq!(tables[1].rows(), 50);
        let fitted = &tables[1].columns[2];
        let data = &tables[1].columns[1];
        for (f, y) in fitted.iter().zip(data) {
            assert!((f - y).abs() < 0.05, "fitted {} vs data {}", f, y);
        }
    }

    #[test]
    fn test_too_few_samples() {
        let err = execute("0 0\n1 1\n", ApproximationConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Approximation(_)));
    }
}
