use plotters::prelude::*;
use thiserror::Error;

use crate::domain::distribution::Distribution;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("distribution has no points to plot")]
    Empty,
    #[error("failed to render distribution plot: {0}")]
    Render(String),
}

/// Renders the pooled masses as a scatter plot, one point per bin at `x_at(i)`.
pub fn write_distribution_png(
    output_path: &str,
    distribution: &Distribution,
    title: &str,
) -> Result<(), PlotError> {
    if distribution.points.is_empty() {
        return Err(PlotError::Empty);
    }
    render_distribution_png(output_path, distribution, title)
}

fn render_distribution_png(
    output_path: &str,
    distribution: &Distribution,
    title: &str,
) -> Result<(), PlotError> {
    let max_mass = distribution
        .points
        .iter()
        .cloned()
        .filter(|mass| mass.is_finite())
        .fold(0.0_f64, f64::max);
    let max_y = if max_mass > 0.0 { max_mass * 1.1 } else { 1.0 };
    let min_x = distribution.min_point();
    let max_x = if distribution.max_point() > min_x {
        distribution.max_point()
    } else {
        min_x + 1.0
    };

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(min_x..max_x, 0.0..max_y)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Value")
        .y_desc("Probability mass")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.2}"))
        .y_label_formatter(&|value| format!("{value:.1e}"))
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let point_color = RGBColor(30, 122, 204);
    chart
        .draw_series(
            distribution
                .xy_points()
                .filter(|(_, mass)| mass.is_finite())
                .map(|(x, mass)| Circle::new((x, mass), 2, point_color.filled())),
        )
        .map_err(|e| PlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::distribution::Domain;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_distribution_png_writes_file() {
        let distribution = Distribution {
            points: vec![0.1, 0.2, 0.4, 0.2, 0.1],
            domain: Domain::new(0.0, 5.0),
        };
        let output_file = assert_fs::NamedTempFile::new("distribution.png").unwrap();

        write_distribution_png(
            output_file.path().to_str().unwrap(),
            &distribution,
            "Labor",
        )
        .unwrap();

        output_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn write_distribution_png_rejects_empty_distribution() {
        let distribution = Distribution {
            points: vec![],
            domain: Domain::new(0.0, 1.0),
        };
        let output_file = assert_fs::NamedTempFile::new("empty.png").unwrap();

        let error = write_distribution_png(
            output_file.path().to_str().unwrap(),
            &distribution,
            "Empty",
        )
        .unwrap_err();

        assert!(matches!(error, PlotError::Empty));
        output_file.assert(predicate::path::missing());
    }
}
