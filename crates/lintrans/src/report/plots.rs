use std::path::Path;

use anyhow::{Context, Result};
use itertools_num::linspace;
use ndarray::Array2;
use plotly::common::{DashType, Line, Marker, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::config::PlotConfig;
use crate::error::ShapeError;
use crate::math::planar;
use crate::transform::Transformation;

/// Offset of a tip label from the arrow tip, away from the origin.
fn label_offset(coordinate: f64) -> f64 {
    let sign = if coordinate == 0.0 { 1.0 } else { coordinate.signum() };
    0.4 * sign - 0.2
}

/// Half-width of the square canvas, rounded up to a positive whole number,
/// and the integer tick positions across `[-limit, limit]`.
fn axis_ticks(axis_limit: f64) -> (f64, Vec<f64>) {
    let limit = axis_limit.abs().ceil().max(1.0);
    let ticks = linspace(-limit, limit, (2.0 * limit) as usize + 1).collect();
    (limit, ticks)
}

/// Traces for two arrows from the origin, the parallelogram they span and
/// their tip labels, all in one colour.
fn vector_pair_traces(
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    labels: [&str; 2],
    color: &str,
    legend_group: &str,
) -> Vec<Box<Scatter<f64, f64>>> {
    let arrow = |x: f64, y: f64, label: &str| {
        Scatter::new(vec![0.0, x], vec![0.0, y])
            .name(label)
            .legend_group(legend_group)
            .mode(Mode::LinesMarkers)
            .line(Line::new().color(color.to_string()).width(3.0))
            .marker(Marker::new().color(color.to_string()).size(8))
    };

    let outline = Scatter::new(vec![0.0, x2, x1 + x2, x1], vec![0.0, y2, y1 + y2, y1])
        .name(&format!("span({}, {})", labels[0], labels[1]))
        .legend_group(legend_group)
        .show_legend(false)
        .mode(Mode::Lines)
        .line(Line::new().color(color.to_string()).width(1.0).dash(DashType::Dash));

    let tips = Scatter::new(
        vec![x1 + label_offset(x1), x2 + label_offset(x2)],
        vec![y1 + label_offset(y1), y2 + label_offset(y2)],
    )
    .name(&format!("{} labels", legend_group))
    .legend_group(legend_group)
    .show_legend(false)
    .mode(Mode::Text)
    .text_array(labels.to_vec());

    vec![arrow(x1, y1, labels[0]), arrow(x2, y2, labels[1]), outline, tips]
}

/// Plot two planar vectors and their images under `transformation`.
///
/// Each vector is transformed on its own, so any transformation accepting a
/// single 2x1 column works here. Transformations whose output is not a 2x1
/// vector cannot be drawn and return [`ShapeError::NotPlanar`].
pub fn plot_transformation<T>(
    transformation: &T,
    vector1: &Array2<f64>,
    vector2: &Array2<f64>,
    config: &PlotConfig,
) -> Result<Plot, ShapeError>
where
    T: Transformation + ?Sized,
{
    let v1 = planar(vector1)?;
    let v2 = planar(vector2)?;
    let w1 = planar(&transformation.apply(vector1)?)?;
    let w2 = planar(&transformation.apply(vector2)?)?;

    let name = transformation.name();
    let transformed_labels = [format!("{}(e1)", name), format!("{}(e2)", name)];

    let mut plot = Plot::new();
    for trace in vector_pair_traces(v1, v2, ["e1", "e2"], config.color_original.as_str(), "original") {
        plot.add_trace(trace);
    }
    for trace in vector_pair_traces(
        w1,
        w2,
        [transformed_labels[0].as_str(), transformed_labels[1].as_str()],
        config.color_transformed.as_str(),
        "transformed",
    ) {
        plot.add_trace(trace);
    }

    let (limit, ticks) = axis_ticks(config.axis_limit);
    let axis = |title: &str| {
        Axis::new()
            .title(title)
            .range(vec![-limit, limit])
            .tick_values(ticks.clone())
            .zero_line(true)
            .show_grid(true)
    };

    plot.set_layout(
        Layout::new()
            .title(config.title.as_str())
            .width(config.width)
            .height(config.height)
            .x_axis(axis("x"))
            .y_axis(axis("y")),
    );

    Ok(plot)
}

/// Write `plot` to a standalone HTML page.
pub fn write_plot_html<P: AsRef<Path>>(plot: &Plot, path: P) -> Result<()> {
    std::fs::write(&path, plot.to_html())
        .with_context(|| format!("Failed to write plot: {}", path.as_ref().display()))?;
    log::info!("Plot written to {}", path.as_ref().display());
    Ok(())
}
