//! The walkthrough run by `lintrans demo`.
use anyhow::{Context, Result};
use maud::html;
use ndarray::Array2;
use plotly::Plot;

use lintrans::config::DemoConfig;
use lintrans::math::MatrixDisplay;
use lintrans::report::{plot_transformation, Report, ReportSection};
use lintrans::transform::{l, t, transform_vectors, Transformation};

/// Everything the walkthrough computed, in the order it was printed.
#[derive(Debug)]
pub struct DemoOutcome {
    pub vector: Array2<f64>,
    /// `T(vector)`.
    pub explicit: Array2<f64>,
    /// `L(vector)`.
    pub matrix: Array2<f64>,
    pub e1: Array2<f64>,
    pub e2: Array2<f64>,
    /// The configured transformation applied to `[e1 e2]` in one call.
    pub stacked: Array2<f64>,
}

/// Apply `T` and `L` to the configured vector, then the configured
/// transformation to the stacked basis vectors, printing each step.
pub fn run_demo(config: &DemoConfig) -> Result<DemoOutcome> {
    let v = config.vector();
    let explicit = t(&v).context("T failed")?;
    println!(
        "Original vector:\n {}\n Result of the transformation:\n {}",
        MatrixDisplay(&v),
        MatrixDisplay(&explicit)
    );

    let matrix = l(&v).context("L failed")?;
    println!(
        "Original vector:\n{} \n\n Result of the transformation:\n{}",
        MatrixDisplay(&v),
        MatrixDisplay(&matrix)
    );

    let (e1, e2) = config.basis();
    let stacked = transform_vectors(&config.transformation, &e1, &e2)
        .with_context(|| format!("{} failed on the stacked basis vectors", config.transformation))?;
    println!(
        "Original vectors:\n e1= \n{} \n e2=\n{} \n\n Result of the transformation (matrix form):\n{}",
        MatrixDisplay(&e1),
        MatrixDisplay(&e2),
        MatrixDisplay(&stacked)
    );

    Ok(DemoOutcome {
        vector: v,
        explicit,
        matrix,
        e1,
        e2,
        stacked,
    })
}

/// Plot the configured transformation acting on the basis vectors.
///
/// Returns `None` (with a warning) when the transformation leaves the plane.
pub fn demo_plot(config: &DemoConfig, outcome: &DemoOutcome) -> Option<Plot> {
    match plot_transformation(&config.transformation, &outcome.e1, &outcome.e2, &config.plot) {
        Ok(plot) => Some(plot),
        Err(e) => {
            log::warn!("Skipping plot for {}: {}", config.transformation.name(), e);
            None
        }
    }
}

fn matrix_block(label: &str, matrix: &Array2<f64>) -> maud::Markup {
    html! {
        p { (label) }
        pre { (MatrixDisplay(matrix).to_string()) }
    }
}

/// Build the HTML walkthrough report.
pub fn build_report(config: &DemoConfig, outcome: &DemoOutcome, plot: Option<Plot>) -> Result<Report> {
    let mut report = Report::new(
        "lintrans",
        env!("CARGO_PKG_VERSION"),
        None,
        "Linear Transformations Walkthrough",
    );

    /* Section 1: T coordinate by coordinate */
    {
        let mut section = ReportSection::new("T, coordinate by coordinate");
        section.add_content(html! {
            "T((v1, v2)) = (3v1, 0, -2v2), with each output entry assigned on its own."
        });
        section.add_content(matrix_block("Original vector:", &outcome.vector));
        section.add_content(matrix_block("Result of the transformation:", &outcome.explicit));
        report.add_section(section);
    }

    /* Section 2: L as a matrix product */
    {
        let mut section = ReportSection::new("L, the same map as a matrix product");
        section.add_content(matrix_block("Transformation matrix:", &lintrans::transform::l_matrix()));
        section.add_content(matrix_block("Result of the transformation:", &outcome.matrix));
        section.add_content(html! {
            @if outcome.explicit == outcome.matrix {
                p { "T and L agree on this vector." }
            } @else {
                p { "T and L disagree on this vector." }
            }
        });
        report.add_section(section);
    }

    /* Section 3: stacked basis vectors */
    {
        let mut section = ReportSection::new("Transforming the basis vectors at once");
        section.add_content(matrix_block("e1 =", &outcome.e1));
        section.add_content(matrix_block("e2 =", &outcome.e2));
        section.add_content(matrix_block(
            &format!("{} applied to [e1 e2]:", config.transformation.name()),
            &outcome.stacked,
        ));
        if let Some(plot) = plot {
            section.add_plot(plot);
        }
        report.add_section(section);
    }

    /* Section 4: Configuration */
    {
        let mut section = ReportSection::new("Configuration");
        let config_json = serde_json::to_string_pretty(config)?;
        section.add_content(html! {
            pre {
                code { (config_json) }
            }
        });
        report.add_section(section);
    }

    Ok(report)
}
