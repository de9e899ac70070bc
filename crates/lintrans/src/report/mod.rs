//! Plotting and HTML reporting.
//!
//! `plots` turns a transformation and two planar vectors into a
//! `plotly::Plot`; `report` assembles plots and `maud` markup into a single
//! HTML page.
pub mod plots;
pub mod report;

pub use plots::{plot_transformation, write_plot_html};
pub use report::{Report, ReportSection};
