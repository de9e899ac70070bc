use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

enum Block {
    Content(Markup),
    Plot(Plot),
}

/// A titled block of HTML content and inline Plotly plots.
pub struct ReportSection {
    title: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(plot));
    }

    fn render(&self, section_idx: usize) -> Markup {
        html! {
            section class="report-section" id=(format!("section-{}", section_idx)) {
                h2 { (self.title) }
                @for (block_idx, block) in self.blocks.iter().enumerate() {
                    @match block {
                        Block::Content(content) => {
                            div class="content" { (content) }
                        }
                        Block::Plot(plot) => {
                            @let div_id = format!("plot-{}-{}", section_idx, block_idx);
                            div class="plot" { (PreEscaped(plot.to_inline_html(Some(div_id.as_str())))) }
                        }
                    }
                }
            }
        }
    }
}

/// A standalone HTML page made of [`ReportSection`]s.
pub struct Report {
    software_name: String,
    version: String,
    logo: Option<String>,
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(software_name: &str, version: &str, logo: Option<&str>, title: &str) -> Self {
        Self {
            software_name: software_name.to_string(),
            version: version.to_string(),
            logo: logo.map(str::to_string),
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> Markup {
        let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style {
                        "body { font-family: sans-serif; margin: 2em; }
                        header { border-bottom: 1px solid #ccc; margin-bottom: 1em; }
                        .report-section { margin-bottom: 2em; }
                        pre { background-color: #f5f5f5; padding: 10px; border-radius: 5px; }"
                    }
                }
                body {
                    header {
                        @if let Some(logo) = &self.logo {
                            img src=(logo) alt=(self.software_name) height="48";
                        }
                        h1 { (self.title) }
                        p { (self.software_name) " v" (self.version) " | generated " (generated) }
                    }
                    @if self.sections.len() > 1 {
                        nav {
                            ul {
                                @for (idx, section) in self.sections.iter().enumerate() {
                                    li { a href=(format!("#section-{}", idx)) { (section.title()) } }
                                }
                            }
                        }
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        (section.render(idx))
                    }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.render().into_string())
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
        log::info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}
