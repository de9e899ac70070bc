use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use lintrans::config::{DemoConfig, PlotConfig, TransformationKind};
use lintrans::math::MatrixDisplay;
use lintrans::report::{plot_transformation, write_plot_html};
use lintrans::transform::{transform_vectors, Transformation};
use lintrans_cli::demo::{build_report, demo_plot, run_demo};
use lintrans_cli::util::{parse_vector, validate_html_file, write_config_file};

const TRANSFORMATIONS: [&str; 3] = ["explicit", "matrix", "h-scaling"];

fn transformation_arg() -> Arg {
    Arg::new("transformation")
        .short('t')
        .long("transformation")
        .help("Transformation to apply: 'explicit' (T), 'matrix' (L) or 'h-scaling' (T_hScaling)")
        .value_parser(TRANSFORMATIONS)
        .value_hint(ValueHint::Other)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINTRANS_LOG", "error,lintrans=info"))
        .init();

    let matches = Command::new("lintrans")
        .version(clap::crate_version!())
        .about("Linear transformations as functions and as matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the full walkthrough: T, L, the stacked basis vectors and the plot")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON walkthrough configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "HTML file the plot is written to. \
                             Overrides the output file specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("report")
                        .short('r')
                        .long("report")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Also write an HTML report of the walkthrough to this file")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_plot")
                        .long("no-plot")
                        .help("Skip writing the plot.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply a transformation to one vector, or to two vectors stacked side by side")
                .arg(transformation_arg().required(true))
                .arg(
                    Arg::new("vectors")
                        .help("Vectors written as 'a,b'")
                        .required(true)
                        .num_args(1..=2)
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                ),
        )
        .subcommand(
            Command::new("plot")
                .about("Plot a transformation acting on two vectors")
                .arg(transformation_arg().default_value("h-scaling"))
                .arg(
                    Arg::new("v1")
                        .long("v1")
                        .help("First vector, 'a,b'")
                        .default_value("1,0")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("v2")
                        .long("v2")
                        .help("Second vector, 'a,b'")
                        .default_value("0,1")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .help("HTML file the plot is written to")
                        .default_value("lintrans_transformation.html")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Print the default walkthrough configuration as JSON")
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Write the configuration to this file instead of stdout")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_m)) => handle_demo(sub_m),
        Some(("apply", sub_m)) => handle_apply(sub_m),
        Some(("plot", sub_m)) => handle_plot(sub_m),
        Some(("config", sub_m)) => handle_config(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn transformation_kind(matches: &ArgMatches) -> Result<TransformationKind> {
    let name: &String = matches
        .get_one("transformation")
        .ok_or_else(|| anyhow::anyhow!("No transformation given"))?;
    TransformationKind::from_str(name).map_err(anyhow::Error::msg)
}

fn handle_config(matches: &ArgMatches) -> Result<()> {
    let config = DemoConfig::default();
    match matches.get_one::<String>("output_file") {
        Some(path) => write_config_file(&config, path),
        None => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[lintrans::demo] Using config: {:?}", config_path);
        DemoConfig::load(config_path)?
    } else {
        log::info!("[lintrans::demo] No config provided; using defaults.");
        DemoConfig::default()
    };

    if let Some(output_file) = matches.get_one::<String>("output_file") {
        config.output_file = Some(output_file.clone());
    }
    if let Some(report_file) = matches.get_one::<String>("report") {
        config.report_file = Some(report_file.clone());
    }
    if matches.get_flag("no_plot") {
        config.output_file = None;
    }

    for path in config.output_file.iter().chain(config.report_file.iter()) {
        validate_html_file(path)?;
    }

    let outcome = run_demo(&config)?;
    let plot = demo_plot(&config, &outcome);

    if let (Some(plot), Some(path)) = (&plot, &config.output_file) {
        write_plot_html(plot, path)?;
    }

    if let Some(path) = &config.report_file {
        let report = build_report(&config, &outcome, plot)?;
        report.save_to_file(path)?;
    }

    Ok(())
}

fn handle_apply(matches: &ArgMatches) -> Result<()> {
    let kind = transformation_kind(matches)?;
    let vectors = matches
        .get_many::<String>("vectors")
        .into_iter()
        .flatten()
        .map(String::as_str)
        .map(parse_vector)
        .collect::<Result<Vec<_>>>()?;

    let result = match vectors.as_slice() {
        [v] => {
            println!("Original vector:\n{}\n", MatrixDisplay(v));
            kind.apply(v)?
        }
        [v1, v2] => {
            println!(
                "Original vectors:\n v1=\n{}\n v2=\n{}\n",
                MatrixDisplay(v1),
                MatrixDisplay(v2)
            );
            transform_vectors(&kind, v1, v2)?
        }
        _ => anyhow::bail!("Expected one or two vectors"),
    };

    log::info!("[lintrans::apply] {} -> shape {:?}", kind.name(), result.dim());
    println!("Result of the transformation:\n{}", MatrixDisplay(&result));
    Ok(())
}

fn handle_plot(matches: &ArgMatches) -> Result<()> {
    let kind = transformation_kind(matches)?;
    let v1 = parse_vector(matches.get_one::<String>("v1").map(String::as_str).unwrap_or("1,0"))?;
    let v2 = parse_vector(matches.get_one::<String>("v2").map(String::as_str).unwrap_or("0,1"))?;
    let output_file = matches
        .get_one::<String>("output_file")
        .map(String::as_str)
        .unwrap_or("lintrans_transformation.html");
    validate_html_file(output_file)?;

    let plot = plot_transformation(&kind, &v1, &v2, &PlotConfig::default())?;
    write_plot_html(&plot, output_file)?;
    println!("Plot written to {}", output_file);
    Ok(())
}
