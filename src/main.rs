// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use seq_pipeline::testcase::{self, TestcaseGenerator};
use seq_pipeline::utils::logging::{
    format_error, format_info, format_success, format_warning, init_logger, set_color_enabled,
};
use seq_pipeline::{
    BatchVerifier, Config, JsonExporter, OverflowPolicy, PipelineReport, Sequence,
    SequencePipeline, StageTimer, Validator, parse_sequence,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "seq_pipeline")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Square, filter and sum integer sequences", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline over one sequence and print the results
    Run {
        /// Integers to process; falls back to --input, then the configured list
        #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
        numbers: Vec<String>,

        #[arg(short, long, value_name = "FILE", conflicts_with = "numbers")]
        input: Option<PathBuf>,

        #[arg(long, value_name = "POLICY")]
        overflow: Option<OverflowPolicy>,

        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Run every case of a testcase suite, optionally checking expected sums
    Batch {
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        expected: Option<PathBuf>,

        #[arg(long, value_name = "POLICY")]
        overflow: Option<OverflowPolicy>,

        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Write a random testcase suite and its expected sums
    Generate {
        #[arg(short = 'n', long, value_name = "NUM")]
        count: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_name = "FILE")]
        input_file: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        expected_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);
    set_color_enabled(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Run {
            numbers,
            input,
            overflow,
            export,
            pretty,
        } => cmd_run(&config, numbers, input, overflow, export, pretty),
        Commands::Batch {
            input,
            expected,
            overflow,
            export,
            pretty,
        } => cmd_batch(&config, input, expected, overflow, export, pretty, cli.color),
        Commands::Generate {
            count,
            seed,
            input_file,
            expected_file,
        } => cmd_generate(&config, count, seed, input_file, expected_file),
    }
}

fn cmd_run(
    config: &Config,
    numbers: Vec<String>,
    input: Option<PathBuf>,
    overflow: Option<OverflowPolicy>,
    export: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let sequence = if !numbers.is_empty() {
        parse_sequence(&numbers.join(" ")).context("Invalid numbers")?
    } else if let Some(path) = input {
        Validator::validate_file_path(&path)?;
        let text = testcase::read_suite_file(&path)?;
        parse_sequence(&text).with_context(|| format!("Invalid sequence in {}", path.display()))?
    } else {
        Sequence::from(config.pipeline.numbers.clone())
    };

    let pipeline = SequencePipeline::new(overflow.unwrap_or(config.pipeline.overflow));
    info!(
        "Running pipeline over {} numbers ({:?} on overflow)",
        sequence.len(),
        pipeline.policy()
    );

    let report = pipeline.run(&sequence).context("Pipeline run failed")?;
    println!("{}", report);

    if let Some(dir) = export.or_else(|| config.output.export_dir.clone()) {
        let path = JsonExporter::new(dir)?.export_report(&report, pretty || config.output.pretty)?;
        eprintln!("{}", format_info(&format!("Report written to {}", path.display())));
    }

    Ok(())
}

fn cmd_batch(
    config: &Config,
    input: Option<PathBuf>,
    expected: Option<PathBuf>,
    overflow: Option<OverflowPolicy>,
    export: Option<PathBuf>,
    pretty: bool,
    colored: bool,
) -> Result<()> {
    let separator = config.testcase.separator.as_str();
    let input = input.unwrap_or_else(|| config.testcase.input_file.clone());
    let pipeline = SequencePipeline::new(overflow.unwrap_or(config.pipeline.overflow));
    let export_dir = export.or_else(|| config.output.export_dir.clone());
    let pretty = pretty || config.output.pretty;

    let timer = StageTimer::new("parse");
    let cases = testcase::parse_cases(&read_checked(&input)?, separator)
        .with_context(|| format!("Invalid testcase suite {}", input.display()))?;
    timer.finish_with_count(cases.len());

    let Some(expected) = expected else {
        let reports = cases
            .iter()
            .map(|case| pipeline.run(&case.numbers))
            .collect::<seq_pipeline::Result<Vec<PipelineReport>>>()
            .context("Pipeline run failed")?;

        for (case, report) in cases.iter().zip(&reports) {
            println!("Case {}:\n{}\n", case.index, report);
        }

        if let Some(dir) = export_dir {
            let path = JsonExporter::new(dir)?.export_reports(&reports, pretty)?;
            eprintln!("{}", format_info(&format!("Reports written to {}", path.display())));
        }
        return Ok(());
    };

    let sums = testcase::parse_expected(&read_checked(&expected)?, separator)
        .with_context(|| format!("Invalid expected output {}", expected.display()))?;

    let timer = StageTimer::new("verify");
    let summary = BatchVerifier::new(pipeline)
        .with_progress(true, colored)
        .verify(&cases, &sums)?;
    timer.warn_if_slow(Duration::from_secs(5));
    let metrics = timer.finish_with_count(summary.total);

    for mismatch in summary.mismatches.iter().take(10) {
        println!(
            "{}",
            format_error(&format!(
                "Case {}: expected {}, got {}",
                mismatch.case, mismatch.expected, mismatch.actual
            ))
        );
    }
    if summary.failed() > 10 {
        println!("   ... and {} more mismatches", summary.failed() - 10);
    }
    for error in &summary.errors {
        println!(
            "{}",
            format_warning(&format!("Case {}: {}", error.case, error.message))
        );
    }

    println!(
        "{}",
        format_info(&format!(
            "{} of {} cases passed ({:.1}%) - {}",
            summary.passed,
            summary.total,
            summary.pass_rate(),
            metrics.format()
        ))
    );

    if let Some(dir) = export_dir {
        let path = JsonExporter::new(dir)?.export_batch(&summary, pretty)?;
        eprintln!("{}", format_info(&format!("Summary written to {}", path.display())));
    }

    if !summary.all_passed() {
        bail!(
            "{} cases failed, {} errored",
            summary.failed(),
            summary.errored()
        );
    }

    println!("{}", format_success("All cases passed"));
    Ok(())
}

fn cmd_generate(
    config: &Config,
    count: Option<usize>,
    seed: Option<u64>,
    input_file: Option<PathBuf>,
    expected_file: Option<PathBuf>,
) -> Result<()> {
    let mut testcase_config = config.testcase.clone();
    if let Some(count) = count {
        testcase_config.count = count;
    }
    testcase_config.validate()?;

    let separator = testcase_config.separator.clone();
    let input_file = input_file.unwrap_or_else(|| testcase_config.input_file.clone());
    let expected_file = expected_file.unwrap_or_else(|| testcase_config.expected_file.clone());

    let mut generator = match seed {
        Some(seed) => TestcaseGenerator::with_seed(testcase_config, seed),
        None => TestcaseGenerator::new(testcase_config),
    };
    let suite = generator.generate()?;

    testcase::write_suite_file(&input_file, &suite.render_input(&separator))?;
    testcase::write_suite_file(&expected_file, &suite.render_expected(&separator))?;

    println!(
        "{}",
        format_success(&format!(
            "Wrote {} cases to {} and {}",
            suite.cases.len(),
            input_file.display(),
            expected_file.display()
        ))
    );

    Ok(())
}

fn read_checked(path: &Path) -> Result<String> {
    Validator::validate_file_path(path)?;
    Ok(testcase::read_suite_file(path)?)
}
