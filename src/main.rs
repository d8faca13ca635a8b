use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use salary_estimator::application::pipeline::PredictionPipeline;
use salary_estimator::application::session::FormSession;
use salary_estimator::config::{FileConfig, Overrides, Settings};
use salary_estimator::domain::encoder::CategoryEncoder;
use salary_estimator::domain::features::FeatureSelection;
use salary_estimator::domain::formatter::FormatPolicy;
use salary_estimator::infrastructure::cache::ModelCache;
use salary_estimator::infrastructure::file::FileModelRepository;
use salary_estimator::interfaces::csv::result_writer::ResultWriter;
use salary_estimator::interfaces::csv::selection_reader::SelectionReader;
use salary_estimator::logging::init_logger;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Estimate salaries from a trained linear model", long_about = None)]
struct Cli {
    /// Path to the JSON model artifact
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display policy: "grouped" (12,34,567) or "abbreviated" (12.3 L)
    #[arg(long, global = true)]
    policy: Option<FormatPolicy>,

    /// Currency symbol placed before displayed amounts
    #[arg(long, global = true)]
    symbol: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the salary for one employee
    Predict {
        /// Years of experience
        #[arg(long)]
        years: u32,
        /// Age, 18 to 65
        #[arg(long)]
        age: u32,
        /// Performance score, 1 to 5
        #[arg(long)]
        performance: u8,
        /// Department label, e.g. "IT" or "R&D"
        #[arg(long)]
        department: String,
        /// Also print the monthly figure and salary band
        #[arg(long)]
        details: bool,
    },
    /// Estimate salaries for every row of a CSV file
    Batch {
        /// CSV with years,age,performance,department columns
        input: PathBuf,
    },
    /// Print the department encoding table
    Departments,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => FileConfig::from_path(path).into_diagnostic()?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(
        file_config,
        Overrides {
            model_path: cli.model,
            policy: cli.policy,
            currency_symbol: cli.symbol,
        },
    )
    .into_diagnostic()?;

    match cli.command {
        Command::Predict {
            years,
            age,
            performance,
            department,
            details,
        } => {
            let selection =
                FeatureSelection::new(years, age, performance, department).into_diagnostic()?;
            let pipeline = load_pipeline(&settings).await?;
            let mut session = FormSession::new(&pipeline);
            let result = session.submit(&selection).into_diagnostic()?;

            println!("Predicted annual salary: {}", result.annual_display);
            if details {
                println!("Monthly: {}", result.monthly_display);
                println!("Salary band: {}", result.band);
            }
        }
        Command::Batch { input } => {
            let pipeline = load_pipeline(&settings).await?;
            let file = File::open(input).into_diagnostic()?;
            let reader = SelectionReader::new(file);
            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock());

            for (index, selection) in reader.selections().enumerate() {
                let row = index + 1;
                match selection {
                    Ok(selection) => match pipeline.submit(&selection) {
                        Ok(result) => writer.write(&selection, &result).into_diagnostic()?,
                        Err(e) => eprintln!("Error processing row {row}: {e}"),
                    },
                    Err(e) => eprintln!("Error reading row {row}: {e}"),
                }
            }
            writer.flush().into_diagnostic()?;
        }
        Command::Departments => {
            for (code, department) in CategoryEncoder::canonical().table() {
                println!("{code},{department}");
            }
        }
    }

    Ok(())
}

async fn load_pipeline(settings: &Settings) -> Result<PredictionPipeline> {
    let cache = ModelCache::new(Box::new(FileModelRepository::new(&settings.model_path)));
    let artifact = cache.get().await.into_diagnostic()?;
    let pipeline =
        PredictionPipeline::from_artifact(artifact, settings.formatter()).into_diagnostic()?;
    info!(policy = %pipeline.formatter().policy(), "pipeline ready");
    Ok(pipeline)
}
