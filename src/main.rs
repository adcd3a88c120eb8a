use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a responses file against a framework
    Score {
        /// Builtin framework id (see `frameworks`) or path to a framework YAML file
        #[arg(short, long, default_value = "fintech-ai-risk")]
        framework: String,

        /// Path to a JSON file mapping question ids to answers
        #[arg(short, long)]
        responses: PathBuf,

        /// Emit the full report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// System under assessment, recorded in the report
        #[arg(long)]
        subject: Option<String>,

        /// Assessor name, recorded in the report
        #[arg(long)]
        assessor: Option<String>,
    },
    /// List builtin framework editions
    Frameworks,
    /// Validate a framework YAML file
    Validate {
        /// Path to the framework YAML file
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "govscore")]
#[command(about = "Weighted scoring for AI governance and risk self-assessments", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            framework,
            responses,
            json,
            subject,
            assessor,
        } => run_score(&framework, &responses, json, subject, assessor, cli.verbose),
        Commands::Frameworks => run_frameworks(),
        Commands::Validate { path } => run_validate(&path),
    }
}

fn run_score(
    framework_ref: &str,
    responses_path: &Path,
    json: bool,
    subject: Option<String>,
    assessor: Option<String>,
    verbose: bool,
) {
    // Builtin id first, then treat the argument as a YAML path
    let framework = match govscore::framework::builtin::find(framework_ref) {
        Some(fw) => fw,
        None => match govscore::framework::load_framework(Path::new(framework_ref)) {
            Ok(fw) => fw,
            Err(e) => {
                eprintln!("Framework error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
    };

    // Validate the framework at startup, before touching responses
    if let Err(errors) = govscore::framework::validate_framework(&framework) {
        eprintln!("Framework config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        eprintln!(
            "Loaded framework '{}' edition {} ({} categories, {} questions)",
            framework.id,
            framework.edition,
            framework.categories.len(),
            framework.question_count()
        );
    }

    let responses_content = match fs::read_to_string(responses_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "Failed to read responses file at {}: {}",
                responses_path.display(),
                e
            );
            std::process::exit(EXIT_INPUT);
        }
    };

    let responses: govscore::scoring::ResponseSet =
        match serde_json::from_str(&responses_content) {
            Ok(responses) => responses,
            Err(e) => {
                eprintln!(
                    "Failed to parse responses: invalid JSON in {}: {}",
                    responses_path.display(),
                    e
                );
                std::process::exit(EXIT_INPUT);
            }
        };

    if verbose {
        eprintln!(
            "Scoring {} answers against {} questions",
            responses.len(),
            framework.question_count()
        );
    }

    let result = match govscore::scoring::score(&responses, &framework) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if json {
        let report = govscore::report::AssessmentReport::new(&framework, result)
            .with_subject(subject)
            .with_assessor(assessor);
        match report.to_json_pretty() {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = govscore::output::should_use_colors();
        println!(
            "{}",
            govscore::output::format_result(&result, &framework, use_colors)
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_frameworks() {
    for fw in govscore::framework::builtin::all() {
        println!(
            "{}  {} (edition {}, {} categories, {} questions)",
            fw.id,
            fw.name,
            fw.edition,
            fw.categories.len(),
            fw.question_count()
        );
    }
    std::process::exit(EXIT_SUCCESS);
}

fn run_validate(path: &Path) {
    let framework = match govscore::framework::load_framework(path) {
        Ok(fw) => fw,
        Err(e) => {
            eprintln!("Framework error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match govscore::framework::validate_framework(&framework) {
        Ok(()) => {
            println!(
                "{}: OK ({} categories, {} questions, {} tiers)",
                framework.id,
                framework.categories.len(),
                framework.question_count(),
                framework.tiers.len()
            );
            std::process::exit(EXIT_SUCCESS);
        }
        Err(errors) => {
            eprintln!("Framework config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    }
}
