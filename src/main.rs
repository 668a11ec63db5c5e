use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use vidyarthi_saathi::catalog::{validate_catalog, Catalog, Category};
use vidyarthi_saathi::config::{self, Config};
use vidyarthi_saathi::directory::{self, FilterCriteria, Selection, SortKey};
use vidyarthi_saathi::output::{self, OutputFormat};
use vidyarthi_saathi::profile::{validate_profile, ClassLevel, Profile};
use vidyarthi_saathi::scoring::{self, AnswerSet, StreamResult};
use vidyarthi_saathi::{browser, quiz, ValidationError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_BROWSER: i32 = 5;

#[derive(Args, Debug)]
struct FilterArgs {
    /// Match college name or district (case-insensitive)
    #[arg(short, long)]
    search: Option<String>,

    /// Course name or "all"
    #[arg(long)]
    course: Option<String>,

    /// District name (exact) or "all"
    #[arg(long)]
    district: Option<String>,

    /// Sort order: name, fees or rating
    #[arg(long)]
    sort: Option<String>,

    /// Recommended stream, narrows the suggested courses
    #[arg(long)]
    stream: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the stream quiz and see ranked recommendations (default if no subcommand)
    Quiz {
        /// Answers without prompting, e.g. "1;2,3;;4" (1-based, ';' between questions, one trailing ';' allowed)
        #[arg(short, long)]
        answers: Option<String>,

        /// Student name
        #[arg(long)]
        name: Option<String>,

        /// Class level: 10 or 12
        #[arg(long = "class")]
        class_level: Option<String>,

        /// Home district
        #[arg(long)]
        district: Option<String>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List the quiz questions and options
    Questions,
    /// Describe the four streams
    Streams {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Find government colleges
    Colleges {
        #[command(flatten)]
        filters: FilterArgs,

        /// Show a detailed card per college
        #[arg(long)]
        details: bool,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Open a college website by its index number
    Open {
        /// Index number of the college (1-based, as shown by `colleges` with the same filters)
        index: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List districts that have colleges
    Districts,
    /// List courses offered, optionally for one stream
    Courses {
        /// Stream key or name, e.g. science or "Arts/Humanities"
        #[arg(long)]
        stream: Option<String>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "vidyarthi-saathi")]
#[command(about = "Career guidance: stream quiz and government college finder", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/vidyarthi-saathi/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Serialize)]
struct QuizReport<'a> {
    profile: Option<&'a Profile>,
    max_score: u32,
    answers: &'a AnswerSet,
    results: &'a [StreamResult],
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("vidyarthi_saathi={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_with_errors(heading: &str, errors: &[String], code: i32) -> ! {
    eprintln!("{}", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(code);
}

fn parse_stream(value: Option<&str>) -> Option<Category> {
    value.map(|s| match s.parse::<Category>() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid stream: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    })
}

/// Configured defaults overridden by command-line filters
fn build_criteria(config: &Config, filters: &FilterArgs) -> Result<FilterCriteria, ValidationError> {
    let base = config
        .directory
        .as_ref()
        .map(|d| d.criteria())
        .transpose()?
        .unwrap_or_default();

    Ok(FilterCriteria {
        search: filters.search.clone().unwrap_or(base.search),
        course: match &filters.course {
            Some(c) => Selection::parse(c)?,
            None => base.course,
        },
        district: match &filters.district {
            Some(d) => Selection::parse(d)?,
            None => base.district,
        },
        sort: match &filters.sort {
            Some(s) => s.parse::<SortKey>()?,
            None => base.sort,
        },
    })
}

fn criteria_or_exit(config: &Config, filters: &FilterArgs) -> FilterCriteria {
    match build_criteria(config, filters) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("Invalid filter: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn print_or_exit(result: anyhow::Result<String>) {
    match result {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Quiz {
        answers: None,
        name: None,
        class_level: None,
        district: None,
        format: OutputFormat::Table,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config and reference data at startup
    if let Err(errors) = config::validate_config(&config) {
        exit_with_errors("Config errors:", &errors, EXIT_CONFIG);
    }
    let scoring_config = config.scoring.clone().unwrap_or_default();
    let catalog = Catalog::builtin();
    if let Err(errors) = validate_catalog(catalog, scoring_config.effective_max_option_weight()) {
        exit_with_errors("Reference data errors:", &errors, EXIT_CONFIG);
    }

    tracing::debug!(
        questions = catalog.question_count(),
        colleges = catalog.colleges.len(),
        "catalog ready"
    );

    let use_colors = output::should_use_colors();

    match command {
        Commands::Quiz {
            answers,
            name,
            class_level,
            district,
            format,
        } => {
            let defaults = config.profile.clone().unwrap_or_default();
            let name = name.or(defaults.name);
            let district = district.or(defaults.district);
            let class_level = match class_level {
                Some(level) => match level.parse::<ClassLevel>() {
                    Ok(l) => l,
                    Err(e) => {
                        eprintln!("Invalid input: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
                None => defaults.class_level.unwrap_or_default(),
            };

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut stdout = std::io::stdout();

            let (profile, answer_set) = match answers {
                Some(spec) => {
                    // Profile is optional when answers are given up front
                    let profile = if name.is_some() || district.is_some() {
                        let profile = Profile::new(
                            name.unwrap_or_default(),
                            class_level,
                            district.unwrap_or_default(),
                        );
                        if let Err(errors) = validate_profile(&profile) {
                            exit_with_errors("Profile errors:", &errors, EXIT_INPUT);
                        }
                        Some(profile)
                    } else {
                        None
                    };
                    let answer_set = match quiz::parse_answer_spec(&spec) {
                        Ok(a) => a,
                        Err(e) => {
                            eprintln!("Invalid answers: {}", e);
                            std::process::exit(EXIT_INPUT);
                        }
                    };
                    (profile, answer_set)
                }
                None => {
                    let profile = match quiz::prompt_profile(
                        name,
                        class_level,
                        district,
                        &mut input,
                        &mut stdout,
                    ) {
                        Ok(Some(p)) => p,
                        Ok(None) => {
                            eprintln!("Quiz cancelled.");
                            std::process::exit(EXIT_INPUT);
                        }
                        Err(e) => {
                            eprintln!("Input error: {:#}", e);
                            std::process::exit(EXIT_INPUT);
                        }
                    };
                    println!("Welcome, {}", output::format_profile(&profile));

                    match quiz::run_quiz(&catalog.questions, &mut input, &mut stdout) {
                        Ok(Some(a)) => (Some(profile), a),
                        Ok(None) => {
                            eprintln!("Quiz cancelled.");
                            std::process::exit(EXIT_INPUT);
                        }
                        Err(e) => {
                            eprintln!("Input error: {:#}", e);
                            std::process::exit(EXIT_INPUT);
                        }
                    }
                }
            };

            let results = match scoring::calculate_results(catalog, &answer_set, &scoring_config) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Invalid answers: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let max_score = scoring::max_score(catalog, &scoring_config);

            tracing::info!(
                answered = answer_set.answered_count(),
                top = results.first().map(|r| r.category.key()).unwrap_or("none"),
                "quiz scored"
            );

            match format {
                OutputFormat::Table => {
                    println!();
                    println!("{}", output::format_results(&results, max_score, use_colors));
                    if let Some(top) = results.first() {
                        println!();
                        println!(
                            "Find {} colleges: vidyarthi-saathi colleges --stream {}",
                            top.stream,
                            top.category.key()
                        );
                    }
                }
                OutputFormat::Tsv => println!("{}", output::format_results_tsv(&results)),
                OutputFormat::Json => print_or_exit(output::to_json(&QuizReport {
                    profile: profile.as_ref(),
                    max_score,
                    answers: &answer_set,
                    results: &results,
                })),
            }
        }
        Commands::Questions => {
            println!("{}", output::format_questions(&catalog.questions));
        }
        Commands::Streams { format } => match format {
            OutputFormat::Json => print_or_exit(output::to_json(&catalog.streams)),
            OutputFormat::Tsv => {
                for stream in &catalog.streams {
                    println!(
                        "{}\t{}\t{}",
                        stream.category.key(),
                        stream.category.display_name(),
                        stream.description
                    );
                }
            }
            OutputFormat::Table => {
                println!("{}", output::format_streams(&catalog.streams, use_colors));
            }
        },
        Commands::Colleges {
            filters,
            details,
            format,
        } => {
            let stream = parse_stream(filters.stream.as_deref());
            let criteria = criteria_or_exit(&config, &filters);
            let colleges = directory::filter_colleges(&catalog.colleges, &criteria);

            match format {
                OutputFormat::Json => print_or_exit(output::to_json(&colleges)),
                OutputFormat::Tsv => println!("{}", output::format_colleges_tsv(&colleges)),
                OutputFormat::Table => {
                    if let Some(category) = stream {
                        println!(
                            "{} stream courses: {}",
                            category,
                            directory::available_courses(catalog, Some(category)).join(", ")
                        );
                        println!();
                    }
                    if details && !colleges.is_empty() {
                        println!("{}", output::format_college_count(colleges.len()));
                        for college in &colleges {
                            println!();
                            println!(
                                "{}",
                                output::format_college_detail(
                                    college,
                                    criteria.course.value(),
                                    use_colors
                                )
                            );
                        }
                    } else {
                        println!(
                            "{}",
                            output::format_college_table(&colleges, &criteria, use_colors)
                        );
                    }
                }
            }
        }
        Commands::Open { index, filters } => {
            let criteria = criteria_or_exit(&config, &filters);
            let colleges = directory::filter_colleges(&catalog.colleges, &criteria);

            // Validate index bounds (1-based)
            if index < 1 || index > colleges.len() {
                if colleges.is_empty() {
                    eprintln!("Invalid index {}. No colleges match these filters.", index);
                } else {
                    eprintln!(
                        "Invalid index {}. Must be between 1 and {}.",
                        index,
                        colleges.len()
                    );
                }
                std::process::exit(EXIT_INPUT);
            }

            let college = colleges[index - 1];
            if let Err(e) = browser::open_url(&college.website) {
                eprintln!("Failed to open browser: {:#}", e);
                std::process::exit(EXIT_BROWSER);
            }

            println!("Opening {} in browser: {}", college.name, college.website);
        }
        Commands::Districts => {
            for district in directory::distinct_districts(&catalog.colleges) {
                println!("{}", district);
            }
        }
        Commands::Courses { stream } => {
            let stream = parse_stream(stream.as_deref());
            for course in directory::available_courses(catalog, stream) {
                println!("{}", course);
            }
        }
        Commands::Init => {
            let default_path = match config::get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut stdout = std::io::stdout();
            if let Err(e) = config::run_init_wizard(default_path, &mut input, &mut stdout) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
