use clap::{Args, Parser, Subcommand};
use fitplan_core::*;
use std::path::{Path, PathBuf};

/// File name used when no PDF path is given
const DEFAULT_PDF_NAME: &str = "workout-plan.pdf";

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Weekly workout plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly workout plan
    Generate(GenerateArgs),

    /// Export a saved JSON response to PDF
    Export {
        /// Response envelope written by `generate --json`
        #[arg(long)]
        response: PathBuf,

        /// Output PDF path (bare names go to the configured output dir)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List accepted values for goals, levels and preferences
    Options,
}

#[derive(Args)]
struct GenerateArgs {
    /// Read the whole request from a JSON file
    #[arg(
        long,
        conflicts_with_all = [
            "goal", "level", "preferences", "health_conditions",
            "days", "session_minutes", "weeks", "custom_goals",
        ]
    )]
    request: Option<PathBuf>,

    /// Fitness goal, e.g. "Build muscle"
    #[arg(long, required_unless_present = "request")]
    goal: Option<Goal>,

    /// Fitness level: Beginner, Intermediate or Advanced
    #[arg(long, required_unless_present = "request")]
    level: Option<FitnessLevel>,

    /// Workout preference (repeatable), e.g. "HIIT"
    #[arg(long = "preference", value_name = "PREFERENCE")]
    preferences: Vec<WorkoutPreference>,

    /// Health condition (repeatable); recorded but not used for selection
    #[arg(long = "health-condition", value_name = "CONDITION")]
    health_conditions: Vec<String>,

    /// Training days per week
    #[arg(
        long,
        required_unless_present = "request",
        value_parser = clap::value_parser!(u8).range(1..=7)
    )]
    days: Option<u8>,

    /// Session length in minutes (15-120, in steps of 15)
    #[arg(long, value_parser = parse_session_minutes)]
    session_minutes: Option<u32>,

    /// Plan length in weeks
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    weeks: Option<u32>,

    /// Free-text personal goal (repeatable)
    #[arg(long = "custom-goal", value_name = "GOAL")]
    custom_goals: Vec<String>,

    /// Print the response envelope as JSON instead of the formatted plan
    #[arg(long)]
    json: bool,

    /// Also export the plan to this PDF path
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_PDF_NAME)]
    pdf: Option<PathBuf>,
}

fn parse_session_minutes(s: &str) -> std::result::Result<u32, String> {
    let minutes: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of minutes", s))?;
    if !(15..=120).contains(&minutes) || minutes % 15 != 0 {
        return Err("session length must be 15-120 minutes in steps of 15".into());
    }
    Ok(minutes)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        fitplan_core::logging::init_with_level("debug");
    } else {
        fitplan_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    check_tables()?;

    match cli.command {
        Commands::Generate(args) => cmd_generate(args, &config),
        Commands::Export { response, output } => cmd_export(&response, output, &config),
        Commands::Options => {
            cmd_options();
            Ok(())
        }
    }
}

fn check_tables() -> Result<()> {
    let catalog = get_default_catalog();
    let mut errors = catalog.validate();
    errors.extend(get_default_split_table().validate(Some(catalog)));

    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(())
}

fn build_request(args: &GenerateArgs, config: &Config) -> Result<PlanRequest> {
    if let Some(path) = &args.request {
        let contents = std::fs::read_to_string(path)?;
        let request: PlanRequest = serde_json::from_str(&contents)?;
        tracing::info!("Loaded request from {:?}", path);
        return Ok(request);
    }

    // clap enforces these when no request file is given
    let missing = |flag: &str| Error::Config(format!("--{} is required", flag));

    Ok(PlanRequest {
        goal: args.goal.ok_or_else(|| missing("goal"))?,
        fitness_level: args.level.ok_or_else(|| missing("level"))?,
        preferences: args.preferences.clone(),
        health_conditions: args.health_conditions.clone(),
        days_per_week: args.days.ok_or_else(|| missing("days"))?,
        session_duration: args
            .session_minutes
            .unwrap_or(config.defaults.session_duration),
        plan_duration_weeks: args.weeks.unwrap_or(config.defaults.plan_duration_weeks),
        custom_goals: if args.custom_goals.is_empty() {
            None
        } else {
            Some(args.custom_goals.clone())
        },
    })
}

fn cmd_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let request = build_request(&args, config)?;

    if request.preferences.is_empty() {
        eprintln!("No workout preferences given; the plan will have no exercises.");
    }

    let generator =
        PlanGenerator::default().with_simulated_delay(config.generation.simulated_delay());

    let mut view = PlanView::new();
    let pending = view.begin_generation();
    let response = generator.generate(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    if let Err(e) = view.apply(pending, response) {
        eprintln!("{}", view.error().unwrap_or(GENERATION_FAILED_MESSAGE));
        return Err(e);
    }

    if !args.json {
        if let Some(plan) = view.displayed().and_then(|r| r.result.as_ref()) {
            display_plan(plan);
        }
    }

    if let Some(pdf) = args.pdf {
        let path = config.export_path(&pdf);
        save_pdf(&view, &path, config)?;
        if args.json {
            eprintln!("✓ Saved PDF to {}", path.display());
        } else {
            println!("✓ Saved PDF to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_export(response_path: &Path, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let contents = std::fs::read_to_string(response_path)?;
    let response: PlanResponse = serde_json::from_str(&contents)?;

    let mut view = PlanView::new();
    let pending = view.begin_generation();
    if let Err(e) = view.apply(pending, response) {
        eprintln!("{}", view.error().unwrap_or(GENERATION_FAILED_MESSAGE));
        return Err(e);
    }

    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_NAME));
    let path = config.export_path(&output);
    save_pdf(&view, &path, config)?;

    println!("✓ Saved PDF to {}", path.display());
    Ok(())
}

fn save_pdf(view: &PlanView, path: &Path, config: &Config) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let document = view.export_pdf(&config.pdf, today)?;
    document.save(path)
}

fn cmd_options() {
    print_option_set("Goals", Goal::ALL.iter().map(Goal::as_str));
    print_option_set("Fitness levels", FitnessLevel::ALL.iter().map(FitnessLevel::as_str));
    print_option_set(
        "Workout preferences",
        WorkoutPreference::ALL.iter().map(WorkoutPreference::as_str),
    );
    print_option_set(
        "Activity levels",
        ActivityLevel::ALL.iter().map(ActivityLevel::as_str),
    );
    print_option_set(
        "Dietary restrictions",
        DietaryRestriction::ALL.iter().map(DietaryRestriction::as_str),
    );
}

fn print_option_set<'a>(title: &str, values: impl Iterator<Item = &'a str>) {
    println!("{}:", title);
    for value in values {
        println!("  - {}", value);
    }
    println!();
}

fn display_plan(plan: &WorkoutPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", plan.seo_title);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  {} weeks · {} min sessions · {} days/week",
        plan.total_weeks, plan.schedule.session_duration, plan.schedule.days_per_week
    );
    println!();

    for day in &plan.exercises {
        println!("  {}", day.day);
        if day.exercises.is_empty() {
            println!("    (no matching exercises)");
        }
        for exercise in &day.exercises {
            println!("    → {} [{}]", exercise.name, exercise.equipment);
            println!(
                "      {} · {} sets · {}",
                exercise.duration, exercise.sets, exercise.repetitions
            );
        }
        println!();
    }
}
