use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fittrack_core::energy::{ActivityLevel, Gender, Goal, RatePeriod};
use fittrack_core::store::{KEY_CALORIE_LOG, KEY_DRAFT, KEY_LEDGER, KEY_TEMPLATES};
use fittrack_core::*;
use std::io::{self, Write};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Personal fitness tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log or delete workouts
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },

    /// Record or delete body measurements
    Measure {
        #[command(subcommand)]
        command: MeasureCommands,
    },

    /// Manage personal records
    Pr {
        #[command(subcommand)]
        command: PrCommands,
    },

    /// Show streak statistics
    Streak,

    /// Estimate BMR, TDEE, and a daily calorie target
    Calc(CalcArgs),

    /// Manage the calorie log
    Calories {
        #[command(subcommand)]
        command: CalorieCommands,
    },

    /// Build the in-progress workout draft
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },

    /// Manage saved workout templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Export measurements and the calorie log to CSV
    Export {
        /// Directory to write CSV files into (defaults to the data dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum WorkoutCommands {
    /// Log a workout for a date
    Log {
        /// Calendar date (YYYY-MM-DD)
        date: NaiveDate,

        /// Workout name
        #[arg(long)]
        name: String,

        /// Exercise name (repeatable, in performed order)
        #[arg(long = "exercise")]
        exercises: Vec<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Delete the workout logged for a date
    Delete {
        date: NaiveDate,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MeasureCommands {
    /// Record or replace the body measurement for a date
    Set {
        date: NaiveDate,

        /// Body weight in the chosen unit system
        #[arg(long)]
        weight: f64,

        /// Height (cm or in)
        #[arg(long)]
        height: Option<f64>,

        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,

        /// Unit system (metric, us)
        #[arg(long, default_value = "metric")]
        units: String,
    },

    /// Delete the measurement recorded for a date
    Delete {
        date: NaiveDate,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List measurement history
    List,
}

#[derive(Subcommand)]
enum PrCommands {
    /// Add a personal record to a date
    Add {
        date: NaiveDate,

        #[arg(long)]
        exercise: String,

        #[arg(long)]
        weight: f64,

        #[arg(long)]
        reps: u32,

        #[arg(long)]
        notes: Option<String>,

        /// Unit system (metric, us)
        #[arg(long, default_value = "metric")]
        units: String,
    },

    /// Edit an existing personal record
    Edit {
        date: NaiveDate,
        id: Uuid,

        #[arg(long)]
        exercise: Option<String>,

        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        reps: Option<u32>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a personal record
    Delete {
        date: NaiveDate,
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List all personal records
    List,
}

#[derive(Args)]
struct CalcArgs {
    /// Body weight (kg or lb)
    #[arg(long)]
    weight: f64,

    /// Height (cm or in); for US units --feet/--inches may be used instead
    #[arg(long)]
    height: Option<f64>,

    /// Height feet component (US units)
    #[arg(long)]
    feet: Option<f64>,

    /// Height inches component (US units)
    #[arg(long, requires = "feet")]
    inches: Option<f64>,

    #[arg(long)]
    age: u32,

    /// male or female
    #[arg(long)]
    gender: String,

    /// sedentary, light, moderate, very, extra
    #[arg(long, default_value = "moderate")]
    activity: String,

    /// lose, maintain, gain
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Body fat percentage (switches BMR to Katch-McArdle)
    #[arg(long)]
    body_fat: Option<f64>,

    /// Weight-change rate in the chosen unit system
    #[arg(long)]
    rate: Option<f64>,

    /// week or month
    #[arg(long, default_value = "week")]
    period: String,

    /// Unit system (metric, us)
    #[arg(long, default_value = "metric")]
    units: String,
}

#[derive(Subcommand)]
enum CalorieCommands {
    /// Log a food item
    Add {
        #[arg(long)]
        food: String,

        #[arg(long)]
        calories: u32,

        /// Calendar date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value_t = 0)]
        protein: u32,

        #[arg(long, default_value_t = 0)]
        carbs: u32,

        #[arg(long, default_value_t = 0)]
        fats: u32,
    },

    /// Delete a logged food item
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List logged food items
    List {
        /// Only show one date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum DraftCommands {
    /// Name the draft workout
    Name { name: String },

    /// Add a catalog exercise to the draft
    Add {
        /// Catalog exercise id (see `template exercises`)
        exercise_id: String,
    },

    /// Show the current draft
    Show,

    /// Save the draft as a template and reset it
    Save,

    /// Discard the draft
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// List saved templates
    List,

    /// List catalog exercises available to drafts
    Exercises {
        /// Filter by muscle group
        #[arg(long)]
        muscle_group: Option<String>,
    },

    /// Delete a template
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Record a template as a date's workout
    Log { id: Uuid, date: NaiveDate },
}

fn main() -> Result<()> {
    // Initialize logging
    fittrack_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store = KvStore::new(data_dir.clone());

    match cli.command {
        Commands::Workout { command } => cmd_workout(&store, command),
        Commands::Measure { command } => cmd_measure(&store, command),
        Commands::Pr { command } => cmd_pr(&store, command),
        Commands::Streak => cmd_streak(&store),
        Commands::Calc(args) => cmd_calc(args, &config),
        Commands::Calories { command } => cmd_calories(&store, command),
        Commands::Draft { command } => cmd_draft(&store, command),
        Commands::Template { command } => cmd_template(&store, command),
        Commands::Export { out_dir } => cmd_export(&store, out_dir.unwrap_or(data_dir)),
    }
}

// ============================================================================
// Workouts
// ============================================================================

fn cmd_workout(store: &KvStore, command: WorkoutCommands) -> Result<()> {
    match command {
        WorkoutCommands::Log {
            date,
            name,
            exercises,
            notes,
            duration,
        } => {
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            let applied = ledger.upsert_workout(
                date,
                WorkoutSummary {
                    workout_name: name,
                    exercises,
                    notes,
                    duration_minutes: duration,
                },
            );
            if !applied {
                println!("Workout not logged: a workout needs a name.");
                return Ok(());
            }
            store.save(KEY_LEDGER, &ledger)?;
            println!("✓ Workout logged for {}", date);
            display_streak(&ledger.streak);
        }

        WorkoutCommands::Delete { date, yes } => {
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            if ledger.day(date).map(|d| d.workout.is_none()).unwrap_or(true) {
                println!("No workout logged for {}.", date);
                return Ok(());
            }
            if !confirm(&format!("Delete the workout for {}?", date), yes)? {
                println!("Left unchanged.");
                return Ok(());
            }
            ledger.delete_workout(date);
            store.save(KEY_LEDGER, &ledger)?;
            println!("✓ Workout deleted for {}", date);
            display_streak(&ledger.streak);
        }
    }
    Ok(())
}

// ============================================================================
// Measurements
// ============================================================================

fn cmd_measure(store: &KvStore, command: MeasureCommands) -> Result<()> {
    match command {
        MeasureCommands::Set {
            date,
            weight,
            height,
            body_fat,
            units,
        } => {
            let Some(unit) = parse_units(&units) else {
                return Ok(());
            };
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            let applied = ledger.upsert_measurement(
                date,
                Measurement {
                    weight,
                    height,
                    body_fat_percent: body_fat,
                    unit,
                },
            );
            if !applied {
                println!("Measurement not recorded: weight must be positive.");
                return Ok(());
            }
            store.save(KEY_LEDGER, &ledger)?;
            println!(
                "✓ Measurement recorded for {}: {} {}",
                date,
                weight,
                unit.weight_label()
            );
        }

        MeasureCommands::Delete { date, yes } => {
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            if ledger
                .day(date)
                .map(|d| d.measurement.is_none())
                .unwrap_or(true)
            {
                println!("No measurement recorded for {}.", date);
                return Ok(());
            }
            if !confirm(&format!("Delete the measurement for {}?", date), yes)? {
                println!("Left unchanged.");
                return Ok(());
            }
            ledger.delete_measurement(date);
            store.save(KEY_LEDGER, &ledger)?;
            println!("✓ Measurement deleted for {}", date);
        }

        MeasureCommands::List => {
            let ledger: ActivityLedger = store.load(KEY_LEDGER);
            let history = ledger.measurement_history();
            if history.is_empty() {
                println!("No measurements recorded yet.");
                return Ok(());
            }
            for (date, m) in history {
                let mut line = format!(
                    "{}  {} {}",
                    date,
                    units::round_tenth(m.weight),
                    m.unit.weight_label()
                );
                if let Some(h) = m.height {
                    line.push_str(&format!(
                        "  height {} {}",
                        units::round_tenth(h),
                        m.unit.height_label()
                    ));
                }
                if let Some(bf) = m.body_fat_percent {
                    line.push_str(&format!("  body fat {}%", units::round_tenth(bf)));
                }
                println!("{}", line);
            }
        }
    }
    Ok(())
}

// ============================================================================
// Personal records
// ============================================================================

fn cmd_pr(store: &KvStore, command: PrCommands) -> Result<()> {
    match command {
        PrCommands::Add {
            date,
            exercise,
            weight,
            reps,
            notes,
            units,
        } => {
            let Some(unit) = parse_units(&units) else {
                return Ok(());
            };
            let pr = PersonalRecord {
                id: Uuid::new_v4(),
                exercise_name: exercise,
                weight,
                reps,
                notes,
                unit,
                recorded_date: date,
            };
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            if !ledger.add_personal_record(date, pr.clone()) {
                println!("PR not added: it needs an exercise name, a positive weight, and reps.");
                return Ok(());
            }
            store.save(KEY_LEDGER, &ledger)?;
            println!(
                "✓ PR added for {}: {} {} {} × {} ({})",
                date,
                pr.exercise_name,
                pr.weight,
                pr.unit.weight_label(),
                pr.reps,
                pr.id
            );
        }

        PrCommands::Edit {
            date,
            id,
            exercise,
            weight,
            reps,
            notes,
        } => {
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            let Some(existing) = ledger
                .day(date)
                .and_then(|d| d.personal_records.iter().find(|p| p.id == id))
                .cloned()
            else {
                println!("No PR {} on {}.", id, date);
                return Ok(());
            };

            let updated = PersonalRecord {
                id,
                exercise_name: exercise.unwrap_or(existing.exercise_name),
                weight: weight.unwrap_or(existing.weight),
                reps: reps.unwrap_or(existing.reps),
                notes: notes.or(existing.notes),
                unit: existing.unit,
                recorded_date: existing.recorded_date,
            };
            if !ledger.edit_personal_record(date, id, updated) {
                println!("PR not updated: the new values are invalid.");
                return Ok(());
            }
            store.save(KEY_LEDGER, &ledger)?;
            println!("✓ PR {} updated", id);
        }

        PrCommands::Delete { date, id, yes } => {
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            if !ledger
                .day(date)
                .is_some_and(|d| d.personal_records.iter().any(|p| p.id == id))
            {
                println!("No PR {} on {}.", id, date);
                return Ok(());
            }
            if !confirm(&format!("Delete PR {} on {}?", id, date), yes)? {
                println!("Left unchanged.");
                return Ok(());
            }
            ledger.delete_personal_record(date, id);
            store.save(KEY_LEDGER, &ledger)?;
            println!("✓ PR deleted");
        }

        PrCommands::List => {
            let ledger: ActivityLedger = store.load(KEY_LEDGER);
            let records = ledger.personal_records();
            if records.is_empty() {
                println!("No personal records yet.");
                return Ok(());
            }
            for pr in records {
                println!(
                    "{}  {}  {} {} × {}  [{}]",
                    pr.recorded_date,
                    pr.exercise_name,
                    pr.weight,
                    pr.unit.weight_label(),
                    pr.reps,
                    pr.id
                );
            }
        }
    }
    Ok(())
}

// ============================================================================
// Streak
// ============================================================================

fn cmd_streak(store: &KvStore) -> Result<()> {
    let ledger: ActivityLedger = store.load(KEY_LEDGER);
    display_streak(&ledger.streak);
    Ok(())
}

fn display_streak(streak: &StreakSummary) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  STREAKS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Current streak:  {} days", streak.current_streak);
    println!("  Longest streak:  {} days", streak.longest_streak);
    println!("  Workout days:    {}", streak.total_workout_days);
    match streak.last_workout_date {
        Some(date) => println!("  Last workout:    {}", date),
        None => println!("  Last workout:    —"),
    }
    println!();
}

// ============================================================================
// Calculator
// ============================================================================

fn cmd_calc(args: CalcArgs, config: &Config) -> Result<()> {
    let Some(unit) = parse_units(&args.units) else {
        return Ok(());
    };
    let Some(gender) = parse_gender(&args.gender) else {
        return Ok(());
    };
    let Some(activity_level) = parse_activity(&args.activity) else {
        return Ok(());
    };
    let Some(goal) = parse_goal(&args.goal) else {
        return Ok(());
    };
    let Some(rate_period) = parse_period(&args.period) else {
        return Ok(());
    };

    let height = match (args.height, args.feet) {
        (Some(h), _) => h,
        (None, Some(feet)) => {
            if unit != UnitSystem::Us {
                eprintln!("--feet/--inches only apply with --units us.");
                return Ok(());
            }
            units::feet_to_in(feet, args.inches.unwrap_or(0.0))
        }
        (None, None) => {
            eprintln!("Give a height with --height (or --feet/--inches for US units).");
            return Ok(());
        }
    };

    // The config's default rate is expressed in kg; present it to the
    // profile in the profile's own weight unit.
    let rate = args.rate.or_else(|| {
        if goal == Goal::Maintain {
            None
        } else {
            let kg = config.calculator.default_weekly_rate_kg;
            Some(match unit {
                UnitSystem::Metric => kg,
                UnitSystem::Us => units::kg_to_lb(kg),
            })
        }
    });

    let profile = UserProfile {
        weight: args.weight,
        height,
        age: args.age,
        gender,
        activity_level,
        goal,
        body_fat_percent: args.body_fat,
        rate,
        rate_period: if args.rate.is_some() {
            rate_period
        } else {
            RatePeriod::Week
        },
        unit,
    };

    let estimate = recommend_calories(&profile);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  ENERGY ESTIMATE");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMR:          {} kcal/day", estimate.bmr.round() as i64);
    println!("  TDEE:         {} kcal/day", estimate.tdee);
    println!("  Recommended:  {} kcal/day", estimate.recommended);
    println!();
    Ok(())
}

// ============================================================================
// Calorie log
// ============================================================================

fn cmd_calories(store: &KvStore, command: CalorieCommands) -> Result<()> {
    match command {
        CalorieCommands::Add {
            food,
            calories,
            date,
            protein,
            carbs,
            fats,
        } => {
            let date = date.unwrap_or_else(today);
            let entry = CalorieEntry {
                id: Uuid::new_v4(),
                date,
                food,
                calories,
                protein_g: protein,
                carbs_g: carbs,
                fats_g: fats,
            };
            let mut log: CalorieLog = store.load(KEY_CALORIE_LOG);
            if !log.add(entry) {
                println!("Entry not logged: it needs a food name and calories.");
                return Ok(());
            }
            store.save(KEY_CALORIE_LOG, &log)?;
            println!("✓ Logged. {} kcal total for {}", log.total_for(date), date);
        }

        CalorieCommands::Delete { id, yes } => {
            let mut log: CalorieLog = store.load(KEY_CALORIE_LOG);
            if !log.entries.iter().any(|e| e.id == id) {
                println!("No entry {}.", id);
                return Ok(());
            }
            if !confirm(&format!("Delete entry {}?", id), yes)? {
                println!("Left unchanged.");
                return Ok(());
            }
            log.delete(id);
            store.save(KEY_CALORIE_LOG, &log)?;
            println!("✓ Entry deleted");
        }

        CalorieCommands::List { date } => {
            let log: CalorieLog = store.load(KEY_CALORIE_LOG);
            let entries: Vec<&CalorieEntry> = match date {
                Some(d) => log.entries_for(d),
                None => log.entries.iter().collect(),
            };
            if entries.is_empty() {
                println!("No calorie entries yet.");
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{}  {}  {} kcal  [{}]",
                    entry.date, entry.food, entry.calories, entry.id
                );
            }
            if let Some(d) = date {
                println!("Total: {} kcal", log.total_for(d));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Draft and templates
// ============================================================================

fn cmd_draft(store: &KvStore, command: DraftCommands) -> Result<()> {
    match command {
        DraftCommands::Name { name } => {
            let mut draft: WorkoutDraft = store.load(KEY_DRAFT);
            draft.name = name;
            store.save(KEY_DRAFT, &draft)?;
            println!("✓ Draft named '{}'", draft.name);
        }

        DraftCommands::Add { exercise_id } => {
            let catalog = load_catalog()?;
            let Some(exercise) = catalog.get(&exercise_id) else {
                println!(
                    "No catalog exercise '{}'. See `fittrack template exercises`.",
                    exercise_id
                );
                return Ok(());
            };
            let mut draft: WorkoutDraft = store.load(KEY_DRAFT);
            if !draft.add_exercise(&exercise.id, &exercise.name) {
                println!("'{}' is already in the draft.", exercise.name);
                return Ok(());
            }
            store.save(KEY_DRAFT, &draft)?;
            println!("✓ Added {} to the draft", exercise.name);
        }

        DraftCommands::Show => {
            let draft: WorkoutDraft = store.load(KEY_DRAFT);
            if draft.name.is_empty() && draft.exercises.is_empty() {
                println!("The draft is empty.");
                return Ok(());
            }
            println!(
                "Draft: {}",
                if draft.name.is_empty() {
                    "(unnamed)"
                } else {
                    draft.name.as_str()
                }
            );
            for exercise in &draft.exercises {
                println!("  {} ({} sets)", exercise.exercise_name, exercise.sets.len());
            }
        }

        DraftCommands::Save => {
            let mut draft: WorkoutDraft = store.load(KEY_DRAFT);
            let mut templates: Vec<WorkoutTemplate> = store.load(KEY_TEMPLATES);
            let Some(id) = draft.save_as_template(&mut templates) else {
                println!("Template not saved: the draft needs a name and at least one exercise.");
                return Ok(());
            };
            store.save(KEY_TEMPLATES, &templates)?;
            store.save(KEY_DRAFT, &draft)?;
            println!("✓ Template saved [{}]", id);
        }

        DraftCommands::Clear { yes } => {
            if !confirm("Discard the draft?", yes)? {
                println!("Left unchanged.");
                return Ok(());
            }
            store.save(KEY_DRAFT, &WorkoutDraft::default())?;
            println!("✓ Draft cleared");
        }
    }
    Ok(())
}

fn cmd_template(store: &KvStore, command: TemplateCommands) -> Result<()> {
    match command {
        TemplateCommands::List => {
            let templates: Vec<WorkoutTemplate> = store.load(KEY_TEMPLATES);
            if templates.is_empty() {
                println!("No saved templates.");
                return Ok(());
            }
            for template in &templates {
                println!(
                    "{}  {} ({} exercises)",
                    template.id,
                    template.name,
                    template.exercises.len()
                );
            }
        }

        TemplateCommands::Exercises { muscle_group } => {
            let catalog = load_catalog()?;
            let exercises = match muscle_group {
                Some(group) => catalog.by_muscle_group(&group),
                None => {
                    let mut all: Vec<_> = catalog.exercises.values().collect();
                    all.sort_by_key(|e| (&e.muscle_group, &e.id));
                    all
                }
            };
            for exercise in exercises {
                println!(
                    "{:<20} {:<10} {}",
                    exercise.id, exercise.muscle_group, exercise.name
                );
            }
        }

        TemplateCommands::Delete { id, yes } => {
            let mut templates: Vec<WorkoutTemplate> = store.load(KEY_TEMPLATES);
            if !templates.iter().any(|t| t.id == id) {
                println!("No template {}.", id);
                return Ok(());
            }
            if !confirm(&format!("Delete template {}?", id), yes)? {
                println!("Left unchanged.");
                return Ok(());
            }
            planner::delete_template(&mut templates, id);
            store.save(KEY_TEMPLATES, &templates)?;
            println!("✓ Template deleted");
        }

        TemplateCommands::Log { id, date } => {
            let templates: Vec<WorkoutTemplate> = store.load(KEY_TEMPLATES);
            let mut ledger: ActivityLedger = store.load(KEY_LEDGER);
            if !planner::log_template(&mut ledger, &templates, id, date) {
                println!("No template {}.", id);
                return Ok(());
            }
            store.save(KEY_LEDGER, &ledger)?;
            println!("✓ Workout logged for {}", date);
            display_streak(&ledger.streak);
        }
    }
    Ok(())
}

// ============================================================================
// Export
// ============================================================================

fn cmd_export(store: &KvStore, out_dir: PathBuf) -> Result<()> {
    let ledger: ActivityLedger = store.load(KEY_LEDGER);
    let log: CalorieLog = store.load(KEY_CALORIE_LOG);

    let measurements_path = out_dir.join("measurements.csv");
    let calories_path = out_dir.join("calorie_log.csv");

    let measurement_count = export::export_measurements(&ledger, &measurements_path)?;
    let calorie_count = export::export_calorie_log(&log, &calories_path)?;

    println!("✓ Exported {} measurement rows", measurement_count);
    if measurement_count > 0 {
        println!("  CSV: {}", measurements_path.display());
    }
    println!("✓ Exported {} calorie rows", calorie_count);
    if calorie_count > 0 {
        println!("  CSV: {}", calories_path.display());
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn load_catalog() -> Result<&'static fittrack_core::catalog::ExerciseCatalog> {
    let catalog = fittrack_core::catalog::get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(catalog)
}

fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn parse_units(s: &str) -> Option<UnitSystem> {
    match s.to_lowercase().as_str() {
        "metric" => Some(UnitSystem::Metric),
        "us" => Some(UnitSystem::Us),
        _ => {
            eprintln!("Unknown unit system: {}. Use metric or us.", s);
            None
        }
    }
}

fn parse_gender(s: &str) -> Option<Gender> {
    match s.to_lowercase().as_str() {
        "male" => Some(Gender::Male),
        "female" => Some(Gender::Female),
        _ => {
            eprintln!("Unknown gender: {}. Use male or female.", s);
            None
        }
    }
}

fn parse_activity(s: &str) -> Option<ActivityLevel> {
    match s.to_lowercase().as_str() {
        "sedentary" => Some(ActivityLevel::Sedentary),
        "light" => Some(ActivityLevel::Light),
        "moderate" => Some(ActivityLevel::Moderate),
        "very" | "very-active" => Some(ActivityLevel::VeryActive),
        "extra" | "extra-active" => Some(ActivityLevel::ExtraActive),
        _ => {
            eprintln!(
                "Unknown activity level: {}. Use sedentary, light, moderate, very, or extra.",
                s
            );
            None
        }
    }
}

fn parse_goal(s: &str) -> Option<Goal> {
    match s.to_lowercase().as_str() {
        "lose" => Some(Goal::Lose),
        "maintain" => Some(Goal::Maintain),
        "gain" => Some(Goal::Gain),
        _ => {
            eprintln!("Unknown goal: {}. Use lose, maintain, or gain.", s);
            None
        }
    }
}

fn parse_period(s: &str) -> Option<RatePeriod> {
    match s.to_lowercase().as_str() {
        "week" | "weekly" => Some(RatePeriod::Week),
        "month" | "monthly" => Some(RatePeriod::Month),
        _ => {
            eprintln!("Unknown rate period: {}. Use week or month.", s);
            None
        }
    }
}
