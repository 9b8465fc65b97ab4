//! G.I.T.H.U.B.: The Existential Code Companion
//!
//! **Generally Introspective Text Handler for Unrealized Brilliance.**
//!
//! A command-line companion that answers your code with philosophy. Lines of
//! source and free-text questions are bucketed by keyword into a small set of
//! categories, and a reply is drawn at random from the matching pool.
//!
//! # Agents (Plugins)
//!
//! - `coder`: line-level existential insights and commit messages
//! - `oracle`: prophecies, predictions, guidance and hidden meanings
//! - `philosopher`: contemplations and an interactive dialogue
//! - `zen`: wisdom, meditations, breathing exercises and affirmations
//! - `contemplation`: pattern meanings, bug meanings, renames, complexity, karma
//!
//! # Examples
//!
//! ```bash
//! # Contemplate a file
//! gith-ub analyze src/main.py --level cosmic
//!
//! # A commit message that questions reality
//! gith-ub commit "fixed null pointer exception"
//!
//! # Ask the Oracle, reproducibly
//! gith-ub --seed 7 ask "Why does my code exist?"
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: corpus tables, classifier, selector, config, logging, rendering
//! - [`plugins`]: the agents

pub mod core;
pub mod plugins;

mod cli;

use crate::core::{
    config::GithubConfig,
    error::GithubError,
    select,
    tui::{self, BoxStyle},
};
use crate::plugins::{
    coder::ExistentialCoder,
    contemplation::{self, Contemplation},
    oracle::Oracle,
    philosopher::{self, PhilosopherAgent},
    zen::{self, ZenLevel, ZenMaster},
};
use cli::{AnalyzeCli, AskCli, Cli, Command, OutputFormat};

use clap::Parser;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

const DEMO_CODE: &str = r#"
def hello_world():
    """A simple function that greets the world."""
    print("Hello, World!")
    return "greeting_complete"

if __name__ == "__main__":
    result = hello_world()
    print(f"The result is: {result}")
"#;

const MEDITATION_INTRO: &str = "Take a deep breath and center yourself...\n\n\
In the silence between keystrokes, wisdom speaks.\n\
Every bug is a teacher in disguise.\n\
The code is not the destination, but the path.\n\n\
Press Enter when you feel ready to continue your journey.";

const PHILOSOPHER_INTRO: &str = "Welcome to the Philosopher's Corner.\n\n\
Here, we don't just write code - we explore the deeper meaning\n\
behind every function, every variable, every line.\n\n\
What would you like to contemplate today?";

pub fn run() -> Result<(), GithubError> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let current_dir = std::env::current_dir()?;
    let config = GithubConfig::load(cli.config.as_deref(), &current_dir)?;
    let seed = cli.seed.or(config.seed);
    tracing::debug!(?seed, level = %config.level, "session configured");
    let mut rng = select::make_rng(seed);

    if !cli.quiet && !is_machine_readable(&cli.command) {
        print_welcome();
    }

    match cli.command {
        Command::Analyze(args) => run_analyze(args, &config, &mut rng)?,
        Command::Commit { changes } => {
            let coder = ExistentialCoder::new(config.level)?;
            let message = coder.generate_commit_message(&changes, &mut rng);
            tui::render_panel(
                "💭 Your Existential Commit Message",
                &message,
                BoxStyle::Green,
            );
        }
        Command::Meditate => run_meditate(&config, &mut rng)?,
        Command::Ask(args) => run_ask(args, &mut rng)?,
        Command::Philosopher => {
            let agent = PhilosopherAgent::new()?;
            tui::render_panel(
                "🤔 The Philosopher's Corner",
                PHILOSOPHER_INTRO,
                BoxStyle::Blue,
            );
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            philosopher::run_dialogue(&agent, stdin.lock(), &mut stdout, &mut rng)?;
        }
        Command::Demo => run_demo(&mut rng)?,
        Command::Affirm => {
            let master = ZenMaster::new(ZenLevel::default())?;
            let affirmation = master.daily_affirmation(&mut rng);
            tui::render_panel("🌅 Daily Affirmation", affirmation, BoxStyle::Cyan);
        }
        Command::Breathe { situation } => {
            let master = ZenMaster::new(ZenLevel::default())?;
            let exercise = master.suggest_breathing_exercise(situation.as_deref(), &mut rng);
            tui::render_panel(
                &format!("🌬️ {}", exercise.name),
                &zen::render_breathing(exercise),
                BoxStyle::Cyan,
            );
        }
        Command::Predict { timeframe } => {
            let oracle = Oracle::new()?;
            let prediction = oracle.predict_future(&timeframe, &mut rng);
            tui::render_panel("🔮 The Oracle Foresees", &prediction, BoxStyle::Magenta);
        }
        Command::Reveal { snippet } => {
            let oracle = Oracle::new()?;
            let revelation = oracle.reveal_hidden_meaning(&snippet, &mut rng);
            tui::render_panel("🔮 Hidden Meaning", &revelation, BoxStyle::Magenta);
        }
        Command::Bug { description } => {
            let helper = Contemplation::new()?;
            let meaning = helper.find_meaning_in_bugs(&description);
            tui::render_panel("🐛 The Meaning of Your Bug", meaning, BoxStyle::Yellow);
        }
        Command::Karma { file } => run_karma(&file)?,
        Command::Contemplate { file } => run_contemplate(&file, &mut rng)?,
        Command::Rename { name } => {
            let helper = Contemplation::new()?;
            let renamed = helper.philosophical_variable_name(&name, &mut rng);
            tui::render_panel(
                "✨ A More Philosophical Name",
                &format!("{} → {}", name, renamed),
                BoxStyle::Green,
            );
        }
        Command::Zen { situation } => {
            let master = ZenMaster::new(ZenLevel::default())?;
            let wisdom = master.provide_wisdom(situation.as_deref(), &mut rng);
            tui::render_panel("☯️ Zen Wisdom", &wisdom, BoxStyle::Cyan);
        }
        Command::Guide { situation } => {
            let oracle = Oracle::new()?;
            let agent = PhilosopherAgent::new()?;
            tui::render_panel(
                "🔮 The Oracle's Guidance",
                oracle.provide_guidance(&situation, &mut rng),
                BoxStyle::Magenta,
            );
            tui::render_panel(
                "🤔 The Philosopher's Guidance",
                agent.provide_guidance(&situation, &mut rng),
                BoxStyle::Blue,
            );
        }
        Command::Capabilities => {
            let doc = serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "plugins": plugins::schemas(),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

fn is_machine_readable(command: &Command) -> bool {
    match command {
        Command::Analyze(args) => args.format == OutputFormat::Json,
        Command::Ask(args) => args.format == OutputFormat::Json,
        Command::Capabilities => true,
        _ => false,
    }
}

fn print_welcome() {
    tui::render_panel(
        "🧘 Digital Enlightenment Awaits",
        "Welcome to G.I.T.H.U.B.\n\
         The Existential Code Companion\n\n\
         Generally Introspective Text Handler for Unrealized Brilliance\n\n\
         In the digital realm, we are not alone...",
        BoxStyle::Blue,
    );
}

fn run_analyze(
    args: AnalyzeCli,
    config: &GithubConfig,
    rng: &mut StdRng,
) -> Result<(), GithubError> {
    use colored::Colorize;

    let level = args.level.unwrap_or(config.level);
    let code = match fs::read_to_string(&args.file) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(file = %args.file.display(), error = %e, "analyze: read failed");
            tui::print_error_line(&format!("Error analyzing file: {}", e));
            return Ok(());
        }
    };

    let coder = ExistentialCoder::new(level)?;
    let insights = coder.analyze_code(&code, rng);

    if args.format == OutputFormat::Json {
        let doc = serde_json::json!({
            "file": args.file.display().to_string(),
            "level": level,
            "insights": insights,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!();
    println!(
        "{}",
        format!("Analyzing {}...", args.file.display()).green().bold()
    );
    tui::print_dim(&format!("Contemplation Level: {}", level));
    println!();

    for insight in &insights {
        if let Some(line) = insight.line_number {
            tui::print_label(&format!("Line {}:", line));
        }
        tui::render_panel(
            "🤔 Philosophical Insight",
            &format!("{}\n\n{}", insight.question, insight.wisdom),
            BoxStyle::Yellow,
        );
        println!();
    }
    Ok(())
}

fn run_meditate(config: &GithubConfig, rng: &mut StdRng) -> Result<(), GithubError> {
    let master = ZenMaster::new(ZenLevel::default())?;
    tui::render_panel("🧘 Zen Master's Guidance", MEDITATION_INTRO, BoxStyle::Cyan);
    println!(
        "{}",
        master.guide_meditation(config.meditation_minutes, rng)
    );

    print!("Press Enter to continue ");
    io::stdout().flush()?;
    let mut line = String::new();
    // End of input counts as Enter.
    io::stdin().lock().read_line(&mut line)?;

    let wisdom = master.provide_wisdom(None, rng);
    tui::render_panel("✨ Wisdom from the Digital Void", &wisdom, BoxStyle::Cyan);
    Ok(())
}

fn run_ask(args: AskCli, rng: &mut StdRng) -> Result<(), GithubError> {
    let oracle = Oracle::new()?;

    if args.format == OutputFormat::Json {
        let record = oracle.consult_record(&args.question, rng);
        let doc = serde_json::json!({
            "question": args.question,
            "response": record,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    tui::print_dim(&format!("Asking the Oracle: {}", args.question));
    println!();
    let response = oracle.consult(&args.question, rng);
    tui::render_panel("🔮 Oracle's Response", &response, BoxStyle::Magenta);
    Ok(())
}

fn run_karma(file: &Path) -> Result<(), GithubError> {
    let code = match fs::read_to_string(file) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(file = %file.display(), error = %e, "karma: read failed");
            tui::print_error_line(&format!("Error calculating karma: {}", e));
            return Ok(());
        }
    };

    let karma = contemplation::calculate_code_karma(&code);
    tui::render_panel(
        "☯️ Code Karma",
        &format!(
            "Karma: {}\n\n{}",
            karma,
            contemplation::karma_interpretation(karma)
        ),
        BoxStyle::Green,
    );
    Ok(())
}

fn run_contemplate(file: &Path, rng: &mut StdRng) -> Result<(), GithubError> {
    let code = match fs::read_to_string(file) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(file = %file.display(), error = %e, "contemplate: read failed");
            tui::print_error_line(&format!("Error contemplating file: {}", e));
            return Ok(());
        }
    };

    let helper = Contemplation::new()?;
    let thoughts = helper.contemplate_code(&code, rng);
    tui::render_panel("💭 Contemplations", &thoughts.join("\n"), BoxStyle::Blue);

    let report = contemplation::analyze_code_complexity(&code);
    tui::render_panel(
        "📐 Complexity",
        &format!(
            "Lines: {} ({} code, {} comments)\n\
             Functions: {}  Classes: {}  Loops: {}  Conditions: {}\n\n\
             {}\n\n{}",
            report.total_lines,
            report.code_lines,
            report.comment_lines,
            report.function_count,
            report.class_count,
            report.loop_count,
            report.condition_count,
            report.philosophical_insight,
            report.wisdom
        ),
        BoxStyle::Yellow,
    );

    if let Some(suggestion) = contemplation::suggest_meditation_break(&report) {
        tui::render_panel("🧘 Time for a Break", suggestion, BoxStyle::Cyan);
    }
    Ok(())
}

fn run_demo(rng: &mut StdRng) -> Result<(), GithubError> {
    let coder = ExistentialCoder::new(Default::default())?;

    tui::print_section("🔍 Analyzing sample code for existential meaning...");
    println!("{}", "-".repeat(50));
    println!("{}", DEMO_CODE);
    println!("{}", "-".repeat(50));

    tui::print_section("🤔 Philosophical Insights:");
    for insight in coder.analyze_code(DEMO_CODE, rng) {
        match insight.line_number {
            Some(line) => println!("Line {}: {}", line, insight.question),
            None => println!("General: {}", insight.question),
        }
        println!("Wisdom: {}", insight.wisdom);
        println!();
    }

    tui::print_section("🧘 Zen Master's Wisdom:");
    let master = ZenMaster::new(ZenLevel::default())?;
    println!("{}", master.provide_wisdom(Some("stuck debugging"), rng));

    tui::print_section("🔮 Oracle's Prophecy:");
    let oracle = Oracle::new()?;
    println!(
        "{}",
        oracle.consult("What does the future hold for my code?", rng)
    );

    tui::print_section("💭 Philosopher's Contemplation:");
    let agent = PhilosopherAgent::new()?;
    println!("{}", agent.contemplate("Why do we write code?", rng));
    println!();

    println!("✨ The journey of digital enlightenment continues...");
    println!("Remember: Every line of code is a step on the path to wisdom.");
    Ok(())
}
