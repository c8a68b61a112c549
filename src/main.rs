use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prose_analyzer::config::AnalyzerConfig;
use prose_analyzer::pipeline::{AnalysisSession, AnalysisUpdate};
use prose_analyzer::{
    format_float, format_percent, load_reference_dir, AnalysisReport, Analyzer, AnalyzerError,
    Genre, Lexicon, ReferenceFile,
};

#[derive(Parser)]
#[command(name = "prose-analyzer", about = "Prose analysis for manuscript drafts")]
struct Cli {
    /// Config file (defaults to ANALYZER_CONFIG_PATH, then config/analyzer.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a document once and print the report
    Analyze(AnalyzeArgs),
    /// Re-analyse a file every time it changes
    Watch(WatchArgs),
    /// List the genre benchmark profiles
    Genres,
    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the default config file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    /// Directory of lore files matched by name against the text
    #[arg(long)]
    lore: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct WatchArgs {
    #[arg(long)]
    file: PathBuf,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    lore: Option<PathBuf>,
    #[arg(long, default_value_t = 500)]
    poll_ms: u64,
}

#[derive(Args, Debug, Clone)]
struct ConfigInitArgs {
    #[arg(long, default_value = "config/analyzer.toml")]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = AnalyzerConfig::load(cli.config).map_err(to_message)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Command::Analyze(args) => run_analyze(args, &config),
        Command::Watch(args) => run_watch(args, &config).await,
        Command::Genres => {
            print_genres();
            Ok(())
        }
        Command::Config(ConfigCommand::Init(args)) => run_config_init(args),
    }
}

fn run_analyze(args: AnalyzeArgs, config: &AnalyzerConfig) -> Result<(), String> {
    let genre = resolve_genre(args.genre.as_deref(), config)?;
    let lore = load_lore(args.lore.as_deref())?;
    let text = read_text(args.text, args.file.as_deref())?;

    let analyzer = Analyzer::from_config(config);
    let report = analyzer.run_full_analysis(&text, genre, &lore);

    if args.json {
        let payload = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("failed to serialize report: {}", err))?;
        println!("{}", payload);
    } else {
        print_report(&report, genre);
    }
    Ok(())
}

async fn run_watch(args: WatchArgs, config: &AnalyzerConfig) -> Result<(), String> {
    let genre = resolve_genre(args.genre.as_deref(), config)?;
    let lore = load_lore(args.lore.as_deref())?;

    let analyzer = Arc::new(Analyzer::from_config(config));
    let session = AnalysisSession::start(analyzer, &config.pipeline);
    if !session.is_available() {
        return Err("analysis is unavailable in this environment".to_string());
    }

    let updates = session.subscribe();
    tokio::pin!(updates);
    let mut ticker = tokio::time::interval(Duration::from_millis(args.poll_ms.max(10)));
    let mut last_text: Option<String> = None;
    info!(file = %args.file.display(), genre = genre.label(), "watching for changes");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let text = match tokio::fs::read_to_string(&args.file).await {
                    Ok(text) => text,
                    Err(err) => {
                        warn!(file = %args.file.display(), error = %err, "failed to read watched file");
                        continue;
                    }
                };
                if last_text.as_deref() != Some(text.as_str()) {
                    session.request_analysis(text.clone(), genre, lore.clone());
                    last_text = Some(text);
                }
            }
            Some(update) = updates.next() => print_update(&update),
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(|err| format!("failed to listen for ctrl-c: {}", err))?;
                info!("stopping watch");
                break;
            }
        }
    }
    Ok(())
}

fn run_config_init(args: ConfigInitArgs) -> Result<(), String> {
    if args.path.exists() && !args.force {
        return Err(format!(
            "{} already exists (pass --force to overwrite)",
            args.path.display()
        ));
    }
    AnalyzerConfig::default()
        .write(&args.path)
        .map_err(to_message)?;
    println!("Wrote {}", args.path.display());
    Ok(())
}

fn resolve_genre(arg: Option<&str>, config: &AnalyzerConfig) -> Result<Genre, String> {
    match arg {
        Some(name) => Genre::parse(name)
            .ok_or_else(|| AnalyzerError::UnknownGenre(name.to_string()))
            .map_err(to_message),
        None => config.default_genre().map_err(to_message),
    }
}

fn load_lore(dir: Option<&Path>) -> Result<Vec<ReferenceFile>, String> {
    match dir {
        Some(dir) => load_reference_dir(dir).map_err(to_message),
        None => Ok(Vec::new()),
    }
}

fn read_text(arg: Option<String>, file: Option<&Path>) -> Result<String, String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|err| AnalyzerError::io(path, err))
            .map_err(to_message);
    }
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing text: pass --text, --file or pipe stdin".to_string());
    }
    Ok(buffer)
}

fn print_report(report: &AnalysisReport, genre: Genre) {
    let Some(stats) = report.stats.as_ref() else {
        println!("Nothing to analyse yet. Write more to see analysis.");
        return;
    };

    println!(
        "Words: {} | Sentences: {} | Read time: {} min",
        stats.word_count, stats.sentence_count, stats.read_time_minutes
    );
    println!(
        "Grade: {} | Sentence spread: {} | Words per paragraph: {}",
        format_float(stats.fk_grade, 1),
        format_float(stats.std_dev, 1),
        format_float(stats.pacing_score, 1)
    );
    println!(
        "Adverbs: {} | Passive: {}",
        stats.adverb_count, stats.passive_count
    );
    if let Some(sentiment) = report.sentiment.as_ref() {
        println!(
            "Sentiment: {} ({})",
            sentiment.score,
            sentiment.label.label()
        );
    }

    if !report.benchmarks.is_empty() {
        println!("\n{} benchmark:", genre.label());
        for result in &report.benchmarks {
            println!(
                "  {}: {} (target {}-{}) {} - {}",
                result.label,
                format_float(result.your_value, 1),
                format_float(result.target_range.min, 0),
                format_float(result.target_range.max, 0),
                result.status.label(),
                result.advice
            );
        }
    }

    if !report.sentiment_arc.is_empty() {
        let arc: Vec<String> = report
            .sentiment_arc
            .iter()
            .map(|point| point.score.to_string())
            .collect();
        println!("\nSentiment arc: {}", arc.join(" "));
    }

    if !report.pacing.is_empty() {
        let dialogue = report.pacing.iter().filter(|entry| entry.is_dialogue).count();
        let pacing: Vec<&str> = report
            .pacing
            .iter()
            .map(|entry| entry.intensity.label())
            .collect();
        println!(
            "Paragraphs: {} ({} dialogue) | {}",
            report.pacing.len(),
            dialogue,
            pacing.join(" ")
        );
    }

    if !report.overused_words.is_empty() {
        println!("\nOverused words:");
        for entry in &report.overused_words {
            println!(
                "- {} x{} (try: {})",
                entry.word,
                entry.count,
                entry.synonyms.join(", ")
            );
        }
    }

    if !report.insights.is_empty() {
        println!("\nInsights:");
        for insight in &report.insights {
            println!("- [{}] {}", insight.kind.label(), insight.message);
        }
    }

    if !report.grammar_issues.is_empty() {
        println!("\nGrammar:");
        for issue in &report.grammar_issues {
            match issue.suggestion.as_deref() {
                Some(suggestion) => println!(
                    "- @{} {} (suggest \"{}\")",
                    issue.index, issue.message, suggestion
                ),
                None => println!("- @{} {}", issue.index, issue.message),
            }
        }
    }

    if !report.context_matches.is_empty() {
        let names: Vec<&str> = report
            .context_matches
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        println!("\nLore referenced: {}", names.join(", "));
    }
}

fn print_update(update: &AnalysisUpdate) {
    let report = update.report.as_ref();
    match report.stats.as_ref() {
        Some(stats) => println!(
            "#{} words {} | grade {} | {} insights | {} grammar issues | {} lore matches",
            update.seq,
            stats.word_count,
            format_float(stats.fk_grade, 1),
            report.insights.len(),
            report.grammar_issues.len(),
            report.context_matches.len()
        ),
        None => println!("#{} empty document", update.seq),
    }
}

fn print_genres() {
    for profile in Lexicon::shared().genre_profiles() {
        println!(
            "{}: sentences {}-{} words | adverbs <= {}/1000 | passive <= {} | grade {}-{} | dialogue {}-{}",
            profile.name.label(),
            format_float(profile.ideal_sentence_length_range.min, 0),
            format_float(profile.ideal_sentence_length_range.max, 0),
            format_float(profile.max_adverbs_per_1000_words, 0),
            format_percent(profile.max_passive_voice_percent),
            format_float(profile.ideal_reading_grade_range.min, 0),
            format_float(profile.ideal_reading_grade_range.max, 0),
            format_percent(profile.ideal_dialogue_percent_range.min),
            format_percent(profile.ideal_dialogue_percent_range.max)
        );
    }
}

fn to_message(err: AnalyzerError) -> String {
    err.to_string()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
