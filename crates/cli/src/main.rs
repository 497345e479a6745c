use anyhow::{anyhow, Context, Result};
use catalog::parser::load_snapshot;
use catalog::Movie;
use clap::{Parser, Subcommand};
use colored::Colorize;
use feed::{MovieFeed, ReplayFeed};
use screen::{Clock, ErrorNotifier, MovieDetails, MovieListView, ScreenBinding, SystemClock};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// NowShowing - This Year's Movies, Ranked
#[derive(Parser)]
#[command(name = "now-showing")]
#[command(about = "Shapes movie snapshots into this year's list, ranked by popularity", long_about = None)]
struct Cli {
    /// Calendar year to shape against (defaults to the system clock)
    #[arg(long, global = true)]
    year: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shape one snapshot fixture and print the visible list
    Show {
        /// Path to a snapshot JSON fixture
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Print the details handoff for one ranked movie
    Details {
        /// Path to a snapshot JSON fixture
        #[arg(long)]
        snapshot: PathBuf,

        /// 1-based rank of the movie in the visible list
        #[arg(long)]
        rank: usize,
    },

    /// Replay snapshot fixtures through the live feed and screen binding
    Replay {
        /// Snapshot fixtures, played in order
        #[arg(long, required = true, num_args = 1..)]
        snapshots: Vec<PathBuf>,

        /// Delay between emissions, in milliseconds
        #[arg(long, default_value = "500")]
        interval_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let year = cli.year.unwrap_or_else(|| SystemClock.current_year());

    match cli.command {
        Commands::Show { snapshot } => handle_show(&snapshot, &year)?,
        Commands::Details { snapshot, rank } => handle_details(&snapshot, rank, &year)?,
        Commands::Replay {
            snapshots,
            interval_ms,
        } => handle_replay(snapshots, interval_ms).await,
    }

    Ok(())
}

/// Handle the 'show' command
fn handle_show(snapshot: &PathBuf, year: &str) -> Result<()> {
    let movies = load_snapshot(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
    let total = movies.len();

    let visible = shaping::select(movies, year)?;

    println!(
        "{}",
        format!("Now showing in {year} ({} of {total} movies):", visible.len())
            .bold()
            .blue()
    );
    print_visible(&visible);
    Ok(())
}

/// Handle the 'details' command
fn handle_details(snapshot: &PathBuf, rank: usize, year: &str) -> Result<()> {
    let movies = load_snapshot(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;

    let visible = shaping::select(movies, year)?;
    let movie = rank
        .checked_sub(1)
        .and_then(|i| visible.get(i))
        .ok_or_else(|| {
            anyhow!(
                "Rank {} is out of range, the visible list has {} movies",
                rank,
                visible.len()
            )
        })?;

    let details = MovieDetails::from(movie);
    println!("{}", details.title.bold().blue());
    println!(
        "{}Release date: {}",
        "• ".green(),
        details.release_date.as_deref().unwrap_or("unknown")
    );
    println!("{}Poster: {}", "• ".green(), details.poster_path);
    println!("{}Overview: {}", "• ".green(), details.overview);
    Ok(())
}

/// Handle the 'replay' command
async fn handle_replay(snapshots: Vec<PathBuf>, interval_ms: u64) {
    let feed = MovieFeed::new();
    let mut binding = ScreenBinding::new(
        feed.subscribe(),
        Arc::new(TerminalView),
        Arc::new(TerminalNotifier),
        Arc::new(SystemClock),
    );
    binding.activate();

    let replay = ReplayFeed::new(snapshots, Duration::from_millis(interval_ms));
    replay.run(&feed).await;

    // Let the binding render the final emission before shutting down.
    tokio::time::sleep(Duration::from_millis(100)).await;
    binding.deactivate();
}

/// Renders the visible list to the terminal.
struct TerminalView;

impl MovieListView for TerminalView {
    fn set_movies(&self, movies: Vec<Movie>) {
        println!(
            "{}",
            format!("Visible list ({} movies):", movies.len()).bold().blue()
        );
        print_visible(&movies);
    }
}

/// Shows error messages on the terminal.
struct TerminalNotifier;

impl ErrorNotifier for TerminalNotifier {
    fn show_message(&self, message: &str) {
        println!("{} {}", "!".red().bold(), message.red());
    }
}

/// Helper to print a ranked list of movies
fn print_visible(movies: &[Movie]) {
    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) - Popularity: {:.1}",
            (i + 1).to_string().green(),
            movie.title,
            movie.release_date.as_deref().unwrap_or("????"),
            movie.popularity
        );
    }
    if movies.is_empty() {
        println!("  (nothing released this year)");
    }
}
