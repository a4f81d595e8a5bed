//! Terminal host for the SleepDash core.
//!
//! # Responsibility
//! - Run the daily prompt flow against the JSON store.
//! - Render the calendar heatmap, distribution table and monthly trend
//!   from the core's pure query boundary.

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use crossterm::style::{Color, Stylize};
use sleepdash_core::{
    bin_distribution, calendar_view, day_detail, latest_month, legend_swatches, monthly_trend,
    CalendarView, EntryDecision, EntryService, JsonFileStore, MonthKey, Rgb, SleepLog,
    MONTH_LETTERS,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sleepdash")]
#[command(version)]
#[command(about = "Personal sleep-tracking dashboard")]
struct Cli {
    /// Path of the JSON sleep store.
    #[arg(long, global = true, default_value = "sleep_data.json")]
    data_file: PathBuf,

    /// Enable file logging into this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD), e.g. for backfilling.
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Year heatmap of recorded sleep.
    Calendar {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Hours distribution with per-bin dates.
    Distribution,
    /// Single-month trend; defaults to the latest month with data.
    Trend { month: Option<String> },
    /// Detail popup for one date.
    Detail { date: NaiveDate },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let absolute = if log_dir.is_absolute() {
            log_dir.clone()
        } else {
            std::env::current_dir()?.join(log_dir)
        };
        let dir = absolute
            .to_str()
            .ok_or_else(|| anyhow!("log dir is not valid UTF-8"))?;
        sleepdash_core::init_logging(sleepdash_core::default_log_level(), dir)
            .map_err(|err| anyhow!(err))?;
    }

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let service = EntryService::new(JsonFileStore::new(&cli.data_file));
    let mut log = service.open_log().context("failed to open sleep store")?;

    match cli.command {
        None => {
            if !log.contains(today) {
                let decision = prompt_for_hours(today);
                service
                    .record_once(&mut log, today, decision)
                    .context("failed to record today's entry")?;
            }
            render_calendar(&log, today.year(), today);
            println!();
            render_distribution(&log);
            println!();
            render_trend(&log, latest_month(&log));
        }
        Some(Commands::Calendar { year }) => {
            render_calendar(&log, year.unwrap_or_else(|| today.year()), today);
        }
        Some(Commands::Distribution) => render_distribution(&log),
        Some(Commands::Trend { month }) => {
            let target = match month {
                Some(raw) => Some(raw.parse::<MonthKey>().map_err(|err| anyhow!(err))?),
                None => latest_month(&log),
            };
            render_trend(&log, target);
        }
        Some(Commands::Detail { date }) => render_detail(&log, date),
    }

    Ok(())
}

/// Reads today's hours from stdin.
///
/// Empty input or an unreadable/non-numeric line records a skip; only an
/// out-of-range number re-prompts.
fn prompt_for_hours(today: NaiveDate) -> EntryDecision {
    let stdin = io::stdin();
    loop {
        print!("How many hours did you sleep on {today}? (0-24, empty to skip) ");
        if io::stdout().flush().is_err() {
            return EntryDecision::Skipped;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() {
            return EntryDecision::Skipped;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return EntryDecision::Skipped;
        }

        match trimmed.parse::<f64>() {
            Ok(hours) if (0.0..=24.0).contains(&hours) => {
                return EntryDecision::Value(hours);
            }
            Ok(hours) => {
                println!("{hours} is out of range; enter a value between 0 and 24.");
            }
            Err(_) => {
                println!("Not a number; recording no sleep data for {today}.");
                return EntryDecision::Skipped;
            }
        }
    }
}

fn term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn render_calendar(log: &SleepLog, year: i32, today: NaiveDate) {
    let view: CalendarView = calendar_view(log, year, today);

    print!("    ");
    for letter in MONTH_LETTERS {
        print!(" {letter}   ");
    }
    println!();

    for day in 1..=31u32 {
        print!("{day:>3} ");
        for month in 1..=12u32 {
            match NaiveDate::from_ymd_opt(year, month, day).and_then(|date| view.cell(date)) {
                Some(cell) => {
                    let text = match &cell.label {
                        Some(label) => format!("{:>4}", label.text),
                        None => "    ".to_string(),
                    };
                    let styled = match &cell.label {
                        Some(label) => text
                            .with(term_color(label.color))
                            .on(term_color(cell.fill)),
                        None => text.on(term_color(cell.fill)),
                    };
                    print!("{styled} ");
                }
                None => print!("     "),
            }
        }
        println!();
    }

    render_legend();
}

fn render_legend() {
    print!("\nSleep (h)  2h ");
    for swatch in legend_swatches(24) {
        print!("{}", "  ".on(term_color(swatch)));
    }
    println!(" 11h");
}

fn render_distribution(log: &SleepLog) {
    let bins = bin_distribution(log);
    if bins.is_empty() {
        println!("No recorded sleep data to bin yet.");
        return;
    }

    println!("Distribution");
    let total: usize = bins.iter().map(|bin| bin.count).sum();
    for bin in &bins {
        println!(
            "  {:>6}  {:>3} day{}  {:>5.1}%",
            bin.label,
            bin.count,
            if bin.count == 1 { " " } else { "s" },
            bin.share_percent(total)
        );
        for date in &bin.dates {
            println!("          {date} → {}", date.format("%A"));
        }
    }
}

fn render_trend(log: &SleepLog, month: Option<MonthKey>) {
    let Some(trend) = month.and_then(|key| monthly_trend(log, key)) else {
        println!("No monthly data to chart yet.");
        return;
    };

    println!("Trend {}", trend.month);
    for (index, (date, hours)) in trend.dates.iter().zip(&trend.hours).enumerate() {
        let marker = if index == trend.min_index {
            "v"
        } else if index == trend.max_index {
            "^"
        } else {
            " "
        };
        let bar = "▇".repeat(bar_width(*hours));
        println!("  {date} {marker} {hours:>4.1}h {bar}");
    }
    println!(
        "  Avg {:.1}h   Min {:.1}h   Max {:.1}h",
        trend.avg, trend.min, trend.max
    );
}

/// Bar cells for one trend row.
///
/// Loaded data may carry out-of-range hours; clamp to the valid day range
/// so rendering stays bounded instead of attempting a huge allocation.
fn bar_width(hours: f64) -> usize {
    // NaN stays NaN through clamp and saturating-casts to 0.
    hours.clamp(0.0, 24.0).round() as usize
}

fn render_detail(log: &SleepLog, date: NaiveDate) {
    let detail = day_detail(log, date);

    println!("{date} → {}", date.format("%A"));
    println!();
    match detail.hours {
        Some(hours) => println!("You slept {hours:.1} hours."),
        None => println!("No sleep recorded."),
    }
    if detail.show_streak_line {
        println!(
            "💪 Sleep streak: {} day{} ≥ 7h",
            detail.current_streak,
            if detail.current_streak > 1 { "s" } else { "" }
        );
    }
    println!(
        "🏆 Best streak ever: {} day{}",
        detail.best_streak,
        if detail.best_streak != 1 { "s" } else { "" }
    );
}
