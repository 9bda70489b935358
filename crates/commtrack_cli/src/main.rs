//! Command-line front end for commtrack.
//!
//! # Responsibility
//! - Open the configured tracker database and print read-only views.
//! - Keep output plain text so it can be piped (CSV export in particular).

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use commtrack_core::db::open_db;
use commtrack_core::config::MAX_REPORT_WINDOW_DAYS;
use commtrack_core::{
    init_logging, DashboardQuery, HighlightOverrides, ReportFilter, SqliteStateRepository,
    StatusFilter, TrackerConfig, TrackerService,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "commtrack", version, about = "Company contact cadence tracker")]
struct Cli {
    /// TOML config file; defaults apply when it does not exist.
    #[arg(long, env = "COMMTRACK_CONFIG", default_value = "commtrack.toml")]
    config: PathBuf,

    /// Overrides `db_path` from the config file.
    #[arg(long, env = "COMMTRACK_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dashboard summary counts.
    Status,
    /// Company rows with status and recent history.
    Dashboard {
        /// Case-insensitive company name filter.
        #[arg(long, default_value = "")]
        search: String,
        /// One of all|overdue|due|upcoming.
        #[arg(long, default_value = "all", value_parser = parse_status)]
        status: StatusFilter,
    },
    /// Overdue and due-today companies.
    Notifications,
    /// Per-channel counts and response rates.
    Report {
        /// Window size in days before today; defaults to the config value.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_REPORT_WINDOW_DAYS)))]
        days: Option<u32>,
    },
    /// Filtered communications as CSV on stdout.
    Export {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_REPORT_WINDOW_DAYS)))]
        days: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = TrackerConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    let service = TrackerService::open(SqliteStateRepository::with_keys(
        &conn,
        config.storage_keys(),
    ))?;
    let now = Utc::now();

    match cli.command {
        Command::Status => {
            let summary = service.dashboard_summary(now);
            println!("overdue={}", summary.overdue);
            println!("due_today={}", summary.due_today);
            println!("total_companies={}", summary.total_companies);
        }
        Command::Dashboard { search, status } => {
            let query = DashboardQuery {
                search,
                status,
                ..DashboardQuery::from_config(&config)
            };
            for row in service.dashboard(&query, &HighlightOverrides::new(), now) {
                let next_due = row
                    .due
                    .next_due_date
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}\t{:?}\t{}\trecent={}",
                    row.company.name,
                    row.due.status,
                    next_due,
                    row.recent.len()
                );
            }
        }
        Command::Notifications => {
            let notifications = service.notifications(now);
            if notifications.is_empty() {
                println!("No pending communications.");
            }
            for entry in &notifications.overdue {
                println!("overdue\t{}\t{}", entry.company_name, entry.due_date.format("%Y-%m-%d"));
            }
            for entry in &notifications.due_today {
                println!("due_today\t{}\t{}", entry.company_name, entry.due_date.format("%Y-%m-%d"));
            }
        }
        Command::Report { days } => {
            let filter = report_filter(&config, days, now);
            let report = service.report(&filter);
            println!("communications={}", report.filtered_count);
            for row in &report.distribution {
                println!("{}\t{}\t{:.1}%", row.kind, row.count, row.response_rate);
            }
        }
        Command::Export { days } => {
            let filter = report_filter(&config, days, now);
            println!("{}", service.export_csv(&filter));
        }
    }

    Ok(())
}

fn report_filter(config: &TrackerConfig, days: Option<u32>, now: chrono::DateTime<Utc>) -> ReportFilter {
    ReportFilter::last_days(now.date_naive(), days.unwrap_or(config.report_window_days))
}

fn parse_status(value: &str) -> Result<StatusFilter, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(StatusFilter::All),
        "overdue" => Ok(StatusFilter::Overdue),
        "due" => Ok(StatusFilter::Due),
        "upcoming" => Ok(StatusFilter::Upcoming),
        other => Err(format!("unknown status `{other}`; expected all|overdue|due|upcoming")),
    }
}
