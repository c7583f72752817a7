//! `hackathon` CLI — D-day labels and content ordering for the hackathon site.
//!
//! ## Usage
//!
//! ```sh
//! # D-day label for the configured event, as of now
//! hackathon dday
//!
//! # D-day label for an explicit date and instant
//! hackathon dday --event-date 2026-02-21 --now 2026-02-13T15:00:00Z
//!
//! # Order FAQ entries (stdin → stdout)
//! cat faqs.json | hackathon order faq
//!
//! # Order docs pages using a folder's meta.json
//! hackathon order docs -i pages.json --meta contents/docs/meta.json
//!
//! # Organizer section, ordered by role
//! hackathon order roles -i team.json
//!
//! # Submission cards
//! hackathon teams -i team.json
//!
//! # Show the resolved site config
//! hackathon config --config site.json
//! ```
//!
//! Set `RUST_LOG=debug` to see what the engine is doing.

mod config;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use content_order::json::{self, JsonStyle};
use content_order::{team_cards, Collation, RolePriority, TeamMember, DEFAULT_LOCALE};

use crate::config::SiteConfig;

#[derive(Parser)]
#[command(
    name = "hackathon",
    version,
    about = "Hackathon site core: D-day labels and content ordering"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site config JSON file (built-in defaults if omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Public site URL, overriding the config file
    #[arg(long, global = true, env = "HACKATHON_APP_URL")]
    app_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the D-day label ("D-7", "D-Day", "D+3") in KST
    Dday {
        /// Event date as YYYY-MM-DD (defaults to the config's eventDateKst)
        #[arg(long)]
        event_date: Option<String>,
        /// Reference instant as RFC 3339 (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,
    },
    /// Order a JSON array of content records
    Order {
        #[arg(value_enum)]
        kind: OrderKind,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Collation locale
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
        /// meta.json whose `pages` list orders docs (docs only)
        #[arg(long)]
        meta: Option<String>,
    },
    /// Print one line per submission card, in display order
    Teams {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Collation locale
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },
    /// Print the resolved site config as JSON
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderKind {
    /// FAQ entries: order, then question
    Faq,
    /// Submissions: order, then member/team name
    Team,
    /// Organizers: fixed role priority, then role name
    Roles,
    /// Docs pages: meta.json position, then title
    Docs,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dday { event_date, now } => {
            let event_date = match event_date {
                Some(date) => date,
                None => SiteConfig::load(cli.config.as_deref(), cli.app_url.as_deref())?
                    .event_date_kst
                    .to_string(),
            };
            let now = parse_now(now.as_deref())?;
            let label = countdown::dday_label(&event_date, now)
                .with_context(|| format!("Failed to compute D-day for {}", event_date))?;
            println!("{}", label);
        }
        Commands::Order {
            kind,
            input,
            output,
            locale,
            meta,
        } => {
            let records = read_input(input.as_deref())?;
            let collation = Collation::new(&locale).context("Failed to build collator")?;

            let ordered = match kind {
                OrderKind::Faq => json::order_faqs_json(&records, &collation, JsonStyle::Pretty),
                OrderKind::Team => json::order_team_json(&records, &collation, JsonStyle::Pretty),
                OrderKind::Roles => json::order_team_by_role_json(
                    &records,
                    &RolePriority::default(),
                    &collation,
                    JsonStyle::Pretty,
                ),
                OrderKind::Docs => {
                    let meta = meta.as_deref().map(|p| read_input(Some(p))).transpose()?;
                    json::order_docs_json(&records, meta.as_deref(), &collation, JsonStyle::Pretty)
                }
            }
            .context("Failed to order records")?;

            write_output(output.as_deref(), &ordered)?;
        }
        Commands::Teams { input, locale } => {
            let records = read_input(input.as_deref())?;
            let collation = Collation::new(&locale).context("Failed to build collator")?;
            let members: Vec<TeamMember> =
                serde_json::from_str(&records).context("Failed to parse team records")?;

            for card in team_cards(&members, &collation) {
                let badge = if card.featured { "Featured" } else { "Team" };
                let link = card
                    .link
                    .as_ref()
                    .map(|l| format!("{} {}", l.label, l.href))
                    .unwrap_or_else(|| "링크 준비중".to_string());
                println!(
                    "[{}] {} | {} | {} | 제출 시각: {}",
                    badge, card.name, card.project_name, link, card.submitted_at
                );
            }
        }
        Commands::Config => {
            let config = SiteConfig::load(cli.config.as_deref(), cli.app_url.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// The system clock is read here and nowhere else.
fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now instant: {}", raw)),
        None => Ok(Utc::now()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
