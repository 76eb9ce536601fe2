use anyhow::Result;
use clap::{Parser, Subcommand};
use guestlist_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use guestlist_core::{
    Config, EventRegistry, InviteResponse, Notifier, RecordingNotifier, Timestamp, User,
};
use serde::Serialize;
use tracing::info;

const DAY_MILLIS: u64 = 24 * 60 * 60 * 1000;

#[derive(Parser, Debug)]
#[command(name = "guestlist")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk an event with a two-seat capacity through a full RSVP round
    Demo {
        /// Event capacity
        #[arg(long, default_value = "2")]
        capacity: u32,

        /// Print a JSON summary instead of log lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct DemoSummary {
    event: String,
    capacity: u32,
    confirmed: usize,
    occupancy: guestlist_core::OccupancyStatus,
    outcomes: Vec<guestlist_core::ProcessingResult>,
    organizer_permission: guestlist_core::EditPermission,
    guest_permission: guestlist_core::EditPermission,
    emails_sent: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;

    // CLI flags win over the environment.
    let log_level = LogLevel::parse(&args.log_level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{}', using 'info'", args.log_level);
        LogLevel::Info
    });
    let log_config = LogConfig::new(log_level).json_format(args.json_logs || config.logging.json_format);
    init_logging_with_config(log_config)?;

    match args.command {
        Some(Command::Demo { capacity, json }) => run_demo(&config, capacity, json),
        None => {
            info!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

fn run_demo(config: &Config, capacity: u32, json: bool) -> Result<()> {
    let mut registry = EventRegistry::with_config(&config.invites);
    let mut notifier = RecordingNotifier::new();

    let scheduled = Timestamp::from_millis(Timestamp::now().as_millis() + 30 * DAY_MILLIS);
    let event_id = registry.create_event("Launch Party", Some(capacity), scheduled)?;

    let guests = [
        ("Ana", "ana@example.com"),
        ("Bruno", "bruno@example.com"),
        ("Carla", "carla@example.com"),
    ];

    let mut outcomes = Vec::new();
    for (name, email) in guests {
        let invitation = registry.issue_invitation(&event_id)?;
        notifier.send_invite(email, &invitation);

        let outcome = registry.respond(
            &invitation.id,
            &InviteResponse::Accept {
                name: name.to_string(),
                note: None,
            },
        )?;
        if outcome.success {
            notifier.send_confirmation(email, registry.event(&event_id)?);
        }
        info!(guest = name, success = outcome.success, "{}", outcome.message);
        outcomes.push(outcome);
    }

    let organizer = User::organizer("ORG-1", "Joana", "joana@example.com");
    let guest = User::regular("USR-1", "Rui", "rui@example.com");
    let organizer_permission = registry.check_edit_permission(&organizer, &event_id)?;
    let guest_permission = registry.check_edit_permission(&guest, &event_id)?;

    let event = registry.event(&event_id)?;
    let occupancy = registry.occupancy_status(&event_id)?;
    info!(
        confirmed = event.confirmed_count(),
        occupancy = ?occupancy,
        organizer = ?organizer_permission.kind,
        guest = ?guest_permission.kind,
        "Demo finished"
    );

    if json {
        let summary = DemoSummary {
            event: event.name.clone(),
            capacity,
            confirmed: event.confirmed_count(),
            occupancy,
            outcomes,
            organizer_permission,
            guest_permission,
            emails_sent: notifier.count(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
