//! CLI logic for the Rollcall tool.
//!
//! The `rank` command plays a ranking game from a list of picks and the
//! `meet` command replays availability toggles for a month. Both print a
//! report on stdout and can write SVG files.

pub mod error_adapter;
pub mod input;

mod args;
mod config;
mod error;

pub use args::{Args, Command, Format, MeetArgs, RankArgs};
pub use error::CliError;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use rollcall::{
    InvalidInput, Rollcall, RollcallError,
    availability::{AvailabilitySession, DayCell, MaxAttendance, YearMonth},
    ranking::{Participants, Progress, Rank, RankedEntry, RankingSession, Selection},
};

use input::{Pick, parse_events, parse_picks, unknown_user};

/// Run the Rollcall CLI application on the process's stdin and stdout.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed pick or event input
/// - Rejected participants, months or users
/// - Export errors
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the Rollcall CLI application with explicit input and output streams.
///
/// `input` is only read by `rank` when no picks file is given.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_io<R: Read, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let rollcall = Rollcall::new(app_config);

    match &args.command {
        Command::Rank(rank_args) => run_rank(&rollcall, rank_args, input, out),
        Command::Meet(meet_args) => run_meet(&rollcall, meet_args, out),
    }
}

#[derive(Debug, Serialize)]
struct PickReport {
    pick: usize,
    slot: Option<usize>,
    rank: Option<Rank>,
    ignored: Option<String>,
}

#[derive(Debug, Serialize)]
struct RankReport {
    slots: usize,
    degraded: usize,
    picks: Vec<PickReport>,
    progress: Progress,
    results: Option<Vec<RankedEntry>>,
}

fn run_rank<R: Read, W: Write>(
    rollcall: &Rollcall,
    args: &RankArgs,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let count = args
        .count
        .or_else(|| args.names.as_ref().map(Vec::len))
        .unwrap_or_default();
    let participants = Participants::with_names(count, args.names.as_deref())?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = rollcall.start_ranking(&participants, &mut rng)?;

    let (origin, src) = match &args.picks {
        Some(path) => (path.clone(), fs::read_to_string(path)?),
        None => {
            let mut src = String::new();
            input.read_to_string(&mut src)?;
            ("<stdin>".to_string(), src)
        }
    };
    let picks = parse_picks(&src)
        .map_err(|errors| CliError::new_input_error(&origin, src.as_str(), errors))?;
    info!(origin, picks = picks.len(); "Applying picks");

    let picks = picks
        .into_iter()
        .enumerate()
        .map(|(index, pick)| apply_pick(&mut session, index + 1, pick))
        .collect();

    if let Some(path) = &args.board {
        rollcall.export_board(session.board(), path)?;
    }

    if let Some(path) = &args.results {
        match session.results() {
            Some(results) => rollcall.export_results(&results, path)?,
            None => warn!(
                path,
                progress:% = session.progress();
                "Ranking incomplete, results not written"
            ),
        }
    }

    let report = RankReport {
        slots: session.board().len(),
        degraded: session.board().degraded_count(),
        picks,
        progress: session.progress(),
        results: session.results(),
    };

    match args.format {
        Format::Json => write_json(out, &report),
        Format::Text => write_rank_text(out, &report),
    }
}

fn apply_pick(session: &mut RankingSession, number: usize, pick: Pick) -> PickReport {
    let selection = match pick {
        Pick::Slot(slot) => session.select_slot(slot),
        Pick::At(point) => session.select_at(point),
    };

    match selection {
        Selection::Assigned { slot, rank } => PickReport {
            pick: number,
            slot: Some(slot.number()),
            rank: Some(rank),
            ignored: None,
        },
        Selection::Ignored(reason) => PickReport {
            pick: number,
            slot: match pick {
                Pick::Slot(slot) => Some(slot.number()),
                Pick::At(_) => None,
            },
            rank: None,
            ignored: Some(reason.to_string()),
        },
    }
}

fn write_rank_text<W: Write>(out: &mut W, report: &RankReport) -> Result<(), CliError> {
    writeln!(
        out,
        "Board: {} slots ({} degraded)",
        report.slots, report.degraded
    )?;

    for pick in &report.picks {
        match (&pick.ignored, pick.slot, pick.rank) {
            (None, Some(slot), Some(rank)) => {
                writeln!(out, "Pick {}: slot {slot} -> rank {rank}", pick.pick)?
            }
            (Some(reason), _, _) => writeln!(out, "Pick {}: ignored ({reason})", pick.pick)?,
            _ => {}
        }
    }

    writeln!(out, "Progress: {}", report.progress)?;

    if let Some(results) = &report.results {
        writeln!(out, "Results:")?;
        for entry in results {
            writeln!(out, "  {}. {}", entry.rank(), entry.name())?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct MeetReport {
    month: YearMonth,
    best: MaxAttendance,
    days: Vec<DayCell>,
}

fn run_meet<W: Write>(rollcall: &Rollcall, args: &MeetArgs, out: &mut W) -> Result<(), CliError> {
    let mut session = rollcall.start_calendar(args.month)?;

    if let Some(path) = &args.events {
        let src = fs::read_to_string(path)?;
        let events = parse_events(&src)
            .map_err(|errors| CliError::new_input_error(path, src.as_str(), errors))?;

        let mut errors = Vec::new();
        for event in &events {
            for (user, span) in &event.users {
                match session.toggle(event.date, *user) {
                    Ok(_) => {}
                    Err(InvalidInput::UnknownUser(_)) => {
                        errors.push(unknown_user(*user, span.clone()));
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
        if !errors.is_empty() {
            return Err(CliError::new_input_error(path, src, errors));
        }
        info!(path, events = events.len(); "Events applied");
    }

    for toggle in &args.toggles {
        session.toggle(toggle.date, toggle.user)?;
    }

    if let Some(path) = &args.calendar {
        rollcall.export_month(&session, path)?;
    }

    let report = MeetReport {
        month: session.displayed(),
        best: session.best_days(),
        days: session
            .month_grid()
            .into_iter()
            .filter(|cell| !cell.attendees.is_empty())
            .collect(),
    };

    match args.format {
        Format::Json => write_json(out, &report),
        Format::Text => write_meet_text(out, &session, &report),
    }
}

fn write_meet_text<W: Write>(
    out: &mut W,
    session: &AvailabilitySession,
    report: &MeetReport,
) -> Result<(), CliError> {
    writeln!(out, "Availability for {}", report.month)?;

    for cell in &report.days {
        let names: Vec<&str> = cell
            .attendees
            .iter()
            .filter_map(|id| session.roster().get(*id))
            .map(|user| user.display_name())
            .collect();
        let marker = if cell.highlighted { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {}  {}  {}",
            cell.date,
            cell.attendees.len(),
            names.join(", ")
        )?;
    }

    if report.best.dates.is_empty() {
        writeln!(out, "No availability in {}", report.month)?;
    } else {
        let dates: Vec<String> = report.best.dates.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "Best days: {} ({} attendees)",
            dates.join(", "),
            report.best.max
        )?;
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(|err| RollcallError::Io(err.into()))?;
    writeln!(out)?;
    Ok(())
}
