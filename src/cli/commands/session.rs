use crate::cli::parser::{Commands, SessionAction};
use crate::config::Config;
use crate::core::class::ClassLogic;
use crate::core::session::{SessionChanges, SessionLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::gym_class::ClassDirectory;
use crate::models::session::Session;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{parse_clock, parse_optional_clock};

fn describe(s: &Session, classes: &ClassDirectory) -> String {
    format!(
        "#{} {} {}-{} ({})",
        s.id,
        s.day_of_week,
        s.start_time,
        s.end_time.end_label(),
        classes.name_of(s.class_id)
    )
}

fn print_sessions(sessions: &[Session], classes: &ClassDirectory) {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Day"),
        Column::left("Start"),
        Column::left("End"),
        Column::right("Duration"),
        Column::left("Class"),
    ]);

    for s in sessions {
        table.add_row(vec![
            s.id.to_string(),
            s.day_of_week.name().to_string(),
            s.start_time.to_string(),
            s.end_time.end_label(),
            mins2readable(s.duration_minutes(), false),
            classes.name_of(s.class_id),
        ]);
    }

    print!("{}", table.render());
}

/// Handle the `session` subcommands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Session { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::open_ready(&cfg.database)?;
    let classes = ClassDirectory::new(&ClassLogic::list(&mut pool)?);

    match action {
        SessionAction::Add {
            class_id,
            day,
            start,
            end,
        } => {
            //
            // 1. Parse input
            //
            let day = Day::parse(day)?;
            let start = parse_clock(start)?;
            let end = parse_clock(end)?;

            //
            // 2. Validate + store
            //
            let session = SessionLogic::add(&mut pool, cfg, *class_id, day, start, end)?;
            success(format!("Session {} added.", describe(&session, &classes)));
        }

        SessionAction::Edit {
            id,
            class_id,
            day,
            start,
            end,
        } => {
            let changes = SessionChanges {
                class_id: *class_id,
                day: day.as_deref().map(Day::parse).transpose()?,
                start: parse_optional_clock(start.as_ref())?,
                end: parse_optional_clock(end.as_ref())?,
            };

            if changes.is_empty() {
                warning("Nothing to change: use --class, --day, --start or --end.");
                return Ok(());
            }

            let session = SessionLogic::edit(&mut pool, cfg, *id, &changes)?;
            success(format!("Session {} updated.", describe(&session, &classes)));
        }

        SessionAction::Del { id, yes } => {
            if !*yes && !confirm(&format!("Delete session #{}? This action is irreversible.", id))? {
                info("Operation cancelled.");
                return Ok(());
            }

            match SessionLogic::delete(&mut pool, *id)? {
                Some(removed) => {
                    success(format!("Session {} deleted.", describe(&removed, &classes)))
                }
                None => success(format!("Session #{} deleted.", id)),
            }
        }

        SessionAction::List { day } => {
            let day = day.as_deref().map(Day::parse).transpose()?;
            let sessions = SessionLogic::list(&mut pool, day)?;

            if sessions.is_empty() {
                info("No sessions found.");
                return Ok(());
            }

            print_sessions(&sessions, &classes);
        }
    }

    Ok(())
}
