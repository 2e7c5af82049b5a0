use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::snapshot::ScheduleSnapshot;
use crate::ui::grid::render_week;
use crate::utils::path::expand_tilde;
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        day,
        today,
        json,
        from,
        no_color,
    } = cmd
    {
        let only = if *today {
            Some(Day::today())
        } else {
            day.as_deref().map(Day::parse).transpose()?
        };

        //
        // 1. Fetch snapshot (file or store)
        //
        let snapshot = match from {
            Some(file) => ScheduleSnapshot::from_file(&expand_tilde(file))?,
            None => {
                let mut pool = DbPool::open_ready(&cfg.database)?;
                load_snapshot(&mut pool)?
            }
        };

        //
        // 2. Recompute layout
        //
        let layout = Core::build_week_layout(&snapshot, cfg)?;

        //
        // 3. Render
        //
        if *json {
            match only {
                Some(d) => println!("{}", serde_json::to_string_pretty(&layout.day(d))?),
                None => println!("{}", serde_json::to_string_pretty(&layout)?),
            }
        } else {
            let color = !*no_color && std::io::stdout().is_terminal();
            print!("{}", render_week(&layout, only, color));
        }
    }

    Ok(())
}
