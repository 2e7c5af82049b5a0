use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::snapshot::ScheduleSnapshot;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, replace } = cmd {
        let snapshot = ScheduleSnapshot::from_file(&expand_tilde(file))?;

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let summary = ImportLogic::import(&mut pool, cfg, &snapshot, *replace)?;

        success(format!(
            "Imported {} classes and {} sessions from {}",
            summary.classes, summary.sessions, file
        ));
    }
    Ok(())
}
