use crate::config::Config;
use crate::core::session::check_session_input;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_schedule, upsert_class, upsert_session};
use crate::errors::AppResult;
use crate::models::snapshot::ScheduleSnapshot;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub classes: usize,
    pub sessions: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Store a backend snapshot.
    ///
    /// Ids are kept. Every session goes through the same checks as
    /// `session add`; the first invalid one aborts the whole import and
    /// nothing is written.
    pub fn import(
        pool: &mut DbPool,
        cfg: &Config,
        snapshot: &ScheduleSnapshot,
        replace: bool,
    ) -> AppResult<ImportSummary> {
        let tx = pool.conn.transaction()?;

        if replace {
            clear_schedule(&tx)?;
            tracing::debug!("existing schedule cleared before import");
        }

        for class in &snapshot.classes {
            upsert_class(&tx, class)?;
        }

        for raw in &snapshot.sessions {
            let session = raw.validate()?;
            check_session_input(&tx, &session, cfg)?;
            upsert_session(&tx, &session)?;
        }

        tx.commit()?;

        let summary = ImportSummary {
            classes: snapshot.classes.len(),
            sessions: snapshot.sessions.len(),
        };

        ttlog_quiet(
            &pool.conn,
            "import",
            if replace { "replace" } else { "merge" },
            &format!(
                "{} classes, {} sessions",
                summary.classes, summary.sessions
            ),
        );

        Ok(summary)
    }
}
