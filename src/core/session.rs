use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_session, find_class, find_session, insert_session, load_sessions, update_session,
};
use crate::errors::{AppError, AppResult};
use crate::models::clock::ClockTime;
use crate::models::day::Day;
use crate::models::session::Session;
use rusqlite::Connection;

/// Optional field changes for `session edit`.
#[derive(Debug, Default, Clone)]
pub struct SessionChanges {
    pub class_id: Option<i64>,
    pub day: Option<Day>,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
}

impl SessionChanges {
    pub fn is_empty(&self) -> bool {
        self.class_id.is_none() && self.day.is_none() && self.start.is_none() && self.end.is_none()
    }
}

/// High-level business logic for the `session` commands.
pub struct SessionLogic;

/// Input-side checks shared by add, edit and import: minimum duration and
/// an existing class.
pub(crate) fn check_session_input(
    conn: &Connection,
    session: &Session,
    cfg: &Config,
) -> AppResult<()> {
    session.ensure_min_duration(cfg.min_session_minutes)?;

    if find_class(conn, session.class_id)?.is_none() {
        return Err(AppError::UnknownClass {
            session: session.id,
            class_id: session.class_id,
        });
    }
    Ok(())
}

impl SessionLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        class_id: i64,
        day: Day,
        start: ClockTime,
        end: ClockTime,
    ) -> AppResult<Session> {
        let draft = Session::new(0, class_id, day, start, end)?;
        check_session_input(&pool.conn, &draft, cfg)?;

        let id = insert_session(&pool.conn, &draft)?;
        let session = Session { id, ..draft };

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("session #{id}"),
            &format!(
                "class {} on {} {}-{}",
                class_id,
                day,
                start,
                end.end_label()
            ),
        );
        tracing::debug!(id, class_id, %day, "session added");

        Ok(session)
    }

    pub fn edit(
        pool: &mut DbPool,
        cfg: &Config,
        id: i64,
        changes: &SessionChanges,
    ) -> AppResult<Session> {
        let current = find_session(&pool.conn, id)?
            .ok_or(AppError::SessionNotFound(id))?
            .validate()?;

        let updated = Session::new(
            id,
            changes.class_id.unwrap_or(current.class_id),
            changes.day.unwrap_or(current.day_of_week),
            changes.start.unwrap_or(current.start_time),
            changes.end.unwrap_or(current.end_time),
        )?;
        check_session_input(&pool.conn, &updated, cfg)?;

        update_session(&pool.conn, &updated)?;

        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("session #{id}"),
            &format!(
                "{} {}-{} → {} {}-{}",
                current.day_of_week,
                current.start_time,
                current.end_time.end_label(),
                updated.day_of_week,
                updated.start_time,
                updated.end_time.end_label()
            ),
        );

        Ok(updated)
    }

    /// Delete a session and return what was removed.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Option<Session>> {
        let existing = find_session(&pool.conn, id)?.ok_or(AppError::SessionNotFound(id))?;

        delete_session(&pool.conn, id)?;

        ttlog_quiet(
            &pool.conn,
            "del",
            &format!("session #{id}"),
            &format!(
                "{} {}-{}",
                existing.day_of_week, existing.start_time, existing.end_time
            ),
        );

        // rows edited outside the CLI may not validate; deletion still succeeds
        Ok(existing.validate().ok())
    }

    /// Sessions sorted by day then start time, optionally for one day only.
    pub fn list(pool: &mut DbPool, day: Option<Day>) -> AppResult<Vec<Session>> {
        let mut sessions = load_sessions(&pool.conn)?
            .iter()
            .map(|r| r.validate())
            .collect::<AppResult<Vec<_>>>()?;

        if let Some(d) = day {
            sessions.retain(|s| s.day_of_week == d);
        }

        sessions.sort_by_key(|s| (s.day_of_week, s.start_time, s.id));
        Ok(sessions)
    }
}
