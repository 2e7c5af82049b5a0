use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::gym_class::GymClass;
use crate::models::session::{RawSession, Session};
use crate::models::snapshot::ScheduleSnapshot;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

fn map_class(row: &Row) -> Result<GymClass> {
    Ok(GymClass {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub fn load_classes(conn: &Connection) -> AppResult<Vec<GymClass>> {
    let mut stmt = conn.prepare("SELECT id, name FROM classes ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_class)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_class(conn: &Connection, id: i64) -> AppResult<Option<GymClass>> {
    let class = conn
        .query_row(
            "SELECT id, name FROM classes WHERE id = ?1",
            [id],
            map_class,
        )
        .optional()?;
    Ok(class)
}

pub fn insert_class(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO classes (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Insert or overwrite a class keeping its id (snapshot import).
pub fn upsert_class(conn: &Connection, class: &GymClass) -> AppResult<()> {
    conn.execute(
        "INSERT INTO classes (id, name) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name",
        params![class.id, class.name],
    )?;
    Ok(())
}

pub fn delete_class(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM classes WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::ClassNotFound(id));
    }
    Ok(())
}

pub fn count_sessions_for_class(conn: &Connection, class_id: i64) -> AppResult<usize> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE class_id = ?1",
        [class_id],
        |row| row.get(0),
    )?;
    Ok(n as usize)
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Rows are read back untyped: the layout validates them like any other
/// fetched payload.
pub fn map_session_row(row: &Row) -> Result<RawSession> {
    Ok(RawSession {
        id: row.get("id")?,
        class_id: row.get("class_id")?,
        day_of_week: row.get("day_of_week")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
    })
}

const SESSION_COLUMNS: &str = "id, class_id, day_of_week, start_time, end_time";

pub fn load_sessions(conn: &Connection) -> AppResult<Vec<RawSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM sessions ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_session(conn: &Connection, id: i64) -> AppResult<Option<RawSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = ?1");
    let raw = conn.query_row(&sql, [id], map_session_row).optional()?;
    Ok(raw)
}

/// Insert a new session; `session.id` is ignored and the new id returned.
pub fn insert_session(conn: &Connection, session: &Session) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sessions (class_id, day_of_week, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            session.class_id,
            session.day_of_week.to_db_str(),
            session.start_time.to_string(),
            session.end_time.to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert or overwrite a session keeping its id (snapshot import).
pub fn upsert_session(conn: &Connection, session: &Session) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sessions (id, class_id, day_of_week, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             class_id = excluded.class_id,
             day_of_week = excluded.day_of_week,
             start_time = excluded.start_time,
             end_time = excluded.end_time",
        params![
            session.id,
            session.class_id,
            session.day_of_week.to_db_str(),
            session.start_time.to_string(),
            session.end_time.to_string(),
        ],
    )?;
    Ok(())
}

/// Update a session (all fields except id)
pub fn update_session(conn: &Connection, session: &Session) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE sessions
         SET class_id = ?1, day_of_week = ?2, start_time = ?3, end_time = ?4
         WHERE id = ?5",
        params![
            session.class_id,
            session.day_of_week.to_db_str(),
            session.start_time.to_string(),
            session.end_time.to_string(),
            session.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::SessionNotFound(session.id));
    }
    Ok(())
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM sessions WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

/// Remove every class and session (audit log is kept).
pub fn clear_schedule(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("DELETE FROM sessions; DELETE FROM classes;")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Load classes and sessions together, as one consistent fetch.
pub fn load_snapshot(pool: &mut DbPool) -> AppResult<ScheduleSnapshot> {
    let tx = pool.conn.transaction()?;
    let classes = load_classes(&tx)?;
    let sessions = load_sessions(&tx)?;
    tx.commit()?;

    Ok(ScheduleSnapshot { classes, sessions })
}
