use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_classes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            class_id    INTEGER NOT NULL REFERENCES classes(id),
            day_of_week TEXT NOT NULL CHECK(day_of_week IN
                ('Monday','Tuesday','Wednesday','Thursday','Friday','Saturday','Sunday')),
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// Apply a named migration once; the marker row lives in `log`.
fn apply_once(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute_batch(sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tracing::info!(version, message, "migration applied");

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Audit/marker table first: later steps record themselves there
    ensure_log_table(conn)?;

    // 2) Base schema
    if !table_exists(conn, "classes")? {
        create_classes_table(conn)?;
        tracing::debug!("created classes table");
    }
    if !table_exists(conn, "sessions")? {
        create_sessions_table(conn)?;
        tracing::debug!("created sessions table");
    }

    // 3) Versioned migrations
    apply_once(
        conn,
        "20260301_0001_sessions_day_start_index",
        "Added (day_of_week, start_time) index on sessions",
        "CREATE INDEX IF NOT EXISTS idx_sessions_day_start ON sessions(day_of_week, start_time);",
    )?;
    apply_once(
        conn,
        "20260301_0002_sessions_class_index",
        "Added class_id index on sessions",
        "CREATE INDEX IF NOT EXISTS idx_sessions_class ON sessions(class_id);",
    )?;

    Ok(())
}
