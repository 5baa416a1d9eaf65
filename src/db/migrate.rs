use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            group_id    TEXT NOT NULL,
            owner_id    TEXT NOT NULL,
            owner_name  TEXT NOT NULL DEFAULT '',
            owner_role  TEXT NOT NULL CHECK(owner_role IN ('leader','member')),
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            title       TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            CHECK(start_date <= end_date)
        );

        CREATE INDEX IF NOT EXISTS idx_events_group_start ON events(group_id, start_date);
        CREATE INDEX IF NOT EXISTS idx_events_group_end ON events(group_id, end_date);
        "#,
    )?;
    Ok(())
}

fn create_members_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id         TEXT NOT NULL,
            group_id   TEXT NOT NULL,
            name       TEXT NOT NULL,
            role       TEXT NOT NULL CHECK(role IN ('leader','member')),
            joined_at  TEXT NOT NULL,
            PRIMARY KEY (id, group_id)
        );
        "#,
    )?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: &[Migration] = &[
    (
        "20250301_0001_create_events",
        "Created events table",
        create_events_table,
    ),
    (
        "20250412_0002_create_members",
        "Created members table",
        create_members_table,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Called from `db::initialize::init_db`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
