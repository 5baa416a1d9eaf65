use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent};
use crate::models::member::Member;
use crate::models::role::Role;
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(raw: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| conversion_error(AppError::InvalidDate(raw)))
}

fn parse_db_role(raw: String) -> Result<Role> {
    Role::from_db_str(&raw).ok_or_else(|| conversion_error(AppError::InvalidRole(raw)))
}

pub fn map_row(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        group_id: row.get("group_id")?,
        owner_id: row.get("owner_id")?,
        owner_name: row.get("owner_name")?,
        owner_role: parse_db_role(row.get("owner_role")?)?,
        start_date: parse_db_date(row.get("start_date")?)?,
        end_date: parse_db_date(row.get("end_date")?)?,
        title: row.get("title")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a validated event and return it as stored.
pub fn insert_event(pool: &mut DbPool, ev: &NewEvent) -> AppResult<Event> {
    let created_at = Local::now().to_rfc3339();

    pool.conn.execute(
        "INSERT INTO events (group_id, owner_id, owner_name, owner_role, start_date, end_date, title, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ev.group_id,
            ev.owner_id,
            ev.owner_name,
            ev.owner_role.to_db_str(),
            ev.start_date.format("%Y-%m-%d").to_string(),
            ev.end_date.format("%Y-%m-%d").to_string(),
            ev.title,
            created_at,
        ],
    )?;

    Ok(Event {
        id: pool.conn.last_insert_rowid(),
        group_id: ev.group_id.clone(),
        owner_id: ev.owner_id.clone(),
        owner_name: ev.owner_name.clone(),
        owner_role: ev.owner_role,
        start_date: ev.start_date,
        end_date: ev.end_date,
        title: ev.title.clone(),
        created_at,
    })
}

/// Full current event set of a group, ordered by start date then id.
pub fn load_group_events(pool: &mut DbPool, group_id: &str) -> AppResult<Vec<Event>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE group_id = ?1
         ORDER BY start_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([group_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events of a group whose range intersects `[from, to]`.
pub fn load_group_events_between(
    pool: &mut DbPool,
    group_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<Event>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE group_id = ?1 AND start_date <= ?3 AND end_date >= ?2
         ORDER BY start_date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            group_id,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(pool: &mut DbPool, id: i64) -> AppResult<Option<Event>> {
    let ev = pool
        .conn
        .query_row("SELECT * FROM events WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(ev)
}

pub fn delete_event(pool: &mut DbPool, id: i64) -> AppResult<()> {
    pool.conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(())
}

/// Insert the member or refresh its name and role.
pub fn upsert_member(pool: &mut DbPool, id: &str, group_id: &str, name: &str, role: Role) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO members (id, group_id, name, role, joined_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id, group_id) DO UPDATE SET name = excluded.name, role = excluded.role",
        params![id, group_id, name, role.to_db_str(), Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn load_members(pool: &mut DbPool, group_id: &str) -> AppResult<Vec<Member>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, group_id, name, role, joined_at FROM members
         WHERE group_id = ?1
         ORDER BY role ASC, name ASC",
    )?;

    let rows = stmt.query_map([group_id], |row| {
        Ok(Member {
            id: row.get(0)?,
            group_id: row.get(1)?,
            name: row.get(2)?,
            role: parse_db_role(row.get(3)?)?,
            joined_at: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
