use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let groups: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT group_id) FROM events",
        [],
        |row| row.get(0),
    )?;
    let members: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM members", [], |row| row.get(0))?;

    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);
    println!("{}• Groups:{} {}", CYAN, RESET, groups);
    println!("{}• Members:{} {}", CYAN, RESET, members);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(start_date) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(end_date) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) AVERAGE SPAN
    //
    let avg_span: Option<f64> = pool.conn.query_row(
        "SELECT AVG(julianday(end_date) - julianday(start_date) + 1) FROM events",
        [],
        |row| row.get(0),
    )?;
    if let Some(avg) = avg_span {
        println!("{}• Average event span:{} {:.2} days", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
