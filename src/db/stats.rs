use crate::db::pool::DbPool;
use crate::models::day::Day;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTALS
    //
    let classes: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM classes", [], |row| row.get(0))?;
    let sessions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;

    println!("{}• Classes:{} {}{}{}", CYAN, RESET, GREEN, classes, RESET);
    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, sessions, RESET);

    //
    // 3) SESSIONS PER DAY
    //
    println!("{}• Sessions per day:{}", CYAN, RESET);

    let mut stmt = pool
        .conn
        .prepare("SELECT COUNT(*) FROM sessions WHERE day_of_week = ?1")?;

    for day in Day::ALL {
        let n: i64 = stmt.query_row([day.to_db_str()], |row| row.get(0))?;
        if n == 0 {
            println!("    {:<10} {GREY}--{RESET}", day.name());
        } else {
            println!("    {:<10} {}", day.name(), n);
        }
    }

    println!();
    Ok(())
}
