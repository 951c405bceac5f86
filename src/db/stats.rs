use crate::db::pool::DbPool;
use crate::models::entry::ROUNDING_COMMENT;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

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
    // 2) ROW COUNTS
    //
    let worktypes = count(pool, "SELECT COUNT(*) FROM work_type")?;
    let projects = count(pool, "SELECT COUNT(*) FROM project")?;
    let entries = count(pool, "SELECT COUNT(*) FROM entry")?;
    let running = count(
        pool,
        r#"SELECT COUNT(*) FROM entry WHERE start IS NOT NULL AND "end" IS NULL"#,
    )?;
    let rounding: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM entry WHERE comment = ?1",
        [ROUNDING_COMMENT],
        |row| row.get(0),
    )?;

    println!("{}• Worktypes:{} {}{}{}", CYAN, RESET, GREEN, worktypes, RESET);
    println!("{}• Projects:{} {}{}{}", CYAN, RESET, GREEN, projects, RESET);
    println!(
        "{}• Entries:{} {}{}{} ({} rounding, {} running)",
        CYAN, RESET, GREEN, entries, RESET, rounding, running
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start FROM entry WHERE start IS NOT NULL ORDER BY start ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT start FROM entry WHERE start IS NOT NULL ORDER BY start DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Entry range (UTC):{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
