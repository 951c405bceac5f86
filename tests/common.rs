#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rworktimer::core::duration::DurationUnit;
use rworktimer::core::project::ProjectLogic;
use rworktimer::core::worktype::WorktypeLogic;
use rworktimer::db::initialize::init_db;
use rworktimer::db::pool::DbPool;
use rworktimer::models::worktype::NewWorktype;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const OWNER: i64 = 1;
pub const STRANGER: i64 = 2;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktimer")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktimer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh database with the schema in place.
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// A fixed instant on 2025-06-10 (UTC).
pub fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

/// Worktype with rounding and minimum in minutes, plus a project for OWNER using it.
pub fn seed_project(pool: &mut DbPool, worktype: &str, rounding_min: i64, minimum_min: i64) -> i64 {
    let input = NewWorktype::new(worktype)
        .rounding(&rounding_min.to_string(), DurationUnit::Minutes)
        .minimum(&minimum_min.to_string(), DurationUnit::Minutes)
        .price("45.00");
    WorktypeLogic::create(pool, &input).expect("create worktype");
    ProjectLogic::create(pool, OWNER, &format!("{} project", worktype), worktype)
        .expect("create project")
}

pub fn count(pool: &DbPool, sql: &str) -> i64 {
    pool.conn
        .query_row(sql, [], |row| row.get(0))
        .expect("count query")
}
