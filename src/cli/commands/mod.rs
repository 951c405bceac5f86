pub mod config;
pub mod db;
pub mod entries;
pub mod init;
pub mod log;
pub mod project;
pub mod timer;
pub mod worktype;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::with_timeout(&cfg.database, cfg.busy_timeout_ms)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
