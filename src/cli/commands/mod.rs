pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod marked;
pub mod rate;
pub mod recompute;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::Repository;

/// Open the configured database (running pending migrations) as a repository.
pub(crate) fn open_repository(cfg: &Config) -> AppResult<Repository<DbPool>> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(Repository::with_default_rate(pool, cfg.default_hourly_rate))
}
