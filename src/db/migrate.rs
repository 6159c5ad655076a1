use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if the `kv` table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `kv` table has an `updated_at` column.
fn kv_has_updated_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kv')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `kv` table with the modern schema.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY NOT NULL,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
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

/// Databases created by the first releases stored bare key/value pairs.
fn migrate_add_updated_at_column(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_kv_updated_at";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !kv_has_updated_at_column(conn)? {
        warning("Adding 'updated_at' column to kv table...");
        conn.execute(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )?;
    }

    mark_applied(conn, version, "Added updated_at to kv")?;
    success(format!(
        "Migration applied: {} → added 'updated_at' to kv table",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
        mark_applied(conn, "20250210_0001_create_kv", "Created kv table")?;
        success("Created kv table.");
    }

    migrate_add_updated_at_column(conn)?;

    Ok(())
}
