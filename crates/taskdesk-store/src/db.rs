use rusqlite::Connection;

use crate::error::Result;

/// Initialise the task schema in `conn`.
///
/// Creates the `scheduler` table (idempotent) and an index on `date` so the
/// date-ordered listing query stays efficient.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS scheduler (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            date    CHAR(8)      NOT NULL DEFAULT '',
            title   VARCHAR(255) NOT NULL DEFAULT '',
            comment TEXT         NOT NULL DEFAULT '',
            repeat  VARCHAR(128) NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_scheduler_date ON scheduler (date);
        ",
    )?;
    Ok(())
}
