use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::db::init_db;
use crate::error::{Result, StoreError};
use crate::types::Task;

/// Shared handle for task CRUD, usable from any number of HTTP handlers.
///
/// Wraps a single `Connection` in a mutex; every query runs under the lock,
/// which is fine at this scale (one user, short statements).
pub struct TaskStore {
    conn: Arc<Mutex<Connection>>,
}

impl TaskStore {
    /// Create a store, initialising the schema if needed.
    pub fn new(conn: Connection) -> Result<Self> {
        init_db(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a task and return its row ID.
    pub fn add(&self, date: &str, title: &str, comment: &str, repeat: &str) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO scheduler (date, title, comment, repeat)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![date, title, comment, repeat],
        )?;
        let id = conn.last_insert_rowid();
        info!(task_id = id, %date, "task added");
        Ok(id)
    }

    /// Fetch one task by ID.
    pub fn get(&self, id: i64) -> Result<Task> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT id, date, title, comment, repeat FROM scheduler WHERE id = ?1",
            [id],
            |row| {
                Ok(Task {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    title: row.get(2)?,
                    comment: row.get(3)?,
                    repeat: row.get(4)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::TaskNotFound { id },
            other => StoreError::Database(other),
        })
    }

    /// Upcoming tasks ordered by date, capped at `limit` rows.
    pub fn list(&self, limit: usize) -> Result<Vec<Task>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, date, title, comment, repeat FROM scheduler
             ORDER BY date LIMIT ?1",
        )?;
        let tasks = stmt
            .query_map([limit as i64], row_to_task)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Substring search over title and comment, date-ordered.
    pub fn search(&self, text: &str, limit: usize) -> Result<Vec<Task>> {
        let conn = self.conn.lock().unwrap();
        let pattern = format!("%{text}%");
        let mut stmt = conn.prepare(
            "SELECT id, date, title, comment, repeat FROM scheduler
             WHERE title LIKE ?1 OR comment LIKE ?1
             ORDER BY date LIMIT ?2",
        )?;
        let tasks = stmt
            .query_map(rusqlite::params![pattern, limit as i64], row_to_task)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Replace every field of an existing task.
    pub fn update(&self, task: &Task) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let n = conn.execute(
            "UPDATE scheduler SET date = ?1, title = ?2, comment = ?3, repeat = ?4
             WHERE id = ?5",
            rusqlite::params![task.date, task.title, task.comment, task.repeat, task.id],
        )?;
        if n == 0 {
            return Err(StoreError::TaskNotFound { id: task.id });
        }
        debug!(task_id = task.id, "task updated");
        Ok(())
    }

    /// Roll a recurring task's date forward after completion.
    pub fn update_date(&self, id: i64, date: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let n = conn.execute(
            "UPDATE scheduler SET date = ?1 WHERE id = ?2",
            rusqlite::params![date, id],
        )?;
        if n == 0 {
            return Err(StoreError::TaskNotFound { id });
        }
        info!(task_id = id, %date, "task date rolled forward");
        Ok(())
    }

    /// Delete a task by ID. Returns `TaskNotFound` if no row is deleted.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let n = conn.execute("DELETE FROM scheduler WHERE id = ?1", [id])?;
        if n == 0 {
            return Err(StoreError::TaskNotFound { id });
        }
        info!(task_id = id, "task deleted");
        Ok(())
    }
}

fn row_to_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        date: row.get(1)?,
        title: row.get(2)?,
        comment: row.get(3)?,
        repeat: row.get(4)?,
    })
}
