use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use task_core::{
    model::{NewTask, Task, TaskStatus},
    now_ms,
};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, created_at, updated_at)
     VALUES (?1, ?2, ?3, ?4, ?4) RETURNING id";

const SELECT_TASK: &str = "SELECT id, title, description, status, created_at, updated_at
     FROM tasks WHERE id = ?1";

/// Task persistence. One statement per call.
pub trait TaskRepository: Send + Sync {
    /// Inserts a task and returns its id.
    fn create_task(&self, task: NewTask) -> Result<i64>;

    /// Fetches a task by id.
    fn get_task(&self, id: i64) -> Result<Option<Task>>;
}

/// SQLite-backed repository.
pub struct SqliteTaskRepository {
    conn: Mutex<Connection>,
}

impl SqliteTaskRepository {
    /// Opens (creating if needed) the database at `db_path` and applies the schema.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("open sqlite db {}", db_path.display()))?;
        Self::init(conn)
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory().context("open in-memory sqlite db")?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(include_str!("../migrations/0001_init.sql"))
            .context("apply schema")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("sqlite connection mutex poisoned"))
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn create_task(&self, task: NewTask) -> Result<i64> {
        let conn = self.conn()?;
        conn.query_row(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                TaskStatus::New.as_str(),
                now_ms()
            ],
            |r| r.get(0),
        )
        .context("failed to insert task")
    }

    fn get_task(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.conn()?;
        conn.query_row(SELECT_TASK, params![id], |r| {
            Ok(Task {
                id: r.get(0)?,
                title: r.get(1)?,
                description: r.get(2)?,
                status: TaskStatus::from_db(&r.get::<_, String>(3)?),
                created_at: r.get(4)?,
                updated_at: r.get(5)?,
            })
        })
        .optional()
        .context("failed to select task")
    }
}
