use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::anyhow;
use task_core::{
    model::{NewTask, Task, TaskStatus},
    now_ms,
};

use crate::db::TaskRepository;

/// In-memory repository for tests. Not durable.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    tasks: BTreeMap<i64, Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create_task(&self, task: NewTask) -> anyhow::Result<i64> {
        let mut inner = self.inner.lock().map_err(|_| anyhow!("store mutex poisoned"))?;
        inner.next_id += 1;
        let id = inner.next_id;
        let now = now_ms();
        inner.tasks.insert(
            id,
            Task {
                id,
                title: task.title,
                description: task.description,
                status: TaskStatus::New,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    fn get_task(&self, id: i64) -> anyhow::Result<Option<Task>> {
        let inner = self.inner.lock().map_err(|_| anyhow!("store mutex poisoned"))?;
        Ok(inner.tasks.get(&id).cloned())
    }
}
