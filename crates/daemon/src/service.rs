use std::sync::Arc;

use anyhow::Context;
use task_core::{
    api::CreateTaskRequest,
    model::{NewTask, Task},
    FormatRegistry, RuleError, Schema,
};

use crate::db::TaskRepository;
use crate::error::ApiError;

/// Validates requests and drives the repository.
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
    create_schema: Schema<CreateTaskRequest>,
}

impl TaskService {
    /// Compiles request schemas; a malformed rule declaration fails here.
    pub fn new(repo: Arc<dyn TaskRepository>, formats: &FormatRegistry) -> Result<Self, RuleError> {
        Ok(Self {
            repo,
            create_schema: Schema::compile(formats)?,
        })
    }

    pub async fn create_task(&self, req: CreateTaskRequest) -> Result<i64, ApiError> {
        if let Err(violation) = self.create_schema.validate(&req) {
            tracing::info!(%violation, "rejected create_task request");
            return Err(violation.into());
        }

        let task = NewTask::from(req);
        let repo = Arc::clone(&self.repo);
        let id = tokio::task::spawn_blocking(move || repo.create_task(task))
            .await
            .context("create_task worker panicked")??;

        tracing::info!(task_id = id, "task created");
        Ok(id)
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || repo.get_task(id))
            .await
            .context("get_task worker panicked")??
            .ok_or(ApiError::NotFound(id))
    }
}
