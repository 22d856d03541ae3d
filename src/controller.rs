//! Todo List Controller
//!
//! Issues requests to the task service and applies the results to the state
//! store. Failures are logged and returned; they never panic and never retry.
//!
//! Every state mutation is a short synchronous section, so concurrent
//! operations only interleave at the awaits between them. Create appends and
//! delete filters, which commute, so the order in which responses land does not
//! matter.

use std::time::Duration;

use futures::join;
use log::{debug, error, info, warn};

use crate::api::{ApiError, TodoApi};
use crate::clock::Clock;
use crate::config::{AppConfig, Reconciliation};
use crate::models::{Task, TaskId};
use crate::store::StateHandle;

#[derive(Clone)]
pub struct TodoController<A, C, S> {
    api: A,
    clock: C,
    state: S,
    celebration_duration: Duration,
    reconciliation: Reconciliation,
}

impl<A, C, S> TodoController<A, C, S>
where
    A: TodoApi,
    C: Clock,
    S: StateHandle,
{
    pub fn new(api: A, clock: C, state: S, config: &AppConfig) -> Self {
        Self {
            api,
            clock,
            state,
            celebration_duration: config.celebration_duration,
            reconciliation: config.reconciliation,
        }
    }

    /// Initial fetch. Any failure leaves an empty list.
    pub async fn load(&self) -> Result<(), ApiError> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                info!("Loaded {} tasks", tasks.len());
                self.state.mutate(|state| state.replace_tasks(tasks));
                Ok(())
            }
            Err(err) => {
                error!("Error fetching todos: {}", err);
                self.state.mutate(|state| state.replace_tasks(Vec::new()));
                Err(err)
            }
        }
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.mutate(|state| state.draft_title = text);
    }

    /// Add whatever is in the draft buffer
    pub async fn submit_draft(&self) -> Result<Option<Task>, ApiError> {
        let title = self.state.inspect(|state| state.draft_title.clone());
        self.add(&title).await
    }

    /// Create a task. Blank titles are ignored and yield `Ok(None)`; anything
    /// else is sent exactly as typed.
    ///
    /// On failure the draft is kept so the user does not lose their input.
    pub async fn add(&self, title: &str) -> Result<Option<Task>, ApiError> {
        if title.trim().is_empty() {
            debug!("Ignoring blank task title");
            return Ok(None);
        }

        match self.api.create_task(title).await {
            Ok(task) => {
                info!("Created task {}", task.id);
                let created = task.clone();
                self.state.mutate(|state| {
                    state.insert_task(created);
                    state.draft_title.clear();
                });
                self.reconcile().await;
                Ok(Some(task))
            }
            Err(err) => {
                error!("Failed to add todo: {}", err);
                Err(err)
            }
        }
    }

    /// Complete a task: start the celebration, delete it on the service, then
    /// hold the overlay for the celebration duration.
    ///
    /// The overlay timer starts as soon as the delete succeeds and runs
    /// alongside any refetch. The returned future resolves once both are done.
    pub async fn delete(&self, id: TaskId) -> Result<(), ApiError> {
        self.state.mutate(|state| state.begin_celebration(id));

        match self.api.delete_task(id).await {
            Ok(()) => {
                info!("Deleted task {}", id);
                self.state.mutate(|state| {
                    state.remove_task(id);
                });
                let clear_overlay = async {
                    self.clock.sleep(self.celebration_duration).await;
                    // Clears whatever is showing, even if a later delete took over.
                    self.state.mutate(|state| state.end_celebration());
                };
                join!(clear_overlay, self.reconcile());
                Ok(())
            }
            Err(err) => {
                error!("Failed to delete todo {}: {}", id, err);
                self.state.mutate(|state| state.end_celebration());
                Err(err)
            }
        }
    }

    async fn reconcile(&self) {
        if self.reconciliation != Reconciliation::RefetchAfterMutation {
            return;
        }
        match self.api.list_tasks().await {
            Ok(tasks) => self.state.mutate(|state| state.replace_tasks(tasks)),
            Err(err) => warn!("Refetch after mutation failed, keeping local list: {}", err),
        }
    }
}
