//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through the `TodoState` transitions below, reached via a `StateHandle`.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};

/// Removal animation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Celebration {
    #[default]
    Idle,
    /// Overlay shown; `task_id` is the task fading out
    Animating { task_id: TaskId },
}

impl Celebration {
    pub fn is_active(&self) -> bool {
        matches!(self, Celebration::Animating { .. })
    }

    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Celebration::Idle => None,
            Celebration::Animating { task_id } => Some(*task_id),
        }
    }

    pub fn is_celebrating(&self, id: TaskId) -> bool {
        self.task_id() == Some(id)
    }
}

/// Todo page state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// Tasks in display order, ids unique
    pub tasks: Vec<Task>,
    /// Text of the task being typed
    pub draft_title: String,
    pub celebration: Celebration,
}

impl TodoState {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut state = Self::default();
        state.replace_tasks(tasks);
        state
    }

    pub fn celebrating_id(&self) -> Option<TaskId> {
        self.celebration.task_id()
    }

    pub fn celebration_active(&self) -> bool {
        self.celebration.is_active()
    }

    /// Replace the whole list, keeping the first entry for any repeated id
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::new();
        self.tasks = tasks.into_iter().filter(|task| seen.insert(task.id)).collect();
    }

    /// Append a task, or overwrite the entry that already has its id
    pub fn insert_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Remove by id; returns whether anything was removed
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn begin_celebration(&mut self, id: TaskId) {
        self.celebration = Celebration::Animating { task_id: id };
    }

    pub fn end_celebration(&mut self) {
        self.celebration = Celebration::Idle;
    }
}

/// Type alias for the store
pub type AppStore = Store<TodoState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Access to the state the controller mutates.
///
/// Closures run synchronously and must not be held across an await point.
pub trait StateHandle {
    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R;
    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R;
}

impl StateHandle for AppStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }

    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        self.with_untracked(f)
    }
}
