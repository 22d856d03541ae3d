//! UI Components
//!
//! Leptos components for the todo page.

mod celebration_overlay;
mod festive_footer;
mod new_task_form;
mod snow_scene;
mod task_list;

pub use celebration_overlay::CelebrationOverlay;
pub use festive_footer::FestiveFooter;
pub use new_task_form::NewTaskForm;
pub use snow_scene::SnowScene;
pub use task_list::TaskList;
