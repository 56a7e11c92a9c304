//! Planning screen: recurring task lists grouped by plan tab.

use crate::model::task::{PlanType, Task, TaskId};
use crate::repo::state_repo::StateRepository;
use crate::service::tracker_service::TrackerService;

/// Tabs offered by the planning screen.
///
/// The yearly bucket exists in the model but has no tab of its own; tasks
/// filed there stay reachable through the store.
pub const PLANNING_TABS: [PlanType; 3] = [PlanType::Daily, PlanType::Weekly, PlanType::Monthly];

/// Planning screen controller.
#[derive(Debug)]
pub struct PlanningScreen {
    active_tab: PlanType,
    /// Draft for the next task title; survives tab switches.
    pub draft_title: String,
}

impl Default for PlanningScreen {
    fn default() -> Self {
        Self {
            active_tab: PlanType::Daily,
            draft_title: String::new(),
        }
    }
}

/// Everything the planning screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningViewModel {
    /// Tab strip, fixed order.
    pub tabs: [PlanType; 3],
    pub active_tab: PlanType,
    pub draft_title: String,
    /// Tasks of the active tab, collection order preserved.
    pub tasks: Vec<Task>,
}

impl PlanningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> PlanType {
        self.active_tab
    }

    /// Switches the visible tab. The draft title is kept.
    pub fn select_tab(&mut self, tab: PlanType) {
        self.active_tab = tab;
    }

    /// Submits the draft as a new task in the active tab.
    ///
    /// An empty or whitespace-only draft is rejected here and left in place;
    /// the store never sees it. On success the draft clears and the new
    /// task's id is returned. The title is stored as typed.
    pub fn submit<R: StateRepository>(&mut self, store: &mut TrackerService<R>) -> Option<TaskId> {
        if self.draft_title.trim().is_empty() {
            return None;
        }
        let task = store.add_task(self.draft_title.clone(), self.active_tab);
        self.draft_title.clear();
        Some(task.id)
    }

    /// Derives the active tab's task list.
    pub fn view(&self, tasks: &[Task]) -> PlanningViewModel {
        PlanningViewModel {
            tabs: PLANNING_TABS,
            active_tab: self.active_tab,
            draft_title: self.draft_title.clone(),
            tasks: tasks
                .iter()
                .filter(|task| task.plan == self.active_tab)
                .cloned()
                .collect(),
        }
    }

    /// Drops all transient state, as if the screen were freshly entered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
