//! Bulk-action toolbar configuration for the containers datatable.
//!
//! A pure composition boundary: the parent view owns the selection and the
//! derived gating booleans, this component only reflects them. Executing an
//! action (issuing the start/stop/... requests) is delegated back to the
//! parent's controller.

/// One bulk action of the containers toolbar, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerAction {
    Start,
    Stop,
    Kill,
    Restart,
    Pause,
    Resume,
    Remove,
    Add,
}

const TOOLBAR_ORDER: [ContainerAction; 8] = [
    ContainerAction::Start,
    ContainerAction::Stop,
    ContainerAction::Kill,
    ContainerAction::Restart,
    ContainerAction::Pause,
    ContainerAction::Resume,
    ContainerAction::Remove,
    ContainerAction::Add,
];

/// Per-render toolbar configuration over a caller-owned selection.
#[derive(Debug, Clone)]
pub struct ContainersDatatableActions<'a, T> {
    pub selected_items: &'a [T],
    pub selected_item_count: usize,
    pub no_stopped_items_selected: bool,
    pub no_running_items_selected: bool,
    pub no_paused_items_selected: bool,
    pub show_start_action: bool,
    pub show_stop_action: bool,
    pub show_kill_action: bool,
    pub show_restart_action: bool,
    pub show_pause_action: bool,
    pub show_resume_action: bool,
    pub show_remove_action: bool,
    pub show_add_action: bool,
}

impl<'a, T> ContainersDatatableActions<'a, T> {
    /// Toolbar config with every action visible and nothing selected.
    pub fn new(selected_items: &'a [T]) -> Self {
        Self {
            selected_items,
            selected_item_count: selected_items.len(),
            no_stopped_items_selected: true,
            no_running_items_selected: true,
            no_paused_items_selected: true,
            show_start_action: true,
            show_stop_action: true,
            show_kill_action: true,
            show_restart_action: true,
            show_pause_action: true,
            show_resume_action: true,
            show_remove_action: true,
            show_add_action: true,
        }
    }

    pub fn is_visible(&self, action: ContainerAction) -> bool {
        match action {
            ContainerAction::Start => self.show_start_action,
            ContainerAction::Stop => self.show_stop_action,
            ContainerAction::Kill => self.show_kill_action,
            ContainerAction::Restart => self.show_restart_action,
            ContainerAction::Pause => self.show_pause_action,
            ContainerAction::Resume => self.show_resume_action,
            ContainerAction::Remove => self.show_remove_action,
            ContainerAction::Add => self.show_add_action,
        }
    }

    /// Whether an action applies to the current selection: starting needs a
    /// stopped container, stop/kill/restart/pause need a running one,
    /// resuming needs a paused one, removal needs any selection at all.
    pub fn is_enabled(&self, action: ContainerAction) -> bool {
        match action {
            ContainerAction::Start => !self.no_stopped_items_selected,
            ContainerAction::Stop
            | ContainerAction::Kill
            | ContainerAction::Restart
            | ContainerAction::Pause => !self.no_running_items_selected,
            ContainerAction::Resume => !self.no_paused_items_selected,
            ContainerAction::Remove => self.selected_item_count > 0,
            ContainerAction::Add => true,
        }
    }

    /// The visible actions that apply to the current selection, in toolbar
    /// order.
    pub fn enabled_actions(&self) -> Vec<ContainerAction> {
        TOOLBAR_ORDER
            .into_iter()
            .filter(|&action| self.is_visible(action) && self.is_enabled(action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_only_allows_add() {
        let items: [&str; 0] = [];
        let toolbar = ContainersDatatableActions::new(&items);

        assert_eq!(toolbar.enabled_actions(), vec![ContainerAction::Add]);
    }

    #[test]
    fn running_selection_gates_the_running_actions() {
        let items = ["web-1"];
        let mut toolbar = ContainersDatatableActions::new(&items);
        toolbar.no_running_items_selected = false;

        assert_eq!(
            toolbar.enabled_actions(),
            vec![
                ContainerAction::Stop,
                ContainerAction::Kill,
                ContainerAction::Restart,
                ContainerAction::Pause,
                ContainerAction::Remove,
                ContainerAction::Add,
            ]
        );
    }

    #[test]
    fn stopped_selection_enables_start() {
        let items = ["web-1"];
        let mut toolbar = ContainersDatatableActions::new(&items);
        toolbar.no_stopped_items_selected = false;

        assert!(toolbar.is_enabled(ContainerAction::Start));
        assert!(!toolbar.is_enabled(ContainerAction::Stop));
    }

    #[test]
    fn paused_selection_enables_resume() {
        let items = ["web-1"];
        let mut toolbar = ContainersDatatableActions::new(&items);
        toolbar.no_paused_items_selected = false;

        assert!(toolbar.is_enabled(ContainerAction::Resume));
    }

    #[test]
    fn hidden_actions_never_appear_even_when_enabled() {
        let items = ["web-1"];
        let mut toolbar = ContainersDatatableActions::new(&items);
        toolbar.no_running_items_selected = false;
        toolbar.show_kill_action = false;
        toolbar.show_add_action = false;

        let actions = toolbar.enabled_actions();
        assert!(!actions.contains(&ContainerAction::Kill));
        assert!(!actions.contains(&ContainerAction::Add));
        assert!(actions.contains(&ContainerAction::Stop));
    }
}
