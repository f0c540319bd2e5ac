use crate::navigation::NavAction;

/// Emitted when a quick-action button asks the shell to switch panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRequested {
    pub action: NavAction,
}
