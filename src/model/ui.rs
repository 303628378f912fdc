//! UI state - modal overlay and control fade

/// Identifies which modal is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Keyboard shortcut help overlay
    Help,
}

/// Union of all modal states
#[derive(Debug, Clone)]
pub enum ModalState {
    Help,
}

impl ModalState {
    /// Get the modal ID for this state
    pub fn id(&self) -> ModalId {
        match self {
            ModalState::Help => ModalId::Help,
        }
    }
}

/// UI state - modal overlay and hover fade for the controls
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
    /// Whether the pointer is over the controls region.
    /// Controls render faded (half opacity) when it is not.
    pub controls_hot: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_modal: None,
            controls_hot: false,
        }
    }

    /// Check if a modal is currently active
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Open a modal
    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    /// Close the active modal
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
