use desk_core::enums::Droppable;

/// Where, if anywhere, a drag gesture started.
///
/// ```text
/// idle → dragging_from(panel) → idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    #[default]
    Idle,
    DraggingFrom(Droppable),
}

impl DragState {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether `panel` accepts a drop right now: only the counterpart of the
    /// panel the drag started from does.
    #[must_use]
    pub fn accepts_drop(self, panel: Droppable) -> bool {
        match self {
            Self::Idle => false,
            Self::DraggingFrom(source) => source.counterpart() == panel,
        }
    }
}
