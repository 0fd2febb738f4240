//! Event vocabulary the host feeds into the plot.
//!
//! The host maps its own event types (terminal input, custom triggers) into
//! [`PlotEvent`] before calling [`Plot::handle_event`](crate::Plot::handle_event).

use glam::IVec2;

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Pointer motion phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Released,
    Moved,
}

/// A pointer event in host cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub phase: PointerPhase,
    pub pos: IVec2,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(button: PointerButton, phase: PointerPhase, pos: IVec2) -> Self {
        Self { button, phase, pos }
    }

    /// Shorthand for a left-button press at the given cell.
    pub fn left_press(x: i32, y: i32) -> Self {
        Self::new(PointerButton::Left, PointerPhase::Pressed, IVec2::new(x, y))
    }
}

/// Events the plot reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotEvent {
    /// A pointer event forwarded by the host.
    Pointer(PointerEvent),
    /// Out-of-band trigger: fit the axis bounds to the current data extent.
    AutoScale,
}

impl From<PointerEvent> for PlotEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}
