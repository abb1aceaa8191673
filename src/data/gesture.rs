//! Pointer gesture state machine for the curve canvas.
//!
//! Which gesture a pointer-down starts depends on the hit test and the shift
//! modifier:
//!
//! | hit point | shift | selection | gesture            |
//! |-----------|-------|-----------|--------------------|
//! | yes       | no    | any       | `DraggingPoint`    |
//! | no        | no    | any       | `RectSelecting`    |
//! | any       | yes   | non-empty | `GroupDragging`    |
//! | any       | yes   | empty     | stays `Idle`       |
//!
//! Every gesture ends on pointer-up.

use super::selection::SelectionRect;

/// Pointer position in surface-local pixels plus modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
    pub shift: bool,
}

impl PointerInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, shift: false }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A single point follows the pointer vertically.
    DraggingPoint { index: usize },
    /// A selection rectangle is being drawn.
    RectSelecting { rect: SelectionRect },
    /// Every selected point moves by the pointer's vertical delta.
    /// `reference_y` is the pointer Y of the previous move.
    GroupDragging { reference_y: f32 },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::DraggingPoint { .. } => "dragging point",
            GestureState::RectSelecting { .. } => "rectangle select",
            GestureState::GroupDragging { .. } => "group drag",
        }
    }

    /// The in-progress selection rectangle, if any.
    pub fn selection_rect(&self) -> Option<&SelectionRect> {
        match self {
            GestureState::RectSelecting { rect } => Some(rect),
            _ => None,
        }
    }
}
