use crate::core::{Point, Viewport};

/// Hover/focus state for one graph view. Each view owns its tracker
/// exclusively; nothing here touches the underlying skill set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusState {
    Idle,
    Focused(String),
}

#[derive(Clone, Debug, Default)]
pub struct FocusTracker {
    state: FocusState,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::Idle
    }
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered node `id`. Valid from `Idle` and directly from another
    /// `Focused` node (adjacent markers can be crossed without an intermediate
    /// idle frame).
    pub fn pointer_enter(&mut self, id: impl Into<String>) {
        self.state = FocusState::Focused(id.into());
    }

    /// Pointer left the focused node (or the graph background).
    pub fn pointer_leave(&mut self) {
        self.state = FocusState::Idle;
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn focused_id(&self) -> Option<&str> {
        match &self.state {
            FocusState::Idle => None,
            FocusState::Focused(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == FocusState::Idle
    }
}

/// Screen placement of the detail overlay relative to the live pointer.
#[derive(Clone, Copy, Debug)]
pub struct OverlayPlacement {
    /// Offset from the pointer before clamping.
    pub offset: kurbo::Vec2,
    /// Overlay box width, used to keep the right edge on screen.
    pub width: f64,
    /// Minimum distance from the top edge.
    pub min_margin: f64,
}

impl Default for OverlayPlacement {
    fn default() -> Self {
        Self {
            offset: kurbo::Vec2::new(20.0, -20.0),
            width: 300.0,
            min_margin: 20.0,
        }
    }
}

impl OverlayPlacement {
    /// Anchor for the overlay: pointer plus offset, clamped so the box never
    /// renders outside the viewport.
    pub fn position(&self, pointer: Point, viewport: Viewport) -> Point {
        let raw = pointer + self.offset;
        Point::new(
            raw.x.clamp(0.0, (viewport.width - self.width).max(0.0)),
            raw.y.clamp(self.min_margin, viewport.height),
        )
    }
}
