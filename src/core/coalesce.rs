use std::cell::Cell;

/// Collapses a burst of values into one evaluation per paint frame.
///
/// The first `submit` after a drain reports that a frame must be requested;
/// later submits only overwrite the pending value, so the frame callback
/// always sees the most recent one.
pub struct FrameCoalescer<T> {
    pending: Cell<Option<T>>,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: Cell::new(None),
        }
    }

    /// Store `value`; returns `true` when no frame was pending yet.
    pub fn submit(&self, value: T) -> bool {
        self.pending.replace(Some(value)).is_none()
    }

    /// Drain the pending value, if any.
    pub fn take(&self) -> Option<T> {
        self.pending.take()
    }
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}
