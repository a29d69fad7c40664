/// One-shot "has been seen" flag for viewport-entry transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    entered: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only on the call that sets the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.entered {
            self.entered = true;
            return true;
        }
        false
    }

    pub fn entered(&self) -> bool {
        self.entered
    }
}
