//! Single-slot modal detail inspector
//!
//! Open state and the inspected item are one `Option`, so "open" and
//! "which item" can never disagree. Opening replaces; there is no stack.

/// Where a pointer click landed relative to an open inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Outside the content area (the dimmed overlay)
    Backdrop,
    /// Inside the content area
    Content,
}

#[derive(Debug, Clone)]
pub struct DetailInspector<T> {
    open: Option<T>,
}

impl<T> Default for DetailInspector<T> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<T> DetailInspector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect `item`, replacing whatever was open
    pub fn open(&mut self, item: T) {
        self.open = Some(item);
    }

    /// Close the inspector. No-op when already closed.
    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_item(&self) -> Option<&T> {
        self.open.as_ref()
    }

    /// Route a click. Backdrop clicks close; content clicks never do.
    ///
    /// Returns true if the click closed the inspector.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.is_open() => {
                self.close();
                true
            }
            ClickTarget::Backdrop | ClickTarget::Content => false,
        }
    }
}
