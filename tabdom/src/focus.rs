use crate::element::Element;

/// Tracks the document's active element.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the element after the current one in `focusable`, wrapping
    /// around. Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, focusable: &[String]) -> Option<String> {
        self.step(focusable, |i, len| (i + 1) % len, |_| 0)
    }

    /// Focus the element before the current one in `focusable`, wrapping
    /// around. Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, focusable: &[String]) -> Option<String> {
        self.step(focusable, |i, len| (i + len - 1) % len, |len| len - 1)
    }

    fn step(
        &mut self,
        focusable: &[String],
        advance: impl Fn(usize, usize) -> usize,
        start: impl Fn(usize) -> usize,
    ) -> Option<String> {
        if focusable.is_empty() {
            return None;
        }
        let len = focusable.len();

        let index = self
            .focused
            .as_ref()
            .and_then(|current| focusable.iter().position(|id| id == current))
            .map_or_else(|| start(len), |i| advance(i, len));
        let new_focus = focusable[index].clone();

        if self.focused.as_ref() != Some(&new_focus) {
            log::debug!("[focus] {:?} -> {}", self.focused, new_focus);
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }
}

/// Collect IDs of all focusable elements in document order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in &element.children {
        collect_focusable_recursive(child, result);
    }
}
