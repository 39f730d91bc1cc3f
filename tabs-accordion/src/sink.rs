//! Output port for view state.
//!
//! The state machine never touches elements directly. Every visible effect
//! goes through a [`ViewSink`], so the same logic drives a real [`Document`]
//! or a [`RecordingSink`] in tests.

use tabdom::Document;

pub trait ViewSink {
    /// Show or hide a content panel (`aria-hidden`).
    fn set_hidden(&mut self, id: &str, hidden: bool);

    /// Mark a title or nav item selected and expanded (`aria-selected` and
    /// `aria-expanded`, always written together).
    fn set_selected_expanded(&mut self, id: &str, selected: bool);

    /// Move keyboard focus to an element.
    fn focus(&mut self, id: &str);

    /// Scroll so the element's top sits `offset` pixels below the viewport top,
    /// measured once the page reflects the state just written.
    fn scroll_to(&mut self, id: &str, offset: u32);
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl ViewSink for Document {
    fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.set_attribute(id, "aria-hidden", bool_attr(hidden));
    }

    fn set_selected_expanded(&mut self, id: &str, selected: bool) {
        self.set_attribute(id, "aria-selected", bool_attr(selected));
        self.set_attribute(id, "aria-expanded", bool_attr(selected));
    }

    fn focus(&mut self, id: &str) {
        Document::focus(self, id);
    }

    fn scroll_to(&mut self, id: &str, offset: u32) {
        self.scroll_into_view(id, offset);
    }
}

/// A call made on a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Hidden(String, bool),
    SelectedExpanded(String, bool),
    Focus(String),
    ScrollTo(String, u32),
}

/// Sink that records every call, for driving the state machine without a
/// document.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }

    /// Last hidden state written for `id`.
    pub fn hidden(&self, id: &str) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Hidden(target, value) if target == id => Some(*value),
            _ => None,
        })
    }

    /// Last selected/expanded state written for `id`.
    pub fn selected(&self, id: &str) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::SelectedExpanded(target, value) if target == id => Some(*value),
            _ => None,
        })
    }

    /// Last element focused.
    pub fn focused(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Focus(target) => Some(target.as_str()),
            _ => None,
        })
    }
}

impl ViewSink for RecordingSink {
    fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.calls.push(SinkCall::Hidden(id.to_string(), hidden));
    }

    fn set_selected_expanded(&mut self, id: &str, selected: bool) {
        self.calls
            .push(SinkCall::SelectedExpanded(id.to_string(), selected));
    }

    fn focus(&mut self, id: &str) {
        self.calls.push(SinkCall::Focus(id.to_string()));
    }

    fn scroll_to(&mut self, id: &str, offset: u32) {
        self.calls.push(SinkCall::ScrollTo(id.to_string(), offset));
    }
}
