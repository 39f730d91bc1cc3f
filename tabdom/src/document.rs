//! The document: an element tree plus the browser-side state around it.

use crate::element::{find_element, find_element_mut, Element};
use crate::focus::{collect_focusable, FocusState};
use crate::layout::{LayoutResult, Rect};

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Default)]
pub struct Document {
    pub root: Element,
    pub focus: FocusState,
    viewport: Viewport,
    layout: LayoutResult,
    scroll_y: u32,
    pending_scroll: Option<(String, u32)>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.element(id)?.attribute(name)
    }

    /// Set an attribute on the element with `id`.
    /// Returns false if no such element exists.
    pub fn set_attribute(&mut self, id: &str, name: &str, value: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.set_attribute(name, value);
                true
            }
            None => {
                log::warn!("[document] set_attribute on missing element {id}");
                false
            }
        }
    }

    /// Add a class to the element with `id`.
    /// Returns false if no such element exists.
    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.add_class(class);
                true
            }
            None => false,
        }
    }

    /// The element that currently has focus, if any.
    pub fn active_element(&self) -> Option<&Element> {
        self.focus.focused().and_then(|id| self.element(id))
    }

    /// Focus an element. Elements not in the tree are ignored.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.element(id).is_none() {
            log::warn!("[document] focus on missing element {id}");
            return false;
        }
        self.focus.focus(id)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport { width, height };
    }

    /// Store the boxes of the latest layout pass.
    ///
    /// An element without a box is not rendered, so it loses focus. A scroll
    /// requested with [`Document::scroll_into_view`] is resolved against the
    /// new boxes.
    pub fn set_layout(&mut self, layout: LayoutResult) {
        self.layout = layout;

        if let Some(id) = self.focus.focused() {
            if !self.layout.contains_key(id) {
                log::debug!("[document] blur unrendered {id}");
                self.focus.blur();
            }
        }

        if let Some((id, offset)) = self.pending_scroll.take() {
            match self.rect(&id) {
                Some(rect) => self.scroll_to(rect.top().saturating_sub(offset)),
                None => log::debug!("[document] no box to scroll to for {id}"),
            }
        }
    }

    /// Whether the element has a box in the current layout.
    pub fn is_rendered(&self, id: &str) -> bool {
        self.layout.contains_key(id)
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    /// Scroll the viewport to an absolute vertical offset.
    pub fn scroll_to(&mut self, y: u32) {
        self.scroll_y = y;
    }

    /// Scroll so that the element's top sits `offset` pixels below the top of
    /// the viewport. Takes effect at the next [`Document::set_layout`], since
    /// the element's box is only known once the page has been laid out again.
    pub fn scroll_into_view(&mut self, id: &str, offset: u32) {
        self.pending_scroll = Some((id.to_string(), offset));
    }

    pub fn pending_scroll(&self) -> Option<(&str, u32)> {
        self.pending_scroll
            .as_ref()
            .map(|(id, offset)| (id.as_str(), *offset))
    }

    /// Move focus to the next rendered focusable element, wrapping around.
    pub fn focus_next(&mut self) -> Option<String> {
        let candidates = self.rendered_focusable();
        self.focus.focus_next(&candidates)
    }

    /// Move focus to the previous rendered focusable element, wrapping around.
    pub fn focus_prev(&mut self) -> Option<String> {
        let candidates = self.rendered_focusable();
        self.focus.focus_prev(&candidates)
    }

    fn rendered_focusable(&self) -> Vec<String> {
        collect_focusable(&self.root)
            .into_iter()
            .filter(|id| self.is_rendered(id))
            .collect()
    }

    /// Deepest element whose layout box contains the point (document
    /// coordinates). Later siblings win over earlier ones.
    pub fn hit_test(&self, x: u32, y: u32) -> Option<String> {
        let mut hit = None;
        hit_test_recursive(&self.root, &self.layout, x, y, &mut hit);
        hit
    }
}

fn hit_test_recursive(
    element: &Element,
    layout: &LayoutResult,
    x: u32,
    y: u32,
    hit: &mut Option<String>,
) {
    if let Some(rect) = layout.get(&element.id) {
        if rect.contains(x, y) {
            *hit = Some(element.id.clone());
        }
    }
    for child in &element.children {
        hit_test_recursive(child, layout, x, y, hit);
    }
}
