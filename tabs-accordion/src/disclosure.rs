//! The open/close state machine.
//!
//! `Disclosure` knows tabs only by position and by the element IDs paired at
//! construction. All visible effects go through a [`ViewSink`].

use tabdom::Key;

use crate::config::TabsConfig;
use crate::keyboard::{next_index, previous_index, KeyIntent};
use crate::sink::ViewSink;

/// Element IDs that make up one tab, paired by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabIds {
    pub content: String,
    pub title: String,
    pub nav: String,
}

impl TabIds {
    pub fn new(
        content: impl Into<String>,
        title: impl Into<String>,
        nav: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
            nav: nav.into(),
        }
    }
}

/// The open tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTab {
    pub content: String,
    pub title: String,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState {
    /// Every panel closed. Only reachable through the accordion with
    /// collapse-all enabled.
    NoTabOpen,
    TabOpen(usize),
}

#[derive(Debug)]
pub struct Disclosure {
    tabs: Vec<TabIds>,
    config: TabsConfig,
    current: Option<CurrentTab>,
    previous: Option<CurrentTab>,
}

impl Disclosure {
    /// Create the state machine with every tab closed. Nothing is written to
    /// a sink until the first `open`.
    pub fn new(tabs: Vec<TabIds>, config: TabsConfig) -> Self {
        Self {
            tabs,
            config,
            current: None,
            previous: None,
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[TabIds] {
        &self.tabs
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&CurrentTab> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&CurrentTab> {
        self.previous.as_ref()
    }

    pub fn state(&self) -> DisclosureState {
        match &self.current {
            Some(tab) => DisclosureState::TabOpen(tab.position),
            None => DisclosureState::NoTabOpen,
        }
    }

    /// Position of the tab whose content element has `id`.
    pub fn position_of_content(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.content == id)
    }

    fn is_current(&self, position: usize) -> bool {
        self.current.as_ref().is_some_and(|tab| tab.position == position)
    }

    /// Make the tab at `position` current and show it.
    pub fn open(&mut self, sink: &mut impl ViewSink, position: usize) {
        let Some(tab) = self.tabs.get(position) else {
            log::warn!("[disclosure] open: no tab at position {position}");
            return;
        };

        let next = CurrentTab {
            content: tab.content.clone(),
            title: tab.title.clone(),
            position,
        };
        if let Some(outgoing) = self.current.replace(next) {
            self.previous = Some(outgoing);
        }

        sink.set_hidden(&tab.content, false);
        sink.set_selected_expanded(&tab.title, true);
        sink.set_selected_expanded(&tab.nav, true);
        log::debug!("[disclosure] open {position} ({})", tab.content);
    }

    /// Hide the current tab, if any.
    pub fn close(&mut self, sink: &mut impl ViewSink) {
        let Some(outgoing) = self.current.take() else {
            return;
        };

        let tab = &self.tabs[outgoing.position];
        sink.set_hidden(&tab.content, true);
        sink.set_selected_expanded(&tab.title, false);
        sink.set_selected_expanded(&tab.nav, false);
        log::debug!("[disclosure] close {} ({})", outgoing.position, tab.content);

        self.previous = Some(outgoing);
    }

    /// Accordion activation of the tab at `position`.
    pub fn handle_accordion(&mut self, sink: &mut impl ViewSink, position: usize) {
        if position >= self.tabs.len() {
            log::warn!("[disclosure] accordion: no tab at position {position}");
            return;
        }

        if self.is_current(position) {
            if self.config.accordion_can_collapse_all {
                self.close(sink);
            }
            return;
        }

        self.close(sink);
        self.open(sink, position);

        let title = &self.tabs[position].title;
        sink.focus(title);
        if self.config.scroll_accordion {
            sink.scroll_to(title, self.config.scroll_offset);
        }
    }

    /// Tab-mode activation of the tab at `position`. Never closes the last
    /// open tab.
    pub fn handle_tab_click(&mut self, sink: &mut impl ViewSink, position: usize) {
        if position >= self.tabs.len() {
            log::warn!("[disclosure] tab click: no tab at position {position}");
            return;
        }
        if self.is_current(position) {
            return;
        }
        self.close(sink);
        self.open(sink, position);
    }

    /// Resolve a key press over a title to a tab index and activate it.
    ///
    /// `focused` is the position of the tab whose title holds focus in the
    /// document, which is not necessarily the element the event was
    /// dispatched to. Returns the index that was activated.
    pub fn handle_key(
        &mut self,
        sink: &mut impl ViewSink,
        key: Key,
        focused: Option<usize>,
    ) -> Option<usize> {
        let intent = KeyIntent::from_key(key)?;
        let target = self.resolve(intent, focused)?;
        log::debug!("[disclosure] key {key:?} -> {intent:?} -> {target}");
        self.handle_accordion(sink, target);
        Some(target)
    }

    fn resolve(&self, intent: KeyIntent, focused: Option<usize>) -> Option<usize> {
        let current = self.current.as_ref().map(|tab| tab.position);
        match intent {
            KeyIntent::Activate => match (focused, current) {
                (Some(f), Some(c)) if f == c => Some(c),
                (Some(f), _) => Some(f),
                (None, _) => {
                    log::warn!("[disclosure] activate: focused element is not a tab title");
                    None
                }
            },
            KeyIntent::Previous | KeyIntent::Next => {
                // With nothing open, step from the tab that was closed last.
                let base = current
                    .or_else(|| self.previous.as_ref().map(|tab| tab.position))
                    .unwrap_or(0);
                let count = self.tabs.len();
                Some(match intent {
                    KeyIntent::Previous => previous_index(base, count),
                    _ => next_index(base, count),
                })
            }
        }
    }

    /// Resize reconciliation: when the viewport is wide enough for tab mode
    /// and every panel is closed, reopen the tab that was closed last.
    /// Returns true if a tab was reopened.
    pub fn reconcile(&mut self, sink: &mut impl ViewSink, viewport_width: u32) -> bool {
        if !self.config.accordion_can_collapse_all
            || viewport_width < self.config.breakpoint
            || self.current.is_some()
        {
            return false;
        }
        let Some(position) = self.previous.as_ref().map(|tab| tab.position) else {
            return false;
        };
        log::debug!("[disclosure] reconcile at width {viewport_width}: reopening {position}");
        self.open(sink, position);
        true
    }
}
