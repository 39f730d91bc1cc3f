//! Controller configuration.

use serde::Deserialize;
use tabdom::Element;

use crate::error::TabsError;

/// Per-instance configuration. Fixed for the lifetime of a controller.
///
/// Field names deserialize from the camelCase keys the host page uses,
/// e.g. `{"accordionCanCollapseAll": true, "breakpoint": 900}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TabsConfig {
    /// Index of the tab opened at construction.
    pub default_tab: usize,

    /// Class selecting tab content elements.
    pub tab_content_class: String,

    /// Class selecting tab title elements inside the accordion.
    pub tab_title_class: String,

    /// Class selecting the tab navigation container.
    pub tab_nav_class: String,

    /// Class selecting the accordion (tablist) container.
    pub tab_accordion_class: String,

    /// Viewport width in pixels at or above which tab mode is shown.
    pub breakpoint: u32,

    /// Scroll the opened title into view when the accordion changes.
    pub scroll_accordion: bool,

    /// Gap in pixels left above a title scrolled into view.
    pub scroll_offset: u32,

    /// Allow the accordion to close every panel.
    /// Also enables resize reconciliation back into tab mode.
    pub accordion_can_collapse_all: bool,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default_tab: 0,
            tab_content_class: "TabsAccordion-content".into(),
            tab_title_class: "TabsAccordion-title".into(),
            tab_nav_class: "TabsNavigation".into(),
            tab_accordion_class: "TabsAccordion".into(),
            breakpoint: 768,
            scroll_accordion: false,
            scroll_offset: 10,
            accordion_can_collapse_all: false,
        }
    }
}

impl TabsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON options object. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, TabsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply the container's `data-collapsible` and `data-scroll-on-change`
    /// attributes. Only the literal value `"true"` enables an option.
    pub fn with_dataset(mut self, container: &Element) -> Self {
        if container.get_data("collapsible") == Some("true") {
            self.accordion_can_collapse_all = true;
        }
        if container.get_data("scroll-on-change") == Some("true") {
            self.scroll_accordion = true;
        }
        self
    }

    pub fn default_tab(mut self, index: usize) -> Self {
        self.default_tab = index;
        self
    }

    pub fn tab_content_class(mut self, class: impl Into<String>) -> Self {
        self.tab_content_class = class.into();
        self
    }

    pub fn tab_title_class(mut self, class: impl Into<String>) -> Self {
        self.tab_title_class = class.into();
        self
    }

    pub fn tab_nav_class(mut self, class: impl Into<String>) -> Self {
        self.tab_nav_class = class.into();
        self
    }

    pub fn tab_accordion_class(mut self, class: impl Into<String>) -> Self {
        self.tab_accordion_class = class.into();
        self
    }

    pub fn breakpoint(mut self, px: u32) -> Self {
        self.breakpoint = px;
        self
    }

    /// Scroll the opened title into view, leaving `offset` pixels above it.
    pub fn scroll_accordion(mut self, offset: u32) -> Self {
        self.scroll_accordion = true;
        self.scroll_offset = offset;
        self
    }

    /// Let the accordion collapse to zero open panels.
    pub fn collapsible(mut self) -> Self {
        self.accordion_can_collapse_all = true;
        self
    }
}
