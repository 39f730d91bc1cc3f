//! Binds a [`Disclosure`] to markup in a [`Document`].

use std::collections::HashMap;

use tabdom::element::{first_by_class, path_to, previous_sibling, query_class, query_tag};
use tabdom::{Document, Element, Event};

use crate::config::TabsConfig;
use crate::disclosure::{CurrentTab, Disclosure, DisclosureState, TabIds};
use crate::error::{LookupFailure, TabsError};
use crate::sink::ViewSink;
use crate::throttle::FrameThrottle;

/// Added to the container once the controller has taken it over.
pub const INIT_CLASS: &str = "Tabs--init";
/// Added to the container once the tab navigation is wired up.
pub const NAV_INIT_CLASS: &str = "Tabs--nav-init";
/// Tag of the navigation controls inside the nav container.
pub const NAV_ITEM_TAG: &str = "a";

/// Read-only description of a tab, taken from the markup at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    /// ID of the content element.
    pub id: String,
    /// Text of the title element.
    pub title: String,
}

/// Everything the controller needs from the markup, resolved before any
/// attribute is written.
#[derive(Debug)]
struct Markup {
    tabs: Vec<TabIds>,
    descriptors: Vec<TabDescriptor>,
    accordion: String,
    bound_titles: Vec<String>,
}

impl Markup {
    fn resolve(container: &Element, config: &TabsConfig) -> Result<Self, LookupFailure> {
        let contents = query_class(container, &config.tab_content_class);
        if contents.is_empty() {
            return Err(LookupFailure::NoContent {
                class: config.tab_content_class.clone(),
            });
        }

        let mut titles = Vec::with_capacity(contents.len());
        for content in &contents {
            let title = previous_sibling(container, &content.id).ok_or_else(|| {
                LookupFailure::Title {
                    content_id: content.id.clone(),
                }
            })?;
            titles.push(title);
        }

        let accordion = first_by_class(container, &config.tab_accordion_class).ok_or_else(|| {
            LookupFailure::Accordion {
                class: config.tab_accordion_class.clone(),
            }
        })?;

        let nav = first_by_class(container, &config.tab_nav_class).ok_or_else(|| {
            LookupFailure::Navigation {
                class: config.tab_nav_class.clone(),
            }
        })?;
        let links = query_tag(nav, NAV_ITEM_TAG);
        if links.len() != contents.len() {
            return Err(LookupFailure::NavCount {
                links: links.len(),
                tabs: contents.len(),
            });
        }

        if config.default_tab >= contents.len() {
            return Err(LookupFailure::DefaultTab {
                index: config.default_tab,
                tabs: contents.len(),
            });
        }

        let tabs = contents
            .iter()
            .zip(&titles)
            .zip(&links)
            .map(|((content, title), link)| TabIds::new(&content.id, &title.id, &link.id))
            .collect::<Vec<_>>();

        let descriptors = contents
            .iter()
            .zip(&titles)
            .map(|(content, title)| TabDescriptor {
                id: content.id.clone(),
                title: title.inner_text(),
            })
            .collect();

        // Only title-class elements in the accordion that actually pair with
        // a content element get listeners.
        let bound_titles = query_class(accordion, &config.tab_title_class)
            .into_iter()
            .filter(|el| tabs.iter().any(|tab| tab.title == el.id))
            .map(|el| el.id.clone())
            .collect();

        Ok(Self {
            tabs,
            descriptors,
            accordion: accordion.id.clone(),
            bound_titles,
        })
    }
}

/// A responsive tabs/accordion widget bound to one container.
///
/// Construct it over well-formed markup, then feed it the document's events
/// through [`handle_event`](Self::handle_event).
///
/// # Example
///
/// ```ignore
/// let mut doc = Document::new(page);
/// let mut tabs = TabsToAccordion::new(&mut doc, "Tabs", TabsConfig::default())?;
/// tabs.handle_event(&mut doc, &Event::click("nav-2"));
/// ```
#[derive(Debug)]
pub struct TabsToAccordion {
    container: String,
    accordion: String,
    descriptors: Vec<TabDescriptor>,
    /// Title element ID -> tab position, for titles with listeners.
    title_listeners: HashMap<String, usize>,
    /// Nav link ID -> tab position.
    nav_listeners: HashMap<String, usize>,
    disclosure: Disclosure,
    /// Present only when the accordion may collapse every panel.
    resize: Option<FrameThrottle>,
    /// Width carried by the latest resize event.
    resize_width: Option<u32>,
}

impl TabsToAccordion {
    /// Take over the container with `container_id`.
    ///
    /// Fails without touching the document if the markup is malformed.
    pub fn new(
        doc: &mut Document,
        container_id: &str,
        config: TabsConfig,
    ) -> Result<Self, TabsError> {
        let container = doc
            .element(container_id)
            .ok_or_else(|| LookupFailure::Container(container_id.to_string()))?;
        let markup = Markup::resolve(container, &config)?;

        doc.add_class(container_id, INIT_CLASS);

        for (tab, descriptor) in markup.tabs.iter().zip(&markup.descriptors) {
            doc.set_attribute(&tab.content, "role", "tabpanel");
            doc.set_hidden(&tab.content, true);
            doc.set_attribute(&tab.title, "role", "tab");
            doc.set_attribute(&tab.title, "aria-controls", descriptor.id.as_str());
            doc.set_selected_expanded(&tab.title, false);
        }

        doc.set_attribute(&markup.accordion, "role", "tablist");
        let title_listeners = markup
            .bound_titles
            .iter()
            .filter_map(|id| {
                let position = markup.tabs.iter().position(|tab| &tab.title == id)?;
                Some((id.clone(), position))
            })
            .collect();

        let nav_listeners = markup
            .tabs
            .iter()
            .enumerate()
            .map(|(position, tab)| (tab.nav.clone(), position))
            .collect();
        doc.add_class(container_id, NAV_INIT_CLASS);

        let default_tab = config.default_tab;
        let resize = config.accordion_can_collapse_all.then(FrameThrottle::new);
        let mut disclosure = Disclosure::new(markup.tabs, config);
        disclosure.open(doc, default_tab);

        log::info!(
            "[tabs] initialized '{container_id}' with {} tabs, default {default_tab}",
            disclosure.len()
        );

        Ok(Self {
            container: container_id.to_string(),
            accordion: markup.accordion,
            descriptors: markup.descriptors,
            title_listeners,
            nav_listeners,
            disclosure,
            resize,
            resize_width: None,
        })
    }

    /// Take over the container, reading options from its `data-*`
    /// attributes over the defaults.
    pub fn from_dataset(doc: &mut Document, container_id: &str) -> Result<Self, TabsError> {
        let container = doc
            .element(container_id)
            .ok_or_else(|| LookupFailure::Container(container_id.to_string()))?;
        let config = TabsConfig::default().with_dataset(container);
        Self::new(doc, container_id, config)
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn accordion(&self) -> &str {
        &self.accordion
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.descriptors
    }

    pub fn config(&self) -> &TabsConfig {
        self.disclosure.config()
    }

    pub fn current(&self) -> Option<&CurrentTab> {
        self.disclosure.current()
    }

    pub fn previous(&self) -> Option<&CurrentTab> {
        self.disclosure.previous()
    }

    pub fn state(&self) -> DisclosureState {
        self.disclosure.state()
    }

    /// True while a resize reconciliation waits for the next frame.
    pub fn resize_pending(&self) -> bool {
        self.resize.as_ref().is_some_and(FrameThrottle::is_pending)
    }

    /// Dispatch a document event. Returns true if the controller handled it.
    ///
    /// A `Resize` only schedules reconciliation. The following `Frame` runs
    /// it with the width of the last `Resize` seen, or the document's
    /// viewport width if none carried one since the previous frame.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> bool {
        match event {
            Event::Click { target } => self.on_click(doc, target),
            Event::Key {
                target: Some(target),
                key,
                ..
            } => {
                if self.listener(doc, target, &self.title_listeners).is_none() {
                    return false;
                }
                let focused = self.focused_position(doc);
                self.disclosure.handle_key(doc, *key, focused).is_some()
            }
            Event::Resize { width, .. } => match self.resize.as_mut() {
                Some(throttle) => {
                    throttle.request();
                    self.resize_width = Some(*width);
                    true
                }
                None => false,
            },
            Event::Frame => {
                let due = self.resize.as_mut().is_some_and(FrameThrottle::take);
                if !due {
                    return false;
                }
                let width = self
                    .resize_width
                    .take()
                    .unwrap_or_else(|| doc.viewport().width);
                self.disclosure.reconcile(doc, width)
            }
            Event::Key { target: None, .. } => false,
        }
    }

    fn on_click(&mut self, doc: &mut Document, target: &str) -> bool {
        if let Some(position) = self.listener(doc, target, &self.title_listeners) {
            self.disclosure.handle_accordion(doc, position);
            return true;
        }
        if let Some(position) = self.listener(doc, target, &self.nav_listeners) {
            self.disclosure.handle_tab_click(doc, position);
            return true;
        }
        false
    }

    /// Position bound to the nearest element on the path from `target` up
    /// to the root that carries a listener. Events bubble.
    fn listener(
        &self,
        doc: &Document,
        target: &str,
        listeners: &HashMap<String, usize>,
    ) -> Option<usize> {
        let path = path_to(&doc.root, target)?;
        path.iter().rev().find_map(|id| listeners.get(id).copied())
    }

    /// Tab controlled by the document's active element, via its
    /// `aria-controls`.
    fn focused_position(&self, doc: &Document) -> Option<usize> {
        let controls = doc.active_element()?.attribute("aria-controls")?;
        self.disclosure.position_of_content(controls)
    }
}
