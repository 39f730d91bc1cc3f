//! The sample page hosted by the demo.

use tabdom::Element;

pub const CONTAINER_ID: &str = "Tabs";

const TABS: &[(&str, &str, &[&str])] = &[
    (
        "overview",
        "Overview",
        &[
            "Tabs on wide screens, an accordion on narrow ones.",
            "Resize the terminal across the breakpoint to switch modes.",
        ],
    ),
    (
        "keys",
        "Keys",
        &[
            "Tab / Shift+Tab move focus between titles.",
            "Enter or Space opens the focused title.",
            "Arrow keys open the previous or next tab.",
            "Click a title or a nav link with the mouse.",
        ],
    ),
    (
        "state",
        "State",
        &[
            "Every panel, title and link carries ARIA state.",
            "Run with --collapsible to allow closing every panel.",
            "Run with --scroll to scroll opened titles into view.",
        ],
    ),
];

/// Build the host markup. Options are passed the way a static page would,
/// through data attributes on the container.
pub fn sample_page(collapsible: bool, scroll_on_change: bool) -> Element {
    let nav = Element::new("ul")
        .id("tabs-nav")
        .class("TabsNavigation")
        .children(TABS.iter().map(|(id, label, _)| {
            Element::new("li").child(Element::link(format!("#{id}"), *label).id(format!("nav-{id}")))
        }));

    let accordion = Element::div()
        .id("tabs-accordion")
        .class("TabsAccordion")
        .children(TABS.iter().flat_map(|(id, label, lines)| {
            let title = Element::heading(*label)
                .id(format!("title-{id}"))
                .class("TabsAccordion-title")
                .focusable(true);
            let content = Element::div()
                .id(*id)
                .class("TabsAccordion-content")
                .children(lines.iter().map(|line| Element::new("p").text(*line)));
            [title, content]
        }));

    Element::section()
        .id(CONTAINER_ID)
        .data("collapsible", collapsible.to_string())
        .data("scroll-on-change", scroll_on_change.to_string())
        .child(nav)
        .child(accordion)
}
