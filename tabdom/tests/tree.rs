use tabdom::{collect_focusable, Document, Element, FocusState, LayoutResult, Rect};

fn page() -> Element {
    Element::div()
        .id("root")
        .child(Element::link("#a", "A").id("link-a"))
        .child(
            Element::div()
                .id("panel")
                .child(Element::heading("Title").id("title").focusable(true))
                .child(Element::div().id("body").text("Body text")),
        )
        .child(Element::link("#b", "B").id("link-b"))
}

// ============================================================================
// Elements
// ============================================================================

#[test]
fn test_inner_text_joins_descendants() {
    let el = Element::div()
        .text("Intro")
        .child(Element::new("span").text(" bold "))
        .child(Element::new("span").text("tail"));
    assert_eq!(el.inner_text(), "Intro bold tail");
}

#[test]
fn test_class_builder_dedupes() {
    let mut el = Element::div().class("a").class("a");
    assert_eq!(el.classes, vec!["a".to_string()]);
    assert!(el.add_class("b"));
    assert!(!el.add_class("b"));
}

#[test]
fn test_data_attribute_shorthand() {
    let el = Element::div().data("collapsible", "true");
    assert_eq!(el.attribute("data-collapsible"), Some("true"));
    assert_eq!(el.get_data("collapsible"), Some("true"));
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_document_order() {
    assert_eq!(collect_focusable(&page()), vec!["link-a", "title", "link-b"]);
}

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();
    assert_eq!(focus.focused(), None);

    assert!(focus.focus("title"));
    assert!(!focus.focus("title"));
    assert_eq!(focus.focused(), Some("title"));

    assert!(focus.blur());
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_and_prev_wrap() {
    let candidates = collect_focusable(&page());
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&candidates), Some("link-a".to_string()));
    assert_eq!(focus.focus_next(&candidates), Some("title".to_string()));
    assert_eq!(focus.focus_next(&candidates), Some("link-b".to_string()));
    assert_eq!(focus.focus_next(&candidates), Some("link-a".to_string()));

    assert_eq!(focus.focus_prev(&candidates), Some("link-b".to_string()));
}

#[test]
fn test_focus_prev_from_nothing_goes_to_last() {
    let candidates = collect_focusable(&page());
    let mut focus = FocusState::new();
    assert_eq!(focus.focus_prev(&candidates), Some("link-b".to_string()));
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document_attributes_and_classes() {
    let mut doc = Document::new(page());
    assert!(doc.set_attribute("body", "aria-hidden", "true"));
    assert!(!doc.set_attribute("missing", "aria-hidden", "true"));
    assert_eq!(doc.attribute("body", "aria-hidden"), Some("true"));

    assert!(doc.add_class("root", "Tabs--init"));
    assert!(doc.element("root").is_some_and(|e| e.has_class("Tabs--init")));
}

#[test]
fn test_document_focus_ignores_unknown_elements() {
    let mut doc = Document::new(page());
    assert!(!doc.focus("nope"));
    assert!(doc.active_element().is_none());

    assert!(doc.focus("title"));
    assert_eq!(doc.active_element().map(|e| e.id.as_str()), Some("title"));
}

#[test]
fn test_document_resize_and_scroll() {
    let mut doc = Document::new(page()).with_viewport(320, 480);
    assert_eq!(doc.viewport().width, 320);
    doc.resize(1024, 768);
    assert_eq!(doc.viewport().width, 1024);

    doc.scroll_to(140);
    assert_eq!(doc.scroll_y(), 140);
}

#[test]
fn test_hit_test_prefers_deepest() {
    let mut doc = Document::new(page());
    let mut layout = LayoutResult::new();
    layout.insert("panel".into(), Rect::new(0, 100, 400, 200));
    layout.insert("title".into(), Rect::new(0, 100, 400, 20));
    doc.set_layout(layout);

    assert_eq!(doc.hit_test(10, 105), Some("title".to_string()));
    assert_eq!(doc.hit_test(10, 150), Some("panel".to_string()));
    assert_eq!(doc.hit_test(10, 10), None);
    assert_eq!(doc.rect("title").map(|r| r.top()), Some(100));
}

fn rendered(ids: &[(&str, u32)]) -> LayoutResult {
    ids.iter()
        .map(|(id, y)| (id.to_string(), Rect::new(0, *y, 80, 16)))
        .collect()
}

#[test]
fn test_focus_traversal_skips_unrendered_elements() {
    let mut doc = Document::new(page());
    doc.set_layout(rendered(&[("link-a", 0), ("link-b", 16)]));

    assert_eq!(doc.focus_next(), Some("link-a".to_string()));
    assert_eq!(doc.focus_next(), Some("link-b".to_string()));
    assert_eq!(doc.focus_next(), Some("link-a".to_string()));
    assert_eq!(doc.focus_prev(), Some("link-b".to_string()));
}

#[test]
fn test_layout_without_focused_box_blurs() {
    let mut doc = Document::new(page());
    doc.set_layout(rendered(&[("link-a", 0), ("title", 16)]));
    assert!(doc.focus("title"));

    doc.set_layout(rendered(&[("link-a", 0)]));
    assert!(doc.active_element().is_none());
}

#[test]
fn test_scroll_into_view_waits_for_next_layout() {
    let mut doc = Document::new(page());
    doc.set_layout(rendered(&[("title", 200)]));

    doc.scroll_into_view("title", 10);
    assert_eq!(doc.scroll_y(), 0);
    assert_eq!(doc.pending_scroll(), Some(("title", 10)));

    doc.set_layout(rendered(&[("title", 32)]));
    assert_eq!(doc.scroll_y(), 22);
    assert_eq!(doc.pending_scroll(), None);
}

#[test]
fn test_scroll_into_view_saturates_and_drops_missing() {
    let mut doc = Document::new(page());
    doc.scroll_into_view("title", 50);
    doc.set_layout(rendered(&[("title", 16)]));
    assert_eq!(doc.scroll_y(), 0);

    doc.scroll_to(40);
    doc.scroll_into_view("body", 0);
    doc.set_layout(rendered(&[("title", 16)]));
    assert_eq!(doc.scroll_y(), 40);
    assert_eq!(doc.pending_scroll(), None);
}
