use tabdom::Key;
use tabs_accordion::{Disclosure, DisclosureState, RecordingSink, SinkCall, TabIds, TabsConfig};

fn disclosure(count: usize, config: TabsConfig) -> Disclosure {
    let tabs = (0..count)
        .map(|i| TabIds::new(format!("c{i}"), format!("t{i}"), format!("n{i}")))
        .collect();
    Disclosure::new(tabs, config)
}

fn assert_open(sink: &RecordingSink, i: usize) {
    assert_eq!(sink.hidden(&format!("c{i}")), Some(false), "content {i} visible");
    assert_eq!(sink.selected(&format!("t{i}")), Some(true), "title {i} selected");
    assert_eq!(sink.selected(&format!("n{i}")), Some(true), "nav {i} selected");
}

fn assert_closed(sink: &RecordingSink, i: usize) {
    assert_eq!(sink.hidden(&format!("c{i}")), Some(true), "content {i} hidden");
    assert_eq!(sink.selected(&format!("t{i}")), Some(false), "title {i} unselected");
    assert_eq!(sink.selected(&format!("n{i}")), Some(false), "nav {i} unselected");
}

// ============================================================================
// Open / close
// ============================================================================

#[test]
fn test_open_sets_current_and_attributes() {
    for i in 0..4 {
        let mut d = disclosure(4, TabsConfig::default());
        let mut sink = RecordingSink::new();
        d.open(&mut sink, i);

        let current = d.current().expect("a tab is open");
        assert_eq!(current.position, i);
        assert_eq!(current.content, format!("c{i}"));
        assert_eq!(current.title, format!("t{i}"));
        assert_open(&sink, i);
    }
}

#[test]
fn test_switching_leaves_exactly_one_open() {
    let mut d = disclosure(3, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);

    for &j in &[2, 1, 0, 2] {
        d.handle_tab_click(&mut sink, j);
        assert_eq!(d.state(), DisclosureState::TabOpen(j));
        assert_open(&sink, j);
        for other in (0..3).filter(|&k| k != j) {
            if sink.hidden(&format!("c{other}")).is_some() {
                assert_ne!(sink.hidden(&format!("c{other}")), Some(false));
            }
        }
    }
    assert_closed(&sink, 1);
}

#[test]
fn test_close_records_previous() {
    let mut d = disclosure(2, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 1);
    d.close(&mut sink);

    assert_eq!(d.state(), DisclosureState::NoTabOpen);
    assert_eq!(d.previous().map(|t| t.position), Some(1));
    assert_closed(&sink, 1);
}

#[test]
fn test_tab_click_on_current_is_noop() {
    let mut d = disclosure(3, TabsConfig::default().collapsible());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 1);
    sink.take();

    d.handle_tab_click(&mut sink, 1);
    d.handle_tab_click(&mut sink, 1);
    assert!(sink.calls.is_empty());
    assert_eq!(d.state(), DisclosureState::TabOpen(1));
}

// ============================================================================
// Accordion
// ============================================================================

#[test]
fn test_accordion_switch_focuses_title() {
    let mut d = disclosure(3, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);

    d.handle_accordion(&mut sink, 2);
    assert_eq!(d.state(), DisclosureState::TabOpen(2));
    assert_eq!(sink.focused(), Some("t2"));
    assert!(!sink.calls.iter().any(|c| matches!(c, SinkCall::ScrollTo(..))));
}

#[test]
fn test_accordion_scrolls_when_configured() {
    let mut d = disclosure(3, TabsConfig::default().scroll_accordion(25));
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);
    sink.take();

    d.handle_accordion(&mut sink, 1);
    assert_eq!(sink.calls.last(), Some(&SinkCall::ScrollTo("t1".into(), 25)));
}

#[test]
fn test_accordion_collapse_all() {
    let mut d = disclosure(2, TabsConfig::default().collapsible());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);

    d.handle_accordion(&mut sink, 0);
    assert_eq!(d.state(), DisclosureState::NoTabOpen);
    assert_eq!(d.previous().map(|t| t.position), Some(0));
    assert_closed(&sink, 0);

    d.handle_accordion(&mut sink, 0);
    assert_eq!(d.state(), DisclosureState::TabOpen(0));
}

#[test]
fn test_accordion_without_collapse_all_keeps_tab_open() {
    let mut d = disclosure(2, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);
    sink.take();

    d.handle_accordion(&mut sink, 0);
    assert_eq!(d.state(), DisclosureState::TabOpen(0));
    assert!(sink.calls.is_empty());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_previous_wraps_from_first_to_last() {
    let mut d = disclosure(3, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);

    assert_eq!(d.handle_key(&mut sink, Key::Left, Some(0)), Some(2));
    assert_eq!(d.state(), DisclosureState::TabOpen(2));
    assert_eq!(d.handle_key(&mut sink, Key::Up, Some(2)), Some(1));
}

#[test]
fn test_next_wraps_from_last_to_first() {
    let mut d = disclosure(3, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 2);

    assert_eq!(d.handle_key(&mut sink, Key::Right, Some(2)), Some(0));
    assert_eq!(d.state(), DisclosureState::TabOpen(0));
    assert_eq!(d.handle_key(&mut sink, Key::Down, Some(0)), Some(1));
}

#[test]
fn test_enter_activates_focused_title() {
    let mut d = disclosure(3, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 2);

    assert_eq!(d.handle_key(&mut sink, Key::Enter, Some(1)), Some(1));
    assert_eq!(d.state(), DisclosureState::TabOpen(1));
}

#[test]
fn test_space_on_open_title_collapses_when_allowed() {
    let mut d = disclosure(3, TabsConfig::default().collapsible());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 1);

    assert_eq!(d.handle_key(&mut sink, Key::SPACE, Some(1)), Some(1));
    assert_eq!(d.state(), DisclosureState::NoTabOpen);
}

#[test]
fn test_other_keys_ignored() {
    let mut d = disclosure(3, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 1);
    sink.take();

    assert_eq!(d.handle_key(&mut sink, Key::Char('x'), Some(0)), None);
    assert_eq!(d.handle_key(&mut sink, Key::Escape, Some(0)), None);
    assert!(sink.calls.is_empty());
}

// ============================================================================
// Resize reconciliation
// ============================================================================

#[test]
fn test_reconcile_reopens_previous_at_breakpoint() {
    let mut d = disclosure(3, TabsConfig::default().collapsible());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 0);
    d.handle_accordion(&mut sink, 2);
    d.handle_accordion(&mut sink, 2);
    assert_eq!(d.state(), DisclosureState::NoTabOpen);

    assert!(!d.reconcile(&mut sink, 767));
    assert_eq!(d.state(), DisclosureState::NoTabOpen);

    assert!(d.reconcile(&mut sink, 768));
    assert_eq!(d.state(), DisclosureState::TabOpen(2));
    assert_open(&sink, 2);
}

#[test]
fn test_reconcile_does_nothing_with_tab_open() {
    let mut d = disclosure(3, TabsConfig::default().collapsible());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 1);
    d.handle_accordion(&mut sink, 0);
    sink.take();

    assert!(!d.reconcile(&mut sink, 1200));
    assert!(sink.calls.is_empty());
}

#[test]
fn test_reconcile_requires_collapse_all() {
    let mut d = disclosure(2, TabsConfig::default());
    let mut sink = RecordingSink::new();
    d.open(&mut sink, 1);
    d.close(&mut sink);

    assert!(!d.reconcile(&mut sink, 1200));
    assert_eq!(d.state(), DisclosureState::NoTabOpen);
}
