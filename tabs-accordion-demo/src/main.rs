mod page;
mod render;

use std::fs::File;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
};
use crossterm::{cursor, execute, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabdom::{Document, Event, Key, Modifiers};
use tabs_accordion::{DisclosureState, TabsError, TabsToAccordion};
use thiserror::Error;

use crate::page::{sample_page, CONTAINER_ID};
use crate::render::{draw, layout_page, Screen, CELL_HEIGHT_PX, CELL_WIDTH_PX};

#[derive(Debug, Error)]
enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Tabs(#[from] TabsError),
}

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn viewport_px(cols: u16, rows: u16) -> (u32, u32) {
    (cols as u32 * CELL_WIDTH_PX, rows as u32 * CELL_HEIGHT_PX)
}

/// Block for one event, then drain whatever else is already queued so a
/// burst of resizes lands in the same frame.
fn poll() -> io::Result<Vec<CrosstermEvent>> {
    let mut events = vec![event::read()?];
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

/// Translate one terminal event into document events. Returns false to quit.
fn translate(raw: CrosstermEvent, doc: &mut Document, out: &mut Vec<Event>) -> bool {
    match raw {
        CrosstermEvent::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return true;
            }
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Tab => {
                    doc.focus_next();
                }
                KeyCode::BackTab => {
                    doc.focus_prev();
                }
                code => {
                    // Hidden elements never receive key presses.
                    let target = doc
                        .focus
                        .focused()
                        .filter(|id| doc.is_rendered(id))
                        .map(str::to_string);
                    let key: Key = code.into();
                    // Activating a focused link is a click, as in a browser.
                    let on_link = doc.active_element().is_some_and(|el| el.tag == "a");
                    match target {
                        Some(link) if key == Key::Enter && on_link => {
                            out.push(Event::click(link))
                        }
                        target => out.push(Event::Key {
                            target,
                            key,
                            modifiers: Modifiers::from(key_event.modifiers),
                        }),
                    }
                }
            }
        }
        CrosstermEvent::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                let x = mouse.column as u32 * CELL_WIDTH_PX;
                let y = mouse.row as u32 * CELL_HEIGHT_PX + doc.scroll_y();
                if let Some(target) = doc.hit_test(x, y) {
                    if doc.element(&target).is_some_and(|el| el.focusable) {
                        doc.focus(&target);
                    }
                    out.push(Event::click(target));
                }
            }
        }
        CrosstermEvent::Resize(cols, rows) => {
            let (width, height) = viewport_px(cols, rows);
            doc.resize(width, height);
            out.push(Event::Resize { width, height });
        }
        _ => {}
    }
    true
}

fn status_line(doc: &Document, tabs: &TabsToAccordion) -> String {
    let mode = if doc.viewport().width >= tabs.config().breakpoint {
        "tabs"
    } else {
        "accordion"
    };
    let open = match tabs.state() {
        DisclosureState::TabOpen(i) => tabs.tabs()[i].title.clone(),
        DisclosureState::NoTabOpen => "none".to_string(),
    };
    format!(
        " {mode} | {}px | open: {open} | Tab: focus  Enter/Space/arrows: open  q: quit",
        doc.viewport().width
    )
}

/// Lay out the page for the current state and hand the boxes to the
/// document, which resolves pending scrolls and drops focus from anything
/// no longer shown.
fn relayout(doc: &mut Document, tabs: &TabsToAccordion) -> Screen {
    let screen = layout_page(doc, CONTAINER_ID, tabs.config());
    doc.set_layout(screen.layout.clone());
    screen
}

/// Feed one batch of terminal events to the widget, then end the frame.
/// Returns false to quit.
fn dispatch(raws: Vec<CrosstermEvent>, doc: &mut Document, tabs: &mut TabsToAccordion) -> bool {
    let mut events = Vec::new();
    for raw in raws {
        if !translate(raw, doc, &mut events) {
            return false;
        }
    }
    for event in &events {
        tabs.handle_event(doc, event);
    }
    tabs.handle_event(doc, &Event::Frame);
    true
}

fn run(collapsible: bool, scroll: bool) -> Result<(), DemoError> {
    let (cols, rows) = terminal::size()?;
    let (width, height) = viewport_px(cols, rows);
    let mut doc = Document::new(sample_page(collapsible, scroll)).with_viewport(width, height);
    let mut tabs = TabsToAccordion::from_dataset(&mut doc, CONTAINER_ID)?;

    let mut guard = TerminalGuard::new()?;
    loop {
        let screen = relayout(&mut doc, &tabs);
        draw(&mut guard.stdout, &screen, doc.scroll_y(), &status_line(&doc, &tabs))?;

        if !dispatch(poll()?, &mut doc, &mut tabs) {
            return Ok(());
        }
    }
}

fn main() {
    let log_file = File::create("tabs-accordion-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let collapsible = args.iter().any(|a| a == "--collapsible");
    let scroll = args.iter().any(|a| a == "--scroll");

    if let Err(e) = run(collapsible, scroll) {
        eprintln!("Error: {}", e);
    }
}
