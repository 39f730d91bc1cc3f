//! Terminal rendering of the widget's markup.
//!
//! Plays the part of the page stylesheet: which mode is shown depends only
//! on the viewport width, and what is visible depends only on the ARIA
//! attributes the controller wrote.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use tabdom::element::{first_by_class, query_class, query_tag};
use tabdom::{Document, Element, LayoutResult, Rect};
use tabs_accordion::TabsConfig;

/// Pixel size of one terminal cell.
pub const CELL_WIDTH_PX: u32 = 8;
pub const CELL_HEIGHT_PX: u32 = 16;

#[derive(Debug, Default)]
pub struct Line {
    pub text: String,
    pub bold: bool,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }
}

/// The laid out page: lines in document order plus element boxes.
#[derive(Debug, Default)]
pub struct Screen {
    pub lines: Vec<Line>,
    pub layout: LayoutResult,
}

impl Screen {
    fn row_rect(&self, col: usize, len: usize) -> Rect {
        Rect::new(
            col as u32 * CELL_WIDTH_PX,
            self.lines.len() as u32 * CELL_HEIGHT_PX,
            len as u32 * CELL_WIDTH_PX,
            CELL_HEIGHT_PX,
        )
    }
}

fn is_true(el: &Element, attr: &str) -> bool {
    el.attribute(attr) == Some("true")
}

/// Lay out the container for the current viewport.
pub fn layout_page(doc: &Document, container_id: &str, config: &TabsConfig) -> Screen {
    let mut screen = Screen::default();
    let Some(container) = doc.element(container_id) else {
        return screen;
    };

    if doc.viewport().width >= config.breakpoint {
        layout_tabs(doc, container, config, &mut screen);
    } else {
        layout_accordion(doc, container, config, &mut screen);
    }
    screen
}

fn layout_tabs(doc: &Document, container: &Element, config: &TabsConfig, screen: &mut Screen) {
    let mut row = String::new();
    let mut boxes = Vec::new();
    if let Some(nav) = first_by_class(container, &config.tab_nav_class) {
        for link in query_tag(nav, "a") {
            let label = link.inner_text();
            let focused = doc.focus.focused() == Some(link.id.as_str());
            let segment = match (is_true(link, "aria-selected"), focused) {
                (true, _) => format!("[ {label} ]"),
                (false, true) => format!("> {label} <"),
                (false, false) => format!("  {label}  "),
            };
            let col = row.chars().count();
            boxes.push((link.id.clone(), col, segment.chars().count()));
            row.push_str(&segment);
            row.push(' ');
        }
    }
    for (id, col, len) in boxes {
        let rect = screen.row_rect(col, len);
        screen.layout.insert(id, rect);
    }
    screen.lines.push(Line {
        text: row,
        bold: true,
    });

    let width = (doc.viewport().width / CELL_WIDTH_PX) as usize;
    screen.lines.push(Line::plain("─".repeat(width)));

    for panel in query_class(container, &config.tab_content_class) {
        if panel.attribute("aria-hidden") == Some("false") {
            layout_panel(panel, screen);
        }
    }
}

fn layout_accordion(
    doc: &Document,
    container: &Element,
    config: &TabsConfig,
    screen: &mut Screen,
) {
    let Some(accordion) = first_by_class(container, &config.tab_accordion_class) else {
        return;
    };

    for child in &accordion.children {
        if child.has_class(&config.tab_title_class) {
            let marker = if is_true(child, "aria-expanded") { "▼" } else { "▶" };
            let focus = if doc.focus.focused() == Some(child.id.as_str()) { ">" } else { " " };
            let text = format!("{focus} {marker} {}", child.inner_text());
            let rect = screen.row_rect(0, text.chars().count());
            screen.layout.insert(child.id.clone(), rect);
            screen.lines.push(Line { text, bold: true });
        } else if child.has_class(&config.tab_content_class)
            && child.attribute("aria-hidden") == Some("false")
        {
            layout_panel(child, screen);
        }
    }
}

fn layout_panel(panel: &Element, screen: &mut Screen) {
    let rect = screen.row_rect(0, 0);
    for paragraph in &panel.children {
        screen.lines.push(Line::plain(format!("    {}", paragraph.inner_text())));
    }
    let height = panel.children.len() as u32 * CELL_HEIGHT_PX;
    screen.layout.insert(panel.id.clone(), Rect { height, ..rect });
}

/// Draw the screen, skipping rows scrolled out of view.
pub fn draw(out: &mut impl Write, screen: &Screen, scroll_y: u32, status: &str) -> io::Result<()> {
    let (_, rows) = terminal::size()?;
    let skip = (scroll_y / CELL_HEIGHT_PX) as usize;
    let body_rows = rows.saturating_sub(1) as usize;

    queue!(out, terminal::Clear(ClearType::All))?;
    for (row, line) in screen.lines.iter().skip(skip).take(body_rows).enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        if line.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(&line.text), SetAttribute(Attribute::Reset))?;
    }
    queue!(
        out,
        cursor::MoveTo(0, rows.saturating_sub(1)),
        SetAttribute(Attribute::Dim),
        Print(status),
        SetAttribute(Attribute::Reset)
    )?;
    out.flush()
}
