pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod layout;

pub use document::{Document, Viewport};
pub use element::Element;
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use layout::{LayoutResult, Rect};
