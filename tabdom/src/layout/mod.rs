mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Element ID to its box in document coordinates (pixels).
///
/// Layout itself is the host's business; the document only stores the last
/// result so that scroll targets can be resolved.
pub type LayoutResult = HashMap<String, Rect>;
