mod node;

pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// All descendants of `root` carrying `class`, in document order.
/// `root` itself is not considered, matching `querySelectorAll`.
pub fn query_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_descendants(root, &mut |el| el.has_class(class), &mut result);
    result
}

/// All descendants of `root` with the given tag, in document order.
pub fn query_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_descendants(root, &mut |el| el.tag == tag, &mut result);
    result
}

/// First descendant of `root` carrying `class`.
pub fn first_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    for child in &root.children {
        if child.has_class(class) {
            return Some(child);
        }
        if let Some(found) = first_by_class(child, class) {
            return Some(found);
        }
    }
    None
}

fn collect_descendants<'a>(
    element: &'a Element,
    matches: &mut impl FnMut(&Element) -> bool,
    result: &mut Vec<&'a Element>,
) {
    for child in &element.children {
        if matches(child) {
            result.push(child);
        }
        collect_descendants(child, matches, result);
    }
}

/// The sibling immediately before the element with `id`, if any.
pub fn previous_sibling<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let (parent, index) = find_parent(root, id)?;
    index.checked_sub(1).map(|i| &parent.children[i])
}

fn find_parent<'a>(root: &'a Element, id: &str) -> Option<(&'a Element, usize)> {
    if let Some(index) = root.children.iter().position(|c| c.id == id) {
        return Some((root, index));
    }
    root.children.iter().find_map(|c| find_parent(c, id))
}

/// IDs from `root` down to the element with `id`, inclusive.
/// Returns None if the element is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }
    for child in &root.children {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }
    None
}
