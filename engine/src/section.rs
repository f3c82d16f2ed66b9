//! Ordered section grouping for forms and detail views.
//!
//! DESIGN
//! ======
//! Sections are an explicit ordered sequence of `(name, items)` pairs built
//! once from the descriptor list. Named sections keep first-seen order and
//! items keep descriptor order inside each section. Items without a section
//! (or with a blank one, or one equal to the fallback name) share a single
//! fallback section that always comes last.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Fallback section name for form fields.
pub const DEFAULT_FORM_SECTION: &str = "Other";

/// Fallback section name for detail fields.
pub const DEFAULT_DETAIL_SECTION: &str = "General";

/// Anything that can name the section it belongs to.
pub trait Sectioned {
    fn section_name(&self) -> Option<&str>;
}

impl Sectioned for crate::field::FieldDescriptor {
    fn section_name(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

/// One named group of items.
#[derive(Debug, PartialEq)]
pub struct Section<'a, T> {
    pub name: String,
    pub items: Vec<&'a T>,
}

impl<T> Section<'_, T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group `items` into ordered sections with `fallback` collecting the rest.
#[must_use]
pub fn group_sections<'a, T: Sectioned>(items: &'a [T], fallback: &str) -> Vec<Section<'a, T>> {
    let mut sections: Vec<Section<'a, T>> = Vec::new();
    let mut leftovers: Vec<&'a T> = Vec::new();

    for item in items {
        let name = item.section_name().map(str::trim).filter(|s| !s.is_empty() && *s != fallback);
        let Some(name) = name else {
            leftovers.push(item);
            continue;
        };
        match sections.iter_mut().find(|s| s.name == name) {
            Some(section) => section.items.push(item),
            None => sections.push(Section { name: name.to_owned(), items: vec![item] }),
        }
    }

    if !leftovers.is_empty() {
        sections.push(Section { name: fallback.to_owned(), items: leftovers });
    }
    sections
}

/// Whether a divider follows the section at `index` out of `count`.
#[must_use]
pub fn divider_after(index: usize, count: usize) -> bool {
    index + 1 < count
}
