//! Class-list mutation, kept behind a trait so the tracker never needs a
//! real rendering environment.

/// Prefix for the class the tracker maintains, e.g. `breakpoint-768`.
pub const CLASS_PREFIX: &str = "breakpoint-";

/// The class name mirroring `breakpoint` on the host element.
pub fn breakpoint_class(breakpoint: u32) -> String {
    format!("{CLASS_PREFIX}{breakpoint}")
}

/// Mutable set of classes on some host element (a document body, a root
/// view, ...). The tracker only ever adds or removes the single class named
/// by [`breakpoint_class`].
pub trait ClassList {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// In-memory [`ClassList`] for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassList for ClassSet {
    fn add_class(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}
