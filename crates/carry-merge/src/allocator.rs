//! Conflict-free allocation of manifest keys and display names.
//!
//! Both namespaces share one rule: a free candidate is taken as is; an
//! occupied candidate gets the smallest non-negative integer suffix whose
//! result is free (`img1` -> `img10`, `img11`, ...). Whatever is handed out is
//! marked occupied immediately.

use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
struct Occupancy {
    taken: HashSet<String>,
}

impl Occupancy {
    fn occupy(&mut self, value: &str) {
        self.taken.insert(value.to_string());
    }

    fn contains(&self, value: &str) -> bool {
        self.taken.contains(value)
    }

    fn reserve(&mut self, candidate: &str) -> String {
        if self.taken.insert(candidate.to_string()) {
            return candidate.to_string();
        }
        let mut index: u64 = 0;
        loop {
            let next = format!("{candidate}{index}");
            if self.taken.insert(next.clone()) {
                return next;
            }
            index += 1;
        }
    }

    fn len(&self) -> usize {
        self.taken.len()
    }
}

/// Allocator for display names.
///
/// Empty names are never recorded: an unnamed asset does not occupy a name.
#[derive(Clone, Debug, Default)]
pub struct NameAllocator {
    names: Occupancy,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an existing name as taken without allocating.
    pub fn occupy(&mut self, name: &str) {
        if !name.is_empty() {
            self.names.occupy(name);
        }
    }

    pub fn is_occupied(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Allocate `candidate`, or its smallest free suffixed variant.
    pub fn reserve(&mut self, candidate: &str) -> String {
        self.names.reserve(candidate)
    }

    /// Number of occupied names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Allocator for manifest keys.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    ids: Occupancy,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an existing key as taken without allocating.
    pub fn occupy(&mut self, id: &str) {
        self.ids.occupy(id);
    }

    pub fn is_occupied(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Allocate `candidate`, or its smallest free suffixed variant.
    pub fn reserve(&mut self, candidate: &str) -> String {
        self.ids.reserve(candidate)
    }

    /// Number of occupied keys.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
