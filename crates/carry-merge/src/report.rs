//! Summary of what a reconciliation did to the loser's entries.

/// A loser entry dropped because its content already existed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedDuplicate {
    /// Key of the dropped loser entry.
    pub key: String,
    /// Key of the output entry with the same fingerprint.
    pub matched: String,
}

/// A kept loser entry moved to a fresh key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rekeyed {
    pub from: String,
    pub to: String,
}

/// A display name given to a kept loser entry that differs from its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameAssignment {
    /// Output key of the entry.
    pub key: String,
    pub previous: Option<String>,
    pub assigned: String,
}

/// The result of folding a loser manifest into a winner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Output keys of loser entries that were kept, in processing order.
    pub kept: Vec<String>,
    pub dropped: Vec<DroppedDuplicate>,
    pub rekeyed: Vec<Rekeyed>,
    pub named: Vec<NameAssignment>,
    /// Output keys of kept entries whose kind has no naming convention.
    pub unnamed: Vec<String>,
    /// Number of tileset references rewritten during fix-up.
    pub rewritten_refs: usize,
}

impl ReconcileReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing from the loser made it into the output.
    pub fn is_noop(&self) -> bool {
        self.kept.is_empty()
    }

    /// Number of loser entries examined.
    pub fn examined(&self) -> usize {
        self.kept.len() + self.dropped.len()
    }
}
