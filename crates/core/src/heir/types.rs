//! Heir domain types.
//!
//! The heir vocabulary is a closed set of relationship classes. Declared
//! heirs are held in a fixed-size per-type table (`HeirSet`) rather than a
//! string-keyed map, so lookups are type-safe and missing entries read as
//! zero.

use serde::{Deserialize, Serialize};

use super::error::HeirError;

/// Relationship classes eligible to be declared as heirs.
///
/// The three grandparent types are valid vocabulary but carry no share rule
/// in this version; declaring them yields a diagnostic note instead of a
/// distribution entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeirType {
    /// Surviving husband.
    Husband,
    /// Surviving wife (or wives, counted as one pooled class).
    Wife,
    /// Father of the deceased.
    Father,
    /// Mother of the deceased.
    Mother,
    /// Son of the deceased.
    Son,
    /// Daughter of the deceased.
    Daughter,
    /// Paternal grandfather (no share rule in this version).
    PaternalGrandfather,
    /// Paternal grandmother (no share rule in this version).
    PaternalGrandmother,
    /// Maternal grandmother (no share rule in this version).
    MaternalGrandmother,
}

impl HeirType {
    /// Every heir type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Husband,
        Self::Wife,
        Self::Father,
        Self::Mother,
        Self::Son,
        Self::Daughter,
        Self::PaternalGrandfather,
        Self::PaternalGrandmother,
        Self::MaternalGrandmother,
    ];

    /// Number of heir types.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index into per-type tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for the spousal classes, which are excluded from Radd.
    #[must_use]
    pub const fn is_spouse(self) -> bool {
        matches!(self, Self::Husband | Self::Wife)
    }

    /// True when this type participates in share computation.
    ///
    /// The grandparent types are declared vocabulary without a rule; they
    /// never receive a share and are surfaced via a diagnostic note.
    #[must_use]
    pub const fn has_share_rule(self) -> bool {
        !matches!(
            self,
            Self::PaternalGrandfather | Self::PaternalGrandmother | Self::MaternalGrandmother
        )
    }

    /// The snake_case wire name for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::PaternalGrandfather => "paternal_grandfather",
            Self::PaternalGrandmother => "paternal_grandmother",
            Self::MaternalGrandmother => "maternal_grandmother",
        }
    }
}

impl std::fmt::Display for HeirType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared heir-class entry, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heir {
    /// Relationship class.
    pub heir_type: HeirType,
    /// Number of individuals of this class (at least 1).
    pub count: u32,
    /// Optional names, one per individual. Descriptive only.
    pub names: Option<Vec<String>>,
}

impl Heir {
    /// Declares `count` heirs of the given class, without names.
    #[must_use]
    pub const fn new(heir_type: HeirType, count: u32) -> Self {
        Self {
            heir_type,
            count,
            names: None,
        }
    }

    /// Declares named heirs of the given class, one per name.
    #[must_use]
    pub fn named<I, S>(heir_type: HeirType, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = u32::try_from(names.len()).unwrap_or(u32::MAX);
        Self {
            heir_type,
            count,
            names: Some(names),
        }
    }
}

/// The declared heirs of one calculation, keyed by `HeirType`.
///
/// Each type appears at most once. Counts for absent types read as zero, so
/// callers never distinguish "absent" from "zero" by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeirSet {
    counts: [u32; HeirType::COUNT],
    names: [Option<Vec<String>>; HeirType::COUNT],
    order: Vec<HeirType>,
}

impl HeirSet {
    /// An empty set: nobody declared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from declared entries, validating the input invariants.
    ///
    /// # Errors
    ///
    /// Returns `HeirError::DuplicateHeir` if a type appears twice and
    /// `HeirError::ZeroCount` if any entry declares zero individuals.
    pub fn from_heirs(heirs: &[Heir]) -> Result<Self, HeirError> {
        let mut set = Self::new();
        for heir in heirs {
            if heir.count == 0 {
                return Err(HeirError::ZeroCount(heir.heir_type));
            }
            if set.contains(heir.heir_type) {
                return Err(HeirError::DuplicateHeir(heir.heir_type));
            }
            set.counts[heir.heir_type.index()] = heir.count;
            set.names[heir.heir_type.index()] = heir.names.clone();
            set.order.push(heir.heir_type);
        }
        Ok(set)
    }

    /// Number of declared individuals of the given type; 0 when absent.
    #[must_use]
    pub const fn count(&self, heir_type: HeirType) -> u32 {
        self.counts[heir_type.index()]
    }

    /// True when at least one individual of the given type is declared.
    #[must_use]
    pub const fn contains(&self, heir_type: HeirType) -> bool {
        self.counts[heir_type.index()] > 0
    }

    /// Names declared for the given type, if any.
    #[must_use]
    pub fn names(&self, heir_type: HeirType) -> Option<&[String]> {
        self.names[heir_type.index()].as_deref()
    }

    /// The declared types, in declaration order.
    #[must_use]
    pub fn declared(&self) -> &[HeirType] {
        &self.order
    }

    /// True when nobody is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when the deceased left a son or a daughter.
    ///
    /// This flag drives most of the fixed-share branching.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.count(HeirType::Son) > 0 || self.count(HeirType::Daughter) > 0
    }
}
