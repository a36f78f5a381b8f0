//! Name tables for vertex constants.
//!
//! Configuration and scripting layers refer to vertex attributes, index types
//! and buffer usages by name (`"VertexPosition"`, `"uint16"`, `"static"`).
//! Each of those enumerations owns a [`ConstantTable`] that maps canonical
//! names to values and back.
//!
//! Tables are built on first use from a fixed entry list and are never mutated
//! afterwards, so they can be read from any thread without locking.
//!
//! ```ignore
//! use redlilium_vertex::{IndexDataType, NamedConstant};
//!
//! assert_eq!(IndexDataType::from_name("uint32"), Some(IndexDataType::Uint32));
//! assert_eq!(IndexDataType::Uint16.name(), Some("uint16"));
//! assert_eq!(IndexDataType::from_name("UINT32"), None); // case-sensitive
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::LazyLock;

use crate::format::VertexAttribId;
use crate::index::IndexDataType;
use crate::usage::Usage;

/// Bidirectional mapping between canonical names and enum values.
#[derive(Debug)]
pub struct ConstantTable<T: 'static> {
    kind: &'static str,
    entries: &'static [(&'static str, T)],
    by_name: HashMap<&'static str, T>,
    by_value: HashMap<T, &'static str>,
}

impl<T> ConstantTable<T>
where
    T: Copy + Eq + Hash + Debug + 'static,
{
    /// Build a table from `(name, value)` pairs.
    ///
    /// Names and values must both be unique within `entries`.
    pub fn new(kind: &'static str, entries: &'static [(&'static str, T)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_value = HashMap::with_capacity(entries.len());

        for &(name, value) in entries {
            let name_taken = by_name.insert(name, value).is_some();
            let value_taken = by_value.insert(value, name).is_some();
            debug_assert!(!name_taken, "duplicate {kind} name {name:?}");
            debug_assert!(!value_taken, "duplicate {kind} value {value:?}");
        }

        log::trace!("Built {kind} name table ({} entries)", entries.len());

        Self {
            kind,
            entries,
            by_name,
            by_value,
        }
    }

    /// Human-readable name of the enumeration, used in error messages.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Look up the value registered under `name`.
    pub fn find_value(&self, name: &str) -> Option<T> {
        self.by_name.get(name).copied()
    }

    /// Look up the canonical name of `value`.
    pub fn find_name(&self, value: T) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    /// Iterate over all populated entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate over all populated names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An enumeration that can be looked up by name.
pub trait NamedConstant: Copy + Eq + Hash + Debug + Sized + 'static {
    /// The process-wide name table for this enumeration.
    fn table() -> &'static ConstantTable<Self>;

    /// Resolve a canonical name. Returns `None` if the name is not registered.
    fn from_name(name: &str) -> Option<Self> {
        Self::table().find_value(name)
    }

    /// Canonical name of this value. Returns `None` if the value is not registered.
    fn name(self) -> Option<&'static str> {
        Self::table().find_name(self)
    }
}

const ATTRIB_ENTRIES: &[(&str, VertexAttribId)] = &[
    ("VertexPosition", VertexAttribId::Position),
    ("VertexTexCoord", VertexAttribId::TexCoord),
    ("VertexColor", VertexAttribId::Color),
    ("ConstantColor", VertexAttribId::ConstantColor),
];

const INDEX_TYPE_ENTRIES: &[(&str, IndexDataType)] = &[
    ("uint16", IndexDataType::Uint16),
    ("uint32", IndexDataType::Uint32),
];

const USAGE_ENTRIES: &[(&str, Usage)] = &[
    ("stream", Usage::Stream),
    ("dynamic", Usage::Dynamic),
    ("static", Usage::Static),
];

static ATTRIB_NAMES: LazyLock<ConstantTable<VertexAttribId>> =
    LazyLock::new(|| ConstantTable::new("vertex attribute", ATTRIB_ENTRIES));

static INDEX_TYPE_NAMES: LazyLock<ConstantTable<IndexDataType>> =
    LazyLock::new(|| ConstantTable::new("index type", INDEX_TYPE_ENTRIES));

static USAGE_NAMES: LazyLock<ConstantTable<Usage>> =
    LazyLock::new(|| ConstantTable::new("usage", USAGE_ENTRIES));

/// Implements [`NamedConstant`], `FromStr` and `Display` on top of a table.
macro_rules! impl_named_constant {
    ($ty:ty, $table:ident) => {
        impl NamedConstant for $ty {
            fn table() -> &'static ConstantTable<Self> {
                &$table
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::error::VertexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| crate::error::VertexError::UnknownConstant {
                    kind: $table.kind(),
                    name: s.to_owned(),
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match NamedConstant::name(*self) {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{self:?}"),
                }
            }
        }
    };
}

impl_named_constant!(VertexAttribId, ATTRIB_NAMES);
impl_named_constant!(IndexDataType, INDEX_TYPE_NAMES);
impl_named_constant!(Usage, USAGE_NAMES);

static_assertions::assert_impl_all!(ConstantTable<VertexAttribId>: Send, Sync);
