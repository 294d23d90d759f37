//! Newtype IDs for type-safe references.
//!
//! Use the `define_id!` macro to create ID wrappers that prevent accidentally
//! mixing a catalog id with a placement or outfit id.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around an unsigned integer with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `get()`
/// - `From` conversions in both directions and `Display`
///
/// # Example
///
/// ```rust
/// # use style_canvas_core::define_id;
/// define_id!(ShelfId, u32);
/// define_id!(HangerId, u32);
///
/// let shelf = ShelfId::new(1);
/// let hanger = HangerId::new(1);
/// assert_eq!(shelf.get(), hanger.get());
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = hanger;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $repr:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Create a new ID from its raw value.
            #[must_use]
            pub const fn new(id: $repr) -> Self {
                Self(id)
            }

            /// Get the underlying raw value.
            #[must_use]
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(id: $repr) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $repr {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(CatalogId, u32);
define_id!(InstanceId, u64);
define_id!(OutfitId, u64);

/// Monotonic allocator for placement and outfit ids.
///
/// Ids handed out by one allocator are never reused, even after the values
/// that carried them are dropped.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a sequence that starts at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next raw id.
    pub const fn next_raw(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// Allocate the next instance id.
    pub const fn next_instance(&mut self) -> InstanceId {
        InstanceId::new(self.next_raw())
    }

    /// Allocate the next outfit id.
    pub const fn next_outfit(&mut self) -> OutfitId {
        OutfitId::new(self.next_raw())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_instance(), InstanceId::new(1));
        assert_eq!(seq.next_instance(), InstanceId::new(2));
    }

    #[test]
    fn test_sequence_shared_between_kinds_never_repeats() {
        let mut seq = IdSequence::new();
        let a = seq.next_instance().get();
        let b = seq.next_outfit().get();
        let c = seq.next_instance().get();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_catalog_id_serde_transparent() {
        let json = serde_json::to_string(&CatalogId::new(6)).unwrap();
        assert_eq!(json, "6");
        let parsed: CatalogId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CatalogId::new(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId::new(42)), "42");
    }
}
