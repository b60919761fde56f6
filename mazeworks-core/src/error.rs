//! Error types for the mazeworks core library.
//!
//! Structural misuse of the priority queue or the disjoint sets is reported
//! through [`CollectionError`]; graph construction failures through
//! [`GraphError`]. Algorithmic infeasibility (a disconnected spanning-tree
//! input, an unreachable target) is never an error and is modelled by the
//! result types of the respective algorithms instead.

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced by misuse of [`crate::IndexedMinPriorityQueue`] or
/// [`crate::DisjointSets`].
///
/// Every variant names the structure that rejected the call so that messages
/// stay meaningful when errors bubble up through the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum CollectionError {
    /// The item is already tracked by the structure.
    #[error("item is already present in the {structure}")]
    DuplicateItem {
        /// Name of the structure that rejected the item.
        structure: &'static str,
    },
    /// The item is not tracked by the structure.
    #[error("item is not present in the {structure}")]
    ItemNotFound {
        /// Name of the structure that was queried.
        structure: &'static str,
    },
    /// The queue holds no items.
    #[error("cannot read the minimum of an empty {structure}")]
    EmptyQueue {
        /// Name of the structure that was empty.
        structure: &'static str,
    },
    /// A priority was NaN and cannot be ordered.
    #[error("priority must not be NaN in the {structure}")]
    InvalidPriority {
        /// Name of the structure that rejected the priority.
        structure: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`CollectionError`] variants.
    enum CollectionErrorCode for CollectionError {
        /// The item is already tracked by the structure.
        DuplicateItem => DuplicateItem { .. } => "COLLECTION_DUPLICATE_ITEM",
        /// The item is not tracked by the structure.
        ItemNotFound => ItemNotFound { .. } => "COLLECTION_ITEM_NOT_FOUND",
        /// The queue holds no items.
        EmptyQueue => EmptyQueue { .. } => "COLLECTION_EMPTY_QUEUE",
        /// A priority was NaN.
        InvalidPriority => InvalidPriority { .. } => "COLLECTION_INVALID_PRIORITY",
    }
}

/// An error produced while building an [`crate::AdjacencyListGraph`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge weight was NaN or infinite.
    #[error("edge weight {weight} is not finite")]
    NonFiniteWeight {
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Convenient alias for results returned by the collection structures.
pub type Result<T> = core::result::Result<T, CollectionError>;
