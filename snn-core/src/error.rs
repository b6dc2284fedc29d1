//! Error types for the SNN core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

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
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::NeighbourTable`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NeighbourTableError {
    /// The flat entry buffer did not match the declared `N x k` shape.
    #[error("neighbour buffer has {got} entries but point_count * k is {expected}")]
    ShapeMismatch {
        /// Entry count implied by the declared shape.
        expected: usize,
        /// Entry count actually supplied by the caller.
        got: usize,
    },
    /// A row referenced a neighbour index outside the point set.
    #[error(
        "point {point} lists neighbour {neighbour}, but the table only holds {point_count} points"
    )]
    NeighbourOutOfBounds {
        /// The point whose row holds the offending entry.
        point: usize,
        /// The out-of-range neighbour index.
        neighbour: usize,
        /// Number of points in the table.
        point_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`NeighbourTableError`] variants.
    enum NeighbourTableErrorCode for NeighbourTableError {
        /// The flat entry buffer did not match the declared `N x k` shape.
        ShapeMismatch => ShapeMismatch { .. } => "NEIGHBOUR_TABLE_SHAPE_MISMATCH",
        /// A row referenced a neighbour index outside the point set.
        NeighbourOutOfBounds => NeighbourOutOfBounds { .. } => "NEIGHBOUR_TABLE_OUT_OF_BOUNDS",
    }
}

/// Error type produced when constructing [`crate::Snn`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SnnError {
    /// The core-point density threshold must be greater than zero.
    #[error("min_pts must be at least 1 (got {got})")]
    InvalidMinPoints {
        /// The invalid threshold supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SnnError`] variants.
    enum SnnErrorCode for SnnError {
        /// The core-point density threshold must be greater than zero.
        InvalidMinPoints => InvalidMinPoints { .. } => "SNN_INVALID_MIN_POINTS",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SnnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_error_codes_are_stable() {
        let shape = NeighbourTableError::ShapeMismatch {
            expected: 6,
            got: 5,
        };
        assert_eq!(shape.code().as_str(), "NEIGHBOUR_TABLE_SHAPE_MISMATCH");

        let bounds = NeighbourTableError::NeighbourOutOfBounds {
            point: 1,
            neighbour: 9,
            point_count: 3,
        };
        assert_eq!(bounds.code().as_str(), "NEIGHBOUR_TABLE_OUT_OF_BOUNDS");
    }

    #[test]
    fn snn_error_code_displays_as_its_string() {
        let err = SnnError::InvalidMinPoints { got: 0 };
        assert_eq!(err.code().to_string(), "SNN_INVALID_MIN_POINTS");
    }
}
