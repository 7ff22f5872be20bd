//! Typed handles for the records in the catalog.
//!
//! Every record is identified by a [`ulid::Ulid`] generated when the record is created,
//! wrapped in a per-table newtype so that, for example, an [`AlbumId`](crate::album::AlbumId)
//! can never be used where a [`SongId`](crate::song::SongId) is expected.
//!
//! Handles display as `<table>:<ulid>`.

/// Declare a typed record id for the given table.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $table:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(::ulid::Ulid);

        impl $name {
            /// Generate a fresh, unique id.
            #[must_use]
            #[inline]
            pub fn generate() -> Self {
                Self(::ulid::Ulid::new())
            }

            /// The name of the table this id belongs to.
            #[must_use]
            #[inline]
            pub const fn table(&self) -> &'static str {
                $table
            }
        }

        impl ::std::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}:{}", $table, self.0)
            }
        }
    };
}

pub(crate) use record_id;
