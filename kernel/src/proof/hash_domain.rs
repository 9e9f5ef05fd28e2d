//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. The enum,
//! `as_bytes()`, `ALL` and `Display` are generated from one macro invocation,
//! so adding a domain is a single change here.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Path search result (frontier-ordered engines).
    PathReport => b"DELIBERATE::PATH_REPORT::V1\0",

    /// Hill-climbing result.
    ClimbReport => b"DELIBERATE::CLIMB_REPORT::V1\0",

    /// Constraint-solver result.
    CspReport => b"DELIBERATE::CSP_REPORT::V1\0",

    /// Adversarial (minimax) result.
    AdversarialReport => b"DELIBERATE::ADVERSARIAL_REPORT::V1\0",

    /// Search policy snapshot.
    PolicySnapshot => b"DELIBERATE::POLICY_SNAPSHOT::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Bundle artifact content hashing.
    BundleArtifact => b"DELIBERATE::BUNDLE_ARTIFACT::V1\0",

    /// Bundle digest (over the sorted artifact digests).
    BundleDigest => b"DELIBERATE::BUNDLE_DIGEST::V1\0",
}
