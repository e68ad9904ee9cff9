//! Field-level normalizers and canonical primitives for OEC farm records.
//!
//! Every normalizer in this crate is a pure function: it takes the raw,
//! as-entered value and either returns the canonical form or rejects it.
//! Empty input is never rejected here; whether a field is required is a
//! cross-field decision made by the record validator in `oec-core`.
//!
#![deny(missing_docs)]

/// Canonical JSON encoding used for record fingerprints.
pub mod canonicalizer;
/// Digest primitives.
pub mod digest;
/// Two-letter reference codes (province/state, country).
pub mod identifiers;
/// Phone number normalization.
pub mod phone;
/// Postal code and ZIP code normalization, and the per-country format table.
pub mod postal;
/// Date-not-in-future rule.
pub mod temporal;
/// Title-case text normalization.
pub mod text;
/// Error types shared by the normalizers.
pub mod validation;

pub use canonicalizer::{canonical_bytes, CanonicalizationError};
pub use digest::{Digest, DigestAlg};
pub use identifiers::{CountryCode, ProvinceCode};
pub use phone::normalize_phone;
pub use postal::{normalize_postal, normalize_zip, PostalFormat};
pub use temporal::{is_not_future, is_not_future_at};
pub use text::normalize_title_case;
pub use validation::{NormalizeError, ValidationError};
