//! Cyrillic/Latin transliteration and URL-safe permalink tags.
//!
//! The crate exposes three operations: [`Transliteration::to_latin`],
//! [`Transliteration::to_cyrillic`] and [`Transliteration::prepare_tags`].
//! Tags derived from Cyrillic text carry the `"ru--"` marker prefix so they
//! can later be recognized and converted back.

pub mod transliteration;

pub use self::transliteration::*;
