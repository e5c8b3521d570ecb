use crate::transliteration::rules::RULES;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker prepended to tags that were transliterated from Cyrillic, so that
/// [`Transliteration::to_cyrillic`] can recognize and reverse them.
pub const CYRILLIC_MARKER: &str = "ru--";

static WORD_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\s\.]+").unwrap());

static PERMLINK_NOT_SUPPORTED: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?i)[^a-z0-9-]+").unwrap());

pub struct Transliteration {}

impl Transliteration {
	/// Transliterates Cyrillic text into Latin.
	///
	/// Replacements run in table order, each on the output of the previous
	/// one, in a lowercase pass followed by an uppercase pass per pair.
	/// Text without Cyrillic content passes through unchanged.
	pub fn to_latin(text: &str) -> String {
		if text.is_empty() {
			return String::new();
		}

		let mut text = text.to_string();
		for &(cyrillic, latin) in RULES {
			text = text.replace(cyrillic, latin);
			text = text.replace(&cyrillic.to_uppercase(), &latin.to_uppercase());
		}
		text
	}

	/// Transliterates Latin text back into Cyrillic.
	///
	/// Only applies to text carrying the `"ru--"` marker prefix; anything
	/// else is returned unchanged. The mapping is not injective, so this is
	/// a best-effort reversal rather than a guaranteed inverse of
	/// [`Transliteration::to_latin`].
	pub fn to_cyrillic(text: &str) -> String {
		if !text.starts_with(CYRILLIC_MARKER) {
			return text.to_string();
		}

		let mut text = text[CYRILLIC_MARKER.len()..].to_string();
		for &(cyrillic, latin) in RULES {
			text = text.replace(latin, cyrillic);
			text = text.replace(&latin.to_uppercase(), &cyrillic.to_uppercase());
		}
		text
	}

	/// Normalizes a single tag into its URL-safe permalink form.
	///
	/// The tag is trimmed, lower-cased and transliterated; if transliteration
	/// changed it, the `"ru--"` marker is prepended. Word-delimiter runs
	/// (underscore, whitespace, period) collapse to a single hyphen and any
	/// remaining character outside `[a-z0-9-]` is stripped.
	pub fn prepare_tag(tag: &str) -> String {
		let tag = tag.trim().to_lowercase();
		let translit = Self::to_latin(&tag);
		let tag = if translit == tag {
			translit
		} else {
			format!("{}{}", CYRILLIC_MARKER, translit)
		};
		let tag = WORD_DELIMITERS.replace_all(&tag, "-");
		PERMLINK_NOT_SUPPORTED.replace_all(&tag, "").into_owned()
	}

	/// Normalizes every tag in place, each independently of its siblings.
	pub fn prepare_tags(tags: &mut [String]) {
		for tag in tags.iter_mut() {
			*tag = Self::prepare_tag(tag);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn to_latin_empty() {
		assert_eq!(Transliteration::to_latin(""), "");
	}

	#[test]
	fn to_latin_ascii_passthrough() {
		assert_eq!(Transliteration::to_latin("hello world 123"), "hello world 123");
	}

	#[test]
	fn to_latin_basic() {
		assert_eq!(Transliteration::to_latin("привет мир"), "privet mir");
	}

	#[test]
	fn to_latin_preserves_case() {
		assert_eq!(Transliteration::to_latin("Привет мир"), "Privet mir");
		assert_eq!(Transliteration::to_latin("ЩУКА"), "SHCHUKA");
	}

	#[test]
	fn to_latin_digraph_before_single_letter() {
		// "ые" must map as a unit, not as "ы" + "е".
		assert_eq!(Transliteration::to_latin("ые"), "yie");
		assert_eq!(Transliteration::to_latin("новые"), "novyie");
	}

	#[test]
	fn to_cyrillic_without_marker_is_identity() {
		assert_eq!(Transliteration::to_cyrillic(""), "");
		assert_eq!(Transliteration::to_cyrillic("privet"), "privet");
		assert_eq!(Transliteration::to_cyrillic("привет"), "привет");
		assert_eq!(Transliteration::to_cyrillic("RU--privet"), "RU--privet");
	}

	#[test]
	fn to_cyrillic_strips_marker_and_reverses() {
		assert_eq!(Transliteration::to_cyrillic("ru--privet-mir"), "привет-мир");
		assert_eq!(Transliteration::to_cyrillic("ru--"), "");
	}

	#[test]
	fn to_cyrillic_preserves_case() {
		assert_eq!(Transliteration::to_cyrillic("ru--SHCHUKA"), "ЩУКА");
	}

	#[test]
	fn round_trip_is_lossy() {
		// "шч" becomes "sh" + "ch" = "shch", which reverses as "щ".
		let latin = Transliteration::to_latin("шч");
		assert_eq!(latin, "shch");
		let back = Transliteration::to_cyrillic(&format!("{}{}", CYRILLIC_MARKER, latin));
		assert_eq!(back, "щ");
	}
}
