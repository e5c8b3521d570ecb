/// Ordered Cyrillic → Latin substitution pairs.
///
/// Declaration order is significant: replacements are applied pair by pair,
/// each on the output of the previous one, so multi-character entries such as
/// `("ые", "yie")` must come before the single-letter entries they overlap
/// with. The same table drives both directions.
pub(crate) const RULES: &[(&str, &str)] = &[
	("ые", "yie"),
	("щ", "shch"),
	("ш", "sh"),
	("ч", "ch"),
	("ц", "cz"),
	("й", "ij"),
	("ё", "yo"),
	("э", "ye"),
	("ю", "yu"),
	("я", "ya"),
	("х", "kh"),
	("ж", "zh"),
	("а", "a"),
	("б", "b"),
	("в", "v"),
	("г", "g"),
	("д", "d"),
	("е", "e"),
	("з", "z"),
	("и", "i"),
	("к", "k"),
	("л", "l"),
	("м", "m"),
	("н", "n"),
	("о", "o"),
	("п", "p"),
	("р", "r"),
	("с", "s"),
	("т", "t"),
	("у", "u"),
	("ф", "f"),
	("ъ", "xx"),
	("ы", "y"),
	("ь", "x"),
	("ґ", "g"),
	("є", "e"),
	("і", "i"),
	("ї", "i"),
];
