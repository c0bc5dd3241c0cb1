//! Per-locale transliteration tables.
//!
//! Each table maps a single lowercase character to its ASCII replacement.
//! Tables only need to cover characters that differ from the plain
//! stripping rule; anything not found in the active chain is dropped by
//! [`slugify`](super::slugify).
//!
//! Keys must be lowercase: `slugify` lowercases its input before any
//! table lookup, so uppercase keys would never match.

/// English digraph ligatures.
pub(super) const EN: &[(char, &str)] = &[('æ', "ae"), ('œ', "oe")];

/// Modern Greek, including the accented vowels and final sigma.
pub(super) const EL: &[(char, &str)] = &[
    ('α', "a"),
    ('ά', "a"),
    ('β', "v"),
    ('γ', "g"),
    ('δ', "d"),
    ('ε', "e"),
    ('έ', "e"),
    ('ζ', "z"),
    ('η', "i"),
    ('ή', "i"),
    ('θ', "th"),
    ('ι', "i"),
    ('ί', "i"),
    ('ϊ', "i"),
    ('ΐ', "i"),
    ('κ', "k"),
    ('λ', "l"),
    ('μ', "m"),
    ('ν', "n"),
    ('ξ', "x"),
    ('ο', "o"),
    ('ό', "o"),
    ('π', "p"),
    ('ρ', "r"),
    ('σ', "s"),
    ('ς', "s"),
    ('τ', "t"),
    ('υ', "y"),
    ('ύ', "y"),
    ('ϋ', "y"),
    ('ΰ', "y"),
    ('φ', "f"),
    ('χ', "ch"),
    ('ψ', "ps"),
    ('ω', "o"),
    ('ώ', "o"),
];

/// Russian Cyrillic. The hard and soft signs transliterate to nothing.
pub(super) const RU: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "c"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
];

/// Ukrainian Cyrillic. Only the letters that differ from Russian are
/// listed; the rest resolve through [`RU`] later in the chain. Note that
/// `г` and `и` are present in both tables with different replacements,
/// which is what chain ordering controls.
pub(super) const UK: &[(char, &str)] = &[
    ('г', "h"),
    ('ґ', "g"),
    ('е', "e"),
    ('є', "ye"),
    ('и', "y"),
    ('і', "i"),
    ('ї', "yi"),
];

/// Czech diacritics.
pub(super) const CS: &[(char, &str)] = &[
    ('á', "a"),
    ('č', "c"),
    ('ď', "d"),
    ('é', "e"),
    ('ě', "e"),
    ('í', "i"),
    ('ň', "n"),
    ('ó', "o"),
    ('ř', "r"),
    ('š', "s"),
    ('ť', "t"),
    ('ú', "u"),
    ('ů', "u"),
    ('ý', "y"),
    ('ž', "z"),
];

/// Polish diacritics.
pub(super) const PL: &[(char, &str)] = &[
    ('ą', "a"),
    ('ć', "c"),
    ('ę', "e"),
    ('ł', "l"),
    ('ń', "n"),
    ('ó', "o"),
    ('ś', "s"),
    ('ź', "z"),
    ('ż', "z"),
];

/// Latvian diacritics.
pub(super) const LV: &[(char, &str)] = &[
    ('ā', "a"),
    ('č', "c"),
    ('ē', "e"),
    ('ģ', "g"),
    ('ī', "i"),
    ('ķ', "k"),
    ('ļ', "l"),
    ('ņ', "n"),
    ('š', "s"),
    ('ū', "u"),
    ('ž', "z"),
];

/// Serbian letters absent from the Russian alphabet, in both Cyrillic
/// and Latin forms. Shared Cyrillic resolves through [`RU`].
pub(super) const SR: &[(char, &str)] = &[
    ('đ', "dj"),
    ('ђ', "dj"),
    ('ј', "j"),
    ('љ', "lj"),
    ('њ', "nj"),
    ('ћ', "c"),
    ('џ', "dz"),
];

/// Turkish diacritics, including the dotless `ı`.
pub(super) const TR: &[(char, &str)] = &[
    ('ç', "c"),
    ('ğ', "g"),
    ('ı', "i"),
    ('ö', "o"),
    ('ş', "s"),
    ('ü', "u"),
];
