use heck::{ToKebabCase, ToSnakeCase, ToUpperCamelCase};

/// Nouns whose plural does not follow the suffix rules.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
];

/// Words that are the same in singular and plural.
const UNCOUNTABLE: &[&str] = &[
    "data", "equipment", "information", "media", "metadata", "news", "series", "sheep", "species",
];

/// Convert a module name to snake_case (`PersonInfo` -> `person_info`)
pub fn snake(name: &str) -> String {
    name.to_snake_case()
}

/// Convert a module name to kebab-case (`PersonInfo` -> `person-info`)
pub fn kebab(name: &str) -> String {
    name.to_kebab_case()
}

/// Convert a snake_case token to PascalCase (`people_infos` -> `PeopleInfos`)
pub fn pascal(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Pluralize a snake_case token by pluralizing its last segment.
pub fn plural_snake(snake: &str) -> String {
    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{}_{}", head, pluralize_word(last)),
        None => pluralize_word(snake),
    }
}

/// Nouns ending in `o` that take `es`; every other `o` noun just takes `s`.
const O_ES_NOUNS: &[&str] = &["buffalo", "echo", "hero", "potato", "tomato", "veto"];

/// Suffix rewrites, first match wins: (suffix, characters to trim, replacement).
const SUFFIX_RULES: &[(&str, usize, &str)] = &[
    ("matrix", 2, "ices"),
    ("vertex", 2, "ices"),
    ("index", 2, "ices"),
    ("zz", 0, "es"),
    ("z", 0, "zes"),
    ("sis", 2, "es"),
    ("ss", 0, "es"),
    ("us", 0, "es"),
    ("as", 0, "es"),
    ("sh", 0, "es"),
    ("ch", 0, "es"),
    ("x", 0, "es"),
    ("ffe", 0, "s"),
    ("fe", 2, "ves"),
    ("lf", 1, "ves"),
    ("rf", 1, "ves"),
    ("eaf", 1, "ves"),
    ("oaf", 1, "ves"),
];

/// Compute a plural form with English suffix rules.
fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(singular, _)| *singular == lower) {
        return plural.to_string();
    }

    let rule = SUFFIX_RULES.iter().find(|(suffix, _, _)| lower.ends_with(suffix));
    if let Some(&(_, trim, replacement)) = rule {
        return format!("{}{}", &word[..word.len() - trim], replacement);
    }

    if O_ES_NOUNS.contains(&lower.as_str()) {
        format!("{}es", word)
    } else if lower.ends_with('s') {
        // already plural
        word.to_string()
    } else if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    }
}

fn ends_with_vowel_y(word: &str) -> bool {
    ["ay", "ey", "iy", "oy", "uy"].iter().any(|suffix| word.ends_with(suffix))
}
