//! Name variant derivation and the ordered replacement table
//!
//! Seed templates reference their own name in several case conventions:
//! kebab-case in manifests and resource names, a hyphenated Pascal form in
//! docs, a concatenated form in .NET solution/project names, snake_case in
//! Terraform resources, and a shortened `-tg` token where infrastructure
//! imposes a length ceiling. Renaming a project means substituting every one
//! of those forms, most specific first.

use crate::error::ConfigError;

/// Longest base the `-tg` resource token may keep before vowel-stripping
/// and truncation kick in.
const TG_MAX_BASE_LEN: usize = 29;

/// Suffix appended to the shortened resource token.
const TG_SUFFIX: &str = "-tg";

/// An identifier rendered in every case convention the templates use.
///
/// Derived once per run for the seed name and once for the target name,
/// then treated as immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariant {
    /// The name exactly as supplied (kebab-case by convention)
    pub kebab: String,

    /// Fully lowercased kebab form
    pub lower_kebab: String,

    /// Hyphen-joined, each segment capitalized with a lowercased tail
    pub pascal: String,

    /// Concatenated, each segment capitalized, tail case left untouched
    pub camel: String,

    /// Hyphens replaced by underscores, lowercased
    pub snake: String,

    /// Shortened token for length-capped infrastructure resource names
    pub tg: String,

    /// Lowercase form of the same token
    pub tg_lower: String,
}

impl NameVariant {
    /// Derive every variant from a validated name. Pure, no I/O.
    pub fn derive(name: &str) -> Self {
        let pascal = name
            .split('-')
            .map(|segment| capitalize_segment(segment, true))
            .collect::<Vec<_>>()
            .join("-");

        let camel = name
            .split('-')
            .map(|segment| capitalize_segment(segment, false))
            .collect::<String>();

        let snake = name.replace('-', "_").to_lowercase();

        let tg_base = tg_base(name);
        let tg = format!("{}{}", tg_base, TG_SUFFIX);
        let tg_lower = format!("{}{}", tg_base.to_lowercase(), TG_SUFFIX);

        Self {
            kebab: name.to_string(),
            lower_kebab: name.to_lowercase(),
            pascal,
            camel,
            snake,
            tg,
            tg_lower,
        }
    }
}

/// Base of the `-tg` token: the name itself, unless it exceeds the length
/// ceiling, in which case lowercase vowels are stripped from the whole name
/// and the result is cut to the first 29 characters.
fn tg_base(name: &str) -> String {
    if name.len() <= TG_MAX_BASE_LEN {
        return name.to_string();
    }
    name.chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .take(TG_MAX_BASE_LEN)
        .collect()
}

/// Uppercase the first character of a segment. With `force_lower_tail` the
/// remainder is lowercased (the pascal form); without it the remainder keeps
/// its original case (the camel form). The camel derivation has always left
/// the tail untouched, so mixed-case segments survive concatenation; the
/// divergence is deliberate and lives entirely in this one flag.
fn capitalize_segment(segment: &str, force_lower_tail: bool) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let tail = if force_lower_tail {
                chars.as_str().to_lowercase()
            } else {
                chars.as_str().to_string()
            };
            first.to_uppercase().collect::<String>() + &tail
        }
    }
}

/// Validate a project name: letters, digits, and hyphens only.
pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidName(name.to_string()))
    }
}

/// One literal, ordered substitution applied to file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

/// Build the ordered replacement list for a seed/target pair.
///
/// Order matters: the `-tg` suffixed tokens and the structured case forms
/// come before the loose fallback tokens, so a short generic token never
/// consumes part of a longer specific one. Entries whose `from` duplicates
/// an earlier entry are dropped (first wins), as are no-op entries.
pub fn replacement_table(seed: &NameVariant, target: &NameVariant) -> Vec<Replacement> {
    let mut table: Vec<Replacement> = Vec::new();
    let push = |table: &mut Vec<Replacement>, from: &str, to: &str| {
        if !from.is_empty() && from != to && !table.iter().any(|r| r.from == from) {
            table.push(Replacement {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    };

    push(&mut table, &seed.tg, &target.tg);
    push(&mut table, &seed.tg_lower, &target.tg_lower);
    push(&mut table, &seed.kebab, &target.lower_kebab);
    push(&mut table, &seed.lower_kebab, &target.lower_kebab);
    push(&mut table, &seed.pascal, &target.pascal);
    push(&mut table, &seed.camel, &target.camel);
    push(&mut table, &seed.snake, &target.snake);

    // Loose fallbacks for stray prose references like "the Seed project".
    // Skipped when the target itself contains the head token, otherwise the
    // fallback would chew on text the earlier replacements just produced.
    if let Some(head) = seed.kebab.split('-').next() {
        let head_lower = head.to_lowercase();
        if !head_lower.is_empty() && !target.lower_kebab.contains(&head_lower) {
            push(&mut table, &capitalize_segment(head, true), &target.camel);
            push(&mut table, &head_lower, &target.lower_kebab);
        }
    }

    table
}
