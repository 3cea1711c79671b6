//! MeSH term normalization used to key the probability table.

use std::sync::LazyLock;

use regex::Regex;

/// Parenthesised qualifiers such as `(drug effects)`.
static RE_BRACKETED: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(.*?\)").ok());

const DASH_VARIANTS: [char; 5] = ['\u{2010}', '\u{2011}', '\u{2013}', '\u{2014}', '\u{2212}'];

/// Normalize a MeSH term for probability lookups.
///
/// Lower-cases, spells out `&`, unifies dashes, drops bracketed fragments and
/// dots, then applies a naive singularization (`-ies` → `-y`, `-ses` → `-s`,
/// trailing `s` dropped unless the word ends in `ss`).
pub fn canonicalize_mesh(term: &str) -> String {
    let mut text: String = term
        .to_lowercase()
        .replace('&', "and")
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect();

    if let Some(re) = RE_BRACKETED.as_ref() {
        text = re.replace_all(&text, "").into_owned();
    }
    text.retain(|c| c != '.');

    singularize(text.trim())
}

fn singularize(term: &str) -> String {
    if let Some(stem) = term.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = term.strip_suffix("ses") {
        format!("{stem}s")
    } else if term.ends_with('s') && !term.ends_with("ss") {
        term[..term.len() - 1].to_string()
    } else {
        term.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms_collapse() {
        assert_eq!(canonicalize_mesh("Rats"), "rat");
        assert_eq!(canonicalize_mesh("Mice"), "mice");
        assert_eq!(canonicalize_mesh("Studies"), "study");
        assert_eq!(canonicalize_mesh("Analyses"), "analys");
        assert_eq!(canonicalize_mesh("Stress"), "stress");
    }

    #[test]
    fn punctuation_is_normalized() {
        assert_eq!(
            canonicalize_mesh("Antagonists & Inhibitors"),
            "antagonists and inhibitor"
        );
        assert_eq!(canonicalize_mesh("Drug Effects (methods)"), "drug effect");
        assert_eq!(canonicalize_mesh("U.S. Gov't"), "us gov't");
        assert_eq!(canonicalize_mesh("Double\u{2013}Blind Method"), "double-blind method");
    }

    #[test]
    fn idempotent_on_common_terms() {
        for term in ["animals", "cell lines", "humans", "in vitro techniques"] {
            let once = canonicalize_mesh(term);
            assert_eq!(canonicalize_mesh(&once), once);
        }
    }
}
