//! Rendering of combinations into boolean query strings.

use std::fmt::Write;

use crate::keyword::Term;
use crate::split::combine::Combination;

/// The top-level connective between clauses. OR is only ever emitted
/// inside a single alternation group.
const CONNECTIVE: &str = " AND ";

/// Render one combination as a boolean query string.
///
/// Terms are processed in combination order. Skip terms are omitted
/// entirely (no literal, no connective); plain terms become quoted
/// literals; alternations become parenthesized OR-groups of quoted
/// literals. Every clause after the first is prefixed with ` AND `.
///
/// A combination consisting entirely of skip terms renders to the empty
/// string. That is a valid split meaning "no constraint from this
/// branch", not an error.
pub fn render_split(combination: &Combination) -> String {
    let mut split = String::new();
    for term in combination.terms() {
        let clause = match term {
            Term::Skip => continue,
            Term::Plain(text) => format!("\"{text}\""),
            Term::Alternation(alternatives) => {
                let mut inner = String::new();
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        inner.push_str(" OR ");
                    }
                    // First alternative carries no connective; writing to
                    // a String cannot fail.
                    let _ = write!(inner, "\"{alternative}\"");
                }
                format!("({inner})")
            }
        };
        if !split.is_empty() {
            split.push_str(CONNECTIVE);
        }
        split.push_str(&clause);
    }
    split
}

/// Render every combination, one split per combination, in input order.
pub fn render_splits(combinations: &[Combination]) -> Vec<String> {
    combinations.iter().map(render_split).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combination_of(raw: &[&str]) -> Combination {
        Combination::new(raw.iter().map(|entry| Term::parse(entry)).collect())
    }

    #[test]
    fn test_render_plain_terms() {
        let combination = combination_of(&["Operations Research", "Flexible", "Assembly"]);
        assert_eq!(
            render_split(&combination),
            "\"Operations Research\" AND \"Flexible\" AND \"Assembly\""
        );
    }

    #[test]
    fn test_render_alternation_alone() {
        let combination = combination_of(&["Flexible || Matrix"]);
        assert_eq!(render_split(&combination), "(\"Flexible\" OR \"Matrix\")");
    }

    #[test]
    fn test_render_alternation_after_plain_term() {
        let combination = combination_of(&["Operations Research", "Flexible || Matrix"]);
        assert_eq!(
            render_split(&combination),
            "\"Operations Research\" AND (\"Flexible\" OR \"Matrix\")"
        );
    }

    #[test]
    fn test_render_skip_omits_clause_and_connective() {
        let combination = combination_of(&["Operations Research", "", "Assembly"]);
        assert_eq!(
            render_split(&combination),
            "\"Operations Research\" AND \"Assembly\""
        );
    }

    #[test]
    fn test_render_leading_skip_leaves_no_dangling_connective() {
        let combination = combination_of(&["", "Digital Twin"]);
        assert_eq!(render_split(&combination), "\"Digital Twin\"");
    }

    #[test]
    fn test_render_all_skip_combination_is_empty() {
        let combination = combination_of(&["", ""]);
        assert_eq!(render_split(&combination), "");
    }

    #[test]
    fn test_render_splits_preserves_order() {
        let combinations = vec![
            combination_of(&["BCI"]),
            combination_of(&["Gaming"]),
            combination_of(&[""]),
        ];
        assert_eq!(
            render_splits(&combinations),
            vec!["\"BCI\"".to_string(), "\"Gaming\"".to_string(), String::new()]
        );
    }
}
