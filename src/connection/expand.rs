use regex::{Captures, Regex};
use std::sync::OnceLock;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$(?:\{([A-Za-z0-9_]+)\}|([A-Za-z0-9_]+))")
            .expect("variable reference pattern is valid")
    })
}

/// Expand `$NAME` and `${NAME}` references using `lookup`.
///
/// References to unknown variables are left in place, as is a bare `$`.
pub fn expand_vars<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains('$') {
        return input.to_string();
    }

    var_pattern()
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn expands_both_reference_forms() {
        let vars = env(&[("HOST", "minio.local"), ("PORT", "9000")]);
        let out = expand_vars("http://$HOST:${PORT}/", |k| vars.get(k).cloned());
        assert_eq!(out, "http://minio.local:9000/");
    }

    #[test]
    fn leaves_unknown_references_untouched() {
        let vars = env(&[]);
        let out = expand_vars("https://${MISSING}/$ALSO_MISSING", |k| vars.get(k).cloned());
        assert_eq!(out, "https://${MISSING}/$ALSO_MISSING");
    }

    #[test]
    fn bare_dollar_and_plain_text_pass_through() {
        let vars = env(&[("A", "x")]);
        assert_eq!(expand_vars("cost: $ 5", |k| vars.get(k).cloned()), "cost: $ 5");
        assert_eq!(expand_vars("no refs", |k| vars.get(k).cloned()), "no refs");
        assert_eq!(expand_vars("${A", |k| vars.get(k).cloned()), "${A");
    }

    #[test]
    fn expansion_is_single_pass() {
        let vars = env(&[("OUTER", "$INNER"), ("INNER", "deep")]);
        assert_eq!(expand_vars("$OUTER", |k| vars.get(k).cloned()), "$INNER");
    }
}
