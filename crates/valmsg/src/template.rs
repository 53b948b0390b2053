//! Positional `{0}`, `{1}`, … placeholder interpolation.

/// Single-pass positional interpolation.
///
/// `{i}` is replaced by `args[i]`. Tokens that are not a decimal index, or
/// whose index has no argument, are left as-is. Substituted values are never
/// re-scanned, so an argument containing `{0}` is emitted verbatim.
#[must_use]
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let extra: usize = args.iter().map(|a| a.len()).sum();
    let mut result = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            // Unclosed brace: emit the remainder as-is.
            result.push_str(&rest[open..]);
            return result;
        };

        let token = &after[..close];
        match token.parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(value) if token.bytes().all(|b| b.is_ascii_digit()) => result.push_str(value),
            _ => {
                result.push('{');
                result.push_str(token);
                result.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_order() {
        assert_eq!(
            interpolate("Поле {0} должно содержать {1}", &["Название", "5 символов"]),
            "Поле Название должно содержать 5 символов"
        );
    }

    #[test]
    fn repeated_and_reordered_tokens() {
        assert_eq!(interpolate("{1} {0} {1}", &["a", "b"]), "b a b");
    }

    #[test]
    fn missing_args_left_as_is() {
        assert_eq!(interpolate("{0} и {1}", &["x"]), "x и {1}");
    }

    #[test]
    fn edge_cases() {
        assert_eq!(interpolate("Hello {world", &[]), "Hello {world");
        assert_eq!(interpolate("Hello {}", &["x"]), "Hello {}");
        assert_eq!(interpolate("{name}", &["x"]), "{name}");
        assert_eq!(interpolate("{+0}", &["x"]), "{+0}");
        assert_eq!(interpolate("no braces", &["x"]), "no braces");
        assert_eq!(interpolate("}{0}{", &["x"]), "}x{");
    }

    #[test]
    fn not_recursive() {
        assert_eq!(interpolate("{0}-{1}", &["{1}", "b"]), "{1}-b");
    }
}
