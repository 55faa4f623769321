/// Split normalized text into lowercase candidate tokens.
///
/// Splits on any run of non-alphanumeric characters and drops tokens below
/// `min_chars` — punctuation fragments and short connector words never reach
/// the matcher.
pub fn tokenize(text: &str, min_chars: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_symbol_runs() {
        let tokens = tokenize("dolo-650, twice/daily!", 3);
        assert_eq!(tokens, vec!["dolo", "650", "twice", "daily"]);
    }

    #[test]
    fn drops_short_tokens() {
        let tokens = tokenize("take 2 of mg paracetamol", 3);
        assert_eq!(tokens, vec!["take", "paracetamol"]);
    }

    #[test]
    fn lowercases_tokens() {
        assert_eq!(tokenize("PARACETAMOL Dolo", 3), vec!["paracetamol", "dolo"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("", 3).is_empty());
        assert!(tokenize("...---...", 3).is_empty());
    }

    #[test]
    fn no_token_below_minimum_length() {
        for min in 3..=4 {
            let tokens = tokenize("a bc def ghij klmno", min);
            assert!(tokens.iter().all(|t| t.chars().count() >= min));
        }
    }

    #[test]
    fn idempotent_on_own_output() {
        let tokens = tokenize("Take Dolo 650mg twice", 3);
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize(&rejoined, 3), tokens);
    }
}
