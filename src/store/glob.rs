//! Glob matching with Redis `MATCH` semantics
//!
//! ## Syntax
//! - `*`      any run of characters, including none
//! - `?`      exactly one character
//! - `[abc]`  one of the listed characters
//! - `[^abc]` any character not listed
//! - `[a-z]`  a range; reversed ranges (`[z-a]`) are accepted
//! - `\x`     the literal `x`, also inside classes
//!
//! An unterminated class is closed by the end of the pattern.

/// Check whether `candidate` matches `pattern`
pub fn glob_match(pattern: &str, candidate: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();
    match_from(&pattern, &candidate)
}

fn match_from(mut pattern: &[char], mut candidate: &[char]) -> bool {
    while let Some(&token) = pattern.first() {
        match token {
            '*' => {
                while pattern.first() == Some(&'*') {
                    pattern = &pattern[1..];
                }
                if pattern.is_empty() {
                    return true;
                }
                return (0..=candidate.len()).any(|skip| match_from(pattern, &candidate[skip..]));
            }
            '?' => {
                if candidate.is_empty() {
                    return false;
                }
                pattern = &pattern[1..];
                candidate = &candidate[1..];
            }
            '[' => {
                let Some(&c) = candidate.first() else {
                    return false;
                };
                let (matched, rest) = match_class(&pattern[1..], c);
                if !matched {
                    return false;
                }
                pattern = rest;
                candidate = &candidate[1..];
            }
            '\\' if pattern.len() >= 2 => {
                if candidate.first() != Some(&pattern[1]) {
                    return false;
                }
                pattern = &pattern[2..];
                candidate = &candidate[1..];
            }
            literal => {
                if candidate.first() != Some(&literal) {
                    return false;
                }
                pattern = &pattern[1..];
                candidate = &candidate[1..];
            }
        }
    }

    candidate.is_empty()
}

/// Match `c` against the class body following `[`
///
/// Returns the verdict and the pattern remaining after the closing `]`.
fn match_class(mut pattern: &[char], c: char) -> (bool, &[char]) {
    let negated = pattern.first() == Some(&'^');
    if negated {
        pattern = &pattern[1..];
    }

    let mut matched = false;
    loop {
        match pattern {
            [] => break,
            [']', rest @ ..] => {
                pattern = rest;
                break;
            }
            ['\\', escaped, rest @ ..] => {
                matched |= *escaped == c;
                pattern = rest;
            }
            [start, '-', end, rest @ ..] => {
                let (low, high) = if start <= end { (*start, *end) } else { (*end, *start) };
                matched |= (low..=high).contains(&c);
                pattern = rest;
            }
            [literal, rest @ ..] => {
                matched |= *literal == c;
                pattern = rest;
            }
        }
    }

    (matched != negated, pattern)
}
