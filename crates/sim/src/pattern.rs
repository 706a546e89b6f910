//! Shell-style wildcard matching for actor type ids.

/// Returns `true` if `text` matches `pattern`.
///
/// `*` matches any run of characters (including none), `?` matches exactly
/// one character; everything else matches literally. `"*vehicle.*"` matches
/// `"vehicle.tesla.model3"` but not `"walker.pedestrian.0001"`.
pub fn matches_pattern(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text index it is anchored to
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, anchor)) => {
                    // Let the last star swallow one more character
                    p = star + 1;
                    t = anchor + 1;
                    backtrack = Some((star, anchor + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
