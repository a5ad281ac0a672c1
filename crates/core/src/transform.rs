/// Build the concat string from the alphabetic bucket
///
/// All characters are flattened in token order, reversed, then re-cased by
/// position: even indexes uppercase, odd indexes lowercase.
pub fn transform<S: AsRef<str>>(alphabets: &[S]) -> String {
    let mut chars: Vec<char> = alphabets
        .iter()
        .flat_map(|token| token.as_ref().chars())
        .collect();
    chars.reverse();

    chars
        .into_iter()
        .enumerate()
        .map(|(index, c)| recase(index, c))
        .collect()
}

fn recase(index: usize, c: char) -> String {
    if index % 2 == 0 {
        c.to_uppercase().collect()
    } else {
        c.to_lowercase().collect()
    }
}
