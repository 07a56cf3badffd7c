use super::tokenizer::parse_value;

/// An abbreviation split into its name part and raw value part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Split {
    pub name: String,
    /// Raw value tokens joined with single spaces; not normalized.
    pub value: String,
}

/// Splits an abbreviation at the first position where a value starts.
///
/// A value starts at the first digit, `.`, `#`, `$`, or at a `-` directly
/// followed by a digit or `.`. Everything before it is the name. Without
/// such a position the whole input is the name and the value is empty.
///
/// # Examples
///
/// ```
/// use cssabbr::parser::split;
///
/// let s = split("padding-10--10");
/// assert_eq!(s.name, "padding");
/// assert_eq!(s.value, "-10 -10");
///
/// let s = split("margin-a-i");
/// assert_eq!(s.name, "margin-a-i");
/// assert!(s.value.is_empty());
/// ```
pub fn split(abbr: &str) -> Split {
    let (name, raw) = split_at_value(abbr);
    Split {
        name: name.to_string(),
        value: parse_value(raw).join(" "),
    }
}

/// Like [`split`], but returns the untokenized value slice.
pub fn split_at_value(abbr: &str) -> (&str, &str) {
    match value_start(abbr) {
        Some(at) => {
            let (name, raw) = abbr.split_at(at);
            log::trace!("split {abbr:?} at {at}: name={name:?} raw={raw:?}");
            (name, raw)
        }
        None => (abbr, ""),
    }
}

fn value_start(abbr: &str) -> Option<usize> {
    let mut chars = abbr.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '#' | '$' | '.' => return Some(i),
            c if c.is_ascii_digit() => return Some(i),
            '-' => {
                if let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        return Some(i);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(abbr: &str) -> String {
        let s = split(abbr);
        format!("{}: {}", s.name, s.value)
    }

    #[test]
    fn test_splits_at_first_value_character() {
        assert_eq!(joined("padding10"), "padding: 10");
        assert_eq!(joined("c#333"), "c: #333");
        assert_eq!(joined("mr$size"), "mr: $size");
        assert_eq!(joined("padding.5"), "padding: .5");
    }

    #[test]
    fn test_signed_value_starts_at_dash() {
        assert_eq!(joined("padding-10-10"), "padding: -10 10");
        assert_eq!(joined("padding-.5"), "padding: -.5");
    }

    #[test]
    fn test_keyword_dashes_stay_in_name() {
        assert_eq!(joined("margin-a"), "margin-a: ");
        assert_eq!(joined("pos-a"), "pos-a: ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split(""), Split::default());
    }
}
