// File: src/core/keypad.rs

/// The standard telephone keypad: three or four letters printed on each of
/// the digits 2-9, nothing on 0 and 1. Every letter a-z belongs to exactly
/// one digit. The table is fixed, so lookups are plain matches with no state
/// behind them.
pub struct KeypadMap;

impl KeypadMap {
    pub fn new() -> Self {
        Self
    }

    /// Letters printed on a digit's key. Empty for '0' and '1', and for
    /// anything that is not a keypad digit.
    pub fn letters(&self, digit: char) -> &'static [char] {
        match digit {
            '2' => &['a', 'b', 'c'],
            '3' => &['d', 'e', 'f'],
            '4' => &['g', 'h', 'i'],
            '5' => &['j', 'k', 'l'],
            '6' => &['m', 'n', 'o'],
            '7' => &['p', 'q', 'r', 's'],
            '8' => &['t', 'u', 'v'],
            '9' => &['w', 'x', 'y', 'z'],
            _ => &[],
        }
    }

    /// Reverse lookup over letters only; numerals and punctuation have no
    /// digit.
    pub fn digit_for_letter(&self, c: char) -> Option<char> {
        match c.to_ascii_lowercase() {
            'a'..='c' => Some('2'),
            'd'..='f' => Some('3'),
            'g'..='i' => Some('4'),
            'j'..='l' => Some('5'),
            'm'..='o' => Some('6'),
            'p'..='s' => Some('7'),
            't'..='v' => Some('8'),
            'w'..='z' => Some('9'),
            _ => None,
        }
    }

    /// Reverse lookup where a numeral keeps its own digit, so a number
    /// embedded in a search term dials itself.
    pub fn digit_for_char(&self, c: char) -> Option<char> {
        if c.is_ascii_digit() {
            return Some(c);
        }
        self.digit_for_letter(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_assignments() {
        let keypad = KeypadMap::new();
        assert_eq!(keypad.letters('0'), &[] as &[char]);
        assert_eq!(keypad.letters('1'), &[] as &[char]);
        assert_eq!(keypad.letters('2'), &['a', 'b', 'c']);
        assert_eq!(keypad.letters('3'), &['d', 'e', 'f']);
        assert_eq!(keypad.letters('4'), &['g', 'h', 'i']);
        assert_eq!(keypad.letters('5'), &['j', 'k', 'l']);
        assert_eq!(keypad.letters('6'), &['m', 'n', 'o']);
        assert_eq!(keypad.letters('7'), &['p', 'q', 'r', 's']);
        assert_eq!(keypad.letters('8'), &['t', 'u', 'v']);
        assert_eq!(keypad.letters('9'), &['w', 'x', 'y', 'z']);
    }

    #[test]
    fn test_every_letter_on_exactly_one_key() {
        let keypad = KeypadMap::new();
        for letter in 'a'..='z' {
            let owners: Vec<char> = ('0'..='9')
                .filter(|&d| keypad.letters(d).contains(&letter))
                .collect();
            assert_eq!(owners.len(), 1, "letter {:?} owned by {:?}", letter, owners);
            assert_eq!(keypad.digit_for_letter(letter), Some(owners[0]));
        }
    }

    #[test]
    fn test_reverse_lookup_is_case_insensitive() {
        let keypad = KeypadMap::new();
        assert_eq!(keypad.digit_for_letter('P'), Some('7'));
        assert_eq!(keypad.digit_for_letter('p'), Some('7'));
    }

    #[test]
    fn test_reverse_lookup_variants_differ_on_numerals() {
        let keypad = KeypadMap::new();
        assert_eq!(keypad.digit_for_char('5'), Some('5'));
        assert_eq!(keypad.digit_for_letter('5'), None);
        assert_eq!(keypad.digit_for_char('.'), None);
        assert_eq!(keypad.digit_for_letter(' '), None);
    }
}
