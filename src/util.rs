//! Miscellaneous utilities.

/// Insert `separator` between every group of three digits, counted from the right.
///
/// `digits` is expected to contain only ASCII digits.
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + (len / 3) * separator.len_utf8());
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::group_digits;

    #[test]
    fn short_numbers_are_untouched() {
        assert_eq!(group_digits("", ' '), "");
        assert_eq!(group_digits("7", ' '), "7");
        assert_eq!(group_digits("999", ' '), "999");
    }

    #[test]
    fn groups_of_three() {
        assert_eq!(group_digits("1024", ' '), "1 024");
        assert_eq!(group_digits("123456", '.'), "123.456");
        assert_eq!(group_digits("1048576", '\u{202f}'), "1\u{202f}048\u{202f}576");
    }
}
