//! Number presentation helpers

use std::fmt::Display;

const CHINESE_DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Insert `sep` every `group` digits, counting from the right of the integer part
///
/// Only the leading run of digits is grouped; a sign prefix and anything
/// after it (fraction, unit suffix) are kept as-is. `group == 0` or input
/// without a leading number is returned unchanged.
///
/// ```
/// use handy_core::separator;
///
/// assert_eq!(separator(1234567.891, 3, ","), "1,234,567.891");
/// assert_eq!(separator("-12345678", 4, " "), "-1234 5678");
/// ```
pub fn separator(value: impl Display, group: usize, sep: &str) -> String {
    let text = value.to_string();
    if group == 0 {
        return text;
    }

    let sign_len = if text.starts_with(|c: char| c == '-' || c == '+') { 1 } else { 0 };
    let (sign, unsigned) = text.split_at(sign_len);
    let int_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if int_len == 0 {
        return text;
    }
    let (digits, rest) = unsigned.split_at(int_len);

    let mut out = String::with_capacity(text.len() + (int_len / group) * sep.len());
    out.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (int_len - i) % group == 0 {
            out.push_str(sep);
        }
        out.push(digit);
    }
    out.push_str(rest);
    out
}

/// Spell a number digit by digit with Chinese numerals (`2024` → `二零二四`)
///
/// A minus sign becomes `负` and the decimal point `点`.
pub fn number_to_chinese(num: impl Display) -> String {
    num.to_string()
        .chars()
        .map(|c| match c {
            '0'..='9' => CHINESE_DIGITS[c as usize - '0' as usize],
            '-' => '负',
            '.' => '点',
            other => other,
        })
        .collect()
}
