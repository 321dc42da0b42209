//! Форматирование цен для карточек товаров

/// Formats `value` with exactly `decimals` fraction digits.
///
/// Rounds half away from zero on the shortest decimal representation of the
/// value, so `19.995` becomes `"20.00"` rather than `"19.99"`.
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_fixed;
/// assert_eq!(format_fixed(1000.5, 2), "1000.50");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Display для f64 никогда не использует экспоненту
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .map_or(false, |d| *d >= b'5');

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let negative = value < 0.0 && digits.iter().any(|d| *d != 0);

    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Price label shown on a product card: `$` and two decimals.
pub fn format_price(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}
