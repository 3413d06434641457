//! Digit-string normalisation and display masks.
//!
//! # Design
//!
//! These are pure, stateless transformations between raw keyboard input and
//! canonical digit strings, and between canonical digit strings and display
//! masks (CEP `12345-678`, CNPJ `00.000.000/0000-00`, phone `(11) 91234-5678`).
//! No I/O, no error conditions — every function always returns a string.
//!
//! The `mask_*` family is applied to in-flight user input (truncates and
//! re-formats partial values, idempotent). The `format_*` family only
//! produces the masked form when the value is already complete; otherwise it
//! returns the input unchanged, which is what stored records expect.

/// Number of digits in a complete CEP (Brazilian postal code).
pub const CEP_LEN: usize = 8;

/// Strip every non-digit character. No length limit is enforced here.
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a CEP for display while the user is still typing.
///
/// Sanitizes, truncates to 8 digits, and inserts the separator after the
/// 5th digit once more than 5 digits are present. Idempotent:
/// `mask_cep(mask_cep(x)) == mask_cep(x)`.
pub fn mask_cep(raw: &str) -> String {
    let digits: String = sanitize_digits(raw).chars().take(CEP_LEN).collect();

    if digits.len() <= 5 {
        return digits;
    }

    format!("{}-{}", &digits[..5], &digits[5..])
}

/// Format a CEP known to be complete.
///
/// Produces `12345-678` only when exactly 8 digits survive sanitization;
/// any other value is returned unchanged.
pub fn format_cep(value: &str) -> String {
    let digits = sanitize_digits(value);

    if digits.len() == CEP_LEN {
        return format!("{}-{}", &digits[..5], &digits[5..]);
    }

    value.to_string()
}

/// Format a CNPJ as `00.000.000/0000-00` when exactly 14 digits are present;
/// otherwise returns the input unchanged.
pub fn format_cnpj(value: &str) -> String {
    let digits = sanitize_digits(value);

    if digits.len() == 14 {
        return format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        );
    }

    value.to_string()
}

/// Mask a phone number for display while the user is still typing.
///
/// Caps at 11 digits and grows through the partial shapes `(11`, `(11) 9123`,
/// `(11) 1234-5678`, `(11) 91234-5678`.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = sanitize_digits(raw).chars().take(11).collect();

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Format a phone number known to be complete (10 or 11 digits);
/// other lengths are returned unchanged.
pub fn format_phone(value: &str) -> String {
    let digits = sanitize_digits(value);

    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => value.to_string(),
    }
}
