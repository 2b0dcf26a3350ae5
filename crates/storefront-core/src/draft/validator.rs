//! Required-field validation for the add-product form.
//!
//! Validation is a pure function of the draft. There are no cross-field or
//! range rules: a discounted price above the original price, or a negative
//! piece count, is accepted.

use storefront_types::product::DraftProduct;
use storefront_types::validation::{DraftField, ValidationErrors};

/// Inline message shown under a field that fails its rule.
pub fn message_for(field: DraftField) -> &'static str {
    match field {
        DraftField::Image => "Please upload a photo.",
        DraftField::Name => "Please enter a product name.",
        DraftField::Brand => "Please select a brand.",
        DraftField::Categories => "Please select at least one category.",
        DraftField::OriginalPrice => "Please enter a valid original price.",
        DraftField::DiscountedPrice => "Please enter a valid discounted price.",
        DraftField::PieceCount => "Please enter a valid number of pieces.",
        DraftField::Condition => "Please select a product condition.",
    }
}

/// Check every required field and collect the failures.
///
/// An empty result means the draft may be persisted.
pub fn validate(draft: &DraftProduct) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in DraftField::ALL {
        let ok = match field {
            DraftField::Image => draft.image.as_deref().is_some_and(|uri| !uri.is_empty()),
            DraftField::Name => !draft.name.is_empty(),
            DraftField::Brand => !draft.brand.is_empty(),
            DraftField::Categories => !draft.categories.is_empty(),
            DraftField::OriginalPrice => is_numeric(&draft.original_price),
            DraftField::DiscountedPrice => is_numeric(&draft.discounted_price),
            DraftField::PieceCount => is_numeric(&draft.piece_count),
            DraftField::Condition => !draft.condition.is_empty(),
        };
        if !ok {
            errors.insert(field, message_for(field));
        }
    }

    errors
}

/// Whether typed text is a number under lenient form-input coercion.
///
/// Accepts surrounding whitespace, decimal and exponent notation, `0x`/`0o`/`0b`
/// integer literals and signed `Infinity`. Empty text is not a number, but
/// whitespace-only text coerces to zero and is.
pub fn is_numeric(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }

    let (signed, body) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if body == "Infinity" {
        return true;
    }

    // Prefixed literals take no sign.
    if let Some((radix, digits)) = radix_literal(body) {
        return !signed && !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    let starts_well = body
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    let charset_ok = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));

    starts_well && charset_ok && body.parse::<f64>().is_ok()
}

fn radix_literal(body: &str) -> Option<(u32, &str)> {
    let prefix = body.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &body[2..]))
}
