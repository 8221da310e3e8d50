// Formatting and timer helpers

use rust_decimal::{Decimal, RoundingStrategy};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Amount rounded to cents, no grouping: `1854.00`.
pub fn format_amount(amount: Decimal) -> String {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // scale is now <= 2, so this only pads trailing zeros
    cents.rescale(2);
    cents.to_string()
}

/// Display price with comma thousands separators: `€1,854.00`.
pub fn format_price(amount: Decimal) -> String {
    let plain = format_amount(amount);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}€{grouped}.{frac_part}")
}

/// Run `f` once after `ms` milliseconds (used for the short pause between a
/// card being highlighted and the next screen).
pub fn after_ms(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        f();
        return;
    };
    let cb = Closure::once_into_js(f);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref::<js_sys::Function>(), ms)
        .is_err()
    {
        log::warn!(target: "ui", "setTimeout failed");
    }
}
