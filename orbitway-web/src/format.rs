//! Currency formatting for price display.

/// Format a whole-unit price as US dollars, e.g. `$202,400`.
///
/// Uses `Intl.NumberFormat` in the browser; native builds (and any
/// formatting failure) fall back to hand-rolled digit grouping so
/// tests can assert the output.
#[must_use]
pub fn format_price(value: i64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        intl_usd(value).unwrap_or_else(|| grouped_usd(value))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        grouped_usd(value)
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_precision_loss)]
fn intl_usd(value: i64) -> Option<String> {
    use js_sys::{Array, Function, Intl, Object, Reflect};
    use wasm_bindgen::JsValue;

    let options = Object::new();
    Reflect::set(&options, &"style".into(), &"currency".into()).ok()?;
    Reflect::set(&options, &"currency".into(), &"USD".into()).ok()?;
    Reflect::set(&options, &"minimumFractionDigits".into(), &0.into()).ok()?;
    let locales = Array::of1(&JsValue::from_str("en-US"));
    let nf = Intl::NumberFormat::new(&locales, &options);
    let format_fn: Function = nf.format();
    format_fn
        .call1(&nf, &JsValue::from_f64(value as f64))
        .ok()
        .and_then(|v| v.as_string())
}

fn grouped_usd(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn groups_thousands_with_dollar_sign() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1_000), "$1,000");
        assert_eq!(format_price(202_400), "$202,400");
        assert_eq!(format_price(505_000), "$505,000");
        assert_eq!(format_price(1_234_567), "$1,234,567");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_price(-1_500), "-$1,500");
    }
}
