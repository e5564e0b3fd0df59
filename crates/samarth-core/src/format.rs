//! Number formatting for answer text.

/// Round to a whole number and group thousands with commas:
/// `1234567.6` → `"1,234,568"`.
pub fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rainfall rounded to whole millimetres, e.g. `"952 mm"`.
pub fn millimetres(value: f64) -> String {
    format!("{value:.0} mm")
}

/// Comma-separated list, e.g. `"Rice, Maize, Sugarcane"`.
pub fn list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
