/// Format a whole-dollar amount as US currency with thousands separators
/// (e.g., "$1,234", "-$5").
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Turn a stored cover reference into a path or URL.
///
/// References starting with `http`, `./` or `/` are used verbatim; anything
/// else is a bare filename inside `asset_dir`.
pub fn resolve_asset_reference(reference: &str, asset_dir: &str) -> String {
    if reference.starts_with("http") || reference.starts_with("./") || reference.starts_with('/')
    {
        reference.to_string()
    } else {
        format!("./{}/{}", asset_dir, reference)
    }
}
