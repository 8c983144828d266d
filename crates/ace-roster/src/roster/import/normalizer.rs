/// Parses a currency-formatted amount such as `"$12,500,000"`.
///
/// Quotes, dollar signs, thousands separators and whitespace are stripped.
/// Returns `None` for empty or non-numeric input.
pub fn parse_currency(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, '"' | '$' | ',') && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Amount used by the loader: unparseable input counts as zero.
pub(crate) fn amount_or_zero(value: Option<&str>) -> f64 {
    value.and_then(parse_currency).unwrap_or(0.0)
}

pub(crate) fn clean_text(value: Option<&str>) -> String {
    value
        .map(|text| text.replace(['\u{feff}', '\u{200b}'], "").trim().to_string())
        .unwrap_or_default()
}

/// Grouping key for a team: drops multi-team markers (`2TM`, `3tm`, ...) and
/// the whitespace before them, then trims.
pub(crate) fn normalize_team(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut cleaned = String::with_capacity(value.len());
    let mut index = 0;

    while index < chars.len() {
        if chars[index].is_ascii_digit() {
            let digits_end = chars[index..]
                .iter()
                .position(|ch| !ch.is_ascii_digit())
                .map_or(chars.len(), |offset| index + offset);
            let is_marker = digits_end + 1 < chars.len()
                && chars[digits_end].eq_ignore_ascii_case(&'t')
                && chars[digits_end + 1].eq_ignore_ascii_case(&'m');

            if is_marker {
                cleaned.truncate(cleaned.trim_end().len());
                index = digits_end + 2;
            } else {
                cleaned.extend(&chars[index..digits_end]);
                index = digits_end;
            }
            continue;
        }

        cleaned.push(chars[index]);
        index += 1;
    }

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_strips_symbols_and_separators() {
        assert_eq!(parse_currency("$12,500,000"), Some(12_500_000.0));
        assert_eq!(parse_currency("\" $ 1,000.50 \""), Some(1_000.5));
        assert_eq!(parse_currency("48787676"), Some(48_787_676.0));
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("  $ "), None);
        assert_eq!(parse_currency("N/A"), None);
    }

    #[test]
    fn missing_amounts_fall_back_to_zero() {
        assert_eq!(amount_or_zero(None), 0.0);
        assert_eq!(amount_or_zero(Some("TBD")), 0.0);
        assert_eq!(amount_or_zero(Some("$2,000")), 2_000.0);
    }

    #[test]
    fn clean_text_trims_and_drops_invisible_marks() {
        assert_eq!(clean_text(Some("\u{feff}  LeBron James ")), "LeBron James");
        assert_eq!(clean_text(None), "");
    }

    #[test]
    fn team_markers_are_removed() {
        assert_eq!(normalize_team("LAL"), "LAL");
        assert_eq!(normalize_team("2TM"), "");
        assert_eq!(normalize_team(" BRK 2TM "), "BRK");
        assert_eq!(normalize_team("3tm"), "");
        assert_eq!(normalize_team("PHI 12TM"), "PHI");
        assert_eq!(normalize_team("76ers"), "76ers");
        assert_eq!(normalize_team("   "), "");
    }
}
