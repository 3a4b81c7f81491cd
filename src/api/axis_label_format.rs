use chrono::{DateTime, Utc};

use super::axis_config::{AxisLabelLocale, AxisLabelPolicy};

/// Integer text when `value` is whole, otherwise one decimal.
#[must_use]
pub fn default_axis_label(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // `-0.0` formats as "-0"; normalize it.
        let whole = if value == 0.0 { 0.0 } else { value };
        return format!("{whole:.0}");
    }
    format!("{value:.1}")
}

#[must_use]
pub fn format_axis_label(value: f64, policy: AxisLabelPolicy, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    match policy {
        AxisLabelPolicy::Default => localize(default_axis_label(value), locale),
        AxisLabelPolicy::FixedDecimals { precision } => {
            format_axis_decimal(value, usize::from(precision), locale)
        }
        AxisLabelPolicy::Percent { precision } => {
            let text = format_axis_decimal(value * 100.0, usize::from(precision), locale);
            format!("{text}%")
        }
        AxisLabelPolicy::UnixTime { show_time } => {
            let Some(time) = DateTime::<Utc>::from_timestamp(value.round() as i64, 0) else {
                return format_axis_decimal(value, 2, locale);
            };
            let pattern = match (locale, show_time) {
                (AxisLabelLocale::EnUs, false) => "%Y-%m-%d",
                (AxisLabelLocale::EnUs, true) => "%Y-%m-%d %H:%M",
                (AxisLabelLocale::EsEs, false) => "%d/%m/%Y",
                (AxisLabelLocale::EsEs, true) => "%d/%m/%Y %H:%M",
            };
            time.format(pattern).to_string()
        }
    }
}

fn format_axis_decimal(value: f64, precision: usize, locale: AxisLabelLocale) -> String {
    localize(format!("{value:.precision$}"), locale)
}

fn localize(text: String, locale: AxisLabelLocale) -> String {
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::EsEs => text.replace('.', ","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_label_drops_fraction_for_whole_values() {
        assert_eq!(default_axis_label(4.0), "4");
        assert_eq!(default_axis_label(-0.0), "0");
        assert_eq!(default_axis_label(2.34), "2.3");
        assert_eq!(default_axis_label(0.5), "0.5");
    }

    #[test]
    fn unix_time_policy_formats_utc_dates() {
        let label = format_axis_label(
            1_700_000_000.0,
            AxisLabelPolicy::UnixTime { show_time: false },
            AxisLabelLocale::EnUs,
        );
        assert_eq!(label, "2023-11-14");
    }

    #[test]
    fn spanish_locale_uses_decimal_comma() {
        let label = format_axis_label(
            1.5,
            AxisLabelPolicy::FixedDecimals { precision: 2 },
            AxisLabelLocale::EsEs,
        );
        assert_eq!(label, "1,50");
    }
}
