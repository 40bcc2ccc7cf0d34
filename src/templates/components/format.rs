use crate::catalog::Pricing;

/// "$1,500 / month", or "Price unavailable" when pricing didn't decode.
/// Fixed en-US USD formatting, no fraction digits.
pub fn format_pricing(pricing: Option<&Pricing>) -> String {
    match pricing {
        Some(pricing) => format!(
            "{} / {}",
            format_usd(pricing.amount),
            pricing.period.label()
        ),
        None => "Price unavailable".to_string(),
    }
}

pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    if rounded < 0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}

/// Numbers for display: whole values get thousands separators, fractional
/// values (1.5 baths) print as-is.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        group_thousands(value as i64)
    } else {
        format!("{value}")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PricePeriod;

    #[test]
    fn pricing_renders_amount_and_period() {
        let monthly = Pricing {
            amount: 1500.0,
            period: PricePeriod::Monthly,
        };
        assert_eq!(format_pricing(Some(&monthly)), "$1,500 / month");

        let nightly = Pricing {
            amount: 250.0,
            period: PricePeriod::Nightly,
        };
        assert_eq!(format_pricing(Some(&nightly)), "$250 / night");

        let weekly = Pricing {
            amount: 900.0,
            period: PricePeriod::Other("weekly".into()),
        };
        assert_eq!(format_pricing(Some(&weekly)), "$900 / weekly");
    }

    #[test]
    fn missing_pricing_renders_unavailable() {
        assert_eq!(format_pricing(None), "Price unavailable");
    }

    #[test]
    fn usd_rounds_to_whole_dollars_with_separators() {
        assert_eq!(format_usd(1234567.49), "$1,234,567");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn numbers_group_thousands_and_keep_fractions() {
        assert_eq!(format_number(1200.0), "1,200");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.0), "2");
    }
}
