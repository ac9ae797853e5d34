use super::PRINT_PRECISION;

/// Format a number the way PRINT shows it: the shorter of fixed or
/// scientific notation with `PRINT_PRECISION` significant digits and
/// trailing zeros removed.
pub fn format_number(n: f64) -> String {
    general(n, PRINT_PRECISION)
}

fn general(n: f64, precision: usize) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(e) => (m, e),
            Err(_) => return sci,
        },
        None => return sci,
    };
    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, n)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(100000.0), "100000");
        assert_eq!(format_number(123456789012345.0), "123456789012345");
        assert_eq!(format_number(1e15), "1e+15");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.333333333333333");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
    }

    #[test]
    fn test_large() {
        assert_eq!(format_number(1e20), "1e+20");
        assert_eq!(format_number(123456789012345678.0), "1.23456789012346e+17");
        assert_eq!(format_number(2.5e300), "2.5e+300");
    }

    #[test]
    fn test_special() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
    }

    fn round_trips(n: f64) -> bool {
        if !n.is_finite() {
            return true;
        }
        match format_number(n).parse::<f64>() {
            // 15 digits round the largest magnitudes past f64::MAX.
            Ok(back) if back.is_infinite() => n.abs() > f64::MAX * (1.0 - 1e-14),
            Ok(back) => (back - n).abs() <= n.abs() * 1e-14,
            Err(_) => false,
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(format_number(f64::MAX), "1.79769313486232e+308");
        assert_eq!(format_number(f64::MIN), "-1.79769313486232e+308");
        assert!(round_trips(f64::MAX));
        assert!(round_trips(f64::MIN));
        assert!(round_trips(f64::MIN_POSITIVE));
    }

    #[quickcheck]
    fn prop_close_round_trip(n: f64) -> bool {
        round_trips(n)
    }
}
