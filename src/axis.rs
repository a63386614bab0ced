//! Axis tics and tic label formatting.

use crate::error::{PlotError, Result};

/// Multiples of a power of ten accepted as tic intervals.
const NICE_MULTIPLES: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Major tics along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTics {
    first: f64,
    delta: f64,
    count: usize,
}

impl AxisTics {
    /// Compute major tics for `[min, max]` with at most about `max_count`
    /// intervals.
    pub fn new(min: f64, max: f64, max_count: usize) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let span = max - min;
        if !span.is_finite() || span <= 0.0 {
            return Self {
                first: min,
                delta: 1.0,
                count: usize::from(min.is_finite()),
            };
        }

        let delta = nice_interval(span, max_count.max(1));
        let tolerance = delta * 1e-9;
        let first = (min / delta - 1e-9).ceil() * delta;
        let count = ((max + tolerance - first) / delta).floor() as usize + 1;
        Self {
            first,
            delta,
            count,
        }
    }

    /// Value of the first tic.
    pub fn first(&self) -> f64 {
        self.first
    }

    /// Interval between tics.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Number of tics.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Iterate over tic values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| {
            let v = self.first + i as f64 * self.delta;
            // Snap values like 1e-17 to exactly zero
            if v.abs() < self.delta * 1e-9 {
                0.0
            } else {
                v
            }
        })
    }

    /// Number of decimals needed to tell tics apart.
    pub fn decimals(&self) -> usize {
        let mut decimals = 0;
        let mut scaled = self.delta;
        while decimals < 10 && (scaled - scaled.round()).abs() > 1e-6 * scaled.abs().max(1.0) {
            scaled *= 10.0;
            decimals += 1;
        }
        decimals
    }
}

/// Smallest "nice" interval that splits `span` into at most `max_count` parts.
fn nice_interval(span: f64, max_count: usize) -> f64 {
    let raw = span / max_count as f64;
    let base = 10f64.powi(raw.log10().floor() as i32);
    NICE_MULTIPLES
        .iter()
        .map(|m| m * base)
        .find(|&d| d >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * base)
}

/// Default tic label for a value, using `decimals` fractional digits.
///
/// Very large or very small magnitudes switch to exponent notation.
pub fn format_tic(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "?".to_string();
    }
    let abs_val = value.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-4..1e6).contains(&abs_val) {
        format!("{:.1e}", value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Conversion in a printf-like axis format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Fixed,
    Exponent,
    General,
    Integer,
}

/// A printf-like tic label format such as `"%1.3f"` or `"%.2e s"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisFormat {
    prefix: String,
    suffix: String,
    left_align: bool,
    plus_sign: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    conversion: Conversion,
}

impl AxisFormat {
    /// Parse a format holding exactly one `%[flags][width][.precision]conv`
    /// directive, where `conv` is one of `f`, `e`, `g` or `d`. `%%` is a
    /// literal percent sign.
    pub fn parse(input: &str) -> Result<Self> {
        let err = |reason: &str| PlotError::format_parse(input, reason);
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut directive = None;
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                if directive.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                if directive.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }
            if directive.is_some() {
                return Err(err("more than one conversion"));
            }

            let mut parsed = AxisFormat {
                prefix: String::new(),
                suffix: String::new(),
                left_align: false,
                plus_sign: false,
                zero_pad: false,
                width: 0,
                precision: None,
                conversion: Conversion::General,
            };
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => parsed.left_align = true,
                    '+' => parsed.plus_sign = true,
                    '0' => parsed.zero_pad = true,
                    ' ' | '#' => {},
                    _ => break,
                }
                chars.next();
            }
            parsed.width = take_number(&mut chars).unwrap_or(0);
            if chars.peek() == Some(&'.') {
                chars.next();
                parsed.precision = Some(take_number(&mut chars).unwrap_or(0));
            }
            parsed.conversion = match chars.next() {
                Some('f') | Some('F') => Conversion::Fixed,
                Some('e') | Some('E') => Conversion::Exponent,
                Some('g') | Some('G') => Conversion::General,
                Some('d') | Some('i') => Conversion::Integer,
                Some(other) => return Err(err(&format!("unknown conversion '{}'", other))),
                None => return Err(err("missing conversion")),
            };
            directive = Some(parsed);
        }

        let mut parsed = directive.ok_or_else(|| err("no conversion"))?;
        parsed.prefix = prefix;
        parsed.suffix = suffix;
        Ok(parsed)
    }

    /// Format a tic value.
    pub fn format(&self, value: f64) -> String {
        let body = match self.conversion {
            Conversion::Fixed => format!("{:.*}", self.precision.unwrap_or(6), value),
            Conversion::Exponent => format!("{:.*e}", self.precision.unwrap_or(6), value),
            Conversion::Integer => format!("{}", value.round() as i64),
            Conversion::General => general(value, self.precision.unwrap_or(6)),
        };
        let body = if self.plus_sign && value >= 0.0 {
            format!("+{}", body)
        } else {
            body
        };
        let padded = if body.len() >= self.width {
            body
        } else if self.left_align {
            format!("{:<width$}", body, width = self.width)
        } else if self.zero_pad {
            let (sign, digits) = match body.strip_prefix(|c: char| c == '-' || c == '+') {
                Some(rest) => (&body[..1], rest),
                None => ("", body.as_str()),
            };
            format!(
                "{}{:0>width$}",
                sign,
                digits,
                width = self.width - sign.len()
            )
        } else {
            format!("{:>width$}", body, width = self.width)
        };
        format!("{}{}{}", self.prefix, padded, self.suffix)
    }
}

fn take_number<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

/// `%g`-style formatting: shortest of fixed and exponent, trailing zeros trimmed.
fn general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= precision as i32 {
        let s = format!("{:.*e}", precision - 1, value);
        match s.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_zeros(mantissa), exp),
            None => s,
        }
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value))
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tics_use_nice_intervals() {
        let tics = AxisTics::new(0.0, 10.0, 5);
        assert_eq!(tics.delta(), 2.0);
        assert_eq!(tics.values().collect::<Vec<_>>(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let tics = AxisTics::new(-0.3, 0.7, 4);
        assert_eq!(tics.delta(), 0.25);
        assert_eq!(tics.count(), 4);
        assert_eq!(tics.decimals(), 2);
    }

    #[test]
    fn tics_start_inside_range() {
        let tics = AxisTics::new(0.5, 3.5, 3);
        assert_eq!(tics.first(), 1.0);
        assert_eq!(tics.values().last(), Some(3.0));
    }

    #[test]
    fn degenerate_range_has_single_tic() {
        let tics = AxisTics::new(2.0, 2.0, 5);
        assert_eq!(tics.count(), 1);
        assert_eq!(tics.first(), 2.0);
    }

    #[test]
    fn default_labels() {
        assert_eq!(format_tic(0.0, 2), "0");
        assert_eq!(format_tic(1.5, 1), "1.5");
        assert_eq!(format_tic(2.0, 0), "2");
        assert_eq!(format_tic(2.5e7, 0), "2.5e7");
    }

    #[test]
    fn printf_like_formats() {
        assert_eq!(AxisFormat::parse("%1.3f").unwrap().format(2.5), "2.500");
        assert_eq!(AxisFormat::parse("%6.1f").unwrap().format(-2.5), "  -2.5");
        assert_eq!(AxisFormat::parse("%05.1f").unwrap().format(-2.5), "-02.5");
        assert_eq!(AxisFormat::parse("%d s").unwrap().format(3.7), "4 s");
        assert_eq!(AxisFormat::parse("%.2e").unwrap().format(1234.0), "1.23e3");
        assert_eq!(AxisFormat::parse("%g%%").unwrap().format(0.5), "0.5%");
        assert_eq!(AxisFormat::parse("%+.0f").unwrap().format(3.0), "+3");
    }

    #[test]
    fn bad_formats_are_rejected() {
        assert!(AxisFormat::parse("value").is_err());
        assert!(AxisFormat::parse("%q").is_err());
        assert!(AxisFormat::parse("%f %f").is_err());
        assert!(AxisFormat::parse("%1.").is_err());
    }
}
