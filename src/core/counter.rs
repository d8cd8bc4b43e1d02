use super::constants::COUNTER_DURATION_MS;

/// Cubic ease-out over `t` in [0, 1].
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Integer parse with `parseInt` leniency: surrounding whitespace, an optional
/// sign, then the leading run of digits. Trailing junk is ignored.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

/// Animates a displayed number from 0 to `target` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    start_ms: f64,
    duration_ms: f64,
}

/// One sampled frame of a counter animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, start_ms: f64) -> Self {
        Self::with_duration(target, start_ms, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: i64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms,
        }
    }

    /// Value to display at `now_ms`. The final frame always lands exactly on
    /// the target.
    pub fn sample(&self, now_ms: f64) -> CounterFrame {
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        let value = (ease_out_cubic(progress) * self.target as f64).round() as i64;
        CounterFrame { value, done: false }
    }
}
