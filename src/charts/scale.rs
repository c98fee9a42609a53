//! Linear scales and axis ticks.

use crate::config::ScaleConfig;
use crate::data::{CensusData, ChosenAxis};

/// Domain used when a field has no finite values.
const FALLBACK_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Continuous mapping from a data domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Map a data value to a pixel position. A degenerate domain maps
    /// everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Interpolate domain and range towards `other`; `t` in [0, 1].
    pub fn lerp(&self, other: &LinearScale, t: f64) -> LinearScale {
        if t >= 1.0 {
            return *other;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        LinearScale {
            domain: (mix(self.domain.0, other.domain.0), mix(self.domain.1, other.domain.1)),
            range: (mix(self.range.0, other.range.0), mix(self.range.1, other.range.1)),
        }
    }

    /// Round-number ticks inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        if i2 < i1 {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = (i1..=i2)
            .map(|k| {
                let k = k as f64;
                if inc < 0.0 {
                    k / -inc
                } else {
                    k * inc
                }
            })
            .collect();
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Distance between consecutive ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        if count == 0 || start == stop || !start.is_finite() || !stop.is_finite() {
            return 1.0;
        }
        match tick_spec(start, stop, count as f64) {
            Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
            Some((_, _, inc)) => inc,
            None => 1.0,
        }
    }
}

/// Returns (first index, last index, increment). A negative increment
/// means "divide by -inc" to keep decimal ticks exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = (start * scale).round();
        i2 = (stop * scale).round();
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let size = 10f64.powf(power) * factor;
        i1 = (start / size).round();
        i2 = (stop / size).round();
        if i1 * size < start {
            i1 += 1.0;
        }
        if i2 * size > stop {
            i2 -= 1.0;
        }
        inc = size;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1 as i64, i2 as i64, inc))
}

/// Format a tick with as many decimals as the step needs and
/// thousands separators.
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let text = format!("{:.*}", precision, value);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" and "-0.0" read as zero.
    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && frac_part.map_or(true, |f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// X scale for the chosen attribute: domain padded by the configured
/// factors, range `[0, chart_width]`.
pub fn x_scale(
    data: &CensusData,
    axis: ChosenAxis,
    chart_width: f64,
    config: &ScaleConfig,
) -> LinearScale {
    let domain = data
        .extent(|r| axis.value(r))
        .map(|(min, max)| (min * config.x_min_factor, max * config.x_max_factor))
        .unwrap_or(FALLBACK_DOMAIN);
    LinearScale::new(domain, (0.0, chart_width))
}

/// Y scale for obesity: `[min - padding, max]` mapped top-down onto
/// `[chart_height, 0]`.
pub fn y_scale(data: &CensusData, chart_height: f64, config: &ScaleConfig) -> LinearScale {
    let domain = data
        .extent(|r| r.obesity)
        .map(|(min, max)| (min - config.y_padding, max))
        .unwrap_or(FALLBACK_DOMAIN);
    LinearScale::new(domain, (chart_height, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample() -> CensusData {
        CensusData::new(vec![
            record("AA", 10.0, 30.0, 40000.0, 21.0),
            record("BB", 20.0, 40.0, 60000.0, 35.0),
            record("CC", 15.0, 35.0, 50000.0, 28.0),
        ])
    }

    #[test]
    fn map_is_linear_past_the_domain() {
        let scale = LinearScale::new((10.0, 20.0), (0.0, 500.0));
        assert!(close(scale.map(10.0), 0.0));
        assert!(close(scale.map(15.0), 250.0));
        assert!(close(scale.map(22.0), 600.0));
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 300.0));
        assert_eq!(scale.map(5.0), 150.0);
        assert_eq!(scale.map(99.0), 150.0);
    }

    #[test]
    fn x_scale_pads_domain_by_factors() {
        let config = ScaleConfig::default();
        let scale = x_scale(&sample(), ChosenAxis::Poverty, 1020.0, &config);
        let (d0, d1) = scale.domain();
        assert!(close(d0, 9.0));
        assert!(close(d1, 22.0));
        assert!(close(scale.map(d1), 1020.0));

        let scale = x_scale(&sample(), ChosenAxis::Income, 1020.0, &config);
        assert!(close(scale.domain().0, 36000.0));
        assert!(close(scale.domain().1, 66000.0));
    }

    #[test]
    fn y_scale_is_inverted_with_lower_padding() {
        let scale = y_scale(&sample(), 451.0, &ScaleConfig::default());
        assert_eq!(scale.domain(), (20.0, 35.0));
        assert!(close(scale.map(35.0), 0.0));
        assert!(close(scale.map(20.0), 451.0));
    }

    #[test]
    fn empty_data_uses_fallback_domain() {
        let scale = x_scale(&CensusData::default(), ChosenAxis::Age, 100.0, &ScaleConfig::default());
        assert_eq!(scale.domain(), (0.0, 1.0));
    }

    #[test]
    fn ticks_use_round_steps() {
        let scale = LinearScale::new((8.28, 23.65), (0.0, 1.0));
        assert_eq!(scale.ticks(10), vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0]);
        assert_eq!(scale.tick_step(10), 2.0);

        let scale = LinearScale::new((35000.0, 80000.0), (0.0, 1.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&35000.0));
        assert_eq!(ticks.last(), Some(&80000.0));
        assert_eq!(ticks.len(), 10);
    }

    #[test]
    fn decimal_ticks_are_exact() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert!(close(scale.tick_step(5), 0.2));
    }

    #[test]
    fn reversed_domain_gives_descending_ticks() {
        let scale = LinearScale::new((10.0, 0.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn tick_labels_follow_step_precision() {
        assert_eq!(format_tick(45000.0, 5000.0), "45,000");
        assert_eq!(format_tick(1234567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(22.0, 2.0), "22");
        assert_eq!(format_tick(-1500.0, 500.0), "-1,500");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }

    #[test]
    fn lerp_moves_domain_halfway() {
        let a = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        let b = LinearScale::new((10.0, 30.0), (0.0, 100.0));
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.domain(), (5.0, 20.0));
        assert_eq!(a.lerp(&b, 1.0), b);
    }
}
