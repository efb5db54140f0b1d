// File: crates/survival-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1-2-5 steps) and tick label formatting.

/// Tick values covering `[start, stop]` with roughly `count` intervals.
/// Steps are 1, 2 or 5 times a power of ten; ticks never fall outside the range.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let mut out: Vec<f64> = (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect();
    if stop < start {
        out.reverse();
    }
    out
}

/// Distance between consecutive ticks produced by [`ticks`] for the same arguments.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_spec(lo, hi, count as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

// Returns (first index, last index, increment). A negative increment means
// "divide by -inc", which keeps small decimal steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    if !(count > 0.0) {
        return None;
    }
    let step = (stop - start) / count;
    if !step.is_finite() || step == 0.0 {
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

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start { i1 += 1; }
        if (i2 as f64) / inc > stop { i2 -= 1; }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start { i1 += 1; }
        if (i2 as f64) * inc > stop { i2 -= 1; }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some((i1, i2, inc))
}

/// Format a tick value with just enough decimals for `step`, grouping thousands.
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = if step > 0.0 && step.is_finite() {
        (-(step.log10() + 1e-9).floor()).max(0.0) as usize
    } else {
        0
    };
    let raw = format!("{:.*}", precision, value);
    // "-0" and "-0.0" read badly on an axis
    let raw = if raw.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        raw.trim_start_matches('-').to_string()
    } else {
        raw
    };
    group_thousands(&raw)
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (int, frac) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac}")
}
