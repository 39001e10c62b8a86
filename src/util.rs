pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Fractional minutes, the unit the tutor reports elapsed time in.
pub fn minutes(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}
