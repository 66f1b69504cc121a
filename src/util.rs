use std::time::SystemTime;

pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

pub fn time_diff_ms(start: SystemTime, end: SystemTime) -> u64 {
    end.duration_since(start)
        .unwrap_or_default()
        .as_millis() as u64
}
