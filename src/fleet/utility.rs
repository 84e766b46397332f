/// Computes the arithmetic mean of `projection` applied to every item.
/// Returns 0.0 for empty input.
pub fn mean_by<T>(items: &[T], projection: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(projection).sum::<f64>() / items.len() as f64
}
