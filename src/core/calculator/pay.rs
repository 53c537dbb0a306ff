/// Pay for `minutes` of work at `rate` cents per hour, rounded half-up to the cent.
pub fn compute_amount(minutes: i64, rate: i64) -> i64 {
    let num = minutes * rate;
    if num >= 0 {
        (num + 30) / 60
    } else {
        (num - 30) / 60
    }
}
