//! Numeric primitives shared by the number kinds.

pub fn gcd_unsigned(mut a: u64, mut b: u64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        a = b % a;
        b = c;
    }
    b
}

pub fn gcd_unsigned_u128(mut a: u128, mut b: u128) -> u128 {
    let mut c;
    while a != 0 {
        c = a;
        a = b % a;
        b = c;
    }
    b
}

/// Compute the least common multiple of `a` and `b`.
/// The result is computed in 128 bits, so it cannot overflow.
/// `lcm(0, b)` and `lcm(a, 0)` are `0`.
pub fn lcm_unsigned(a: u64, b: u64) -> u128 {
    let g = gcd_unsigned(a, b);
    if g == 0 {
        0
    } else {
        (a / g) as u128 * b as u128
    }
}

/// The real `k`-th root of a non-negative `x`.
pub fn nth_root(x: f64, k: u32) -> f64 {
    match k {
        1 => x,
        2 => x.sqrt(),
        3 => x.cbrt(),
        _ => x.powf(1. / k as f64),
    }
}

/// Round `x` to `decimals` decimal digits, with halves rounded away from zero.
pub fn round_to_decimals(x: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return x.round();
    }

    let scale = 10f64.powi(decimals.min(f64::MAX_10_EXP as u32) as i32);
    let scaled = x * scale;
    if !scaled.is_finite() {
        // the value has no digits at this precision left to round
        return x;
    }
    scaled.round() / scale
}

/// Returns `true` iff `x` rounded to `decimals` digits equals `x` rounded to an integer.
pub fn is_near_integer(x: f64, decimals: u32) -> bool {
    round_to_decimals(x, decimals) == x.round()
}
