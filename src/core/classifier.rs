use crate::core::predicates::{
    digit_sum_magnitude, is_armstrong_magnitude, is_perfect_magnitude, is_prime_magnitude,
};
use crate::domain::model::{ClassificationResult, Property};

/// Classifies `n` without touching the network.
///
/// Negative inputs are evaluated on their magnitude and tagged with
/// [`Property::Negative`], which is always listed first. Property order is
/// `negative`, `armstrong`, `odd`.
pub fn classify(n: i64) -> ClassificationResult {
    let magnitude = n.unsigned_abs();

    let mut properties = Vec::with_capacity(3);
    if n < 0 {
        properties.push(Property::Negative);
    }
    if is_armstrong_magnitude(magnitude) {
        properties.push(Property::Armstrong);
    }
    if n % 2 != 0 {
        properties.push(Property::Odd);
    }

    ClassificationResult {
        number: n,
        is_prime: is_prime_magnitude(magnitude),
        is_perfect: is_perfect_magnitude(magnitude),
        properties,
        digit_sum: digit_sum_magnitude(magnitude),
        fun_fact: String::new(),
    }
}
