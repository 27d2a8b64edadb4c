use serde::{Deserialize, Serialize};

/// Tag attached to a classified number. Serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Negative,
    Armstrong,
    Odd,
}

/// Classification of a single integer.
///
/// `fun_fact` stays empty until the fetcher result is merged in with
/// [`ClassificationResult::with_fun_fact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl ClassificationResult {
    pub fn with_fun_fact(self, fun_fact: String) -> Self {
        Self { fun_fact, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_properties_lowercase() {
        let result = ClassificationResult {
            number: -371,
            is_prime: false,
            is_perfect: false,
            properties: vec![Property::Negative, Property::Armstrong, Property::Odd],
            digit_sum: 11,
            fun_fact: String::new(),
        }
        .with_fun_fact("371 is an Armstrong number.".to_string());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["number"], -371);
        assert_eq!(
            json["properties"],
            serde_json::json!(["negative", "armstrong", "odd"])
        );
        assert_eq!(json["fun_fact"], "371 is an Armstrong number.");
    }
}
