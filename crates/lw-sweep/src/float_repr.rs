//! Serde representation of force values that may be infinite or NaN.
//!
//! Finite values are plain numbers. Non-finite ones are written as the
//! strings `"NaN"`, `"inf"` and `"-inf"`, since JSON has no literal for them.

use lw_core::numeric::Real;
use serde::{Deserialize, Deserializer, Serializer, de};

const NAN: &str = "NaN";
const INF: &str = "inf";
const NEG_INF: &str = "-inf";

pub fn serialize<S: Serializer>(value: &Real, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value == Real::INFINITY {
        serializer.serialize_str(INF)
    } else if *value == Real::NEG_INFINITY {
        serializer.serialize_str(NEG_INF)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(Real),
    Text(String),
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Real, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(v) => Ok(v),
        Repr::Text(text) => match text.as_str() {
            NAN => Ok(Real::NAN),
            INF => Ok(Real::INFINITY),
            NEG_INF => Ok(Real::NEG_INFINITY),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a number, \"NaN\", \"inf\" or \"-inf\"",
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapped {
        #[serde(with = "super")]
        v: f64,
    }

    fn roundtrip(v: f64) -> (String, f64) {
        let json = serde_json::to_string(&Wrapped { v }).unwrap();
        let back: Wrapped = serde_json::from_str(&json).unwrap();
        (json, back.v)
    }

    #[test]
    fn finite_values_stay_numbers() {
        let (json, back) = roundtrip(-22.572478025623265);
        assert_eq!(json, r#"{"v":-22.572478025623265}"#);
        assert_eq!(back, -22.572478025623265);
    }

    #[test]
    fn non_finite_values_survive() {
        let (json, back) = roundtrip(f64::NAN);
        assert_eq!(json, r#"{"v":"NaN"}"#);
        assert!(back.is_nan());
        assert_eq!(roundtrip(f64::INFINITY).1, f64::INFINITY);
        assert_eq!(roundtrip(f64::NEG_INFINITY).1, f64::NEG_INFINITY);
    }

    #[test]
    fn unknown_text_is_rejected() {
        assert!(serde_json::from_str::<Wrapped>(r#"{"v":"huge"}"#).is_err());
        assert!(serde_json::from_str::<Wrapped>(r#"{"v":null}"#).is_err());
    }
}
