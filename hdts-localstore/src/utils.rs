use heapless::String as HeaplessString;
use std::error::Error;
use std::str::FromStr;

/// Converts a caller-supplied string into a required bounded field.
pub fn to_bounded<const N: usize>(
    value: &str,
    field_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for field '{field_name}' is too long (max {N} chars)").into())
}

/// Converts a caller-supplied string into an optional bounded field.
pub fn to_optional_bounded<const N: usize>(
    value: Option<&str>,
    field_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    value
        .map(HeaplessString::from_str)
        .transpose()
        .map_err(|_| format!("Value for field '{field_name}' is too long (max {N} chars)").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_within_the_bound_convert() {
        let bounded: HeaplessString<10> = to_bounded("hello", "subject").unwrap();
        assert_eq!(bounded.as_str(), "hello");
    }

    #[test]
    fn overlong_values_name_the_field_and_bound() {
        let err = to_bounded::<5>("too long for five", "subject").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value for field 'subject' is too long (max 5 chars)"
        );
    }

    #[test]
    fn optional_none_passes_through() {
        let bounded: Option<HeaplessString<5>> = to_optional_bounded(None, "department").unwrap();
        assert!(bounded.is_none());
    }
}
