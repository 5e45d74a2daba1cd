use core::fmt::Debug;

use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Asserts that the value serializes to the given string.
#[track_caller]
pub fn test_string_serialization<T>(value: T, expected: &str)
where
    T: Serialize,
{
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{expected}\"")
    );
}

/// Asserts that the given string deserializes to the value.
#[track_caller]
pub fn test_string_deserialization<T>(value: &str, expected: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    test_deserialization(&format!("\"{value}\""), expected);
}

/// Asserts that the given JSON deserializes to the value.
#[track_caller]
pub fn test_deserialization<T>(value: &str, expected: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    pretty_assertions::assert_eq!(serde_json::from_str::<T>(value).unwrap(), expected);
}
