//! Record form of an [`Outcome`]: `{"data": .., "error": .., "success": ..}`.
//!
//! The absent side is written as `null`. Reading a record back rejects
//! anything that breaks the one-side-populated rule.
//!
//! Data that itself serializes to `null` cannot be told apart from missing
//! data. For `T = Option<Option<_>>`, `Success { data: Some(None) }` is written
//! as `null` and reads back as `Success { data: None }`.

use serde::de::{self, Deserialize, Deserializer, IntoDeserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Outcome;

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Outcome", 3)?;
        record.serialize_field("data", &self.data())?;
        record.serialize_field("error", &self.error())?;
        record.serialize_field("success", &self.is_success())?;
        record.end()
    }
}

#[derive(serde::Deserialize)]
struct OutcomeRecord<T, E> {
    data: Option<T>,
    error: Option<E>,
    success: bool,
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = OutcomeRecord::<T, E>::deserialize(deserializer)?;

        match (record.success, record.data, record.error) {
            (true, _, Some(_)) => Err(de::Error::custom(
                "successful outcome must not carry an error",
            )),
            (true, Some(data), None) => Ok(Outcome::Success { data }),
            // `null` data is a real value for unit-like types
            (true, None, None) => from_null::<T, D::Error>()
                .map(|data| Outcome::Success { data })
                .map_err(|_| de::Error::custom("successful outcome is missing data")),
            (false, Some(_), _) => Err(de::Error::custom("failed outcome must not carry data")),
            (false, None, Some(error)) => Ok(Outcome::Failure { error }),
            (false, None, None) => from_null::<E, D::Error>()
                .map(|error| Outcome::Failure { error })
                .map_err(|_| de::Error::custom("failed outcome is missing error")),
        }
    }
}

fn from_null<'de, V, Err>() -> Result<V, Err>
where
    V: Deserialize<'de>,
    Err: de::Error,
{
    V::deserialize(<() as IntoDeserializer<'de, Err>>::into_deserializer(()))
}
