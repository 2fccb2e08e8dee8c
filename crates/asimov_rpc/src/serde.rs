//! Helper utilities for serde

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeSeq};

/// Helper module for (de)serializing a `u64` from/to its quantity encoding.
pub mod u64 {
    use super::{Deserialize, Deserializer, Serializer};
    use crate::quantity;

    /// Deserializes a quantity string into a `u64`.
    pub fn deserialize<'de, DeserializerT>(d: DeserializerT) -> Result<u64, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        quantity::decode_u64(&value).map_err(serde::de::Error::custom)
    }

    /// Serializes a `u64` as a quantity string.
    pub fn serialize<SerializerT>(
        value: &u64,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        s.serialize_str(&quantity::encode_u64(*value))
    }
}

/// Helper module for (de)serializing an `Option<u64>` from/to its quantity
/// encoding, where absence is the JSON `null`.
pub mod optional_u64 {
    use super::{Deserialize, Deserializer, Serializer};
    use crate::quantity;

    /// Deserializes a nullable quantity string into an `Option<u64>`.
    pub fn deserialize<'de, DeserializerT>(
        d: DeserializerT,
    ) -> Result<Option<u64>, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        Option::<String>::deserialize(d)?
            .map(|value| quantity::decode_u64(&value).map_err(serde::de::Error::custom))
            .transpose()
    }

    /// Serializes an `Option<u64>` as a nullable quantity string.
    pub fn serialize<SerializerT>(
        value: &Option<u64>,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        match value {
            Some(value) => s.serialize_str(&quantity::encode_u64(*value)),
            None => s.serialize_none(),
        }
    }
}

/// Helper module for (de)serializing `[]` into `()`.
pub mod empty_params {
    use super::{Deserialize, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Helper function for deserializing `[]` into `()`.
    pub fn deserialize<'de, DeserializerT>(d: DeserializerT) -> Result<(), DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        let seq = Option::<Vec<()>>::deserialize(d)?.unwrap_or_default();
        if !seq.is_empty() {
            return Err(serde::de::Error::custom(format!(
                "expected params sequence with length 0 but got {}",
                seq.len()
            )));
        }
        Ok(())
    }

    /// Helper function for serializing `()` into `[]`.
    pub fn serialize<SerializerT, T>(
        _val: &T,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
        T: Serialize,
    {
        let seq = s.serialize_seq(Some(0))?;
        seq.end()
    }
}

/// Helper module for (de)serializing from/to a single value to/from a
/// sequence.
pub mod sequence {
    use serde::de::DeserializeOwned;

    use super::{Deserialize, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Helper function for deserializing a single value from a sequence.
    pub fn deserialize<'de, T, DeserializerT>(d: DeserializerT) -> Result<T, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let mut seq = Vec::<T>::deserialize(d)?;
        if seq.len() != 1 {
            return Err(serde::de::Error::custom(format!(
                "expected params sequence with length 1 but got {}",
                seq.len()
            )));
        }
        Ok(seq.remove(0))
    }

    /// Helper function for serializing a single value into a sequence.
    pub fn serialize<SerializerT, T>(
        val: &T,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
        T: Serialize,
    {
        let mut seq = s.serialize_seq(Some(1))?;
        seq.serialize_element(val)?;
        seq.end()
    }
}
