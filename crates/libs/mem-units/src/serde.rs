//! Serialization and deserialization of quantities.

use std::fmt;

use serde::de::{self, Unexpected};

use crate::{Bandwidth, BitSize, Size};

/// Auxiliary macro for implementing `Serialize` and `Deserialize`.
macro_rules! impl_serde {
    ($($name:ident, $expecting:literal;)*) => {
        $(
            impl serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_i64(self.as_bits())
                }
            }

            impl<'de> serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    struct Visitor;

                    impl de::Visitor<'_> for Visitor {
                        type Value = $name;

                        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                            f.write_str($expecting)
                        }

                        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                        where
                            E: de::Error,
                        {
                            $name::parse_str(v)
                                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
                        }

                        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
                        where
                            E: de::Error,
                        {
                            Ok($name::from_bits(v))
                        }

                        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                        where
                            E: de::Error,
                        {
                            i64::try_from(v)
                                .map($name::from_bits)
                                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
                        }
                    }

                    deserializer.deserialize_any(Visitor)
                }
            }
        )*
    };
}

impl_serde! {
    Size, "size in bits or size string";
    BitSize, "bit size in bits or bit size string";
    Bandwidth, "bandwidth in bits per second or bandwidth string";
}
