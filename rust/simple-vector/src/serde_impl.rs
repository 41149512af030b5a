//! `serde` support: a `SimpleVector` serializes as a plain sequence.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SimpleVector;
use crate::reserve::reserve;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SimpleVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}

struct SeqVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SeqVisitor<T> {
    type Value = SimpleVector<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // Size hints come from untrusted input; cap the upfront reservation.
        let hint = seq.size_hint().unwrap_or(0).min(4096);
        let mut v =
            SimpleVector::with_reserve(reserve(hint)).map_err(<A::Error as de::Error>::custom)?;
        while let Some(value) = seq.next_element()? {
            v.push_back(value)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(v)
    }
}
