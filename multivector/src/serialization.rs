// A multivector serializes as nested sequences: `[1, [2, 3], 4]` in JSON.
// Deserializing reads every nested sequence as a branch and anything else as
// a leaf, so leaves that serialize as sequences themselves don't round-trip.
// This requires a self-describing format.
//
// serde recurses once per nesting level, so serialization stops with an error
// past MAX_DEPTH nested sequences instead of exhausting the call stack.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::container::MultiVector;
use crate::node::Node;

/// Nested sequences allowed, the outermost included. serde_json refuses to
/// read anything deeper, so whatever serializes can be read back.
const MAX_DEPTH: usize = 127;

/// A multivector being serialized at `depth` nested sequences.
struct Bounded<'a, T> {
    multivector: &'a MultiVector<T>,
    depth: usize,
}

impl<T: Serialize> Serialize for Bounded<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.depth > MAX_DEPTH {
            return Err(S::Error::custom("multivector nested too deeply"));
        }
        let mut seq = serializer.serialize_seq(Some(self.multivector.nodes.len()))?;
        for node in &self.multivector.nodes {
            match node {
                Node::Leaf(value) => seq.serialize_element(value)?,
                Node::Branch(branch) => seq.serialize_element(&Bounded {
                    multivector: branch,
                    depth: self.depth + 1,
                })?,
            }
        }
        seq.end()
    }
}

impl<T: Serialize> Serialize for MultiVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Bounded {
            multivector: self,
            depth: 1,
        }
        .serialize(serializer)
    }
}

impl<T: Serialize> Serialize for Node<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(value) => value.serialize(serializer),
            Node::Branch(branch) => branch.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MultiVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(MultiVectorVisitor(PhantomData))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Node<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor(PhantomData))
    }
}

struct MultiVectorVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for MultiVectorVisitor<T> {
    type Value = MultiVector<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a nested sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut nodes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(node) = seq.next_element::<Node<T>>()? {
            nodes.push(node);
        }
        Ok(MultiVector::from_nodes(nodes))
    }
}

struct NodeVisitor<T>(PhantomData<T>);

impl<T> NodeVisitor<T> {
    fn leaf<'de, D>(deserializer: D) -> Result<Node<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Node::Leaf)
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for NodeVisitor<T> {
    type Value = Node<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a leaf value or a nested sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        MultiVectorVisitor(PhantomData)
            .visit_seq(seq)
            .map(Node::Branch)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        Self::leaf(de::value::BorrowedStrDeserializer::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Self::leaf(v.into_deserializer())
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Self::leaf(de::value::BytesDeserializer::new(v))
    }

    fn visit_borrowed_bytes<E: de::Error>(self, v: &'de [u8]) -> Result<Self::Value, E> {
        Self::leaf(de::value::BorrowedBytesDeserializer::new(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Self::leaf(de::value::BytesDeserializer::new(&v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Self::leaf(().into_deserializer())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Self::leaf(().into_deserializer())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Self::leaf(deserializer)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Self::leaf(de::value::MapAccessDeserializer::new(map))
    }
}
