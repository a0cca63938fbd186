//! `serde` support: an [`AvlTree`] serializes as a map in ascending key
//! order and deserializes by repeated insertion.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::avl::AvlTree;

impl<K, V, C> Serialize for AvlTree<K, V, C>
where
    K: Serialize,
    V: Serialize,
    C: Fn(&K, &K) -> i32,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct AvlTreeVisitor<K, V> {
    marker: PhantomData<(K, V)>,
}

impl<'de, K, V> Visitor<'de> for AvlTreeVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = AvlTree<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tree = AvlTree::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        // Later duplicates overwrite earlier ones.
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

impl<'de, K, V> Deserialize<'de> for AvlTree<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AvlTreeVisitor {
            marker: PhantomData,
        })
    }
}
