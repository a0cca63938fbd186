use crate::types::{KvNode, Node};

/// AVL tree node: a [`TreeNode`](crate::TreeNode) plus a balance factor.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// `height(right) - height(left)`; within `-1..=1` between operations.
    pub balance: i8,
}

impl<K, V> AvlNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            balance: 0,
        }
    }
}

impl<K, V> Node for AvlNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for AvlNode<K, V> {
    fn from_entry(key: K, value: V) -> Self {
        Self::new(key, value)
    }

    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.v, value)
    }

    fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

/// Balance-factor access used by the rebalancing code.
pub trait AvlNodeLike: Node {
    fn balance(&self) -> i8;
    fn set_balance(&mut self, balance: i8);
}

impl<K, V> AvlNodeLike for AvlNode<K, V> {
    fn balance(&self) -> i8 {
        self.balance
    }

    fn set_balance(&mut self, balance: i8) {
        self.balance = balance;
    }
}
