//! Traversal categories.
//!
//! A category is a zero-sized marker published in a trait description. The
//! adaptor does not gate operations on it; the policy decides what is
//! supported. The marker is there so code holding an adaptor type can ask
//! what the description claims.

/// Traversal strength, ordered weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Traversal {
    Forward,
    Bidirectional,
    RandomAccess,
}

/// A category marker type.
pub trait Category {
    const TRAVERSAL: Traversal;
}

/// Single-pass-or-better traversal: dereference, increment, equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ForwardTag;

/// Forward traversal plus decrement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

/// Bidirectional traversal plus constant-time offset, distance and ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

impl Category for ForwardTag {
    const TRAVERSAL: Traversal = Traversal::Forward;
}

impl Category for BidirectionalTag {
    const TRAVERSAL: Traversal = Traversal::Bidirectional;
}

impl Category for RandomAccessTag {
    const TRAVERSAL: Traversal = Traversal::RandomAccess;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_order() {
        assert!(ForwardTag::TRAVERSAL < BidirectionalTag::TRAVERSAL);
        assert!(BidirectionalTag::TRAVERSAL < RandomAccessTag::TRAVERSAL);
    }
}
