// nesting far deeper than the call stack could handle recursively

use multivector::{MultiVector, Node};

const LEVELS: usize = 100_000;

/// `[0, [1, [2, ... [LEVELS - 1]]]]`
fn deep(levels: usize) -> MultiVector<usize> {
    let mut mv = MultiVector::new();
    mv.push(levels - 1);
    for level in (0..levels - 1).rev() {
        let mut outer = MultiVector::with_capacity(2);
        outer.push(level);
        outer.push_branch(mv);
        mv = outer;
    }
    mv
}

#[test]
fn test_deep_drop() {
    let mv = deep(LEVELS);
    drop(mv);
}

#[test]
fn test_deep_traversal() {
    let mv = deep(LEVELS);
    assert_eq!(mv.len(), 2);
    assert_eq!(mv.linear_len(), LEVELS);
    assert_eq!(mv.depth(), LEVELS - 1);
    assert!(mv.linear().copied().eq(0..LEVELS));
    assert_eq!(mv.find_if(|v| *v == LEVELS - 1), Some(LEVELS - 1));
    let path = mv.find_path_if(|v| *v == LEVELS - 1).unwrap();
    assert_eq!(path.depth(), LEVELS);
    assert_eq!(mv.get_path(&path), Some(&Node::Leaf(LEVELS - 1)));
}

#[test]
fn test_deep_clone_and_compare() {
    let mv = deep(LEVELS);
    let copy = mv.clone();
    assert_eq!(copy, mv);
    assert_eq!(copy.cmp(&mv), std::cmp::Ordering::Equal);

    let mut other = deep(LEVELS);
    if let Some(last) = other.linear_mut().last() {
        *last += 1;
    }
    assert_ne!(other, mv);
    assert!(mv < other);

    let state = ahash::RandomState::with_seeds(1, 2, 3, 4);
    assert_eq!(state.hash_one(&mv), state.hash_one(&copy));
}

#[test]
fn test_deep_display() {
    let rendered = deep(LEVELS).to_string();
    assert!(rendered.starts_with("[0, [1, [2, "));
    assert!(rendered.ends_with("]]]"));
    assert_eq!(rendered.matches('[').count(), LEVELS);
    assert_eq!(rendered.matches(']').count(), LEVELS);
}

#[test]
fn test_deep_flatten_and_generate() {
    let mut mv = deep(LEVELS);
    mv.flatten();
    assert_eq!(mv.len(), LEVELS);
    assert_eq!(mv.depth(), 0);

    let template = deep(LEVELS);
    let mut next = 0;
    let generated = MultiVector::generate_like(&template, || {
        next += 1;
        next
    });
    assert_eq!(generated.linear_len(), LEVELS);
    assert_eq!(generated.depth(), LEVELS - 1);

    let shape = vec![1; 10_000];
    let nested: MultiVector<u8> = MultiVector::generate_nested(&shape, || 7);
    assert_eq!(nested.depth(), 9_999);
    assert_eq!(nested.linear_len(), 1);
}

#[test]
fn test_deep_into_linear() {
    let total: usize = deep(LEVELS).into_linear().sum();
    assert_eq!(total, (0..LEVELS).sum());
}

#[cfg(feature = "serde")]
#[test]
fn test_deep_serialize_is_error() {
    let result = serde_json::to_string(&deep(LEVELS));
    assert!(result.is_err());

    let shallow = deep(50);
    let json = serde_json::to_string(&shallow).unwrap();
    let back: MultiVector<usize> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shallow);
}
