use multivector::{multivector, MultiVector};

#[test]
fn test_moving_leaves_source_empty() {
    let mut source = multivector![1, [2, [3]], 4];
    let expected = source.clone();
    let moved = source.take();
    assert_eq!(moved, expected);
    assert!(source.is_empty());
    assert_eq!(source, MultiVector::new());

    // the moved-from multivector is fully usable
    source.push(9);
    assert_eq!(source, multivector![9]);
    assert_eq!(moved, expected);
}

#[test]
fn test_moving_with_mem_take_and_replace() {
    let mut a = multivector![1, [2]];
    let b = std::mem::take(&mut a);
    assert!(a.is_empty());
    assert_eq!(b, multivector![1, [2]]);

    let old = std::mem::replace(&mut a, multivector![[3]]);
    assert!(old.is_empty());
    assert_eq!(a, multivector![[3]]);
}

#[test]
fn test_moving_branch_between_trees() {
    let mut a = multivector![1, [2, 3]];
    let mut b = multivector![4];
    let branch = a.remove(1).unwrap();
    b.push_node(branch);
    assert_eq!(a, multivector![1]);
    assert_eq!(b, multivector![4, [2, 3]]);

    let mut nested = b.branch_mut(1).map(MultiVector::take).unwrap();
    nested.push(5);
    assert_eq!(b, multivector![4, []]);
    assert_eq!(nested, multivector![2, 3, 5]);
}

#[test]
fn test_moving_is_not_copying() {
    let mut a = multivector![1, [2]];
    let b = a.take();
    a.push(100);
    // b is independent of a
    assert_eq!(b, multivector![1, [2]]);
    let mut c = b.clone();
    c.push(3);
    assert_ne!(b, c);
}
