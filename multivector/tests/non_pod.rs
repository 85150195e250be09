// values with their own clone and drop behavior
use std::cell::Cell;
use std::rc::Rc;

use multivector::{multivector, MultiVector};

#[derive(Debug)]
struct Tracked {
    name: String,
    clones: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(name: &str, clones: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            name: name.to_string(),
            clones: clones.clone(),
            drops: drops.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            name: self.name.clone(),
            clones: self.clones.clone(),
            drops: self.drops.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[test]
fn test_non_pod_strings() {
    let mv = multivector![
        "alpha".to_string(),
        ["beta".to_string(), ["gamma".to_string()]],
        "delta".to_string()
    ];
    let copy = mv.clone();
    assert_eq!(copy, mv);
    let joined = mv.linear().cloned().collect::<Vec<_>>().join(" ");
    assert_eq!(joined, "alpha beta gamma delta");
    assert_eq!(mv.find_if(|s| s.starts_with('g')), Some(2));
}

#[test]
fn test_non_pod_clone_is_deep() {
    let clones = Rc::new(Cell::new(0));
    let drops = Rc::new(Cell::new(0));
    let mut mv = MultiVector::new();
    mv.push(Tracked::new("a", &clones, &drops));
    mv.push_empty_branch().push(Tracked::new("b", &clones, &drops));

    let copy = mv.clone();
    assert_eq!(clones.get(), 2);
    assert_eq!(copy, mv);

    drop(copy);
    assert_eq!(drops.get(), 2);
    drop(mv);
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_non_pod_move_does_not_clone() {
    let clones = Rc::new(Cell::new(0));
    let drops = Rc::new(Cell::new(0));
    let mut source = MultiVector::new();
    source.push(Tracked::new("a", &clones, &drops));
    source.push_empty_branch().push(Tracked::new("b", &clones, &drops));

    let target = source.take();
    assert!(source.is_empty());
    assert_eq!(clones.get(), 0);
    assert_eq!(drops.get(), 0);
    assert_eq!(target.linear_len(), 2);
    drop(target);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_non_pod_into_linear_moves_values() {
    let clones = Rc::new(Cell::new(0));
    let drops = Rc::new(Cell::new(0));
    let mut mv = MultiVector::new();
    mv.push(Tracked::new("a", &clones, &drops));
    mv.push_empty_branch().push(Tracked::new("b", &clones, &drops));
    mv.push(Tracked::new("c", &clones, &drops));

    let names: Vec<String> = mv.into_linear().map(|t| t.name.clone()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(clones.get(), 0);
    assert_eq!(drops.get(), 3);
}

#[test]
fn test_non_pod_partially_consumed_into_linear_drops_the_rest() {
    let clones = Rc::new(Cell::new(0));
    let drops = Rc::new(Cell::new(0));
    let mut mv = MultiVector::new();
    mv.push(Tracked::new("a", &clones, &drops));
    let branch = mv.push_empty_branch();
    branch.push(Tracked::new("b", &clones, &drops));
    branch.push_empty_branch().push(Tracked::new("c", &clones, &drops));

    let mut iter = mv.into_linear();
    let first = iter.next();
    assert_eq!(first.map(|t| t.name.clone()), Some("a".to_string()));
    drop(iter);
    assert_eq!(drops.get(), 3);
}
