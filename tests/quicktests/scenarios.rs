use bst::{Tree, TraversalError, TraversalOrder};

fn walk<T: Copy>(tree: &Tree<T>, order: TraversalOrder) -> Vec<T> {
    let mut traversal = tree.traverse(order);
    let mut values = Vec::new();
    while traversal.has_next(tree).unwrap() {
        values.push(*traversal.advance(tree).unwrap());
    }
    values
}

#[test]
fn ascending_letters_form_a_right_chain() {
    let mut tree = Tree::new();
    for letter in 'A'..='L' {
        assert!(tree.add(letter));
    }

    assert_eq!(tree.size(), 12);
    assert!(!tree.is_empty());
    assert!(tree.contains(&'A'));
    assert_eq!(tree.height(), 12);

    let pre_order: String = walk(&tree, TraversalOrder::PreOrder)
        .iter()
        .map(|letter| format!("{} ", letter))
        .collect();
    assert_eq!(pre_order, "A B C D E F G H I J K L ");

    // In a right chain every order but post-order matches insertion order.
    let letters: Vec<_> = ('A'..='L').collect();
    assert_eq!(walk(&tree, TraversalOrder::InOrder), letters);
    assert_eq!(walk(&tree, TraversalOrder::LevelOrder), letters);
    let reversed: Vec<_> = letters.iter().rev().copied().collect();
    assert_eq!(walk(&tree, TraversalOrder::PostOrder), reversed);
}

#[test]
fn removing_a_node_with_two_children_promotes_its_successor() {
    let mut tree = Tree::new();
    for value in [5, 3, 8, 1, 4, 7, 9] {
        tree.add(value);
    }

    assert!(tree.remove(&3));
    assert_eq!(walk(&tree, TraversalOrder::InOrder), [1, 4, 5, 7, 8, 9]);
    assert!(!tree.contains(&3));
    assert_eq!(tree.size(), 6);
    // 4 took 3's place under the root.
    assert_eq!(walk(&tree, TraversalOrder::PreOrder), [5, 4, 1, 8, 7, 9]);
}

#[test]
fn empty_tree() {
    let mut tree: Tree<&str> = Tree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(!tree.remove(&"anything"));
    assert_eq!(tree.take(&"anything"), None);
    assert!(walk(&tree, TraversalOrder::LevelOrder).is_empty());
}

#[test]
fn removing_the_only_value_empties_the_tree() {
    let mut tree = Tree::new();
    tree.add("only");

    assert!(tree.remove(&"only"));
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn modifying_mid_walk_is_detected() {
    let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    let mut traversal = tree.traverse(TraversalOrder::InOrder);
    assert_eq!(traversal.advance(&tree), Ok(&3));

    tree.remove(&8);

    assert_eq!(
        traversal.has_next(&tree),
        Err(TraversalError::ConcurrentModification)
    );
    assert_eq!(
        traversal.advance(&tree),
        Err(TraversalError::ConcurrentModification)
    );
    // A new traversal picks up the current state.
    assert_eq!(walk(&tree, TraversalOrder::InOrder), [3, 5]);
}

#[test]
fn traversals_cannot_remove() {
    let tree: Tree<_> = [1].into_iter().collect();
    let mut traversal = tree.traverse(TraversalOrder::PreOrder);

    assert_eq!(traversal.remove(), Err(TraversalError::Unsupported));
    assert_eq!(tree.size(), 1);
}

#[test]
fn borrowing_iterators() {
    let tree: Tree<_> = [20, 10, 30, 25].into_iter().collect();

    let ascending: Vec<_> = (&tree).into_iter().copied().collect();
    assert_eq!(ascending, [10, 20, 25, 30]);
    assert_eq!(tree.min(), Some(&10));
    assert_eq!(tree.max(), Some(&30));

    let levels: Vec<_> = tree
        .iter_order(TraversalOrder::LevelOrder)
        .copied()
        .collect();
    assert_eq!(levels, [20, 10, 30, 25]);
}
