use bst::{Tree, TraversalError, TraversalOrder};

use std::collections::{BTreeSet, HashSet};

/// Whether the values are in strictly ascending order.
fn strictly_ascending<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn size_counts_distinct_values(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.into_iter().collect();

        tree.size() == distinct.len() && tree.is_empty() == distinct.is_empty()
    }
}

quickcheck::quickcheck! {
    fn add_reports_novelty(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut seen = HashSet::new();

        xs.into_iter().all(|x| tree.add(x) == seen.insert(x))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.add(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present: BTreeSet<_> = xs.into_iter().collect();

        for remove in &removes {
            let size = tree.size();
            let removed = tree.remove(remove);
            if removed != still_present.remove(remove) {
                return false;
            }
            if tree.size() != size - usize::from(removed) {
                return false;
            }
        }

        removes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.iter().eq(still_present.iter())
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_after_removals(xs: Vec<i16>, removes: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        for remove in &removes {
            tree.remove(remove);
        }

        let walked: Vec<_> = tree.iter_order(TraversalOrder::InOrder).collect();
        walked.len() == tree.size() && strictly_ascending(&walked)
    }
}

quickcheck::quickcheck! {
    fn pre_order_starts_at_root_and_post_order_ends_there(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let pre = tree.iter_order(TraversalOrder::PreOrder).next();
        let post = tree.iter_order(TraversalOrder::PostOrder).last();
        let level = tree.iter_order(TraversalOrder::LevelOrder).next();

        pre == xs.first() && post == xs.first() && level == xs.first()
    }
}

quickcheck::quickcheck! {
    fn sorted_input_builds_a_chain(n: u8) -> bool {
        let tree: Tree<_> = (0..n).collect();

        tree.height() == usize::from(n) && tree.size() == usize::from(n)
    }
}

quickcheck::quickcheck! {
    fn mutation_makes_traversals_stale(xs: Vec<i8>, extra: i8, steps: u8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();

        TraversalOrder::ALL.iter().all(|order| {
            let mut traversal = tree.traverse(*order);
            for _ in 0..usize::from(steps).min(tree.size()) {
                if traversal.advance(&tree).is_err() {
                    return false;
                }
            }

            let changed = if tree.contains(&extra) {
                tree.remove(&extra)
            } else {
                tree.add(extra)
            };

            changed
                && traversal.has_next(&tree) == Err(TraversalError::ConcurrentModification)
                && traversal.advance(&tree) == Err(TraversalError::ConcurrentModification)
        })
    }
}
