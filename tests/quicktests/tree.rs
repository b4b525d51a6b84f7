use std::collections::HashSet;

use unbalanced_bst::{Node, Tree};

use crate::sorted;

/// Walks down from the root checking that every left child is at most its
/// parent and every right child is strictly greater than it.
fn children_ordered(tree: &Tree<i8>) -> bool {
    tree.post_order().count() == tree.len()
        && tree.root().map_or(true, |root| {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                if let Some(left) = node.left() {
                    if left.value() > node.value() {
                        return false;
                    }
                    stack.push(left);
                }
                if let Some(right) = node.right() {
                    if right.value() <= node.value() {
                        return false;
                    }
                    stack.push(right);
                }
            }
            true
        })
}

quickcheck::quickcheck! {
    fn ordering_invariant(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        children_ordered(&tree)
    }
}

quickcheck::quickcheck! {
    fn to_array_matches_sort(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.to_array() == tree.sort() && tree.sort() == sorted(&xs)
    }
}

quickcheck::quickcheck! {
    fn min_max(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let reference = sorted(&xs);

        tree.min() == reference.first() && tree.max() == reference.last()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn duplicate_goes_left(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.push(x);
        tree.push(x);

        // The first `x` found on the search path got the second one pushed
        // somewhere into its left subtree.
        let found = tree.find(&x).expect("just pushed");
        found.left().map_or(false, |left| {
            let mut stack = vec![left];
            let mut seen = false;
            while let Some(node) = stack.pop() {
                seen |= node.value() == &x;
                stack.extend(node.left());
                stack.extend(node.right());
            }
            seen
        })
    }
}

quickcheck::quickcheck! {
    fn len_counts_duplicates(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.len() == xs.len() && tree.is_empty() == xs.is_empty()
    }
}
