use unbalanced_bst::{Node, Tree};

/// Recursive post-order used as a reference for the stack based one.
fn post_order_reference(node: Option<&Node<i8>>, out: &mut Vec<i8>) {
    if let Some(node) = node {
        post_order_reference(node.left(), out);
        post_order_reference(node.right(), out);
        out.push(*node.value());
    }
}

/// Recursive pre-order used as a reference for the stack based one.
fn pre_order_reference(node: Option<&Node<i8>>, out: &mut Vec<i8>) {
    if let Some(node) = node {
        out.push(*node.value());
        pre_order_reference(node.left(), out);
        pre_order_reference(node.right(), out);
    }
}

quickcheck::quickcheck! {
    fn post_ordered_matches_recursive_walk(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut expected = Vec::new();
        post_order_reference(tree.root(), &mut expected);

        tree.post_ordered() == expected
    }
}

quickcheck::quickcheck! {
    fn pre_ordered_matches_recursive_walk(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut expected = Vec::new();
        pre_order_reference(tree.root(), &mut expected);

        tree.pre_ordered() == expected
    }
}

quickcheck::quickcheck! {
    fn root_is_last_in_post_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.post_ordered().last() == tree.root().map(Node::value)
    }
}

#[test]
fn concrete_post_order() {
    let tree: Tree<_> = vec![4, 2, 5, 1, 3].into_iter().collect();

    assert_eq!(tree.post_ordered(), vec![1, 3, 2, 5, 4]);
}

#[test]
fn concrete_in_order() {
    let tree: Tree<_> = vec![5, 4, 6, 7, 3].into_iter().collect();

    assert_eq!(tree.to_array(), vec![3, 4, 5, 6, 7]);
    assert_eq!(tree.sort(), vec![3, 4, 5, 6, 7]);
}
