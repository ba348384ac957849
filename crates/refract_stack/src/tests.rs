use super::ensure_sufficient_stack;

/// A nested array-of-array chain, the shape that recursion over type graphs
/// walks one level at a time.
enum Nested {
    Leaf,
    Array(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut ty = Nested::Leaf;
    for _ in 0..depth {
        ty = Nested::Array(Box::new(ty));
    }
    ty
}

fn dimensions(ty: &Nested) -> usize {
    ensure_sufficient_stack(|| match ty {
        Nested::Leaf => 0,
        Nested::Array(inner) => dimensions(inner) + 1,
    })
}

#[test]
fn shallow_walk_counts_levels() {
    assert_eq!(dimensions(&build(3)), 3);
}

#[test]
fn deep_walk_does_not_overflow() {
    let ty = build(200_000);
    assert_eq!(dimensions(&ty), 200_000);
    // Drop iteratively so the test itself does not recurse through Box drops.
    let mut cur = ty;
    while let Nested::Array(inner) = cur {
        cur = *inner;
    }
}

#[test]
fn passes_results_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("absent"));
    assert_eq!(result, Err("absent"));
}
