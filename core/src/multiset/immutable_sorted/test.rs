use super::*;
use rand::random;
use ruc::*;

#[test]
fn ascending_groups() {
    let m = ImmutableSortedMultiset::of(["pear", "fig", "pear", "apple"]);
    assert_eq!(
        vec!["apple", "fig", "pear", "pear"],
        m.iter().copied().collect::<Vec<_>>()
    );
    assert_eq!(2, m.count("pear"));
    assert_eq!(0, m.count("kiwi"));
    assert_eq!(Some((&"apple", 1)), m.first());
    assert_eq!(Some((&"pear", 2)), m.last());
}

#[test]
fn builder_counts() {
    let mut b = ImmutableSortedMultiset::builder();
    pnk!(b.add_copies(10u64, 2));
    b.add(3).add(10);
    pnk!(b.set_count(7, 4));
    let m = b.build();
    assert_eq!(
        vec![(3, 1), (7, 4), (10, 3)],
        m.entries().map(|(v, n)| (*v, n)).collect::<Vec<_>>()
    );
    assert_eq!(8, m.len());
    assert_eq!(8, m.iter().len());
}

#[test]
fn matches_tree() {
    let items = (0..500).map(|_| random::<u8>() % 40).collect::<Vec<_>>();
    let t: TreeMultiset<u8> = items.iter().copied().collect();
    let m = ImmutableSortedMultiset::of(items);
    assert_eq!(t.len(), m.len());
    assert_eq!(
        t.iter().collect::<Vec<_>>(),
        m.iter().collect::<Vec<_>>()
    );
    assert_eq!(m, ImmutableSortedMultiset::from(t));
}

#[test]
fn empty() {
    let m = ImmutableSortedMultiset::<i32>::new();
    assert!(m.is_empty());
    assert_eq!(None, m.first());
    assert_eq!(None, m.last());
    assert_eq!(m, ImmutableSortedMultiset::default());
}
