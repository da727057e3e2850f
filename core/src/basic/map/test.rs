use super::*;
use ruc::*;

fn sample() -> ImmutableMap<String, String> {
    let mut b = ImmutableMap::builder();
    b.put("key1".to_owned(), "value1".to_owned())
        .put("key2".to_owned(), "value2".to_owned())
        .put("key0".to_owned(), "value0".to_owned());
    pnk!(b.build())
}

#[test]
fn insertion_order() {
    let m = sample();
    assert_eq!(3, m.len());
    assert_eq!(
        vec!["key1", "key2", "key0"],
        m.keys().map(|k| k.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(Some("value0"), m.values().last().map(|v| v.as_str()));
    assert_eq!(Some(&"value2".to_owned()), m.get("key2"));
    assert!(m.contains_key("key1"));
    assert!(!m.contains_key("key3"));
    assert!(m.contains_value(&"value1".to_owned()));
}

#[test]
fn duplicate_keys() {
    let mut b = ImmutableMap::builder();
    b.put(1, "a").put(2, "b").put(1, "c");
    assert!(b.build().is_err());

    assert!(ImmutableMap::of([(1, 1), (1, 1)]).is_err());
    assert!(ImmutableMap::try_from(vec![(1, 1), (2, 2)]).is_ok());

    let mut b = ImmutableMap::builder();
    b.put(1, "a").put(2, "b").put(1, "c");
    let m = b.build_keeping_last();
    assert_eq!(
        vec![(&1, &"c"), (&2, &"b")],
        m.iter().collect::<Vec<_>>()
    );
}

#[test]
fn equality_ignores_order() {
    let a = pnk!(ImmutableMap::of([("x", 1), ("y", 2)]));
    let b = pnk!(ImmutableMap::of([("y", 2), ("x", 1)]));
    let c = pnk!(ImmutableMap::of([("y", 3), ("x", 1)]));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, ImmutableMap::new());
}

#[test]
fn iter_is_exact() {
    let m = sample();
    let mut it = m.iter();
    assert_eq!(3, it.len());
    it.next();
    assert_eq!(2, it.len());
    assert_eq!(Some((&"key0".to_owned(), &"value0".to_owned())), it.next_back());
    assert!(m.is_the_same_instance(&m.clone()));
}
