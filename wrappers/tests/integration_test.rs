use colljson::{
    described, HashMultiset, ImmutableBiMap, ImmutableList, ImmutableMap, ImmutableMultiset,
    ImmutableSet, ImmutableSortedMultiset, ImmutableSortedSet, Jsonb, LinkedHashMultiset,
    TreeMultiset,
};
use ruc::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithList {
    name: String,
    items: ImmutableList<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithSet {
    name: String,
    numbers: ImmutableSet<i32>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithMap {
    name: String,
    properties: ImmutableMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithSortedSet {
    name: String,
    sorted_items: ImmutableSortedSet<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithBiMap {
    name: String,
    bi_mapping: ImmutableBiMap<String, i32>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithMultiset {
    name: String,
    multi_items: ImmutableMultiset<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithSortedMultiset {
    name: String,
    sorted_multi_items: ImmutableSortedMultiset<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithHashMultiset {
    name: String,
    hash_multi_items: HashMultiset<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithLinkedHashMultiset {
    name: String,
    linked_multi_items: LinkedHashMultiset<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithTreeMultiset {
    name: String,
    tree_multi_items: TreeMultiset<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WithOptional {
    name: String,
    #[serde(default)]
    items: Option<ImmutableList<u8>>,
}

described!(
    WithList,
    WithSet,
    WithMap,
    Person,
    WithSortedSet,
    WithBiMap,
    WithMultiset,
    WithSortedMultiset,
    WithHashMultiset,
    WithLinkedHashMultiset,
    WithTreeMultiset,
    WithOptional,
);

fn strings<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items.into_iter().map(|s| s.to_owned()).collect()
}

#[test]
fn immutable_list() {
    let jsonb = Jsonb::new();
    let original = WithList {
        name: "test".to_owned(),
        items: ImmutableList::of(strings(["apple", "banana", "cherry"])),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert_eq!(
        r#"{"name":"test","items":["apple","banana","cherry"]}"#,
        json
    );

    let restored = pnk!(pnk!(jsonb.type_of::<WithList>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(strings(["apple", "banana", "cherry"]), restored.items.to_vec());
}

#[test]
fn immutable_set() {
    let jsonb = Jsonb::new();
    let original = WithSet {
        name: "numbers".to_owned(),
        numbers: ImmutableSet::of([1, 2, 3]),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains("numbers"));
    assert!(json.contains("[1,2,3]"));

    let restored = pnk!(pnk!(jsonb.type_of::<WithSet>()).from_json(&json));
    assert_eq!(original, restored);
    assert!((1..=3).all(|i| restored.numbers.contains(&i)));
}

#[test]
fn immutable_map() {
    let jsonb = Jsonb::new();
    let original = WithMap {
        name: "config".to_owned(),
        properties: pnk!(ImmutableMap::of([
            ("key1".to_owned(), "value1".to_owned()),
            ("key2".to_owned(), "value2".to_owned()),
        ])),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains(r#""properties":{"key1":"value1","key2":"value2"}"#));

    let restored = pnk!(pnk!(jsonb.type_of::<WithMap>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(Some("value1"), restored.properties.get("key1").map(|s| s.as_str()));
    assert_eq!(Some("value2"), restored.properties.get("key2").map(|s| s.as_str()));
}

#[test]
fn empty_collections() {
    let jsonb = Jsonb::new();
    let empty = WithList {
        name: "empty".to_owned(),
        items: ImmutableList::new(),
    };
    let json = pnk!(jsonb.to_json(&empty));
    assert_eq!(r#"{"name":"empty","items":[]}"#, json);

    let restored = pnk!(pnk!(jsonb.type_of::<WithList>()).from_json(&json));
    assert!(restored.items.is_empty());

    let restored: WithMap = pnk!(jsonb.from_json(r#"{"name":"e","properties":{}}"#));
    assert!(restored.properties.is_empty());
}

#[test]
fn nested_structures() {
    let jsonb = Jsonb::new();
    let alice = Person {
        name: "Alice".to_owned(),
        age: 30,
    };
    let t = pnk!(jsonb.type_of::<Person>());
    let restored = pnk!(t.from_json(&pnk!(jsonb.to_json(&alice))));
    assert_eq!("Alice", restored.name);
    assert_eq!(30, restored.age);

    let people = WithList {
        name: "people".to_owned(),
        items: ImmutableList::of(strings(["Alice", "Bob", "Charlie"])),
    };
    let restored = pnk!(pnk!(jsonb.type_of::<WithList>()).from_json(&pnk!(jsonb.to_json(&people))));
    assert_eq!(3, restored.items.len());
    assert_eq!(strings(["Alice", "Bob", "Charlie"]), restored.items.to_vec());
}

#[test]
fn immutable_sorted_set() {
    let jsonb = Jsonb::new();
    let original = WithSortedSet {
        name: "sorted".to_owned(),
        sorted_items: ImmutableSortedSet::of(strings(["zebra", "apple", "banana"])),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains(r#"["apple","banana","zebra"]"#));

    let restored = pnk!(pnk!(jsonb.type_of::<WithSortedSet>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(
        strings(["apple", "banana", "zebra"]),
        restored.sorted_items.iter().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn immutable_bi_map() {
    let jsonb = Jsonb::new();
    let original = WithBiMap {
        name: "bimap".to_owned(),
        bi_mapping: pnk!(ImmutableBiMap::of([
            ("key1".to_owned(), 1),
            ("key2".to_owned(), 2),
            ("key3".to_owned(), 3),
        ])),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains(r#""bi_mapping":{"key1":1,"key2":2,"key3":3}"#));

    let restored = pnk!(pnk!(jsonb.type_of::<WithBiMap>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(Some(&1), restored.bi_mapping.get("key1"));
    assert_eq!(Some(&"key1".to_owned()), restored.bi_mapping.inverse().get(&1));
}

#[test]
fn immutable_multiset() {
    let jsonb = Jsonb::new();
    let original = WithMultiset {
        name: "multiset".to_owned(),
        multi_items: ImmutableMultiset::of(strings(["apple", "banana", "apple", "cherry", "apple"])),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains(r#"["apple","apple","apple","banana","cherry"]"#));

    let restored = pnk!(pnk!(jsonb.type_of::<WithMultiset>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(3, restored.multi_items.count("apple"));
    assert_eq!(1, restored.multi_items.count("banana"));
    assert_eq!(1, restored.multi_items.count("cherry"));
}

#[test]
fn immutable_sorted_multiset() {
    let jsonb = Jsonb::new();
    let original = WithSortedMultiset {
        name: "sortedMultiset".to_owned(),
        sorted_multi_items: ImmutableSortedMultiset::of(strings([
            "zebra", "apple", "banana", "apple", "zebra", "zebra",
        ])),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains("sortedMultiset"));

    let restored = pnk!(pnk!(jsonb.type_of::<WithSortedMultiset>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(2, restored.sorted_multi_items.count("apple"));
    assert_eq!(3, restored.sorted_multi_items.count("zebra"));
    assert_eq!(
        strings(["apple", "banana", "zebra"]),
        restored.sorted_multi_items.element_set().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn hash_multiset() {
    let jsonb = Jsonb::new();
    let original = WithHashMultiset {
        name: "hashMultiset".to_owned(),
        hash_multi_items: strings(["red", "blue", "red", "green", "red"]).into_iter().collect(),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains("hashMultiset"));

    let restored = pnk!(pnk!(jsonb.type_of::<WithHashMultiset>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(3, restored.hash_multi_items.count("red"));
    assert_eq!(1, restored.hash_multi_items.count("blue"));
    assert_eq!(1, restored.hash_multi_items.count("green"));
}

#[test]
fn linked_hash_multiset() {
    let jsonb = Jsonb::new();
    let original = WithLinkedHashMultiset {
        name: "linkedHashMultiset".to_owned(),
        linked_multi_items: strings(["first", "second", "first", "third"]).into_iter().collect(),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains(r#"["first","first","second","third"]"#));

    let restored = pnk!(pnk!(jsonb.type_of::<WithLinkedHashMultiset>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(2, restored.linked_multi_items.count("first"));
    assert_eq!(1, restored.linked_multi_items.count("second"));
    assert_eq!(1, restored.linked_multi_items.count("third"));
}

#[test]
fn tree_multiset() {
    let jsonb = Jsonb::new();
    let original = WithTreeMultiset {
        name: "treeMultiset".to_owned(),
        tree_multi_items: strings(["zebra", "apple", "banana", "apple"]).into_iter().collect(),
    };

    let json = pnk!(jsonb.to_json(&original));
    assert!(json.contains("treeMultiset"));

    let restored = pnk!(pnk!(jsonb.type_of::<WithTreeMultiset>()).from_json(&json));
    assert_eq!(original, restored);
    assert_eq!(2, restored.tree_multi_items.count("apple"));
    assert_eq!(1, restored.tree_multi_items.count("banana"));
    assert_eq!(1, restored.tree_multi_items.count("zebra"));
    assert_eq!(
        strings(["apple", "banana", "zebra"]),
        restored.tree_multi_items.element_set().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn null_containers() {
    let jsonb = Jsonb::new();
    let none = WithOptional {
        name: "n".to_owned(),
        items: None,
    };
    let json = pnk!(jsonb.to_json(&none));
    assert_eq!(r#"{"name":"n","items":null}"#, json);

    let t = pnk!(jsonb.type_of::<WithOptional>());
    assert_eq!(none, pnk!(t.from_json(&json)));
    assert_eq!(none, pnk!(t.from_json(r#"{"name":"n"}"#)));

    assert!(jsonb
        .from_json::<WithList>(r#"{"name":"n","items":null}"#)
        .is_err());
}

#[test]
fn duplicate_map_keys_fail_the_record() {
    let jsonb = Jsonb::new();
    let t = pnk!(jsonb.type_of::<WithMap>());
    assert!(t
        .from_json(r#"{"name":"x","properties":{"a":"1","a":"2"}}"#)
        .is_err());
}
