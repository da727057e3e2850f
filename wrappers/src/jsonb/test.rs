use super::*;
use ruc::*;
use crate::{ImmutableBiMap, ImmutableList, ImmutableMap, TreeMultiset};
use serde::Deserialize;
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Inventory {
    owner: String,
    items: TreeMultiset<String>,
}

crate::described!(Inventory);

#[test]
fn records_through_type_of() {
    let jsonb = Jsonb::new();
    let inv = Inventory {
        owner: "ann".to_owned(),
        items: ["rope", "axe", "rope"].iter().map(|s| s.to_string()).collect(),
    };

    let t = pnk!(jsonb.type_of::<Inventory>());
    assert!(t.descriptor().kind().is_none());
    let s = pnk!(t.to_json(&inv));
    assert_eq!(r#"{"owner":"ann","items":["axe","rope","rope"]}"#, s);
    assert_eq!(inv, pnk!(t.from_json(&s)));
    assert_eq!(s, pnk!(jsonb.to_json(&inv)));
    assert_eq!(inv, pnk!(jsonb.from_json::<Inventory>(&s)));
}

#[test]
fn containers_through_type_of() {
    let jsonb = Jsonb::new();
    let t = pnk!(jsonb.type_of::<ImmutableBiMap<String, i32>>());
    assert_eq!(Some(ContainerKind::ImmutableBiMap), t.descriptor().kind());

    let m = pnk!(t.from_value(json!({"a": 1, "b": 2})));
    assert_eq!(Some(&"b".to_owned()), m.get_key(&2));
    assert_eq!(json!({"a": 1, "b": 2}), pnk!(t.to_value(&m)));
    assert!(t.from_value(json!({"a": 1, "b": 1})).is_err());
    assert!(t.from_json("null").is_err());
}

#[test]
fn pretty_output() {
    let jsonb = Jsonb::builder().pretty(true).build();
    let m = pnk!(ImmutableMap::of([("k", 1)]));
    assert_eq!("{\n  \"k\": 1\n}", pnk!(jsonb.to_json(&m)));

    let t = pnk!(jsonb.type_of::<ImmutableMap<String, i32>>());
    let owned = pnk!(ImmutableMap::of([("k".to_owned(), 1)]));
    assert_eq!("{\n  \"k\": 1\n}", pnk!(t.to_json(&owned)));
}

#[test]
fn kinds_restrict_type_of() {
    let jsonb = Jsonb::builder().kinds([ContainerKind::ImmutableList]).build();
    assert!(jsonb.type_of::<ImmutableList<u8>>().is_ok());
    assert!(jsonb.type_of::<TreeMultiset<u8>>().is_err());
    assert!(jsonb.type_of::<Inventory>().is_ok());
}

#[test]
fn custom_factory_and_adapter() {
    let jsonb = Jsonb::builder()
        .add_factory(|d: &TypeDescriptor| {
            if d.is_container_of(ContainerKind::TreeMultiset) {
                Some(Adapter::from_fns::<TreeMultiset<u8>, _, _>(
                    |m| Ok(json!(m.len())),
                    |v| {
                        let n = serde_json::from_value::<u8>(v).c(d!())?;
                        Ok((0..n).collect())
                    },
                ))
            } else {
                None
            }
        })
        .add_adapter(Adapter::from_fns::<ImmutableList<u8>, _, _>(
            |l| Ok(json!(l.iter().rev().collect::<Vec<_>>())),
            |v| serde_json::from_value(v).c(d!()),
        ))
        .build();

    let t = pnk!(jsonb.type_of::<TreeMultiset<u8>>());
    let m: TreeMultiset<u8> = [9, 9, 9].into_iter().collect();
    assert_eq!("3", pnk!(t.to_json(&m)));
    assert_eq!(vec![0, 1, 2], pnk!(t.from_json("3")).iter().copied().collect::<Vec<_>>());

    let l = pnk!(jsonb.type_of::<ImmutableList<u8>>());
    assert_eq!("[3,2,1]", pnk!(l.to_json(&ImmutableList::of([1, 2, 3]))));

    // the record path goes straight through serde
    assert_eq!("[1,2,3]", pnk!(jsonb.to_json(&ImmutableList::of([1u8, 2, 3]))));
}

#[test]
fn default_instance() {
    let l = ImmutableList::of(["x"]);
    assert_eq!(r#"["x"]"#, pnk!(to_json(&l)));
    let back: ImmutableList<String> = pnk!(from_json(r#"["x"]"#));
    assert_eq!(1, back.len());
    assert!(!default_jsonb().config().pretty);
}
