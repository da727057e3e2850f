/// Implements [`Described`](crate::Described) for user types, so they can be
/// passed to [`Jsonb::type_of`](crate::Jsonb::type_of).
///
/// The types must be `Serialize + DeserializeOwned + Send + 'static`,
/// a descriptor without container kind is generated for each of them.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, PartialEq, Debug)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// colljson::described!(Person);
///
/// let jsonb = colljson::Jsonb::new();
/// let person_type = jsonb.type_of::<Person>().unwrap();
/// let json = person_type.to_json(&Person { name: "Alice".into(), age: 30 }).unwrap();
/// assert_eq!(r#"{"name":"Alice","age":30}"#, json);
/// ```
#[macro_export]
macro_rules! described {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Described for $ty {
                fn descriptor() -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::plain::<Self>()
                }
            }
        )+
    };
}

/// [`Described`](crate::Described) for the container types of `colljson_core`.
macro_rules! impl_described_container {
    ($($ty:ident<$($g:ident),+>),+ $(,)?) => {
        $(
            impl<$($g),+> $crate::Described for $ty<$($g),+>
            where
                Self: $crate::common::Container
                    + serde::Serialize
                    + serde::de::DeserializeOwned
                    + Send
                    + 'static,
            {
                fn descriptor() -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::of::<Self>()
                }
            }
        )+
    };
}
