//! Structural view of values.
//!
//! Every value the engine copies, formats or compares describes itself through
//! [`Inspect::view`]. The [`Shape`] trait adds the operations that need the
//! concrete type: deep copy, the static [`Kind`] and the hidden-field check.
//!
//! Scalars, strings, `Option`, `Box`, `Rc`, `Vec`, fixed arrays, maps and
//! tuples are covered here. User structs get an implementation from
//! `#[derive(Shape)]`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

/// Scalar categories the formatter treats differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Signed,
    Unsigned,
    Float,
    Char,
    Str,
    /// `u8`, rendered as text inside byte sequences.
    Byte,
    /// `i32`, rendered as text inside codepoint sequences.
    Codepoint,
}

/// Static shape category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar(ScalarKind),
    /// Optional or shared indirection (`Option`, `Box`, `Rc`).
    Reference,
    /// Type-erased value (`Box<dyn DynShape>`).
    Boxed,
    Aggregate,
    Sequence,
    Array,
    Map,
}

impl Kind {
    /// Returns true for sequences and fixed arrays.
    pub fn is_list(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Array)
    }
}

/// A borrowed scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Signed(i128),
    Unsigned(u128),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Signed(v) => write!(f, "{v}"),
            Scalar::Unsigned(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::Char(v) => write!(f, "{v}"),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

/// A named field of an aggregate.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Display name (the field name, or its `#[shape(rename)]` value).
    pub name: &'static str,
    pub value: &'a dyn Inspect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Inspect) -> Self {
        Self { name, value }
    }
}

/// One level of a value's structure.
#[derive(Debug)]
pub enum View<'a> {
    Scalar(Scalar<'a>),
    /// A reference that points at nothing (`None`).
    Absent,
    Reference(&'a dyn Inspect),
    Boxed(&'a dyn Inspect),
    /// Visible fields in declaration order.
    Aggregate(Vec<Field<'a>>),
    Sequence {
        elem: Kind,
        items: Vec<&'a dyn Inspect>,
    },
    Array {
        elem: Kind,
        items: Vec<&'a dyn Inspect>,
    },
    /// Entries sorted by key.
    Map(Vec<(&'a dyn Inspect, &'a dyn Inspect)>),
}

/// Object-safe structural access.
pub trait Inspect {
    /// Describes the top level of this value.
    fn view(&self) -> View<'_>;

    /// Short type name, module paths stripped (`Vec<Point>`, not
    /// `alloc::vec::Vec<app::Point>`).
    fn type_name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl fmt::Debug for dyn Inspect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::display(self))
    }
}

/// A value the engine can copy, format and compare.
pub trait Shape: Inspect + Sized {
    const KIND: Kind;

    /// Returns a copy that shares no mutable storage with `self`.
    fn deep_copy(&self) -> Self;

    /// Path to the first field hidden from the engine, relative to `Self`.
    ///
    /// `visited` holds the types already visited so recursive types terminate.
    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        let _ = visited;
        None
    }

    /// Hidden-field path of the concrete value inside a boxed value. Only
    /// [`Kind::Boxed`] shapes answer; their type alone cannot.
    fn boxed_hidden_field(&self) -> Option<String> {
        None
    }
}

/// Type-erased [`Shape`], usable as `Box<dyn DynShape>`.
pub trait DynShape: Inspect {
    fn clone_boxed(&self) -> Box<dyn DynShape>;
    fn as_inspect(&self) -> &dyn Inspect;
    /// [`Shape::hidden_field`] of the erased type.
    fn hidden_field_dyn(&self) -> Option<String>;
}

impl<T: Shape + 'static> DynShape for T {
    fn clone_boxed(&self) -> Box<dyn DynShape> {
        Box::new(self.deep_copy())
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn hidden_field_dyn(&self) -> Option<String> {
        T::hidden_field(&mut Vec::new())
    }
}

impl Inspect for Box<dyn DynShape> {
    fn view(&self) -> View<'_> {
        View::Boxed((**self).as_inspect())
    }

    fn type_name(&self) -> String {
        (**self).type_name()
    }
}

impl Shape for Box<dyn DynShape> {
    const KIND: Kind = Kind::Boxed;

    fn deep_copy(&self) -> Self {
        (**self).clone_boxed()
    }

    fn boxed_hidden_field(&self) -> Option<String> {
        (**self).hidden_field_dyn()
    }
}

/// Strips module paths from every segment of a `std::any::type_name`.
pub fn short_type_name(full: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*') {
            out.push_str(last_segment(&full[start..i]));
            out.push(c);
            start = i + c.len_utf8();
        }
    }
    out.push_str(last_segment(&full[start..]));
    out
}

macro_rules! scalar_shape {
    ($($ty:ty => $kind:ident, $variant:ident as $cast:ty;)*) => {$(
        impl Inspect for $ty {
            fn view(&self) -> View<'_> {
                View::Scalar(Scalar::$variant(*self as $cast))
            }
        }

        impl Shape for $ty {
            const KIND: Kind = Kind::Scalar(ScalarKind::$kind);

            fn deep_copy(&self) -> Self {
                *self
            }
        }
    )*};
}

scalar_shape! {
    i8 => Signed, Signed as i128;
    i16 => Signed, Signed as i128;
    i32 => Codepoint, Signed as i128;
    i64 => Signed, Signed as i128;
    i128 => Signed, Signed as i128;
    isize => Signed, Signed as i128;
    u8 => Byte, Unsigned as u128;
    u16 => Unsigned, Unsigned as u128;
    u32 => Unsigned, Unsigned as u128;
    u64 => Unsigned, Unsigned as u128;
    u128 => Unsigned, Unsigned as u128;
    usize => Unsigned, Unsigned as u128;
    f32 => Float, F32 as f32;
    f64 => Float, F64 as f64;
    bool => Bool, Bool as bool;
    char => Char, Char as char;
}

impl Inspect for String {
    fn view(&self) -> View<'_> {
        View::Scalar(Scalar::Str(self))
    }
}

impl Shape for String {
    const KIND: Kind = Kind::Scalar(ScalarKind::Str);

    fn deep_copy(&self) -> Self {
        self.as_str().to_owned()
    }
}

impl Inspect for &str {
    fn view(&self) -> View<'_> {
        View::Scalar(Scalar::Str(self))
    }
}

// String literals are immutable, so sharing them is a copy.
impl Shape for &str {
    const KIND: Kind = Kind::Scalar(ScalarKind::Str);

    fn deep_copy(&self) -> Self {
        *self
    }
}

impl Inspect for () {
    fn view(&self) -> View<'_> {
        View::Aggregate(Vec::new())
    }
}

impl Shape for () {
    const KIND: Kind = Kind::Aggregate;

    fn deep_copy(&self) -> Self {}
}

impl<T: Shape> Inspect for Option<T> {
    fn view(&self) -> View<'_> {
        match self {
            Some(value) => View::Reference(value),
            None => View::Absent,
        }
    }
}

impl<T: Shape> Shape for Option<T> {
    const KIND: Kind = Kind::Reference;

    fn deep_copy(&self) -> Self {
        self.as_ref().map(Shape::deep_copy)
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        T::hidden_field(visited)
    }
}

impl<T: Shape> Inspect for Box<T> {
    fn view(&self) -> View<'_> {
        View::Reference(&**self)
    }
}

impl<T: Shape> Shape for Box<T> {
    const KIND: Kind = Kind::Reference;

    fn deep_copy(&self) -> Self {
        Box::new((**self).deep_copy())
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        T::hidden_field(visited)
    }
}

impl<T: Shape> Inspect for Rc<T> {
    fn view(&self) -> View<'_> {
        View::Reference(&**self)
    }
}

/// Copies the pointee into a fresh allocation. Cyclic `Rc` graphs are not
/// supported and would be copied without bound.
impl<T: Shape> Shape for Rc<T> {
    const KIND: Kind = Kind::Reference;

    fn deep_copy(&self) -> Self {
        Rc::new((**self).deep_copy())
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        T::hidden_field(visited)
    }
}

impl<T: Shape> Inspect for Vec<T> {
    fn view(&self) -> View<'_> {
        View::Sequence {
            elem: T::KIND,
            items: self.iter().map(|item| item as &dyn Inspect).collect(),
        }
    }
}

impl<T: Shape> Shape for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    fn deep_copy(&self) -> Self {
        let mut copy = Vec::with_capacity(self.capacity());
        copy.extend(self.iter().map(Shape::deep_copy));
        copy
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        T::hidden_field(visited)
    }
}

impl<T: Shape, const N: usize> Inspect for [T; N] {
    fn view(&self) -> View<'_> {
        View::Array {
            elem: T::KIND,
            items: self.iter().map(|item| item as &dyn Inspect).collect(),
        }
    }
}

impl<T: Shape, const N: usize> Shape for [T; N] {
    const KIND: Kind = Kind::Array;

    fn deep_copy(&self) -> Self {
        std::array::from_fn(|i| self[i].deep_copy())
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        T::hidden_field(visited)
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: Shape + Ord + Eq + Hash,
    V: Shape,
    S: BuildHasher + Default,
{
    fn view(&self) -> View<'_> {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        View::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect))
                .collect(),
        )
    }
}

impl<K, V, S> Shape for HashMap<K, V, S>
where
    K: Shape + Ord + Eq + Hash,
    V: Shape,
    S: BuildHasher + Default,
{
    const KIND: Kind = Kind::Map;

    fn deep_copy(&self) -> Self {
        let mut copy = HashMap::with_capacity_and_hasher(self.len(), S::default());
        for (k, v) in self {
            copy.insert(k.deep_copy(), v.deep_copy());
        }
        copy
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        K::hidden_field(visited).or_else(|| V::hidden_field(visited))
    }
}

impl<K: Shape + Ord, V: Shape> Inspect for BTreeMap<K, V> {
    fn view(&self) -> View<'_> {
        View::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect))
                .collect(),
        )
    }
}

impl<K: Shape + Ord, V: Shape> Shape for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;

    fn deep_copy(&self) -> Self {
        self.iter().map(|(k, v)| (k.deep_copy(), v.deep_copy())).collect()
    }

    fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
        K::hidden_field(visited).or_else(|| V::hidden_field(visited))
    }
}

macro_rules! tuple_shape {
    ($(($($name:ident $idx:tt)+))*) => {$(
        impl<$($name: Shape),+> Inspect for ($($name,)+) {
            fn view(&self) -> View<'_> {
                View::Aggregate(vec![$(Field::new(stringify!($idx), &self.$idx)),+])
            }
        }

        impl<$($name: Shape),+> Shape for ($($name,)+) {
            const KIND: Kind = Kind::Aggregate;

            fn deep_copy(&self) -> Self {
                ($(self.$idx.deep_copy(),)+)
            }

            fn hidden_field(visited: &mut Vec<&'static str>) -> Option<String> {
                None$(.or_else(|| {
                    $name::hidden_field(visited).map(|path| format!("{}.{path}", stringify!($idx)))
                }))+
            }
        }
    )*};
}

tuple_shape! {
    (A 0)
    (A 0 B 1)
    (A 0 B 1 C 2)
    (A 0 B 1 C 2 D 3)
}
