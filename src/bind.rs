use chainsql_derive::Bindable;
use smol_str::SmolStr;

/// A single bound value carried next to a `?` marker.
#[derive(Debug, Clone, PartialEq, Bindable)]
pub enum Bind {
    #[bindable(ignore)]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    // unsigned values are kept as is, the driver decides how to encode them
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(SmolStr),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
    #[cfg(feature = "chrono")]
    DateTime(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "chrono")]
    NaiveDate(chrono::NaiveDate),
    #[cfg(feature = "chrono")]
    NaiveDateTime(chrono::NaiveDateTime),
    #[cfg(feature = "time")]
    OffsetDateTime(time::OffsetDateTime),
    #[cfg(feature = "time")]
    Date(time::Date),
}

impl Bind {
    pub fn is_null(&self) -> bool {
        matches!(self, Bind::Null)
    }
}

/// A sequence of binds.
pub type Binds = Array<Bind>;

/// Zero, one or many values without allocating for the first two cases.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Array<T> {
    #[default]
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Array<T> {
    pub fn push(&mut self, value: T) {
        let combined = match std::mem::take(self) {
            Self::None => Self::One(value),
            Self::One(first) => Self::Many(vec![first, value]),
            Self::Many(mut many) => {
                many.push(value);
                Self::Many(many)
            }
        };
        *self = combined;
    }

    pub fn append(&mut self, other: Self) {
        let combined = match (std::mem::take(self), other) {
            (Self::None, values) | (values, Self::None) => values,
            (Self::One(a), Self::One(b)) => Self::Many(vec![a, b]),
            (Self::One(a), Self::Many(mut b)) => {
                b.insert(0, a);
                Self::Many(b)
            }
            (Self::Many(mut a), Self::One(b)) => {
                a.push(b);
                Self::Many(a)
            }
            (Self::Many(mut a), Self::Many(mut b)) => {
                a.append(&mut b);
                Self::Many(a)
            }
        };
        *self = combined;
    }

    pub fn len(&self) -> usize {
        match self {
            Array::None => 0,
            Array::One(_) => 1,
            Array::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::None => Vec::new(),
            Self::One(one) => vec![one],
            Self::Many(many) => many,
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::option::IntoIter<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        let (one, many) = match self {
            Array::None => (None, Vec::new()),
            Array::One(one) => (Some(one), Vec::new()),
            Array::Many(many) => (None, many),
        };
        one.into_iter().chain(many)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Array::None;
        for value in iter {
            array.push(value);
        }
        array
    }
}

pub trait IntoBind {
    fn into_bind(self) -> Bind;
}

pub trait IntoBinds {
    fn into_binds(self) -> Binds;
}

impl IntoBind for &str {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::new(self))
    }
}

impl IntoBind for String {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::from(self))
    }
}

impl IntoBind for &String {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::new(self))
    }
}

impl<T> IntoBind for Option<T>
where
    T: IntoBind,
{
    fn into_bind(self) -> Bind {
        match self {
            Some(value) => value.into_bind(),
            None => Bind::Null,
        }
    }
}

impl IntoBinds for Binds {
    fn into_binds(self) -> Binds {
        self
    }
}

impl IntoBinds for () {
    fn into_binds(self) -> Binds {
        Binds::None
    }
}

impl<T> IntoBinds for T
where
    T: IntoBind,
{
    fn into_binds(self) -> Binds {
        Binds::One(self.into_bind())
    }
}

impl<T> IntoBinds for Vec<T>
where
    T: IntoBind,
{
    fn into_binds(self) -> Binds {
        self.into_iter().map(IntoBind::into_bind).collect()
    }
}

impl<T, const N: usize> IntoBinds for [T; N]
where
    T: IntoBind,
{
    fn into_binds(self) -> Binds {
        self.into_iter().map(IntoBind::into_bind).collect()
    }
}

impl<T> IntoBinds for &[T]
where
    T: IntoBind + Clone,
{
    fn into_binds(self) -> Binds {
        self.iter().cloned().map(IntoBind::into_bind).collect()
    }
}

macro_rules! tuple_binds {
    ($($name:ident),+) => {
        impl<$($name),+> IntoBinds for ($($name,)+)
        where
            $($name: IntoBind,)+
        {
            #[allow(non_snake_case)]
            fn into_binds(self) -> Binds {
                let ($($name,)+) = self;
                Binds::Many(vec![$($name.into_bind()),+])
            }
        }
    };
}

tuple_binds!(A, B);
tuple_binds!(A, B, C);
tuple_binds!(A, B, C, D);
tuple_binds!(A, B, C, D, E);
tuple_binds!(A, B, C, D, E, F);
tuple_binds!(A, B, C, D, E, F, G);
tuple_binds!(A, B, C, D, E, F, G, H);
