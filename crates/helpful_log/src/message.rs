use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::{self, Debug, Display};

/// Payload handed to a logging operation.
///
/// Scalars keep their display form, collections their debug form. Both are
/// rendered eagerly so a record never borrows from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Sequence(String),
}

impl Message {
    pub fn text(value: impl Display) -> Self {
        Self::Text(value.to_string())
    }

    pub fn sequence(value: impl Debug) -> Self {
        Self::Sequence(format!("{value:?}"))
    }

    /// Body of the record as it appears after the level label.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => write!(f, "Message >> {value}"),
            Self::Sequence(value) => write!(f, "Iterator >> {value}"),
        }
    }
}

macro_rules! impl_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Message {
                fn from(value: $ty) -> Self {
                    Self::text(value)
                }
            }
        )*
    };
}

impl_text!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
    u128, usize, f32, f64,
);

impl<T: Debug> From<Vec<T>> for Message {
    fn from(value: Vec<T>) -> Self {
        Self::sequence(value)
    }
}

impl<T: Debug> From<&Vec<T>> for Message {
    fn from(value: &Vec<T>) -> Self {
        Self::sequence(value)
    }
}

impl<T: Debug> From<&[T]> for Message {
    fn from(value: &[T]) -> Self {
        Self::sequence(value)
    }
}

impl<T: Debug, const N: usize> From<[T; N]> for Message {
    fn from(value: [T; N]) -> Self {
        Self::sequence(value)
    }
}

impl<T: Debug> From<VecDeque<T>> for Message {
    fn from(value: VecDeque<T>) -> Self {
        Self::sequence(value)
    }
}

impl<T: Debug, S> From<HashSet<T, S>> for Message {
    fn from(value: HashSet<T, S>) -> Self {
        Self::sequence(value)
    }
}

impl<T: Debug> From<BTreeSet<T>> for Message {
    fn from(value: BTreeSet<T>) -> Self {
        Self::sequence(value)
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Debug),+> From<($($name,)+)> for Message {
            fn from(value: ($($name,)+)) -> Self {
                Self::sequence(value)
            }
        }
    };
}

impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scalar_renders_as_message() {
        assert_eq!(Message::from("x").render(), "Message >> x");
        assert_eq!(Message::from(42u8).render(), "Message >> 42");
        assert_eq!(Message::from(String::from("a b")).render(), "Message >> a b");
    }

    #[test]
    fn test_tuple_renders_as_iterator() {
        let actual = Message::from(("a", "b")).render();
        let expected = "Iterator >> (\"a\", \"b\")";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_lists_render_as_iterator() {
        assert_eq!(Message::from(vec![1, 2, 3]).render(), "Iterator >> [1, 2, 3]");
        assert_eq!(Message::from(&["x"][..]).render(), "Iterator >> [\"x\"]");
        let set: BTreeSet<_> = [2, 1].into_iter().collect();
        assert_eq!(Message::from(set).render(), "Iterator >> {1, 2}");
    }

    #[test]
    fn test_explicit_constructors() {
        let path = std::path::Path::new("/tmp/x");
        assert_eq!(Message::text(path.display()).render(), "Message >> /tmp/x");
        assert_eq!(Message::sequence(Some(1)).render(), "Iterator >> Some(1)");
    }
}
