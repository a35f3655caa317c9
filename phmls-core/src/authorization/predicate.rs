//! Declarative row filters.
//!
//! A [`Predicate`] is a small expression tree over the fields of a record.
//! The same tree is handed to repositories to restrict queries and is
//! evaluated in memory to check a single, already loaded record.

use std::fmt;

use crate::entities::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Id(Id),
    Text(String),
}

impl From<bool> for Value {
    fn from(from: bool) -> Self {
        Self::Bool(from)
    }
}

impl From<Id> for Value {
    fn from(from: Id) -> Self {
        Self::Id(from)
    }
}

impl From<&str> for Value {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

impl From<String> for Value {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<ListingStatus> for Value {
    fn from(from: ListingStatus) -> Self {
        Self::Text(from.to_string())
    }
}

impl From<ListingType> for Value {
    fn from(from: ListingType) -> Self {
        Self::Text(from.to_string())
    }
}

impl From<Role> for Value {
    fn from(from: Role) -> Self {
        Self::Text(from.to_string())
    }
}

impl From<Visibility> for Value {
    fn from(from: Visibility) -> Self {
        Self::Text(from.to_string())
    }
}

impl From<&PsgcCode> for Value {
    fn from(from: &PsgcCode) -> Self {
        Self::Text(from.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(from: Option<T>) -> Self {
        from.map(Into::into).unwrap_or(Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// Something a [`Predicate`] can be evaluated against.
pub trait Record {
    type Field: Copy + fmt::Display;

    fn value_of(&self, field: Self::Field) -> Value;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Equals(Value),
    NotEquals(Value),
    In(Vec<Value>),
    NotIn(Vec<Value>),
}

impl Comparison {
    fn matches(&self, actual: &Value) -> bool {
        match self {
            Self::Equals(expected) => actual == expected,
            Self::NotEquals(expected) => actual != expected,
            Self::In(values) => values.contains(actual),
            Self::NotIn(values) => !values.contains(actual),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<F> {
    Compare { field: F, cmp: Comparison },
    /// Matches if all children match. An empty conjunction matches everything.
    And(Vec<Predicate<F>>),
    /// Matches if any child matches. An empty disjunction matches nothing.
    Or(Vec<Predicate<F>>),
    Not(Box<Predicate<F>>),
}

impl<F> Predicate<F>
where
    F: Copy,
{
    pub const fn always() -> Self {
        Self::And(Vec::new())
    }

    pub const fn never() -> Self {
        Self::Or(Vec::new())
    }

    pub fn equals(field: F, value: impl Into<Value>) -> Self {
        Self::Compare {
            field,
            cmp: Comparison::Equals(value.into()),
        }
    }

    pub fn not_equals(field: F, value: impl Into<Value>) -> Self {
        Self::Compare {
            field,
            cmp: Comparison::NotEquals(value.into()),
        }
    }

    pub fn is_in<V>(field: F, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Self::Compare {
            field,
            cmp: Comparison::In(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn not_in<V>(field: F, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Self::Compare {
            field,
            cmp: Comparison::NotIn(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut lhs), Self::And(rhs)) => {
                lhs.extend(rhs);
                Self::And(lhs)
            }
            (Self::And(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::And(lhs)
            }
            (lhs, Self::And(mut rhs)) => {
                rhs.insert(0, lhs);
                Self::And(rhs)
            }
            (lhs, rhs) => Self::And(vec![lhs, rhs]),
        }
    }

    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut lhs), Self::Or(rhs)) => {
                lhs.extend(rhs);
                Self::Or(lhs)
            }
            (Self::Or(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::Or(lhs)
            }
            (lhs, Self::Or(mut rhs)) => {
                rhs.insert(0, lhs);
                Self::Or(rhs)
            }
            (lhs, rhs) => Self::Or(vec![lhs, rhs]),
        }
    }

    pub fn negate(self) -> Self {
        match self {
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }

    pub fn eval<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        match self {
            Self::Compare { field, cmp } => cmp.matches(&record.value_of(*field)),
            Self::And(children) => children.iter().all(|p| p.eval(record)),
            Self::Or(children) => children.iter().any(|p| p.eval(record)),
            Self::Not(inner) => !inner.eval(record),
        }
    }
}

fn write_values(f: &mut fmt::Formatter, values: &[Value]) -> fmt::Result {
    f.write_str("(")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str(")")
}

fn write_children<F: fmt::Display>(
    f: &mut fmt::Formatter,
    children: &[Predicate<F>],
    op: &str,
    empty: &str,
) -> fmt::Result {
    match children {
        [] => f.write_str(empty),
        [single] => write!(f, "{single}"),
        _ => {
            f.write_str("(")?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, " {op} ")?;
                }
                write!(f, "{child}")?;
            }
            f.write_str(")")
        }
    }
}

impl<F> fmt::Display for Predicate<F>
where
    F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Compare { field, cmp } => match cmp {
                Comparison::Equals(v) => write!(f, "{field} = {v}"),
                Comparison::NotEquals(v) => write!(f, "{field} != {v}"),
                Comparison::In(values) => {
                    write!(f, "{field} IN ")?;
                    write_values(f, values)
                }
                Comparison::NotIn(values) => {
                    write!(f, "{field} NOT IN ")?;
                    write_values(f, values)
                }
            },
            Self::And(children) => write_children(f, children, "AND", "TRUE"),
            Self::Or(children) => write_children(f, children, "OR", "FALSE"),
            Self::Not(inner) => write!(f, "NOT {inner}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
    #[strum(serialize_all = "snake_case")]
    enum Field {
        Owner,
        Status,
    }

    struct Row {
        owner: Id,
        status: ListingStatus,
    }

    impl Record for Row {
        type Field = Field;
        fn value_of(&self, field: Field) -> Value {
            match field {
                Field::Owner => self.owner.into(),
                Field::Status => self.status.into(),
            }
        }
    }

    fn row(owner: u64, status: ListingStatus) -> Row {
        Row {
            owner: Id::new(owner),
            status,
        }
    }

    #[test]
    fn empty_conjunction_and_disjunction() {
        let r = row(1, ListingStatus::Draft);
        assert!(Predicate::<Field>::always().eval(&r));
        assert!(!Predicate::<Field>::never().eval(&r));
    }

    #[test]
    fn own_or_published() {
        let p = Predicate::equals(Field::Owner, Id::new(1))
            .or(Predicate::equals(Field::Status, ListingStatus::Published));
        assert!(p.eval(&row(1, ListingStatus::Draft)));
        assert!(p.eval(&row(2, ListingStatus::Published)));
        assert!(!p.eval(&row(2, ListingStatus::Draft)));
    }

    #[test]
    fn in_and_not_in() {
        let p = Predicate::not_in(
            Field::Status,
            [ListingStatus::Submitted, ListingStatus::Published],
        );
        assert!(p.eval(&row(1, ListingStatus::Draft)));
        assert!(!p.eval(&row(1, ListingStatus::Submitted)));
        assert!(p.clone().negate().eval(&row(1, ListingStatus::Published)));
        assert_eq!(p, p.clone().negate().negate());
    }

    #[test]
    fn combinators_flatten() {
        let a = Predicate::equals(Field::Owner, Id::new(1));
        let b = Predicate::equals(Field::Status, ListingStatus::Draft);
        let c = Predicate::equals(Field::Status, ListingStatus::Rejected);
        match a.and(b).and(c) {
            Predicate::And(children) => assert_eq!(3, children.len()),
            other => panic!("unexpected predicate: {other}"),
        }
    }

    #[test]
    fn display_predicate() {
        let p = Predicate::equals(Field::Owner, Id::new(7)).and(Predicate::is_in(
            Field::Status,
            [ListingStatus::Draft, ListingStatus::NeedsRevision],
        ));
        assert_eq!(
            "(owner = 7 AND status IN ('draft', 'needs_revision'))",
            p.to_string()
        );
        assert_eq!("TRUE", Predicate::<Field>::always().to_string());
    }
}
