//! Extensional definitions: symbol meanings given as explicit tables.

use std::fmt;

use indexmap::IndexMap;

use crate::syntax::{write_args, Constant, Value};

/// A ground argument tuple, keyed by the (sort, value) of each element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(Vec<Constant>);

impl Point {
    pub fn new(elements: Vec<Constant>) -> Self {
        Point(elements)
    }

    pub fn elements(&self) -> &[Constant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_args(f, &self.0)
    }
}

/// Something that can stand at an argument position: either a constant
/// or a raw value to be cast into the expected sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Constant(Constant),
    Raw(Value),
}

impl From<Constant> for Element {
    fn from(c: Constant) -> Self {
        Element::Constant(c)
    }
}

impl From<&Constant> for Element {
    fn from(c: &Constant) -> Self {
        Element::Constant(c.clone())
    }
}

impl From<Value> for Element {
    fn from(v: Value) -> Self {
        Element::Raw(v)
    }
}

impl From<i64> for Element {
    fn from(i: i64) -> Self {
        Element::Raw(Value::Int(i))
    }
}

impl From<i32> for Element {
    fn from(i: i32) -> Self {
        Element::Raw(Value::Int(i64::from(i)))
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Raw(Value::from(s))
    }
}

/// A function given as a table from points to values.
///
/// Holds at most one value per point; setting a point again overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionalFunctionDefinition {
    data: IndexMap<Point, Constant>,
}

impl ExtensionalFunctionDefinition {
    pub fn new() -> Self {
        ExtensionalFunctionDefinition::default()
    }

    pub fn set(&mut self, point: Point, value: Constant) -> Option<Constant> {
        self.data.insert(point, value)
    }

    pub fn get(&self, point: &Point) -> Option<&Constant> {
        self.data.get(point)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Defined points with their values, in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &Constant)> {
        self.data.iter()
    }
}
