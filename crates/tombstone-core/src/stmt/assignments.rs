use super::Expr;
use crate::schema::FieldId;

use indexmap::IndexMap;

/// Ordered column assignments of an UPDATE, or column values of an INSERT.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<FieldId, Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Expression use for assignment
    pub expr: Expr,
}

impl Assignments {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: IndexMap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.assignments.contains_key(&field)
    }

    pub fn get(&self, field: FieldId) -> Option<&Assignment> {
        self.assignments.get(&field)
    }

    /// Assigns `field`. A field that is already assigned keeps its position.
    pub fn set(&mut self, field: FieldId, expr: impl Into<Expr>) {
        self.assignments.insert(field, Assignment { expr: expr.into() });
    }

    /// Assigns `field` and moves it to the front of the list.
    pub fn prepend(&mut self, field: FieldId, expr: impl Into<Expr>) {
        self.assignments.shift_remove(&field);
        self.assignments
            .shift_insert(0, field, Assignment { expr: expr.into() });
    }

    pub fn unset(&mut self, field: FieldId) {
        self.assignments.shift_remove(&field);
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        self.assignments.keys().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (FieldId, &Assignment)> + '_ {
        self.assignments.iter().map(|(field, assignment)| (*field, assignment))
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = (&'a FieldId, &'a Assignment);
    type IntoIter = indexmap::map::Iter<'a, FieldId, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
