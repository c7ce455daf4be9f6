use crate::{
    schema::Field,
    stmt::{Expr, Value},
    Statement,
};

/// Derives predicates restricting `stmt` to the rows whose primary keys are
/// held by its destination and, when distinct, its model.
///
/// Returns one membership predicate per source that yields at least one
/// key. An empty result means no identity could be derived.
pub fn snapshot(stmt: &Statement) -> Vec<Expr> {
    let pk: Vec<&Field> = stmt.schema.primary_key_fields().collect();

    if pk.is_empty() {
        return vec![];
    }

    let mut exprs = vec![];

    exprs.extend(membership(&stmt.dest, &pk));

    if stmt.model_is_distinct() {
        if let Some(model) = &stmt.model {
            exprs.extend(membership(model, &pk));
        }
    }

    exprs
}

/// Adds the [`snapshot`] predicates to `stmt` as top-level conjuncts.
///
/// A clause ending in an OR link is grouped first, otherwise the identity
/// would bind to the last disjunct only.
pub fn scope(stmt: &mut Statement) {
    let exprs = snapshot(stmt);

    if exprs.is_empty() {
        return;
    }

    if stmt.filter.has_or_link() {
        stmt.filter.group();
    }

    stmt.filter.extend(exprs);
}

fn membership(value: &Value, pk: &[&Field]) -> Option<Expr> {
    let mut keys: Vec<Value> = vec![];

    for record in value.records() {
        let mut key: Vec<Value> = pk
            .iter()
            .map(|field| record.get(field.id.index).cloned().unwrap_or_default())
            .collect();

        // Never persisted
        if key.iter().all(Value::is_zero) {
            continue;
        }

        let key = match key.len() {
            1 => key.remove(0),
            _ => Value::record_from_vec(key),
        };

        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    if keys.is_empty() {
        return None;
    }

    let lhs = match pk {
        [field] => Expr::current_column(&field.column),
        fields => Expr::record(fields.iter().map(|field| Expr::current_column(&field.column))),
    };

    Some(Expr::in_list(lhs, keys.into_iter().map(Expr::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::{Model, ModelId},
        stmt::{StatementKind, Type},
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn books() -> Arc<Model> {
        Arc::new(
            Model::builder("Book")
                .field(Field::builder("id", Type::U64))
                .field(Field::builder("title", Type::String))
                .build(ModelId(0))
                .unwrap(),
        )
    }

    fn memberships() -> Arc<Model> {
        Arc::new(
            Model::builder("Membership")
                .field(Field::builder("user_id", Type::U64).primary_key())
                .field(Field::builder("group_id", Type::U64).primary_key())
                .build(ModelId(1))
                .unwrap(),
        )
    }

    fn book(id: u64) -> Value {
        Value::record_from_vec(vec![Value::U64(id), "t".into()])
    }

    fn ids_in(ids: &[u64]) -> Expr {
        Expr::in_list(
            Expr::current_column("id"),
            ids.iter().map(|id| Expr::from(*id)).collect(),
        )
    }

    fn title_is(title: &str) -> Expr {
        Expr::eq(Expr::column("title"), title)
    }

    #[test]
    fn scope_groups_or_linked_clause() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = book(3);
        stmt.filter.add_filter(title_is("a"));
        stmt.filter.add_or_filter(title_is("b"));

        scope(&mut stmt);

        assert_eq!(
            stmt.filter.exprs(),
            &[
                Expr::and_from_vec(vec![title_is("a"), Expr::or_link(title_is("b"))]),
                ids_in(&[3]),
            ][..]
        );
    }

    #[test]
    fn scope_without_keys_leaves_clause_alone() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = book(0);
        stmt.filter.add_filter(title_is("a"));
        stmt.filter.add_or_filter(title_is("b"));

        scope(&mut stmt);

        assert_eq!(
            stmt.filter.exprs(),
            &[title_is("a"), Expr::or_link(title_is("b"))][..]
        );
    }

    #[test]
    fn single_record() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = book(3);

        assert_eq!(snapshot(&stmt), vec![ids_in(&[3])]);
    }

    #[test]
    fn list_skips_unsaved_and_duplicates() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = Value::list_from_vec(vec![book(1), book(0), book(2), book(1)]);

        assert_eq!(snapshot(&stmt), vec![ids_in(&[1, 2])]);
    }

    #[test]
    fn no_keys_yields_nothing() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = book(0);

        assert!(snapshot(&stmt).is_empty());
    }

    #[test]
    fn distinct_model_adds_second_conjunct() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = book(0);
        stmt.model = Some(book(9));

        assert_eq!(snapshot(&stmt), vec![ids_in(&[9])]);

        stmt.dest = book(4);
        assert_eq!(snapshot(&stmt), vec![ids_in(&[4]), ids_in(&[9])]);
    }

    #[test]
    fn equal_model_is_not_repeated() {
        let mut stmt = Statement::new(StatementKind::Delete, books());
        stmt.dest = book(4);
        stmt.model = Some(book(4));

        assert_eq!(snapshot(&stmt), vec![ids_in(&[4])]);
    }

    #[test]
    fn composite_key() {
        let mut stmt = Statement::new(StatementKind::Delete, memberships());
        stmt.dest = Value::record_from_vec(vec![Value::U64(1), Value::U64(2)]);

        let expected = Expr::in_list(
            Expr::record([
                Expr::current_column("user_id"),
                Expr::current_column("group_id"),
            ]),
            vec![Value::record_from_vec(vec![Value::U64(1), Value::U64(2)]).into()],
        );

        assert_eq!(snapshot(&stmt), vec![expected]);
    }
}
