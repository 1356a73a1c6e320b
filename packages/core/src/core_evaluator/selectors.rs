//! Per-node selector application

use super::{
    arrays::{resolve_index, slice_indices},
    core::{Cursor, Evaluator},
    recursive_descent::descend,
};
use crate::{
    ast::{FilterExpression, PathNode},
    document::{Document, Node},
    error::PathResult,
    filter::FilterEvaluator,
};

impl<D: Document> Evaluator<D> {
    /// Apply one path node to a cursor, appending every result to `out`
    pub(crate) fn apply_node<'a>(
        &self,
        node: &'a PathNode,
        cursor: &Cursor<'a, D>,
        out: &mut Vec<Cursor<'a, D>>,
    ) -> PathResult<()> {
        let context = cursor.context;
        match node {
            PathNode::Root => out.push(Cursor::new(context.root_document(), context)),
            PathNode::Property(name) => {
                if let Node::Map(map) = cursor.value.node()
                    && let Some(value) = map.lookup(name)
                {
                    out.push(Cursor::new(value, context));
                }
            }
            PathNode::Index(index) => {
                if let Node::List(items) = cursor.value.node()
                    && let Some(i) = resolve_index(items.len(), *index)
                {
                    out.push(Cursor::new(&items[i], context));
                }
            }
            PathNode::Wildcard => {
                let Some(child) = context.child() else {
                    trace_truncated(context.depth());
                    return Ok(());
                };
                out.extend(
                    cursor
                        .value
                        .node()
                        .children()
                        .map(|value| Cursor::new(value, child)),
                );
            }
            PathNode::Recursive(name) => descend(cursor.value, context, name.as_deref(), out),
            PathNode::Slice { start, end, step } => {
                if let Node::List(items) = cursor.value.node() {
                    out.extend(
                        slice_indices(items.len(), *start, *end, *step)
                            .into_iter()
                            .map(|i| Cursor::new(&items[i], context)),
                    );
                }
            }
            PathNode::Filter(expression) => self.apply_filter(expression, cursor, out)?,
        }
        Ok(())
    }

    /// Keep list elements for which `expression` is truthy
    fn apply_filter<'a>(
        &self,
        expression: &'a FilterExpression,
        cursor: &Cursor<'a, D>,
        out: &mut Vec<Cursor<'a, D>>,
    ) -> PathResult<()> {
        let Node::List(items) = cursor.value.node() else {
            return Ok(());
        };
        let Some(child) = cursor.context.child() else {
            trace_truncated(cursor.context.depth());
            return Ok(());
        };

        let filter = FilterEvaluator::new(&self.operators, &self.functions, &self.regex_cache);
        let before = out.len();
        for item in items {
            if filter.evaluate_predicate(expression, item)? {
                out.push(Cursor::new(item, child));
            }
        }
        tracing::trace!(
            target: "treepath::filter",
            candidates = items.len(),
            kept = out.len() - before,
            "applied filter"
        );
        Ok(())
    }
}

pub(super) fn trace_truncated(depth: usize) {
    tracing::trace!(target: "treepath::evaluator", depth, "expansion stopped at max depth");
}
