//! Core filter evaluation logic
//!
//! Evaluates a filter expression with one list element bound as `@`.

use super::{
    comparison::{compare, string_test},
    regex_cache::RegexCache,
    security::{check_property_name, guard_pattern},
    value::FilterValue,
};
use crate::{
    ast::{BinaryOp, FilterExpression, UnaryOp},
    document::{Document, Node},
    error::{PathResult, evaluation_error},
    functions::{FunctionRegistry, OperatorRegistry},
};

/// Filter expression evaluator borrowing an evaluator's collaborators
pub struct FilterEvaluator<'e, D> {
    operators: &'e OperatorRegistry<D>,
    functions: &'e FunctionRegistry<D>,
    regex_cache: &'e RegexCache,
}

impl<'e, D: Document> FilterEvaluator<'e, D> {
    #[inline]
    pub fn new(
        operators: &'e OperatorRegistry<D>,
        functions: &'e FunctionRegistry<D>,
        regex_cache: &'e RegexCache,
    ) -> Self {
        Self {
            operators,
            functions,
            regex_cache,
        }
    }

    /// Evaluate `expression` with `item` bound as `@` and test truthiness
    pub fn evaluate_predicate<'a>(
        &self,
        expression: &'a FilterExpression,
        item: &'a D,
    ) -> PathResult<bool> {
        let value = self.evaluate_expression(expression, item)?;
        Ok(value.is_truthy())
    }

    /// Evaluate `expression` to a value
    pub fn evaluate_expression<'a>(
        &self,
        expression: &'a FilterExpression,
        item: &'a D,
    ) -> PathResult<FilterValue<'a, D>> {
        match expression {
            FilterExpression::Literal(literal) => Ok(FilterValue::from_literal(literal)),
            FilterExpression::PropertyRef(path) => resolve_property(item, path),
            FilterExpression::Unary {
                operator: UnaryOp::Not,
                operand,
            } => {
                let value = self.evaluate_expression(operand, item)?;
                Ok(FilterValue::Bool(!value.is_truthy()))
            }
            FilterExpression::Binary {
                operator,
                left,
                right,
            } => self
                .evaluate_binary(operator, left, right, item)
                .map(FilterValue::Bool),
            FilterExpression::Call { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate_expression(arg, item))
                    .collect::<PathResult<Vec<_>>>()?;
                Ok(self.functions.call(name, &values).normalize())
            }
        }
    }

    fn evaluate_binary<'a>(
        &self,
        operator: &BinaryOp,
        left: &'a FilterExpression,
        right: &'a FilterExpression,
        item: &'a D,
    ) -> PathResult<bool> {
        let left_value = self.evaluate_expression(left, item)?;

        // logical operators skip the right operand once decided
        match operator {
            BinaryOp::And if !left_value.is_truthy() => return Ok(false),
            BinaryOp::Or if left_value.is_truthy() => return Ok(true),
            BinaryOp::And | BinaryOp::Or => {
                return Ok(self.evaluate_expression(right, item)?.is_truthy());
            }
            _ => {}
        }

        let right_value = self.evaluate_expression(right, item)?;
        let result = match operator {
            BinaryOp::Equal
            | BinaryOp::NotEqual
            | BinaryOp::Less
            | BinaryOp::LessEq
            | BinaryOp::Greater
            | BinaryOp::GreaterEq => compare(operator, &left_value, &right_value),
            BinaryOp::Contains | BinaryOp::StartsWith | BinaryOp::EndsWith => {
                string_test(operator, &left_value, &right_value)
            }
            BinaryOp::Matches => self.regex_match(&left_value, &right_value)?,
            BinaryOp::Custom(name) => self.operators.apply(name, &left_value, &right_value),
            BinaryOp::And | BinaryOp::Or => {
                return Err(evaluation_error("logical operator reached value comparison"));
            }
        };

        tracing::trace!(
            target: "treepath::filter",
            operator = operator.symbol(),
            result,
            "evaluated binary operator"
        );
        Ok(result)
    }

    /// `matches`: guard the pattern, compile through the cache, then search
    fn regex_match(&self, text: &FilterValue<'_, D>, pattern: &FilterValue<'_, D>) -> PathResult<bool> {
        let (Some(text), Some(pattern)) = (text.stringify(), pattern.stringify()) else {
            return Ok(false);
        };
        guard_pattern(&pattern)?;
        let regex = self
            .regex_cache
            .get_or_compile(&pattern)
            .map_err(|error| evaluation_error(format!("invalid regular expression: {error}")))?;
        Ok(regex.is_match(&text))
    }
}

/// Follow a property path from the current item; missing keys yield `Missing`
fn resolve_property<'a, D: Document>(item: &'a D, path: &[String]) -> PathResult<FilterValue<'a, D>> {
    let mut current = item;
    for name in path {
        check_property_name(name)?;
        let next = match current.node() {
            Node::Map(map) => map.lookup(name),
            Node::List(_) | Node::Scalar(_) => None,
        };
        match next {
            Some(value) => current = value,
            None => return Ok(FilterValue::Missing),
        }
    }
    Ok(FilterValue::from_document(current))
}
