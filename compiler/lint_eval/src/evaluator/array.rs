//! Array construction, indexing, and `length`.

use lint_ir::{SyntaxTree, TypeRef};
use tracing::debug;

use super::Folder;
use crate::numeric::{common_type, Numeric};
use crate::Value;

impl<T: SyntaxTree + ?Sized> Folder<'_, T> {
    /// `{a, b, c}`: fold at most `max_array_elements` elements.
    ///
    /// An unknown element makes the whole array unknown unless partial
    /// evaluation is allowed, in which case it is left out.
    pub(super) fn fold_array_literal(&mut self, element: TypeRef, elements: &[T::Node]) -> Value {
        let limit = self.config.limits.max_array_elements;
        if elements.len() > limit {
            debug!(len = elements.len(), limit, "array initializer truncated");
        }
        let mut values = Vec::with_capacity(elements.len().min(limit));
        for &node in elements.iter().take(limit) {
            let value = self.fold(node);
            if value.is_unknown() {
                if !self.config.allow_partial {
                    return Value::Unknown;
                }
                continue;
            }
            values.push(value);
        }
        Value::Array(unify_elements(element, values))
    }

    /// `new T[n]`: `n` zero values, clamped to `max_new_array_length`.
    pub(super) fn fold_new_array(&mut self, element: TypeRef, length: T::Node) -> Value {
        let Some(requested) = self.fold(length).as_integral() else {
            return Value::Unknown;
        };
        // A negative length throws at runtime.
        let Ok(requested) = usize::try_from(requested) else {
            return Value::Unknown;
        };
        let limit = self.config.limits.max_new_array_length;
        if requested > limit {
            debug!(requested, limit, "array allocation clamped");
        }
        Value::Array(vec![Value::zero_of(element); requested.min(limit)])
    }

    pub(super) fn fold_index(&mut self, receiver: T::Node, index: T::Node) -> Value {
        let Value::Array(items) = self.fold(receiver) else {
            return Value::Unknown;
        };
        self.fold(index)
            .as_integral()
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| items.into_iter().nth(i))
            .unwrap_or(Value::Unknown)
    }

    pub(super) fn fold_length(&mut self, receiver: T::Node) -> Value {
        match self.fold(receiver) {
            Value::Array(items) => i32::try_from(items.len()).map_or(Value::Unknown, Value::Int),
            _ => Value::Unknown,
        }
    }
}

/// Bring array elements to one element type.
///
/// A primitive element type converts every numeric element to it. With
/// an unknown element type, numeric elements are widened to their common
/// type. Anything else is kept as folded.
fn unify_elements(element: TypeRef, values: Vec<Value>) -> Vec<Value> {
    let target = match element {
        TypeRef::Primitive(ty) => Some(ty),
        TypeRef::Unknown => values
            .iter()
            .map(Value::primitive_type)
            .try_fold(None, |acc, ty| {
                let ty = ty?;
                Some(Some(match acc {
                    None => ty,
                    Some(acc) => common_type(acc, ty)?,
                }))
            })
            .flatten(),
        TypeRef::String | TypeRef::Object => None,
    };
    let Some(target) = target.filter(|ty| ty.is_numeric()) else {
        return values;
    };
    values
        .into_iter()
        .map(|value| match Numeric::of(&value) {
            Some(number) => number.convert(target).unwrap_or(value),
            None => value,
        })
        .collect()
}
