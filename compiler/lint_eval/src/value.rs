//! The value every fold produces.
//!
//! `Value` is a closed tagged union: every operator dispatch site matches on
//! it exhaustively. [`Value::Unknown`] is the single "inconclusive" answer;
//! callers treat it as "skip the check".

use std::fmt::Write;

use lint_ir::{Literal, PrimitiveType, TypeRef};

/// Result of folding an expression.
///
/// Equality compares floating-point payloads bitwise, so `NaN == NaN` and
/// `0.0 != -0.0` here. Evaluating the same node twice yields equal values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Short(i16),
    Byte(i8),
    /// UTF-16 code unit.
    Char(u16),
    String(String),
    /// Never contains [`Value::Unknown`].
    Array(Vec<Value>),
    Unknown,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Unknown, Value::Unknown) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(n) => Value::Int(*n),
            Literal::Long(n) => Value::Long(*n),
            Literal::Float(f) => Value::Float(*f),
            Literal::Double(d) => Value::Double(*d),
            Literal::Char(c) => Value::Char(*c),
            Literal::String(s) => Value::String(s.to_string()),
        }
    }
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// The default value of a freshly allocated array slot of type `ty`.
    pub fn zero_of(ty: TypeRef) -> Value {
        match ty.primitive() {
            Some(PrimitiveType::Boolean) => Value::Bool(false),
            Some(PrimitiveType::Byte) => Value::Byte(0),
            Some(PrimitiveType::Short) => Value::Short(0),
            Some(PrimitiveType::Char) => Value::Char(0),
            Some(PrimitiveType::Int) => Value::Int(0),
            Some(PrimitiveType::Long) => Value::Long(0),
            Some(PrimitiveType::Float) => Value::Float(0.0),
            Some(PrimitiveType::Double) => Value::Double(0.0),
            None => Value::Null,
        }
    }

    /// The primitive type of a scalar value.
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        match self {
            Value::Bool(_) => Some(PrimitiveType::Boolean),
            Value::Byte(_) => Some(PrimitiveType::Byte),
            Value::Short(_) => Some(PrimitiveType::Short),
            Value::Char(_) => Some(PrimitiveType::Char),
            Value::Int(_) => Some(PrimitiveType::Int),
            Value::Long(_) => Some(PrimitiveType::Long),
            Value::Float(_) => Some(PrimitiveType::Float),
            Value::Double(_) => Some(PrimitiveType::Double),
            Value::Null | Value::String(_) | Value::Array(_) | Value::Unknown => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "String",
            Value::Array(_) => "array",
            Value::Unknown => "unknown",
            scalar => scalar.primitive_type().map_or("unknown", PrimitiveType::name),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Integral value usable as an array index or length.
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            Value::Byte(n) => Some(i64::from(*n)),
            Value::Short(n) => Some(i64::from(*n)),
            Value::Char(c) => Some(i64::from(*c)),
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Rendering used by string concatenation; `None` for values that have
    /// no static text (arrays print an identity hash at runtime).
    pub fn concat_text(&self) -> Option<String> {
        Some(match self {
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Long(n) => n.to_string(),
            Value::Short(n) => n.to_string(),
            Value::Byte(n) => n.to_string(),
            Value::Char(c) => char::from_u32(u32::from(*c))
                .unwrap_or(char::REPLACEMENT_CHARACTER)
                .to_string(),
            Value::Float(f) => render_float(f64::from(*f), &format!("{f:e}")),
            Value::Double(d) => render_float(*d, &format!("{d:e}")),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Unknown => return None,
        })
    }
}

/// Render a float the way the host runtime's `toString` does: plain decimal
/// for magnitudes in `[1e-3, 1e7)`, otherwise `d.dddE<exp>`, always with at
/// least one fractional digit.
///
/// `scientific` is Rust's shortest round-trip `{:e}` rendering of the same
/// number at its own width.
fn render_float(value: f64, scientific: &str) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    let (negative, unsigned) = match scientific.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, scientific),
    };
    let (mantissa, exponent) = unsigned.split_once('e').unwrap_or((unsigned, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if (-3..7).contains(&exponent) {
        if exponent >= 0 {
            let int_len = exponent.unsigned_abs() as usize + 1;
            if digits.len() > int_len {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            } else {
                out.push_str(&digits);
                out.extend(std::iter::repeat('0').take(int_len - digits.len()));
                out.push_str(".0");
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(exponent.unsigned_abs() as usize - 1));
            out.push_str(&digits);
        }
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        out.push('.');
        out.push_str(if rest.is_empty() { "0" } else { rest });
        let _ = write!(out, "E{exponent}");
    }
    out
}

#[cfg(test)]
mod tests;
