use pretty_assertions::assert_eq;

use super::*;

#[test]
fn literals_convert_to_their_value() {
    assert_eq!(Value::from(&Literal::Int(7)), Value::Int(7));
    assert_eq!(Value::from(&Literal::Long(-1)), Value::Long(-1));
    assert_eq!(Value::from(&Literal::Char(u16::from(b'a'))), Value::Char(97));
    assert_eq!(Value::from(&Literal::string("hi")), Value::string("hi"));
    assert_eq!(Value::from(&Literal::Null), Value::Null);
}

#[test]
fn float_equality_is_bitwise() {
    assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
    assert_ne!(Value::Double(0.0), Value::Double(-0.0));
    assert_ne!(Value::Int(1), Value::Long(1));
}

#[test]
fn zero_values_follow_the_element_type() {
    assert_eq!(Value::zero_of(TypeRef::INT), Value::Int(0));
    assert_eq!(Value::zero_of(TypeRef::BOOLEAN), Value::Bool(false));
    assert_eq!(Value::zero_of(TypeRef::CHAR), Value::Char(0));
    assert_eq!(Value::zero_of(TypeRef::DOUBLE), Value::Double(0.0));
    assert_eq!(Value::zero_of(TypeRef::String), Value::Null);
    assert_eq!(Value::zero_of(TypeRef::Unknown), Value::Null);
}

#[test]
fn type_names() {
    assert_eq!(Value::Short(1).type_name(), "short");
    assert_eq!(Value::string("").type_name(), "String");
    assert_eq!(Value::Array(vec![]).type_name(), "array");
    assert_eq!(Value::Unknown.type_name(), "unknown");
}

#[test]
fn integral_accessor_covers_every_integer_width() {
    assert_eq!(Value::Byte(-2).as_integral(), Some(-2));
    assert_eq!(Value::Char(65).as_integral(), Some(65));
    assert_eq!(Value::Long(1 << 40).as_integral(), Some(1 << 40));
    assert_eq!(Value::Float(1.0).as_integral(), None);
}

#[test]
fn concat_text_renders_scalars() {
    assert_eq!(Value::Null.concat_text().as_deref(), Some("null"));
    assert_eq!(Value::Bool(true).concat_text().as_deref(), Some("true"));
    assert_eq!(Value::Char(u16::from(b'x')).concat_text().as_deref(), Some("x"));
    assert_eq!(Value::Array(vec![]).concat_text(), None);
    assert_eq!(Value::Unknown.concat_text(), None);
}

#[test]
fn floats_render_like_the_host_runtime() {
    let text = |v: Value| v.concat_text().unwrap_or_default();
    assert_eq!(text(Value::Float(1.0)), "1.0");
    assert_eq!(text(Value::Float(1.5)), "1.5");
    assert_eq!(text(Value::Double(100.0)), "100.0");
    assert_eq!(text(Value::Double(123.456)), "123.456");
    assert_eq!(text(Value::Double(0.001)), "0.001");
    assert_eq!(text(Value::Double(0.0001)), "1.0E-4");
    assert_eq!(text(Value::Double(1.0e7)), "1.0E7");
    assert_eq!(text(Value::Double(1.5e10)), "1.5E10");
    assert_eq!(text(Value::Double(-2.5)), "-2.5");
    assert_eq!(text(Value::Double(-0.0)), "-0.0");
    assert_eq!(text(Value::Double(f64::NAN)), "NaN");
    assert_eq!(text(Value::Float(f32::NEG_INFINITY)), "-Infinity");
    assert_eq!(text(Value::Float(0.1)), "0.1");
}
