use pretty_assertions::assert_eq;

use super::*;

#[test]
fn narrow_integers_compute_as_int() {
    assert_eq!(Numeric::of(&Value::Byte(-3)), Some(Numeric::Int(-3)));
    assert_eq!(Numeric::of(&Value::Short(300)), Some(Numeric::Int(300)));
    assert_eq!(Numeric::of(&Value::Char(0xFFFF)), Some(Numeric::Int(65535)));
    assert_eq!(Numeric::of(&Value::Bool(true)), None);
    assert_eq!(Numeric::of(&Value::string("1")), None);
}

#[test]
fn promotion_picks_the_wider_operand() {
    assert_eq!(
        promote(Numeric::Int(2), Numeric::Long(3)),
        Promoted::Long(2, 3)
    );
    assert_eq!(
        promote(Numeric::Float(1.5), Numeric::Double(2.5)),
        Promoted::Double(1.5, 2.5)
    );
    assert_eq!(
        promote(Numeric::Long(1), Numeric::Float(0.5)),
        Promoted::Float(1.0, 0.5)
    );
    assert_eq!(promote(Numeric::Int(1), Numeric::Int(2)), Promoted::Int(1, 2));
}

#[test]
fn conversions_truncate_and_wrap() {
    assert_eq!(
        Numeric::Double(3.9).convert(PrimitiveType::Int),
        Some(Value::Int(3))
    );
    assert_eq!(
        Numeric::Double(-3.9).convert(PrimitiveType::Int),
        Some(Value::Int(-3))
    );
    assert_eq!(
        Numeric::Int(300).convert(PrimitiveType::Byte),
        Some(Value::Byte(44))
    );
    assert_eq!(
        Numeric::Long(1 << 32).convert(PrimitiveType::Int),
        Some(Value::Int(0))
    );
    assert_eq!(
        Numeric::Int(-1).convert(PrimitiveType::Char),
        Some(Value::Char(0xFFFF))
    );
    assert_eq!(
        Numeric::Double(f64::NAN).convert(PrimitiveType::Long),
        Some(Value::Long(0))
    );
    assert_eq!(
        Numeric::Double(1e20).convert(PrimitiveType::Int),
        Some(Value::Int(i32::MAX))
    );
    assert_eq!(Numeric::Int(1).convert(PrimitiveType::Boolean), None);
}

#[test]
fn common_type_widens_like_assignment() {
    use PrimitiveType::{Boolean, Byte, Char, Double, Float, Int, Long, Short};

    assert_eq!(common_type(Int, Int), Some(Int));
    assert_eq!(common_type(Byte, Short), Some(Short));
    assert_eq!(common_type(Char, Short), Some(Int));
    assert_eq!(common_type(Int, Long), Some(Long));
    assert_eq!(common_type(Long, Float), Some(Float));
    assert_eq!(common_type(Float, Double), Some(Double));
    assert_eq!(common_type(Boolean, Int), None);
    assert_eq!(common_type(Boolean, Boolean), Some(Boolean));
}
