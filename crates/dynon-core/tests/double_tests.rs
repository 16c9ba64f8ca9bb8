use dynon_core::{parse, Double, Value};

// ============================================================================
// Display precision
// ============================================================================

#[test]
fn precision_rounds_the_stored_binary_value() {
    // 8.055 has no exact binary form; it stores just below, so two digits
    // round down.
    let mut d = Double::new(8.055);
    d.set_precision(2);
    assert_eq!(d.to_string(), "8.05");
}

#[test]
fn precision_pads_with_zeros() {
    let mut d = Double::new(8.2);
    d.set_precision(4);
    assert_eq!(d.to_string(), "8.2000");

    let mut whole = Double::new(3.0);
    whole.set_precision(2);
    assert_eq!(whole.to_string(), "3.00");
}

#[test]
fn precision_zero_drops_the_fraction() {
    let mut d = Double::new(8.7);
    d.set_precision(0);
    assert_eq!(d.to_string(), "9");
}

#[test]
fn summed_timesheet_hours_render_with_two_digits() {
    let mut total = Double::new(0.0);
    total.set_precision(2);
    total += 8.2;
    total += 8.1;
    // The exact sum is 16.299999999999997; two digits round up.
    assert_eq!(total.to_string(), "16.30");
}

#[test]
fn default_rendering_keeps_integral_values_double() {
    assert_eq!(Double::new(8.0).to_string(), "8.0");
    assert_eq!(Double::new(-3.0).to_string(), "-3.0");
    assert_eq!(Double::new(-0.0).to_string(), "-0.0");
    assert_eq!(Double::new(8.25).to_string(), "8.25");
}

#[test]
fn extreme_magnitudes_render_in_exponent_notation() {
    // The shortest form, not a 300-digit fixed-point expansion.
    let rendered = Value::from(f64::MAX).to_json();
    assert_eq!(rendered, "1.7976931348623157e308");
    assert_eq!(
        Double::new(f64::MIN_POSITIVE).to_string(),
        "2.2250738585072014e-308"
    );

    // Both our parser and serde_json read the value back exactly.
    assert_eq!(parse(&rendered).unwrap().to_double().unwrap(), f64::MAX);
    let oracle: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(oracle.as_f64(), Some(f64::MAX));
}

// ============================================================================
// Value semantics
// ============================================================================

#[test]
fn precision_never_changes_the_stored_value() {
    let mut d = Double::new(8.055);
    d.set_precision(2);
    assert_eq!(d.value(), 8.055);
}

#[test]
fn set_value_keeps_the_precision() {
    let mut d = Double::new(1.5);
    d.set_precision(3);
    d.set_value(2.5);
    assert_eq!(d.precision(), Some(3));
    assert_eq!(d.to_string(), "2.500");
}

#[test]
fn arithmetic_uses_full_precision() {
    let mut d = Double::new(10.0);
    d.set_precision(1);
    d /= 3.0;
    assert_eq!(d.value(), 10.0 / 3.0);
    assert_eq!(d.to_string(), "3.3");
    d *= 3.0;
    d -= 10.0;
    assert_eq!(d.value(), 10.0 / 3.0 * 3.0 - 10.0);
}

#[test]
fn equality_ignores_display_precision() {
    let mut a = Double::new(8.2);
    a.set_precision(1);
    let b = Double::new(8.2);
    assert_eq!(a, b);
    assert_ne!(Double::new(8.2), Double::new(8.3));
}
