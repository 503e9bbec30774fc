#[test]
fn captures_value_and_source() {
    let a = 1;
    let b = 2;
    assert_eq!(c3p::stringify!(a + b), (3, "a + b"));
}

#[test]
fn grouped_expression() {
    let x = 4;
    let (value, source) = c3p::stringify!((x + 1) * 2);
    assert_eq!(value, 10);
    assert_eq!(source, "(x + 1) * 2");
}

#[test]
fn string_literal_keeps_escapes_and_braces() {
    let (value, source) = c3p::stringify!("Hello, {name}\n");
    assert_eq!(value, "Hello, {name}\n");
    assert_eq!(source, r#""Hello, {name}\n""#);
}

#[test]
fn raw_string_is_captured_as_written() {
    let (value, source) = c3p::stringify!(r#"say "hi" \t"#);
    assert_eq!(value, "say \"hi\" \\t");
    assert_eq!(source, r###"r#"say "hi" \t"#"###);
}

#[test]
fn argument_is_evaluated_once() {
    let mut calls = 0;
    let mut bump = || {
        calls += 1;
        calls
    };
    let (value, source) = c3p::stringify!(bump());
    assert_eq!(value, 1);
    assert_eq!(source, "bump()");
    assert_eq!(calls, 1);
}

#[test]
#[rustfmt::skip]
fn spacing_is_kept_as_written() {
    let a: i32 = 1;
    let b = 2;
    assert_eq!(c3p::stringify!(a+b), (3, "a+b"));
    let (value, source) = c3p::stringify!(a .  max( b ));
    assert_eq!(value, 2);
    assert_eq!(source, "a .  max( b )");
}

#[test]
#[rustfmt::skip]
fn call_keeps_inner_spacing() {
    fn f(x: i32) -> i32 {
        x * 2
    }
    let x = 5;
    assert_eq!(c3p::stringify!(f( x )), (10, "f( x )"));
}

#[test]
#[rustfmt::skip]
fn nested_macro_is_captured_as_written() {
    let name = "slope";
    let (value, source) = c3p::stringify!(format!("{name}\n"));
    assert_eq!(value, "slope\n");
    assert_eq!(source, r#"format!("{name}\n")"#);

    let a = 1;
    let b = 2;
    assert_eq!(c3p::stringify!(vec![a,b].len()), (2, "vec![a,b].len()"));
}
