/// Builds a property bag: `props!{ "name" => "peter", "age" => 30_i64 }`.
#[macro_export]
macro_rules! props {
    ( $( $name:literal => $value:expr ),* $(,)? ) => {
        cypherx::Properties::from_iter([
            $( ($name, cypherx::Value::from($value)), )*
        ])
    };
}

/// Unwraps an error and asserts that it matches the given predicate.
#[macro_export]
macro_rules! assert_err {
    ($res:expr, $pred:ident) => {{
        let err = $res.unwrap_err();
        assert!(err.$pred(), "unexpected error: {err}");
        err
    }};
}
