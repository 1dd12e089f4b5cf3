//! Fragment assertion macros for qfrag harnesses.
//!
//! These wrap `pretty_assertions` so that a mismatching fragment shows a
//! line diff of the two pretty-printed documents.

/// Render a `Source` and assert that it equals the expected JSON.
///
/// ```rust
/// assert_renders!(CollapseBuilder::new("user"), { "field": "user" });
/// ```
#[macro_export]
macro_rules! assert_renders {
    ($source:expr, $($expected:tt)+) => {{
        let actual = match qfrag::Source::source(&$source) {
            Ok(value) => value,
            Err(err) => panic!("assert_renders! failed: source() returned an error: {err}"),
        };
        let expected = serde_json::json!($($expected)+);
        pretty_assertions::assert_eq!(
            serde_json::to_string_pretty(&actual).unwrap(),
            serde_json::to_string_pretty(&expected).unwrap()
        );
    }};
}

/// Assert that rendering a `Source` fails, and that the error displays as
/// `$message`.
#[macro_export]
macro_rules! assert_render_fails {
    ($source:expr, $message:expr) => {{
        match qfrag::Source::source(&$source) {
            Ok(value) => panic!(
                "assert_render_fails! failed: expected an error, got {}",
                value
            ),
            Err(err) => pretty_assertions::assert_eq!(err.to_string(), $message),
        }
    }};
}

/// Keys present on a rendered object, sorted.
pub fn keys_of(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}
