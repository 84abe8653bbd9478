//! Message template rendering.

use std::fmt::{self, Write};

const PLACEHOLDER: &str = "{}";

/// Substitute `args` into the `{}` placeholders of `template`, in order.
///
/// Argument count is not checked against placeholder count. Placeholders
/// without an argument are left as `{}`; arguments without a placeholder are
/// appended, each after a single space.
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(PLACEHOLDER) {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => {
                let _ = write!(out, "{}", arg);
            }
            None => out.push_str(PLACEHOLDER),
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    out.push_str(rest);

    for arg in args {
        let _ = write!(out, " {}", arg);
    }
    out
}
