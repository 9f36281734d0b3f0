//! Common source fixtures.

pub const CORE_LIBRARY: &str = r#"
func print(value) {}
func add(a, b) {}
"#;

pub const SHAPES: &str = r#"
struct Point { x, y }
let origin = 0;
"#;

pub const SHAPES_EXTRA: &str = r#"
struct Size { w, h }
let unit = origin;
"#;

pub const SHAPES_MORE: &str = r#"
func area(s) {}
let zero = area(unit);
"#;

/// Statements interleaved with declarations.
pub const SCRIPT: &str = r#"
let greeting = "hello";
print(greeting);
let total = add(1, 2);
print(total);
print(add(total, 3));
"#;

pub const IR_BUFFER: &str = r#"
struct Pair { a, b }
ir @swap : Pair {
    load a
    load b
    store a
}
let after = 1;
ir @first : Pair {
    ret a
}
"#;
