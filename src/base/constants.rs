//! Domain constants shared across the frontend.

/// Output name that stands for standard input.
pub const STDIN_OUTPUT_NAME: &str = "<stdin>";

/// Module identifier used when the input is standard input.
pub const STDIN_MODULE: &str = "stdin";

/// Module identifier substituted for scripts whose file stem is not an identifier.
pub const MAIN_FALLBACK_MODULE: &str = "main";

/// Module identifier substituted after a "bad module name" diagnostic.
pub const BAD_MODULE: &str = "bad";

/// Compiler-provided module, importable only with builtin access.
pub const BUILTIN_MODULE: &str = "Builtin";

/// Module implicitly imported into every unit that is type checked.
pub const DEFAULT_AUTO_IMPORT: &str = "core";

/// File extension of Weft sources.
pub const SOURCE_EXTENSION: &str = "weft";

/// File extension of buffers mixing declarations with IR blocks.
pub const IR_EXTENSION: &str = "wir";

/// Keywords of the reference grammar. None of these is a legal identifier.
pub const KEYWORDS: &[&str] = &["func", "import", "ir", "let", "struct"];
