use text_size::TextRange;

use crate::base::Name;

/// Expression tree for initialisers and top-level statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name { name: Name, range: TextRange },
    Integer { value: i64, range: TextRange },
    String { value: String, range: TextRange },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        range: TextRange,
    },
}

impl Expr {
    pub fn range(&self) -> TextRange {
        match self {
            Expr::Name { range, .. }
            | Expr::Integer { range, .. }
            | Expr::String { range, .. }
            | Expr::Call { range, .. } => *range,
        }
    }

    /// Visit every name referenced by this expression, left to right.
    pub fn for_each_name(&self, f: &mut impl FnMut(&Name, TextRange)) {
        match self {
            Expr::Name { name, range } => f(name, *range),
            Expr::Integer { .. } | Expr::String { .. } => {}
            Expr::Call { callee, args, .. } => {
                callee.for_each_name(f);
                for arg in args {
                    arg.for_each_name(f);
                }
            }
        }
    }
}
