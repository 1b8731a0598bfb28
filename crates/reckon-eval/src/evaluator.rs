//! Tree-walking evaluator for the arithmetic AST.
//!
//! Pure IEEE-754 arithmetic over `f64`. Division by zero produces an
//! infinity or NaN here; the pipeline classifies non-finite results as a
//! math error afterwards. Recursion depth is bounded by the parser's
//! nesting cap, so the walk cannot overflow the stack.

use reckon_types::ast::{BinOp, Expr, ExprKind, UnaryOp};

/// Evaluate an expression tree to a number.
pub fn eval_expr(expr: &Expr) -> f64 {
    match &expr.kind {
        ExprKind::Number(n) => *n,
        ExprKind::Paren(inner) => eval_expr(inner),
        ExprKind::Unary { op, operand } => {
            let value = eval_expr(operand);
            match op {
                UnaryOp::Neg => -value,
                UnaryOp::Plus => value,
            }
        }
        ExprKind::Binary { left, op, right } => {
            let l = eval_expr(left);
            let r = eval_expr(right);
            match op {
                BinOp::Add => l + r,
                BinOp::Sub => l - r,
                BinOp::Mul => l * r,
                BinOp::Div => l / r,
            }
        }
    }
}
