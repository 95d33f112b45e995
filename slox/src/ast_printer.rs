use crate::expr::Expr;

/// Renders an expression in fully parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
pub fn ast_to_string(expr: &Expr<'_>) -> String {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(operator.lexeme.unwrap_or("nil"), &[left, right]),
        Expr::Grouping(expr) => parenthesize("group", &[expr]),
        Expr::Literal(value) => value.unwrap_or("nil").to_string(),
        Expr::Unary { operator, right } => parenthesize(operator.lexeme.unwrap_or("nil"), &[right]),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr<'_>]) -> String {
    let mut str = String::new();
    str.push('(');
    str.push_str(name);
    for expr in exprs {
        str.push(' ');
        str.push_str(&ast_to_string(expr));
    }
    str.push(')');
    str
}
