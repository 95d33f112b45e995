use slox::{
    ast_printer::ast_to_string, parse_source, ErrorReporter, Expr, Reporter, Scanner, Token, TokenTy,
};

/// Shape of a tree, ignoring token positions.
#[derive(Debug, PartialEq)]
enum Shape {
    Binary(Box<Shape>, String, Box<Shape>),
    Grouping(Box<Shape>),
    Literal(String),
    Unary(String, Box<Shape>),
}

fn shape(expr: &Expr<'_>) -> Shape {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => Shape::Binary(
            Box::new(shape(left)),
            operator.lexeme.unwrap_or_default().to_string(),
            Box::new(shape(right)),
        ),
        Expr::Grouping(inner) => Shape::Grouping(Box::new(shape(inner))),
        Expr::Literal(value) => Shape::Literal(value.unwrap_or("nil").to_string()),
        Expr::Unary { operator, right } => Shape::Unary(
            operator.lexeme.unwrap_or_default().to_string(),
            Box::new(shape(right)),
        ),
    }
}

/// Reads the printer's prefix notation back into a shape.
struct PrefixReader<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
}

impl<'a> PrefixReader<'a> {
    fn read(&mut self) -> Shape {
        let token = self.next();
        if token.ty != TokenTy::LeftParen {
            return Shape::Literal(token.lexeme.unwrap_or_default().to_string());
        }
        let head = self.next();
        let mut operands = Vec::new();
        while self.tokens[self.current].ty != TokenTy::RightParen {
            operands.push(self.read());
        }
        self.next();

        let name = head.lexeme.unwrap_or_default().to_string();
        match (head.ty, operands.len()) {
            (TokenTy::Identifier, 1) if name == "group" => {
                Shape::Grouping(Box::new(operands.remove(0)))
            }
            (_, 1) => Shape::Unary(name, Box::new(operands.remove(0))),
            (_, 2) => {
                let right = operands.remove(1);
                let left = operands.remove(0);
                Shape::Binary(Box::new(left), name, Box::new(right))
            }
            (_, n) => panic!("unexpected arity {n} for {name}"),
        }
    }

    fn next(&mut self) -> Token<'a> {
        let token = self.tokens[self.current];
        self.current += 1;
        token
    }
}

fn reread(printed: &str) -> Shape {
    let mut reporter = ErrorReporter::new(Vec::new());
    let tokens = Scanner::new(printed, &mut reporter).scan_tokens();
    assert_eq!(reporter.error_count(), 0);
    PrefixReader { tokens, current: 0 }.read()
}

#[test]
fn printed_trees_read_back_to_the_same_shape() {
    let sources = [
        "1 + 2 * 3",
        "1 - 2 - 3",
        "-(1 + 2) / 4.5 >= 3 == !false",
        "((nil))",
        "--1 * -(2 - -3)",
        "1 < 2 != 3 <= 4",
        "true == (false != nil)",
    ];
    for source in sources {
        let mut reporter = ErrorReporter::new(Vec::new());
        let expr = parse_source(source, &mut reporter).unwrap();
        let printed = ast_to_string(&expr);
        assert_eq!(reread(&printed), shape(&expr), "{source} printed as {printed}");
    }
}

#[test]
fn lexical_errors_withhold_the_tree() {
    let mut reporter = ErrorReporter::new(Vec::new());
    let result = parse_source("1 + # 2", &mut reporter);
    assert!(matches!(result, Err(slox::LoxError::Source { errors: 1 })));
}

#[test]
fn syntax_errors_surface_as_parse_error() {
    let mut reporter = ErrorReporter::new(Vec::new());
    let result = parse_source("(1 + 2", &mut reporter);
    let Err(slox::LoxError::Syntax(err)) = result else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.message, "Expect ')' after expression.");
    assert_eq!(err.location, " at end");
}
