use std::fmt::Write as _;

use crate::interpreter::lexer::token::Token;

/// The root of a parsed program.
///
/// Holds the top-level statements in source order. Evaluation walks them
/// one by one and the last statement's result becomes the program's result.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// Each variant carries the token that anchors it in the source, so
/// diagnostics raised while evaluating a node can reproduce the offending
/// line and underline the construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its value and effects, e.g. `print(x);`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A braced sequence of statements with its own scope.
    Block {
        /// The statements between the braces.
        statements: Vec<Self>,
        /// The opening brace.
        token: Token,
    },
    /// A conditional statement.
    If {
        /// The condition deciding which branch runs.
        condition: Expr,
        /// The statement evaluated when the condition is truthy.
        then_branch: Box<Self>,
        /// The statement evaluated otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// The `if` keyword.
        token: Token,
    },
    /// A `return` statement.
    Return {
        /// The returned expression; an omitted one parses as `null`.
        value: Expr,
        /// The `return` keyword.
        token: Token,
    },
    /// A variable declaration.
    Var {
        /// The declared name.
        name: Token,
        /// The initializer; an omitted one parses as `null`.
        value: Expr,
        /// The `var` keyword.
        token: Token,
    },
    /// A function declaration.
    Fn(FunctionDef),
}

impl Statement {
    /// Gets the token anchoring `self` for diagnostics.
    #[must_use]
    pub const fn token(&self) -> Token {
        match self {
            Self::Expression { expr } => expr.token(),
            Self::Block { token, .. }
            | Self::If { token, .. }
            | Self::Return { token, .. }
            | Self::Var { token, .. } => *token,
            Self::Fn(def) => def.token,
        }
    }
}

/// A user-defined function declaration.
///
/// The body is a single statement. Conventionally that is a block, but `fn`
/// accepts any statement, and making an `if` the whole body is how
/// conditional early returns are written (see `Statement::If` handling in
/// the evaluator).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function's name.
    pub name: Token,
    /// The parameter names, in declaration order.
    pub params: Vec<Token>,
    /// The statement evaluated when the function is called.
    pub body: Box<Statement>,
    /// The `fn` keyword.
    pub token: Token,
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Integer {
        /// The decoded value.
        value: i64,
        /// The literal token.
        token: Token,
    },
    /// A floating-point literal.
    Float {
        /// The decoded value.
        value: f64,
        /// The literal token.
        token: Token,
    },
    /// A string literal; the token's span is the content between the quotes.
    Str {
        /// The literal token.
        token: Token,
    },
    /// A boolean literal.
    Boolean {
        /// The literal's value.
        value: bool,
        /// The literal token.
        token: Token,
    },
    /// The `null` literal.
    Null {
        /// The literal token.
        token: Token,
    },
    /// A name reference resolved through the scope chain.
    Identifier {
        /// The name token.
        token: Token,
    },
    /// An assignment to an already-declared name.
    Assignment {
        /// The target name.
        target: Token,
        /// The assigned expression.
        value: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOperator,
        /// Left operand.
        left: Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// The operator token.
        token: Token,
    },
    /// A unary prefix operation.
    Unary {
        /// The operator.
        op: UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// The operator token.
        token: Token,
    },
    /// A call expression.
    Call {
        /// The called expression.
        callee: Box<Self>,
        /// The arguments, in source order.
        args: Vec<Self>,
        /// The callee's anchor token.
        token: Token,
    },
}

impl Expr {
    /// Gets the token anchoring `self` for diagnostics.
    #[must_use]
    pub const fn token(&self) -> Token {
        match self {
            Self::Integer { token, .. }
            | Self::Float { token, .. }
            | Self::Str { token }
            | Self::Boolean { token, .. }
            | Self::Null { token }
            | Self::Identifier { token }
            | Self::Binary { token, .. }
            | Self::Unary { token, .. }
            | Self::Call { token, .. } => *token,
            Self::Assignment { target, .. } => *target,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`); both operands are always evaluated.
    And,
    /// Logical or (`||`); both operands are always evaluated.
    Or,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise xor (`^`)
    BitXor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
}

impl BinaryOperator {
    /// The operation's name as used in type mismatch diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Mod => "modulo",
            Self::Equal | Self::NotEqual | Self::Less | Self::Greater | Self::LessEqual
            | Self::GreaterEqual => "comparison",
            Self::And => "logical and",
            Self::Or => "logical or",
            Self::BitAnd => "bitwise and",
            Self::BitOr => "bitwise or",
            Self::BitXor => "bitwise xor",
            Self::ShiftLeft | Self::ShiftRight => "shift",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
    /// Logical NOT (`!x`, also spelled `not x`).
    Not,
    /// Bitwise NOT (`~x`).
    BitNot,
}

impl UnaryOperator {
    /// The operation's name as used in type mismatch diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Plus => "unary plus",
            Self::Minus => "unary minus",
            Self::Not => "logical not",
            Self::BitNot => "bitwise not",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree form of a program, two spaces of indent per level.
///
/// # Example
/// ```
/// use lume::ast::dump;
/// use lume::interpreter::lexer::core::tokenize;
/// use lume::interpreter::parser::core::parse;
///
/// let source = b"var x = 1;";
/// let (tokens, _) = tokenize(source);
/// let program = parse(&tokens, source).unwrap();
///
/// let rendered = dump(&program, source);
/// assert_eq!(rendered.lines().next(), Some("Program"));
/// assert_eq!(rendered.lines().nth(1), Some("  Var: x"));
/// ```
#[must_use]
pub fn dump(program: &Program, source: &[u8]) -> String {
    let mut out = String::new();
    out.push_str("Program\n");
    for statement in &program.statements {
        write_statement(&mut out, statement, source, 1);
    }
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_label(out: &mut String, label: &str, depth: usize) {
    indent(out, depth);
    out.push_str(label);
    out.push('\n');
}

fn name_of(token: Token, source: &[u8]) -> String {
    String::from_utf8_lossy(token.text(source)).into_owned()
}

fn write_statement(out: &mut String, statement: &Statement, source: &[u8], depth: usize) {
    indent(out, depth);
    match statement {
        Statement::Expression { expr } => {
            out.push_str("Expression\n");
            write_expr(out, expr, source, depth + 1);
        },
        Statement::Block { statements, .. } => {
            out.push_str("Block\n");
            for statement in statements {
                write_statement(out, statement, source, depth + 1);
            }
        },
        Statement::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            out.push_str("If\n");
            write_label(out, "condition:", depth + 1);
            write_expr(out, condition, source, depth + 2);
            write_label(out, "then:", depth + 1);
            write_statement(out, then_branch, source, depth + 2);
            if let Some(else_branch) = else_branch {
                write_label(out, "else:", depth + 1);
                write_statement(out, else_branch, source, depth + 2);
            }
        },
        Statement::Return { value, .. } => {
            out.push_str("Return\n");
            write_expr(out, value, source, depth + 1);
        },
        Statement::Var { name, value, .. } => {
            let _ = writeln!(out, "Var: {}", name_of(*name, source));
            write_expr(out, value, source, depth + 1);
        },
        Statement::Fn(def) => {
            let params: Vec<String> = def
                .params
                .iter()
                .map(|param| name_of(*param, source))
                .collect();
            let _ = writeln!(out, "Fn: {}({})", name_of(def.name, source), params.join(", "));
            write_statement(out, &def.body, source, depth + 1);
        },
    }
}

fn write_expr(out: &mut String, expr: &Expr, source: &[u8], depth: usize) {
    indent(out, depth);
    match expr {
        Expr::Integer { value, .. } => {
            let _ = writeln!(out, "Integer: {value}");
        },
        Expr::Float { value, .. } => {
            let _ = writeln!(out, "Float: {value}");
        },
        Expr::Str { token } => {
            let _ = writeln!(out, "Str: {}", name_of(*token, source));
        },
        Expr::Boolean { value, .. } => {
            let _ = writeln!(out, "Boolean: {value}");
        },
        Expr::Null { .. } => out.push_str("Null\n"),
        Expr::Identifier { token } => {
            let _ = writeln!(out, "Identifier: {}", name_of(*token, source));
        },
        Expr::Assignment { target, value } => {
            let _ = writeln!(out, "Assignment: {}", name_of(*target, source));
            write_expr(out, value, source, depth + 1);
        },
        Expr::Binary {
            op, left, right, ..
        } => {
            let _ = writeln!(out, "Binary: {op}");
            write_label(out, "left:", depth + 1);
            write_expr(out, left, source, depth + 2);
            write_label(out, "right:", depth + 1);
            write_expr(out, right, source, depth + 2);
        },
        Expr::Unary { op, operand, .. } => {
            let _ = writeln!(out, "Unary: {op}");
            write_expr(out, operand, source, depth + 1);
        },
        Expr::Call { callee, args, .. } => {
            out.push_str("Call\n");
            write_label(out, "callee:", depth + 1);
            write_expr(out, callee, source, depth + 2);
            for arg in args {
                write_label(out, "arg:", depth + 1);
                write_expr(out, arg, source, depth + 2);
            }
        },
    }
}
