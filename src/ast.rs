use crate::interpreter::token::Token;

/// A method invocation: `do <name> and use <arg>, <arg>, ...`.
///
/// Shared by the call expression, the call statement and `set ... to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Method name as written; builtin lookup ignores case.
    pub name:      String,
    /// Argument expressions in source order. May be empty.
    pub arguments: Vec<Expr>,
    /// The `do` token.
    pub token:     Token,
}

/// A brace-delimited sequence of statements.
///
/// Blocks group statements for `if` and `while`; they do not introduce a
/// scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    /// The opening `{` token.
    pub token:      Token,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to exactly one value. Each variant keeps the
/// token it starts at, so that runtime errors point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, converted to `f64` at parse time.
    Number {
        value: f64,
        token: Token,
    },
    /// A text literal with escapes already applied.
    Text {
        value: String,
        token: Token,
    },
    /// Reference to a variable by name.
    Variable {
        name:  String,
        token: Token,
    },
    /// A builtin method call.
    Call(Call),
}

impl Expr {
    /// The token this expression starts at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Number { token, .. } | Self::Text { token, .. } | Self::Variable { token, .. } => {
                token
            },
            Self::Call(call) => &call.token,
        }
    }
}

/// A statement in the language.
///
/// Statements are executed for their side effects on the environment and
/// the output; they produce no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name has value <number>;`
    NumberAssignment {
        name:  String,
        value: f64,
        /// The leading identifier.
        token: Token,
    },
    /// `name means "<text>";`
    TextAssignment {
        name:  String,
        value: String,
        /// The leading identifier.
        token: Token,
    },
    /// `set name to do <method> and use ...;`
    SetFromCall {
        name:  String,
        call:  Call,
        /// The `set` keyword.
        token: Token,
    },
    /// `say <expression>;`
    Say {
        expr:  Expr,
        /// The `say` keyword.
        token: Token,
    },
    /// `do <method> and use ...;` with the result discarded.
    Call(Call),
    /// `{ ... }`
    Block(Block),
    /// `if <condition> { ... } else { ... }`
    If {
        condition:  Expr,
        then_block: Block,
        else_block: Option<Block>,
        /// The `if` keyword.
        token:      Token,
    },
    /// `while <condition> { ... }`
    While {
        condition: Expr,
        body:      Block,
        /// The `while` keyword.
        token:     Token,
    },
}

impl Statement {
    /// The token this statement starts at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::NumberAssignment { token, .. }
            | Self::TextAssignment { token, .. }
            | Self::SetFromCall { token, .. }
            | Self::Say { token, .. }
            | Self::If { token, .. }
            | Self::While { token, .. } => token,
            Self::Call(call) => &call.token,
            Self::Block(block) => &block.token,
        }
    }
}
