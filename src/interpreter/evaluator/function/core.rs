use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{arithmetic, compare, input, text},
            io::Io,
        },
        token::Token,
        value::Value,
    },
};

/// Type alias for builtin method handlers.
///
/// A builtin receives the evaluated arguments in source order, the `do` token
/// of the call for error positions, and the interpreter's streams. Each
/// handler validates its own argument count before anything else.
pub type BuiltinFn = fn(&[Value], &Token, &mut Io<'_>) -> EvalResult<Value>;

/// Defines builtin methods by generating a lookup table.
///
/// Each entry maps a method name, in its canonical spelling, to a function
/// pointer implementing it.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_methods {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
    };
}

builtin_methods! {
    "readNumber" => input::read_number,
    "readString" => input::read_string,
    "add"        => arithmetic::add,
    "sub"        => arithmetic::sub,
    "mul"        => arithmetic::mul,
    "div"        => arithmetic::div,
    "toString"   => text::to_text,
    "concat"     => text::concat,
    "eq"         => compare::eq,
    "neq"        => compare::neq,
}

/// The registry of builtin methods an interpreter can call.
///
/// Name lookup is case-insensitive: `do ADD and use 1, 2` calls `add`.
#[derive(Clone, Copy)]
pub struct Builtins {
    table: &'static [BuiltinDef],
}

impl Builtins {
    /// The fixed set of builtins in `BUILTIN_TABLE`.
    #[must_use]
    pub fn standard() -> Self {
        Self { table: BUILTIN_TABLE }
    }

    fn lookup(&self, name: &str) -> Option<&'static BuiltinDef> {
        self.table.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Invokes a builtin by name.
    ///
    /// # Parameters
    /// - `name`: Method name as written in the call.
    /// - `args`: Evaluated argument values.
    /// - `token`: The call's `do` token, used for error positions.
    /// - `io`: Streams for builtins that prompt or read.
    ///
    /// # Errors
    /// `UnknownMethod` if no builtin has that name, otherwise whatever the
    /// builtin itself reports.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use msharp::interpreter::{
    ///     evaluator::{function::core::Builtins, io::Io},
    ///     token::{Position, Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let builtins = Builtins::standard();
    /// let token = Token::new(TokenKind::Do, "do", Position::new(1, 1));
    /// let mut input = Cursor::new("");
    /// let mut output = Vec::new();
    /// let mut io = Io::new(&mut input, &mut output);
    ///
    /// let sum = builtins.invoke("Add", &[Value::Number(2.0), Value::Number(3.0)], &token, &mut io)
    ///                   .unwrap();
    ///
    /// assert_eq!(sum, Value::Number(5.0));
    /// assert!(builtins.invoke("pow", &[], &token, &mut io).is_err());
    /// ```
    pub fn invoke(&self,
                  name: &str,
                  args: &[Value],
                  token: &Token,
                  io: &mut Io<'_>)
                  -> EvalResult<Value> {
        let builtin = self.lookup(name)
                          .ok_or_else(|| RuntimeError::UnknownMethod { name: name.to_string(),
                                                                       at:   token.position(), })?;

        (builtin.func)(args, token, io)
    }
}
