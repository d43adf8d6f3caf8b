use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    ast::{Block, Call, Expr, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{
            function::core::Builtins,
            io::{Io, positioned},
        },
        lexer::tokenize,
        parser::parse,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An interpreter bound to the process's standard input and output.
pub type StdioInterpreter = Interpreter<StdinLock<'static>, Stdout>;

/// Stores the runtime evaluation state.
///
/// This struct holds the variable environment, the builtin registry and the
/// streams the program reads from and writes to.
///
/// ## Usage
///
/// An `Interpreter` is created once and may execute any number of programs;
/// variables assigned by one execution stay visible to the next. Independent
/// instances share nothing.
pub struct Interpreter<R, W> {
    environment: Environment,
    builtins:    Builtins,
    input:       R,
    output:      W,
}

impl StdioInterpreter {
    /// Creates an interpreter that prompts and prints on stdout and reads
    /// from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Creates an interpreter with an empty environment and the standard
    /// builtins.
    pub fn new(input: R, output: W) -> Self {
        Self::with_parts(Environment::new(), Builtins::standard(), input, output)
    }

    pub const fn with_parts(environment: Environment,
                            builtins: Builtins,
                            input: R,
                            output: W)
                            -> Self {
        Self { environment,
               builtins,
               input,
               output }
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Lends out the interpreter's streams, e.g. to an interactive loop that
    /// reads its lines from the same input the program does.
    pub fn io(&mut self) -> Io<'_> {
        Io::new(&mut self.input, &mut self.output)
    }

    /// Runs one execution unit: tokenize, parse, then execute.
    ///
    /// Nothing runs unless the whole source lexes and parses. Once execution
    /// starts, the first runtime failure stops it; statements before the
    /// failure keep their effects.
    ///
    /// # Errors
    /// The first lexical, syntax or runtime failure.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use msharp::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(Cursor::new(""), Vec::new());
    /// interpreter.execute_source("set x to do add and use 2, 3; say x;").unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"5\n");
    /// ```
    pub fn execute_source(&mut self, source: &str) -> Result<(), Error> {
        let tokens = tokenize(source)?;
        let program = parse(&tokens)?;
        self.execute_program(&program)?;

        Ok(())
    }

    /// Executes statements in order, stopping at the first failure.
    pub fn execute_program(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.execute_statement(statement))
    }

    /// Executes a single statement.
    ///
    /// Handles assignments, `say`, calls, blocks, `if` and `while`.
    /// Statements only act through the environment and the output stream.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::NumberAssignment { name, value, .. } => {
                self.environment.set(name.clone(), Value::Number(*value));
                Ok(())
            },
            Statement::TextAssignment { name, value, .. } => {
                self.environment.set(name.clone(), Value::Text(value.clone()));
                Ok(())
            },
            Statement::SetFromCall { name, call, .. } => {
                let value = self.evaluate_call(call)?;
                self.environment.set(name.clone(), value);
                Ok(())
            },
            Statement::Say { expr, token } => {
                let value = self.evaluate_expression(expr)?;
                positioned(writeln!(self.output, "{value}"), token)
            },
            Statement::Call(call) => self.evaluate_call(call).map(drop),
            Statement::Block(block) => self.execute_block(block),
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => {
                if self.evaluate_expression(condition)?.is_truthy() {
                    self.execute_block(then_block)
                } else if let Some(else_block) = else_block {
                    self.execute_block(else_block)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition, body, .. } => {
                while self.evaluate_expression(condition)?.is_truthy() {
                    self.execute_block(body)?;
                }
                Ok(())
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals evaluate to themselves, variables are looked up in the
    /// environment and calls go to the builtin registry.
    pub fn evaluate_expression(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Text { value, .. } => Ok(Value::Text(value.clone())),
            Expr::Variable { name, token } => self.environment.get(name, token),
            Expr::Call(call) => self.evaluate_call(call),
        }
    }

    /// Blocks run in the surrounding environment; they open no scope.
    fn execute_block(&mut self, block: &Block) -> EvalResult<()> {
        self.execute_program(&block.statements)
    }

    /// Evaluates the arguments left to right, then invokes the builtin.
    fn evaluate_call(&mut self, call: &Call) -> EvalResult<Value> {
        let args = call.arguments
                       .iter()
                       .map(|arg| self.evaluate_expression(arg))
                       .collect::<EvalResult<Vec<_>>>()?;

        let mut io = Io::new(&mut self.input, &mut self.output);
        self.builtins.invoke(&call.name, &args, &call.token, &mut io)
    }
}
