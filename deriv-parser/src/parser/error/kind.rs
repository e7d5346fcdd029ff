use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::{ErrorKind, EXPR};

/// The end of the source code was reached where an operand was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// A symbol that cannot start an operand was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown symbol `{}`", symbol),
    labels = ["I expected a number, a variable, a function call, or a parenthesized expression here"],
)]
pub struct UnknownSymbol {
    /// The symbol that was found.
    pub symbol: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A function name was not followed by a parenthesized argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument for `{}`", name),
    labels = ["this function"],
    help = format!("write the argument in parentheses, like `{}(x)`", name),
)]
pub struct MissingFunctionArgument {
    /// The name of the function.
    pub name: String,
}

/// The imaginary unit `i` was used with a numeric domain that cannot represent it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the imaginary unit is not supported here",
    labels = ["this is the imaginary unit"],
    help = format!("parse the expression over the {} domain to use `i`", "complex".fg(EXPR)),
)]
pub struct ImaginaryUnitUnsupported;
