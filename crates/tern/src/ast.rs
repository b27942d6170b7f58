//! Expression nodes delivered by the external parser
//!
//! The lexer and parser live outside this crate; they hand the
//! evaluator pre-parsed nodes of these kinds. The set is closed:
//! literals, collection literals, variable references, binary and unary
//! operators, the two short-circuit logical forms, the four assignment
//! forms, index read/write, and interpolation templates.

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value
    Literal(Literal),

    /// A list literal; evaluates to a fresh list every time
    List(Vec<Expr>),

    /// A map literal; evaluates to a fresh map every time
    Map(Vec<(Expr, Expr)>),

    /// A variable reference
    Variable(String),

    /// A dispatcher-mediated binary operation
    Binary {
        /// Operator
        op: BinOp,
        /// Left operand (the receiver)
        left: Box<Expr>,
        /// Right operand (the argument)
        right: Box<Expr>,
    },

    /// A unary operation
    Unary {
        /// Operator
        op: UnOp,
        /// Operand
        expr: Box<Expr>,
    },

    /// Short-circuit `&&`; fixed control flow, never dispatched
    And {
        /// Left operand, always evaluated
        left: Box<Expr>,
        /// Right operand, evaluated only when the left is truthy
        right: Box<Expr>,
    },

    /// Short-circuit `||`; fixed control flow, never dispatched
    Or {
        /// Left operand, always evaluated
        left: Box<Expr>,
        /// Right operand, evaluated only when the left is falsy
        right: Box<Expr>,
    },

    /// Simple assignment `name = expr`
    Assign {
        /// Target name
        name: String,
        /// Right-hand side
        expr: Box<Expr>,
    },

    /// Operational assignment `name op= expr`
    OpAssign {
        /// Target name
        name: String,
        /// Underlying operator
        op: BinOp,
        /// Right-hand side
        expr: Box<Expr>,
    },

    /// Or-assignment `name ||= expr`
    OrAssign {
        /// Target name
        name: String,
        /// Right-hand side, evaluated only when the branch requires it
        expr: Box<Expr>,
    },

    /// And-assignment `name &&= expr`
    AndAssign {
        /// Target name
        name: String,
        /// Right-hand side, evaluated only when the branch requires it
        expr: Box<Expr>,
    },

    /// Index read `target[key]`
    Index {
        /// The collection expression
        target: Box<Expr>,
        /// The key expression
        key: Box<Expr>,
    },

    /// Access-assignment `target[key] = value`; mutates the collection
    /// in place, never rebinds the target variable
    IndexAssign {
        /// The collection expression
        target: Box<Expr>,
        /// The key expression
        key: Box<Expr>,
        /// The value expression
        value: Box<Expr>,
    },

    /// An interpolation template of alternating text and expressions
    Interpolate(Vec<Segment>),

    /// Override-aware string conversion of a sub-expression; produced
    /// by template expansion
    Stringify(Box<Expr>),
}

/// A literal carried by a parsed node.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `nil`
    Nil,
    /// A boolean
    Bool(bool),
    /// An integer
    Int(i64),
    /// A float
    Float(f64),
    /// A string
    Str(String),
    /// A symbol name, interned at evaluation
    Symbol(String),
}

/// Binary operators resolved through the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl BinOp {
    /// The operator's name, as the override registry keys it.
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// Numeric negation, `-x`
    Neg,
    /// Truthiness negation, `!x`; fixed, never dispatched
    Not,
    /// Splat, `*x`
    Splat,
}

impl UnOp {
    /// The operator's registry name; the `@` suffix keeps unary minus
    /// and splat distinct from their binary spellings.
    pub fn name(self) -> &'static str {
        match self {
            UnOp::Neg => "-@",
            UnOp::Not => "!",
            UnOp::Splat => "*@",
        }
    }
}

/// One segment of an interpolation template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied through unchanged
    Text(String),
    /// An embedded expression, converted with `to_s` in string position
    Expr(Expr),
}

impl Expr {
    /// Shorthand for an integer literal node.
    pub fn int(n: i64) -> Expr {
        Expr::Literal(Literal::Int(n))
    }

    /// Shorthand for a string literal node.
    pub fn str(s: impl Into<String>) -> Expr {
        Expr::Literal(Literal::Str(s.into()))
    }

    /// Shorthand for a variable reference node.
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    /// Build a binary node.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
