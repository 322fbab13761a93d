use crate::Scalar;

/// Parsed formula tree.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Expr {
    Constant(Scalar),
    Variable,
    Negate(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Function, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Functions callable from a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Function {
    Sqrt,
    Exp,
    Ln,
    Log10,
    Sin,
    Cos,
    Tan,
    Abs,
}

impl Function {
    pub(super) fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sqrt" => Self::Sqrt,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(function)
    }

    fn apply(self, z: Scalar) -> Scalar {
        match self {
            Self::Sqrt => z.sqrt(),
            Self::Exp => z.exp(),
            Self::Ln => z.ln(),
            Self::Log10 => z.log10(),
            Self::Sin => z.sin(),
            Self::Cos => z.cos(),
            Self::Tan => z.tan(),
            Self::Abs => Scalar::new(z.norm(), 0.0),
        }
    }
}

impl Expr {
    pub(super) fn eval(&self, x: Scalar) -> Scalar {
        match self {
            Self::Constant(value) => *value,
            Self::Variable => x,
            Self::Negate(inner) => -inner.eval(x),
            Self::Binary(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs / rhs,
                    BinaryOp::Pow => power(lhs, rhs),
                }
            }
            Self::Call(function, arg) => function.apply(arg.eval(x)),
        }
    }

    pub(super) fn contains_variable(&self) -> bool {
        match self {
            Self::Constant(_) => false,
            Self::Variable => true,
            Self::Negate(inner) | Self::Call(_, inner) => inner.contains_variable(),
            Self::Binary(_, lhs, rhs) => lhs.contains_variable() || rhs.contains_variable(),
        }
    }
}

/// Raises `base` to `exponent`.
///
/// Integer exponents use repeated multiplication so that polynomials evaluate
/// exactly on real inputs; real powers of non-negative reals stay real.
fn power(base: Scalar, exponent: Scalar) -> Scalar {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    if exponent.im == 0.0 {
        let n = exponent.re;
        if n.fract() == 0.0 && n.abs() <= f64::from(i32::MAX) {
            return base.powi(n as i32);
        }
        if base.im == 0.0 && base.re >= 0.0 {
            return Scalar::new(base.re.powf(n), 0.0);
        }
    }
    if base == Scalar::new(0.0, 0.0) && exponent.re > 0.0 {
        return base;
    }
    base.powc(exponent)
}
