use std::f64::consts::{E, PI};

use crate::Scalar;

use super::{
    ParseError,
    expr::{BinaryOp, Expr, Function},
    lexer::{Token, TokenKind},
};

/// Deepest formula tree the parser accepts.
///
/// Both parsing and evaluation recurse over the tree, so nesting is capped
/// well below what the stack can hold.
const MAX_DEPTH: usize = 256;

/// Recursive-descent parser over a token stream.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := ('+' | '-') unary | power
/// power   := primary ('^' unary)?
/// primary := number | imaginary | name | name '(' expr ')' | '(' expr ')'
/// ```
///
/// Power is right-associative and binds tighter than unary minus, so
/// `-x^2` is `-(x^2)` and `2^-1` is `0.5`.
pub(super) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

/// A subtree together with its depth.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }

    /// Places `expr` one level above a child of depth `depth`.
    fn wrap(pos: usize, depth: usize, expr: Expr) -> Result<Self, ParseError> {
        let depth = depth + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }
        Ok(Self { expr, depth })
    }

    fn binary(pos: usize, op: BinaryOp, lhs: Self, rhs: Self) -> Result<Self, ParseError> {
        Self::wrap(
            pos,
            lhs.depth.max(rhs.depth),
            Expr::Binary(op, Box::new(lhs.expr), Box::new(rhs.expr)),
        )
    }
}

impl Parser {
    pub(super) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    pub(super) fn parse(mut self) -> Result<Expr, ParseError> {
        if self.peek().kind == TokenKind::Eof {
            return Err(ParseError::Empty);
        }
        let node = self.expr()?;
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            return Err(ParseError::Trailing { pos: token.pos });
        }
        Ok(node.expr)
    }

    fn peek(&self) -> &Token {
        // The lexer always terminates the stream with `Eof`.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            let pos = self.advance().pos;
            let rhs = self.term()?;
            lhs = Node::binary(pos, op, lhs, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            let pos = self.advance().pos;
            let rhs = self.unary()?;
            lhs = Node::binary(pos, op, lhs, rhs)?;
        }
    }

    /// Every nested construct passes through here, so this is where the
    /// recursion is bounded.
    fn unary(&mut self) -> Result<Node, ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                pos: self.peek().pos,
            });
        }
        self.nesting += 1;
        let node = self.signed();
        self.nesting -= 1;
        node
    }

    fn signed(&mut self) -> Result<Node, ParseError> {
        match self.peek().kind {
            TokenKind::Minus => {
                let pos = self.advance().pos;
                let inner = self.unary()?;
                Node::wrap(pos, inner.depth, Expr::Negate(Box::new(inner.expr)))
            }
            TokenKind::Plus => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if self.peek().kind == TokenKind::Caret {
            let pos = self.advance().pos;
            let exponent = self.unary()?;
            return Node::binary(pos, BinaryOp::Pow, base, exponent);
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) => Ok(Node::leaf(Expr::Constant(Scalar::new(value, 0.0)))),
            TokenKind::Imaginary(value) => Ok(Node::leaf(Expr::Constant(Scalar::new(0.0, value)))),
            TokenKind::LeftParen => {
                let inner = self.expr()?;
                self.expect_close()?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.name(&name, token.pos),
            _ => Err(ParseError::Expected {
                expected: "a value",
                pos: token.pos,
            }),
        }
    }

    fn name(&mut self, name: &str, pos: usize) -> Result<Node, ParseError> {
        if let Some(function) = Function::from_name(name) {
            if self.peek().kind != TokenKind::LeftParen {
                return Err(ParseError::Expected {
                    expected: "'(' after function name",
                    pos: self.peek().pos,
                });
            }
            self.advance();
            let arg = self.expr()?;
            self.expect_close()?;
            return Node::wrap(pos, arg.depth, Expr::Call(function, Box::new(arg.expr)));
        }

        let expr = match name {
            "x" => Expr::Variable,
            "pi" => Expr::Constant(Scalar::new(PI, 0.0)),
            "e" => Expr::Constant(Scalar::new(E, 0.0)),
            "i" | "j" => Expr::Constant(Scalar::new(0.0, 1.0)),
            _ => {
                return Err(ParseError::UnknownIdentifier {
                    name: name.to_string(),
                    pos,
                });
            }
        };
        Ok(Node::leaf(expr))
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        let token = self.advance();
        if token.kind == TokenKind::RightParen {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: "')'",
                pos: token.pos,
            })
        }
    }
}
