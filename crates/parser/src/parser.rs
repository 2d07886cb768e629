use crate::ast::{BinaryOp, Node, NodeKind, Span, UnaryOp};
use crate::error::ParseError;
use chumsky::prelude::*;
use chumsky::Stream;
use lexer::token::Token;

/// Lex and parse a whole expression
pub fn parse(source: &str) -> Result<Node, Vec<ParseError>> {
    let tokens = lexer::lex(source).map_err(|err| {
        vec![Simple::custom(
            err.span.clone(),
            format!("Unexpected input '{}'", err.text),
        )]
    })?;

    let eoi = source.len()..source.len() + 1;
    parser().parse(Stream::from_iter(eoi, tokens.into_iter()))
}

pub fn parser() -> impl Parser<Token, Node, Error = ParseError> + Clone {
    expr_parser().then_ignore(end())
}

fn binary_fold(lhs: Node, (op, rhs): (BinaryOp, Node)) -> Node {
    Node::binary(op, lhs, rhs)
}

enum Postfix {
    Index(Node),
    Member(String),
}

fn expr_parser() -> impl Parser<Token, Node, Error = ParseError> + Clone {
    recursive(|expr| {
        let literal = select! {
            Token::Int(n) => NodeKind::Integer(n),
            Token::Float(s) => NodeKind::Float(s.parse().unwrap_or(f64::NAN)),
            Token::String(s) => NodeKind::String(s),
            Token::True => NodeKind::Bool(true),
            Token::False => NodeKind::Bool(false),
            Token::Nil => NodeKind::Nil,
        }
        .map_with_span(Node::new);

        let ident = select! { Token::Identifier(name) => name };

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        // Calls must be tried BEFORE bare identifiers
        let call = ident
            .clone()
            .then(args)
            .map_with_span(|(callee, args), span| Node::new(NodeKind::Call { callee, args }, span));

        let identifier = ident
            .clone()
            .map_with_span(|name, span| Node::new(NodeKind::Identifier(name), span));

        let array_literal = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map_with_span(|elements, span| Node::new(NodeKind::Array(elements), span));

        // Parenthesised expressions keep their inner span
        let parens = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let atom = literal.or(call).or(identifier).or(array_literal).or(parens);

        let postfix = atom
            .then(
                expr.clone()
                    .delimited_by(just(Token::LBracket), just(Token::RBracket))
                    .map_with_span(|index, span: Span| (Postfix::Index(index), span))
                    .or(just(Token::Dot)
                        .ignore_then(ident)
                        .map_with_span(|name, span: Span| (Postfix::Member(name), span)))
                    .repeated(),
            )
            .foldl(|lhs, (postfix, span)| {
                let span = lhs.span.start..span.end;
                let kind = match postfix {
                    Postfix::Index(index) => NodeKind::Index {
                        node: Box::new(lhs),
                        index: Box::new(index),
                    },
                    Postfix::Member(property) => NodeKind::Member {
                        node: Box::new(lhs),
                        property,
                    },
                };
                Node::new(kind, span)
            })
            .boxed();

        let unary = just(Token::Minus)
            .to(UnaryOp::Negate)
            .or(just(Token::Plus).to(UnaryOp::Plus))
            .or(just(Token::Not).to(UnaryOp::Not))
            .map_with_span(|op, span: Span| (op, span))
            .repeated()
            .then(postfix)
            .foldr(|(op, span), node| {
                let span = span.start..node.span.end;
                Node::new(
                    NodeKind::Unary {
                        op,
                        node: Box::new(node),
                    },
                    span,
                )
            })
            .boxed();

        // Right-associative: 2 ** 3 ** 2 is 2 ** (3 ** 2)
        let power = recursive(|power| {
            unary
                .clone()
                .then(just(Token::Pow).to(BinaryOp::Pow).then(power).or_not())
                .map(|(lhs, rest)| match rest {
                    Some((op, rhs)) => Node::binary(op, lhs, rhs),
                    None => lhs,
                })
        })
        .boxed();

        let product = power
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(power)
                    .repeated(),
            )
            .foldl(binary_fold)
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(binary_fold)
            .boxed();

        // Range binds looser than arithmetic: 1..n+1 is 1..(n+1)
        let range = sum
            .clone()
            .then(just(Token::DotDot).ignore_then(sum).or_not())
            .map(|(from, to)| match to {
                Some(to) => {
                    let span = from.span.start..to.span.end;
                    Node::new(
                        NodeKind::Range {
                            from: Box::new(from),
                            to: Box::new(to),
                        },
                        span,
                    )
                }
                None => from,
            })
            .boxed();

        let comparison = range
            .clone()
            .then(
                choice((
                    just(Token::DoubleEq).to(BinaryOp::Eq),
                    just(Token::NotEq).to(BinaryOp::NotEq),
                    just(Token::Gt).to(BinaryOp::Gt),
                    just(Token::Lt).to(BinaryOp::Lt),
                    just(Token::GtEq).to(BinaryOp::GtEq),
                    just(Token::LtEq).to(BinaryOp::LtEq),
                    just(Token::In).to(BinaryOp::In),
                ))
                .then(range)
                .repeated(),
            )
            .foldl(binary_fold)
            .boxed();

        let logic_and = comparison
            .clone()
            .then(just(Token::And).to(BinaryOp::And).then(comparison).repeated())
            .foldl(binary_fold)
            .boxed();

        let logic_or = logic_and
            .clone()
            .then(just(Token::Or).to(BinaryOp::Or).then(logic_and).repeated())
            .foldl(binary_fold)
            .boxed();

        // Ternary (condition ? then : otherwise), right-associative through `expr`
        logic_or
            .then(
                just(Token::Question)
                    .ignore_then(expr.clone())
                    .then_ignore(just(Token::Colon))
                    .then(expr)
                    .or_not(),
            )
            .map(|(cond, branches)| match branches {
                None => cond,
                Some((then, otherwise)) => {
                    let span = cond.span.start..otherwise.span.end;
                    Node::new(
                        NodeKind::Conditional {
                            cond: Box::new(cond),
                            then: Box::new(then),
                            otherwise: Box::new(otherwise),
                        },
                        span,
                    )
                }
            })
    })
}
