use std::str::FromStr;

use strum::EnumString;
use winnow::{
    ascii::space0,
    combinator::{alt, delimited, eof, preceded, terminated},
    error::{ContextError, ErrMode},
    token::take_till,
    PResult, Parser, Stateful,
};

use crate::{
    ast::Proposition,
    error::Error,
    variables::VariableSet,
};

#[derive(Debug)]
struct State<'v> {
    variables: &'v mut VariableSet,
    overflow: bool,
}

type Input<'a, 'v> = Stateful<&'a str, State<'v>>;

/// Parses one line of a problem file. A line that the grammar rejects as-is
/// is wrapped in one pair of parentheses and retried, so bare binary lines
/// like `[P] and [Q]` are accepted without outer parentheses.
pub fn parse_proposition(
    line: &str,
    number: usize,
    variables: &mut VariableSet,
) -> Result<Proposition, Error> {
    if let Some(proposition) = parse_line(line, variables)? {
        return Ok(proposition);
    }

    let wrapped = format!("({line})");
    parse_line(&wrapped, variables)?.ok_or(Error::Syntax(number))
}

fn parse_line(line: &str, variables: &mut VariableSet) -> Result<Option<Proposition>, Error> {
    let state = State {
        variables,
        overflow: false,
    };
    let mut input = Stateful { input: line, state };

    match terminated(proposition, (space0, eof)).parse_next(&mut input) {
        Ok(proposition) => Ok(Some(proposition)),
        Err(_) if input.state.overflow => Err(Error::TooManyVariables),
        Err(_) => Ok(None),
    }
}

fn proposition(input: &mut Input<'_, '_>) -> PResult<Proposition> {
    preceded(
        space0,
        alt((tautology, contradiction, variable, negation, binary_operation)),
    )
    .parse_next(input)
}

fn tautology(input: &mut Input<'_, '_>) -> PResult<Proposition> {
    alt((
        'T'.value(Proposition::Tautology),
        "true".value(Proposition::Tautology),
    ))
    .parse_next(input)
}

fn contradiction(input: &mut Input<'_, '_>) -> PResult<Proposition> {
    alt((
        'F'.value(Proposition::Contradiction),
        "false".value(Proposition::Contradiction),
    ))
    .parse_next(input)
}

fn variable(input: &mut Input<'_, '_>) -> PResult<Proposition> {
    let name = delimited('[', take_till(0.., ']'), ']').parse_next(input)?;

    match input.state.variables.resolve(name.trim()) {
        Ok(variable) => Ok(variable.into()),
        // The registry is full; nothing further on this line (or any later
        // line) can be accommodated, so fail the whole parse rather than
        // backtracking into another alternative.
        Err(_) => {
            input.state.overflow = true;
            Err(ErrMode::Cut(ContextError::new()))
        }
    }
}

fn negation(input: &mut Input<'_, '_>) -> PResult<Proposition> {
    preceded(alt(("!", "not")), proposition)
        .map(|proposition| Proposition::Negation(Box::new(proposition)))
        .parse_next(input)
}

fn binary_operation(input: &mut Input<'_, '_>) -> PResult<Proposition> {
    delimited(
        '(',
        (proposition, connective, proposition),
        preceded(space0, ')'),
    )
    .map(|(left, connective, right)| connective.apply(left, right))
    .parse_next(input)
}

/// The binary connective tokens. `If` is implication with the operands
/// reversed: `(consequent if antecedent)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Connective {
    #[strum(serialize = "and", serialize = "&")]
    Conjunction,
    #[strum(serialize = "or", serialize = "|")]
    Disjunction,
    #[strum(serialize = "xor", serialize = "^")]
    ExclusiveDisjunction,
    #[strum(serialize = "then", serialize = "implies", serialize = "=>")]
    Implication,
    #[strum(serialize = "if", serialize = "<=")]
    If,
    #[strum(serialize = "iff", serialize = "<=>")]
    Equivalence,
}

impl Connective {
    fn apply(self, left: Proposition, right: Proposition) -> Proposition {
        let (left, right) = (Box::new(left), Box::new(right));

        match self {
            Connective::Conjunction => Proposition::Conjunction(left, right),
            Connective::Disjunction => Proposition::Disjunction(left, right),
            Connective::ExclusiveDisjunction => Proposition::ExclusiveDisjunction(left, right),
            Connective::Implication => Proposition::Implication(left, right),
            Connective::If => Proposition::Implication(right, left),
            Connective::Equivalence => Proposition::Equivalence(left, right),
        }
    }
}

fn connective(input: &mut Input<'_, '_>) -> PResult<Connective> {
    preceded(space0, operator_token)
        .verify_map(|token| Connective::from_str(token).ok())
        .parse_next(input)
}

/// Scans the connective token between the two operands of a binary
/// operation: the longest run of characters that is not whitespace and does
/// not begin a proposition.
fn operator_token<'a>(input: &mut Input<'a, '_>) -> PResult<&'a str> {
    let source = input.input;
    let mut end = 0;

    let mut characters = source.char_indices().peekable();
    while let Some((offset, character)) = characters.next() {
        let lookahead = characters.peek().map(|(_, next)| *next);
        if character.is_whitespace() || opens_proposition(character, lookahead) {
            break;
        }

        end = offset + character.len_utf8();
    }

    if end == 0 {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    let (token, rest) = source.split_at(end);
    input.input = rest;

    Ok(token)
}

fn opens_proposition(character: char, lookahead: Option<char>) -> bool {
    matches!(character, '!' | '(' | '[' | 'T' | 'F')
        || (character == 'f' && lookahead == Some('a'))
        || (character == 't' && lookahead == Some('r'))
        || (character == 'n' && lookahead == Some('o'))
}
