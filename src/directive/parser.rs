//! Recursive-descent parser over directive tokens.

use rustc_hash::FxHashSet;

use super::{Directive, ForeignArg, HostArg, Token, TokenKind, strip_variadic};
use crate::config::{DIRECTIVE_KEYWORD, GenConfig};
use crate::error::DirectiveError;

pub(super) fn parse(tokens: &[Token<'_>], config: &GenConfig) -> Result<Directive, DirectiveError> {
    Parser {
        tokens,
        pos: 0,
        config,
    }
    .parse_directive()
}

struct Parser<'t, 'src> {
    tokens: &'t [Token<'src>],
    pos: usize,
    config: &'t GenConfig,
}

impl<'t, 'src> Parser<'t, 'src> {
    fn advance(&mut self) -> Option<&'t Token<'src>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn has_separator_ahead(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .any(|t| t.kind == TokenKind::Separator)
    }

    fn parse_directive(&mut self) -> Result<Directive, DirectiveError> {
        match self.advance() {
            Some(t) if t.kind == TokenKind::Keyword => {}
            _ => return Err(DirectiveError::MissingKeyword(DIRECTIVE_KEYWORD)),
        }

        let head = match self.advance() {
            Some(t) if matches!(t.kind, TokenKind::Word | TokenKind::Keyword) => t.text,
            _ => return Err(DirectiveError::MissingName),
        };
        let (name, result) = split_typed(head, &self.config.default_type)?;

        let (host_args, foreign_fn, foreign_args, passthrough) = if self.has_separator_ahead() {
            let host_args = self.parse_host_args()?;
            let (foreign_fn, foreign_args) = self.parse_call()?;
            (host_args, foreign_fn, foreign_args, false)
        } else {
            let (foreign_fn, foreign_args) = self.parse_call()?;
            let host_args = self.passthrough_host_args(&foreign_args);
            (host_args, foreign_fn, foreign_args, true)
        };

        let directive = Directive {
            name: name.to_string(),
            result: result.to_string(),
            variadic: host_args.last().is_some_and(|arg| arg.variadic),
            host_args,
            foreign_fn,
            foreign_args,
            passthrough,
        };
        validate(&directive)?;
        Ok(directive)
    }

    /// `arg[:Type] ... :` up to and including the separator.
    fn parse_host_args(&mut self) -> Result<Vec<HostArg>, DirectiveError> {
        let mut args = Vec::new();
        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::Separator => return Ok(args),
                TokenKind::Literal => {
                    return Err(DirectiveError::LiteralInHostList(token.text.to_string()));
                }
                TokenKind::Word | TokenKind::Keyword => {
                    let (name, ty) = split_typed(token.text, &self.config.default_type)?;
                    let (name, variadic) = strip_variadic(name);
                    args.push(HostArg {
                        name: name.to_string(),
                        ty: ty.to_string(),
                        variadic,
                    });
                }
            }
        }
        // only called when a separator is ahead
        Ok(args)
    }

    /// `ForeignFn carg ...` to the end of the line.
    fn parse_call(&mut self) -> Result<(String, Vec<ForeignArg>), DirectiveError> {
        let foreign_fn = match self.advance() {
            Some(t) if matches!(t.kind, TokenKind::Word | TokenKind::Keyword) => t.text.to_string(),
            _ => return Err(DirectiveError::MissingForeignFunction),
        };

        let mut args = Vec::new();
        while !self.at_end() {
            args.push(self.parse_foreign_arg()?);
        }
        Ok((foreign_fn, args))
    }

    fn parse_foreign_arg(&mut self) -> Result<ForeignArg, DirectiveError> {
        let Some(token) = self.advance() else {
            return Err(DirectiveError::MissingForeignFunction);
        };
        match token.kind {
            TokenKind::Literal => Ok(ForeignArg::Literal(token.literal_code().to_string())),
            TokenKind::Separator => Err(DirectiveError::RepeatedSeparator),
            TokenKind::Word | TokenKind::Keyword => {
                let (name, ctype) = match token.text.split_once(':') {
                    Some((name, ctype)) => (name, Some(ctype)),
                    None => (token.text, None),
                };
                if name.is_empty() || ctype.is_some_and(str::is_empty) {
                    return Err(DirectiveError::EmptyComponent(token.text.to_string()));
                }
                Ok(ForeignArg::Reference {
                    name: name.to_string(),
                    ctype: ctype.map(str::to_string),
                })
            }
        }
    }

    /// Host arguments implied by the foreign list. Literals have no host
    /// counterpart; an explicit ctype doubles as the host type.
    fn passthrough_host_args(&self, foreign_args: &[ForeignArg]) -> Vec<HostArg> {
        foreign_args
            .iter()
            .filter_map(|arg| match arg {
                ForeignArg::Literal(_) => None,
                ForeignArg::Reference { name, ctype } => {
                    let (name, variadic) = strip_variadic(name);
                    Some(HostArg {
                        name: name.to_string(),
                        ty: ctype
                            .clone()
                            .unwrap_or_else(|| self.config.default_type.clone()),
                        variadic,
                    })
                }
            })
            .collect()
    }
}

/// Split `Name:Type` on its first colon, falling back to `default`.
fn split_typed<'a>(text: &'a str, default: &'a str) -> Result<(&'a str, &'a str), DirectiveError> {
    let (name, ty) = text.split_once(':').unwrap_or((text, default));
    if name.is_empty() || ty.is_empty() {
        return Err(DirectiveError::EmptyComponent(text.to_string()));
    }
    Ok((name, ty))
}

fn validate(directive: &Directive) -> Result<(), DirectiveError> {
    let Some((receiver, _)) = directive.host_args.split_first() else {
        return Err(DirectiveError::NoReceiver);
    };
    if receiver.variadic {
        return Err(DirectiveError::MisplacedVariadic(receiver.name.clone()));
    }

    let mut seen = FxHashSet::default();
    let last = directive.host_args.len() - 1;
    for (i, arg) in directive.host_args.iter().enumerate() {
        if arg.variadic && i != last {
            return Err(DirectiveError::MisplacedVariadic(arg.name.clone()));
        }
        if !seen.insert(arg.name.as_str()) {
            return Err(DirectiveError::DuplicateArgument(arg.name.clone()));
        }
    }

    let variadic = directive.variadic_arg().map(|arg| arg.name.as_str());
    let last_foreign = directive.foreign_args.len().checked_sub(1);
    let mut variadic_used_last = false;

    for (i, arg) in directive.foreign_args.iter().enumerate() {
        let ForeignArg::Reference { name, .. } = arg else {
            continue;
        };
        let (base, marked) = strip_variadic(name);
        if !seen.contains(base) {
            return Err(DirectiveError::UnknownArgument(name.clone()));
        }
        if marked != (Some(base) == variadic) {
            return Err(DirectiveError::MisplacedVariadic(base.to_string()));
        }
        if Some(base) == variadic {
            if Some(i) != last_foreign {
                return Err(DirectiveError::VariadicNotLast(base.to_string()));
            }
            variadic_used_last = true;
        }
    }

    match variadic {
        Some(name) if !variadic_used_last => Err(DirectiveError::VariadicNotLast(name.to_string())),
        _ => Ok(()),
    }
}
