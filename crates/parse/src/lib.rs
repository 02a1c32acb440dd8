use thiserror::Error;

/// A recoverable problem found while parsing. Issues are collected and
/// returned alongside the segments; they never abort a parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseIssue {
    #[error("Unsupported tag: <{0}>")]
    UnsupportedTag(String),

    #[error("Mismatched closing tag: </{found}> (expected </{expected}>)")]
    MismatchedClosingTag { found: String, expected: String },

    #[error("Unexpected closing tag: </{0}>")]
    UnexpectedClosingTag(String),

    #[error("Unclosed tag: <{0}>")]
    UnclosedTag(String),

    #[error("Invalid attribute on <{tag}>: {message}")]
    InvalidAttribute { tag: String, message: String },

    #[error("Invalid href: '{0}'")]
    InvalidHref(String),

    #[error("Tag <{tag}> is not part of the '{family}' family")]
    UnknownFamilyTag { family: String, tag: String },

    #[error("Parsing recovered after an internal failure: {0}")]
    Recovered(String),
}

pub mod family;
pub mod parser;
pub mod registry;
pub mod spacing;
pub mod strategy;
pub mod token;
pub mod validate;

pub use family::FamilyState;
pub use parser::{HtmlParser, ParseOutput};
pub use registry::StrategyRegistry;
pub use strategy::{StackEffect, TagContext, TagOutcome, TagStrategy};
pub use token::{Token, tokenize};
pub use validate::SELF_CLOSING_TAGS;
