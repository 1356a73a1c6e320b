//! Path expression tokenizer
//!
//! Lexical analysis converting raw path strings into token sequences. Split
//! by token family; every sub-lexer returns the index of the last character
//! it consumed.

mod characters;
mod core;
mod numbers;
mod operators;
mod strings;

pub use core::PathTokenizer;
