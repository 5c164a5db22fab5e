//! # verba
//!
//! verba is the abstract-syntax-tree core of a small arithmetic expression
//! language. It defines immutable expression trees and supports two
//! independent consumption modes over the same tree: direct numeric
//! interpretation against a runtime variable context, and translation into
//! equivalent target-language source text.
//!
//! Both traversals are read-only, recurse depth-first and left-to-right, and
//! share a single operator table so that interpreted and compiled semantics
//! stay in exact correspondence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of expression trees.
///
/// This module declares the `Expr` enum and related types that represent
/// arithmetic expressions as an immutable tree. Trees are built by an
/// external parser from already-constructed child nodes and are never
/// mutated afterwards.
///
/// # Responsibilities
/// - Defines the expression node kinds: literals, variable references, and
///   binary operations.
/// - Defines the closed set of binary operators shared by evaluation and
///   compilation.
/// - Provides structural equality, hashing, and child enumeration for
///   generic tree walkers.
pub mod ast;
/// Translates expression trees into target-language source text.
///
/// This module emits plain expression syntax that is directly nestable
/// inside a larger compiled unit. Every binary node parenthesizes itself
/// fully, so the emitted text is correct under any surrounding operator
/// precedence rules.
///
/// # Responsibilities
/// - Emits infix arithmetic for addition, subtraction, multiplication, and
///   division.
/// - Emits a power-function call for exponentiation.
/// - Never evaluates anything; compilation is a pure text-emission
///   traversal with no effect on the tree or any context.
pub mod compiler;
/// Provides unified error types for evaluation.
///
/// This module defines all errors that can be raised while interpreting an
/// expression tree. Numeric edge conditions such as division by zero are
/// not errors; they follow IEEE-754 semantics and propagate as ordinary
/// values.
///
/// # Responsibilities
/// - Defines the runtime error enum for all failure modes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Interprets expression trees against a runtime variable context.
///
/// This module holds the evaluation context (a mapping from variable names
/// to their current numeric values) and the evaluator that walks a tree
/// depth-first, left operand before right, producing a single numeric
/// result.
///
/// # Responsibilities
/// - Resolves variable references through the context.
/// - Applies binary operators with IEEE-754 double semantics.
/// - Propagates lookup failures unchanged to the caller.
pub mod interpreter;
