//! Binder layer for the csz C# compiler front end.
//!
//! The binder resolves names to symbols using the lexical scope that
//! encloses a source position. This crate currently hosts the first stage
//! of that pipeline:
//! - `lookup_position` - the position-to-scope classifier that decides, per
//!   syntactic construct, whether a position lies inside the construct's
//!   lexical scope. Binder scope selection consumes these answers.

pub mod lookup_position;
