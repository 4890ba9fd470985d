//! # fieldcheck-validator
//!
//! A field-validation engine built from named, pluggable rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator
//!     .field("age", "42", "required|int|max:150")?
//!     .field("email", "user@example.com", "required|email|max:64")?;
//!
//! assert!(validator.validate().is_ok());
//! # Ok::<(), fieldcheck_validator::Error>(())
//! ```
//!
//! ## Rules
//!
//! A chain is evaluated in order, and each rule answers whether the value
//! passed and whether the chain goes on. Built-in rules live in [`rules`];
//! custom ones implement [`Rule`](foundation::Rule) and are added through a
//! [`RuleRegistry`](registry::RuleRegistry).
//!
//! - **Presence**: [`Required`](rules::Required)
//! - **Type**: [`Integer`](rules::Integer) (`int`, `integer`),
//!   [`Email`](rules::Email)
//! - **Bounds**: [`Max`](rules::Max), [`Min`](rules::Min)
//!
//! ## Messages
//!
//! Rules report a stable key (`required`, `max.int`, ...) plus positional
//! arguments. The validator renders them through a
//! [`Translate`](translate::Translate) implementation, by default the
//! built-in [`Catalog`](translate::Catalog) with `en` and `zh-CN` tables.

// ValidationError is returned by value from every chain run.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod translate;
pub mod validator;

pub use foundation::{Error, Result};
