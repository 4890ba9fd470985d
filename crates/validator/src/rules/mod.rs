//! Built-in rules
//!
//! | name                | type     | declares | keys                        |
//! |---------------------|----------|----------|-----------------------------|
//! | `required`          | [`Required`] | -    | `required`                  |
//! | `int` / `integer`   | [`Integer`]  | Int  | `int`                       |
//! | `max`               | [`Max`]      | -    | `max.int`, `max.string`     |
//! | `min`               | [`Min`]      | -    | `min.int`, `min.string`     |
//! | `email`             | [`Email`]    | Email| `email`                     |

mod bound;
mod email;
mod integer;
mod required;

use std::sync::Arc;

pub use bound::{Max, Min};
pub use email::Email;
pub use integer::Integer;
pub use required::Required;

use crate::foundation::Rule;
use crate::registry::RuleRegistry;

/// Registers every built-in rule into `registry`.
///
/// `integer` shares one instance with `int`.
pub fn register_builtins(registry: &RuleRegistry) {
    registry.register("required", Required);

    let integer: Arc<dyn Rule> = Arc::new(Integer);
    registry.register_shared("int", Arc::clone(&integer));
    registry.register_shared("integer", integer);

    registry.register("max", Max);
    registry.register("min", Min);
    registry.register("email", Email);
}
