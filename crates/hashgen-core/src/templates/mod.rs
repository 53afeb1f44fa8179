//! Template handling for hashgen.
//!
//! Two unrelated syntaxes meet here and must not be confused:
//! - **Template bodies** (the `.tpl` files) contain a literal placeholder, `{SIZE}` by
//!   default. It is replaced verbatim by [`placeholder::substitute`]; nothing else in the
//!   body is interpreted, so C braces and macros pass through untouched.
//! - **Output names** are [Handlebars](https://handlebarsjs.com/) patterns such as
//!   `hash{{size}}_queue.h`, rendered by [`renderer::TemplateRenderer`].
//!
//! ## Naming variables
//!
//! - `{{size}}`: the size being instantiated (required in every pattern)
//! - `{{kind}}`: the template's container family (`stack`, `queue`)
//!
//! The default `hashgen.config.json` written by `hashgen init` is embedded at compile-time
//! in [`embedded`].

pub mod embedded;
pub mod placeholder;
pub mod renderer;
