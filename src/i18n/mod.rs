// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary. The locale
//! comes from the command line, the config file or the system, falling
//! back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
