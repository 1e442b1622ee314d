//! Greets people by name.
//!
//! # Examples
//!
//! ```rust
//! use greeter::core::greeting::greeting_service::{print_it, try_print_it};
//!
//! assert_eq!("Hello Bob", print_it("Bob"));
//! assert!(try_print_it(None).is_err());
//! ```
//!
//! Sizing numbers.
//!
//! ```rust
//! use greeter::core::size::size_service::{size, Size};
//!
//! assert_eq!(Size::Big, size(42));
//! assert_eq!("big", size(42).to_string());
//! ```

pub mod core;
pub mod infra;
