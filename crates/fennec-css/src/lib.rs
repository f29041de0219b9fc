//! Fluent CSS selector building for Fennec.
//!
//! # Scope
//!
//! This crate implements:
//! - **Simple selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class, and pseudo-element fragments
//!   - At most one element, id, and pseudo-element per selector
//!   - Fragments rendered in the order they were added
//!
//! - **Combined selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling combinators
//!   - Arbitrary nesting
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Validation of fragment values

/// Free functions that start a new selector.
pub mod builder;
/// Selector fragments, simple and combined selectors.
pub mod selector;

// Re-exports for convenience
pub use builder::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use selector::{
    Combinator, CombinedSelector, DuplicateSelectorPartError, Fragment, FragmentKind, Selector,
    SimpleSelector, Specificity,
};
