//! Entry points for building selectors fluently.
//!
//! Each function starts a fresh, independent selector; the returned value is
//! then extended with the [`SimpleSelector`] chain methods:
//!
//! ```
//! use fennec_css::builder::{combine, element, id};
//! use fennec_css::Selector;
//!
//! # fn main() -> Result<(), fennec_css::DuplicateSelectorPartError> {
//! let selector = id("main").class("container").class("editable");
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let combined = combine(element("div").id("main")?, "+", element("table").id("data")?);
//! assert_eq!(combined.stringify(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```
//!
//! Starting a selector can never fail, so these functions return the
//! selector directly. Only the chain methods that add a second element, id,
//! or pseudo-element can return [`DuplicateSelectorPartError`](crate::DuplicateSelectorPartError).

use crate::selector::{CombinedSelector, Fragment, FragmentKind, Selector, SimpleSelector};

fn start(kind: FragmentKind, value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::from_fragment(Fragment::new(kind, value))
}

/// Start a selector with an element: `element("div")` renders `div`.
#[must_use]
pub fn element(name: impl Into<String>) -> SimpleSelector {
    start(FragmentKind::Element, name)
}

/// Start a selector with an id: `id("main")` renders `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> SimpleSelector {
    start(FragmentKind::Id, value)
}

/// Start a selector with a class: `class("a")` renders `.a`.
#[must_use]
pub fn class(value: impl Into<String>) -> SimpleSelector {
    start(FragmentKind::Class, value)
}

/// Start a selector with an attribute: `attr("href")` renders `[href]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> SimpleSelector {
    start(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class: `pseudo_class("focus")` renders `:focus`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SimpleSelector {
    start(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element: `pseudo_element("before")` renders `::before`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SimpleSelector {
    start(FragmentKind::PseudoElement, value)
}

/// Join two selectors: renders `"<left> <combinator> <right>"`.
///
/// `combinator` is normally one of `" "`, `"+"`, `"~"`, `">"` or a
/// [`Combinator`](crate::Combinator); other text is accepted as-is.
#[must_use]
pub fn combine(
    left: impl Selector + 'static,
    combinator: impl Into<String>,
    right: impl Selector + 'static,
) -> CombinedSelector {
    CombinedSelector::new(left, combinator, right)
}
