//! CSS selector fragments, simple selectors, and combined selectors.
//!
//! Terminology follows [Selectors Level 4](https://www.w3.org/TR/selectors-4/),
//! but selectors here are assembled incrementally rather than parsed: every
//! call appends one fragment, and the text is the fragments in call order.

mod specificity;

use std::fmt;

use fennec_common::warning::warn_once;
use strum_macros::{Display, EnumString};
use thiserror::Error;

pub use specificity::Specificity;

/// The category of a single selector fragment.
///
/// Variants are declared in the order CSS expects them inside a compound
/// selector, so `Ord` gives the canonical ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(2)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Whether a simple selector may hold at most one fragment of this kind.
    ///
    /// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound)
    /// "Only one type selector or universal selector is allowed in the sequence."
    ///
    /// Ids and pseudo-elements follow the same rule here.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Self::Element => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        }
    }
}

/// One textual piece of a selector, tagged by its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    /// The category, which decides the rendered prefix/suffix.
    pub kind: FragmentKind,
    /// The raw value as given by the caller, without prefix.
    pub value: String,
}

impl Fragment {
    /// Create a fragment.
    #[must_use]
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, suffix) = self.kind.affixes();
        write!(f, "{prefix}{}{suffix}", self.value)
    }
}

/// Raised when a second element, id, or pseudo-element is added to the same
/// simple selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
pub struct DuplicateSelectorPartError {
    /// The kind that was already present.
    pub kind: FragmentKind,
}

/// Anything that renders to selector text.
pub trait Selector: fmt::Debug + Send + Sync {
    /// The selector text. Does not consume or freeze the selector, and
    /// returns the same text on every call.
    fn stringify(&self) -> String;

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    fn specificity(&self) -> Specificity;
}

impl<S: Selector + ?Sized> Selector for Box<S> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }

    fn specificity(&self) -> Specificity {
        (**self).specificity()
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// A single selector unit with no combinators, built one fragment at a time.
///
/// Fragments are rendered in the order they were added. Element, id, and
/// pseudo-element may each be added once; classes, attributes, and
/// pseudo-classes repeat freely. Values are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    fragments: Vec<Fragment>,
}

impl SimpleSelector {
    /// An empty selector, which renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// A selector holding a single fragment.
    #[must_use]
    pub fn from_fragment(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// Add an element (type) fragment.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSelectorPartError`] if an element was already added.
    pub fn element(self, name: impl Into<String>) -> Result<Self, DuplicateSelectorPartError> {
        self.push_unique(FragmentKind::Element, name.into())
    }

    /// Add an id fragment, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSelectorPartError`] if an id was already added.
    pub fn id(self, value: impl Into<String>) -> Result<Self, DuplicateSelectorPartError> {
        self.push_unique(FragmentKind::Id, value.into())
    }

    /// Add a class fragment, rendered as `.value`.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.push(FragmentKind::Class, value.into())
    }

    /// Add an attribute fragment, rendered as `[value]`.
    ///
    /// The value is the full attribute condition, e.g. `href$=".png"`.
    #[must_use]
    pub fn attr(self, value: impl Into<String>) -> Self {
        self.push(FragmentKind::Attribute, value.into())
    }

    /// Add a pseudo-class fragment, rendered as `:value`.
    #[must_use]
    pub fn pseudo_class(self, value: impl Into<String>) -> Self {
        self.push(FragmentKind::PseudoClass, value.into())
    }

    /// Add a pseudo-element fragment, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSelectorPartError`] if a pseudo-element was already added.
    pub fn pseudo_element(
        self,
        value: impl Into<String>,
    ) -> Result<Self, DuplicateSelectorPartError> {
        self.push_unique(FragmentKind::PseudoElement, value.into())
    }

    /// Add a fragment of any kind, enforcing the uniqueness rule.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSelectorPartError`] if `kind` is unique and already present.
    pub fn with(
        self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<Self, DuplicateSelectorPartError> {
        if kind.is_unique() {
            self.push_unique(kind, value.into())
        } else {
            Ok(self.push(kind, value.into()))
        }
    }

    /// The fragments in the order they were added.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether a fragment of `kind` has been added.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments.iter().any(|fragment| fragment.kind == kind)
    }

    /// A copy with fragments re-ordered into CSS order: element, id, class,
    /// attribute, pseudo-class, pseudo-element.
    ///
    /// Fragments of the same kind keep their relative order. `self` is left
    /// untouched.
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        let mut fragments = self.fragments.clone();
        fragments.sort_by_key(|fragment| fragment.kind);
        Self { fragments }
    }

    fn push(mut self, kind: FragmentKind, value: String) -> Self {
        self.fragments.push(Fragment { kind, value });
        self
    }

    fn push_unique(
        self,
        kind: FragmentKind,
        value: String,
    ) -> Result<Self, DuplicateSelectorPartError> {
        if self.contains(kind) {
            return Err(DuplicateSelectorPartError { kind });
        }
        Ok(self.push(kind, value))
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

impl Selector for SimpleSelector {
    fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// - ids count toward A
    /// - classes, attributes, and pseudo-classes count toward B
    /// - elements and pseudo-elements count toward C
    fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for fragment in &self.fragments {
            match fragment.kind {
                FragmentKind::Id => spec.0 += 1,
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.1 += 1;
                }
                FragmentKind::Element | FragmentKind::PseudoElement => spec.2 += 1,
            }
        }
        spec
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        combinator.to_string()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator, rendered as
/// `"<left> <combinator> <right>"`. Either side may itself be combined.
#[derive(Debug)]
pub struct CombinedSelector {
    left: Box<dyn Selector>,
    combinator: String,
    right: Box<dyn Selector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    ///
    /// Any combinator text is accepted. Anything other than the four CSS
    /// combinators is kept verbatim and reported once as a warning.
    pub fn new(
        left: impl Selector + 'static,
        combinator: impl Into<String>,
        right: impl Selector + 'static,
    ) -> Self {
        let combinator = combinator.into();
        if combinator.parse::<Combinator>().is_err() {
            warn_once("CSS", &format!("non-standard combinator '{combinator}'"));
        }
        Self {
            left: Box::new(left),
            combinator,
            right: Box::new(right),
        }
    }

    /// The left-hand selector.
    #[must_use]
    pub fn left(&self) -> &dyn Selector {
        self.left.as_ref()
    }

    /// The combinator text as given.
    #[must_use]
    pub fn combinator(&self) -> &str {
        &self.combinator
    }

    /// The right-hand selector (the subject).
    #[must_use]
    pub fn right(&self) -> &dyn Selector {
        self.right.as_ref()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left.stringify(),
            self.combinator,
            self.right.stringify()
        )
    }
}

impl Selector for CombinedSelector {
    fn stringify(&self) -> String {
        self.to_string()
    }

    /// "The specificity of a complex selector is the sum of the specificities
    /// of its compound selectors."
    fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_affixes() {
        assert_eq!(Fragment::new(FragmentKind::Element, "div").to_string(), "div");
        assert_eq!(Fragment::new(FragmentKind::Id, "main").to_string(), "#main");
        assert_eq!(Fragment::new(FragmentKind::Class, "a").to_string(), ".a");
        assert_eq!(Fragment::new(FragmentKind::Attribute, "href").to_string(), "[href]");
        assert_eq!(Fragment::new(FragmentKind::PseudoClass, "hover").to_string(), ":hover");
        assert_eq!(
            Fragment::new(FragmentKind::PseudoElement, "after").to_string(),
            "::after"
        );
    }

    #[test]
    fn test_kind_names_round_trip() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(
            "pseudo-element".parse::<FragmentKind>(),
            Ok(FragmentKind::PseudoElement)
        );
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!("attribute".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert!("tag".parse::<FragmentKind>().is_err());
    }

    #[test]
    fn test_combinator_symbols() {
        assert_eq!(Combinator::Descendant.to_string(), " ");
        assert_eq!(Combinator::Child.to_string(), ">");
        assert_eq!("+".parse::<Combinator>(), Ok(Combinator::NextSibling));
        assert_eq!("~".parse::<Combinator>(), Ok(Combinator::SubsequentSibling));
        assert_eq!(String::from(Combinator::Child), ">");
    }

    #[test]
    fn test_uniqueness_rule() {
        assert!(FragmentKind::Element.is_unique());
        assert!(FragmentKind::Id.is_unique());
        assert!(FragmentKind::PseudoElement.is_unique());
        assert!(!FragmentKind::Class.is_unique());
        assert!(!FragmentKind::Attribute.is_unique());
        assert!(!FragmentKind::PseudoClass.is_unique());
    }
}
