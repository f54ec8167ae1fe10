//! Ordered collector for head elements.
//!
//! Assembly code is written as ordinary `if`/`for` logic that pushes into a
//! [`HeadBuilder`]. Only the branches that actually run contribute, and they
//! contribute in the order they run. The builder never filters or
//! deduplicates; that policy belongs to the caller.
//!
//! ```ignore
//! let items = HeadBuilder::collect(|head| {
//!     head.push(MetaElement::Charset);
//!     head.push_if(!page.description.is_empty(), || {
//!         MetaElement::named("description", &page.description)
//!     });
//!     head.extend(names.iter().map(|n| MetaElement::stylesheet(n)));
//! });
//! ```

use super::MetaElement;

#[derive(Debug, Clone, Default)]
pub struct HeadBuilder {
    items: Vec<MetaElement>,
}

impl HeadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `block` against a fresh builder and return what it collected.
    pub fn collect(block: impl FnOnce(&mut Self)) -> Vec<MetaElement> {
        let mut builder = Self::new();
        block(&mut builder);
        builder.build()
    }

    /// Append one element.
    #[inline]
    pub fn push(&mut self, item: MetaElement) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Append the element produced by `make` only when `cond` holds.
    ///
    /// `make` is not called for a skipped branch.
    #[inline]
    pub fn push_if(&mut self, cond: bool, make: impl FnOnce() -> MetaElement) -> &mut Self {
        if cond {
            self.items.push(make());
        }
        self
    }

    #[inline]
    pub fn push_some(&mut self, item: Option<MetaElement>) -> &mut Self {
        if let Some(item) = item {
            self.items.push(item);
        }
        self
    }

    /// Append a run of elements after everything collected so far.
    pub fn extend(&mut self, items: impl IntoIterator<Item = MetaElement>) -> &mut Self {
        self.items.extend(items);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> Vec<MetaElement> {
        self.items
    }
}

impl Extend<MetaElement> for HeadBuilder {
    fn extend<I: IntoIterator<Item = MetaElement>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<MetaElement> for HeadBuilder {
    fn from_iter<I: IntoIterator<Item = MetaElement>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
