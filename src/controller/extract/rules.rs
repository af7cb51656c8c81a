use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;
use crate::model::NOT_AVAILABLE;

/// What to do when a rule's selector has no match at its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Substitute [`NOT_AVAILABLE`].
    Sentinel,
    /// Leave the field empty (`null` in JSON).
    Null,
    /// Abort the extraction with [`ScrapeError::UpstreamShapeChanged`].
    Fail,
}

/// Elements matched by a css selector and, optionally, a class string.
///
/// The class string is compared against the element's whitespace-separated
/// class list: it matches when it equals any single class, or the whole list
/// joined by single spaces. Stray or doubled whitespace in the markup does not
/// matter, but extra or reordered classes do.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    pub selector: &'static str,
    pub class: Option<&'static str>,
}

impl Query {
    #[must_use]
    pub const fn css(selector: &'static str) -> Self {
        Self {
            selector,
            class: None,
        }
    }

    #[must_use]
    pub const fn class(tag: &'static str, class: &'static str) -> Self {
        Self {
            selector: tag,
            class: Some(class),
        }
    }

    /// Every match below `scope`, in document order.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the selector does not parse
    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>, ScrapeError> {
        let selector = Selector::parse(self.selector)?;
        Ok(scope
            .select(&selector)
            .filter(|el| self.class.is_none_or(|class| has_class(*el, class)))
            .collect())
    }
}

/// Class-list comparison for [`Query::class`].
#[must_use]
pub fn has_class(el: ElementRef<'_>, wanted: &str) -> bool {
    let Some(attr) = el.value().attr("class") else {
        return false;
    };
    let classes: Vec<&str> = attr.split_whitespace().collect();
    classes.contains(&wanted) || classes.join(" ") == wanted
}

/// One field lookup: the `index`-th match of `query` below a scope element.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub query: Query,
    pub index: usize,
    pub missing: MissingPolicy,
}

impl FieldRule {
    #[must_use]
    pub const fn new(
        name: &'static str,
        query: Query,
        index: usize,
        missing: MissingPolicy,
    ) -> Self {
        Self {
            name,
            query,
            index,
            missing,
        }
    }

    /// Finds the matching element. `Ok(None)` only for non-failing policies.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the element is absent and the policy is `Fail`
    pub fn locate<'a>(&self, scope: ElementRef<'a>) -> Result<Option<ElementRef<'a>>, ScrapeError> {
        match self.query.all(scope)?.get(self.index) {
            Some(el) => Ok(Some(*el)),
            None if self.missing == MissingPolicy::Fail => Err(ScrapeError::missing(self.name)),
            None => Ok(None),
        }
    }

    /// Like [`FieldRule::locate`] but for rules that can never be skipped.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the element is absent, whatever the policy
    pub fn require<'a>(&self, scope: ElementRef<'a>) -> Result<ElementRef<'a>, ScrapeError> {
        self.locate(scope)?
            .ok_or_else(|| ScrapeError::missing(self.name))
    }

    /// Trimmed text of the match, with the policy applied.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the element is absent and the policy is `Fail`
    pub fn text(&self, scope: ElementRef<'_>) -> Result<Option<String>, ScrapeError> {
        Ok(match self.locate(scope)? {
            Some(el) => Some(text_of(el)),
            None => self.fallback(),
        })
    }

    /// Attribute value of the match, with the policy applied.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the element is absent and the policy is `Fail`
    pub fn attr(&self, scope: ElementRef<'_>, attr: &str) -> Result<Option<String>, ScrapeError> {
        Ok(match self.locate(scope)? {
            Some(el) => match el.value().attr(attr) {
                Some(v) => Some(v.to_string()),
                None => self.fallback(),
            },
            None => self.fallback(),
        })
    }

    /// Text that can never be `None`: sentinel rules fall back to `"N/A"`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the element is absent and the policy is `Fail`
    pub fn text_or_sentinel(&self, scope: ElementRef<'_>) -> Result<String, ScrapeError> {
        Ok(self
            .text(scope)?
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()))
    }

    fn fallback(&self) -> Option<String> {
        match self.missing {
            MissingPolicy::Sentinel => Some(NOT_AVAILABLE.to_string()),
            MissingPolicy::Null | MissingPolicy::Fail => None,
        }
    }
}

/// All descendant text, concatenated and trimmed.
#[must_use]
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Every match of `selector` below `scope`, in document order.
///
/// # Errors
///
/// Will return `Err` if the selector does not parse
pub fn select_all<'a>(scope: ElementRef<'a>, selector: &str) -> Result<Vec<ElementRef<'a>>, ScrapeError> {
    let selector = Selector::parse(selector)?;
    Ok(scope.select(&selector).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const DOC: &str = r#"<html><body>
        <div class="item">zero</div>
        <div class="  item   "> one </div>
        <div class="item other">two</div>
        <div class="other  item">three</div>
        <img alt="no source">
    </body></html>"#;

    #[test]
    fn single_class_matches_any_class_token() {
        let doc = Html::parse_document(DOC);
        let found = Query::class("div", "item").all(doc.root_element()).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn class_list_matches_in_order_ignoring_whitespace() {
        let doc = Html::parse_document(DOC);
        let found = Query::class("div", "item other").all(doc.root_element()).unwrap();
        assert_eq!(found.iter().map(|el| text_of(*el)).collect::<Vec<_>>(), vec!["two"]);

        let found = Query::class("div", "other item").all(doc.root_element()).unwrap();
        assert_eq!(found.iter().map(|el| text_of(*el)).collect::<Vec<_>>(), vec!["three"]);
    }

    #[test]
    fn policies_apply_when_index_is_out_of_range() {
        let doc = Html::parse_document(DOC);
        let root = doc.root_element();
        let items = Query::class("div", "item");

        let sentinel = FieldRule::new("item", items, 7, MissingPolicy::Sentinel);
        assert_eq!(sentinel.text(root).unwrap().as_deref(), Some(NOT_AVAILABLE));

        let null = FieldRule::new("item", items, 7, MissingPolicy::Null);
        assert_eq!(null.text(root).unwrap(), None);

        let fail = FieldRule::new("item", items, 7, MissingPolicy::Fail);
        assert_eq!(
            fail.text(root),
            Err(ScrapeError::UpstreamShapeChanged("missing item".to_string()))
        );
    }

    #[test]
    fn text_is_trimmed_and_indexed() {
        let doc = Html::parse_document(DOC);
        let rule = FieldRule::new("item", Query::class("div", "item"), 1, MissingPolicy::Fail);
        assert_eq!(rule.text(doc.root_element()).unwrap().as_deref(), Some("one"));
    }

    #[test]
    fn missing_attribute_follows_policy() {
        let doc = Html::parse_document(DOC);
        let rule = FieldRule::new("image", Query::css("img"), 0, MissingPolicy::Null);
        assert_eq!(rule.attr(doc.root_element(), "src").unwrap(), None);
    }
}
