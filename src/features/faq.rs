//! FAQ accordion: at most one answer open at a time.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use web_sys::Element;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "FAQAccordion";

/// Which pair, if any, is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Start from the markup's state: the first pair marked expanded.
    #[must_use]
    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        Self { len, open: open.filter(|i| *i < len) }
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle pair `index`: opening it collapses any other, clicking the
    /// open one collapses it. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
        self.open
    }
}

#[cfg(feature = "hydrate")]
struct FaqPair {
    question: Element,
    answer: Element,
}

#[cfg(feature = "hydrate")]
impl FaqPair {
    fn render(&self, open: bool) -> Result<(), SiteError> {
        self.question.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
        self.answer.set_attribute("aria-hidden", if open { "false" } else { "true" })?;
        let max_height = if open { format!("{}px", self.answer.scroll_height()) } else { "0".to_owned() };
        dom::set_style(&self.answer, "max-height", &max_height)
    }
}

#[cfg(feature = "hydrate")]
pub fn init(_config: &SiteConfig) -> Result<(), SiteError> {
    let mut pairs = Vec::new();
    for item in dom::query_all(".faq-item")? {
        let question = dom::query_in(&item, ".faq-item__question")?;
        let answer = dom::query_in(&item, ".faq-item__answer")?;
        if let (Some(question), Some(answer)) = (question, answer) {
            pairs.push(FaqPair { question, answer });
        }
    }
    if pairs.is_empty() {
        return Ok(());
    }

    let initially_open = pairs
        .iter()
        .position(|pair| pair.question.get_attribute("aria-expanded").as_deref() == Some("true"));
    let state = Rc::new(RefCell::new(Accordion::with_open(pairs.len(), initially_open)));
    let pairs = Rc::new(pairs);

    for (index, pair) in pairs.iter().enumerate() {
        let state = Rc::clone(&state);
        let all = Rc::clone(&pairs);
        dom::listen(&pair.question, "click", MODULE, move |_ev| {
            let open = state.borrow_mut().toggle(index);
            for (i, pair) in all.iter().enumerate() {
                pair.render(open == Some(i))?;
            }
            Ok(())
        })?;
    }
    log::debug!("[KSP] {MODULE}: {} pairs", pairs.len());
    Ok(())
}
