//! Contact form: inline validation, then hand-off to the visitor's mail
//! client through a pre-filled `mailto:` link.
//!
//! Nothing is sent over the network. Once the link opens, the form is
//! swapped for a success panel whose reset control brings back a blank form.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "ContactForm";

pub const REQUIRED_MESSAGE: &str = "この項目は必須です";
pub const INVALID_EMAIL_MESSAGE: &str = "正しいメールアドレスを入力してください";
/// Stand-in for optional fields left blank.
pub const NONE_PLACEHOLDER: &str = "なし";

/// Deliberately loose: `local@domain.tld` with no whitespace.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Bytes `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

impl FieldKind {
    /// Kind for an input's `type` attribute.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") { Self::Email } else { Self::Text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("この項目は必須です")]
    Required,
    #[error("正しいメールアドレスを入力してください")]
    InvalidEmail,
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|re| re.is_match(value))
}

pub fn validate_field(value: &str, kind: FieldKind) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Validate every field; a failure never stops the remaining checks.
#[must_use]
pub fn validate_all(fields: &[(FieldKind, &str)]) -> Vec<Result<(), FieldError>> {
    fields.iter().map(|&(kind, value)| validate_field(value, kind)).collect()
}

/// Percent-encode like `encodeURIComponent`.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Values of the inquiry form, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn subject(&self) -> String {
        format!("【お問い合わせ】{}様", self.name)
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "お名前: {}\n会社名: {}\nメール: {}\n電話番号: {}\n\nお問い合わせ内容:\n{}",
            self.name,
            or_none(&self.company),
            self.email,
            or_none(&self.phone),
            self.message,
        )
    }

    /// `mailto:` URL addressed to `recipient` with encoded subject and body.
    #[must_use]
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&self.subject()),
            encode_component(&self.body()),
        )
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { NONE_PLACEHOLDER } else { value }
}

#[cfg(feature = "hydrate")]
fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    el.get_attribute("value").unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn field_kind(el: &Element) -> FieldKind {
    el.dyn_ref::<HtmlInputElement>()
        .map_or(FieldKind::Text, |input| FieldKind::from_input_type(&input.type_()))
}

/// Show (or clear, on `Ok`) a field's inline error.
#[cfg(feature = "hydrate")]
fn annotate(field: &Element, result: Result<(), FieldError>) -> Result<(), SiteError> {
    let Some(wrapper) = field.closest(".form-field")? else {
        return Ok(());
    };
    dom::set_class(&wrapper, "form-field--error", result.is_err())?;
    if let Some(slot) = dom::query_in(&wrapper, ".form-field__error")? {
        let message = result.err().map(|err| err.to_string()).unwrap_or_default();
        slot.set_text_content(Some(&message));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn set_hidden(el: &Element, hidden: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.set_hidden(hidden);
    }
}

#[cfg(feature = "hydrate")]
fn read_message(form: &Element) -> Result<ContactMessage, SiteError> {
    let value = |id: &str| -> Result<String, SiteError> {
        Ok(dom::query_in(form, &format!("#{id}"))?.map(|el| field_value(&el)).unwrap_or_default())
    };
    Ok(ContactMessage {
        name: value("contact-name")?,
        company: value("contact-company")?,
        email: value("contact-email")?,
        phone: value("contact-phone")?,
        message: value("contact-message")?,
    })
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let Some(form) = dom::query(".contact-form")? else {
        return Ok(());
    };
    let fields = Rc::new(dom::query_all_in(&form, "[required]")?);
    let success = dom::query(".form-success")?;
    let recipient = config.contact.recipient.clone();

    let submit_form = form.clone();
    let submit_fields = Rc::clone(&fields);
    let submit_success = success.clone();
    dom::listen(&form, "submit", MODULE, move |ev| {
        ev.prevent_default();
        let mut valid = true;
        for field in submit_fields.iter() {
            let result = validate_field(&field_value(field), field_kind(field));
            valid &= result.is_ok();
            annotate(field, result)?;
        }
        if !valid {
            return Ok(());
        }

        let href = read_message(&submit_form)?.mailto(&recipient);
        if let Some(success) = &submit_success {
            set_hidden(&submit_form, true);
            set_hidden(success, false);
        }
        dom::window()?.location().set_href(&href)?;
        Ok(())
    })?;

    if let Some(success) = &success
        && let Some(reset) = dom::query_in(success, ".form-success__reset")?
    {
        let form = form.clone();
        let success = success.clone();
        dom::listen(&reset, "click", MODULE, move |_ev| {
            set_hidden(&success, true);
            set_hidden(&form, false);
            if let Some(html_form) = form.dyn_ref::<HtmlFormElement>() {
                html_form.reset();
            }
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            form.scroll_into_view_with_scroll_into_view_options(&options);
            Ok(())
        })?;
    }

    for field in fields.iter() {
        let target = field.clone();
        dom::listen(field, "input", MODULE, move |_ev| annotate(&target, Ok(())))?;
    }

    log::debug!("[KSP] {MODULE}: {} required fields", fields.len());
    Ok(())
}
