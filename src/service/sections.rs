//! Section documents: homepage and about copy, portfolio, verticals, contact.
//!
//! Homepage content is free-form and merged shallowly as JSON. The about
//! sections are typed and merged field by field. The remaining documents
//! are replaced wholesale after validation.

use crate::db::{Document, StoreHandle};
use crate::error::CmsError;
use crate::types::about::{AboutContent, KeepExisting};
use crate::types::contact::Contact;
use crate::types::homepage::{Logo, ProcessCard};
use crate::types::portfolio::Portfolio;
use crate::types::verticals::Verticals;

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};

fn as_object<'a>(value: &'a mut Value, what: &str) -> Result<&'a mut Map<String, Value>, CmsError> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value
        .as_object_mut()
        .ok_or_else(|| CmsError::Store(format!("{what} is not an object")))
}

fn stamp(doc: &mut Map<String, Value>, key: &str) {
    doc.insert(key.to_string(), json!(Utc::now()));
}

/// Overwrite each top-level key of `target` present in `patch`.
fn merge_shallow(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (k, v) in patch {
        target.insert(k, v);
    }
}

pub async fn homepage(store: &StoreHandle) -> Result<Value, CmsError> {
    store.read(Document::Homepage).await
}

/// Merge a partial homepage document over the stored one.
pub async fn update_homepage(store: &StoreHandle, patch: Value) -> Result<Value, CmsError> {
    let Value::Object(patch) = patch else {
        return Err(CmsError::Validation("Homepage content must be an object".into()));
    };
    store
        .mutate(Document::Homepage, move |doc: &mut Value| {
            let obj = as_object(doc, "homepage")?;
            merge_shallow(obj, patch);
            stamp(obj, "updatedAt");
            Ok(doc.clone())
        })
        .await
}

/// Merge `data` into one named homepage section and return the whole
/// document. Object data is merged key by key; anything else replaces the
/// section.
pub async fn update_homepage_section(
    store: &StoreHandle,
    name: &str,
    data: Value,
) -> Result<Value, CmsError> {
    if name.is_empty() || name == "updatedAt" {
        return Err(CmsError::Validation(format!("invalid section name: {name}")));
    }
    let name = name.to_string();
    store
        .mutate(Document::Homepage, move |doc: &mut Value| {
            let obj = as_object(doc, "homepage")?;
            let replacement = match (obj.get_mut(&name), data) {
                (Some(Value::Object(section)), Value::Object(patch)) => {
                    merge_shallow(section, patch);
                    None
                }
                (_, data) => Some(data),
            };
            if let Some(data) = replacement {
                obj.insert(name, data);
            }
            stamp(obj, "updatedAt");
            Ok(doc.clone())
        })
        .await
}

/// Typed variant of [`update_homepage_section`]; `None` fields are omitted
/// and so keep their stored value.
pub async fn update_homepage_fields<S: Serialize>(
    store: &StoreHandle,
    name: &str,
    fields: &S,
) -> Result<Value, CmsError> {
    let doc = update_homepage_section(store, name, serde_json::to_value(fields)?).await?;
    Ok(doc.get(name).cloned().unwrap_or(Value::Null))
}

pub async fn replace_process_cards(
    store: &StoreHandle,
    cards: Vec<ProcessCard>,
) -> Result<Value, CmsError> {
    let cards = serde_json::to_value(cards)?;
    store
        .mutate(Document::Homepage, move |doc: &mut Value| {
            let obj = as_object(doc, "homepage")?;
            obj.insert("processCards".into(), cards.clone());
            stamp(obj, "updatedAt");
            Ok(cards)
        })
        .await
}

/// Replace the logo list inside `logoSection`, keeping its other fields.
pub async fn replace_logos(store: &StoreHandle, logos: Vec<Logo>) -> Result<Value, CmsError> {
    let logos = serde_json::to_value(logos)?;
    store
        .mutate(Document::Homepage, move |doc: &mut Value| {
            let obj = as_object(doc, "homepage")?;
            let section = obj
                .entry("logoSection")
                .or_insert_with(|| Value::Object(Map::new()));
            as_object(section, "logoSection")?.insert("logos".into(), logos.clone());
            stamp(obj, "updatedAt");
            Ok(logos)
        })
        .await
}

pub async fn about(store: &StoreHandle) -> Result<AboutContent, CmsError> {
    store.read(Document::About).await
}

/// Apply one about-page section update, where blank fields fall back to
/// the stored value, and return the merged section.
pub async fn update_about_section<S>(
    store: &StoreHandle,
    slot: fn(&mut AboutContent) -> &mut Option<S>,
    update: S,
) -> Result<S, CmsError>
where
    S: KeepExisting + Clone + Serialize + DeserializeOwned + Send + 'static,
{
    store
        .mutate(Document::About, move |about: &mut AboutContent| {
            let slot = slot(about);
            let merged = update.or_existing(slot.take());
            *slot = Some(merged.clone());
            about.updated_at = Some(Utc::now());
            Ok(merged)
        })
        .await
}

async fn replace<T>(
    store: &StoreHandle,
    doc: Document,
    mut value: T,
    touch: fn(&mut T),
) -> Result<T, CmsError>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    touch(&mut value);
    store
        .mutate(doc, move |stored: &mut Value| {
            *stored = serde_json::to_value(&value)?;
            Ok(value)
        })
        .await
}

pub async fn portfolio(store: &StoreHandle) -> Result<Portfolio, CmsError> {
    store.read(Document::Portfolio).await
}

pub async fn replace_portfolio(store: &StoreHandle, p: Portfolio) -> Result<Portfolio, CmsError> {
    replace(store, Document::Portfolio, p, |p| p.last_updated = Some(Utc::now())).await
}

pub async fn verticals(store: &StoreHandle) -> Result<Verticals, CmsError> {
    store.read(Document::Verticals).await
}

pub async fn replace_verticals(store: &StoreHandle, v: Verticals) -> Result<Verticals, CmsError> {
    replace(store, Document::Verticals, v, |v| v.last_updated = Some(Utc::now())).await
}

pub async fn contact(store: &StoreHandle) -> Result<Contact, CmsError> {
    store.read(Document::Contact).await
}

pub async fn replace_contact(store: &StoreHandle, c: Contact) -> Result<Contact, CmsError> {
    replace(store, Document::Contact, c, |c| c.last_updated = Some(Utc::now())).await
}
