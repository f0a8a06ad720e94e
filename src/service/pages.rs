use crate::db::{Document, StoreHandle, generate_id};
use crate::error::CmsError;
use crate::service::users;
use crate::template::apply_content_blocks;
use crate::types::page::{ContentBlock, Page, PageInput, PageView, UserRef, check_html_file};
use crate::types::user::User;

use chrono::Utc;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DUPLICATE: &str = "Page with this name or slug already exists";

/// Site pages registered by [`scan_html`]: name, slug, file, title.
const SITE_PAGES: [(&str, &str, &str, &str); 5] = [
    ("Homepage", "home", "index.html", "Ventured Brands - Home"),
    ("About", "about", "about.html", "About - Ventured Brands"),
    ("Contact", "contact", "contact.html", "Contact - Ventured Brands"),
    ("Portfolio", "portfolio", "portfolio.html", "Portfolio - Ventured Brands"),
    (
        "Verticals",
        "verticals",
        "verticals.html",
        "Investment Verticals - Ventured Brands",
    ),
];

fn not_found() -> CmsError {
    CmsError::NotFound("Page not found".into())
}

fn resolve(page: Page, users: &HashMap<String, String>) -> PageView {
    let modified_by = page.modified_by.as_ref().map(|id| UserRef {
        id: id.clone(),
        email: users.get(id).cloned(),
    });
    PageView::new(page, modified_by)
}

async fn user_emails(store: &StoreHandle) -> Result<HashMap<String, String>, CmsError> {
    Ok(users::list(store)
        .await?
        .into_iter()
        .map(|u: User| (u.id, u.email))
        .collect())
}

async fn view(store: &StoreHandle, page: Page) -> Result<PageView, CmsError> {
    Ok(resolve(page, &user_emails(store).await?))
}

/// All pages, most recently modified first.
pub async fn list(store: &StoreHandle) -> Result<Vec<PageView>, CmsError> {
    let mut pages: Vec<Page> = store.read(Document::Pages).await?;
    pages.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    let emails = user_emails(store).await?;
    Ok(pages.into_iter().map(|p| resolve(p, &emails)).collect())
}

pub async fn get(store: &StoreHandle, id: &str) -> Result<PageView, CmsError> {
    let pages: Vec<Page> = store.read(Document::Pages).await?;
    let page = pages.into_iter().find(|p| p.id == id).ok_or_else(not_found)?;
    view(store, page).await
}

pub async fn find_by_slug(store: &StoreHandle, slug: &str) -> Result<Option<Page>, CmsError> {
    let pages: Vec<Page> = store.read(Document::Pages).await?;
    Ok(pages.into_iter().find(|p| p.slug == slug))
}

fn conflicts(pages: &[Page], name: &str, slug: &str, except: Option<&str>) -> bool {
    pages
        .iter()
        .filter(|p| Some(p.id.as_str()) != except)
        .any(|p| p.name == name || p.slug == slug)
}

pub async fn create(
    store: &StoreHandle,
    input: PageInput,
    user_id: &str,
) -> Result<PageView, CmsError> {
    let user_id = user_id.to_string();
    let page = store
        .mutate(Document::Pages, move |pages: &mut Vec<Page>| {
            if conflicts(pages, &input.name, &input.slug, None) {
                return Err(CmsError::Duplicate(DUPLICATE.into()));
            }
            let now = Utc::now();
            let page = Page {
                id: generate_id(),
                name: input.name,
                slug: input.slug,
                title: input.title,
                description: input.description,
                html_file: input.html_file,
                content_blocks: input.content_blocks,
                is_published: input.is_published,
                last_modified: now,
                modified_by: Some(user_id),
                created_at: Some(now),
                updated_at: Some(now),
            };
            pages.push(page.clone());
            Ok(page)
        })
        .await?;
    info!(id = %page.id, slug = %page.slug, "page created");
    view(store, page).await
}

pub async fn update(
    store: &StoreHandle,
    id: &str,
    input: PageInput,
    user_id: &str,
) -> Result<PageView, CmsError> {
    let id = id.to_string();
    let user_id = user_id.to_string();
    let page = store
        .mutate(Document::Pages, move |pages: &mut Vec<Page>| {
            let idx = pages.iter().position(|p| p.id == id).ok_or_else(not_found)?;
            if conflicts(pages, &input.name, &input.slug, Some(id.as_str())) {
                return Err(CmsError::Duplicate(DUPLICATE.into()));
            }
            let now = Utc::now();
            let page = &mut pages[idx];
            page.name = input.name;
            page.slug = input.slug;
            page.title = input.title;
            page.description = input.description;
            page.html_file = input.html_file;
            page.content_blocks = input.content_blocks;
            page.is_published = input.is_published;
            page.last_modified = now;
            page.modified_by = Some(user_id);
            page.updated_at = Some(now);
            Ok(page.clone())
        })
        .await?;
    view(store, page).await
}

pub async fn delete(store: &StoreHandle, id: &str) -> Result<(), CmsError> {
    let id = id.to_string();
    store
        .mutate(Document::Pages, move |pages: &mut Vec<Page>| {
            let before = pages.len();
            pages.retain(|p| p.id != id);
            if pages.len() == before {
                return Err(not_found());
            }
            Ok(())
        })
        .await
}

/// Replace a page's content blocks and patch its HTML file under
/// `public_dir` to match.
///
/// A missing HTML file is logged and skipped; the blocks are still saved.
pub async fn set_blocks(
    store: &StoreHandle,
    public_dir: &Path,
    id: &str,
    blocks: Vec<ContentBlock>,
    user_id: &str,
) -> Result<PageView, CmsError> {
    let id = id.to_string();
    let user_id = user_id.to_string();
    let root = public_dir.to_path_buf();
    let (page, path) = store
        .mutate(Document::Pages, move |pages: &mut Vec<Page>| {
            let page = pages.iter_mut().find(|p| p.id == id).ok_or_else(not_found)?;
            // Resolved before anything changes so a bad path stores nothing.
            let path = html_path(&root, &page.html_file)?;
            let now = Utc::now();
            page.content_blocks = blocks;
            page.last_modified = now;
            page.updated_at = Some(now);
            page.modified_by = Some(user_id);
            Ok((page.clone(), path))
        })
        .await?;

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => {
            let patched = apply_content_blocks(&html, &page.content_blocks);
            for selector in &patched.unmatched {
                warn!(page = %page.slug, selector = %selector, "content block matched no element");
            }
            tokio::fs::write(&path, patched.html).await?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "page HTML file missing, skipped patching");
        }
        Err(e) => return Err(e.into()),
    }

    view(store, page).await
}

/// Register the known site pages whose slug is not taken yet.
pub async fn scan_html(store: &StoreHandle, user_id: &str) -> Result<Vec<Page>, CmsError> {
    let user_id = user_id.to_string();
    store
        .mutate(Document::Pages, move |pages: &mut Vec<Page>| {
            let mut created = Vec::new();
            for (name, slug, file, title) in SITE_PAGES {
                if conflicts(pages, name, slug, None) {
                    continue;
                }
                let now = Utc::now();
                let page = Page {
                    id: generate_id(),
                    name: name.into(),
                    slug: slug.into(),
                    title: title.into(),
                    description: None,
                    html_file: file.into(),
                    content_blocks: Vec::new(),
                    is_published: true,
                    last_modified: now,
                    modified_by: Some(user_id.clone()),
                    created_at: Some(now),
                    updated_at: Some(now),
                };
                pages.push(page.clone());
                created.push(page);
            }
            Ok(created)
        })
        .await
}

/// Resolve a page-relative HTML path under `root`, refusing anything that
/// could leave it.
pub fn html_path(root: &Path, relative: &str) -> Result<PathBuf, CmsError> {
    check_html_file(relative)?;
    Ok(root.join(relative))
}
