//! Article, photo and message actions used by the admin screens.

use folio_core::error::CoreError;
use folio_core::filter::{ListFilter, ARTICLE_FILTER, MESSAGE_FILTER, PHOTO_FILTER};
use folio_core::records::{denormalize_category, UNCATEGORIZED};
use folio_core::types::Record;
use folio_store::repositories::{ArticleRepo, CategoryRepo, MessageRepo, PhotoRepo};
use folio_store::{Collection, JsonStore};

use crate::error::AppResult;
use crate::handlers::dispatch::ActionRequest;
use crate::response::Envelope;

async fn label_categories(store: &JsonStore, records: &mut [Record]) -> AppResult<()> {
    let categories = CategoryRepo::list(store).await?;
    for record in records {
        denormalize_category(record, &categories, UNCATEGORIZED);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

/// `get_articles` (filters: `search`, `category_id`, `status=published|draft`)
pub async fn list_articles(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Vec<Record>>> {
    let filter = ListFilter::from_params(&ARTICLE_FILTER, &req.params)?;
    let mut articles = filter.apply(&ARTICLE_FILTER, ArticleRepo::list(store).await?);
    label_categories(store, &mut articles).await?;
    Ok(Envelope::data(articles))
}

/// `get_article`
pub async fn article(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let id = req.id()?;
    let mut article = ArticleRepo::find_by_id(store, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Collection::Articles.entity(),
            id,
        })?;
    label_categories(store, std::slice::from_mut(&mut article)).await?;
    Ok(Envelope::data(article))
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

/// `get_photos` (filters: `search`, `category_id`)
pub async fn list_photos(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Vec<Record>>> {
    let filter = ListFilter::from_params(&PHOTO_FILTER, &req.params)?;
    let mut photos = filter.apply(&PHOTO_FILTER, PhotoRepo::list(store).await?);
    label_categories(store, &mut photos).await?;
    Ok(Envelope::data(photos))
}

/// `get_photo`
pub async fn photo(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let id = req.id()?;
    let mut photo = PhotoRepo::find_by_id(store, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Collection::Photos.entity(),
            id,
        })?;
    label_categories(store, std::slice::from_mut(&mut photo)).await?;
    Ok(Envelope::data(photo))
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// `get_messages` (filters: `search`, `status=read|unread`)
pub async fn list_messages(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Vec<Record>>> {
    let filter = ListFilter::from_params(&MESSAGE_FILTER, &req.params)?;
    let messages = filter.apply(&MESSAGE_FILTER, MessageRepo::list(store).await?);
    Ok(Envelope::data(messages))
}

/// `get_message`
pub async fn message(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let id = req.id()?;
    let message = MessageRepo::find_by_id(store, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Collection::Messages.entity(),
            id,
        })?;
    Ok(Envelope::data(message))
}

/// `mark_message_read` -- sets `is_read` to 1, or to the submitted
/// `is_read` value (`0` or `1`).
pub async fn mark_message_read(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let id = req.id()?;
    let is_read = match req.param("is_read").map(str::trim) {
        None | Some("") | Some("1") => true,
        Some("0") => false,
        Some(other) => {
            return Err(CoreError::Validation(format!("is_read must be 0 or 1, got '{other}'")).into());
        }
    };

    let message = MessageRepo::set_read(store, id, is_read)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Collection::Messages.entity(),
            id,
        })?;

    tracing::info!(message_id = id, is_read, "Message read flag changed");

    Ok(Envelope::data_with_message(message, "Message updated"))
}

/// `delete_message`
pub async fn delete_message(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<()>> {
    let id = req.id()?;
    if !MessageRepo::delete(store, id).await? {
        return Err(CoreError::NotFound {
            entity: Collection::Messages.entity(),
            id,
        }
        .into());
    }

    tracing::info!(message_id = id, "Message deleted");

    Ok(Envelope::message("Message deleted"))
}
