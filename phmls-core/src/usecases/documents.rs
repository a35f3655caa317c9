use super::{check_read, check_write, prelude::*};
use crate::{
    authorization::{document, listing},
    hooks,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub file_name: String,
    pub visibility: Visibility,
}

/// Attaches a document to a listing.
///
/// Agents may only attach documents to their own listings,
/// approvers and admins to every listing they can see.
pub fn create_document<R>(
    repo: &R,
    actor: &User,
    listing_id: Id,
    new_document: NewDocument,
) -> Result<Document>
where
    R: ListingRepo + DocumentRepo,
{
    let listing = repo.get_listing(listing_id)?;
    check_read(listing::access(actor, Operation::Read), &listing)?;
    if actor.role == Role::Agent && !listing.is_created_by(actor.id) {
        return Err(Error::Forbidden);
    }
    let NewDocument {
        title,
        file_name,
        visibility,
    } = new_document;
    let title = title.trim();
    if title.is_empty() {
        return Err(hooks::Error::Required("Title").into());
    }
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(hooks::Error::Required("File Name").into());
    }
    let document = Document {
        id: Id::default(),
        listing: listing.id,
        title: title.to_owned(),
        file_name: file_name.to_owned(),
        visibility,
        uploaded_by: actor.id,
        created_at: Timestamp::now(),
    };
    check_write(document::access(actor, Operation::Create), &document)?;
    let document = repo.create_document(document)?;
    log::info!(
        "Attached {} document {} to listing {} by user {}",
        document.visibility,
        document.id,
        listing.id,
        actor.id
    );
    Ok(document)
}

pub fn list_documents<R>(repo: &R, actor: &User, listing_id: Id) -> Result<Vec<Document>>
where
    R: ListingRepo + DocumentRepo,
{
    let listing = repo.get_listing(listing_id)?;
    check_read(listing::access(actor, Operation::Read), &listing)?;
    let filter = document::access(actor, Operation::Read).into_predicate();
    Ok(repo.find_documents_of_listing(listing.id, &filter)?)
}

pub fn delete_document<R>(repo: &R, actor: &User, id: Id) -> Result<()>
where
    R: DocumentRepo,
{
    let document = repo.get_document(id)?;
    check_read(document::access(actor, Operation::Read), &document)?;
    check_write(document::access(actor, Operation::Delete), &document)?;
    repo.delete_document(id)?;
    log::info!("Deleted document {id} by user {}", actor.id);
    Ok(())
}
