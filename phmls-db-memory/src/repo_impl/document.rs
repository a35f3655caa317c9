use phmls_core::authorization::document::DocumentFilter;

use super::*;

impl DocumentRepo for DbConnection<'_> {
    fn create_document(&self, mut document: Document) -> Result<Document> {
        let mut tables = self.tables_mut()?;
        document.id = next_id(&mut tables.sequences.documents)?;
        tables.documents.insert(document.id, document.clone());
        Ok(document)
    }
    fn get_document(&self, id: Id) -> Result<Document> {
        get(&self.tables().documents, &id)
    }
    fn find_documents_of_listing(
        &self,
        listing: Id,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>> {
        Ok(filtered(&self.tables().documents, filter)
            .into_iter()
            .filter(|d| d.listing == listing)
            .collect())
    }
    fn delete_document(&self, id: Id) -> Result<()> {
        self.tables_mut()?
            .documents
            .remove(&id)
            .map(|_| ())
            .ok_or(repo::Error::NotFound)
    }
    fn delete_documents_of_listing(&self, listing: Id) -> Result<usize> {
        Ok(remove_where(&mut self.tables_mut()?.documents, |d| {
            d.listing == listing
        }))
    }
}
