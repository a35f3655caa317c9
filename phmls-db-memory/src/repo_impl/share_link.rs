use phmls_core::authorization::share_link::ShareLinkFilter;

use super::*;

impl ShareLinkRepo for DbConnection<'_> {
    fn create_share_link(&self, mut link: ExternalShareLink) -> Result<ExternalShareLink> {
        let mut tables = self.tables_mut()?;
        if tables.share_links.values().any(|l| l.token == link.token) {
            return Err(repo::Error::AlreadyExists);
        }
        link.id = next_id(&mut tables.sequences.share_links)?;
        tables.share_links.insert(link.id, link.clone());
        Ok(link)
    }
    fn get_share_link(&self, id: Id) -> Result<ExternalShareLink> {
        get(&self.tables().share_links, &id)
    }
    fn get_share_link_by_token(&self, token: &Token) -> Result<ExternalShareLink> {
        self.tables()
            .share_links
            .values()
            .find(|l| &l.token == token)
            .cloned()
            .ok_or(repo::Error::NotFound)
    }
    fn update_share_link(&self, link: &ExternalShareLink) -> Result<()> {
        replace(&mut self.tables_mut()?.share_links, link.id, link.clone())
    }
    fn find_share_links(&self, filter: &ShareLinkFilter) -> Result<Vec<ExternalShareLink>> {
        Ok(filtered(&self.tables().share_links, filter))
    }
    fn delete_share_links_of_listing(&self, listing: Id) -> Result<usize> {
        Ok(remove_where(&mut self.tables_mut()?.share_links, |l| {
            l.listing == listing
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Connections;

    fn link(listing: u64) -> ExternalShareLink {
        ExternalShareLink {
            id: Id::default(),
            token: Token::new(),
            listing: listing.into(),
            created_by: Id::new(1),
            is_active: true,
            expires_at: None,
            view_count: 0,
            last_viewed_at: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn lookup_by_token_and_cascade() {
        let connections = Connections::in_memory();
        let token = connections
            .exclusive()
            .unwrap()
            .transaction(|conn| {
                let first = conn.create_share_link(link(1))?;
                conn.create_share_link(link(1))?;
                conn.create_share_link(link(2))?;
                Ok::<_, repo::Error>(first.token)
            })
            .unwrap();
        let removed = connections
            .exclusive()
            .unwrap()
            .transaction(|conn| {
                assert_eq!(Id::new(1), conn.get_share_link_by_token(&token)?.id);
                conn.delete_share_links_of_listing(Id::new(1))
            })
            .unwrap();
        assert_eq!(2, removed);
        let db = connections.shared().unwrap();
        assert!(matches!(
            db.get_share_link_by_token(&token),
            Err(repo::Error::NotFound)
        ));
    }
}
