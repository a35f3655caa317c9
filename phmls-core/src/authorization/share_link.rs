use super::*;
use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ShareLinkField {
    Listing,
    CreatedBy,
    IsActive,
}

impl Record for ExternalShareLink {
    type Field = ShareLinkField;

    fn value_of(&self, field: ShareLinkField) -> Value {
        match field {
            ShareLinkField::Listing => self.listing.into(),
            ShareLinkField::CreatedBy => self.created_by.into(),
            ShareLinkField::IsActive => self.is_active.into(),
        }
    }
}

pub type ShareLinkFilter = Predicate<ShareLinkField>;

pub fn access(actor: &User, op: Operation) -> AccessDecision<ShareLinkField> {
    match (op, actor.role) {
        (Operation::Create, _) | (_, Role::Admin) => AccessDecision::Allow,
        (Operation::Read | Operation::Update | Operation::Delete, _) => AccessDecision::FilterBy(
            Predicate::equals(ShareLinkField::CreatedBy, actor.id),
        ),
    }
}
