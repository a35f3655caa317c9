use super::*;
use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentField {
    Listing,
    UploadedBy,
    Visibility,
}

impl Record for Document {
    type Field = DocumentField;

    fn value_of(&self, field: DocumentField) -> Value {
        match field {
            DocumentField::Listing => self.listing.into(),
            DocumentField::UploadedBy => self.uploaded_by.into(),
            DocumentField::Visibility => self.visibility.into(),
        }
    }
}

pub type DocumentFilter = Predicate<DocumentField>;

pub fn access(actor: &User, op: Operation) -> AccessDecision<DocumentField> {
    let uploaded_by_actor = Predicate::equals(DocumentField::UploadedBy, actor.id);
    match (op, actor.role) {
        (Operation::Create, _) => AccessDecision::Allow,
        (_, Role::Admin | Role::Approver) => AccessDecision::Allow,
        (Operation::Read, Role::Agent) => AccessDecision::FilterBy(
            Predicate::equals(DocumentField::Visibility, Visibility::Internal)
                .or(uploaded_by_actor),
        ),
        (Operation::Update | Operation::Delete, Role::Agent) => {
            AccessDecision::FilterBy(uploaded_by_actor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phmls_entities::builders::*;

    fn document(uploaded_by: u64, visibility: Visibility) -> Document {
        Document {
            id: Id::new(1),
            listing: Id::new(10),
            title: "Floor plan".into(),
            file_name: "floor-plan.pdf".into(),
            visibility,
            uploaded_by: Id::new(uploaded_by),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn private_documents_are_visible_to_owner_and_reviewers() {
        let owner = User::build().id(1).finish();
        let other = User::build().id(2).finish();
        let approver = User::build().id(3).role(Role::Approver).finish();
        let doc = document(1, Visibility::Private);
        assert!(access(&owner, Operation::Read).permits(&doc));
        assert!(!access(&other, Operation::Read).permits(&doc));
        assert!(access(&approver, Operation::Read).permits(&doc));
    }

    #[test]
    fn internal_documents_are_visible_to_everybody() {
        let other = User::build().id(2).finish();
        let doc = document(1, Visibility::Internal);
        assert!(access(&other, Operation::Read).permits(&doc));
        assert!(!access(&other, Operation::Delete).permits(&doc));
    }
}
