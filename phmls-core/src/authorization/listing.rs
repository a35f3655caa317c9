use super::*;
use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ListingField {
    Id,
    CreatedBy,
    Status,
    ListingType,
    Province,
    PropertyCategory,
}

impl Record for Listing {
    type Field = ListingField;

    fn value_of(&self, field: ListingField) -> Value {
        match field {
            ListingField::Id => self.id.into(),
            ListingField::CreatedBy => self.created_by.into(),
            ListingField::Status => self.status.into(),
            ListingField::ListingType => self.listing_type.into(),
            ListingField::Province => self.province.as_ref().into(),
            ListingField::PropertyCategory => self.property_category.into(),
        }
    }
}

pub type ListingFilter = Predicate<ListingField>;

fn created_by(user: &User) -> ListingFilter {
    Predicate::equals(ListingField::CreatedBy, user.id)
}

pub fn access(actor: &User, op: Operation) -> AccessDecision<ListingField> {
    use ListingStatus as S;
    match (op, actor.role) {
        (Operation::Create, _) => AccessDecision::Allow,
        (_, Role::Admin) => AccessDecision::Allow,
        (Operation::Read, Role::Approver) => AccessDecision::FilterBy(
            created_by(actor).or(Predicate::not_equals(ListingField::Status, S::Draft)),
        ),
        (Operation::Read, Role::Agent) => AccessDecision::FilterBy(
            created_by(actor).or(Predicate::equals(ListingField::Status, S::Published)),
        ),
        (Operation::Update | Operation::Delete, Role::Approver) => AccessDecision::Allow,
        (Operation::Update, Role::Agent) => AccessDecision::FilterBy(
            created_by(actor)
                .and(Predicate::equals(
                    ListingField::ListingType,
                    ListingType::Resale,
                ))
                .and(Predicate::not_in(
                    ListingField::Status,
                    [S::Submitted, S::Published],
                )),
        ),
        (Operation::Delete, Role::Agent) => AccessDecision::FilterBy(
            created_by(actor).and(Predicate::equals(ListingField::Status, S::Draft)),
        ),
    }
}
