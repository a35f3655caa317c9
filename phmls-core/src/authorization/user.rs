use super::*;
use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum UserField {
    Id,
    Role,
}

impl Record for User {
    type Field = UserField;

    fn value_of(&self, field: UserField) -> Value {
        match field {
            UserField::Id => self.id.into(),
            UserField::Role => self.role.into(),
        }
    }
}

pub type UserFilter = Predicate<UserField>;

pub fn access(actor: &User, op: Operation) -> AccessDecision<UserField> {
    let is_actor = Predicate::equals(UserField::Id, actor.id);
    match (op, actor.role) {
        (_, Role::Admin) => AccessDecision::Allow,
        (Operation::Create | Operation::Delete, _) => AccessDecision::Deny,
        (Operation::Read, Role::Approver) => AccessDecision::FilterBy(
            is_actor.or(Predicate::is_in(
                UserField::Role,
                [Role::Agent, Role::Approver],
            )),
        ),
        (Operation::Read | Operation::Update, _) => AccessDecision::FilterBy(is_actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phmls_entities::builders::*;

    #[test]
    fn approvers_see_agents_and_approvers() {
        let approver = User::build().id(1).role(Role::Approver).finish();
        let agent = User::build().id(2).finish();
        let admin = User::build().id(3).role(Role::Admin).finish();
        let read = access(&approver, Operation::Read);
        assert!(read.permits(&approver));
        assert!(read.permits(&agent));
        assert!(!read.permits(&admin));
    }

    #[test]
    fn agents_only_see_themselves() {
        let agent = User::build().id(2).finish();
        let other = User::build().id(4).finish();
        let read = access(&agent, Operation::Read);
        assert!(read.permits(&agent));
        assert!(!read.permits(&other));
        assert!(access(&agent, Operation::Create).is_denied());
        assert!(access(&agent, Operation::Delete).is_denied());
    }
}
