use super::*;

pub fn change_user_role(connections: &Connections, actor: Id, user: Id, role: Role) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::change_user_role(conn, &actor, user, role).inspect_err(|err| {
            warn!("Failed to change role for user {user}: {err}");
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn change_user_role(
        fixture: &BackendFixture,
        actor: Id,
        user: Id,
        role: Role,
    ) -> super::Result<User> {
        super::change_user_role(&fixture.db_connections, actor, user, role)
    }

    #[test]
    fn should_promote_an_agent_if_its_done_by_an_admin() {
        let fixture = BackendFixture::new();
        let user = change_user_role(&fixture, fixture.admin, fixture.agent, Role::Approver).unwrap();
        assert_eq!(Role::Approver, user.role);
        assert_eq!(Role::Approver, fixture.get_user(fixture.agent).role);
    }

    #[test]
    fn should_not_change_the_role_if_its_done_by_an_approver() {
        let fixture = BackendFixture::new();
        assert!(change_user_role(&fixture, fixture.approver, fixture.agent, Role::Admin).is_err());
        assert_eq!(Role::Agent, fixture.get_user(fixture.agent).role);
    }
}
