use phmls_core::authorization::user::UserFilter;

use super::*;

fn create_user(tables: &mut Tables, mut user: User) -> Result<User> {
    if tables.users.values().any(|u| u.email == user.email) {
        return Err(repo::Error::AlreadyExists);
    }
    user.id = next_id(&mut tables.sequences.users)?;
    tables.users.insert(user.id, user.clone());
    Ok(user)
}

fn try_get_user_by_email(tables: &Tables, email: &str) -> Option<User> {
    tables.users.values().find(|u| u.email == email).cloned()
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: User) -> Result<User> {
        create_user(&mut *self.tables_mut()?, user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        replace(&mut self.tables_mut()?.users, user.id, user.clone())
    }
    fn get_user(&self, id: Id) -> Result<User> {
        get(&self.tables().users, &id)
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(try_get_user_by_email(&self.tables(), email))
    }
    fn find_users(&self, filter: &UserFilter) -> Result<Vec<User>> {
        Ok(filtered(&self.tables().users, filter))
    }
    fn find_users_by_role(&self, role: Role) -> Result<Vec<User>> {
        Ok(self
            .tables()
            .users
            .values()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
    fn count_users(&self) -> Result<usize> {
        Ok(self.tables().users.len())
    }
}
