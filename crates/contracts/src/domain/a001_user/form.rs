use crate::domain::common::AggregateRoot;
use crate::shared::date_utils::{to_input, today};
use crate::shared::error::ValidationErrors;
use crate::shared::list::{EntityForm, FieldChecker};

use super::aggregate::{User, UserRole, UserStatus};

/// Буфер формы пользователя
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_date: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::Viewer,
            status: UserStatus::Active,
            joined_date: to_input(today()),
        }
    }
}

impl EntityForm for UserForm {
    type Entity = User;

    fn from_entity(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            joined_date: to_input(user.joined_date),
        }
    }

    fn into_entity(
        &self,
        id: <User as AggregateRoot>::Id,
        base: Option<&User>,
    ) -> Result<User, ValidationErrors> {
        let mut check = FieldChecker::new();
        let name = check.required("name", &self.name);
        let email = check.email("email", &self.email);
        let joined_date = check.date("joined_date", &self.joined_date);
        check.finish()?;

        let avatar = base
            .map(|u| u.avatar.clone())
            .unwrap_or_else(|| User::placeholder_avatar(&name));

        Ok(User {
            id,
            name,
            email,
            role: self.role,
            status: self.status,
            joined_date,
            avatar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::UserId;
    use crate::shared::error::FormError;
    use crate::shared::fixtures::SeedData;
    use crate::shared::list::{delete_entity, FormController, FormMode, ResourceCollection};
    use crate::shared::notifications::{NotificationKind, NotificationStore};

    fn setup() -> (ResourceCollection<User>, NotificationStore, FormController<UserForm>) {
        (
            ResourceCollection::new(SeedData::demo().users),
            NotificationStore::new(),
            FormController::new(),
        )
    }

    #[test]
    fn test_create_then_delete_restores_collection() {
        let (mut users, mut notifications, mut form) = setup();
        let before = users.items().to_vec();

        form.open_for_create();
        form.edit(|f| {
            f.name = "Jane Doe".into();
            f.email = "jane@x.io".into();
            f.joined_date = "2024-06-01".into();
        });
        let id = form.submit(&mut users, &mut notifications).unwrap();

        assert_eq!(id, UserId(6));
        assert_eq!(users.len(), 6);
        let created = users.find(&id).unwrap();
        assert_eq!(created.role, UserRole::Viewer);
        assert_eq!(created.status, UserStatus::Active);
        assert!(created.avatar.ends_with("text=JD"));
        assert!(!form.is_open());

        let first = &notifications.notifications()[0];
        assert_eq!(first.kind, NotificationKind::Success);
        assert_eq!(first.message, "New user Jane Doe added successfully");

        delete_entity(&mut users, &id, &mut notifications);
        assert_eq!(users.items(), before.as_slice());
        assert_eq!(notifications.len(), 2);
    }

    #[test]
    fn test_unchanged_edit_keeps_record() {
        let (mut users, mut notifications, mut form) = setup();
        let original = users.items()[1].clone();

        form.open_for_edit(&original);
        assert_eq!(form.mode(), &FormMode::Edit(original.id));
        let id = form.submit(&mut users, &mut notifications).unwrap();

        assert_eq!(users.find(&id), Some(&original));
        assert_eq!(notifications.len(), 1);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let (mut users, mut notifications, mut form) = setup();
        form.open_for_create();
        form.edit(|f| f.email = "missing-at".into());

        let err = form.submit(&mut users, &mut notifications).unwrap_err();

        assert!(matches!(err, FormError::Validation(_)));
        assert!(form.is_open());
        assert!(form.errors().has("name"));
        assert!(form.errors().has("email"));
        assert_eq!(users.len(), 5);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_submit_edit_of_deleted_record() {
        let (mut users, mut notifications, mut form) = setup();
        let target = users.items()[0].clone();
        form.open_for_edit(&target);
        users.remove(&target.id);

        let err = form.submit(&mut users, &mut notifications).unwrap_err();
        assert_eq!(err, FormError::TargetMissing("1".into()));
        assert!(form.is_open());
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn test_closed_form_rejects_submit_and_edits() {
        let (mut users, mut notifications, mut form) = setup();
        assert_eq!(form.edit(|f| f.name = "x".into()), None);
        assert_eq!(form.submit(&mut users, &mut notifications), Err(FormError::NotOpen));

        form.open_for_edit(&users.items()[0].clone());
        form.cancel();
        assert_eq!(form.buffer(), &UserForm::default());
    }

    #[test]
    fn test_buffer_edits_stay_out_of_collection_until_submit() {
        let (users, notifications, mut form) = setup();
        let snapshot = users.items().to_vec();
        let original = users.items()[0].clone();

        form.open_for_edit(&original);
        form.edit(|f| f.name = "X".into());
        assert_eq!(form.buffer().name, "X");
        assert_eq!(users.find(&original.id), Some(&original));
        assert_eq!(users.version(), 0);

        form.cancel();
        assert!(!form.is_open());
        assert_eq!(users.items(), snapshot.as_slice());
        assert_eq!(users.version(), 0);
        assert!(notifications.is_empty());

        // после отмены форма открывается с исходными значениями
        form.open_for_edit(users.find(&original.id).unwrap());
        assert_eq!(form.buffer().name, original.name);
    }
}
