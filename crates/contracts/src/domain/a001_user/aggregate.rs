use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::{AggregateRoot, Choice, QuickAction};
use crate::shared::list::sort::cmp_text;
use crate::shared::list::{Searchable, Sortable};

crate::numeric_id!(
    /// Уникальный идентификатор пользователя
    UserId
);

crate::choice_enum!(
    /// Роль пользователя в панели
    UserRole {
        Admin => "Admin",
        Editor => "Editor",
        Viewer => "Viewer",
    }
);

crate::choice_enum!(UserStatus {
    Active => "Active",
    Inactive => "Inactive",
});

/// Пользователь панели администратора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_date: NaiveDate,
    pub avatar: String,
}

impl User {
    /// Инициалы для аватара-заглушки ("Alice Wonderland" -> "AW")
    pub fn initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Аватар-заглушка для нового пользователя
    pub fn placeholder_avatar(name: &str) -> String {
        format!(
            "https://placehold.co/100x100/E0E7FF/000000?text={}",
            Self::initials(name)
        )
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl AggregateRoot for User {
    type Id = UserId;
    type Status = UserStatus;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn status(&self) -> UserStatus {
        self.status
    }

    fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn created_message(&self) -> String {
        format!("New user {} added successfully", self.name)
    }
}

impl QuickAction for User {
    fn next_status(&self) -> UserStatus {
        match self.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }

    fn action_label(&self) -> &'static str {
        match self.status {
            UserStatus::Active => "Deactivate",
            UserStatus::Inactive => "Activate",
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.label()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "role" => Some(self.role.label().to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => cmp_text(&self.email, &other.email),
            "role" => cmp_text(self.role.label(), other.role.label()),
            "status" => cmp_text(self.status.label(), other.status.label()),
            "joined_date" => self.joined_date.cmp(&other.joined_date),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(User::initials("Alice Wonderland"), "AW");
        assert_eq!(User::initials("cher"), "C");
        assert_eq!(User::initials("Jean Claude Van Damme"), "JC");
        assert_eq!(User::initials("  "), "");
    }

    #[test]
    fn test_search_by_role() {
        let user = User {
            id: UserId(1),
            name: "Alice Wonderland".into(),
            email: "alice@example.com".into(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            joined_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            avatar: String::new(),
        };
        assert!(user.matches_filter("admin"));
        assert!(user.matches_filter("EXAMPLE.COM"));
        assert!(!user.matches_filter("editor"));
        assert_eq!(user.action_label(), "Deactivate");
    }
}
