use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tera::Context;

use crate::domain::user::User;
use crate::render::{RenderError, RowRenderer, Templates};

#[derive(Debug, Serialize)]
struct UserRowView<'a> {
    id: i32,
    name: &'a str,
    email: &'a str,
    role_label: &'static str,
    role_class: &'static str,
    status_label: &'static str,
    status_class: &'static str,
    created_at: DateTime<Utc>,
}

impl<'a> From<&'a User> for UserRowView<'a> {
    fn from(user: &'a User) -> Self {
        let (status_label, status_class) = if user.is_active {
            ("Активен", "bg-primary")
        } else {
            ("Неактивен", "bg-light text-dark")
        };

        Self {
            id: user.id.get(),
            name: &user.name,
            email: &user.email,
            role_label: user.role.label(),
            role_class: user.role.badge_class(),
            status_label,
            status_class,
            created_at: user.created_at,
        }
    }
}

/// Rows of the users table with an edit button keyed by user id.
pub struct UserRows {
    templates: Rc<Templates>,
}

impl UserRows {
    pub fn new(templates: Rc<Templates>) -> Self {
        Self { templates }
    }
}

impl RowRenderer for UserRows {
    type Item = User;

    fn render(&self, items: &[User]) -> Result<String, RenderError> {
        let users: Vec<UserRowView> = items.iter().map(UserRowView::from).collect();
        let mut context = Context::new();
        context.insert("users", &users);
        self.templates.render("users/rows.html", &context)
    }
}
