//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::client::models::User;

/// One row of the `whoami` table
#[derive(Debug, Tabled)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "ROLES")]
    roles: String,
    #[tabled(rename = "VERIFIED")]
    verified: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone().unwrap_or_else(|| "-".to_string()),
            roles: if user.roles.is_empty() {
                "-".to_string()
            } else {
                user.roles.join(", ")
            },
            verified: user
                .email_verified_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "no".to_string()),
        }
    }
}

/// Format the current user as a table
pub fn format_user_table(user: &User) -> String {
    let rows = vec![UserRow::from(user)];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
