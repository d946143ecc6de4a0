//! Test the rename and skip field options.

use interview::{FormatOptions, Shape, format, hidden_field};

#[derive(Shape)]
struct Account {
    #[shape(rename = "ID")]
    id: u64,
    #[shape(skip)]
    session: Option<String>,
    name: String,
}

#[derive(Shape)]
struct Team {
    lead: Account,
}

fn main() {
    let account = Account {
        id: 7,
        session: Some("token".to_string()),
        name: "ada".to_string(),
    };
    assert_eq!(
        format(&account, &FormatOptions::new().show_field_names(true)),
        "{ID: 7, name: ada}"
    );

    let copy = account.deep_copy();
    assert_eq!(copy.id, 7);
    assert!(copy.session.is_none());
    assert!(account.session.is_some());

    assert_eq!(hidden_field::<Account>().as_deref(), Some("session"));
    assert_eq!(hidden_field::<Team>().as_deref(), Some("lead.session"));
}
