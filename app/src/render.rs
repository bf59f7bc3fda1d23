//! Plain-text rendering of the view.

use std::fmt::Write;

use crate::state::ViewState;

/// Renders the view as plain text, one line per element.
pub fn render(state: &ViewState, expensive: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Count: {}", state.count);
    let _ = writeln!(out, "Expensive value: {expensive}");
    if state.loading {
        out.push_str("Loading...\n");
        return out;
    }
    let _ = writeln!(out, "Users ({}):", state.users.len());
    for user in state.users.iter() {
        let _ = writeln!(out, "  #{} {} <{}>", user.id, user.name, user.email);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use user_core::User;

    use super::*;

    #[test]
    fn renders_users_in_order() {
        let state = ViewState {
            count: 3,
            users: Arc::new(vec![
                User {
                    id: 1,
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    password: "password123".to_string(),
                },
                User {
                    id: 2,
                    name: "Local".to_string(),
                    email: "local@example.com".to_string(),
                    password: String::new(),
                },
            ]),
            loading: false,
        };

        let text = render(&state, 45);
        assert_eq!(
            text,
            "Count: 3\nExpensive value: 45\nUsers (2):\n  #1 John Doe <john@example.com>\n  #2 Local <local@example.com>\n"
        );
        assert!(!text.contains("password123"));
    }

    #[test]
    fn loading_hides_the_list() {
        let state = ViewState {
            loading: true,
            ..ViewState::default()
        };
        let text = render(&state, 0);
        assert!(text.ends_with("Loading...\n"));
        assert!(!text.contains("Users"));
    }
}
