use crate::domain::UserDraft;
use crate::ui::app::UserManagerApp;
use crate::ui::app::state::{AppView, DisplayMode, ToastKind};
use crate::ui::app::store::command::UserDataRefreshReason;
use crate::ui::app::store::runtime::{session, users};

fn draft(first_name: &str, national_id: &str) -> UserDraft {
    UserDraft {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        age: 30,
        email: "j@x.com".to_string(),
        addresses: "1 Main St".to_string(),
        national_id: national_id.to_string(),
    }
}

fn logged_in_app() -> UserManagerApp {
    let mut app = UserManagerApp::new_for_test();
    session::authenticate(&mut app, "admin".into(), "admin".into());
    app
}

#[test]
fn test_authenticate_runtime_unlocks_on_fixed_pair() {
    let app = logged_in_app();

    assert!(app.state.authenticated);
    assert_eq!(app.state.current_view, AppView::Entry);
}

#[test]
fn test_authenticate_runtime_rejects_wrong_pair() {
    let mut app = UserManagerApp::new_for_test();
    session::authenticate(&mut app, "admin".into(), "nope".into());

    assert!(!app.state.authenticated);
    assert_eq!(app.state.current_view, AppView::Login);
    assert_eq!(app.state.toast.unwrap().message, "Invalid credentials!");
}

#[test]
fn test_insert_user_runtime_persists_and_notifies() {
    let mut app = logged_in_app();

    users::insert_user(&mut app, draft("Jane", "A123"));

    let stored = app.user_repo.list_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].draft(), draft("Jane", "A123"));
    let toast = app.state.toast.clone().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.message, "User added successfully!");
}

#[test]
fn test_insert_duplicate_runtime_surfaces_error() {
    let mut app = logged_in_app();
    users::insert_user(&mut app, draft("Jane", "A123"));

    users::insert_user(&mut app, draft("Other", "A123"));

    assert_eq!(app.user_repo.count().unwrap(), 1);
    let toast = app.state.toast.clone().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Error: National ID A123 is already registered");
}

#[test]
fn test_refresh_users_runtime_replaces_rows() {
    let mut app = logged_in_app();
    app.user_repo.insert(&draft("Jane", "A123")).unwrap();
    app.user_repo.insert(&draft("John", "B456")).unwrap();

    users::refresh_users(&mut app, UserDataRefreshReason::Manual);

    let ids: Vec<_> = app.state.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_update_user_runtime_closes_dialog_and_refreshes() {
    let mut app = logged_in_app();
    let id = app.user_repo.insert(&draft("Jane", "A123")).unwrap();
    users::refresh_users(&mut app, UserDataRefreshReason::Manual);
    app.dispatch(crate::ui::app::Action::Display(
        crate::ui::app::DisplayAction::Edit(id),
    ));
    assert_eq!(app.state.display_mode(), DisplayMode::EditDialogOpen);

    let mut edited = draft("Jane", "A123");
    edited.age = 31;
    users::update_user(&mut app, id, edited);

    assert_eq!(app.state.display_mode(), DisplayMode::Idle);
    assert_eq!(app.state.users[0].age, 31);
    assert_eq!(
        app.state.toast.clone().unwrap().message,
        "User updated successfully!"
    );
}

#[test]
fn test_update_missing_user_runtime_keeps_dialog() {
    let mut app = logged_in_app();
    let id = app.user_repo.insert(&draft("Jane", "A123")).unwrap();
    users::refresh_users(&mut app, UserDataRefreshReason::Manual);
    app.dispatch(crate::ui::app::Action::Display(
        crate::ui::app::DisplayAction::Edit(id),
    ));
    app.user_repo.delete(id).unwrap();

    users::update_user(&mut app, id, draft("Jane", "A123"));

    assert_eq!(app.state.display_mode(), DisplayMode::EditDialogOpen);
    assert_eq!(
        app.state.toast.clone().unwrap().message,
        format!("Error: User {id} not found")
    );
}

#[test]
fn test_delete_user_runtime_refreshes_even_when_missing() {
    let mut app = logged_in_app();
    let id = app.user_repo.insert(&draft("Jane", "A123")).unwrap();
    users::refresh_users(&mut app, UserDataRefreshReason::Manual);
    assert_eq!(app.state.users.len(), 1);

    users::delete_user(&mut app, id);
    assert!(app.state.users.is_empty());
    assert_eq!(
        app.state.toast.clone().unwrap().message,
        "User deleted successfully!"
    );

    // Second delete of the same id is a silent no-op that still re-renders.
    app.user_repo.insert(&draft("John", "B456")).unwrap();
    users::delete_user(&mut app, id);
    assert_eq!(app.state.users.len(), 1);
    assert_eq!(app.state.users[0].first_name, "John");
}
