use super::*;
use client_core::{fallback_brief, ADMIN_EMAIL};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("date")
}

fn items(titles: &[&str]) -> Vec<NewsItem> {
    titles
        .iter()
        .map(|title| NewsItem::new(*title, "summary", "source", "1h ago"))
        .collect()
}

fn logged_in_model(email: &str) -> AppModel {
    let mut model = AppModel::new();
    assert!(model
        .apply_action(
            UiAction::Login {
                email: email.to_string()
            },
            today()
        )
        .is_none());
    model
}

fn open_brief(model: &mut AppModel) -> u64 {
    match model.apply_action(UiAction::OpenBrief, today()) {
        Some(BackendCommand::FetchBrief { request_id, today: day }) => {
            assert_eq!(day, today());
            request_id
        }
        None => panic!("expected a fetch command"),
    }
}

#[test]
fn starts_on_login_screen() {
    let model = AppModel::new();
    assert_eq!(model.session().visible_screen(), Screen::Login);
    assert!(!model.brief().is_loading());
    assert_eq!(model.status(), "Not logged in");
}

#[test]
fn login_moves_to_menu_with_role() {
    let admin = logged_in_model(ADMIN_EMAIL);
    assert_eq!(admin.session().visible_screen(), Screen::Menu);
    assert!(admin.session().is_admin());
    assert_eq!(admin.status(), "Signed in as Admin");

    let user = logged_in_model("x@y.com");
    assert!(!user.session().is_admin());
    assert_eq!(user.status(), "Signed in as User");
}

#[test]
fn opening_brief_while_logged_out_is_refused() {
    let mut model = AppModel::new();
    assert!(model.apply_action(UiAction::OpenBrief, today()).is_none());
    assert_eq!(model.session().active_screen(), Screen::Login);
    assert!(!model.brief().is_loading());
    assert!(model.status().starts_with("Navigation error"));
}

#[test]
fn opening_brief_marks_loading_until_result_arrives() {
    let mut model = logged_in_model("x@y.com");
    let request_id = open_brief(&mut model);

    assert_eq!(model.session().visible_screen(), Screen::Brief);
    assert!(model.brief().is_loading());
    assert_eq!(model.brief().date(), Some(today()));
    assert!(model.brief().items().is_empty());

    model.apply_event(UiEvent::BriefLoaded {
        request_id,
        items: items(&["one", "two"]),
    });

    assert!(!model.brief().is_loading());
    assert_eq!(model.brief().items(), items(&["one", "two"]).as_slice());
}

#[test]
fn fallback_result_is_shown_like_any_other() {
    let mut model = logged_in_model("x@y.com");
    let request_id = open_brief(&mut model);

    model.apply_event(UiEvent::BriefLoaded {
        request_id,
        items: fallback_brief(),
    });

    assert_eq!(model.brief().items(), fallback_brief().as_slice());
}

#[test]
fn late_result_after_leaving_is_ignored() {
    let mut model = logged_in_model("x@y.com");
    let request_id = open_brief(&mut model);
    assert!(model.apply_action(UiAction::BackToMenu, today()).is_none());

    model.apply_event(UiEvent::BriefLoaded {
        request_id,
        items: items(&["late"]),
    });

    assert_eq!(model.session().visible_screen(), Screen::Menu);
    assert!(model.brief().items().is_empty());
    assert!(!model.brief().is_loading());
}

#[test]
fn reentering_discards_old_items_and_issues_new_request() {
    let mut model = logged_in_model("x@y.com");
    let first = open_brief(&mut model);
    model.apply_event(UiEvent::BriefLoaded {
        request_id: first,
        items: items(&["first visit"]),
    });
    model.apply_action(UiAction::BackToMenu, today());

    let second = open_brief(&mut model);
    assert_ne!(first, second);
    assert!(model.brief().items().is_empty());
    assert!(model.brief().is_loading());

    model.apply_event(UiEvent::BriefLoaded {
        request_id: first,
        items: items(&["stale"]),
    });
    assert!(model.brief().is_loading());

    model.apply_event(UiEvent::BriefLoaded {
        request_id: second,
        items: items(&["second visit"]),
    });
    assert_eq!(model.brief().items(), items(&["second visit"]).as_slice());
}

#[test]
fn result_after_logout_is_ignored() {
    let mut model = logged_in_model(ADMIN_EMAIL);
    let request_id = open_brief(&mut model);
    model.apply_action(UiAction::Logout, today());

    model.apply_event(UiEvent::BriefLoaded {
        request_id,
        items: items(&["late"]),
    });

    assert_eq!(model.session().visible_screen(), Screen::Login);
    assert!(!model.session().is_logged_in());
    assert!(model.session().user().is_none());
    assert_eq!(model.brief(), &BriefView::default());
    assert_eq!(model.status(), "Signed out");
}

#[test]
fn info_and_error_events_update_status() {
    let mut model = AppModel::new();
    model.apply_event(UiEvent::Info("Backend worker ready".to_string()));
    assert_eq!(model.status(), "Backend worker ready");

    model.apply_event(UiEvent::Error(UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: boom",
    )));
    assert_eq!(
        model.status(),
        "Runtime error: backend worker startup failure: boom"
    );
}
