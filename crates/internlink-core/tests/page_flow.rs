use std::cell::{Cell, RefCell};
use std::rc::Rc;

use internlink_core::filter::{FilterForm, on_search_input, submit_filter};
use internlink_core::notice::{
  Severity,
  status_update_notice
};
use internlink_core::table::{
  SortDirection,
  sort_rows
};
use internlink_core::submit::{PROCESSING_HTML, SubmitButton, lock_submit};
use internlink_core::testing::ManualScheduler;
use internlink_core::upload::FileSizeLimit;
use internlink_core::widgets::{WidgetToolkit, close_alerts_after};
use internlink_core::wire::decode_status_response;
use internlink_core::{
  Debouncer,
  Notice,
  BehaviorConfig,
  DraftKey,
  DraftStore,
  Drafts,
  FormDraft,
  MemoryStore,
  StatusChange
};

#[test]
fn draft_survives_reload_and_clears_on_submit() {
    let store = MemoryStore::new();
    let key = DraftKey::create_form();

    // First page: user types into the form.
    let drafts = Drafts::new(store.clone());
    let typed = FormDraft::from_fields([("a", "1"), ("b", "2")]);
    drafts.save(&key, &typed);

    // Reload: a fresh controller over the same storage.
    let reloaded = Drafts::new(store.clone());
    let restored = reloaded.load(&key).expect("draft restored");
    assert_eq!(restored.restorable_value("a"), Some("1"));
    assert_eq!(restored.restorable_value("b"), Some("2"));
    assert_eq!(restored, typed);

    reloaded.discard(&key);
    assert!(!store.contains(key.as_str()));
    assert!(reloaded.load(&key).is_none());
}

#[test]
fn edit_drafts_do_not_collide() {
    let store = MemoryStore::new();
    let drafts = Drafts::new(store.clone());
    let first = DraftKey::edit_form("1").expect("id");
    let second = DraftKey::edit_form("2").expect("id");

    drafts.save(&first, &FormDraft::from_fields([("title", "one")]));
    drafts.save(&second, &FormDraft::from_fields([("title", "two")]));
    drafts.discard(&first);

    assert!(drafts.load(&first).is_none());
    assert_eq!(
        drafts
            .load(&second)
            .expect("second draft kept")
            .get("title"),
        Some("two")
    );
}

#[test]
fn corrupt_draft_behaves_as_missing() {
    let store = MemoryStore::new();
    store
        .set("internship-form-draft", "[1, 2")
        .expect("memory set");

    let drafts = Drafts::new(store);
    assert!(drafts.load(&DraftKey::create_form()).is_none());
}

#[test]
fn status_change_round_trip_to_toast() {
    let change = StatusChange::new("42", "approved").expect("change");
    assert_eq!(change.endpoint(), "/applications/42/update_status");
    assert!(
        change
            .form_body()
            .contains("status=approved&send_notification=on")
    );

    let ok = decode_status_response(r#"{"success":true}"#);
    assert_eq!(status_update_notice(&ok).severity, Severity::Success);

    let rejected = decode_status_response(r#"{"success":false}"#);
    assert_eq!(status_update_notice(&rejected).severity, Severity::Danger);
}

#[test]
fn upload_ceiling_comes_from_config() {
    let config = BehaviorConfig::from_toml_str("max_upload_mb = 16.0").expect("config");
    let limit = FileSizeLimit::new(config.max_upload_mb);
    let mb = 1024.0 * 1024.0;

    assert!(limit.check(17.0 * mb).is_err());
    assert!(limit.check(15.0 * mb).is_ok());
}

#[test]
fn table_rows_sort_by_column_text() {
    let mut rows = vec![
        vec!["Zed".to_string(), " b ".to_string()],
        vec!["Amy".to_string(), "a".to_string()],
        vec!["Kim".to_string(), "c".to_string()],
    ];

    sort_rows(&mut rows, SortDirection::parse("asc"), |row| row[1].clone());
    let names: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zed", "Kim"]);

    sort_rows(&mut rows, SortDirection::parse("desc"), |row| row[1].clone());
    let names: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, vec!["Kim", "Zed", "Amy"]);
}

#[derive(Default)]
struct FilterPage {
    auto_filter: Option<String>,
    indicators: Cell<u32>,
    submits: Cell<u32>,
}

#[derive(Clone, Default)]
struct SearchForm(Rc<FilterPage>);

impl FilterForm for SearchForm {
    fn auto_filter_attr(&self) -> Option<String> {
        self.0.auto_filter.clone()
    }

    fn has_loading_indicator(&self) -> bool {
        self.0.indicators.get() > 0
    }

    fn show_loading_indicator(&self) {
        self.0.indicators.set(self.0.indicators.get() + 1);
    }

    fn submit(&self) {
        self.0.submits.set(self.0.submits.get() + 1);
    }
}

#[test]
fn search_typing_submits_once_after_configured_pause() {
    let config = BehaviorConfig::default();
    let clock = ManualScheduler::new();
    let debouncer = Debouncer::new(clock.clone(), config.debounce());
    let form = SearchForm(Rc::new(FilterPage {
        auto_filter: Some("true".to_string()),
        ..FilterPage::default()
    }));

    for _ in "intern".chars() {
        on_search_input(&debouncer, form.clone());
        clock.advance(config.debounce() / 3);
    }
    assert_eq!(form.0.submits.get(), 0);

    clock.advance(config.debounce());
    assert_eq!(form.0.submits.get(), 1);
    assert_eq!(form.0.indicators.get(), 1);
}

#[test]
fn search_without_opt_in_never_submits() {
    let clock = ManualScheduler::new();
    let debouncer = Debouncer::new(clock.clone(), BehaviorConfig::default().debounce());
    let form = SearchForm::default();

    on_search_input(&debouncer, form.clone());
    clock.advance(std::time::Duration::from_secs(10));

    assert_eq!(form.0.submits.get(), 0);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn select_changes_submit_without_waiting() {
    let clock = ManualScheduler::new();
    let form = SearchForm::default();

    submit_filter(&form);
    submit_filter(&form);

    assert_eq!(form.0.submits.get(), 2);
    assert_eq!(form.0.indicators.get(), 1);
    assert_eq!(clock.pending(), 0);
}

#[derive(Clone)]
struct Button(Rc<RefCell<(String, bool)>>);

impl SubmitButton for Button {
    fn label_html(&self) -> String {
        self.0.borrow().0.clone()
    }

    fn set_label_html(&self, html: &str) {
        self.0.borrow_mut().0 = html.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().1 = disabled;
    }
}

#[test]
fn submit_lock_releases_after_configured_hold() {
    let config = BehaviorConfig::from_toml_str("submit_lock_ms = 1500").expect("valid config");
    let clock = ManualScheduler::new();
    let button = Button(Rc::new(RefCell::new(("Create".to_string(), false))));

    let _lock = lock_submit(&clock, button.clone(), config.submit_lock());
    assert_eq!(*button.0.borrow(), (PROCESSING_HTML.to_string(), true));

    clock.advance(config.submit_lock() / 2);
    assert!(button.0.borrow().1);

    clock.advance(config.submit_lock() / 2);
    assert_eq!(*button.0.borrow(), ("Create".to_string(), false));
}

#[derive(Default)]
struct Banners {
    closed: RefCell<Vec<String>>,
}

impl WidgetToolkit for Banners {
    type Element = String;

    fn tooltip(&self, _: &String) {}

    fn popover(&self, _: &String) {}

    fn close_alert(&self, element: &String) {
        self.closed.borrow_mut().push(element.clone());
    }

    fn toggle_collapse(&self, _: &String) {}

    fn is_shown(&self, _: &String) -> bool {
        true
    }
}

#[test]
fn notification_closes_after_alert_lifetime() {
    let config = BehaviorConfig::default();
    let clock = ManualScheduler::new();
    let toolkit = Rc::new(Banners::default());
    let notice = Notice::success("Saved");

    let _dismiss = close_alerts_after(&clock, toolkit.clone(), config.alert_dismiss(), {
        let banner = notice.message.clone();
        move || vec![banner]
    });

    clock.advance(config.alert_dismiss() - std::time::Duration::from_millis(1));
    assert!(toolkit.closed.borrow().is_empty());

    clock.advance(std::time::Duration::from_millis(1));
    assert_eq!(*toolkit.closed.borrow(), vec!["Saved".to_string()]);
}
