use std::rc::Rc;

use common::{
    FilterDefaults, FilterField, FilterKind, FilterValue, History, MemoryHistory, UpdateOptions, UpdatePayload,
    UrlFilterConfig, UrlFilters,
};

fn list_config() -> UrlFilterConfig {
    UrlFilterConfig::new(
        FilterDefaults::new(vec![
            FilterField::text("search", ""),
            FilterField::number("page", 1),
            FilterField::number("size", 10),
        ])
        .expect("valid defaults"),
    )
}

fn at(config: UrlFilterConfig, start: &str) -> UrlFilters<Rc<MemoryHistory>> {
    UrlFilters::new(config, Rc::new(MemoryHistory::new("https://yayasan.example", start)))
}

#[test]
fn search_then_revert_leaves_a_bare_url() {
    let filters = at(list_config(), "/schools");

    assert!(filters.update_url(
        UpdatePayload::new().with("search", "foo").with("page", 2),
        UpdateOptions::default(),
    ));
    assert_eq!(filters.history().current(), "/schools?search=foo&page=2");

    assert!(filters.update_url(
        UpdatePayload::new().with("search", "").with("page", 1),
        UpdateOptions::default(),
    ));
    assert_eq!(filters.history().current(), "/schools");
    assert_eq!(filters.history().location().search(), "");
}

#[test]
fn default_page_is_omitted() {
    let filters = at(list_config(), "/schools?page=4");
    filters.update_url(UpdatePayload::new().with("page", 1), UpdateOptions::default());
    assert_eq!(filters.history().location().query.get("page"), None);
}

#[test]
fn malformed_size_falls_back_to_default() {
    let filters = at(list_config(), "/schools?size=abc");
    assert_eq!(filters.current_filters().number("size"), Some(10));
    assert!(!filters.has_active_filters());
}

#[test]
fn flag_decoding_requires_literal_true() {
    let config = UrlFilterConfig::new(
        FilterDefaults::new(vec![FilterField::flag("active", false)]).expect("valid defaults"),
    );
    assert_eq!(at(config.clone(), "/users?active=true").current_filters().flag("active"), Some(true));
    assert_eq!(at(config, "/users?active=yes").current_filters().flag("active"), Some(false));
}

#[test]
fn reset_is_idempotent_and_clears_active_filters() {
    let filters = at(list_config(), "/schools?search=smk&page=3&tab=x");
    assert!(filters.has_active_filters());

    assert!(filters.reset_filters());
    let once = filters.history().current();
    assert!(!filters.has_active_filters());

    assert!(!filters.reset_filters());
    assert_eq!(filters.history().current(), once);
    assert_eq!(once, "/schools");

    filters.update_url(UpdatePayload::new().with("size", 50), UpdateOptions::default());
    assert!(filters.has_active_filters());
}

#[test]
fn reset_without_clean_defaults_writes_defaults() {
    let filters = at(list_config().with_clean_defaults(false), "/schools?search=smk&tab=x");
    filters.reset_filters();
    assert_eq!(filters.history().current(), "/schools?search=&page=1&size=10");
    assert!(!filters.has_active_filters());

    filters.history().run_timers();
    filters.reset_filters();
    assert_eq!(filters.history().current(), "/schools?search=&page=1&size=10");
}

#[test]
fn initial_filters_seed_an_empty_url_only() {
    let mut fields = list_config().defaults.fields().to_vec();
    fields.push(FilterField::optional("status", FilterKind::Text));
    let config = UrlFilterConfig::new(FilterDefaults::new(fields).expect("valid defaults"));
    let initial = UpdatePayload::new().with("status", "active");

    let fresh = at(config.clone(), "/schools");
    let seeded = fresh.build_initial_url(&initial);
    assert_eq!(fresh.history().current(), "/schools?status=active");
    assert_eq!(seeded.text("status"), Some("active"));
    assert_eq!(seeded.number("page"), Some(1));
    assert_eq!(seeded, fresh.current_filters());

    let again = fresh.build_initial_url(&UpdatePayload::new().with("status", "inactive"));
    assert_eq!(fresh.history().current(), "/schools?status=active");
    assert_eq!(again.text("status"), Some("active"));
    assert_eq!(fresh.history().navigations().len(), 1);

    let shared = at(config, "/schools?page=5");
    let kept = shared.build_initial_url(&initial);
    assert_eq!(shared.history().current(), "/schools?page=5");
    assert_eq!(kept.get("status"), Some(&FilterValue::Unset));
    assert!(shared.history().navigations().is_empty());
}

#[test]
fn updates_keep_unrelated_keys() {
    let filters = at(list_config(), "/articles?tab=drafts&page=2");
    filters.update_url(UpdatePayload::new().with("search", "rpp"), UpdateOptions::default());
    assert_eq!(filters.history().current(), "/articles?tab=drafts&page=2&search=rpp");

    filters.update_url(
        UpdatePayload::new().with("search", "rpp"),
        UpdateOptions { replace: true, preserve_others: false },
    );
    assert_eq!(filters.history().current(), "/articles?search=rpp");
}

#[test]
fn back_navigation_restores_previous_filters() {
    let filters = at(list_config(), "/schools");
    filters.update_url(UpdatePayload::new().with("page", 2), UpdateOptions::push());
    filters.update_url(UpdatePayload::new().with("page", 3), UpdateOptions::push());
    assert_eq!(filters.current_filters().number("page"), Some(3));

    assert!(filters.history().back());
    assert_eq!(filters.current_filters().number("page"), Some(2));
}

#[test]
fn unset_values_remove_keys() {
    let filters = at(list_config(), "/schools?search=x&organization_id=4");
    filters.update_url(
        UpdatePayload::new().with("organization_id", FilterValue::Unset),
        UpdateOptions::default(),
    );
    assert_eq!(filters.history().current(), "/schools?search=x");
}

#[test]
fn shareable_url_is_absolute() {
    let filters = at(list_config(), "/schools");
    filters.update_url(UpdatePayload::new().with("search", "smk negeri"), UpdateOptions::default());
    assert_eq!(filters.shareable_url(), "https://yayasan.example/schools?search=smk+negeri");
    assert_eq!(filters.current_filters().text("search"), Some("smk negeri"));
}

#[test]
fn seeded_state_matches_the_decoded_url() {
    let filters = at(list_config(), "/schools");
    let seeded = filters.build_initial_url(
        &UpdatePayload::new()
            .with("page", "2")
            .with("size", FilterValue::Unset)
            .with("search", "x"),
    );
    assert_eq!(filters.history().current(), "/schools?page=2&search=x");
    assert_eq!(seeded, filters.current_filters());
    assert_eq!(seeded.number("page"), Some(2));
    assert_eq!(seeded.number("size"), Some(10));
}

#[test]
fn empty_initial_filters_leave_a_bare_url_alone() {
    let filters = at(list_config(), "/schools");
    let state = filters.build_initial_url(&UpdatePayload::new());
    assert_eq!(state, list_config().defaults.default_state());
    assert_eq!(filters.history().current(), "/schools");
    assert!(filters.history().navigations().is_empty());
}

#[test]
fn initial_filters_equal_to_defaults_do_not_navigate() {
    let filters = at(list_config(), "/schools");
    let state = filters.build_initial_url(&UpdatePayload::new().with("page", 1).with("search", ""));
    assert_eq!(state, list_config().defaults.default_state());
    assert_eq!(filters.history().current(), "/schools");
    assert!(filters.history().navigations().is_empty());
    assert_eq!(filters.history().pending_timers(), 0);
}
