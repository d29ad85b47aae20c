use admin_notices_core::{
    AdminNotice, FixedAdminContext, NoticeShouldRender, ScreenCondition, ScreenDescriptor,
    UserCapability,
};
use serde_json::json;
use time::macros::datetime;
use time::OffsetDateTime;

const NOW: OffsetDateTime = datetime!(2024-06-15 12:00 UTC);
const DASHBOARD_URL: &str = "http://example.com/wp-admin/dashboard.php";

fn simple_notice() -> AdminNotice {
    let mut notice = AdminNotice::new("test_id", "foo").expect("notice");
    notice.without_auto_paragraph();
    notice
}

fn context() -> FixedAdminContext {
    FixedAdminContext::new().at(NOW)
}

fn evaluate(notice: &AdminNotice, ctx: &FixedAdminContext) -> bool {
    NoticeShouldRender::new("namespace")
        .evaluate(notice, ctx)
        .expect("evaluation should not hit context errors")
}

#[test]
fn unrestricted_notice_always_passes() {
    assert!(evaluate(&simple_notice(), &context()));
}

#[test]
fn date_limits() {
    let cases: Vec<(&str, Box<dyn Fn(&mut AdminNotice)>, bool)> = vec![
        (
            "valid after date",
            Box::new(|n: &mut AdminNotice| {
                n.after("2024-06-14").expect("date");
            }),
            true,
        ),
        (
            "valid until date",
            Box::new(|n: &mut AdminNotice| {
                n.until("2024-06-16").expect("date");
            }),
            true,
        ),
        (
            "valid between",
            Box::new(|n: &mut AdminNotice| {
                n.between("2024-06-14", "2024-06-16").expect("dates");
            }),
            true,
        ),
        (
            "after equal to now",
            Box::new(|n: &mut AdminNotice| {
                n.after(NOW).expect("date");
            }),
            true,
        ),
        (
            "until equal to now",
            Box::new(|n: &mut AdminNotice| {
                n.until(NOW.unix_timestamp()).expect("date");
            }),
            true,
        ),
        (
            "invalid after date",
            Box::new(|n: &mut AdminNotice| {
                n.after("2024-06-16").expect("date");
            }),
            false,
        ),
        (
            "invalid until date",
            Box::new(|n: &mut AdminNotice| {
                n.until("2024-06-14").expect("date");
            }),
            false,
        ),
        (
            "reversed between",
            Box::new(|n: &mut AdminNotice| {
                n.between("2024-06-16", "2024-06-14").expect("dates");
            }),
            false,
        ),
    ];

    for (name, configure, expected) in cases {
        let mut notice = simple_notice();
        configure(&mut notice);
        assert_eq!(evaluate(&notice, &context()), expected, "case: {name}");
    }
}

#[test]
fn date_window_compares_in_utc() {
    let mut notice = simple_notice();
    notice
        .after("2024-06-15T13:00:00+02:00")
        .expect("offset date");

    // 13:00+02:00 is 11:00 UTC, before NOW.
    let ctx = FixedAdminContext::new().at(datetime!(2024-06-15 14:00 +02:00));
    assert!(evaluate(&notice, &ctx));
}

#[test]
fn when_callback() {
    let mut passing = simple_notice();
    passing.when(|| true);
    assert!(evaluate(&passing, &context()));

    let mut failing = simple_notice();
    failing.when(|| false);
    assert!(!evaluate(&failing, &context()));
}

#[test]
fn user_capabilities_are_a_union() {
    let ctx = context().grant("edit_posts");
    let cap = |name: &str| UserCapability::new(name).expect("capability");

    let mut granted = simple_notice();
    granted.if_user_can([cap("edit_posts")]);
    assert!(evaluate(&granted, &ctx));

    let mut denied = simple_notice();
    denied.if_user_can([cap("manage_options")]);
    assert!(!evaluate(&denied, &ctx));

    let mut one_of_many = simple_notice();
    one_of_many.if_user_can([cap("manage_options"), cap("edit_posts"), cap("delete_users")]);
    assert!(evaluate(&one_of_many, &ctx));
}

#[test]
fn capability_arguments_are_forwarded() {
    let ctx = context().grant_with_args("edit_post", vec![json!(12)]);

    let mut notice = simple_notice();
    notice.if_user_can([
        UserCapability::with_args("edit_post", vec![json!(12)]).expect("capability")
    ]);
    assert!(evaluate(&notice, &ctx));
}

#[test]
fn regex_screen_condition_honors_flags() {
    let ctx = context().admin_url(DASHBOARD_URL);

    let mut notice = simple_notice();
    notice.on(ScreenCondition::new("~Dashboard~i").expect("regex"));
    assert!(evaluate(&notice, &ctx));

    let mut case_sensitive = simple_notice();
    case_sensitive.on(ScreenCondition::new("~Dashboard~").expect("regex"));
    assert!(!evaluate(&case_sensitive, &ctx));
}

#[test]
fn string_screen_condition_matches_substring() {
    let ctx = context().admin_url(DASHBOARD_URL);

    let mut notice = simple_notice();
    notice.on(ScreenCondition::new("dashboard").expect("condition"));
    assert!(evaluate(&notice, &ctx));

    let mut other = simple_notice();
    other.on(ScreenCondition::new("edit.php").expect("condition"));
    assert!(!evaluate(&other, &ctx));
}

#[test]
fn screen_map_condition_matches_descriptor() {
    let condition =
        || ScreenCondition::screen([("base", json!("dashboard"))]).expect("condition");

    let mut notice = simple_notice();
    notice.on(condition());

    let on_dashboard = context().screen(ScreenDescriptor::new().with("base", "dashboard"));
    assert!(evaluate(&notice, &on_dashboard));

    let elsewhere = context().screen(ScreenDescriptor::new().with("base", "other"));
    assert!(!evaluate(&notice, &elsewhere));
}

#[test]
fn screen_map_requires_every_pair() {
    let mut notice = simple_notice();
    notice.on(
        ScreenCondition::screen([("base", json!("edit")), ("post_type", json!("page"))])
            .expect("condition"),
    );

    let posts = context().screen(
        ScreenDescriptor::new()
            .with("base", "edit")
            .with("post_type", "post"),
    );
    assert!(!evaluate(&notice, &posts));

    let pages = context().screen(
        ScreenDescriptor::new()
            .with("base", "edit")
            .with("post_type", "page"),
    );
    assert!(evaluate(&notice, &pages));
}

#[test]
fn any_screen_condition_admits() {
    let ctx = context()
        .admin_url(DASHBOARD_URL)
        .screen(ScreenDescriptor::new().with("base", "dashboard"));

    let mut notice = simple_notice();
    notice.on_any([
        ScreenCondition::new("plugins.php").expect("condition"),
        ScreenCondition::screen([("base", json!("dashboard"))]).expect("condition"),
    ]);
    assert!(evaluate(&notice, &ctx));
}

#[test]
fn groups_are_conjunctive() {
    let ctx = context().admin_url(DASHBOARD_URL).grant("edit_posts");

    let mut notice = simple_notice();
    notice
        .on(ScreenCondition::new("dashboard").expect("condition"))
        .if_user_can([UserCapability::new("manage_options").expect("capability")]);
    assert!(!evaluate(&notice, &ctx));
}

#[test]
fn dismissed_notice_is_suppressed_only_when_dismissible() {
    let ctx = context().dismissed("namespace", "test_id", 1_718_000_000);

    let dismissible = simple_notice();
    assert!(!evaluate(&dismissible, &ctx));

    let mut sticky = simple_notice();
    sticky.not_dismissible();
    assert!(evaluate(&sticky, &ctx));

    let other_namespace = NoticeShouldRender::new("other")
        .evaluate(&dismissible, &ctx)
        .expect("evaluate");
    assert!(other_namespace);
}
