//! Public API tests for the gate policy.

use browsegate::config::{GateConfig, Overrides, DEFAULT_REQUIRED_FEATURES};
use browsegate::features::{CapabilityReport, MockCapabilities};
use browsegate::gate::{is_old_browser, run, should_warn, FeatureGate, RunOutcome};
use browsegate::notify::{warning_banner, BannerNotifier, DomTree, HtmlDocument, Node};

fn all_supported() -> CapabilityReport {
    DEFAULT_REQUIRED_FEATURES
        .iter()
        .map(|f| (f.to_string(), true))
        .collect()
}

#[test]
fn required_features_never_duplicate() {
    let mut config = GateConfig::default();
    config.add_required_feature("history");
    config.add_required_feature("webgl");
    config.add_required_feature("webgl");

    let webgl = config
        .required_features()
        .iter()
        .filter(|f| *f == "webgl")
        .count();
    assert_eq!(webgl, 1);
    assert_eq!(config.required_features().len(), 6);
}

#[test]
fn add_then_remove_restores_list() {
    let mut config = GateConfig::default();
    let before = config.required_features().to_vec();

    config.add_required_feature("webgl");
    config.remove_required_feature("webgl");

    assert_eq!(config.required_features(), before.as_slice());
}

#[test]
fn overrides_apply_in_order() {
    let overrides = Overrides::new()
        .with_debug(true)
        .with_feature("csstransforms3d", false)
        .with_feature("webgl", true)
        .with_force_warning(true);

    let config = GateConfig::from_overrides(&overrides);

    assert!(config.debug());
    assert!(config.force_warning());
    assert_eq!(
        config.required_features(),
        ["csstransitions", "flexbox", "flexwrap", "history", "webgl"]
    );
}

#[test]
fn added_features_are_checked_in_file_order() {
    let overrides: Overrides =
        serde_yaml::from_str("features:\n  webgl: true\n  svg: true\n").unwrap();
    let config = GateConfig::from_overrides(&overrides);
    let report = all_supported().with("webgl", false).with("svg", false);

    let assessment = FeatureGate::new(&config).assess(&report);
    assert_eq!(assessment.failed_feature(), Some("webgl"));
    assert_eq!(assessment.not_evaluated, ["svg"]);
}

#[test]
fn all_supported_is_not_old() {
    let config = GateConfig::default();
    assert!(!is_old_browser(&config, &all_supported()));
    assert!(!should_warn(&config, &all_supported()));
}

#[test]
fn evaluation_stops_at_first_failure() {
    let caps = MockCapabilities::new()
        .supported("csstransforms3d")
        .unsupported("csstransitions")
        .poison("flexbox")
        .poison("flexboxtweener")
        .poison("flexwrap")
        .poison("history");
    let config = GateConfig::default();

    assert!(is_old_browser(&config, &caps));
    assert!(!caps.was_queried("flexwrap"));
}

#[test]
fn absent_features_never_make_a_browser_old() {
    let config = GateConfig::default();
    let empty = CapabilityReport::new();
    assert!(!is_old_browser(&config, &empty));

    let partial = CapabilityReport::new()
        .with("csstransforms3d", true)
        .with("history", true);
    assert!(!is_old_browser(&config, &partial));
}

#[test]
fn flexbox_alternatives() {
    let config = GateConfig::default().with_required_features(["flexbox"]);
    let gate = FeatureGate::new(&config);

    let tweener = CapabilityReport::new()
        .with("flexbox", false)
        .with("flexboxtweener", true);
    assert!(!gate.is_old_browser(&tweener));

    let neither = CapabilityReport::new()
        .with("flexbox", false)
        .with("flexboxtweener", false);
    assert!(gate.is_old_browser(&neither));

    // An untested alternative does not count.
    let untested = CapabilityReport::new().with("flexbox", false);
    assert!(gate.is_old_browser(&untested));
}

#[test]
fn force_warning_with_empty_report() {
    let config = GateConfig::default().with_force_warning(true);
    let empty = CapabilityReport::new();

    assert!(!is_old_browser(&config, &empty));
    assert!(should_warn(&config, &empty));
}

#[test]
fn missing_detector_leaves_document_alone() {
    let overrides = Overrides::new().with_force_warning(true);
    let mut doc = DomTree::new();

    let outcome = run(Some(&overrides), None, &mut BannerNotifier::new(), &mut doc).unwrap();

    assert_eq!(outcome, RunOutcome::DetectorUnavailable);
    assert!(doc.body().children.is_empty());
}

#[test]
fn dropped_history_with_tweener_is_not_old() {
    let overrides = Overrides::new().with_feature("history", false);
    let report = CapabilityReport::new()
        .with("csstransitions", true)
        .with("flexwrap", true)
        .with("flexbox", false)
        .with("flexboxtweener", true)
        .with("history", false);
    let mut doc = DomTree::new();

    let outcome = run(
        Some(&overrides),
        Some(&report),
        &mut BannerNotifier::new(),
        &mut doc,
    )
    .unwrap();

    assert!(!outcome.warned());
    let verdict = outcome.verdict().unwrap();
    assert_eq!(
        verdict.assessment.untested().collect::<Vec<_>>(),
        ["csstransforms3d"]
    );
    assert!(doc.body().children.is_empty());
}

#[test]
fn warning_goes_before_existing_content() {
    let mut doc = DomTree::with_body_children(vec![Node::text("page")]);
    let report = CapabilityReport::new().with("history", false);

    run(None, Some(&report), &mut BannerNotifier::new(), &mut doc).unwrap();

    assert_eq!(doc.body().children.len(), 2);
    assert_eq!(doc.body().children[0], warning_banner());
    assert_eq!(doc.body().children[1], Node::text("page"));
}

#[test]
fn banner_markup() {
    insta::assert_snapshot!(
        warning_banner().to_html(),
        @r#"<div class="browsehappy"><p>It looks like you are using an old browser! To access this site as intended, please view on a smartphone or <a href="http://browsehappy.com/" target="_blank">modern desktop browser</a>.</p></div>"#
    );
}

#[test]
fn html_document_gets_banner_as_first_body_child() {
    let mut doc = HtmlDocument::new(
        "<html><head><!-- <body> goes below --></head>\n<BODY id=\"top\"><p>x</p></BODY></html>",
    );
    let report = CapabilityReport::new().with("flexwrap", false);

    run(None, Some(&report), &mut BannerNotifier::new(), &mut doc).unwrap();

    let html = doc.into_string();
    assert!(html.contains("<!-- <body> goes below -->"));
    assert!(html.contains(&format!(
        "<body id=\"top\">{}<p>x</p>",
        warning_banner().to_html()
    )));
}

#[test]
fn html_page_without_body_tag_still_gets_banner() {
    let mut doc = HtmlDocument::new("<!doctype html><title>Shop</title><h1>Shop</h1>");
    let report = CapabilityReport::new().with("history", false);

    run(None, Some(&report), &mut BannerNotifier::new(), &mut doc).unwrap();

    assert!(doc.as_str().contains(&format!(
        "<body>{}<h1>Shop</h1></body>",
        warning_banner().to_html()
    )));
}
