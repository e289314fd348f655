//! Registry semantics and exposition format tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use kongwatch_core::metrics::Registry;
use kongwatch_core::KongwatchError;

#[test]
fn counter_cells_created_lazily() {
    let reg = Registry::new();
    let c = reg.register_counter("hits_total", "hits", &["route"]).unwrap();

    // Family is declared but carries no samples yet.
    let out = reg.render();
    assert!(out.contains("# TYPE hits_total counter"));
    assert!(!out.contains("hits_total{"));

    c.inc(&["/a"]);
    c.inc(&["/a"]);
    c.inc(&["/b"]);
    let out = reg.render();
    assert!(out.contains("hits_total{route=\"/a\"} 2"));
    assert!(out.contains("hits_total{route=\"/b\"} 1"));
    assert!(!out.contains("route=\"/c\""));
}

#[test]
fn summary_reports_quantiles_sum_and_count() {
    let reg = Registry::new();
    let s = reg.register_summary("latency_ms", "latency", &["svc"]).unwrap();
    for v in [10, 20, 30, 40] {
        s.observe(&["api"], v);
    }

    let out = reg.render();
    assert!(out.contains("# TYPE latency_ms summary"));
    assert!(out.contains("latency_ms{svc=\"api\",quantile=\"0.5\"}"));
    assert!(out.contains("latency_ms{svc=\"api\",quantile=\"0.9\"}"));
    assert!(out.contains("latency_ms{svc=\"api\",quantile=\"0.99\"}"));
    assert!(out.contains("latency_ms_sum{svc=\"api\"} 100"));
    assert!(out.contains("latency_ms_count{svc=\"api\"} 4"));
}

#[test]
fn summary_sum_stays_exact_for_zero_observations() {
    let reg = Registry::new();
    let s = reg.register_summary("latency_ms", "latency", &["svc"]).unwrap();
    s.observe(&["api"], 0);
    s.observe(&["api"], 0);
    assert_eq!(s.get(&["api"]), Some((2, 0)));
}

#[test]
fn reregistration_same_shape_returns_existing_family() {
    let reg = Registry::new();
    let a = reg.register_counter("hits_total", "hits", &["route"]).unwrap();
    let b = reg.register_counter("hits_total", "hits", &["route"]).unwrap();
    a.inc(&["/x"]);
    b.inc(&["/x"]);
    assert_eq!(a.get(&["/x"]), Some(2));
}

#[test]
fn reregistration_different_labels_is_a_conflict() {
    let reg = Registry::new();
    reg.register_counter("hits_total", "hits", &["route"]).unwrap();

    let err = reg
        .register_counter("hits_total", "hits", &["route", "status"])
        .unwrap_err();
    assert!(matches!(err, KongwatchError::MetricConflict(_)));
}

#[test]
fn reregistration_different_kind_is_a_conflict() {
    let reg = Registry::new();
    reg.register_counter("hits_total", "hits", &["route"]).unwrap();

    let err = reg.register_summary("hits_total", "hits", &["route"]).unwrap_err();
    assert!(matches!(err, KongwatchError::MetricConflict(_)));
}

#[test]
fn families_render_in_registration_order() {
    let reg = Registry::new();
    reg.register_summary("b_ms", "b", &["x"]).unwrap();
    reg.register_counter("a_total", "a", &["x"]).unwrap();

    let out = reg.render();
    let b_at = out.find("# TYPE b_ms summary").unwrap();
    let a_at = out.find("# TYPE a_total counter").unwrap();
    assert!(b_at < a_at);
}

#[test]
fn label_values_are_escaped() {
    let reg = Registry::new();
    let c = reg.register_counter("odd_total", "odd", &["v"]).unwrap();
    c.inc(&["a\"b\\c\nd"]);

    let out = reg.render();
    assert!(out.contains("odd_total{v=\"a\\\"b\\\\c\\nd\"} 1"));
}
