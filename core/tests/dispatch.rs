mod common;

use std::sync::Arc;

use common::{canned_output, MockEngine};
use parzu_core::api::{
    DispatchError, Dispatcher, EngineError, EngineErrorKind, InputFormat, OutputFormat,
    ParseOutput, ParseRequest, CONTENT_TYPE_SVG, CONTENT_TYPE_TEXT, VALID_FORMATS,
};
use pretty_assertions::assert_eq;

const BERLINER: &str = "Ich bin ein Berliner.";

fn dispatcher(engine: Arc<MockEngine>) -> Dispatcher {
    Dispatcher::new(engine)
}

#[tokio::test]
async fn conll_joins_engine_lines() {
    let engine = Arc::new(MockEngine::canned());
    let d = dispatcher(engine.clone());

    let req = ParseRequest::resolve(Some(BERLINER.into()), Some("conll".into())).unwrap();
    let rendered = d.dispatch(&req).await.unwrap();

    let ParseOutput::Lines(lines) = canned_output(BERLINER, OutputFormat::Conll) else {
        panic!("expected lines");
    };
    assert_eq!(rendered.body, lines.join("\n"));
    assert_eq!(rendered.content_type, CONTENT_TYPE_TEXT);
    assert_eq!(engine.call_count(), 1);

    let last = engine.last_call.lock().unwrap().clone().unwrap();
    assert_eq!(last, (BERLINER.to_string(), InputFormat::Plain, OutputFormat::Conll));
}

#[tokio::test]
async fn graphical_returns_first_document_as_svg() {
    let engine = Arc::new(MockEngine::canned());
    let d = dispatcher(engine.clone());

    let req = ParseRequest::resolve(Some(BERLINER.into()), Some("graphical".into())).unwrap();
    let rendered = d.dispatch(&req).await.unwrap();

    assert_eq!(rendered.content_type, CONTENT_TYPE_SVG);
    assert_eq!(rendered.body, format!("<svg><text>{BERLINER}</text></svg>"));
}

#[tokio::test]
async fn raw_is_passed_through_verbatim() {
    let engine = Arc::new(MockEngine::canned());
    let d = dispatcher(engine);

    let req = ParseRequest::resolve(Some(BERLINER.into()), Some("raw".into())).unwrap();
    let rendered = d.dispatch(&req).await.unwrap();

    let ParseOutput::Raw(raw) = canned_output(BERLINER, OutputFormat::Raw) else {
        panic!("expected raw");
    };
    assert_eq!(rendered.body.as_bytes(), raw.as_bytes());
}

#[tokio::test]
async fn invalid_format_never_reaches_engine() {
    let engine = Arc::new(MockEngine::canned());
    let d = dispatcher(engine.clone());

    for format in ["xml", "", "CONLL", "json "] {
        let req = ParseRequest::resolve(Some(BERLINER.into()), Some(format.into())).unwrap();
        let err = d.dispatch(&req).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidFormat(ref f) if f == format));
        assert!(err.is_client_error());
    }

    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn default_format_matches_explicit_conll() {
    let engine = Arc::new(MockEngine::canned());
    let d = dispatcher(engine.clone());

    let implicit = ParseRequest::resolve(Some(BERLINER.into()), None).unwrap();
    let explicit = ParseRequest::resolve(Some(BERLINER.into()), Some("conll".into())).unwrap();

    let a = d.dispatch(&implicit).await.unwrap();
    let b = d.dispatch(&explicit).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(engine.call_count(), 2);
}

#[tokio::test]
async fn every_valid_format_calls_engine_once() {
    let engine = Arc::new(MockEngine::canned());
    let d = dispatcher(engine.clone());

    for (i, format) in VALID_FORMATS.iter().enumerate() {
        let req =
            ParseRequest::resolve(Some(BERLINER.into()), Some(format.as_str().into())).unwrap();
        d.dispatch(&req).await.unwrap();
        assert_eq!(engine.call_count(), i + 1, "format {format}");
    }
}

#[tokio::test]
async fn engine_errors_are_classified() {
    let engine = Arc::new(MockEngine::new(|_, _| {
        Err(EngineError::Unavailable("parzu not installed".into()))
    }));
    let d = dispatcher(engine.clone());

    let req = ParseRequest::resolve(Some(BERLINER.into()), None).unwrap();
    let err = d.dispatch(&req).await.unwrap_err();

    match err {
        DispatchError::Engine(e) => assert_eq!(e.kind(), EngineErrorKind::Unavailable),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(engine.call_count(), 1);
}

#[tokio::test]
async fn wrong_output_shape_is_internal_error() {
    let engine = Arc::new(MockEngine::new(|_, _| Ok(ParseOutput::Raw("x".into()))));
    let d = dispatcher(engine);

    let req = ParseRequest::resolve(Some(BERLINER.into()), Some("tagged".into())).unwrap();
    let err = d.dispatch(&req).await.unwrap_err();
    assert!(matches!(err, DispatchError::Engine(ref e) if e.kind() == EngineErrorKind::Internal));
}
