//! Provider tests against mocked HTTP backends

use parley_translator::{
    GoogleTranslator, OpenAiTranslator, ProviderKind, TranslateError, Translator,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn google(server: &MockServer) -> GoogleTranslator {
    GoogleTranslator::new(format!("{}/translate_a/single", server.uri()))
}

fn openai(server: &MockServer) -> OpenAiTranslator {
    OpenAiTranslator::new(
        "sk-test".to_string(),
        format!("{}/v1", server.uri()),
        "gpt-4o".to_string(),
    )
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
}

// ============ Google ============

#[tokio::test]
async fn google_translates_and_detects_source() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "auto"))
        .and(query_param("tl", "fr"))
        .and(query_param("q", "hi there"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [["salut ", "hi ", null, null, 10], ["toi", "there", null, null, 10]],
            null,
            "en"
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let translation = google(&server).translate("hi there", "FR").await.unwrap();

    assert_eq!(translation.text, "salut toi");
    assert_eq!(translation.from, "en");
    assert_eq!(translation.to, "fr");
    assert_eq!(translation.provider, ProviderKind::Google);
}

#[tokio::test]
async fn google_uses_declared_source_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("sl", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[["hello", "hallo"]], null])))
        .expect(1)
        .mount(&server)
        .await;

    let translation = google(&server)
        .with_source_lang("DE")
        .translate("hallo", "en")
        .await
        .unwrap();

    assert_eq!(translation.from, "de");
}

#[tokio::test]
async fn google_rejects_unknown_target_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = google(&server).translate("hello", "xx-not-real").await;

    match result {
        Err(TranslateError::UnsupportedLanguage(code)) => assert_eq!(code, "xx-not-real"),
        other => panic!("expected UnsupportedLanguage, got {:?}", other),
    }
}

#[tokio::test]
async fn google_transport_failure_is_request_error() {
    // Nothing listens on the discard port
    let translator = GoogleTranslator::new("http://127.0.0.1:9/translate_a/single".to_string());

    let err = translator.translate("hello", "fr").await.unwrap_err();

    assert!(matches!(err, TranslateError::NetworkError(_)));
    assert!(err.is_request_failure());
}

#[tokio::test]
async fn google_server_error_is_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = google(&server).translate("hello", "fr").await.unwrap_err();

    assert!(matches!(err, TranslateError::ApiError(_)));
    assert!(err.is_request_failure());
}

#[tokio::test]
async fn google_empty_translation_is_not_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[], null, "en"])))
        .mount(&server)
        .await;

    let err = google(&server).translate("hello", "fr").await.unwrap_err();
    assert!(err.is_request_failure());
}

#[tokio::test]
async fn google_blank_input_is_rejected() {
    let server = MockServer::start().await;
    let err = google(&server).translate("   ", "fr").await.unwrap_err();
    assert!(matches!(err, TranslateError::EmptyInput));
}

// ============ OpenAI ============

#[tokio::test]
async fn openai_sends_fixed_prompt_and_reports_auto() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "messages": [{
                "role": "user",
                "content": "Translate the following text from auto to es. Do not explain, just reply with the translated text.\n\nGood night"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  Buenas noches\n")))
        .expect(1)
        .mount(&server)
        .await;

    let translation = openai(&server).translate("Good night", "es").await.unwrap();

    assert_eq!(translation.text, "Buenas noches");
    assert_eq!(translation.from, "auto");
    assert_eq!(translation.provider, ProviderKind::OpenAI);
}

#[tokio::test]
async fn openai_detects_source_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Identify the language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("EN.")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("from en to it"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Ciao")))
        .expect(1)
        .mount(&server)
        .await;

    let translation = openai(&server)
        .with_source_detection(true)
        .translate("Hello", "it")
        .await
        .unwrap();

    assert_eq!(translation.from, "en");
    assert_eq!(translation.text, "Ciao");
}

#[tokio::test]
async fn openai_unauthorized_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let err = openai(&server).translate("Hello", "it").await.unwrap_err();
    assert!(matches!(err, TranslateError::AuthenticationError));
}

#[tokio::test]
async fn openai_error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "The server had an error" }
        })))
        .mount(&server)
        .await;

    let err = openai(&server).translate("Hello", "it").await.unwrap_err();
    assert_eq!(err.to_string(), "API error: The server had an error");
}

#[tokio::test]
async fn openai_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = openai(&server).translate("Hello", "it").await.unwrap_err();
    assert!(matches!(err, TranslateError::RateLimitExceeded));
}

#[tokio::test]
async fn openai_empty_completion_is_not_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("   ")))
        .mount(&server)
        .await;

    let err = openai(&server).translate("Hello", "it").await.unwrap_err();
    assert!(err.is_request_failure());
}
