#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VIDEO_ID: &str = "abc123";
pub const API_KEY: &str = "test-api-key";
pub const CONSENT_VALUE: &str = "cb.20240101-00-p0.en+FX+123";

pub const HELLO_WORLD_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0.0" dur="1.5">Hello</text><text start="1.5" dur="2.0">world</text></transcript>"#;

/// Stand-in for the watch page, player API and timedtext endpoints
pub struct FakeYoutube {
    server: MockServer,
}

impl FakeYoutube {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", VIDEO_ID)
    }

    fn watch_html() -> String {
        format!(
            r#"<html><script>ytcfg.set({{"INNERTUBE_API_KEY": "{}", "OTHER": 1}});</script></html>"#,
            API_KEY
        )
    }

    pub fn track(&self, language_code: &str, kind: Option<&str>) -> Value {
        let mut track = json!({
            "baseUrl": format!("{}/api/timedtext?v={}&lang={}&fmt=srv3", self.uri(), VIDEO_ID, language_code),
            "name": { "runs": [{ "text": format!("Language {}", language_code) }] },
            "languageCode": language_code,
        });
        if let Some(kind) = kind {
            track["kind"] = json!(kind);
        }
        track
    }

    /// Serves a normal watch page
    pub async fn mount_watch_page(&self) {
        Mock::given(method("GET"))
            .and(path("/watch"))
            .and(query_param("v", VIDEO_ID))
            .respond_with(ResponseTemplate::new(200).set_body_string(Self::watch_html()))
            .mount(&self.server)
            .await;
    }

    /// Serves a consent form unless the consent cookie is sent
    pub async fn mount_consent_flow(&self) {
        Mock::given(method("GET"))
            .and(path("/watch"))
            .and(header("cookie", format!("CONSENT=YES+{}", CONSENT_VALUE).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string(Self::watch_html()))
            .with_priority(1)
            .mount(&self.server)
            .await;

        let consent_page = format!(
            r#"<form action="https://consent.youtube.com/s" method="POST"><input type="hidden" name="v" value="{}"></form>"#,
            CONSENT_VALUE
        );
        Mock::given(method("GET"))
            .and(path("/watch"))
            .respond_with(ResponseTemplate::new(200).set_body_string(consent_page))
            .mount(&self.server)
            .await;
    }

    /// Responds to every watch page request with the given status
    pub async fn mount_watch_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/watch"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_player(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/youtubei/v1/player"))
            .and(query_param("key", API_KEY))
            .and(body_partial_json(json!({
                "context": { "client": { "clientName": "ANDROID" } },
                "videoId": VIDEO_ID,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_player_with_tracks(&self, tracks: Vec<Value>) {
        self.mount_player(json!({
            "playabilityStatus": { "status": "OK" },
            "captions": {
                "playerCaptionsTracklistRenderer": { "captionTracks": tracks }
            }
        }))
        .await;
    }

    /// Serves the transcript XML for a language; `fmt` must have been stripped
    pub async fn mount_timedtext(&self, language_code: &str, xml: &str) {
        Mock::given(method("GET"))
            .and(path("/api/timedtext"))
            .and(query_param("lang", language_code))
            .and(query_param_is_missing("fmt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(xml.to_string()))
            .mount(&self.server)
            .await;
    }

    /// Full happy path with one manually created English track
    pub async fn mount_hello_world(&self) {
        self.mount_watch_page().await;
        self.mount_player_with_tracks(vec![self.track("en", None)]).await;
        self.mount_timedtext("en", HELLO_WORLD_XML).await;
    }
}
