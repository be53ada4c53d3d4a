use anyhow::Context;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use reqwest::{header, Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::sync::OnceLock;
use std::time::Duration;

use super::{ProviderError, Transcript, TranscriptEntry, TranscriptProvider};
use crate::config::ProviderConfig;

const WATCH_PATH: &str = "/watch";
const PLAYER_PATH: &str = "/youtubei/v1/player";

// The ANDROID innertube client still returns plain timedtext URLs
const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";

const CONSENT_FORM_MARKER: &str = "action=\"https://consent.youtube.com/s\"";
const RECAPTCHA_MARKER: &str = "class=\"g-recaptcha\"";
const UNAVAILABLE_REASON: &str = "This video is unavailable";

fn api_key_regex() -> &'static Regex {
    static API_KEY_REGEX: OnceLock<Regex> = OnceLock::new();
    API_KEY_REGEX.get_or_init(|| {
        Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#)
            .expect("Failed to compile api key regex")
    })
}

fn consent_value_regex() -> &'static Regex {
    static CONSENT_REGEX: OnceLock<Regex> = OnceLock::new();
    CONSENT_REGEX.get_or_init(|| {
        Regex::new(r#"name="v" value="(.*?)""#).expect("Failed to compile consent regex")
    })
}

fn text_element_regex() -> &'static Regex {
    static TEXT_REGEX: OnceLock<Regex> = OnceLock::new();
    TEXT_REGEX.get_or_init(|| {
        Regex::new(r"(?s)<text\b([^>]*)>(.*?)</text>").expect("Failed to compile text element regex")
    })
}

fn start_attr_regex() -> &'static Regex {
    static START_REGEX: OnceLock<Regex> = OnceLock::new();
    START_REGEX.get_or_init(|| {
        Regex::new(r#"\bstart="([^"]*)""#).expect("Failed to compile start attribute regex")
    })
}

fn dur_attr_regex() -> &'static Regex {
    static DUR_REGEX: OnceLock<Regex> = OnceLock::new();
    DUR_REGEX.get_or_init(|| {
        Regex::new(r#"\bdur="([^"]*)""#).expect("Failed to compile dur attribute regex")
    })
}

fn markup_regex() -> &'static Regex {
    static MARKUP_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKUP_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Failed to compile markup regex"))
}

fn entity_regex() -> &'static Regex {
    static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
    ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("Failed to compile entity regex")
    })
}

/// Innertube player response, reduced to the fields we read
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    name: Option<TrackName>,
    kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackName {
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Deserialize)]
struct TextRun {
    text: String,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    fn display_name(&self) -> String {
        self.name
            .as_ref()
            .and_then(|name| {
                name.runs
                    .first()
                    .map(|run| run.text.clone())
                    .or_else(|| name.simple_text.clone())
            })
            .unwrap_or_else(|| self.language_code.clone())
    }
}

/// Transcript provider backed by YouTube's caption tracks
pub struct YoutubeProvider {
    client: Client,
    base_url: String,
    languages: Vec<String>,
    accept_language: String,
    show_progress: bool,
}

impl YoutubeProvider {
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            languages: config.languages.clone(),
            accept_language: config.accept_language.clone(),
            show_progress: false,
        })
    }

    /// Show a spinner on stderr while fetching
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn progress(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    }

    async fn fetch_transcript(&self, video_id: &str, progress: &ProgressBar) -> Result<Transcript, ProviderError> {
        progress.set_message("Fetching video page...");
        let html = self.fetch_video_html(video_id).await?;
        let api_key = extract_api_key(&html)?;

        progress.set_message("Requesting caption tracks...");
        let player = self.fetch_player_response(video_id, &api_key).await?;
        check_playability(&player, video_id)?;

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .filter(|tracks| !tracks.is_empty())
            .ok_or_else(|| ProviderError::TranscriptsDisabled(video_id.to_string()))?;

        let track = select_track(&tracks, &self.languages).ok_or_else(|| {
            ProviderError::NoTranscriptFound {
                video_id: video_id.to_string(),
                requested: self.languages.clone(),
                available: tracks.iter().map(|t| t.language_code.clone()).collect(),
            }
        })?;

        tracing::debug!(
            "Selected caption track {} ({}, generated: {})",
            track.language_code,
            track.display_name(),
            track.is_generated()
        );

        if track.base_url.contains("&exp=xpe") {
            return Err(ProviderError::PoTokenRequired(video_id.to_string()));
        }

        progress.set_message("Downloading transcript...");
        let track_url = track.base_url.replace("&fmt=srv3", "");
        let response = self.client.get(&track_url).send().await?;
        let xml = check_status(response)?.text().await?;

        let entries = parse_transcript_xml(&xml);
        tracing::debug!("Parsed {} transcript entries", entries.len());

        Ok(Transcript {
            video_id: video_id.to_string(),
            language: track.display_name(),
            language_code: track.language_code.clone(),
            is_generated: track.is_generated(),
            entries,
        })
    }

    async fn fetch_video_html(&self, video_id: &str) -> Result<String, ProviderError> {
        let html = self.fetch_html_once(video_id, None).await?;
        if !html.contains(CONSENT_FORM_MARKER) {
            return Ok(html);
        }

        tracing::debug!("Consent page served, retrying with consent cookie");
        let consent = consent_value_regex()
            .captures(&html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ProviderError::Malformed("failed to create consent cookie".to_string()))?;

        let cookie = format!("CONSENT=YES+{}", consent);
        let html = self.fetch_html_once(video_id, Some(&cookie)).await?;
        if html.contains(CONSENT_FORM_MARKER) {
            return Err(ProviderError::Malformed("failed to create consent cookie".to_string()));
        }

        Ok(html)
    }

    async fn fetch_html_once(&self, video_id: &str, cookie: Option<&str>) -> Result<String, ProviderError> {
        let url = format!("{}{}", self.base_url, WATCH_PATH);
        tracing::debug!("Fetching watch page for: {}", video_id);

        let mut request = self
            .client
            .get(&url)
            .query(&[("v", video_id)])
            .header(header::ACCEPT_LANGUAGE, &self.accept_language);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = check_status(request.send().await?)?;
        Ok(response.text().await?)
    }

    async fn fetch_player_response(&self, video_id: &str, api_key: &str) -> Result<PlayerResponse, ProviderError> {
        let url = format!("{}{}", self.base_url, PLAYER_PATH);
        let body = json!({
            "context": {
                "client": {
                    "clientName": INNERTUBE_CLIENT_NAME,
                    "clientVersion": INNERTUBE_CLIENT_VERSION,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header(header::ACCEPT_LANGUAGE, &self.accept_language)
            .json(&body)
            .send()
            .await?;

        let text = check_status(response)?.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ProviderError::Malformed(format!("invalid player response: {}", e)))
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeProvider {
    async fn fetch(&self, video_id: &str) -> Result<Transcript, ProviderError> {
        let progress = self.progress();
        let result = self.fetch_transcript(video_id, &progress).await;
        progress.finish_and_clear();
        result
    }

    fn provider_name(&self) -> &'static str {
        "YouTube"
    }
}

fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RequestBlocked);
    }
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

fn extract_api_key(html: &str) -> Result<String, ProviderError> {
    if let Some(key) = api_key_regex().captures(html).and_then(|c| c.get(1)) {
        return Ok(key.as_str().to_string());
    }

    if html.contains(RECAPTCHA_MARKER) {
        return Err(ProviderError::RequestBlocked);
    }

    Err(ProviderError::Malformed("watch page has no innertube api key".to_string()))
}

fn check_playability(player: &PlayerResponse, video_id: &str) -> Result<(), ProviderError> {
    let Some(playability) = &player.playability_status else {
        return Ok(());
    };

    let status = playability.status.as_deref().unwrap_or("OK");
    if status == "OK" {
        return Ok(());
    }

    let reason = playability.reason.clone().unwrap_or_default();
    match status {
        "LOGIN_REQUIRED" if reason.contains("not a bot") => Err(ProviderError::RequestBlocked),
        "LOGIN_REQUIRED" if reason.contains("inappropriate") => {
            Err(ProviderError::AgeRestricted(video_id.to_string()))
        }
        "ERROR" if reason == UNAVAILABLE_REASON => {
            if video_id.starts_with("http://") || video_id.starts_with("https://") {
                Err(ProviderError::InvalidVideoId(video_id.to_string()))
            } else {
                Err(ProviderError::VideoUnavailable(video_id.to_string()))
            }
        }
        _ => Err(ProviderError::VideoUnplayable {
            video_id: video_id.to_string(),
            reason: if reason.is_empty() { status.to_string() } else { reason },
        }),
    }
}

/// Pick the best track: earlier languages win, and within a language a
/// manually created track beats a generated one.
fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    languages.iter().find_map(|lang| {
        tracks
            .iter()
            .find(|t| &t.language_code == lang && !t.is_generated())
            .or_else(|| tracks.iter().find(|t| &t.language_code == lang))
    })
}

/// Parse a timedtext XML document into transcript entries.
///
/// Elements without text are dropped. Inline markup is removed and entities
/// are decoded twice, since caption text is escaped once for the XML and
/// once more as HTML.
pub fn parse_transcript_xml(xml: &str) -> Vec<TranscriptEntry> {
    text_element_regex()
        .captures_iter(xml)
        .filter_map(|caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let raw = caps.get(2).map_or("", |m| m.as_str());
            if raw.is_empty() {
                return None;
            }

            let decoded = decode_html_entities(&decode_html_entities(raw));
            let text = markup_regex().replace_all(&decoded, "").into_owned();

            Some(TranscriptEntry {
                text,
                start: float_attr(start_attr_regex(), attrs).unwrap_or(0.0),
                duration: float_attr(dur_attr_regex(), attrs).unwrap_or(0.0),
            })
        })
        .collect()
}

fn float_attr(regex: &Regex, attrs: &str) -> Option<f64> {
    regex
        .captures(attrs)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Decode numeric HTML entities and the named ones captions use in practice:
/// the XML five, Latin-1 letters and symbols, and common typographic
/// punctuation. Names outside that set are left as-is.
pub fn decode_html_entities(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };

            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        // Latin-1 symbols
        "iexcl" => '¡',
        "cent" => '¢',
        "pound" => '£',
        "curren" => '¤',
        "yen" => '¥',
        "brvbar" => '¦',
        "sect" => '§',
        "uml" => '¨',
        "copy" => '©',
        "ordf" => 'ª',
        "laquo" => '«',
        "not" => '¬',
        "shy" => '\u{ad}',
        "reg" => '®',
        "macr" => '¯',
        "deg" => '°',
        "plusmn" => '±',
        "sup2" => '²',
        "sup3" => '³',
        "acute" => '´',
        "micro" => 'µ',
        "para" => '¶',
        "middot" => '·',
        "cedil" => '¸',
        "sup1" => '¹',
        "ordm" => 'º',
        "raquo" => '»',
        "frac14" => '¼',
        "frac12" => '½',
        "frac34" => '¾',
        "iquest" => '¿',
        "times" => '×',
        "divide" => '÷',
        // Latin-1 letters
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Acirc" => 'Â',
        "Atilde" => 'Ã',
        "Auml" => 'Ä',
        "Aring" => 'Å',
        "AElig" => 'Æ',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ecirc" => 'Ê',
        "Euml" => 'Ë',
        "Igrave" => 'Ì',
        "Iacute" => 'Í',
        "Icirc" => 'Î',
        "Iuml" => 'Ï',
        "ETH" => 'Ð',
        "Ntilde" => 'Ñ',
        "Ograve" => 'Ò',
        "Oacute" => 'Ó',
        "Ocirc" => 'Ô',
        "Otilde" => 'Õ',
        "Ouml" => 'Ö',
        "Oslash" => 'Ø',
        "Ugrave" => 'Ù',
        "Uacute" => 'Ú',
        "Ucirc" => 'Û',
        "Uuml" => 'Ü',
        "Yacute" => 'Ý',
        "THORN" => 'Þ',
        "szlig" => 'ß',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "atilde" => 'ã',
        "auml" => 'ä',
        "aring" => 'å',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "igrave" => 'ì',
        "iacute" => 'í',
        "icirc" => 'î',
        "iuml" => 'ï',
        "eth" => 'ð',
        "ntilde" => 'ñ',
        "ograve" => 'ò',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "otilde" => 'õ',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "ugrave" => 'ù',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yacute" => 'ý',
        "thorn" => 'þ',
        "yuml" => 'ÿ',
        "OElig" => 'Œ',
        "oelig" => 'œ',
        "Scaron" => 'Š',
        "scaron" => 'š',
        "Yuml" => 'Ÿ',
        // Punctuation
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "sbquo" => '‚',
        "ldquo" => '“',
        "rdquo" => '”',
        "bdquo" => '„',
        "dagger" => '†',
        "Dagger" => '‡',
        "bull" => '•',
        "hellip" => '…',
        "permil" => '‰',
        "prime" => '′',
        "lsaquo" => '‹',
        "rsaquo" => '›',
        "euro" => '€',
        "trade" => '™',
        "ensp" => '\u{2002}',
        "emsp" => '\u{2003}',
        "thinsp" => '\u{2009}',
        "zwnj" => '\u{200c}',
        "zwj" => '\u{200d}',
        "lrm" => '\u{200e}',
        "rlm" => '\u{200f}',
        "larr" => '←',
        "rarr" => '→',
        "uarr" => '↑',
        "darr" => '↓',
        "hearts" => '♥',
        "spades" => '♠',
        "clubs" => '♣',
        "diams" => '♦',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(code: &str, kind: Option<&str>) -> CaptionTrack {
        CaptionTrack {
            base_url: format!("https://example.com/timedtext?lang={}", code),
            language_code: code.to_string(),
            name: None,
            kind: kind.map(str::to_string),
        }
    }

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_transcript_xml() {
        let xml = r##"<?xml version="1.0" encoding="utf-8" ?><transcript>
            <text start="0.5" dur="1.25">Hello</text>
            <text start="1.75" dur="2">world &amp;amp; friends</text>
            <text start="4" dur="1"></text>
            <text dur="3" start="5.5">it&amp;#39;s <font color="#E5E5E5">fine</font></text>
        </transcript>"##;

        let entries = parse_transcript_xml(xml);
        assert_eq!(
            entries,
            vec![
                TranscriptEntry::new("Hello", 0.5, 1.25),
                TranscriptEntry::new("world & friends", 1.75, 2.0),
                TranscriptEntry::new("it's fine", 5.5, 3.0),
            ]
        );
    }

    #[test]
    fn test_parse_multiline_text() {
        let xml = "<transcript><text start=\"1\" dur=\"2\">line one\nline two</text></transcript>";
        let entries = parse_transcript_xml(xml);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "line one\nline two");
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_transcript_xml("<transcript></transcript>").is_empty());
        assert!(parse_transcript_xml("").is_empty());
    }

    #[test]
    fn test_decode_html_entities() {
        assert_eq!(decode_html_entities("a &lt;b&gt; &quot;c&quot;"), "a <b> \"c\"");
        assert_eq!(decode_html_entities("&#39;&#x41;&#X42;"), "'AB");
        assert_eq!(decode_html_entities("&unknown; &amp"), "&unknown; &amp");
    }

    #[test]
    fn test_decode_latin1_and_punctuation_entities() {
        assert_eq!(decode_html_entities("caf&eacute; &amp; cr&egrave;me"), "café & crème");
        assert_eq!(decode_html_entities("wait&hellip; &ldquo;what&rdquo;"), "wait… “what”");
        assert_eq!(decode_html_entities("&Uuml;ber &mdash; &euro;5 &copy;"), "Über — €5 ©");
    }

    #[test]
    fn test_parse_decodes_named_entities_in_captions() {
        let xml = r#"<transcript><text start="0" dur="1">na&amp;iuml;ve r&amp;eacute;sum&amp;eacute;&amp;hellip;</text></transcript>"#;
        let entries = parse_transcript_xml(xml);
        assert_eq!(entries, vec![TranscriptEntry::new("naïve résumé…", 0.0, 1.0)]);
    }

    #[test]
    fn test_select_track_prefers_manual() {
        let tracks = vec![track("en", Some("asr")), track("en", None)];
        let selected = select_track(&tracks, &langs(&["en"])).unwrap();
        assert!(!selected.is_generated());
    }

    #[test]
    fn test_select_track_falls_back_to_generated() {
        let tracks = vec![track("de", None), track("en", Some("asr"))];
        let selected = select_track(&tracks, &langs(&["en"])).unwrap();
        assert_eq!(selected.language_code, "en");
        assert!(selected.is_generated());
    }

    #[test]
    fn test_select_track_respects_language_priority() {
        let tracks = vec![track("en", None), track("de", Some("asr"))];
        let selected = select_track(&tracks, &langs(&["de", "en"])).unwrap();
        assert_eq!(selected.language_code, "de");
    }

    #[test]
    fn test_select_track_no_match() {
        let tracks = vec![track("fr", None)];
        assert!(select_track(&tracks, &langs(&["en", "de"])).is_none());
    }

    #[test]
    fn test_extract_api_key() {
        let html = r#"<script>ytcfg.set({"INNERTUBE_API_KEY": "AIzaSy_test-KEY"});</script>"#;
        assert_eq!(extract_api_key(html).unwrap(), "AIzaSy_test-KEY");

        let blocked = r#"<div class="g-recaptcha"></div>"#;
        assert!(matches!(extract_api_key(blocked), Err(ProviderError::RequestBlocked)));

        assert!(matches!(extract_api_key("<html></html>"), Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn test_check_playability() {
        let player = |status: &str, reason: &str| PlayerResponse {
            playability_status: Some(PlayabilityStatus {
                status: Some(status.to_string()),
                reason: Some(reason.to_string()),
            }),
            captions: None,
        };

        assert!(check_playability(&player("OK", ""), "abc").is_ok());
        assert!(matches!(
            check_playability(&player("ERROR", UNAVAILABLE_REASON), "abc"),
            Err(ProviderError::VideoUnavailable(_))
        ));
        assert!(matches!(
            check_playability(&player("ERROR", UNAVAILABLE_REASON), "https://youtube.com/watch?v=abc"),
            Err(ProviderError::InvalidVideoId(_))
        ));
        assert!(matches!(
            check_playability(&player("LOGIN_REQUIRED", "Sign in to confirm you're not a bot"), "abc"),
            Err(ProviderError::RequestBlocked)
        ));
        assert!(matches!(
            check_playability(&player("LOGIN_REQUIRED", "This video may be inappropriate for some users."), "abc"),
            Err(ProviderError::AgeRestricted(_))
        ));
        assert!(matches!(
            check_playability(&player("UNPLAYABLE", "Private video"), "abc"),
            Err(ProviderError::VideoUnplayable { .. })
        ));
    }

    #[test]
    fn test_track_display_name() {
        let mut named = track("en", None);
        named.name = Some(TrackName {
            simple_text: None,
            runs: vec![TextRun { text: "English".to_string() }],
        });
        assert_eq!(named.display_name(), "English");
        assert_eq!(track("de", None).display_name(), "de");
    }
}
