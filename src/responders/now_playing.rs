use serde_json::Value;

use super::Reply;
use crate::upstream::{Upstream, UpstreamError};

pub async fn respond(upstream: &Upstream, feed_url: &str) -> Result<Reply, UpstreamError> {
    let body = upstream.get_text(feed_url, &[]).await?;
    Ok(Reply::Speech(now_playing_sentence(&body)))
}

/// Describes the current piece, or speaks the feed as-is when it carries no title.
pub(crate) fn now_playing_sentence(body: &str) -> String {
    let Ok(feed) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    let sentence = [&feed, &feed["now"], &feed["current"]]
        .into_iter()
        .find_map(describe)
        .unwrap_or_else(|| feed.to_string());
    sentence
}

fn describe(entry: &Value) -> Option<String> {
    let title = text_field(entry, "title")?;
    let mut sentence = format!("Now playing on KUSC: {title}");
    if let Some(by) = text_field(entry, "composer").or_else(|| text_field(entry, "artist")) {
        sentence.push_str(" by ");
        sentence.push_str(by);
    }
    sentence.push('.');
    Some(sentence)
}

fn text_field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_composer_at_top_level() {
        let body = r#"{"title":"Symphony No. 5","composer":"Beethoven"}"#;
        assert_eq!(
            now_playing_sentence(body),
            "Now playing on KUSC: Symphony No. 5 by Beethoven."
        );
    }

    #[test]
    fn nested_entry_and_artist_fallback() {
        let body = r#"{"station":"KUSC","now":{"title":"Clair de lune","artist":"Debussy"}}"#;
        assert_eq!(
            now_playing_sentence(body),
            "Now playing on KUSC: Clair de lune by Debussy."
        );

        let body = r#"{"current":{"title":"Morning Show"}}"#;
        assert_eq!(now_playing_sentence(body), "Now playing on KUSC: Morning Show.");
    }

    #[test]
    fn untitled_feed_is_spoken_raw() {
        let body = r#"{"program":"Overnight"}"#;
        assert_eq!(now_playing_sentence(body), r#"{"program":"Overnight"}"#);
        assert_eq!(now_playing_sentence("  off the air \n"), "off the air");
    }
}
