use serde_json::Value;

use super::Reply;
use crate::upstream::{Upstream, UpstreamError};

pub const MISSING_CITY: &str = "I need a city name to look up the weather.";

pub async fn respond(
    upstream: &Upstream,
    base_url: &str,
    city: Option<&str>,
) -> Result<Reply, UpstreamError> {
    let Some(city) = city.map(str::trim).filter(|city| !city.is_empty()) else {
        return Ok(Reply::speech(MISSING_CITY));
    };

    let query = forecast_query(city);
    let body = upstream
        .get_text(base_url, &[("q", query.as_str()), ("format", "json")])
        .await?;
    Ok(forecast_reply(&body))
}

pub(crate) fn forecast_query(city: &str) -> String {
    format!(
        "select * from weather.forecast where woeid in \
         (select woeid from geo.places(1) where text='{city}')"
    )
}

/// Any gap in the forecast document, or a body that is not JSON, yields `Reply::Empty`.
pub(crate) fn forecast_reply(body: &str) -> Reply {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|data| forecast_sentence(&data))
        .map_or(Reply::Empty, Reply::Speech)
}

fn forecast_sentence(data: &Value) -> Option<String> {
    let channel = data.get("query")?.get("results")?.get("channel")?;
    let item = channel.get("item")?;
    let location = channel.get("location")?;
    let units = channel.get("units")?;
    let condition = item.get("condition")?;

    Some(format!(
        "Today in {}: {}, the temperature is {} {}",
        leaf(location, "city")?,
        leaf(condition, "text")?,
        leaf(condition, "temp")?,
        leaf(units, "temperature")?,
    ))
}

fn leaf(parent: &Value, key: &str) -> Option<String> {
    match parent.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
