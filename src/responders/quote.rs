use rand::seq::SliceRandom;

use super::Reply;
use crate::upstream::{Upstream, UpstreamError};

pub const NOTHING_TO_SAY: &str = "I have nothing to say right now.";

pub async fn respond(
    upstream: &Upstream,
    quotes_url: Option<&str>,
) -> Result<Reply, UpstreamError> {
    let url = quotes_url.ok_or(UpstreamError::NotConfigured("QUOTES_URL"))?;
    let body = upstream.get_text(url, &[]).await?;

    let quotes = quote_lines(&body);
    let picked = quotes
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(NOTHING_TO_SAY);
    Ok(Reply::speech(picked))
}

pub(crate) fn quote_lines(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
