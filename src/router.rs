/// Which responder handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    NowPlaying,
    Time,
    Weather,
    Quote,
    Unknown,
}

// Checked in order; the first marker contained in the intent name wins.
const ROUTES: [(&str, Intent); 4] = [
    ("KUSC", Intent::NowPlaying),
    ("Time", Intent::Time),
    ("Weather", Intent::Weather),
    ("Rick", Intent::Quote),
];

pub fn route(intent_name: Option<&str>) -> Intent {
    let Some(name) = intent_name else {
        return Intent::Unknown;
    };

    ROUTES
        .iter()
        .find(|(marker, _)| name.contains(*marker))
        .map_or(Intent::Unknown, |&(_, intent)| intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_on_contained_marker() {
        assert_eq!(route(Some("KUSC-hook")), Intent::NowPlaying);
        assert_eq!(route(Some("AskTime")), Intent::Time);
        assert_eq!(route(Some("Weather hook")), Intent::Weather);
        assert_eq!(route(Some("RickQuote")), Intent::Quote);
    }

    #[test]
    fn first_marker_wins() {
        assert_eq!(route(Some("KUSC Time")), Intent::NowPlaying);
        assert_eq!(route(Some("Time for Weather")), Intent::Time);
        assert_eq!(route(Some("Rick on the Weather")), Intent::Weather);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(route(Some("kusc")), Intent::Unknown);
        assert_eq!(route(Some("what time is it")), Intent::Unknown);
    }

    #[test]
    fn absent_or_unmatched_is_unknown() {
        assert_eq!(route(None), Intent::Unknown);
        assert_eq!(route(Some("")), Intent::Unknown);
        assert_eq!(route(Some("Default Welcome Intent")), Intent::Unknown);
    }
}
