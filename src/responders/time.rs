use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::Reply;

pub fn respond(asked: Option<&str>, now: DateTime<Utc>, zone: Tz) -> Reply {
    let current = now.with_timezone(&zone).format("%H:%M").to_string();
    Reply::Speech(time_sentence(&current, asked))
}

pub(crate) fn time_sentence(current: &str, asked: Option<&str>) -> String {
    match asked.filter(|asked| !asked.is_empty()) {
        Some(asked) if asked.contains(current) => format!("Correct.  It is currently {current}."),
        Some(asked) => format!("Current time is {current} which is not {asked}"),
        None => format!("Current time is {current}"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn confirms_a_matching_guess() {
        assert_eq!(
            time_sentence("12:30", Some("12:30:00")),
            "Correct.  It is currently 12:30."
        );
    }

    #[test]
    fn corrects_a_wrong_guess() {
        assert_eq!(
            time_sentence("12:30", Some("09:15:00")),
            "Current time is 12:30 which is not 09:15:00"
        );
    }

    #[test]
    fn missing_or_empty_guess_just_tells_the_time() {
        assert_eq!(time_sentence("12:30", None), "Current time is 12:30");
        assert_eq!(time_sentence("12:30", Some("")), "Current time is 12:30");
    }

    #[test]
    fn uses_the_configured_zone() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 20, 30, 0).unwrap();
        assert_eq!(
            respond(None, winter, chrono_tz::US::Pacific),
            Reply::speech("Current time is 12:30")
        );

        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 20, 30, 0).unwrap();
        assert_eq!(
            respond(None, summer, chrono_tz::US::Pacific),
            Reply::speech("Current time is 13:30")
        );
    }
}
