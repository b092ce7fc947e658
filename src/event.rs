//! Normalized event record emitted to the JSON output.

use chrono::NaiveDate;
use serde::Serialize;

/// Kind of gathering a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Conference,
    Hackathon,
}

/// Which input table a record was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    #[serde(rename = "events_csv")]
    EventsCsv,
    #[serde(rename = "hackathons_csv")]
    HackathonsCsv,
}

impl Source {
    /// Prefix used when numbering records of this source.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Source::EventsCsv => "event",
            Source::HackathonsCsv => "hackathon",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Source::EventsCsv => Category::Conference,
            Source::HackathonsCsv => Category::Hackathon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub category: Category,
    pub link: String,
    pub time: String,
    pub source: Source,
}

impl Event {
    /// Builds the `seq`-th record (1-based) of `source`.
    ///
    /// Description is always empty, and hackathons never carry a time.
    pub fn new(
        source: Source,
        seq: usize,
        title: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        location: String,
    ) -> Self {
        Event {
            id: format!("{}_{}", source.id_prefix(), seq),
            title: title.trim().to_string(),
            description: String::new(),
            start_date,
            end_date,
            location,
            category: source.category(),
            link: String::new(),
            time: String::new(),
            source,
        }
    }

    /// Set the trimmed link
    pub fn with_link(mut self, link: &str) -> Self {
        self.link = link.trim().to_string();
        self
    }

    /// Set the trimmed time of day. Ignored for hackathons.
    pub fn with_time(mut self, time: &str) -> Self {
        if self.source == Source::EventsCsv {
            self.time = time.trim().to_string();
        }
        self
    }

    /// Key records are deduplicated on.
    pub fn dedup_key(&self) -> (&str, NaiveDate) {
        (&self.title, self.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_new_event_numbering_and_category() {
        let e = Event::new(
            Source::EventsCsv,
            3,
            "  AI Summit ",
            day(10, 1),
            day(10, 2),
            "Paris".into(),
        );
        assert_eq!(e.id, "event_3");
        assert_eq!(e.title, "AI Summit");
        assert_eq!(e.category, Category::Conference);
        assert!(e.description.is_empty());

        let h = Event::new(
            Source::HackathonsCsv,
            1,
            "Hack",
            day(10, 1),
            day(10, 1),
            "Berlin".into(),
        );
        assert_eq!(h.id, "hackathon_1");
        assert_eq!(h.category, Category::Hackathon);
    }

    #[test]
    fn test_time_only_kept_for_conferences() {
        let e = Event::new(Source::EventsCsv, 1, "A", day(1, 1), day(1, 1), "X".into())
            .with_time(" 9am ");
        assert_eq!(e.time, "9am");

        let h = Event::new(Source::HackathonsCsv, 1, "A", day(1, 1), day(1, 1), "X".into())
            .with_time("9am");
        assert_eq!(h.time, "");
    }

    #[test]
    fn test_serializes_with_output_schema() {
        let e = Event::new(
            Source::HackathonsCsv,
            2,
            "Build Day",
            day(11, 17),
            day(11, 19),
            "NYC".into(),
        )
        .with_link(" https://example.com ");
        let value = serde_json::to_value(&e).unwrap();

        assert_eq!(value["id"], "hackathon_2");
        assert_eq!(value["startDate"], "2025-11-17");
        assert_eq!(value["endDate"], "2025-11-19");
        assert_eq!(value["category"], "Hackathon");
        assert_eq!(value["source"], "hackathons_csv");
        assert_eq!(value["link"], "https://example.com");
        assert_eq!(value["time"], "");
        assert_eq!(value["description"], "");
    }

    #[test]
    fn test_field_order_matches_schema() {
        let e = Event::new(Source::EventsCsv, 1, "A", day(1, 1), day(1, 1), "X".into());
        let json = serde_json::to_string(&e).unwrap();
        let keys = [
            "\"id\"",
            "\"title\"",
            "\"description\"",
            "\"startDate\"",
            "\"endDate\"",
            "\"location\"",
            "\"category\"",
            "\"link\"",
            "\"time\"",
            "\"source\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(*k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
