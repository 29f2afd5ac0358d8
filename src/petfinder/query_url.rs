use crate::constants::{ADOPTION_STATUS, ANIMAL_TYPE, LISTING_URL, ORGANIZATION_ID};
use crate::models::{DateWindow, FilterCategory, FilterSelection};
use crate::utils::encode_query_value;
use chrono::{DateTime, Days, FixedOffset, Local, LocalResult, NaiveTime, Offset, TimeZone};
use tracing::debug;

/// Builds listing query URLs for one organization's adoptable dogs.
///
/// Construction is pure string work: no I/O, and deterministic given the
/// inputs (and `now` for the window variants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrlBuilder {
    listing_url: String,
    organization: String,
}

impl Default for QueryUrlBuilder {
    fn default() -> Self {
        Self::new(LISTING_URL, ORGANIZATION_ID)
    }
}

impl QueryUrlBuilder {
    pub fn new(listing_url: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            listing_url: listing_url.into(),
            organization: organization.into(),
        }
    }

    /// Endpoint plus the fixed `type`, `organization` and `status` parameters.
    pub fn base_url(&self) -> String {
        format!(
            "{}?type={}&organization={}&status={}",
            self.listing_url.trim_end_matches('/'),
            ANIMAL_TYPE,
            encode_query_value(&self.organization),
            ADOPTION_STATUS
        )
    }

    /// Builds the URL for listings posted since the start of `window`.
    ///
    /// `None` (an unrecognized window) yields the base URL with no `after`
    /// parameter.
    pub fn build_window_url(&self, window: Option<DateWindow>) -> String {
        self.build_window_url_at(window, Local::now())
    }

    /// Same as [`build_window_url`](Self::build_window_url) with an explicit `now`.
    pub fn build_window_url_at<Tz: TimeZone>(
        &self,
        window: Option<DateWindow>,
        now: DateTime<Tz>,
    ) -> String {
        let mut url = self.base_url();
        match window {
            Some(window) => {
                let after = format_timestamp(&window_start(window, &now));
                url.push_str("&after=");
                url.push_str(&encode_query_value(&after));
            }
            None => debug!("Unrecognized date window, using base URL"),
        }
        url
    }

    /// Parses `name` as a [`DateWindow`] and builds its URL.
    pub fn build_named_window_url(&self, name: &str) -> String {
        self.build_window_url(DateWindow::parse(name))
    }

    /// Appends `age`, `size` and `gender` parameters, in that order, for each
    /// non-empty comma-joined value. Values are encoded as given.
    pub fn build_filtered_url(&self, ages: &str, sizes: &str, genders: &str) -> String {
        let mut url = self.base_url();
        for (category, value) in [
            (FilterCategory::Age, ages),
            (FilterCategory::Size, sizes),
            (FilterCategory::Gender, genders),
        ] {
            if !value.is_empty() {
                url.push('&');
                url.push_str(category.param());
                url.push('=');
                url.push_str(&encode_query_value(value));
            }
        }
        url
    }

    /// Builds the filtered URL for an already validated selection.
    pub fn build_selection_url(&self, selection: &FilterSelection) -> String {
        self.build_filtered_url(
            &selection.joined(FilterCategory::Age),
            &selection.joined(FilterCategory::Size),
            &selection.joined(FilterCategory::Gender),
        )
    }
}

/// Local midnight at the start of `window`, relative to `now`.
///
/// Steps back whole calendar days. A midnight skipped by a DST transition
/// resolves to the first instant after the gap; a repeated one to the earlier
/// instant.
pub fn window_start<Tz: TimeZone>(
    window: DateWindow,
    now: &DateTime<Tz>,
) -> DateTime<FixedOffset> {
    let tz = now.timezone();
    let today = now.date_naive();
    let date = today
        .checked_sub_days(Days::new(window.offset_days()))
        .unwrap_or(today);
    let midnight = date.and_time(NaiveTime::MIN);

    let start = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Read the wall-clock midnight with the offset in force before the gap.
            let before = tz
                .offset_from_utc_datetime(&(midnight - chrono::Duration::days(1)))
                .fix();
            let utc = midnight - chrono::Duration::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    };

    let offset = start.offset().fix();
    start.with_timezone(&offset)
}

/// `YYYY-MM-DDThh:mm:ss±hh:mm`
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}
