use chrono::NaiveDate;

use crate::shared::date_utils::next_day;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 10;
pub const DEFAULT_GUESTS: u8 = 2;

/// Online travel agencies that take the actual booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtaLink {
    pub name: &'static str,
    pub url: &'static str,
}

impl OtaLink {
    pub fn test_id(&self) -> String {
        format!("book-via-{}", self.name.to_lowercase())
    }
}

pub const OTA_LINKS: [OtaLink; 3] = [
    OtaLink {
        name: "Expedia",
        url: "https://www.expedia.co.in/Nagpur-Hotels-Silver-Stone-Park-Resort.h107797384.Hotel-Information",
    },
    OtaLink {
        name: "Agoda",
        url: "https://www.agoda.com/silver-stone-park-resort/hotel/khapri-in.html",
    },
    OtaLink {
        name: "BedroomVillas",
        url: "https://www.bedroomvillas.com/property/silver-stone-park-resort/EP-107797384",
    },
];

/// Stay details picked in the booking modal. Nothing is sent anywhere; the
/// visitor continues on an OTA site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    today: NaiveDate,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u8,
}

impl BookingRequest {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            check_in: None,
            check_out: None,
            guests: DEFAULT_GUESTS,
        }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn guests(&self) -> u8 {
        self.guests
    }

    /// Earliest selectable check-in
    pub fn check_in_min(&self) -> NaiveDate {
        self.today
    }

    /// Earliest selectable check-out: the day after check-in
    pub fn check_out_min(&self) -> NaiveDate {
        next_day(self.check_in.unwrap_or(self.today))
    }

    /// Dates before today are ignored. A check-out that no longer follows
    /// the new check-in is cleared.
    pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(d) if d < self.today => {}
            _ => {
                self.check_in = date;
                if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
                    if check_out <= check_in {
                        self.check_out = None;
                    }
                }
            }
        }
    }

    /// Dates not after check-in (or today) are ignored
    pub fn set_check_out(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(d) if d < self.check_out_min() => {}
            _ => self.check_out = date,
        }
    }

    pub fn add_guest(&mut self) {
        self.guests = (self.guests + 1).min(MAX_GUESTS);
    }

    pub fn remove_guest(&mut self) {
        self.guests = self.guests.saturating_sub(1).max(MIN_GUESTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_guests_stay_within_bounds() {
        let mut booking = BookingRequest::new(date(2026, 1, 1));
        assert_eq!(booking.guests(), DEFAULT_GUESTS);
        for _ in 0..20 {
            booking.add_guest();
        }
        assert_eq!(booking.guests(), MAX_GUESTS);
        for _ in 0..20 {
            booking.remove_guest();
        }
        assert_eq!(booking.guests(), MIN_GUESTS);
    }

    #[test]
    fn test_check_in_cannot_be_in_the_past() {
        let mut booking = BookingRequest::new(date(2026, 1, 10));
        booking.set_check_in(Some(date(2026, 1, 9)));
        assert_eq!(booking.check_in(), None);
        booking.set_check_in(Some(date(2026, 1, 10)));
        assert_eq!(booking.check_in(), Some(date(2026, 1, 10)));
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let mut booking = BookingRequest::new(date(2026, 1, 1));
        booking.set_check_in(Some(date(2026, 1, 5)));
        assert_eq!(booking.check_out_min(), date(2026, 1, 6));

        booking.set_check_out(Some(date(2026, 1, 5)));
        assert_eq!(booking.check_out(), None);
        booking.set_check_out(Some(date(2026, 1, 7)));
        assert_eq!(booking.check_out(), Some(date(2026, 1, 7)));

        // Moving check-in past check-out drops the stale check-out
        booking.set_check_in(Some(date(2026, 1, 7)));
        assert_eq!(booking.check_out(), None);
    }

    #[test]
    fn test_ota_test_ids() {
        let ids: Vec<String> = OTA_LINKS.iter().map(|ota| ota.test_id()).collect();
        assert_eq!(
            ids,
            vec!["book-via-expedia", "book-via-agoda", "book-via-bedroomvillas"]
        );
    }
}
