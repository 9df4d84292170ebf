//! Patient (service user) entity definition.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A service user receiving care
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Backend identifier
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email, if on file
    pub email: Option<String>,
    /// Contact phone, if on file
    pub phone: Option<String>,
    /// Home address where visits take place
    pub address: Option<String>,
    /// Birth date
    pub date_of_birth: Option<NaiveDate>,
    /// Assessed care level label, if assessed
    pub care_level: Option<String>,
}

impl Patient {
    /// Display name as the roster lists it
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years at a reference date
    ///
    /// Returns `None` when no birth date is on file or the reference date
    /// precedes it.
    #[must_use]
    pub fn age_at(&self, date: &NaiveDate) -> Option<i32> {
        let birth = self.date_of_birth?;
        if *date < birth {
            return None;
        }
        let mut age = date.year() - birth.year();
        if (date.month(), date.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }
}

#[cfg(test)]
mod tests {
    use super::Patient;
    use chrono::NaiveDate;

    fn patient(date_of_birth: Option<NaiveDate>) -> Patient {
        Patient {
            id: "p1".to_string(),
            first_name: "Edith".to_string(),
            last_name: "Moss".to_string(),
            email: None,
            phone: None,
            address: None,
            date_of_birth,
            care_level: None,
        }
    }

    #[test]
    fn age_counts_completed_years_only() {
        let p = patient(NaiveDate::from_ymd_opt(1950, 6, 15));
        let day_before = NaiveDate::from_ymd_opt(2020, 6, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();

        assert_eq!(p.age_at(&day_before), Some(69));
        assert_eq!(p.age_at(&birthday), Some(70));
    }

    #[test]
    fn age_is_none_without_birth_date() {
        let p = patient(None);
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(p.age_at(&date), None);
    }
}
