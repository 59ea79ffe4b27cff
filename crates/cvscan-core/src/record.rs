use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder written for a birth date that could not be extracted.
pub const DOB_SENTINEL: &str = "NA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Mobile,
    Dob,
    Gender,
}

impl Field {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::Dob => "dob",
            Self::Gender => "gender",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "mobile" => Ok(Self::Mobile),
            "dob" => Ok(Self::Dob),
            "gender" => Ok(Self::Gender),
            _ => Err(crate::Error::InvalidField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

impl Gender {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::NotSpecified => "Not Specified",
        }
    }

    /// Maps a matched token (`M`, `male`, `F`, `Other`, ...) to a gender.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Self::Male),
            "f" | "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("not specified") {
            return Ok(Self::NotSpecified);
        }
        Self::from_token(s).ok_or_else(|| crate::Error::InvalidGender(s.to_string()))
    }
}

/// A mobile number that passed the configured digit-count and prefix rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birth date as stored: an ISO date or the `"NA"` sentinel, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BirthDate {
    Known(NaiveDate),
    #[default]
    NotAvailable,
}

impl BirthDate {
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Known(d) => Some(*d),
            Self::NotAvailable => None,
        }
    }
}

impl From<Option<NaiveDate>> for BirthDate {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::NotAvailable, Self::Known)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::NotAvailable => f.write_str(DOB_SENTINEL),
        }
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == DOB_SENTINEL {
            return Ok(Self::NotAvailable);
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Self::Known)
            .map_err(serde::de::Error::custom)
    }
}

/// Contact fields pulled from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    name: Option<String>,
    email: Option<String>,
    mobile: Option<MobileNumber>,
    dob: BirthDate,
    gender: Gender,
}

impl ExtractedRecord {
    #[must_use]
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        mobile: Option<MobileNumber>,
        dob: BirthDate,
        gender: Gender,
    ) -> Self {
        Self {
            name,
            email,
            mobile,
            dob,
            gender,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn mobile(&self) -> Option<&MobileNumber> {
        self.mobile.as_ref()
    }

    #[must_use]
    pub const fn dob(&self) -> BirthDate {
        self.dob
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Number of fields that carry an extracted value rather than a default.
    #[must_use]
    pub fn populated_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.mobile.is_some(),
            self.dob != BirthDate::NotAvailable,
            self.gender != Gender::NotSpecified,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_tokens() {
        assert_eq!(Gender::from_token("M"), Some(Gender::Male));
        assert_eq!(Gender::from_token("female"), Some(Gender::Female));
        assert_eq!(Gender::from_token("OTHER"), Some(Gender::Other));
        assert_eq!(Gender::from_token("x"), None);
    }

    #[test]
    fn test_gender_serializes_display_names() {
        assert_eq!(serde_json::to_string(&Gender::NotSpecified).unwrap(), r#""Not Specified""#);
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""Male""#);
        assert_eq!(Gender::default(), Gender::NotSpecified);
        assert_eq!("not specified".parse::<Gender>().unwrap(), Gender::NotSpecified);
    }

    #[test]
    fn test_birth_date_serialization() {
        let known = BirthDate::Known(NaiveDate::from_ymd_opt(2004, 11, 19).unwrap());
        assert_eq!(serde_json::to_string(&known).unwrap(), r#""2004-11-19""#);
        assert_eq!(serde_json::to_string(&BirthDate::NotAvailable).unwrap(), r#""NA""#);

        let parsed: BirthDate = serde_json::from_str(r#""NA""#).unwrap();
        assert_eq!(parsed, BirthDate::NotAvailable);
        let parsed: BirthDate = serde_json::from_str(r#""2004-11-19""#).unwrap();
        assert_eq!(parsed, known);
        assert!(serde_json::from_str::<BirthDate>(r#""""#).is_err());
    }

    #[test]
    fn test_field_round_trip() {
        for field in [Field::Name, Field::Email, Field::Mobile, Field::Dob, Field::Gender] {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let record = ExtractedRecord::new(
            Some("Archana Bhagat".into()),
            Some("archana@example.com".into()),
            Some(MobileNumber::new_unchecked("9876543210".into())),
            BirthDate::NotAvailable,
            Gender::NotSpecified,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mobile"], "9876543210");
        assert_eq!(json["dob"], "NA");
        assert_eq!(json["gender"], "Not Specified");
        assert_eq!(record.populated_fields(), 3);
    }
}
