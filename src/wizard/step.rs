//! The three wizard steps

use std::fmt;

use super::fields::{BusinessField, Field, LocationField, PersonalField};

/// One stage of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    /// Step 1: personal information
    #[default]
    Personal,
    /// Step 2: location
    Location,
    /// Step 3: business details
    Business,
}

const PERSONAL_FIELDS: &[Field] = &[
    Field::Personal(PersonalField::FirstName),
    Field::Personal(PersonalField::LastName),
    Field::Personal(PersonalField::Email),
    Field::Personal(PersonalField::Phone),
];

const LOCATION_FIELDS: &[Field] = &[
    Field::Location(LocationField::Country),
    Field::Location(LocationField::City),
    Field::Location(LocationField::ZipCode),
    Field::Location(LocationField::Region),
];

const BUSINESS_FIELDS: &[Field] = &[
    Field::Business(BusinessField::CompanyName),
    Field::Business(BusinessField::CompanyType),
    Field::Business(BusinessField::Industry),
    Field::Business(BusinessField::Employees),
    Field::Business(BusinessField::Website),
    Field::Business(BusinessField::Address),
    Field::Business(BusinessField::BusinessDetails),
    Field::Business(BusinessField::Service),
    Field::Business(BusinessField::ServiceDetails),
    Field::Business(BusinessField::ShareSubscription),
];

impl Step {
    pub const ALL: [Step; 3] = [Self::Personal, Self::Location, Self::Business];

    /// Number of steps in the wizard
    pub const COUNT: u8 = 3;

    /// 1-based position, the value that gets persisted
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Location => 2,
            Self::Business => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Personal),
            2 => Some(Self::Location),
            3 => Some(Self::Business),
            _ => None,
        }
    }

    /// Parse a persisted decimal step index
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u8>().ok().and_then(Self::from_number)
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Location),
            Self::Location => Some(Self::Business),
            Self::Business => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Location => Some(Self::Personal),
            Self::Business => Some(Self::Location),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Location => "Location",
            Self::Business => "Business Details",
        }
    }

    /// Fields rendered on this step, in display order
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Personal => PERSONAL_FIELDS,
            Self::Location => LOCATION_FIELDS,
            Self::Business => BUSINESS_FIELDS,
        }
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Self::COUNT, self.title())
    }
}
