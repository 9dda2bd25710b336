//! Form fields and the per-section records that hold their values
//!
//! Field keys are the camelCase names the form has always used
//! (`firstName`, `zipCode`, ...), so a key alone identifies its section.

use std::fmt;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// One of a fixed list of options; empty means nothing chosen yet
    Choice(&'static [&'static str]),
    /// On/off checkbox stored as `"true"` / `"false"`
    Toggle,
}

/// Fields of the personal information step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl PersonalField {
    pub const ALL: [PersonalField; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

/// Fields of the location step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    Country,
    City,
    ZipCode,
    Region,
}

impl LocationField {
    pub const ALL: [LocationField; 4] = [Self::Country, Self::City, Self::ZipCode, Self::Region];

    pub fn key(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::Region => "region",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::City => "City",
            Self::ZipCode => "Zip Code",
            Self::Region => "Region",
        }
    }
}

/// Fields of the business details step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessField {
    CompanyName,
    CompanyType,
    Industry,
    Employees,
    Website,
    Address,
    BusinessDetails,
    Service,
    ServiceDetails,
    ShareSubscription,
}

impl BusinessField {
    pub const ALL: [BusinessField; 10] = [
        Self::CompanyName,
        Self::CompanyType,
        Self::Industry,
        Self::Employees,
        Self::Website,
        Self::Address,
        Self::BusinessDetails,
        Self::Service,
        Self::ServiceDetails,
        Self::ShareSubscription,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::CompanyType => "companyType",
            Self::Industry => "industry",
            Self::Employees => "employees",
            Self::Website => "website",
            Self::Address => "address",
            Self::BusinessDetails => "businessDetails",
            Self::Service => "service",
            Self::ServiceDetails => "serviceDetails",
            Self::ShareSubscription => "shareSubscription",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::CompanyType => "Type",
            Self::Industry => "Industry",
            Self::Employees => "Number of Employees",
            Self::Website => "Website",
            Self::Address => "Address",
            Self::BusinessDetails => "Business Details",
            Self::Service => "Choose Service",
            Self::ServiceDetails => "Service Details",
            Self::ShareSubscription => "I want to share my subscription",
        }
    }
}

const COUNTRIES: &[&str] = &["Country 1", "Country 2"];
const CITIES: &[&str] = &["City 1", "City 2"];
const REGIONS: &[&str] = &["Region 1", "Region 2"];
const COMPANY_TYPES: &[&str] = &["Type 1", "Type 2", "Type 3"];
const SERVICES: &[&str] = &["Service 1", "Service 2", "Service 3"];

/// Any field of the form, tagged with its section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Personal(PersonalField),
    Location(LocationField),
    Business(BusinessField),
}

impl Field {
    /// Resolve a field key to its section.
    ///
    /// Personal keys are checked first, then business keys, and whatever is
    /// left must be a location key. Unknown keys resolve to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(f) = PersonalField::ALL.into_iter().find(|f| f.key() == key) {
            return Some(Self::Personal(f));
        }
        if let Some(f) = BusinessField::ALL.into_iter().find(|f| f.key() == key) {
            return Some(Self::Business(f));
        }
        LocationField::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .map(Self::Location)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Personal(f) => f.key(),
            Self::Location(f) => f.key(),
            Self::Business(f) => f.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal(f) => f.label(),
            Self::Location(f) => f.label(),
            Self::Business(f) => f.label(),
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Personal(PersonalField::FirstName) => "First Name",
            Self::Personal(PersonalField::LastName) => "Last Name",
            Self::Personal(PersonalField::Email) => "Email",
            Self::Personal(PersonalField::Phone) => "Phone",
            Self::Location(LocationField::Country) => "Select country",
            Self::Location(LocationField::City) => "Select city",
            Self::Location(LocationField::ZipCode) => "zip/postal code",
            Self::Location(LocationField::Region) => "Select Region",
            Self::Business(BusinessField::CompanyName) => "CQD",
            Self::Business(BusinessField::CompanyType) => "Company type",
            Self::Business(BusinessField::Industry) => "Industry name",
            Self::Business(BusinessField::Employees) => "0-100",
            Self::Business(BusinessField::Website) => "link here",
            Self::Business(BusinessField::Address) => "Address here",
            Self::Business(BusinessField::Service) => "Select Service",
            Self::Business(BusinessField::BusinessDetails)
            | Self::Business(BusinessField::ServiceDetails) => "Type here...",
            Self::Business(BusinessField::ShareSubscription) => "",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Location(LocationField::Country) => FieldKind::Choice(COUNTRIES),
            Self::Location(LocationField::City) => FieldKind::Choice(CITIES),
            Self::Location(LocationField::Region) => FieldKind::Choice(REGIONS),
            Self::Business(BusinessField::CompanyType) => FieldKind::Choice(COMPANY_TYPES),
            Self::Business(BusinessField::Service) => FieldKind::Choice(SERVICES),
            Self::Business(BusinessField::ShareSubscription) => FieldKind::Toggle,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Step one: who the user is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FirstName => &self.first_name,
            PersonalField::LastName => &self.last_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: String) {
        let slot = match field {
            PersonalField::FirstName => &mut self.first_name,
            PersonalField::LastName => &mut self.last_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Fields that are still empty
    pub fn missing(&self) -> Vec<PersonalField> {
        PersonalField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

/// Step two: where the user is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationInfo {
    pub country: String,
    pub city: String,
    pub zip_code: String,
    pub region: String,
}

impl LocationInfo {
    pub fn get(&self, field: LocationField) -> &str {
        match field {
            LocationField::Country => &self.country,
            LocationField::City => &self.city,
            LocationField::ZipCode => &self.zip_code,
            LocationField::Region => &self.region,
        }
    }

    pub fn set(&mut self, field: LocationField, value: String) {
        let slot = match field {
            LocationField::Country => &mut self.country,
            LocationField::City => &mut self.city,
            LocationField::ZipCode => &mut self.zip_code,
            LocationField::Region => &mut self.region,
        };
        *slot = value;
    }

    /// Fields that are still empty
    pub fn missing(&self) -> Vec<LocationField> {
        LocationField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

/// Step three: the business. Nothing here is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessInfo {
    pub company_name: String,
    pub company_type: String,
    pub industry: String,
    pub employees: String,
    pub website: String,
    pub address: String,
    pub business_details: String,
    pub service: String,
    pub service_details: String,
    pub share_subscription: bool,
}

impl BusinessInfo {
    pub fn get(&self, field: BusinessField) -> &str {
        match field {
            BusinessField::CompanyName => &self.company_name,
            BusinessField::CompanyType => &self.company_type,
            BusinessField::Industry => &self.industry,
            BusinessField::Employees => &self.employees,
            BusinessField::Website => &self.website,
            BusinessField::Address => &self.address,
            BusinessField::BusinessDetails => &self.business_details,
            BusinessField::Service => &self.service,
            BusinessField::ServiceDetails => &self.service_details,
            BusinessField::ShareSubscription => {
                if self.share_subscription {
                    "true"
                } else {
                    "false"
                }
            }
        }
    }

    pub fn set(&mut self, field: BusinessField, value: String) {
        let slot = match field {
            BusinessField::ShareSubscription => {
                self.share_subscription = parse_flag(&value);
                return;
            }
            BusinessField::CompanyName => &mut self.company_name,
            BusinessField::CompanyType => &mut self.company_type,
            BusinessField::Industry => &mut self.industry,
            BusinessField::Employees => &mut self.employees,
            BusinessField::Website => &mut self.website,
            BusinessField::Address => &mut self.address,
            BusinessField::BusinessDetails => &mut self.business_details,
            BusinessField::Service => &mut self.service,
            BusinessField::ServiceDetails => &mut self.service_details,
        };
        *slot = value;
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "yes" | "1"
    )
}
