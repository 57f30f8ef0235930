//! Classification types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primitive kind of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::Object => write!(f, "object"),
        }
    }
}

/// Semantic format recognized in a string value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Email,
    Uri,
    Uuid,
    Hostname,
    Ipv4,
    Ipv6,
    DateTime,
    Date,
    Time,
    Phone,
    Country,
    Currency,
}

impl StringFormat {
    /// Every format, in detection priority order
    pub const ALL: [StringFormat; 12] = [
        StringFormat::Uuid,
        StringFormat::Email,
        StringFormat::Uri,
        StringFormat::DateTime,
        StringFormat::Date,
        StringFormat::Time,
        StringFormat::Ipv4,
        StringFormat::Ipv6,
        StringFormat::Phone,
        StringFormat::Hostname,
        StringFormat::Country,
        StringFormat::Currency,
    ];

    /// Stable name of the format
    pub fn name(self) -> &'static str {
        match self {
            StringFormat::Email => "email",
            StringFormat::Uri => "uri",
            StringFormat::Uuid => "uuid",
            StringFormat::Hostname => "hostname",
            StringFormat::Ipv4 => "ipv4",
            StringFormat::Ipv6 => "ipv6",
            StringFormat::DateTime => "date-time",
            StringFormat::Date => "date",
            StringFormat::Time => "time",
            StringFormat::Phone => "phone",
            StringFormat::Country => "country",
            StringFormat::Currency => "currency",
        }
    }

    /// The JSON Schema `format` keyword value, when JSON Schema defines one
    pub fn json_schema_format(self) -> Option<&'static str> {
        match self {
            StringFormat::Email
            | StringFormat::Uri
            | StringFormat::Uuid
            | StringFormat::Hostname
            | StringFormat::Ipv4
            | StringFormat::Ipv6
            | StringFormat::DateTime
            | StringFormat::Date
            | StringFormat::Time => Some(self.name()),
            StringFormat::Phone | StringFormat::Country | StringFormat::Currency => None,
        }
    }
}

impl std::fmt::Display for StringFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON value tagged with its kind and, for strings, its format
#[derive(Debug, Clone, PartialEq)]
pub enum Classified<'a> {
    Null,
    Bool(bool),
    /// Whole number (integral JSON numbers and integral floats)
    Int(f64),
    Float(f64),
    String {
        value: &'a str,
        format: Option<StringFormat>,
    },
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
}

impl Classified<'_> {
    /// Kind of the classified value
    pub fn kind(&self) -> ValueKind {
        match self {
            Classified::Null => ValueKind::Null,
            Classified::Bool(_) => ValueKind::Bool,
            Classified::Int(_) => ValueKind::Int,
            Classified::Float(_) => ValueKind::Float,
            Classified::String { .. } => ValueKind::String,
            Classified::Array(_) => ValueKind::Array,
            Classified::Object(_) => ValueKind::Object,
        }
    }
}

/// Which string formats the classifier looks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatDetection {
    /// Detect `date-time`, `date` and `time`
    pub datetime: bool,
    /// Detect absolute URIs
    pub uri: bool,
    /// Detect email addresses
    pub email: bool,
    /// Detect UUIDs
    pub uuid: bool,
    /// Detect hostnames
    pub hostname: bool,
    /// Detect IPv4 and IPv6 addresses
    pub ip: bool,
    /// Detect E.164 phone numbers
    pub phone: bool,
    /// Detect ISO 3166 alpha-2 country codes
    pub country: bool,
    /// Detect ISO 4217 currency codes
    pub currency: bool,
}

impl Default for FormatDetection {
    fn default() -> Self {
        Self::all()
    }
}

impl FormatDetection {
    /// Detect every supported format
    pub fn all() -> Self {
        Self {
            datetime: true,
            uri: true,
            email: true,
            uuid: true,
            hostname: true,
            ip: true,
            phone: true,
            country: true,
            currency: true,
        }
    }

    /// Detect nothing; every string is plain
    pub fn none() -> Self {
        Self {
            datetime: false,
            uri: false,
            email: false,
            uuid: false,
            hostname: false,
            ip: false,
            phone: false,
            country: false,
            currency: false,
        }
    }

    /// Whether `format` is switched on
    pub fn is_enabled(&self, format: StringFormat) -> bool {
        match format {
            StringFormat::DateTime | StringFormat::Date | StringFormat::Time => self.datetime,
            StringFormat::Uri => self.uri,
            StringFormat::Email => self.email,
            StringFormat::Uuid => self.uuid,
            StringFormat::Hostname => self.hostname,
            StringFormat::Ipv4 | StringFormat::Ipv6 => self.ip,
            StringFormat::Phone => self.phone,
            StringFormat::Country => self.country,
            StringFormat::Currency => self.currency,
        }
    }
}
