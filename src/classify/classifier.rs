//! Value classification and string format detection

use super::types::{Classified, FormatDetection, StringFormat};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

/// Largest integer an f64 represents exactly
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Turns a raw JSON value into its kind, payload and string format
pub trait Classifier {
    /// Classify a value. Must be deterministic and total.
    fn classify<'a>(&self, value: &'a Value) -> Classified<'a>;
}

/// Built-in classifier with per-format detection toggles
#[derive(Debug, Clone, Default)]
pub struct FormatClassifier {
    detection: FormatDetection,
}

impl FormatClassifier {
    /// Create a classifier that detects every supported format
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier from explicit detection settings
    pub fn with_detection(detection: FormatDetection) -> Self {
        Self { detection }
    }

    /// Enable/disable date-time, date and time detection
    #[must_use]
    pub fn with_datetime_detection(mut self, enabled: bool) -> Self {
        self.detection.datetime = enabled;
        self
    }

    /// Enable/disable URI detection
    #[must_use]
    pub fn with_uri_detection(mut self, enabled: bool) -> Self {
        self.detection.uri = enabled;
        self
    }

    /// Enable/disable email detection
    #[must_use]
    pub fn with_email_detection(mut self, enabled: bool) -> Self {
        self.detection.email = enabled;
        self
    }

    /// Enable/disable UUID detection
    #[must_use]
    pub fn with_uuid_detection(mut self, enabled: bool) -> Self {
        self.detection.uuid = enabled;
        self
    }

    /// Current detection settings
    pub fn detection(&self) -> &FormatDetection {
        &self.detection
    }

    /// Detect the format of a string, first match in priority order
    pub fn detect_format(&self, s: &str) -> Option<StringFormat> {
        StringFormat::ALL
            .into_iter()
            .filter(|format| self.detection.is_enabled(*format))
            .find(|format| matches_format(*format, s))
    }
}

impl Classifier for FormatClassifier {
    fn classify<'a>(&self, value: &'a Value) -> Classified<'a> {
        match value {
            Value::Null => Classified::Null,
            Value::Bool(b) => Classified::Bool(*b),
            Value::Number(n) => classify_number(n),
            Value::String(s) => Classified::String {
                value: s,
                format: self.detect_format(s),
            },
            Value::Array(items) => Classified::Array(items),
            Value::Object(map) => Classified::Object(map),
        }
    }
}

/// Integral numbers are ints even when written as `1.0`
fn classify_number(n: &Number) -> Classified<'static> {
    if let Some(i) = n.as_i64() {
        return Classified::Int(i as f64);
    }
    if let Some(u) = n.as_u64() {
        return Classified::Int(u as f64);
    }

    let f = n.as_f64().unwrap_or(f64::NAN);
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Classified::Int(f)
    } else {
        Classified::Float(f)
    }
}

// Format detection helpers

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid uuid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2})[Tt ](\d{2}:\d{2}:\d{2})(?:\.\d+)?(?:[Zz]|[+-]\d{2}:?\d{2})?$",
    )
    .expect("valid date-time regex")
});

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2})(?:\.\d+)?(?:[Zz]|[+-]\d{2}:?\d{2})?$")
        .expect("valid time regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").expect("valid phone regex"));

static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
        .expect("valid hostname regex")
});

static COUNTRY_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    "AD AE AF AG AI AL AM AO AQ AR AS AT AU AW AX AZ BA BB BD BE BF BG BH BI BJ BL BM BN BO BQ \
     BR BS BT BV BW BY BZ CA CC CD CF CG CH CI CK CL CM CN CO CR CU CV CW CX CY CZ DE DJ DK DM \
     DO DZ EC EE EG EH ER ES ET FI FJ FK FM FO FR GA GB GD GE GF GG GH GI GL GM GN GP GQ GR GS \
     GT GU GW GY HK HM HN HR HT HU ID IE IL IM IN IO IQ IR IS IT JE JM JO JP KE KG KH KI KM KN \
     KP KR KW KY KZ LA LB LC LI LK LR LS LT LU LV LY MA MC MD ME MF MG MH MK ML MM MN MO MP MQ \
     MR MS MT MU MV MW MX MY MZ NA NC NE NF NG NI NL NO NP NR NU NZ OM PA PE PF PG PH PK PL PM \
     PN PR PS PT PW PY QA RE RO RS RU RW SA SB SC SD SE SG SH SI SJ SK SL SM SN SO SR SS ST SV \
     SX SY SZ TC TD TF TG TH TJ TK TL TM TN TO TR TT TV TW TZ UA UG UM US UY UZ VA VC VE VG VI \
     VN VU WF WS YE YT ZA ZM ZW"
        .split_whitespace()
        .collect()
});

static CURRENCY_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    "AED AFN ALL AMD ANG AOA ARS AUD AWG AZN BAM BBD BDT BGN BHD BIF BMD BND BOB BRL BSD BTN \
     BWP BYN BZD CAD CDF CHF CLP CNY COP CRC CUP CVE CZK DJF DKK DOP DZD EGP ERN ETB EUR FJD \
     FKP GBP GEL GHS GIP GMD GNF GTQ GYD HKD HNL HTG HUF IDR ILS INR IQD IRR ISK JMD JOD JPY \
     KES KGS KHR KMF KPW KRW KWD KYD KZT LAK LBP LKR LRD LSL LYD MAD MDL MGA MKD MMK MNT MOP \
     MRU MUR MVR MWK MXN MYR MZN NAD NGN NIO NOK NPR NZD OMR PAB PEN PGK PHP PKR PLN PYG QAR \
     RON RSD RUB RWF SAR SBD SCR SDG SEK SGD SHP SLE SOS SRD SSP STN SVC SYP SZL THB TJS TMT \
     TND TOP TRY TTD TWD TZS UAH UGX USD UYU UZS VES VND VUV WST XAF XCD XOF XPF YER ZAR ZMW \
     ZWL"
        .split_whitespace()
        .collect()
});

fn matches_format(format: StringFormat, s: &str) -> bool {
    match format {
        StringFormat::Uuid => UUID_RE.is_match(s),
        StringFormat::Email => EMAIL_RE.is_match(s),
        StringFormat::Uri => is_uri(s),
        StringFormat::DateTime => is_datetime(s),
        StringFormat::Date => is_date(s),
        StringFormat::Time => is_time(s),
        StringFormat::Ipv4 => s.parse::<Ipv4Addr>().is_ok(),
        StringFormat::Ipv6 => s.parse::<Ipv6Addr>().is_ok(),
        StringFormat::Phone => PHONE_RE.is_match(s),
        StringFormat::Hostname => s.len() <= 253 && HOSTNAME_RE.is_match(s),
        StringFormat::Country => COUNTRY_CODES.contains(s),
        StringFormat::Currency => CURRENCY_CODES.contains(s),
    }
}

/// Absolute URI with an authority, e.g. `https://example.com/path`
fn is_uri(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    url::Url::parse(s).is_ok_and(|u| u.has_host())
}

fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn is_valid_time(s: &str) -> bool {
    NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok()
}

/// ISO 8601 date-time, `T` or space separated, optional fraction and offset
fn is_datetime(s: &str) -> bool {
    DATETIME_RE
        .captures(s)
        .is_some_and(|caps| is_valid_date(&caps[1]) && is_valid_time(&caps[2]))
}

fn is_date(s: &str) -> bool {
    DATE_RE.is_match(s) && is_valid_date(s)
}

fn is_time(s: &str) -> bool {
    TIME_RE
        .captures(s)
        .is_some_and(|caps| is_valid_time(&caps[1]))
}
