use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScreenerError};
use crate::models::stock::{MacdSignal, StockRecordView};

pub const DEFAULT_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 500;

/// Inclusive numeric bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// A missing value never satisfies a range, even an unbounded one.
    pub fn contains(&self, value: Option<f64>) -> bool {
        let Some(value) = value else {
            return false;
        };
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    fn validate(&self, field: &str) -> Result<()> {
        for (side, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(v) = bound {
                if !v.is_finite() {
                    return Err(ScreenerError::validation(format!(
                        "{}.{} must be a finite number",
                        field, side
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Conjunction of optional clauses. Absent clauses impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above_50ma: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above_200ma: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<MacdSignal>,
}

impl FilterSpec {
    /// Shallow merge: every clause present on `self` replaces the one in `base`.
    pub fn merged_over(self, base: &FilterSpec) -> FilterSpec {
        FilterSpec {
            market_cap: self.market_cap.or(base.market_cap),
            pe_ratio: self.pe_ratio.or(base.pe_ratio),
            price: self.price.or(base.price),
            dividend_yield: self.dividend_yield.or(base.dividend_yield),
            volume: self.volume.or(base.volume),
            rsi: self.rsi.or(base.rsi),
            sector: self.sector.or_else(|| base.sector.clone()),
            above_50ma: self.above_50ma.or(base.above_50ma),
            above_200ma: self.above_200ma.or(base.above_200ma),
            macd_signal: self.macd_signal.or(base.macd_signal),
        }
    }

    pub fn ranges(&self) -> [(&'static str, Option<&RangeFilter>); 6] {
        [
            ("market_cap", self.market_cap.as_ref()),
            ("pe_ratio", self.pe_ratio.as_ref()),
            ("price", self.price.as_ref()),
            ("dividend_yield", self.dividend_yield.as_ref()),
            ("volume", self.volume.as_ref()),
            ("rsi", self.rsi.as_ref()),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (field, range) in self.ranges() {
            if let Some(range) = range {
                range.validate(field)?;
            }
        }
        Ok(())
    }
}

/// Fields a screen can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Ticker,
    Name,
    Price,
    Change,
    ChangePercent,
    MarketCap,
    PeRatio,
    DividendYield,
    Rsi,
    Volume,
    Sector,
    FiftyTwoWeekHigh,
    FiftyTwoWeekLow,
}

impl SortField {
    pub const ALL: [SortField; 13] = [
        SortField::Ticker,
        SortField::Name,
        SortField::Price,
        SortField::Change,
        SortField::ChangePercent,
        SortField::MarketCap,
        SortField::PeRatio,
        SortField::DividendYield,
        SortField::Rsi,
        SortField::Volume,
        SortField::Sector,
        SortField::FiftyTwoWeekHigh,
        SortField::FiftyTwoWeekLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Ticker => "ticker",
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Change => "change",
            SortField::ChangePercent => "change_percent",
            SortField::MarketCap => "market_cap",
            SortField::PeRatio => "pe_ratio",
            SortField::DividendYield => "dividend_yield",
            SortField::Rsi => "rsi",
            SortField::Volume => "volume",
            SortField::Sector => "sector",
            SortField::FiftyTwoWeekHigh => "fifty_two_week_high",
            SortField::FiftyTwoWeekLow => "fifty_two_week_low",
        }
    }

    fn camel_alias(&self) -> &'static str {
        match self {
            SortField::ChangePercent => "changePercent",
            SortField::MarketCap => "marketCap",
            SortField::PeRatio => "peRatio",
            SortField::DividendYield => "dividendYield",
            SortField::FiftyTwoWeekHigh => "fiftyTwoWeekHigh",
            SortField::FiftyTwoWeekLow => "fiftyTwoWeekLow",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s || field.camel_alias() == s)
            .ok_or_else(|| ScreenerError::validation(format!("Invalid sort field: '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Orient an ascending comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ScreenerError::validation(format!(
                "Invalid sort order: '{}'. Expected asc or desc",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// Sort clause as it arrives on the wire, validated into a [`SortSpec`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortRequest {
    pub field: String,
    #[serde(default)]
    pub order: Option<String>,
}

impl SortRequest {
    pub fn validate(&self) -> Result<SortSpec> {
        Ok(SortSpec {
            field: self.field.parse()?,
            order: match self.order.as_deref() {
                Some(order) => order.parse()?,
                None => SortOrder::default(),
            },
        })
    }
}

/// Body of POST /api/screener
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenerRequest {
    #[serde(default)]
    pub filters: FilterSpec,
    #[serde(default)]
    pub sort: Option<SortRequest>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub template: Option<String>,
}

/// Fully validated input to the screener engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenerQuery {
    pub filters: FilterSpec,
    pub sort: Option<SortSpec>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for ScreenerQuery {
    fn default() -> Self {
        Self {
            filters: FilterSpec::default(),
            sort: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ScreenerQuery {
    pub fn validate(&self) -> Result<()> {
        if self.limit > MAX_LIMIT {
            return Err(ScreenerError::validation(format!(
                "limit must not exceed {}, got: {}",
                MAX_LIMIT, self.limit
            )));
        }
        self.filters.validate()
    }
}

impl ScreenerRequest {
    /// Validates the request, layering its filters over the template filters if any.
    pub fn into_query(self, template_filters: Option<&FilterSpec>) -> Result<ScreenerQuery> {
        let limit = match self.limit {
            Some(limit) => non_negative("limit", limit)?,
            None => DEFAULT_LIMIT,
        };
        let offset = match self.offset {
            Some(offset) => non_negative("offset", offset)?,
            None => 0,
        };
        let sort = self.sort.as_ref().map(SortRequest::validate).transpose()?;
        let filters = match template_filters {
            Some(base) => self.filters.merged_over(base),
            None => self.filters,
        };

        let query = ScreenerQuery { filters, sort, limit, offset };
        query.validate()?;
        Ok(query)
    }
}

fn non_negative(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        ScreenerError::validation(format!("{} must be non-negative, got: {}", name, value))
    })
}

/// Response body of the screener endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerResponse {
    pub total: usize,
    pub results: Vec<StockRecordView>,
    pub execution_time_ms: u64,
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}
