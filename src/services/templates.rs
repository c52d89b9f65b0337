//! Built-in screener templates
//!
//! Presets are defined once and never change at runtime. Applying one means
//! using its filters as the base of a request's FilterSpec.

use lazy_static::lazy_static;
use serde::Serialize;

use crate::models::screener::{FilterSpec, RangeFilter};
use crate::models::stock::MacdSignal;

#[derive(Debug, Clone, Serialize)]
pub struct ScreenerTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub popular: bool,
    pub filters: FilterSpec,
}

lazy_static! {
    static ref TEMPLATES: Vec<ScreenerTemplate> = vec![
        ScreenerTemplate {
            id: "value-stocks",
            name: "Value Stocks",
            description: "Low P/E companies that still pay a meaningful dividend",
            icon: "gem",
            category: "fundamental",
            popular: true,
            filters: FilterSpec {
                pe_ratio: Some(RangeFilter::new(Some(0.0), Some(15.0))),
                dividend_yield: Some(RangeFilter::at_least(2.0)),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "growth-leaders",
            name: "Growth Leaders",
            description: "Large companies trading above both their 50 and 200 day averages",
            icon: "trending-up",
            category: "growth",
            popular: true,
            filters: FilterSpec {
                market_cap: Some(RangeFilter::at_least(10e9)),
                above_50ma: Some(true),
                above_200ma: Some(true),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "dividend-income",
            name: "Dividend Income",
            description: "Established payers yielding 3% or more",
            icon: "coins",
            category: "income",
            popular: true,
            filters: FilterSpec {
                dividend_yield: Some(RangeFilter::at_least(3.0)),
                market_cap: Some(RangeFilter::at_least(10e9)),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "oversold",
            name: "Oversold",
            description: "RSI at or below 30",
            icon: "arrow-down-circle",
            category: "technical",
            popular: false,
            filters: FilterSpec {
                rsi: Some(RangeFilter::at_most(30.0)),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "overbought",
            name: "Overbought",
            description: "RSI at or above 70",
            icon: "arrow-up-circle",
            category: "technical",
            popular: false,
            filters: FilterSpec {
                rsi: Some(RangeFilter::at_least(70.0)),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "bullish-momentum",
            name: "Bullish Momentum",
            description: "Bullish MACD crossover with price above the 50 day average",
            icon: "zap",
            category: "technical",
            popular: true,
            filters: FilterSpec {
                macd_signal: Some(MacdSignal::Bullish),
                above_50ma: Some(true),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "mega-cap-tech",
            name: "Mega-Cap Tech",
            description: "Technology companies worth more than $200B",
            icon: "cpu",
            category: "sector",
            popular: false,
            filters: FilterSpec {
                sector: Some(vec!["Technology".to_string()]),
                market_cap: Some(RangeFilter::at_least(200e9)),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "small-caps",
            name: "Small Caps",
            description: "Companies between $300M and $2B in market value",
            icon: "layers",
            category: "size",
            popular: false,
            filters: FilterSpec {
                market_cap: Some(RangeFilter::new(Some(300e6), Some(2e9))),
                ..Default::default()
            },
        },
        ScreenerTemplate {
            id: "high-volume",
            name: "High Volume",
            description: "More than 10M shares traded in the session",
            icon: "activity",
            category: "technical",
            popular: false,
            filters: FilterSpec {
                volume: Some(RangeFilter::at_least(10e6)),
                ..Default::default()
            },
        },
    ];
}

/// Read-only view over the template catalogue
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateStore;

impl TemplateStore {
    pub fn new() -> Self {
        TemplateStore
    }

    pub fn all(&self) -> &'static [ScreenerTemplate] {
        &TEMPLATES
    }

    pub fn get(&self, id: &str) -> Option<&'static ScreenerTemplate> {
        TEMPLATES.iter().find(|t| t.id == id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&'static ScreenerTemplate> {
        TEMPLATES
            .iter()
            .filter(|t| t.category.eq_ignore_ascii_case(category))
            .collect()
    }
}
