//! Single send statistics.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Query, NO_BODY};
use crate::{cast, Client, Error, Outcome, Page, PageMetadata, Result};

/// Aggregation period for stat rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatedBy {
    Day,
    Total,
}

impl AggregatedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregatedBy::Day => "day",
            AggregatedBy::Total => "total",
        }
    }
}

/// Phase of an A/B campaign a stat row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbPhase {
    Send,
    Test,
}

impl AbPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbPhase::Send => "send",
            AbPhase::Test => "test",
        }
    }
}

/// Query parameters shared by the stats endpoints. All optional; absent
/// parameters are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct StatsParams {
    pub aggregated_by: Option<AggregatedBy>,
    /// `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// IANA timezone name, e.g. `America/Chicago`.
    pub timezone: Option<String>,
    /// 1 to 50.
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
    pub group_by: Option<Vec<String>>,
    pub ab_variation_id: Option<String>,
    pub ab_phase_id: Option<AbPhase>,
}

impl StatsParams {
    fn to_query(&self) -> Result<Query> {
        if let Some(page_size) = self.page_size {
            if !(1..=50).contains(&page_size) {
                return Err(Error::Validation(format!(
                    "page_size must be between 1 and 50, got {}",
                    page_size
                )));
            }
        }
        let mut query = Query::new();
        query.push_opt("aggregated_by", self.aggregated_by.map(|a| a.as_str()));
        query.push_opt("start_date", self.start_date.as_deref());
        query.push_opt("end_date", self.end_date.as_deref());
        query.push_opt("timezone", self.timezone.as_deref());
        query.push_opt("page_size", self.page_size);
        query.push_opt("page_token", self.page_token.as_deref());
        query.push_opt("group_by", self.group_by.as_ref().map(|g| g.join(",")));
        query.push_opt("ab_variation_id", self.ab_variation_id.as_deref());
        query.push_opt("ab_phase_id", self.ab_phase_id.map(|p| p.as_str()));
        Ok(query)
    }
}

/// Raw delivery and engagement counters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatValues {
    pub requests: Option<u64>,
    pub delivered: Option<u64>,
    pub opens: Option<u64>,
    pub unique_opens: Option<u64>,
    pub clicks: Option<u64>,
    pub unique_clicks: Option<u64>,
    pub bounces: Option<u64>,
    pub bounce_drops: Option<u64>,
    pub invalid_emails: Option<u64>,
    pub spam_reports: Option<u64>,
    pub spam_report_drops: Option<u64>,
    pub unsubscribes: Option<u64>,
}

/// One stat row for a single send.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleSendStat {
    pub id: Option<String>,
    pub ab_variation: Option<String>,
    /// `None` when the provider reports a phase this client does not know.
    #[serde(default, deserialize_with = "crate::json::soft_enum")]
    pub ab_phase: Option<AbPhase>,
    /// The aggregation bucket, e.g. a date when aggregated by day.
    pub aggregation: Option<String>,
    pub stats: Option<StatValues>,
}

/// One click-tracking row for a link in a single send.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkStat {
    pub url: Option<String>,
    pub url_location: Option<i64>,
    pub ab_variation: Option<String>,
    #[serde(default, deserialize_with = "crate::json::soft_enum")]
    pub ab_phase: Option<AbPhase>,
    pub clicks: Option<u64>,
}

/// Link stats page, which carries the total click count alongside the rows.
///
/// Rows arrive under `result` or `results`; the first non-null of the two
/// wins, `result` taking precedence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "LinkStatsPageWire")]
pub struct LinkStatsPage {
    pub results: Vec<LinkStat>,
    pub total_clicks: Option<u64>,
    pub metadata: PageMetadata,
}

#[derive(Deserialize)]
struct LinkStatsPageWire {
    #[serde(default)]
    result: Option<Vec<LinkStat>>,
    #[serde(default)]
    results: Option<Vec<LinkStat>>,
    #[serde(default)]
    total_clicks: Option<u64>,
    #[serde(rename = "_metadata", default)]
    metadata: PageMetadata,
}

impl From<LinkStatsPageWire> for LinkStatsPage {
    fn from(wire: LinkStatsPageWire) -> Self {
        LinkStatsPage {
            results: wire.result.or(wire.results).unwrap_or_default(),
            total_clicks: wire.total_clicks,
            metadata: wire.metadata,
        }
    }
}

/// The statistics resource.
pub struct Stats<'a> {
    client: &'a Client,
}

impl<'a> Stats<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches delivery and engagement stats for one single send.
    pub async fn single_send(
        &self,
        id: &str,
        params: &StatsParams,
    ) -> Result<Outcome<Page<SingleSendStat>>> {
        let query = params.to_query()?;
        let path = format!("/v3/marketing/stats/singlesends/{}", id);
        let raw = self
            .client
            .request(Method::GET, &path, query.pairs(), NO_BODY)
            .await?;
        cast::list(raw)
    }

    /// Fetches per-link click stats for one single send.
    pub async fn single_send_links(
        &self,
        id: &str,
        params: &StatsParams,
    ) -> Result<Outcome<LinkStatsPage>> {
        let query = params.to_query()?;
        let path = format!("/v3/marketing/stats/singlesends/{}/links", id);
        let raw = self
            .client
            .request(Method::GET, &path, query.pairs(), NO_BODY)
            .await?;
        cast::single(raw)
    }
}
