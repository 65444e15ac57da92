//! Data model for projects, indicators and their cost structures.
//!
//! Records arrive from the storage layer and are read-only to the ROI
//! engine. Field names serialize in camelCase; the Portuguese field names of
//! the legacy dashboard storage are accepted as aliases. All numeric fields
//! deserialize through [`coerce`], so incomplete records load with zeros in
//! place of missing or malformed values.

pub mod coerce;
pub mod errors;

use coerce::Tagged;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub use errors::{Error, Result};

macro_rules! tagged_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                    coerce::tag(deserializer)
                }
            }
        )*
    };
}

/// Kind of business effect an indicator measures. Selects the valuation formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    #[default]
    Productivity,
    AnalyticCapability,
    RevenueIncrement,
    MarginImprovement,
    RiskReduction,
    DecisionQuality,
    Velocity,
    Satisfaction,
    /// Tag not recognized by this version; values to zero.
    Unknown,
}

impl IndicatorType {
    pub const ALL: [IndicatorType; 8] = [
        IndicatorType::Productivity,
        IndicatorType::AnalyticCapability,
        IndicatorType::RevenueIncrement,
        IndicatorType::MarginImprovement,
        IndicatorType::RiskReduction,
        IndicatorType::DecisionQuality,
        IndicatorType::Velocity,
        IndicatorType::Satisfaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorType::Productivity => "productivity",
            IndicatorType::AnalyticCapability => "analytic_capability",
            IndicatorType::RevenueIncrement => "revenue_increment",
            IndicatorType::MarginImprovement => "margin_improvement",
            IndicatorType::RiskReduction => "risk_reduction",
            IndicatorType::DecisionQuality => "decision_quality",
            IndicatorType::Velocity => "velocity",
            IndicatorType::Satisfaction => "satisfaction",
            IndicatorType::Unknown => "unknown",
        }
    }
}

impl Tagged for IndicatorType {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "productivity" | "produtividade" => IndicatorType::Productivity,
            "analytic_capability" | "capacidade_analitica" => IndicatorType::AnalyticCapability,
            "revenue_increment" | "incremento_receita" => IndicatorType::RevenueIncrement,
            "margin_improvement" | "melhoria_margem" => IndicatorType::MarginImprovement,
            "risk_reduction" | "reducao_risco" => IndicatorType::RiskReduction,
            "decision_quality" | "qualidade_decisao" => IndicatorType::DecisionQuality,
            "velocity" | "velocidade" => IndicatorType::Velocity,
            "satisfaction" | "satisfacao" => IndicatorType::Satisfaction,
            _ => IndicatorType::Unknown,
        }
    }

    fn unrecognized() -> Self {
        IndicatorType::Unknown
    }

    fn missing() -> Self {
        IndicatorType::Productivity
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurrence period of a frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Year,
    Unknown,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::Unknown => "unknown",
        }
    }
}

impl Tagged for Period {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "day" | "dia" => Period::Day,
            "week" | "semana" => Period::Week,
            "month" | "mes" | "mês" => Period::Month,
            "year" | "ano" => Period::Year,
            _ => Period::Unknown,
        }
    }

    fn unrecognized() -> Self {
        Period::Unknown
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often something happens: `count` times per `period`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frequency {
    #[serde(default = "default_count", alias = "quantidade", deserialize_with = "coerce::count")]
    pub count: u32,
    #[serde(default, alias = "periodo")]
    pub period: Period,
}

fn default_count() -> u32 {
    1
}

impl Frequency {
    pub fn new(count: u32, period: Period) -> Self {
        Self { count, period }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::new(1, Period::Month)
    }
}

/// Whether an additional cost is paid once or repeatedly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    #[default]
    OneTime,
    Recurring,
    /// Contributes to neither the one-time nor the recurring total.
    Unknown,
}

impl Tagged for CostKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "one_time" | "unico" | "único" => CostKind::OneTime,
            "recurring" | "recorrente" => CostKind::Recurring,
            _ => CostKind::Unknown,
        }
    }

    fn unrecognized() -> Self {
        CostKind::Unknown
    }
}

/// Billing period of a recurring cost. Anything but `year` bills monthly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    #[default]
    Month,
    Year,
}

impl Tagged for BillingPeriod {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "year" | "ano" => BillingPeriod::Year,
            _ => BillingPeriod::Month,
        }
    }

    fn unrecognized() -> Self {
        BillingPeriod::Month
    }
}

/// Descriptive category of an additional cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    #[default]
    Implementation,
    License,
    Api,
    Infrastructure,
    Training,
    Consulting,
    Maintenance,
    Support,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 9] = [
        CostCategory::Implementation,
        CostCategory::License,
        CostCategory::Api,
        CostCategory::Infrastructure,
        CostCategory::Training,
        CostCategory::Consulting,
        CostCategory::Maintenance,
        CostCategory::Support,
        CostCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::Implementation => "implementation",
            CostCategory::License => "license",
            CostCategory::Api => "api",
            CostCategory::Infrastructure => "infrastructure",
            CostCategory::Training => "training",
            CostCategory::Consulting => "consulting",
            CostCategory::Maintenance => "maintenance",
            CostCategory::Support => "support",
            CostCategory::Other => "other",
        }
    }
}

impl Tagged for CostCategory {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "implementation" | "implementacao" => CostCategory::Implementation,
            "license" | "licenca" => CostCategory::License,
            "api" => CostCategory::Api,
            "infrastructure" | "infraestrutura" => CostCategory::Infrastructure,
            "training" | "treinamento" => CostCategory::Training,
            "consulting" | "consultoria" => CostCategory::Consulting,
            "maintenance" | "manutencao" => CostCategory::Maintenance,
            "support" | "suporte" => CostCategory::Support,
            _ => CostCategory::Other,
        }
    }

    fn unrecognized() -> Self {
        CostCategory::Other
    }
}

tagged_deserialize!(IndicatorType, Period, CostKind, BillingPeriod, CostCategory);

/// "Before" measurements of an indicator. Only the fields relevant to the
/// indicator's type are read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    #[serde(default, alias = "tempoAntes", deserialize_with = "coerce::number")]
    pub time_before_minutes: f64,
    #[serde(default, alias = "custoHora", deserialize_with = "coerce::number")]
    pub hourly_rate: f64,
    #[serde(default, alias = "valorDecisao", deserialize_with = "coerce::number")]
    pub decision_value: f64,
    #[serde(default, alias = "taxaAcerto", deserialize_with = "coerce::number")]
    pub hit_rate_before: f64,
    #[serde(default, alias = "receitaBase", deserialize_with = "coerce::number")]
    pub base_revenue: f64,
    #[serde(default, alias = "margemAntiga", deserialize_with = "coerce::number")]
    pub old_margin_pct: f64,
    #[serde(default, deserialize_with = "coerce::number")]
    pub volume: f64,
    #[serde(default, alias = "probabilidade", deserialize_with = "coerce::number")]
    pub risk_probability_before: f64,
    #[serde(default, alias = "impactoEvitado", deserialize_with = "coerce::number")]
    pub impact_if_occurred: f64,
    #[serde(default, alias = "scoreAntes", deserialize_with = "coerce::number")]
    pub score_before: f64,
    #[serde(default, alias = "tempoEntregaAntes", deserialize_with = "coerce::number")]
    pub delivery_time_before_days: f64,
}

/// One extra cost line attached to an indicator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCost {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(default, alias = "nome", deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, alias = "valor", deserialize_with = "coerce::number")]
    pub amount: f64,
    /// A line without a kind counts toward neither cost total.
    #[serde(default = "unknown_kind", alias = "tipo")]
    pub kind: CostKind,
    /// Only meaningful for recurring costs.
    #[serde(default, alias = "periodo")]
    pub recurring_period: BillingPeriod,
    #[serde(default, alias = "categoria")]
    pub category: CostCategory,
}

fn unknown_kind() -> CostKind {
    CostKind::Unknown
}

impl AdditionalCost {
    pub fn one_time(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            kind: CostKind::OneTime,
            ..Self::default()
        }
    }

    pub fn recurring(name: impl Into<String>, amount: f64, period: BillingPeriod) -> Self {
        Self {
            name: name.into(),
            amount,
            kind: CostKind::Recurring,
            recurring_period: period,
            ..Self::default()
        }
    }
}

/// A person still performing part of the process after automation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCost {
    #[serde(default, alias = "tempoExecucao", deserialize_with = "coerce::number")]
    pub execution_time_minutes: f64,
    #[serde(default, alias = "valorHora", deserialize_with = "coerce::number")]
    pub hourly_rate: f64,
    #[serde(default, alias = "frequencia", deserialize_with = "coerce::or_default")]
    pub frequency: Option<Frequency>,
}

/// "After" measurements plus every cost of running the automated process.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithAi {
    #[serde(default, alias = "tempoDepois", deserialize_with = "coerce::number")]
    pub time_after_minutes: f64,
    #[serde(default, alias = "taxaAcerto", deserialize_with = "coerce::number")]
    pub hit_rate_after: f64,
    #[serde(default, alias = "receitaNova", deserialize_with = "coerce::number")]
    pub new_revenue: f64,
    #[serde(default, alias = "margemNova", deserialize_with = "coerce::number")]
    pub new_margin_pct: f64,
    #[serde(default, alias = "probabilidade", deserialize_with = "coerce::number")]
    pub risk_probability_after: f64,
    #[serde(default, alias = "scoreDepois", deserialize_with = "coerce::number")]
    pub score_after: f64,
    #[serde(default, alias = "tempoEntregaDepois", deserialize_with = "coerce::number")]
    pub delivery_time_after_days: f64,

    #[serde(default, alias = "custoImplementacao", deserialize_with = "coerce::number")]
    pub implementation_cost: f64,
    #[serde(default, alias = "custoMensalFerramentas", deserialize_with = "coerce::number")]
    pub monthly_tooling_cost: f64,
    #[serde(default, alias = "custoMensalManutencao", deserialize_with = "coerce::number")]
    pub monthly_maintenance_cost: f64,
    #[serde(default, alias = "custosAdicionais", deserialize_with = "coerce::or_default")]
    pub additional_costs: Vec<AdditionalCost>,
    #[serde(default, alias = "temPessoasComIA", deserialize_with = "coerce::flag")]
    pub has_staff_involved: bool,
    #[serde(default, alias = "pessoasComIA", deserialize_with = "coerce::or_default")]
    pub staff: Vec<StaffCost>,
}

/// A single measured business effect within a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(default, alias = "projetoId", deserialize_with = "coerce::text")]
    pub project_id: String,
    #[serde(default, alias = "nome", deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, alias = "descricao", deserialize_with = "coerce::text")]
    pub description: String,
    #[serde(default, alias = "tipoIndicador")]
    pub indicator_type: IndicatorType,
    #[serde(default, alias = "frequencia", deserialize_with = "coerce::or_default")]
    pub frequency: Option<Frequency>,
    #[serde(default, deserialize_with = "coerce::or_default")]
    pub baseline: Baseline,
    #[serde(
        default,
        rename = "withAI",
        alias = "comIA",
        deserialize_with = "coerce::or_default"
    )]
    pub with_ai: WithAi,
}

impl Indicator {
    pub fn new(id: impl Into<String>, name: impl Into<String>, indicator_type: IndicatorType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            indicator_type,
            ..Self::default()
        }
    }
}

/// A group of indicators evaluated together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(default, alias = "nome", deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub area: String,
    #[serde(default, alias = "descricao", deserialize_with = "coerce::text")]
    pub description: String,
}

/// Read-only snapshot of projects and their indicators.
///
/// The top-level lists are strict: an entry that is not a record is a load
/// error rather than an empty list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default, alias = "projetos", deserialize_with = "coerce::null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, alias = "indicadores", deserialize_with = "coerce::null_as_default")]
    pub indicators: Vec<Indicator>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.indicators.is_empty()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn indicator(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// Indicators owned by `project_id`, in stored order.
    pub fn indicators_for(&self, project_id: &str) -> Vec<Indicator> {
        self.indicators
            .iter()
            .filter(|i| i.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Indicators whose project id matches no known project.
    pub fn unassigned_indicators(&self) -> Vec<Indicator> {
        self.indicators
            .iter()
            .filter(|i| self.project(&i.project_id).is_none())
            .cloned()
            .collect()
    }
}
