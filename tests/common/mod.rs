// Shared fixtures for roimap integration tests
#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use indoc::indoc;
use roimap::{AdditionalCost, Baseline, Frequency, Indicator, IndicatorType, Period, WithAi};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two projects, three assigned indicators and one orphan, in the camelCase shape.
pub const PORTFOLIO_JSON: &str = indoc! {r#"
    {
      "projects": [
        {"id": "p1", "name": "Back office", "area": "Finance"},
        {"id": "p2", "name": "Customer care", "area": "CX"}
      ],
      "indicators": [
        {
          "id": "invoices",
          "projectId": "p1",
          "name": "Invoice triage",
          "indicatorType": "productivity",
          "frequency": {"count": 1, "period": "month"},
          "baseline": {"timeBeforeMinutes": 60, "hourlyRate": 50},
          "withAI": {"timeAfterMinutes": 15, "implementationCost": 1000}
        },
        {
          "id": "upsell",
          "projectId": "p1",
          "name": "Upsell suggestions",
          "indicatorType": "revenue_increment",
          "baseline": {"baseRevenue": 10000},
          "withAI": {"newRevenue": 10300, "implementationCost": 800}
        },
        {
          "id": "nps",
          "projectId": "p2",
          "name": "Support NPS",
          "indicatorType": "satisfaction",
          "baseline": {"scoreBefore": "40"},
          "withAI": {"scoreAfter": 45}
        },
        {
          "id": "orphan",
          "projectId": "deleted",
          "name": "Leftover",
          "indicatorType": "velocity",
          "baseline": {"deliveryTimeBeforeDays": 10},
          "withAI": {"deliveryTimeAfterDays": 8}
        }
      ]
    }
"#};

/// The same kind of data as exported by the legacy dashboard store.
pub const LEGACY_STORE_JSON: &str = indoc! {r#"
    {
      "state": {
        "projetos": [{"id": "p1", "nome": "Financeiro", "area": "Finance"}],
        "indicadores": [
          {
            "id": "i1",
            "projetoId": "p1",
            "nome": "Conciliacao",
            "tipoIndicador": "produtividade",
            "frequencia": {"quantidade": 2, "periodo": "dia"},
            "baseline": {"tempoAntes": 30, "custoHora": 60},
            "comIA": {
              "tempoDepois": 10,
              "custoImplementacao": 2000,
              "custoMensalFerramentas": 100,
              "custosAdicionais": [
                {"id": "c1", "nome": "Licenca", "valor": 1200, "tipo": "recorrente", "periodo": "ano"}
              ]
            }
          }
        ]
      },
      "version": 0
    }
"#};

pub fn productivity(id: &str, project_id: &str, before: f64, after: f64, rate: f64) -> Indicator {
    Indicator {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: id.to_string(),
        indicator_type: IndicatorType::Productivity,
        frequency: Some(Frequency::new(1, Period::Month)),
        baseline: Baseline {
            time_before_minutes: before,
            hourly_rate: rate,
            ..Baseline::default()
        },
        with_ai: WithAi {
            time_after_minutes: after,
            ..WithAi::default()
        },
        ..Indicator::default()
    }
}

pub fn with_costs(mut indicator: Indicator, implementation: f64, monthly_tooling: f64) -> Indicator {
    indicator.with_ai.implementation_cost = implementation;
    indicator.with_ai.monthly_tooling_cost = monthly_tooling;
    indicator
}

pub fn with_additional(mut indicator: Indicator, cost: AdditionalCost) -> Indicator {
    indicator.with_ai.additional_costs.push(cost);
    indicator
}

/// Isolated working directory and config home for running the binary.
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        fs::create_dir_all(tmp.path().join("home")).expect("create isolated home");
        fs::create_dir_all(tmp.path().join("work")).expect("create work dir");
        Self { tmp }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.tmp.path().join("work")
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn cmd(&self) -> Command {
        let home = self.tmp.path().join("home");
        let mut cmd = cargo_bin_cmd!("roimap");
        cmd.current_dir(self.work_dir())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("ROIMAP_CONFIG")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
