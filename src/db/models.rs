// Data models: survey rows and the columns the analysis reads.
//
// Kept separate from the queries so other modules can use them without
// depending on rusqlite directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored survey response. `id` is the SQLite rowid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: i64,
    pub escala_6x1: Option<String>,
    pub impacto_vida_familiar: Option<String>,
    pub impacto_saude_fisica: Option<String>,
    pub impacto_saude_mental: Option<String>,
    pub impactos: Option<String>,
}

/// A survey response about to be inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurveyResponse {
    pub escala_6x1: Option<String>,
    pub impacto_vida_familiar: Option<String>,
    pub impacto_saude_fisica: Option<String>,
    pub impacto_saude_mental: Option<String>,
    pub impactos: Option<String>,
}

/// Columns of the survey table, named as in the imported spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyColumn {
    Escala6x1,
    ImpactoVidaFamiliar,
    ImpactoSaudeFisica,
    ImpactoSaudeMental,
    Impactos,
}

impl SurveyColumn {
    pub const ALL: [SurveyColumn; 5] = [
        SurveyColumn::Escala6x1,
        SurveyColumn::ImpactoVidaFamiliar,
        SurveyColumn::ImpactoSaudeFisica,
        SurveyColumn::ImpactoSaudeMental,
        SurveyColumn::Impactos,
    ];

    /// The SQL column name. Only these static names ever reach a query.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyColumn::Escala6x1 => "Escala6x1",
            SurveyColumn::ImpactoVidaFamiliar => "ImpactoVidaFamiliar",
            SurveyColumn::ImpactoSaudeFisica => "ImpactoSaudeFisica",
            SurveyColumn::ImpactoSaudeMental => "ImpactoSaudeMental",
            SurveyColumn::Impactos => "Impactos",
        }
    }
}

impl fmt::Display for SurveyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three Likert-scale impact questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LikertColumn {
    /// Impact on family life
    Family,
    /// Impact on physical health
    Physical,
    /// Impact on mental health
    Mental,
}

impl LikertColumn {
    pub const ALL: [LikertColumn; 3] = [
        LikertColumn::Family,
        LikertColumn::Physical,
        LikertColumn::Mental,
    ];

    pub fn column(&self) -> SurveyColumn {
        match self {
            LikertColumn::Family => SurveyColumn::ImpactoVidaFamiliar,
            LikertColumn::Physical => SurveyColumn::ImpactoSaudeFisica,
            LikertColumn::Mental => SurveyColumn::ImpactoSaudeMental,
        }
    }

    /// Chart title used by the dashboard.
    pub fn title(&self) -> &'static str {
        match self {
            LikertColumn::Family => "Impacto na Vida Familiar",
            LikertColumn::Physical => "Impacto na Saúde Física",
            LikertColumn::Mental => "Impacto na Saúde Mental",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LikertColumn::Family => "family",
            LikertColumn::Physical => "physical",
            LikertColumn::Mental => "mental",
        }
    }
}

impl FromStr for LikertColumn {
    type Err = anyhow::Error;

    /// Accepts the short English names, the Portuguese names, or the raw
    /// column names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "family" | "familia" | "família" | "impactovidafamiliar" => Ok(LikertColumn::Family),
            "physical" | "fisica" | "física" | "impactosaudefisica" => Ok(LikertColumn::Physical),
            "mental" | "impactosaudemental" => Ok(LikertColumn::Mental),
            other => anyhow::bail!(
                "Unknown impact column {other:?} (expected family, physical or mental)"
            ),
        }
    }
}
